// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::{
    config::options::{parse_date, ModelSource, PipelineOptions},
    csv::{rows_to_string, Delim},
    data,
    model::{Candidate, DateRange},
    pipeline::{self, PipelineRun},
    progress::StderrProgress,
    scrape::SnscrapeCli,
    sentiment::LexiconLoader,
    store::DataSet,
};

/// What the CLI was asked to do.
#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    pub pipeline: PipelineOptions,
    pub format: Delim,
    pub show_posts: bool,
    pub help: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            pipeline: PipelineOptions::default(),
            format: Delim::Csv,
            show_posts: false,
            help: false,
        }
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_args(env::args().skip(1))?;
    if params.help {
        eprintln!("{}", include_str!("cli_help.txt"));
        return Ok(());
    }

    logf!("CLI: start real_mode={} candidates={}",
        params.pipeline.source.real_mode,
        params.pipeline.source.candidates.len()
    );

    let scraper = SnscrapeCli::default();
    let loader = LexiconLoader::new(params.pipeline.classifier.model.clone());
    let mut progress = StderrProgress;

    let run = pipeline::run(&params.pipeline, &scraper, &loader, Some(&mut progress));
    print!("{}", render_report(&run, &params));
    Ok(())
}

pub fn parse_args<I>(args: I) -> Result<Params, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::default();
    let mut candidates: Vec<Candidate> = Vec::new();
    let mut start = params.pipeline.source.range.start;
    let mut end = params.pipeline.source.range.end;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        let src = &mut params.pipeline.source;
        match a.as_str()
        {
            "--real" => src.real_mode = true,
            "--count" => {
                let v = args.next().ok_or("Missing value for --count")?;
                src.synthetic_count = v.parse()?; }
            "--cap" => {
                let v = args.next().ok_or("Missing value for --cap")?;
                src.fetch_cap = v.parse()?; }
            "--from" => start = parse_date(&args.next().ok_or("Missing value for --from")?)?,
            "--to" => end = parse_date(&args.next().ok_or("Missing value for --to")?)?,
            "--lang" => src.language = args.next().ok_or("Missing value for --lang")?,
            "--candidate" | "-c" => {
                let v = args.next().ok_or("Missing value for --candidate")?;
                let v = v.trim();
                if v.is_empty() { return Err("Empty candidate name".into()); }
                let c = Candidate::new(v);
                if !candidates.contains(&c) { candidates.push(c); } }
            "--lexicon" => {
                let v = args.next().ok_or("Missing value for --lexicon")?;
                params.pipeline.classifier.model = ModelSource::LexiconFile(PathBuf::from(v)); }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = Delim::parse(&v).ok_or_else(|| format!("Unknown format: {}", v))?; }
            "--posts" => params.show_posts = true,
            "-h" | "--help" => params.help = true,
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    params.pipeline.source.range = DateRange::new(start, end)?;
    if !candidates.is_empty() {
        params.pipeline.source.candidates = candidates;
    }
    Ok(params)
}

fn section(out: &mut String, title: &str, ds: &DataSet, delim: Delim) {
    out.push_str(&join!("# ", title, "\n"));
    out.push_str(&rows_to_string(&ds.headers, &ds.rows, delim));
    out.push('\n');
}

pub fn render_report(run: &PipelineRun, params: &Params) -> String {
    if run.is_empty() {
        return s!("No data: nothing to display.\n");
    }

    let agg = &run.aggregates;
    let mut out = s!();
    section(&mut out, "Balance by candidate", &data::balance(agg), params.format);
    section(&mut out, "Trend by date", &data::trend(agg), params.format);
    for cand in agg.per_candidate.keys() {
        section(&mut out, &join!("Breakdown: ", cand.name()), &data::breakdown(agg, cand), params.format);
    }
    if params.show_posts {
        section(&mut out, "Posts", &data::posts(&run.records), params.format);
    }
    out.push_str(&format!("{} posts analysed ({} data)\n", run.records.len(), run.origin.label()));
    out
}
