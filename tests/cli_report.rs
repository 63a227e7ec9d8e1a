// tests/cli_report.rs
use candidate_sentiment::cli::{parse_args, render_report, Params};
use candidate_sentiment::config::options::{ModelSource, PipelineOptions};
use candidate_sentiment::csv::Delim;
use candidate_sentiment::model::{Candidate, DataOrigin};
use candidate_sentiment::pipeline::{self, PipelineRun};
use candidate_sentiment::scrape::NoScraper;
use candidate_sentiment::sentiment::LexiconLoader;

fn args(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn defaults_without_flags() {
    let p = parse_args(args(&[])).unwrap();
    assert_eq!(p.pipeline, PipelineOptions::default());
    assert_eq!(p.format, Delim::Csv);
    assert!(!p.show_posts && !p.help);
}

#[test]
fn flags_override_options() {
    let p = parse_args(args(&[
        "--real", "--count", "30", "--cap", "7",
        "--from", "2025-11-01", "--to", "2025-11-03",
        "-c", "Ana", "--candidate", "Beto", "-c", "Ana",
        "--lexicon", "lex.tsv", "--format", "tsv", "--posts",
    ]))
    .unwrap();

    let src = &p.pipeline.source;
    assert!(src.real_mode);
    assert_eq!(src.synthetic_count, 30);
    assert_eq!(src.fetch_cap, 7);
    assert_eq!(src.range.days(), 2);
    assert_eq!(src.candidates, vec![Candidate::new("Ana"), Candidate::new("Beto")]);
    assert_eq!(p.pipeline.classifier.model, ModelSource::LexiconFile("lex.tsv".into()));
    assert_eq!(p.format, Delim::Tsv);
    assert!(p.show_posts);
}

#[test]
fn bad_args_are_errors() {
    assert!(parse_args(args(&["--bogus"])).is_err());
    assert!(parse_args(args(&["--count"])).is_err());
    assert!(parse_args(args(&["--count", "many"])).is_err());
    assert!(parse_args(args(&["--from", "2025-12-05", "--to", "2025-11-15"])).is_err());
    assert!(parse_args(args(&["--format", "xml"])).is_err());
    assert!(parse_args(args(&["-c", "  "])).is_err());
}

#[test]
fn empty_run_prints_no_data() {
    let run = PipelineRun::empty(DataOrigin::Synthetic);
    assert_eq!(render_report(&run, &Params::default()), "No data: nothing to display.\n");
}

#[test]
fn report_lists_every_section() {
    let params = parse_args(args(&["--count", "60"])).unwrap();
    let run = pipeline::run(
        &params.pipeline,
        &NoScraper,
        &LexiconLoader::new(ModelSource::Builtin),
        None,
    );
    let out = render_report(&run, &params);

    assert!(out.starts_with("# Balance by candidate\nCandidate,Net sentiment,Influence,Posts\n"));
    assert!(out.contains("# Trend by date\nDate,Candidate,Net sentiment\n"));
    for cand in run.aggregates.per_candidate.keys() {
        assert!(out.contains(&format!("# Breakdown: {}\nLabel,Count\n", cand)));
    }
    assert!(!out.contains("# Posts"));
    assert!(out.ends_with("60 posts analysed (synthetic data)\n"));
}
