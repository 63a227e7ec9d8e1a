// src/pipeline.rs
//
// One batch run: acquire → normalize → classify → aggregate.
//
//   Init → Acquiring → (Fallback)? → Normalizing → Classifying → Aggregating → Ready
//
// Ready with an empty table is a normal outcome ("nothing to display").
// The only way to get there early is a model that fails to load.

use crate::{
    aggregate::{aggregate, Aggregates},
    config::options::PipelineOptions,
    core::quiet::quietly,
    model::{DataOrigin, EnrichedRecord},
    progress::Progress,
    scrape::{self, PostScraper},
    sentiment::{Classifier, ModelLoader},
    text::Normalizer,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Init,
    Acquiring,
    Fallback,
    Normalizing,
    Classifying,
    Aggregating,
    Ready,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Stage::Init => "init",
            Stage::Acquiring => "acquiring",
            Stage::Fallback => "fallback",
            Stage::Normalizing => "normalizing",
            Stage::Classifying => "classifying",
            Stage::Aggregating => "aggregating",
            Stage::Ready => "ready",
        }
    }
}

/// Result of one run. Lives for the process only.
#[derive(Clone, Debug)]
pub struct PipelineRun {
    pub origin: DataOrigin,
    pub records: Vec<EnrichedRecord>,
    pub aggregates: Aggregates,
}

impl PipelineRun {
    pub fn empty(origin: DataOrigin) -> Self {
        Self { origin, records: Vec::new(), aggregates: Aggregates::default() }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn enter(stage: Stage, progress: &mut Option<&mut dyn Progress>) {
    logf!("Pipeline: stage {}", stage.label());
    if let Some(p) = progress.as_deref_mut() {
        p.stage(stage);
    }
}

pub fn run(
    opts: &PipelineOptions,
    scraper: &dyn PostScraper,
    loader: &dyn ModelLoader,
    mut progress: Option<&mut dyn Progress>,
) -> PipelineRun {
    enter(Stage::Init, &mut progress);

    enter(Stage::Acquiring, &mut progress);
    let acquired = scrape::fetch(scraper, &opts.source, crate::progress::reborrow(&mut progress));
    logf!("Pipeline: {} {} records", acquired.records.len(), acquired.origin.label());

    // The model handle only lives for this run.
    let classifier = match Classifier::load(loader, opts.classifier.max_chars) {
        Ok(c) => c,
        Err(e) => {
            loge!("Pipeline: model load failed: {}", e);
            if let Some(p) = progress.as_deref_mut() {
                p.warn(&format!("Could not load sentiment model: {e}"));
            }
            enter(Stage::Ready, &mut progress);
            return PipelineRun::empty(acquired.origin);
        }
    };

    logd!("Pipeline: classifying with '{}'", classifier.model_name());

    enter(Stage::Normalizing, &mut progress);
    let normalizer = Normalizer::spanish();
    let cleaned: Vec<String> = acquired
        .records
        .iter()
        .map(|r| normalizer.normalize(&r.raw_text))
        .collect();

    enter(Stage::Classifying, &mut progress);
    let records: Vec<EnrichedRecord> = quietly(|| {
        acquired
            .records
            .into_iter()
            .zip(cleaned)
            .map(|(rec, clean)| {
                let (label, _) = classifier.classify(&clean);
                EnrichedRecord::new(rec, clean, label)
            })
            .collect()
    });

    enter(Stage::Aggregating, &mut progress);
    let aggregates = aggregate(&records);

    enter(Stage::Ready, &mut progress);
    logf!("Pipeline: done, {} records ready", records.len());
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("{} posts analysed ({})", records.len(), acquired.origin.label()));
    }

    PipelineRun { origin: acquired.origin, records, aggregates }
}
