// src/sentiment/mod.rs
//
// Classifier adapter around an opaque text → label model.
//
// Two failure modes, handled differently:
// - loading the model fails  → the caller gets an Err and must stop the run;
// - classifying one text fails → (Neutral, 0), never surfaced.

pub mod lexicon;

pub use lexicon::{LexiconLoader, LexiconModel};

use std::{
    error::Error,
    panic::{self, AssertUnwindSafe},
};

use crate::{core::sanitize::truncate_chars, model::SentimentLabel};

/// Raw model output. The score is the model's confidence; the pipeline ignores it.
#[derive(Clone, Debug, PartialEq)]
pub struct Prediction {
    pub label: String,
    pub score: f32,
}

pub trait SentimentModel {
    fn name(&self) -> &str;
    fn predict(&self, text: &str) -> Result<Prediction, Box<dyn Error>>;
}

/// Produces a model handle for one pipeline run.
pub trait ModelLoader {
    fn load(&self) -> Result<Box<dyn SentimentModel>, Box<dyn Error>>;
}

pub struct Classifier {
    model: Box<dyn SentimentModel>,
    max_chars: usize,
}

impl Classifier {
    pub fn new(model: Box<dyn SentimentModel>, max_chars: usize) -> Self {
        Self { model, max_chars }
    }

    /// Load the model through `loader`. An Err here is fatal to the run.
    pub fn load(loader: &dyn ModelLoader, max_chars: usize) -> Result<Self, Box<dyn Error>> {
        let model = loader.load()?;
        logf!("Classifier: loaded model '{}'", model.name());
        Ok(Self::new(model, max_chars))
    }

    pub fn model_name(&self) -> &str { self.model.name() }

    /// Label and polarity for `text`. Only the first `max_chars` characters
    /// reach the model. Never fails: any model error is neutral.
    pub fn classify(&self, text: &str) -> (SentimentLabel, i8) {
        let input = truncate_chars(text, self.max_chars);
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.model.predict(input)));

        let label = match outcome {
            Ok(Ok(pred)) => SentimentLabel::from_model_label(&pred.label),
            Ok(Err(e)) => {
                logd!("Classifier: predict failed ({}); neutral", e);
                SentimentLabel::Neutral
            }
            Err(_) => {
                logd!("Classifier: model panicked; neutral");
                SentimentLabel::Neutral
            }
        };
        (label, label.value())
    }
}
