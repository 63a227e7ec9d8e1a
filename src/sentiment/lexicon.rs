// src/sentiment/lexicon.rs
//
// Built-in model: a Spanish polarity lexicon. Tokens of the input are looked
// up and their weights summed; the sum decides POS / NEG / NEU.
//
// Lexicon files: one `word<whitespace>weight` entry per line, `#` comments,
// blank lines ignored. Any malformed line fails the whole load.

use std::{collections::HashMap, error::Error, fs, path::Path};

use crate::{
    config::{consts::LEXICON_THRESHOLD, options::ModelSource},
    core::tokenize::tokenize,
};
use super::{ModelLoader, Prediction, SentimentModel};

const BUILTIN: &[(&str, f64)] = &[
    // positive
    ("mejor", 0.8), ("bueno", 0.6), ("buena", 0.6), ("buenos", 0.6), ("buenas", 0.6),
    ("excelente", 0.9), ("voto", 0.4), ("apoyo", 0.6), ("apoyamos", 0.6), ("confianza", 0.6),
    ("esperanza", 0.6), ("cambio", 0.3), ("vamos", 0.4), ("fuerza", 0.2), ("interesante", 0.4),
    ("convence", 0.5), ("honesto", 0.7), ("honesta", 0.7), ("líder", 0.5), ("futuro", 0.3),
    ("gracias", 0.5), ("orgullo", 0.6), ("ganar", 0.5), ("ganará", 0.6), ("victoria", 0.6),
    ("propuestas", 0.2), ("seguridad", 0.2), ("progreso", 0.5), ("presidente", 0.2),
    ("necesitamos", 0.2), ("genial", 0.8), ("admiro", 0.7), ("respeto", 0.5),
    // negative
    ("peor", -0.8), ("malo", -0.6), ("mala", -0.6), ("malos", -0.6), ("desastre", -0.9),
    ("corrupto", -0.9), ("corrupta", -0.9), ("corruptos", -0.9), ("corruptas", -0.9),
    ("corrupción", -0.8), ("mentiroso", -0.8), ("mentira", -0.7), ("mentiras", -0.7),
    ("faltó", -0.4), ("falta", -0.3), ("fracaso", -0.8), ("vergüenza", -0.8), ("miedo", -0.5),
    ("peligro", -0.6), ("peligroso", -0.7), ("odio", -0.9), ("ladrón", -0.9), ("ladrones", -0.9),
    ("terrible", -0.8), ("pésimo", -0.9), ("robo", -0.8), ("crisis", -0.5), ("engaño", -0.7),
    ("populista", -0.4), ("decepción", -0.7), ("triste", -0.5), ("basura", -0.9),
];

pub struct LexiconModel {
    name: String,
    weights: HashMap<String, f64>,
    threshold: f64,
}

impl LexiconModel {
    pub fn builtin() -> Self {
        Self::from_entries("builtin-es", BUILTIN.iter().map(|&(w, s)| (s!(w), s)))
    }

    pub fn from_entries(name: &str, entries: impl IntoIterator<Item = (String, f64)>) -> Self {
        Self {
            name: s!(name),
            weights: entries.into_iter().map(|(w, s)| (w.to_lowercase(), s)).collect(),
            threshold: LEXICON_THRESHOLD,
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("cannot read lexicon {}: {}", path.display(), e))?;
        let entries = parse_lexicon(&text)?;
        Ok(Self::from_entries(&path.display().to_string(), entries))
    }

    pub fn len(&self) -> usize { self.weights.len() }
    pub fn is_empty(&self) -> bool { self.weights.is_empty() }

    /// Summed weight of the known tokens and how many matched.
    pub fn score(&self, text: &str) -> Result<(f64, usize), Box<dyn Error>> {
        let lower = text.to_lowercase();
        let mut sum = 0.0;
        let mut hits = 0;
        for tok in tokenize(&lower)? {
            if let Some(w) = self.weights.get(tok) {
                sum += w;
                hits += 1;
            }
        }
        Ok((sum, hits))
    }
}

impl SentimentModel for LexiconModel {
    fn name(&self) -> &str { &self.name }

    fn predict(&self, text: &str) -> Result<Prediction, Box<dyn Error>> {
        let (sum, hits) = self.score(text)?;
        let strength = sum.abs().tanh();
        let (label, score) = if sum > self.threshold {
            ("POS", strength)
        } else if sum < -self.threshold {
            ("NEG", strength)
        } else if hits == 0 {
            ("NEU", 1.0)
        } else {
            ("NEU", 1.0 - strength)
        };
        Ok(Prediction { label: s!(label), score: score as f32 })
    }
}

/// Parse `word weight` lines.
pub fn parse_lexicon(text: &str) -> Result<Vec<(String, f64)>, Box<dyn Error>> {
    let mut out = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut parts = line.split_whitespace();
        let (Some(word), Some(weight), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(format!("lexicon line {}: expected 'word weight', got '{}'", i + 1, line).into());
        };
        let weight: f64 = weight
            .parse()
            .map_err(|e| format!("lexicon line {}: bad weight '{}': {}", i + 1, weight, e))?;
        if !weight.is_finite() {
            return Err(format!("lexicon line {}: weight must be finite", i + 1).into());
        }
        out.push((s!(word), weight));
    }
    if out.is_empty() {
        return Err("lexicon is empty".into());
    }
    Ok(out)
}

/// Loads a `LexiconModel` from the configured source.
pub struct LexiconLoader {
    pub source: ModelSource,
}

impl LexiconLoader {
    pub fn new(source: ModelSource) -> Self { Self { source } }
}

impl ModelLoader for LexiconLoader {
    fn load(&self) -> Result<Box<dyn SentimentModel>, Box<dyn Error>> {
        let model = match &self.source {
            ModelSource::Builtin => LexiconModel::builtin(),
            ModelSource::LexiconFile(path) => LexiconModel::from_file(path)?,
        };
        logd!("Lexicon: {} entries from '{}'", model.len(), model.name);
        Ok(Box::new(model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::normalize;

    fn label(text: &str) -> String {
        LexiconModel::builtin().predict(&normalize(text)).unwrap().label
    }

    #[test]
    fn templates_get_sensible_labels() {
        assert_eq!(label("Es el mejor candidato para el país, tiene mi voto."), "POS");
        assert_eq!(label("No me convence su propuesta, es un desastre total."), "NEG");
        assert_eq!(label("El debate de ayer estuvo interesante, aunque le faltó fuerza."), "NEU");
        assert_eq!(label("Totalmente en contra de sus políticas corruptas."), "NEG");
        assert_eq!(label("Vamos con toda por el cambio que necesitamos."), "POS");
        assert_eq!(label(""), "NEU");
    }

    #[test]
    fn parse_rejects_malformed_lines() {
        assert!(parse_lexicon("bueno 0.5\nmalo").is_err());
        assert!(parse_lexicon("bueno x").is_err());
        assert!(parse_lexicon("bueno 0.5 extra").is_err());
        assert!(parse_lexicon("# only comments\n\n").is_err());
        assert!(parse_lexicon("bueno NaN").is_err());

        let ok = parse_lexicon("# c\nbueno\t0.5\n\nmalo -0.5\n").unwrap();
        assert_eq!(ok, vec![(s!("bueno"), 0.5), (s!("malo"), -0.5)]);
    }

    #[test]
    fn loader_fails_on_missing_file() {
        let loader = LexiconLoader::new(ModelSource::LexiconFile("no/such/lexicon.tsv".into()));
        assert!(loader.load().is_err());
        assert!(LexiconLoader::new(ModelSource::Builtin).load().is_ok());
    }
}
