// src/text.rs
//
// Text normalizer: lowercase → tokenize → drop stopwords and tokens that are
// not purely alphanumeric → join with single spaces.
//
// Contract: never panics. If the tokenizer is unavailable, the input comes
// back unchanged.

use std::collections::HashSet;

use crate::core::{stopwords, tokenize::{tokenize, Tokenizer}};

pub struct Normalizer {
    stopwords: HashSet<String>,
    tokenizer: Tokenizer,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::spanish()
    }
}

impl Normalizer {
    pub fn spanish() -> Self {
        Self::with_stopwords(stopwords::SPANISH.iter().copied())
    }

    pub fn with_stopwords<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            stopwords: words.into_iter().map(|w| w.to_lowercase()).collect(),
            tokenizer: tokenize,
        }
    }

    /// Swap the regex tokenizer for another one.
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn normalize(&self, text: &str) -> String {
        let lower = text.to_lowercase();
        let tokens = match (self.tokenizer)(&lower) {
            Ok(t) => t,
            Err(e) => {
                logd!("Normalize: {}; keeping original text", e);
                return text.to_string();
            }
        };

        tokens
            .into_iter()
            .filter(|w| is_alnum(w) && !self.stopwords.contains(*w))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Non-empty and every char alphanumeric (Unicode-aware).
fn is_alnum(w: &str) -> bool {
    !w.is_empty() && w.chars().all(char::is_alphanumeric)
}

/// Normalize with the default Spanish stopword list.
pub fn normalize(text: &str) -> String {
    Normalizer::spanish().normalize(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tokenize::TokenizeError;

    #[test]
    fn empty_stays_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("  \n "), "");
    }

    #[test]
    fn strips_stopwords_and_punctuation() {
        assert_eq!(
            normalize("Es el mejor candidato para el país, tiene mi voto. (Sergio Fajardo)"),
            "mejor candidato país voto sergio fajardo"
        );
        assert_eq!(
            normalize("Totalmente en contra de sus políticas corruptas."),
            "totalmente políticas corruptas"
        );
    }

    #[test]
    fn drops_joined_tokens() {
        // "50.000" and "e-mail" are single tokens that are not alphanumeric.
        assert_eq!(normalize("Más de 50.000 firmas por e-mail"), "firmas");
    }

    #[test]
    fn comma_without_space_keeps_both_words() {
        assert_eq!(normalize("excelente,honesto"), "excelente honesto");
        assert_eq!(normalize("pésimo,mentiroso y corrupto"), "pésimo mentiroso corrupto");
        assert_eq!(normalize("subió 3,5 puntos"), "subió puntos");
    }

    #[test]
    fn failing_tokenizer_returns_input_unchanged() {
        fn broken(_: &str) -> Result<Vec<&str>, TokenizeError> {
            Err(TokenizeError::new("no regex engine"))
        }
        let n = Normalizer::spanish().with_tokenizer(broken);
        assert_eq!(n.normalize("Es el MEJOR, sin duda."), "Es el MEJOR, sin duda.");
    }

    #[test]
    fn custom_stopwords() {
        let n = Normalizer::with_stopwords(["HOLA"]);
        assert_eq!(n.normalize("Hola mundo!"), "mundo");
    }
}
