// src/core/tokenize.rs
//
// Word-boundary tokenizer. Numbers keep inner '.' and ',' ("50.000", "3,5");
// words keep inner '.', apostrophes and hyphens ("e-mail", "d'Artagnan").
// A comma between words splits them. Runs of punctuation/symbols are their
// own tokens.

use std::{fmt, sync::LazyLock};

use regex::Regex;

static WORD_RE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"\d+(?:[.,]\d+)+|\w+(?:[.'’\-]\w+)*|[^\w\s]+"));

#[derive(Debug)]
pub struct TokenizeError(String);

impl TokenizeError {
    pub fn new(msg: impl Into<String>) -> Self { Self(msg.into()) }
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tokenizer unavailable: {}", self.0)
    }
}

impl std::error::Error for TokenizeError {}

/// Signature shared by tokenizers the normalizer can run.
pub type Tokenizer = fn(&str) -> Result<Vec<&str>, TokenizeError>;

pub fn tokenize(text: &str) -> Result<Vec<&str>, TokenizeError> {
    let re = WORD_RE.as_ref().map_err(|e| TokenizeError::new(e.to_string()))?;
    Ok(re.find_iter(text).map(|m| m.as_str()).collect())
}

#[cfg(test)]
mod tests {
    use super::tokenize;

    #[test]
    fn splits_words_and_punctuation() {
        let t = tokenize("Es el mejor, ¡tiene mi voto!").unwrap();
        assert_eq!(t, vec!["Es", "el", "mejor", ",", "¡", "tiene", "mi", "voto", "!"]);
    }

    #[test]
    fn keeps_joined_words_whole() {
        let t = tokenize("Más de 50.000 votos (Fajardo) #cambio").unwrap();
        assert_eq!(t, vec!["Más", "de", "50.000", "votos", "(", "Fajardo", ")", "#", "cambio"]);
    }

    #[test]
    fn comma_splits_words_but_not_numbers() {
        let t = tokenize("excelente,honesto 3,5 millones").unwrap();
        assert_eq!(t, vec!["excelente", ",", "honesto", "3,5", "millones"]);
    }

    #[test]
    fn empty_input() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("   ").unwrap().is_empty());
    }
}
