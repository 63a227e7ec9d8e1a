// src/core/mod.rs

pub mod quiet;
pub mod sanitize;
pub mod stopwords;
pub mod tokenize;
