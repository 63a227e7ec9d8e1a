// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.

mod copy;    // src/gui/actions/copy.rs

pub use copy::{copy, view_text};
