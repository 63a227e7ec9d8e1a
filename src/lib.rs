// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod data;
pub mod gui;
pub mod model;
pub mod pipeline;
pub mod progress;
pub mod scrape;
pub mod sentiment;
pub mod store;
pub mod text;
