// src/gui/components/mod.rs
pub mod candidate_panel;
pub mod charts;
pub mod data_table;
pub mod tabs;
pub mod toolbar;
