// src/gui/pages/posts.rs
use crate::{
    config::state::{GuiState, PageKind},
    data,
    pipeline::PipelineRun,
    store::DataSet,
};

use super::Page;

pub struct PostsPage;
pub static PAGE: PostsPage = PostsPage;

impl Page for PostsPage {
    fn title(&self) -> &'static str { "Posts" }
    fn kind(&self) -> PageKind { PageKind::Posts }

    fn numeric_columns(&self) -> &'static [usize] { &[2, 4, 5] }
    fn preferred_column_widths(&self) -> Option<&'static [f32]> {
        Some(&[90.0, 180.0, 80.0, 50.0, 50.0, 80.0, 420.0, 300.0])
    }

    fn view(&self, run: &PipelineRun, _gui: &GuiState) -> DataSet {
        data::posts(&run.records)
    }
}
