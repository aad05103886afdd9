//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Tab error: {0}")]
    Tab(#[from] tabrail_tabs::TabError),

    #[error("Layout error: {0}")]
    Layout(#[from] tabrail_layout::LayoutError),
}
