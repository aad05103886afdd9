//! Layout error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Layout file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Layout parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Tab error: {0}")]
    Tab(#[from] tabrail_tabs::TabError),
}
