//! tabrail core
//!
//! Coordination layer for the tab strip: owns the group collection, the
//! drag gesture controller, and the strip geometry, and exposes the
//! pointer-event interface plus the scriptable query/command surface.
//! Everything runs synchronously on the caller's thread; collaborators
//! observe changes by draining the event queue.

mod config;
mod error;
mod strip;

pub use config::Config;
pub use error::CoreError;
pub use strip::{StripGeometry, TabStrip};

// Re-export core components
pub use tabrail_layout::{GroupEntry, Layout, LayoutError, SessionSpawner, TabEntry, AUTO_TITLE};
pub use tabrail_reorder::{
    Button, Click, DragController, DropMark, Insertion, Point, Row, StripMetrics,
    DRAG_START_DISTANCE,
};
pub use tabrail_tabs::{
    Direction, Group, GroupCollection, SessionId, Tab, TabError, TabEvent, INVALID_SESSION_ID,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
