//! tabrail layout bridge
//!
//! Translates a persisted layout description into group collection state on
//! startup, and snapshots the live collection back into that shape. Session
//! creation is delegated to the host through [`SessionSpawner`]; a missing
//! or unreadable layout degrades to a single default tab.

mod error;
mod layout;
mod restore;

pub use error::LayoutError;
pub use layout::{GroupEntry, Layout, TabEntry, AUTO_TITLE};
pub use restore::{restore, snapshot, SessionSpawner};

pub type Result<T> = std::result::Result<T, LayoutError>;
