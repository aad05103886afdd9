//! tabrail tab management
//!
//! An ordered collection of terminal sessions ("tabs") partitioned into
//! ordered groups. The collection owns all selection state: which group is
//! active and which session is globally selected. Mutations emit events
//! into a queue drained by collaborators (renderer, session manager).

mod collection;
mod error;
mod event;
mod group;
mod tab;
mod titles;

pub use collection::{Direction, GroupCollection};
pub use error::TabError;
pub use event::TabEvent;
pub use group::Group;
pub use tab::Tab;

/// Opaque session identifier allocated by the external session manager.
pub type SessionId = i32;

/// Sentinel returned by the scriptable surface when no session matches.
pub const INVALID_SESSION_ID: SessionId = -1;

pub type Result<T> = std::result::Result<T, TabError>;
