//! Tab error types

use thiserror::Error;

use crate::SessionId;

#[derive(Error, Debug)]
pub enum TabError {
    #[error("Unknown session: {0}")]
    UnknownSession(SessionId),

    #[error("Session {0} already has a tab")]
    DuplicateSession(SessionId),

    #[error("Group index out of range: {0}")]
    GroupIndexOutOfRange(usize),

    #[error("Tab index out of range: {0}")]
    TabIndexOutOfRange(usize),

    #[error("Group {0} is locked")]
    GroupLocked(usize),

    #[error("Cannot close the last group")]
    LastGroup,

    #[error("No session is selected")]
    NoSelection,

    #[error("Title cannot be empty")]
    EmptyTitle,
}
