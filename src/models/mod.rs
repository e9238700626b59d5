//! Wire and UI record types.
//!
//! Projects and tasks have distinct backend and frontend shapes (see
//! `adapters`). Messages and notifications have one shape used on both sides.

use thiserror::Error;

pub mod message;
pub mod notification;
pub mod project;
pub mod task;
pub mod user;

pub use message::Message;
pub use notification::{Notification, NotificationType};
pub use project::{BackendProject, MemberRole, Project, ProjectStatus};
pub use task::{BackendTask, BackendTaskPriority, BackendTaskStatus, Priority, Task, TaskStatus};
pub use user::{AuthSession, UserSummary};

/// A string did not name any variant of a UI enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
