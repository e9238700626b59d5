//! Pure translation between API records and UI records.
//!
//! Every function here is total and synchronous. Enum tables are exhaustive
//! `match`es; values the client does not recognise arrive as an explicit
//! `Unrecognized` variant and map to the first UI case.
//!
//! Messages and notifications need no translation and have no adapter.

pub mod project;
pub mod task;

pub use project::project_from_backend;
pub use task::task_from_backend;
