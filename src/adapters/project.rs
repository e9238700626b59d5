//! Project translation between API and UI shapes.
//!
//! The API has no status or priority for projects; the UI gets the constants
//! `active` and `medium`. Owner is the first member with role `OWNER`.

use crate::models::project::{
    BackendProject, BackendProjectInput, CreateProjectInput, MemberRole, Project, ProjectStatus,
    UpdateProjectInput,
};
use crate::models::task::Priority;

pub const DEFAULT_STATUS: ProjectStatus = ProjectStatus::Active;
pub const DEFAULT_PRIORITY: Priority = Priority::Medium;

pub fn project_from_backend(project: BackendProject) -> Project {
    let members = project.members.unwrap_or_default();
    let owner = members
        .iter()
        .find(|m| m.role == MemberRole::Owner)
        .map(|m| m.user.clone());
    let count = project.count.unwrap_or_default();

    Project {
        id: project.id,
        name: project.name,
        description: project.description,
        status: DEFAULT_STATUS,
        priority: DEFAULT_PRIORITY,
        owner,
        members_count: members.len(),
        members,
        tasks_count: count.tasks,
        messages_count: count.messages,
        is_public: project.is_public,
        allow_member_invites: project.allow_member_invites,
        created_at: project.created_at,
        updated_at: project.updated_at,
    }
}

/// Status and priority are dropped; the API does not store them.
pub fn create_input_to_backend(input: CreateProjectInput) -> BackendProjectInput {
    BackendProjectInput {
        name: Some(input.name),
        description: input.description,
        is_public: input.is_public,
        allow_member_invites: input.allow_member_invites,
    }
}

pub fn update_input_to_backend(input: UpdateProjectInput) -> BackendProjectInput {
    BackendProjectInput {
        name: input.name,
        description: input.description,
        is_public: input.is_public,
        allow_member_invites: input.allow_member_invites,
    }
}
