//! Task translation between API and UI shapes.
//!
//! The two directions are not inverses. The UI has `review` and `critical`,
//! the API does not: `review` is sent as `IN_PROGRESS` and `critical` as
//! `HIGH`, and they come back as `in-progress` and `high`.

use crate::models::task::{
    BackendTask, BackendTaskInput, BackendTaskPriority, BackendTaskQuery, BackendTaskStatus,
    CreateTaskInput, Priority, Task, TaskQuery, TaskStatus, UpdateTaskInput,
};

pub fn status_from_backend(status: BackendTaskStatus) -> TaskStatus {
    match status {
        BackendTaskStatus::Todo => TaskStatus::Todo,
        BackendTaskStatus::InProgress => TaskStatus::InProgress,
        BackendTaskStatus::Done => TaskStatus::Done,
        BackendTaskStatus::Unrecognized => TaskStatus::Todo,
    }
}

pub fn status_to_backend(status: TaskStatus) -> BackendTaskStatus {
    match status {
        TaskStatus::Todo => BackendTaskStatus::Todo,
        TaskStatus::InProgress => BackendTaskStatus::InProgress,
        TaskStatus::Review => BackendTaskStatus::InProgress,
        TaskStatus::Done => BackendTaskStatus::Done,
    }
}

pub fn priority_from_backend(priority: BackendTaskPriority) -> Priority {
    match priority {
        BackendTaskPriority::Low => Priority::Low,
        BackendTaskPriority::Medium => Priority::Medium,
        BackendTaskPriority::High => Priority::High,
        BackendTaskPriority::Unrecognized => Priority::Low,
    }
}

pub fn priority_to_backend(priority: Priority) -> BackendTaskPriority {
    match priority {
        Priority::Low => BackendTaskPriority::Low,
        Priority::Medium => BackendTaskPriority::Medium,
        Priority::High => BackendTaskPriority::High,
        Priority::Critical => BackendTaskPriority::High,
    }
}

/// Reshape an API task for the UI.
pub fn task_from_backend(task: BackendTask) -> Task {
    let project_id = task
        .project_id
        .or_else(|| task.project.as_ref().map(|p| p.id.clone()))
        .unwrap_or_default();
    let assignee_id = task
        .assignee_id
        .or_else(|| task.assignee.as_ref().map(|u| u.id.clone()));

    Task {
        id: task.id,
        title: task.title,
        description: task.description,
        status: status_from_backend(task.status),
        priority: priority_from_backend(task.priority),
        due_date: task.due_date,
        project_id,
        project_name: task.project.map(|p| p.name),
        assignee_id,
        assignee: task.assignee,
        creator: task.creator,
        tags: task.tags,
        created_at: task.created_at,
        updated_at: task.updated_at,
    }
}

pub fn create_input_to_backend(input: CreateTaskInput) -> BackendTaskInput {
    BackendTaskInput {
        title: Some(input.title),
        description: input.description,
        status: input.status.map(status_to_backend),
        priority: input.priority.map(priority_to_backend),
        due_date: input.due_date,
        project_id: Some(input.project_id),
        assignee_id: input.assignee_id,
        tags: input.tags,
    }
}

pub fn update_input_to_backend(input: UpdateTaskInput) -> BackendTaskInput {
    BackendTaskInput {
        title: input.title,
        description: input.description,
        status: input.status.map(status_to_backend),
        priority: input.priority.map(priority_to_backend),
        due_date: input.due_date,
        project_id: None,
        assignee_id: input.assignee_id,
        tags: input.tags,
    }
}

pub fn query_to_backend(query: TaskQuery) -> BackendTaskQuery {
    BackendTaskQuery {
        project_id: query.project_id,
        status: query.status.map(status_to_backend),
        priority: query.priority.map(priority_to_backend),
        assignee_id: query.assignee_id,
        search: query.search,
        page: query.page,
        limit: query.limit,
    }
}
