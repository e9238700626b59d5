//! Task façade.

use serde_json::Value;

use crate::adapters::task::{
    create_input_to_backend, query_to_backend, status_to_backend, task_from_backend,
    update_input_to_backend,
};
use crate::http::{ApiClient, ApiResponse};
use crate::models::task::{
    BackendTask, BulkStatusInput, BulkUpdateResult, CreateTaskInput, Task, TaskQuery, TaskStats,
    TaskStatus, UpdateTaskInput,
};

#[derive(Debug, Clone)]
pub struct TaskService {
    client: ApiClient,
}

impl TaskService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: TaskQuery) -> ApiResponse<Vec<Task>> {
        self.fetch_list("/api/tasks", query).await
    }

    /// Tasks assigned to the authenticated user.
    pub async fn mine(&self, query: TaskQuery) -> ApiResponse<Vec<Task>> {
        self.fetch_list("/api/tasks/my", query).await
    }

    pub async fn get(&self, id: &str) -> ApiResponse<Task> {
        self.client
            .get::<BackendTask, _>(&format!("/api/tasks/{}", id), &())
            .await
            .map(task_from_backend)
    }

    pub async fn create(&self, input: CreateTaskInput) -> ApiResponse<Task> {
        let body = create_input_to_backend(input);
        self.client
            .post::<BackendTask, _>("/api/tasks", &body)
            .await
            .map(task_from_backend)
    }

    pub async fn update(&self, id: &str, input: UpdateTaskInput) -> ApiResponse<Task> {
        let body = update_input_to_backend(input);
        self.client
            .put::<BackendTask, _>(&format!("/api/tasks/{}", id), &body)
            .await
            .map(task_from_backend)
    }

    pub async fn delete(&self, id: &str) -> ApiResponse<()> {
        self.client
            .delete::<Value>(&format!("/api/tasks/{}", id))
            .await
            .map(|_| ())
    }

    /// Move several tasks to one status in a single call.
    pub async fn bulk_update_status(
        &self,
        task_ids: Vec<String>,
        status: TaskStatus,
    ) -> ApiResponse<BulkUpdateResult> {
        let body = BulkStatusInput {
            task_ids,
            status: status_to_backend(status),
        };
        self.client.post("/api/tasks/bulk-status", &body).await
    }

    pub async fn project_stats(&self, project_id: &str) -> ApiResponse<TaskStats> {
        self.client
            .get(&format!("/api/tasks/project/{}/stats", project_id), &())
            .await
    }

    async fn fetch_list(&self, path: &str, query: TaskQuery) -> ApiResponse<Vec<Task>> {
        let query = query_to_backend(query);
        self.client
            .get::<Vec<BackendTask>, _>(path, &query)
            .await
            .map(|tasks| tasks.into_iter().map(task_from_backend).collect())
    }
}
