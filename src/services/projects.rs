//! Project façade.

use serde_json::Value;

use crate::adapters::project::{create_input_to_backend, project_from_backend, update_input_to_backend};
use crate::http::{ApiClient, ApiResponse};
use crate::models::project::{
    AddMemberInput, BackendProject, CreateProjectInput, Project, ProjectMember, ProjectQuery,
    ProjectStats, UpdateProjectInput,
};

#[derive(Debug, Clone)]
pub struct ProjectService {
    client: ApiClient,
}

impl ProjectService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ProjectQuery) -> ApiResponse<Vec<Project>> {
        self.client
            .get::<Vec<BackendProject>, _>("/api/projects", query)
            .await
            .map(|projects| projects.into_iter().map(project_from_backend).collect())
    }

    pub async fn get(&self, id: &str) -> ApiResponse<Project> {
        self.client
            .get::<BackendProject, _>(&format!("/api/projects/{}", id), &())
            .await
            .map(project_from_backend)
    }

    pub async fn create(&self, input: CreateProjectInput) -> ApiResponse<Project> {
        let body = create_input_to_backend(input);
        self.client
            .post::<BackendProject, _>("/api/projects", &body)
            .await
            .map(project_from_backend)
    }

    pub async fn update(&self, id: &str, input: UpdateProjectInput) -> ApiResponse<Project> {
        let body = update_input_to_backend(input);
        self.client
            .put::<BackendProject, _>(&format!("/api/projects/{}", id), &body)
            .await
            .map(project_from_backend)
    }

    pub async fn delete(&self, id: &str) -> ApiResponse<()> {
        self.client
            .delete::<Value>(&format!("/api/projects/{}", id))
            .await
            .map(|_| ())
    }

    pub async fn add_member(&self, id: &str, input: &AddMemberInput) -> ApiResponse<ProjectMember> {
        self.client
            .post(&format!("/api/projects/{}/members", id), input)
            .await
    }

    pub async fn remove_member(&self, id: &str, user_id: &str) -> ApiResponse<()> {
        self.client
            .delete::<Value>(&format!("/api/projects/{}/members/{}", id, user_id))
            .await
            .map(|_| ())
    }

    pub async fn stats(&self, id: &str) -> ApiResponse<ProjectStats> {
        self.client
            .get(&format!("/api/projects/{}/stats", id), &())
            .await
    }
}
