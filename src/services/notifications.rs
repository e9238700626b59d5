//! Notification façade. Notifications pass through untranslated.

use reqwest::Method;
use serde_json::Value;

use crate::http::{ApiClient, ApiResponse};
use crate::models::notification::{
    MarkReadInput, Notification, NotificationPreferences, NotificationQuery, NotificationStats,
};

#[derive(Debug, Clone)]
pub struct NotificationService {
    client: ApiClient,
}

impl NotificationService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &NotificationQuery) -> ApiResponse<Vec<Notification>> {
        self.client.get("/api/notifications", query).await
    }

    pub async fn mark_read(&self, id: &str) -> ApiResponse<()> {
        self.client
            .request::<Value, _, ()>(
                Method::PUT,
                &format!("/api/notifications/{}/read", id),
                &(),
                None,
            )
            .await
            .map(|_| ())
    }

    pub async fn mark_many_read(&self, ids: Vec<String>) -> ApiResponse<()> {
        let body = MarkReadInput {
            notification_ids: ids,
        };
        self.client
            .put::<Value, _>("/api/notifications/read", &body)
            .await
            .map(|_| ())
    }

    pub async fn mark_all_read(&self) -> ApiResponse<()> {
        self.client
            .request::<Value, _, ()>(Method::PUT, "/api/notifications/read-all", &(), None)
            .await
            .map(|_| ())
    }

    pub async fn delete(&self, id: &str) -> ApiResponse<()> {
        self.client
            .delete::<Value>(&format!("/api/notifications/{}", id))
            .await
            .map(|_| ())
    }

    pub async fn preferences(&self) -> ApiResponse<NotificationPreferences> {
        self.client.get("/api/notifications/preferences", &()).await
    }

    pub async fn update_preferences(
        &self,
        preferences: &NotificationPreferences,
    ) -> ApiResponse<NotificationPreferences> {
        self.client
            .put("/api/notifications/preferences", preferences)
            .await
    }

    pub async fn stats(&self) -> ApiResponse<NotificationStats> {
        self.client.get("/api/notifications/stats", &()).await
    }
}
