//! Message façade. Messages pass through untranslated.

use serde_json::Value;

use crate::http::{ApiClient, ApiResponse};
use crate::models::message::{
    CreateMessageInput, Message, MessageQuery, MessageSearchQuery, UpdateMessageInput,
};

#[derive(Debug, Clone)]
pub struct MessageService {
    client: ApiClient,
}

impl MessageService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &MessageQuery) -> ApiResponse<Vec<Message>> {
        self.client.get("/api/messages", query).await
    }

    pub async fn create(&self, input: &CreateMessageInput) -> ApiResponse<Message> {
        self.client.post("/api/messages", input).await
    }

    /// A message followed by its replies.
    pub async fn thread(&self, id: &str) -> ApiResponse<Vec<Message>> {
        self.client
            .get(&format!("/api/messages/{}/thread", id), &())
            .await
    }

    pub async fn update(&self, id: &str, input: &UpdateMessageInput) -> ApiResponse<Message> {
        self.client
            .put(&format!("/api/messages/{}", id), input)
            .await
    }

    pub async fn delete(&self, id: &str) -> ApiResponse<()> {
        self.client
            .delete::<Value>(&format!("/api/messages/{}", id))
            .await
            .map(|_| ())
    }

    pub async fn search(&self, query: &MessageSearchQuery) -> ApiResponse<Vec<Message>> {
        self.client.get("/api/messages/search", query).await
    }
}
