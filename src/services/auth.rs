//! Authentication façade.
//!
//! The returned session carries the token; persisting it is up to the
//! caller's token store.

use crate::http::{ApiClient, ApiResponse};
use crate::models::user::{AuthSession, LoginInput, RegisterInput, UserSummary};

#[derive(Debug, Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn login(&self, email: &str, password: &str) -> ApiResponse<AuthSession> {
        let body = LoginInput {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.client.post("/api/auth/login", &body).await
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> ApiResponse<AuthSession> {
        let body = RegisterInput {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        self.client.post("/api/auth/register", &body).await
    }

    /// The user the current token belongs to.
    pub async fn me(&self) -> ApiResponse<UserSummary> {
        self.client.get("/api/auth/me", &()).await
    }
}
