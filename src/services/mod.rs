//! Per-entity service façades.
//!
//! # Data Flow
//! ```text
//! caller → XService method
//!     → adapters (UI input → API body / query)
//!     → ApiClient (one round trip, ApiResponse<API shape>)
//!     → adapters (API record → UI record)
//!     → ApiResponse<UI shape>
//! ```
//!
//! Failures pass through unchanged. Nothing is retried or cached.

pub mod auth;
pub mod health;
pub mod messages;
pub mod notifications;
pub mod projects;
pub mod tasks;

use std::sync::Arc;

use crate::auth::TokenProvider;
use crate::config::ApiConfig;
use crate::http::{ApiClient, ClientError};

pub use auth::AuthService;
pub use health::{HealthService, HealthStatus};
pub use messages::MessageService;
pub use notifications::NotificationService;
pub use projects::ProjectService;
pub use tasks::TaskService;

/// Every façade, sharing one underlying client.
#[derive(Debug, Clone)]
pub struct SynergySphere {
    pub auth: AuthService,
    pub projects: ProjectService,
    pub tasks: TaskService,
    pub messages: MessageService,
    pub notifications: NotificationService,
    pub health: HealthService,
}

impl SynergySphere {
    pub fn new(config: &ApiConfig, tokens: Arc<dyn TokenProvider>) -> Result<Self, ClientError> {
        Ok(Self::from_client(ApiClient::new(config, tokens)?))
    }

    pub fn from_client(client: ApiClient) -> Self {
        Self {
            auth: AuthService::new(client.clone()),
            projects: ProjectService::new(client.clone()),
            tasks: TaskService::new(client.clone()),
            messages: MessageService::new(client.clone()),
            notifications: NotificationService::new(client.clone()),
            health: HealthService::new(client),
        }
    }
}
