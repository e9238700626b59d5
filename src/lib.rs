//! SynergySphere API client library.
//!
//! Typed access to the SynergySphere project/task REST API: a transport that
//! folds every outcome into an [`ApiResponse`] envelope, adapters between the
//! API's record shapes and UI-friendly ones, and one façade per entity.
//!
//! ```no_run
//! use std::sync::Arc;
//! use synergysphere::{auth::StaticToken, config::ClientConfig, models::task::TaskQuery, SynergySphere};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_env();
//! let api = SynergySphere::new(&config.api, Arc::new(StaticToken::new("jwt")))?;
//! let tasks = api.tasks.mine(TaskQuery::default()).await;
//! if let Some(tasks) = tasks.data {
//!     println!("{} tasks", tasks.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod auth;
pub mod config;
pub mod http;
pub mod models;
pub mod observability;
pub mod services;

pub use config::ClientConfig;
pub use http::{ApiClient, ApiResponse, ClientError};
pub use services::SynergySphere;
