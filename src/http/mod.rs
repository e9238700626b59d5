//! HTTP transport.
//!
//! # Data Flow
//! ```text
//! service call (path, query, body)
//!     → query.rs (URL + encoded query pairs)
//!     → client.rs (headers, bearer token, send)
//!     → JSON or text body
//!     → payload.rs ({data: T} | T unwrap)
//!     → envelope.rs (ApiResponse<T>)
//! ```

pub mod client;
pub mod envelope;
pub mod error;
pub mod payload;
pub mod query;

pub use client::ApiClient;
pub use envelope::ApiResponse;
pub use error::ClientError;
