//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! http::client produces:
//!     → tracing events (request, status, failures)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → logging.rs subscriber (stderr) installed by the CLI
//!     → any metrics recorder the embedding application installs
//! ```
//!
//! # Design Decisions
//! - Bearer tokens never appear in events
//! - Metric updates are fire-and-forget through the `metrics` facade

pub mod logging;
pub mod metrics;
