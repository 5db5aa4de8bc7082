//! Activity export service.
//!
//! A small HTTP service that, per request, performs a number of sequential
//! calls to an upstream activity suggestion API, aggregates the successful
//! responses in call order, and returns them as an indented JSON download,
//! a CSV download, or a dump to the server log.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`upstream`]: Activity API client and fetch loop
//! - [`export`]: Output formats, rendering, and temporary artifacts
//! - [`api`]: HTTP endpoint and router
//! - [`metrics`]: Prometheus counters

pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod metrics;
pub mod upstream;

pub use config::Config;
pub use error::{AppError, Result};
