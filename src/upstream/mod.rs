//! Upstream activity API module.
//!
//! This module handles:
//! - The opaque activity record type
//! - The HTTP client for the activity suggestion endpoint
//! - The sequential fetch-and-aggregate loop

pub mod client;

pub use client::{Activity, ActivityClient};
