//! Export module for rendering the aggregated sequence.
//!
//! This module handles:
//! - The output format selector
//! - JSON and CSV rendering
//! - Scoped temporary artifacts

pub mod format;
pub mod writer;

pub use format::ExportFormat;
pub use writer::{render_csv, render_json, Artifact};
