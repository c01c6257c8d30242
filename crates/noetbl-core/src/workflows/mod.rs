//! # Workflows Module
//!
//! High-level entry points.
//!
//! - **Generation Workflow** ([`generate`]) - Plans a run (candidate lists, exclusions,
//!   file count) and writes one `.tbl` file per restraint set.

pub mod generate;
