//! # Core Module
//!
//! Data models, static force-field knowledge and file formats.
//!
//! - **Models** ([`models`]) - Residue types, sequence table, raw entries and restraints
//! - **Force Field** ([`forcefield`]) - Hydrogen label catalog and intensity-to-distance table
//! - **File I/O** ([`io`]) - Sequence and assignment readers, `.tbl` writer

pub mod forcefield;
pub mod io;
pub mod models;
