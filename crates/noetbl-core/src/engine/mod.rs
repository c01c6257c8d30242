//! # Engine Module
//!
//! Turns raw entries into restraint-set hypotheses.
//!
//! ## Architecture
//!
//! - **Resolution** ([`resolver`]) - Matches written atom names to catalog labels
//! - **Expansion** ([`pair`]) - Rotational collapse and per-entry candidate lists under a budget
//! - **Enumeration** ([`combinations`]) - Lazy, restartable cartesian product over retained entries
//! - **Configuration** ([`config`]) - Combinatorial budget and intensity table
//! - **Progress Monitoring** ([`progress`]) - Callbacks for file-writing progress
//! - **Error Handling** ([`error`]) - Engine-specific error types

pub mod combinations;
pub mod config;
pub mod error;
pub mod pair;
pub mod progress;
pub mod resolver;
