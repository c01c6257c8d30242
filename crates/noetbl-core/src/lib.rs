//! # noetbl Core Library
//!
//! Converts assigned NOESY cross-peaks into distance restraints for structure
//! calculation. Each assignment names two protons loosely (`3HG1 - 4HN`) together
//! with a qualitative intensity; the library resolves those names against a
//! force-field hydrogen inventory and writes every consistent restraint file.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data: residue types and sequences,
//!   raw entries and restraints, the force-field catalog, the intensity table, and
//!   readers/writers for the sequence, assignment CSV and `.tbl` formats.
//!
//! - **[`engine`]: The Logic Core.** Atom-name resolution, rotational collapsing,
//!   per-entry candidate expansion under a combinatorial budget, and lazy
//!   enumeration of complete restraint sets.
//!
//! - **[`workflows`]: The Public API.** Ties the layers together: plan a run,
//!   report what was excluded and how many files will result, then write them.

pub mod core;
pub mod engine;
pub mod workflows;
