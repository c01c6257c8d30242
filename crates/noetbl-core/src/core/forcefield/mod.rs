//! # Force Field Module
//!
//! Static chemical knowledge used while building restraints.
//!
//! - [`catalog`] - Per-residue hydrogen labels with numeric suffix and rotational flag
//! - [`intensity`] - Mapping from NOE intensity class to distance bounds
//!
//! ```ignore
//! use noetbl::core::forcefield::catalog::ForceFieldCatalog;
//! use noetbl::core::models::residue::ResidueType;
//!
//! let entries = ForceFieldCatalog::new().entries_for(ResidueType::Valine);
//! ```

pub mod catalog;
pub mod intensity;
