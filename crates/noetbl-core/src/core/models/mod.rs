//! # Core Models Module
//!
//! Plain data types passed between pipeline stages.
//!
//! - [`residue`] - Residue type codes known to the force-field catalog
//! - [`sequence`] - 1-indexed residue-type sequence
//! - [`entry`] - Parsed assignments: atom references, intensities, raw entries
//! - [`restraint`] - Distance bounds and fully resolved distance restraints

pub mod entry;
pub mod residue;
pub mod restraint;
pub mod sequence;
