//! Provides input/output for the plain-text formats of the pipeline.
//!
//! Sequence files and assignment tables are read through the [`traits::InputFile`]
//! interface; restraint sets are written as `.tbl` files through
//! [`traits::OutputFile`].

pub mod assignment;
pub mod sequence;
pub mod tbl;
pub mod traits;
