use crate::core::forcefield::intensity::{IntensityTable, NonPositiveBounds};
use thiserror::Error;

/// Limit used when none is configured: only fully unambiguous entries survive.
pub const DEFAULT_ONE_ATOM_MAX_LIMIT: usize = 1;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("one_atom_max_limit must be at least 1 (got {0})")]
    InvalidLimit(usize),
    #[error(transparent)]
    NonPositiveBounds(#[from] NonPositiveBounds),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    /// Maximum number of atom-pair alternatives accepted for one entry.
    pub one_atom_max_limit: usize,
    pub intensities: IntensityTable,
}

#[derive(Default)]
pub struct GenerationConfigBuilder {
    one_atom_max_limit: Option<usize>,
    intensities: Option<IntensityTable>,
}

impl GenerationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn one_atom_max_limit(mut self, limit: usize) -> Self {
        self.one_atom_max_limit = Some(limit);
        self
    }
    pub fn intensities(mut self, table: IntensityTable) -> Self {
        self.intensities = Some(table);
        self
    }

    pub fn build(self) -> Result<GenerationConfig, ConfigError> {
        let one_atom_max_limit = self
            .one_atom_max_limit
            .ok_or(ConfigError::MissingParameter("one_atom_max_limit"))?;
        if one_atom_max_limit == 0 {
            return Err(ConfigError::InvalidLimit(one_atom_max_limit));
        }

        let intensities = self.intensities.unwrap_or_default();
        intensities.validate()?;

        Ok(GenerationConfig {
            one_atom_max_limit,
            intensities,
        })
    }
}
