use crate::core::models::entry::Intensity;
use crate::core::models::restraint::DistanceBounds;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Maps each NOE intensity class to the distance bounds it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntensityTable {
    #[serde(rename = "s")]
    pub strong: DistanceBounds,
    #[serde(rename = "m")]
    pub medium: DistanceBounds,
    #[serde(rename = "w")]
    pub weak: DistanceBounds,
}

#[derive(Debug, Error)]
pub enum IntensityTableError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error(transparent)]
    NonPositive(#[from] NonPositiveBounds),
}

/// A distance, lower delta or upper delta that is zero or negative.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Intensity '{intensity}' has a non-positive {field}; all bounds must be strictly positive")]
pub struct NonPositiveBounds {
    pub intensity: Intensity,
    pub field: &'static str,
}

impl Default for IntensityTable {
    fn default() -> Self {
        Self {
            strong: DistanceBounds::new(2.5, 0.7, 0.4),
            medium: DistanceBounds::new(3.0, 1.2, 0.5),
            weak: DistanceBounds::new(4.0, 2.2, 1.1),
        }
    }
}

impl IntensityTable {
    pub fn bounds(&self, intensity: Intensity) -> DistanceBounds {
        match intensity {
            Intensity::Strong => self.strong,
            Intensity::Medium => self.medium,
            Intensity::Weak => self.weak,
        }
    }

    /// Loads a replacement table from a TOML file with `[s]`, `[m]` and `[w]` sections.
    pub fn load(path: &Path) -> Result<Self, IntensityTableError> {
        let content = std::fs::read_to_string(path).map_err(|e| IntensityTableError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let table: Self = toml::from_str(&content).map_err(|e| IntensityTableError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        table.validate()?;
        Ok(table)
    }

    pub fn validate(&self) -> Result<(), NonPositiveBounds> {
        for intensity in Intensity::ALL {
            if let Some(field) = self.bounds(intensity).first_non_positive_field() {
                return Err(NonPositiveBounds { intensity, field });
            }
        }
        Ok(())
    }
}
