use super::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(
        "Entry '{entry}' references residue {residue}, but the sequence has {length} residue(s)"
    )]
    ResidueOutOfRange {
        entry: String,
        residue: usize,
        length: usize,
    },

    #[error("Failed to write '{path}': {source}", path = path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
