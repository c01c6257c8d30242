use super::traits::InputFile;
use crate::core::models::residue::ResidueType;
use crate::core::models::sequence::SequenceTable;
use std::io::{self, BufRead};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SequenceError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(
        "Malformed sequence on line {line}: empty token at position {position} (residue codes must be separated by exactly one space)"
    )]
    Malformed { line: usize, position: usize },
    #[error("Unknown residue type '{code}' on line {line}")]
    UnknownResidue { line: usize, code: String },
}

/// Plain-text sequence file: three-letter residue codes separated by single spaces,
/// on one or more lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceFile;

impl InputFile for SequenceFile {
    type Output = SequenceTable;
    type Error = SequenceError;

    fn read_from(&self, reader: &mut impl BufRead) -> Result<SequenceTable, SequenceError> {
        let mut residues = Vec::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            for (position, token) in line.trim().split(char::is_whitespace).enumerate() {
                if token.is_empty() {
                    return Err(SequenceError::Malformed {
                        line: line_num,
                        position: position + 1,
                    });
                }
                let residue_type =
                    ResidueType::from_str(token).map_err(|_| SequenceError::UnknownResidue {
                        line: line_num,
                        code: token.to_string(),
                    })?;
                residues.push(residue_type);
            }
        }

        Ok(SequenceTable::new(residues))
    }
}
