use super::traits::InputFile;
use crate::core::forcefield::intensity::IntensityTable;
use crate::core::models::entry::{AtomName, AtomNameError, AtomRef, Intensity, RawEntry};
use std::io::{self, BufRead};
use std::str::FromStr;
use thiserror::Error;

const PAIR_SEPARATORS: [char; 2] = ['-', '\u{2013}'];

#[derive(Debug, Error)]
pub enum AssignmentError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Row {row} has fewer than two columns")]
    MissingColumn { row: usize },
    #[error("Malformed atom pair '{text}' on row {row}: {reason}")]
    MalformedEntry {
        row: usize,
        text: String,
        #[source]
        reason: EntrySyntaxError,
    },
    #[error("Unknown intensity '{value}' on row {row}. Expected one of 's', 'm', 'w'.")]
    UnknownIntensity { row: usize, value: String },
}

/// Why an atom-pair cell such as `3HG1 - 4HN` could not be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EntrySyntaxError {
    #[error("expected two atom references separated by '-'")]
    MissingSeparator,
    #[error("atom reference '{0}' does not start with a residue number")]
    MissingResidueNumber(String),
    #[error("residue number in '{0}' is too large")]
    InvalidResidueNumber(String),
    #[error(transparent)]
    AtomName(#[from] AtomNameError),
}

/// Parses one side of a pair, e.g. `12HG21`.
pub fn parse_atom_ref(text: &str) -> Result<AtomRef, EntrySyntaxError> {
    let split = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    let (digits, name) = text.split_at(split);
    if digits.is_empty() {
        return Err(EntrySyntaxError::MissingResidueNumber(text.to_string()));
    }
    let residue = digits
        .parse()
        .map_err(|_| EntrySyntaxError::InvalidResidueNumber(text.to_string()))?;
    Ok(AtomRef::new(residue, AtomName::from_str(name)?))
}

/// Parses an atom-pair cell. The two references may be separated by a hyphen or
/// an en-dash, with optional spaces around it.
pub fn parse_atom_pair(text: &str) -> Result<(AtomRef, AtomRef), EntrySyntaxError> {
    let (first, second) = text
        .split_once(PAIR_SEPARATORS)
        .ok_or(EntrySyntaxError::MissingSeparator)?;
    Ok((parse_atom_ref(first.trim())?, parse_atom_ref(second.trim())?))
}

/// The NOE assignment table: a header row, then rows of `"<pair>", <intensity>`.
///
/// Only the first two columns are read; column names are ignored.
#[derive(Debug, Clone, Copy)]
pub struct AssignmentFile<'a> {
    intensities: &'a IntensityTable,
}

impl<'a> AssignmentFile<'a> {
    pub fn new(intensities: &'a IntensityTable) -> Self {
        Self { intensities }
    }
}

impl InputFile for AssignmentFile<'_> {
    type Output = Vec<RawEntry>;
    type Error = AssignmentError;

    fn read_from(&self, reader: &mut impl BufRead) -> Result<Vec<RawEntry>, AssignmentError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut entries = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            let row = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(entries.len() + 2);

            let (Some(pair_text), Some(intensity_text)) = (record.get(0), record.get(1)) else {
                return Err(AssignmentError::MissingColumn { row });
            };

            let intensity = Intensity::from_str(intensity_text).map_err(|_| {
                AssignmentError::UnknownIntensity {
                    row,
                    value: intensity_text.to_string(),
                }
            })?;
            let (first, second) =
                parse_atom_pair(pair_text).map_err(|reason| AssignmentError::MalformedEntry {
                    row,
                    text: pair_text.to_string(),
                    reason,
                })?;

            entries.push(RawEntry::new(
                first,
                second,
                self.intensities.bounds(intensity),
            ));
        }

        Ok(entries)
    }
}
