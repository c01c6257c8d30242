use super::restraint::DistanceBounds;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Qualitative NOE cross-peak intensity as graded by the spectroscopist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intensity {
    Strong, // s
    Medium, // m
    Weak,   // w
}

impl Intensity {
    pub const ALL: [Intensity; 3] = [Intensity::Strong, Intensity::Medium, Intensity::Weak];

    pub fn code(&self) -> &'static str {
        match self {
            Intensity::Strong => "s",
            Intensity::Medium => "m",
            Intensity::Weak => "w",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown intensity '{0}'. Expected one of 's', 'm', 'w'.")]
pub struct UnknownIntensity(pub String);

impl FromStr for Intensity {
    type Err = UnknownIntensity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "s" => Ok(Intensity::Strong),
            "m" => Ok(Intensity::Medium),
            "w" => Ok(Intensity::Weak),
            _ => Err(UnknownIntensity(s.to_string())),
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// An atom name as written in an assignment, split into its alphabetic base and
/// optional numeric suffix (`HG12` is base `HG`, number `12`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AtomName {
    pub base: String,
    pub number: Option<u32>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AtomNameError {
    #[error("atom name is empty")]
    Empty,
    #[error("atom name '{0}' must start with uppercase letters")]
    MissingBase(String),
    #[error("atom name '{0}' must be uppercase letters followed by optional digits")]
    InvalidCharacters(String),
    #[error("numeric suffix of atom name '{0}' is too large")]
    NumberOverflow(String),
}

impl AtomName {
    pub fn new(base: impl Into<String>, number: Option<u32>) -> Self {
        Self {
            base: base.into(),
            number,
        }
    }
}

impl FromStr for AtomName {
    type Err = AtomNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(AtomNameError::Empty);
        }
        let split = s
            .find(|c: char| !c.is_ascii_uppercase())
            .unwrap_or(s.len());
        let (base, digits) = s.split_at(split);
        if base.is_empty() {
            return Err(AtomNameError::MissingBase(s.to_string()));
        }
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(AtomNameError::InvalidCharacters(s.to_string()));
        }
        let number = if digits.is_empty() {
            None
        } else {
            Some(
                digits
                    .parse()
                    .map_err(|_| AtomNameError::NumberOverflow(s.to_string()))?,
            )
        };
        Ok(Self::new(base, number))
    }
}

impl fmt::Display for AtomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)?;
        if let Some(number) = self.number {
            write!(f, "{}", number)?;
        }
        Ok(())
    }
}

/// One side of an assignment: a residue number and the atom name within it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AtomRef {
    pub residue: usize,
    pub name: AtomName,
}

impl AtomRef {
    pub fn new(residue: usize, name: AtomName) -> Self {
        Self { residue, name }
    }
}

impl fmt::Display for AtomRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.residue, self.name)
    }
}

/// A parsed, not yet resolved NOE assignment: two atom references and the
/// distance bounds derived from the peak intensity.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEntry {
    pub first: AtomRef,
    pub second: AtomRef,
    pub bounds: DistanceBounds,
}

impl RawEntry {
    pub fn new(first: AtomRef, second: AtomRef, bounds: DistanceBounds) -> Self {
        Self {
            first,
            second,
            bounds,
        }
    }
}

impl fmt::Display for RawEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.first, self.second)
    }
}
