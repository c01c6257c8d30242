use super::residue::ResidueType;

/// The residue-type sequence of the molecule, addressed by 1-based residue number.
///
/// Residue numbers in assignment entries are looked up here to find the
/// residue type whose force-field atoms they refer to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceTable {
    residues: Vec<ResidueType>,
}

impl SequenceTable {
    pub fn new(residues: Vec<ResidueType>) -> Self {
        Self { residues }
    }

    /// Returns the residue type at `residue_number`, or `None` when the number
    /// falls outside `1..=len()`.
    pub fn get(&self, residue_number: usize) -> Option<ResidueType> {
        residue_number
            .checked_sub(1)
            .and_then(|index| self.residues.get(index))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ala_arg_asn() -> SequenceTable {
        SequenceTable::new(vec![
            ResidueType::Alanine,
            ResidueType::Arginine,
            ResidueType::Asparagine,
        ])
    }

    #[test]
    fn get_uses_one_based_residue_numbers() {
        let sequence = ala_arg_asn();
        assert_eq!(sequence.get(1), Some(ResidueType::Alanine));
        assert_eq!(sequence.get(3), Some(ResidueType::Asparagine));
    }

    #[test]
    fn get_returns_none_outside_valid_range() {
        let sequence = ala_arg_asn();
        assert_eq!(sequence.get(0), None);
        assert_eq!(sequence.get(4), None);
        assert_eq!(sequence.get(usize::MAX), None);
    }

    #[test]
    fn empty_sequence_reports_zero_length() {
        let sequence = SequenceTable::default();
        assert!(sequence.is_empty());
        assert_eq!(sequence.len(), 0);
        assert_eq!(sequence.get(1), None);
    }
}
