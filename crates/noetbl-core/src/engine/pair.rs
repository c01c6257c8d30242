use super::error::EngineError;
use super::resolver::{AtomResolver, ResolvedAtom};
use crate::core::models::entry::{AtomRef, RawEntry};
use crate::core::models::residue::ResidueType;
use crate::core::models::restraint::DistanceRestraint;
use crate::core::models::sequence::SequenceTable;
use std::fmt;
use tracing::{debug, warn};

/// Which side(s) of an entry matched no force-field label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnresolvedSide {
    First,
    Second,
    Both,
}

impl fmt::Display for UnresolvedSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnresolvedSide::First => f.write_str("first atom"),
            UnresolvedSide::Second => f.write_str("second atom"),
            UnresolvedSide::Both => f.write_str("both atoms"),
        }
    }
}

/// The concrete restraints one entry may stand for.
#[derive(Debug, Clone, PartialEq)]
pub enum CandidateList {
    /// At least one and at most `budget` alternatives, in resolution order.
    Resolved(Vec<DistanceRestraint>),
    /// No compatible label on one or both sides.
    Unresolved(UnresolvedSide),
    /// More alternatives than the combinatorial budget allows.
    Dropped { combinations: usize, budget: usize },
}

/// Reduces a fully rotational group to its first member.
///
/// When every resolved label belongs to a rotating group the measurement
/// cannot tell them apart, so one representative stands for all. Lists with any
/// non-rotational member, and empty lists, are returned unchanged.
pub fn collapse_rotational(mut atoms: Vec<ResolvedAtom>) -> Vec<ResolvedAtom> {
    if !atoms.is_empty() && atoms.iter().all(|atom| atom.rotational) {
        atoms.truncate(1);
    }
    atoms
}

fn residue_type_of(
    sequence: &SequenceTable,
    atom: &AtomRef,
    entry: &RawEntry,
) -> Result<ResidueType, EngineError> {
    sequence
        .get(atom.residue)
        .ok_or_else(|| EngineError::ResidueOutOfRange {
            entry: entry.to_string(),
            residue: atom.residue,
            length: sequence.len(),
        })
}

/// Expands one raw entry into its candidate restraints.
///
/// Both sides are resolved against the residue types found in `sequence`,
/// collapsed, and combined pairwise. If the number of pairs exceeds `budget`
/// the entry is dropped instead of expanded.
///
/// # Errors
///
/// Returns [`EngineError::ResidueOutOfRange`] if either residue number is not in
/// the sequence.
pub fn candidates_for(
    entry: &RawEntry,
    sequence: &SequenceTable,
    resolver: &AtomResolver,
    budget: usize,
) -> Result<CandidateList, EngineError> {
    let first_type = residue_type_of(sequence, &entry.first, entry)?;
    let second_type = residue_type_of(sequence, &entry.second, entry)?;

    let first = collapse_rotational(resolver.resolve(&entry.first.name, first_type));
    let second = collapse_rotational(resolver.resolve(&entry.second.name, second_type));

    debug!(
        "Entry {}: {} candidate(s) for {}{}, {} for {}{}",
        entry,
        first.len(),
        first_type,
        entry.first.residue,
        second.len(),
        second_type,
        entry.second.residue
    );

    match (first.is_empty(), second.is_empty()) {
        (true, true) => return Ok(CandidateList::Unresolved(UnresolvedSide::Both)),
        (true, false) => return Ok(CandidateList::Unresolved(UnresolvedSide::First)),
        (false, true) => return Ok(CandidateList::Unresolved(UnresolvedSide::Second)),
        (false, false) => {}
    }

    let combinations = first.len().saturating_mul(second.len());
    if combinations > budget {
        warn!(
            "Possible pairs for residues {} and {} ({}) exceed the limit of {}",
            entry.first.residue, entry.second.residue, combinations, budget
        );
        return Ok(CandidateList::Dropped {
            combinations,
            budget,
        });
    }

    let restraints = first
        .iter()
        .flat_map(|a| second.iter().map(move |b| (a, b)))
        .map(|(a, b)| {
            DistanceRestraint::new(
                entry.first.residue,
                a.label.clone(),
                entry.second.residue,
                b.label.clone(),
                entry.bounds,
            )
        })
        .collect();

    Ok(CandidateList::Resolved(restraints))
}
