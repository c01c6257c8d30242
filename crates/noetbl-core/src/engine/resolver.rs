use crate::core::forcefield::catalog::{ForceFieldCatalog, ForceFieldEntry};
use crate::core::models::entry::AtomName;
use crate::core::models::residue::ResidueType;
use tracing::trace;

/// A force-field label matched by an assignment atom name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedAtom {
    pub label: String,
    pub rotational: bool,
}

impl ResolvedAtom {
    pub fn new(label: impl Into<String>, rotational: bool) -> Self {
        Self {
            label: label.into(),
            rotational,
        }
    }
}

impl From<&ForceFieldEntry> for ResolvedAtom {
    fn from(entry: &ForceFieldEntry) -> Self {
        Self::new(entry.label(), entry.rotational)
    }
}

/// Matches loosely written atom names (`HB`, `HG1`, `HD21`) against a residue's
/// force-field inventory.
#[derive(Debug, Clone, Copy)]
pub struct AtomResolver<'a> {
    catalog: &'a ForceFieldCatalog,
}

impl<'a> AtomResolver<'a> {
    pub fn new(catalog: &'a ForceFieldCatalog) -> Self {
        Self { catalog }
    }

    /// Returns every catalog label of `residue_type` compatible with `name`, in
    /// catalog order. An empty result means the name cannot be resolved.
    ///
    /// The base name must match exactly. When both the written name and the
    /// catalog entry carry a number, [`numbers_compatible`] decides; otherwise the
    /// base match alone is enough, so `HB` picks up `HB1`, `HB2` and `HB3`.
    pub fn resolve(&self, name: &AtomName, residue_type: ResidueType) -> Vec<ResolvedAtom> {
        let resolved: Vec<ResolvedAtom> = self
            .catalog
            .entries_for(residue_type)
            .iter()
            .filter(|entry| entry.base == name.base)
            .filter(|entry| match (name.number, entry.number) {
                (Some(requested), Some(candidate)) => numbers_compatible(requested, candidate),
                _ => true,
            })
            .map(ResolvedAtom::from)
            .collect();

        trace!(
            "Resolved {} in {} to {:?}",
            name,
            residue_type,
            resolved.iter().map(|a| a.label.as_str()).collect::<Vec<_>>()
        );
        resolved
    }
}

/// Numeric-suffix disambiguation between a written number and a catalog number.
///
/// Numbers with the same digit count must be equal (`1` never matches `2`).
/// Numbers with different digit counts only need the same leading digit, so a
/// single written digit selects a branch of two-digit labels (`1` matches `11`
/// and `12` but not `21`). This is inherited matching behavior rather than a
/// chemical rule, and is kept as-is.
pub fn numbers_compatible(requested: u32, candidate: u32) -> bool {
    if requested == candidate {
        return true;
    }
    let requested = requested.to_string();
    let candidate = candidate.to_string();
    if requested.len() == candidate.len() {
        return false;
    }
    requested.as_bytes()[0] == candidate.as_bytes()[0]
}
