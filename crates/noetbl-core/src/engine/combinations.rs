use super::pair::CandidateList;
use crate::core::models::restraint::DistanceRestraint;
use std::iter::FusedIterator;

/// One complete hypothesis: a single restraint chosen for every retained entry,
/// in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct RestraintSet<'a> {
    restraints: Vec<&'a DistanceRestraint>,
}

impl<'a> RestraintSet<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a DistanceRestraint> + '_ {
        self.restraints.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.restraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restraints.is_empty()
    }
}

/// Cartesian combination of the retained candidate lists.
///
/// Holds only the per-entry lists; sets are produced lazily by [`iter`], which
/// can be called any number of times to restart the enumeration.
///
/// [`iter`]: RestraintSetEnumerator::iter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestraintSetEnumerator {
    lists: Vec<Vec<DistanceRestraint>>,
}

impl RestraintSetEnumerator {
    /// Keeps the resolved lists in order; dropped and unresolved entries are discarded.
    pub fn from_candidates(candidates: impl IntoIterator<Item = CandidateList>) -> Self {
        let lists = candidates
            .into_iter()
            .filter_map(|candidate| match candidate {
                CandidateList::Resolved(restraints) if !restraints.is_empty() => Some(restraints),
                _ => None,
            })
            .collect();
        Self { lists }
    }

    /// Number of entries that contribute one restraint to every set.
    pub fn retained(&self) -> usize {
        self.lists.len()
    }

    /// Product of the retained list sizes, or `None` if it does not fit in a `u128`.
    ///
    /// With no retained entries this is 1: the empty product yields exactly one
    /// empty set.
    pub fn total(&self) -> Option<u128> {
        self.lists
            .iter()
            .try_fold(1u128, |acc, list| acc.checked_mul(list.len() as u128))
    }

    pub fn iter(&self) -> RestraintSets<'_> {
        RestraintSets {
            lists: &self.lists,
            indices: vec![0; self.lists.len()],
            exhausted: false,
        }
    }
}

impl<'a> IntoIterator for &'a RestraintSetEnumerator {
    type Item = RestraintSet<'a>;
    type IntoIter = RestraintSets<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Mixed-radix walk over the retained lists; the last list varies fastest.
#[derive(Debug, Clone)]
pub struct RestraintSets<'a> {
    lists: &'a [Vec<DistanceRestraint>],
    indices: Vec<usize>,
    exhausted: bool,
}

impl<'a> RestraintSets<'a> {
    fn advance(&mut self) {
        for (position, list) in self.lists.iter().enumerate().rev() {
            self.indices[position] += 1;
            if self.indices[position] < list.len() {
                return;
            }
            self.indices[position] = 0;
        }
        self.exhausted = true;
    }

    fn remaining(&self) -> Option<u128> {
        if self.exhausted {
            return Some(0);
        }
        // Remaining = total - (mixed-radix value of the current indices).
        let mut consumed = 0u128;
        let mut total = 1u128;
        for (list, &index) in self.lists.iter().zip(&self.indices) {
            let radix = list.len() as u128;
            consumed = consumed.checked_mul(radix)?.checked_add(index as u128)?;
            total = total.checked_mul(radix)?;
        }
        Some(total - consumed)
    }
}

impl<'a> Iterator for RestraintSets<'a> {
    type Item = RestraintSet<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let restraints = self
            .lists
            .iter()
            .zip(&self.indices)
            .map(|(list, &index)| &list[index])
            .collect();
        self.advance();
        Some(RestraintSet { restraints })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining().and_then(|n| usize::try_from(n).ok()) {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for RestraintSets<'_> {}
