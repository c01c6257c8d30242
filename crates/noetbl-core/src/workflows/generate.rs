use crate::core::forcefield::catalog::ForceFieldCatalog;
use crate::core::io::tbl::TblFile;
use crate::core::io::traits::OutputFile;
use crate::core::models::entry::RawEntry;
use crate::core::models::sequence::SequenceTable;
use crate::engine::combinations::RestraintSetEnumerator;
use crate::engine::config::GenerationConfig;
use crate::engine::error::EngineError;
use crate::engine::pair::{CandidateList, UnresolvedSide, candidates_for};
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::resolver::AtomResolver;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

/// Why an entry contributes to no output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionReason {
    Unresolved(UnresolvedSide),
    BudgetExceeded { combinations: usize, budget: usize },
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExclusionReason::Unresolved(side) => {
                write!(f, "no force-field label matches the {}", side)
            }
            ExclusionReason::BudgetExceeded {
                combinations,
                budget,
            } => write!(
                f,
                "{} possible atom pairs exceed the limit of {}",
                combinations, budget
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExcludedEntry {
    /// 0-based position of the entry in the input.
    pub index: usize,
    pub entry: RawEntry,
    pub reason: ExclusionReason,
}

/// Everything known before any file is written: what was excluded and the lazy
/// set enumeration over what was kept.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    pub excluded: Vec<ExcludedEntry>,
    pub enumerator: RestraintSetEnumerator,
}

impl GenerationPlan {
    /// Number of restraint files the plan will produce, if it fits in a `u128`.
    pub fn total(&self) -> Option<u128> {
        self.enumerator.total()
    }

    pub fn retained(&self) -> usize {
        self.enumerator.retained()
    }
}

/// Resolves every entry and prepares the restraint-set enumeration.
///
/// # Errors
///
/// Returns [`EngineError::ResidueOutOfRange`] if an entry refers to a residue
/// that is not in `sequence`. Over-budget and unresolvable entries are not
/// errors; they are listed in [`GenerationPlan::excluded`].
///
/// Only `config.one_atom_max_limit` is read here. Intensities were already
/// turned into bounds when the entries were parsed by
/// [`AssignmentFile`](crate::core::io::assignment::AssignmentFile).
#[instrument(skip_all, name = "generation_plan")]
pub fn plan(
    sequence: &SequenceTable,
    entries: &[RawEntry],
    config: &GenerationConfig,
) -> Result<GenerationPlan, EngineError> {
    info!(
        "Resolving {} entries against a sequence of {} residues (limit {} per entry).",
        entries.len(),
        sequence.len(),
        config.one_atom_max_limit
    );

    let catalog = ForceFieldCatalog::new();
    let resolver = AtomResolver::new(&catalog);

    let candidates = entries
        .iter()
        .map(|entry| candidates_for(entry, sequence, &resolver, config.one_atom_max_limit))
        .collect::<Result<Vec<_>, _>>()?;

    let excluded: Vec<ExcludedEntry> = candidates
        .iter()
        .zip(entries)
        .enumerate()
        .filter_map(|(index, (candidate, entry))| {
            let reason = match candidate {
                CandidateList::Resolved(_) => return None,
                CandidateList::Unresolved(side) => ExclusionReason::Unresolved(*side),
                CandidateList::Dropped {
                    combinations,
                    budget,
                } => ExclusionReason::BudgetExceeded {
                    combinations: *combinations,
                    budget: *budget,
                },
            };
            Some(ExcludedEntry {
                index,
                entry: entry.clone(),
                reason,
            })
        })
        .collect();

    for excluded_entry in &excluded {
        if let ExclusionReason::Unresolved(_) = excluded_entry.reason {
            warn!(
                "Entry {} ({}) excluded: {}",
                excluded_entry.index + 1,
                excluded_entry.entry,
                excluded_entry.reason
            );
        }
    }

    let enumerator = RestraintSetEnumerator::from_candidates(candidates);
    info!(
        "{} of {} entries retained, {} excluded.",
        enumerator.retained(),
        entries.len(),
        excluded.len()
    );

    Ok(GenerationPlan {
        excluded,
        enumerator,
    })
}

/// `<output_dir>/<index>_<file_name>`.
pub fn artifact_path(output_dir: &Path, index: u64, file_name: &str) -> PathBuf {
    output_dir.join(format!("{}_{}", index, file_name))
}

/// Writes one `.tbl` file per restraint set, in enumeration order, and returns
/// how many were written.
///
/// The output directory is created if needed; an existing directory is reused
/// and files in it with the same names are overwritten.
#[instrument(skip_all, name = "write_restraint_files")]
pub fn write_all(
    plan: &GenerationPlan,
    output_dir: &Path,
    file_name: &str,
    reporter: &ProgressReporter,
) -> Result<u64, EngineError> {
    let notice = if output_dir.is_dir() {
        format!("Directory {} already exists.", output_dir.display())
    } else {
        std::fs::create_dir_all(output_dir).map_err(|e| EngineError::Output {
            path: output_dir.to_path_buf(),
            source: e,
        })?;
        format!("Directory {} was just created.", output_dir.display())
    };
    info!("{}", notice);
    reporter.report(Progress::Message(notice));

    reporter.report(Progress::WriteStart {
        total: plan.total().and_then(|n| u64::try_from(n).ok()),
    });

    let mut written = 0u64;
    for (index, set) in plan.enumerator.iter().enumerate() {
        let index = index as u64;
        let path = artifact_path(output_dir, index, file_name);
        let to_output_error = |e| EngineError::Output {
            path: path.clone(),
            source: e,
        };

        TblFile::write_to_path(set.iter(), &path).map_err(to_output_error)?;

        written += 1;
        reporter.report(Progress::FileWritten { index, path });
    }

    reporter.report(Progress::WriteFinish { written });
    info!("Wrote {} restraint file(s) to {}.", written, output_dir.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::entry::{AtomName, AtomRef};
    use crate::core::models::residue::ResidueType;
    use crate::core::models::restraint::DistanceBounds;
    use crate::engine::config::GenerationConfigBuilder;
    use std::sync::{Arc, Mutex};
    use tempfile::tempdir;

    const MEDIUM: DistanceBounds = DistanceBounds::new(3.0, 1.2, 0.5);

    fn entry(r1: usize, a1: &str, r2: usize, a2: &str) -> RawEntry {
        RawEntry::new(
            AtomRef::new(r1, a1.parse::<AtomName>().unwrap()),
            AtomRef::new(r2, a2.parse::<AtomName>().unwrap()),
            MEDIUM,
        )
    }

    fn config(limit: usize) -> GenerationConfig {
        GenerationConfigBuilder::new()
            .one_atom_max_limit(limit)
            .build()
            .unwrap()
    }

    // THR HG matches HG1 plus a methyl group (not all rotational, so no collapse),
    // ARG HH matches four labels: four alternatives per entry.
    fn two_ambiguous_entries() -> (SequenceTable, Vec<RawEntry>) {
        let sequence = SequenceTable::new(vec![
            ResidueType::Threonine,
            ResidueType::Alanine,
            ResidueType::Arginine,
        ]);
        let entries = vec![entry(1, "HG", 2, "HN"), entry(3, "HH", 2, "HA")];
        (sequence, entries)
    }

    #[test]
    fn plan_counts_product_of_candidate_sizes() {
        let (sequence, entries) = two_ambiguous_entries();
        let plan = plan(&sequence, &entries, &config(10)).unwrap();
        assert_eq!(plan.retained(), 2);
        assert_eq!(plan.total(), Some(16));
        assert!(plan.excluded.is_empty());
    }

    #[test]
    fn lower_budget_never_increases_output() {
        let (sequence, entries) = two_ambiguous_entries();
        let totals: Vec<u128> = (1..=8)
            .map(|limit| {
                plan(&sequence, &entries, &config(limit))
                    .unwrap()
                    .total()
                    .unwrap()
            })
            .collect();
        assert!(totals.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(totals.first(), Some(&1));
        assert_eq!(totals.last(), Some(&16));
    }

    #[test]
    fn over_budget_entries_are_reported_and_empty_product_gives_one_set() {
        let (sequence, entries) = two_ambiguous_entries();
        let plan = plan(&sequence, &entries, &config(2)).unwrap();
        assert_eq!(plan.retained(), 0);
        assert_eq!(plan.total(), Some(1));
        assert_eq!(plan.excluded.len(), 2);
        assert_eq!(
            plan.excluded[0].reason,
            ExclusionReason::BudgetExceeded {
                combinations: 4,
                budget: 2
            }
        );
    }

    #[test]
    fn unresolved_entries_are_reported_with_their_position() {
        let sequence = SequenceTable::new(vec![ResidueType::Alanine, ResidueType::Alanine]);
        let entries = vec![entry(1, "HN", 2, "HA"), entry(1, "HZ", 2, "HA")];
        let plan = plan(&sequence, &entries, &config(1)).unwrap();
        assert_eq!(plan.excluded.len(), 1);
        assert_eq!(plan.excluded[0].index, 1);
        assert_eq!(
            plan.excluded[0].reason,
            ExclusionReason::Unresolved(UnresolvedSide::First)
        );
        assert_eq!(plan.total(), Some(1));
    }

    #[test]
    fn plan_fails_on_residue_outside_sequence() {
        let sequence = SequenceTable::new(vec![ResidueType::Alanine]);
        let entries = vec![entry(1, "HN", 2, "HA")];
        let result = plan(&sequence, &entries, &config(1));
        assert!(matches!(
            result,
            Err(EngineError::ResidueOutOfRange { residue: 2, .. })
        ));
    }

    #[test]
    fn write_all_writes_indexed_files_in_enumeration_order() {
        let sequence = SequenceTable::new(vec![ResidueType::Serine, ResidueType::Alanine]);
        let entries = vec![entry(1, "HB", 2, "HN"), entry(2, "HN", 1, "HA")];
        let plan = plan(&sequence, &entries, &config(2)).unwrap();
        let dir = tempdir().unwrap();
        let output_dir = dir.path().join("tblfiles");

        let written = write_all(&plan, &output_dir, "protein.tbl", &ProgressReporter::new()).unwrap();

        assert_eq!(written, 2);
        let first = std::fs::read_to_string(output_dir.join("0_protein.tbl")).unwrap();
        let second = std::fs::read_to_string(output_dir.join("1_protein.tbl")).unwrap();
        assert_eq!(
            first,
            "assign (resid 1 and name HB1)(resid 2 and name HN) 3.0 1.2 0.5\n\
             assign (resid 2 and name HN)(resid 1 and name HA) 3.0 1.2 0.5"
        );
        assert!(second.starts_with("assign (resid 1 and name HB2)"));
        assert!(!output_dir.join("2_protein.tbl").exists());
    }

    #[test]
    fn write_all_reuses_existing_directory() {
        let sequence = SequenceTable::new(vec![ResidueType::Alanine, ResidueType::Alanine]);
        let entries = vec![entry(1, "HN", 2, "HA")];
        let plan = plan(&sequence, &entries, &config(1)).unwrap();
        let dir = tempdir().unwrap();

        let written = write_all(&plan, dir.path(), "out.tbl", &ProgressReporter::new()).unwrap();

        assert_eq!(written, 1);
        assert!(dir.path().join("0_out.tbl").exists());
    }

    #[test]
    fn write_all_reports_directory_notice_before_files() {
        let sequence = SequenceTable::new(vec![ResidueType::Alanine, ResidueType::Alanine]);
        let entries = vec![entry(1, "HN", 2, "HA")];
        let plan = plan(&sequence, &entries, &config(1)).unwrap();
        let dir = tempdir().unwrap();
        let output_dir = dir.path().join("tblfiles");

        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let reporter = ProgressReporter::with_callback(Box::new(move |event| {
            sink.lock().unwrap().push(event);
        }));

        write_all(&plan, &output_dir, "protein.tbl", &reporter).unwrap();
        write_all(&plan, &output_dir, "protein.tbl", &reporter).unwrap();

        let notices: Vec<String> = events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|event| match event {
                Progress::Message(msg) => Some(msg.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(notices.len(), 2);
        assert!(notices[0].ends_with("was just created."));
        assert!(notices[1].ends_with("already exists."));
        assert!(matches!(
            events.lock().unwrap().first(),
            Some(Progress::Message(_))
        ));
    }

    #[test]
    fn write_all_writes_empty_file_for_empty_set() {
        let sequence = SequenceTable::new(vec![ResidueType::Alanine]);
        let plan = plan(&sequence, &[], &config(1)).unwrap();
        let dir = tempdir().unwrap();

        let written = write_all(&plan, dir.path(), "protein.tbl", &ProgressReporter::new()).unwrap();

        assert_eq!(written, 1);
        let content = std::fs::read_to_string(dir.path().join("0_protein.tbl")).unwrap();
        assert!(content.is_empty());
    }

    #[test]
    fn artifact_path_prefixes_index() {
        assert_eq!(
            artifact_path(Path::new("tblfiles"), 3, "protein.tbl"),
            PathBuf::from("tblfiles/3_protein.tbl")
        );
    }
}
