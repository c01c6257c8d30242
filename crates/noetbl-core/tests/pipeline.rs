use noetbl::core::forcefield::intensity::IntensityTable;
use noetbl::core::io::assignment::{AssignmentError, AssignmentFile};
use noetbl::core::io::sequence::{SequenceError, SequenceFile};
use noetbl::core::io::traits::InputFile;
use noetbl::engine::config::GenerationConfigBuilder;
use noetbl::engine::pair::UnresolvedSide;
use noetbl::engine::progress::ProgressReporter;
use noetbl::workflows::generate::{self, ExclusionReason};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn single_unambiguous_entry_produces_one_file_with_one_line() {
    let dir = tempdir().unwrap();
    let sequence_path = write(dir.path(), "sequence.seq", "ALA ALA\n");
    let csv_path = write(dir.path(), "noe.csv", "hydrogen,intensity\n1HN - 2HA,s\n");

    let sequence = SequenceFile.read_from_path(&sequence_path).unwrap();
    let table = IntensityTable::default();
    let entries = AssignmentFile::new(&table).read_from_path(&csv_path).unwrap();
    let config = GenerationConfigBuilder::new()
        .one_atom_max_limit(1)
        .build()
        .unwrap();

    let plan = generate::plan(&sequence, &entries, &config).unwrap();
    assert_eq!(plan.total(), Some(1));

    let output_dir = dir.path().join("tblfiles");
    let written =
        generate::write_all(&plan, &output_dir, "protein.tbl", &ProgressReporter::new()).unwrap();

    assert_eq!(written, 1);
    let content = fs::read_to_string(output_dir.join("0_protein.tbl")).unwrap();
    assert_eq!(
        content,
        "assign (resid 1 and name HN)(resid 2 and name HA) 2.5 0.7 0.4"
    );
}

#[test]
fn mixed_input_reports_exclusions_and_writes_every_combination() {
    let dir = tempdir().unwrap();
    let sequence_path = write(dir.path(), "sequence.seq", "ALA SER GLY ILE VAL\n");
    let csv_path = write(
        dir.path(),
        "noe.csv",
        "hydrogen,intensity\n\
         1HB - 2HN,s\n\
         2HB - 3HN,m\n\
         3HA - 4HN,w\n\
         4HG1 - 5HN,m\n\
         5HG - 1HN,w\n\
         4HX - 5HN,s\n",
    );

    let sequence = SequenceFile.read_from_path(&sequence_path).unwrap();
    let table = IntensityTable::default();
    let entries = AssignmentFile::new(&table).read_from_path(&csv_path).unwrap();
    let config = GenerationConfigBuilder::new()
        .one_atom_max_limit(2)
        .build()
        .unwrap();

    let plan = generate::plan(&sequence, &entries, &config).unwrap();

    // 1HB collapses to HB1; 2HB and 3HA give two each; 4HG1 gives HG11/HG12;
    // 5HG is a fully rotational pair of methyls and collapses; 4HX is unknown.
    assert_eq!(plan.retained(), 5);
    assert_eq!(plan.total(), Some(8));
    assert_eq!(plan.excluded.len(), 1);
    assert_eq!(plan.excluded[0].index, 5);
    assert_eq!(
        plan.excluded[0].reason,
        ExclusionReason::Unresolved(UnresolvedSide::First)
    );

    let output_dir = dir.path().join("out");
    let written =
        generate::write_all(&plan, &output_dir, "protein.tbl", &ProgressReporter::new()).unwrap();
    assert_eq!(written, 8);

    let first = fs::read_to_string(output_dir.join("0_protein.tbl")).unwrap();
    assert_eq!(
        first.lines().collect::<Vec<_>>(),
        vec![
            "assign (resid 1 and name HB1)(resid 2 and name HN) 2.5 0.7 0.4",
            "assign (resid 2 and name HB1)(resid 3 and name HN) 3.0 1.2 0.5",
            "assign (resid 3 and name HA1)(resid 4 and name HN) 4.0 2.2 1.1",
            "assign (resid 4 and name HG11)(resid 5 and name HN) 3.0 1.2 0.5",
            "assign (resid 5 and name HG11)(resid 1 and name HN) 4.0 2.2 1.1",
        ]
    );
    let last = fs::read_to_string(output_dir.join("7_protein.tbl")).unwrap();
    assert!(last.contains("name HB2)(resid 3"));
    assert!(last.contains("name HA2)(resid 4"));
    assert!(last.contains("name HG12)(resid 5"));
}

#[test]
fn budget_below_candidate_count_drops_both_entries_into_one_empty_set() {
    let dir = tempdir().unwrap();
    let sequence_path = write(dir.path(), "sequence.seq", "ARG ALA ARG\n");
    let csv_path = write(
        dir.path(),
        "noe.csv",
        "hydrogen,intensity\n1HH2 - 2HN,s\n3HB - 2HA,m\n",
    );

    let sequence = SequenceFile.read_from_path(&sequence_path).unwrap();
    let table = IntensityTable::default();
    let entries = AssignmentFile::new(&table).read_from_path(&csv_path).unwrap();

    let generous = GenerationConfigBuilder::new()
        .one_atom_max_limit(10)
        .build()
        .unwrap();
    assert_eq!(
        generate::plan(&sequence, &entries, &generous)
            .unwrap()
            .total(),
        Some(4)
    );

    let strict = GenerationConfigBuilder::new()
        .one_atom_max_limit(1)
        .build()
        .unwrap();
    let plan = generate::plan(&sequence, &entries, &strict).unwrap();
    assert_eq!(plan.total(), Some(1));
    assert_eq!(plan.excluded.len(), 2);
    let sets: Vec<_> = plan.enumerator.iter().collect();
    assert_eq!(sets.len(), 1);
    assert!(sets[0].is_empty());
}

#[test]
fn malformed_sequence_fails_before_assignments_are_read() {
    let dir = tempdir().unwrap();
    let sequence_path = write(dir.path(), "sequence.seq", "ALA  ALA\n");

    let result = SequenceFile.read_from_path(&sequence_path);

    assert!(matches!(result, Err(SequenceError::Malformed { line: 1, .. })));
}

#[test]
fn malformed_assignment_row_is_named() {
    let dir = tempdir().unwrap();
    let csv_path = write(
        dir.path(),
        "noe.csv",
        "hydrogen,intensity\n1HN - 2HA,s\n1HN / 2HA,s\n",
    );

    let table = IntensityTable::default();
    let result = AssignmentFile::new(&table).read_from_path(&csv_path);

    match result {
        Err(AssignmentError::MalformedEntry { row, text, .. }) => {
            assert_eq!(row, 3);
            assert_eq!(text, "1HN / 2HA");
        }
        other => panic!("expected MalformedEntry, got {:?}", other),
    }
}
