use crate::cli::GenerateArgs;
use crate::config::{GenerateSettings, PartialGenerateConfig};
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use noetbl::core::io::assignment::AssignmentFile;
use noetbl::core::io::sequence::SequenceFile;
use noetbl::core::io::traits::InputFile;
use noetbl::engine::progress::ProgressReporter;
use noetbl::workflows::generate::{self as workflow, GenerationPlan};
use tracing::{debug, info};

pub fn run(args: GenerateArgs) -> Result<()> {
    info!("Starting restraint generation workflow.");

    let partial_config = match &args.config {
        Some(path) => PartialGenerateConfig::from_file(path)?,
        None => PartialGenerateConfig::default(),
    };
    let settings = partial_config.merge_with_cli(&args)?;
    debug!("Final configuration: {:?}", settings);

    let handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(handler.get_callback());
    execute(&args, &settings, &reporter)?;
    Ok(())
}

/// Runs the pipeline and returns how many files were written (`0` on a dry run).
pub fn execute(
    args: &GenerateArgs,
    settings: &GenerateSettings,
    reporter: &ProgressReporter,
) -> Result<u64> {
    info!("Reading sequence from {:?}", &args.sequence);
    let sequence = SequenceFile
        .read_from_path(&args.sequence)
        .map_err(|e| CliError::FileParsing {
            path: args.sequence.clone(),
            source: e.into(),
        })?;
    println!(
        "Loaded {} residue(s) from {}",
        sequence.len(),
        args.sequence.display()
    );

    info!("Reading assignments from {:?}", &args.assignments);
    let entries = AssignmentFile::new(&settings.generation.intensities)
        .read_from_path(&args.assignments)
        .map_err(|e| CliError::FileParsing {
            path: args.assignments.clone(),
            source: e.into(),
        })?;
    println!(
        "Loaded {} assignment(s) from {}",
        entries.len(),
        args.assignments.display()
    );

    let plan = workflow::plan(&sequence, &entries, &settings.generation)?;
    print_summary(&plan, entries.len());
    check_artifact_limit(&plan, settings.max_files)?;

    if args.dry_run {
        println!("Dry run: no files written.");
        return Ok(0);
    }

    println!(
        "Generating different combinations for files to save, if it is too long, interrupt the program."
    );
    let written = workflow::write_all(&plan, &settings.output_dir, &settings.file_name, reporter)?;
    println!(
        "Wrote {} file(s) to {}",
        written,
        settings.output_dir.display()
    );
    Ok(written)
}

fn print_summary(plan: &GenerationPlan, entry_count: usize) {
    if !plan.excluded.is_empty() {
        println!("Excluded {} assignment(s):", plan.excluded.len());
        for excluded in &plan.excluded {
            println!(
                "  ✗ entry {} ({}): {}",
                excluded.index + 1,
                excluded.entry,
                excluded.reason
            );
        }
    }
    println!(
        "{} of {} assignment(s) retained.",
        plan.retained(),
        entry_count
    );
    match plan.total() {
        Some(total) => println!("Number of files to save is: {}", total),
        None => println!("Number of files to save is: overflowed (more than 2^128)"),
    }
}

fn check_artifact_limit(plan: &GenerationPlan, max_files: Option<u64>) -> Result<()> {
    let Some(limit) = max_files else {
        return Ok(());
    };
    match plan.total() {
        Some(total) if total <= u128::from(limit) => Ok(()),
        Some(total) => Err(CliError::TooManyArtifacts {
            total: total.to_string(),
            limit,
        }),
        None => Err(CliError::TooManyArtifacts {
            total: "overflowed".to_string(),
            limit,
        }),
    }
}
