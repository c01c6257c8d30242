use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "noetbl - Generates XPLOR/CNS distance-restraint (.tbl) files from ambiguous NOE assignments.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Expand NOE assignments into every combination of restraint files.
    Generate(GenerateArgs),
    /// Show the hydrogen labels known for each residue type.
    Catalog(CatalogArgs),
    /// Show which labels an atom name resolves to inside one residue type.
    Resolve(ResolveArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    // --- Inputs ---
    /// Path to the sequence file (whitespace-separated three-letter residue codes).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub sequence: PathBuf,

    /// Path to the assignment CSV (columns `hydrogen` and `intensity`).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub assignments: PathBuf,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Generation Overrides ---
    /// Maximum number of atom-pair alternatives accepted for a single entry.
    #[arg(short = 'm', long, value_name = "INT")]
    pub one_atom_max_limit: Option<usize>,

    /// Override the built-in s/m/w distance table with a TOML file.
    #[arg(long, value_name = "PATH")]
    pub intensity_table: Option<PathBuf>,

    // --- Output Overrides ---
    /// Directory receiving the generated files.
    #[arg(short, long, value_name = "PATH")]
    pub output_dir: Option<PathBuf>,

    /// Base file name; files are written as `<index>_<file-name>`.
    #[arg(short = 'n', long, value_name = "NAME")]
    pub file_name: Option<String>,

    /// Refuse to write anything if more than this many files would be produced.
    #[arg(long, value_name = "INT")]
    pub max_files: Option<u64>,

    /// Report the exclusions and the file count without writing any file.
    #[arg(long)]
    pub dry_run: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S generation.one-atom-max-limit=4
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `catalog` subcommand.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Three-letter residue code; all residues are listed when omitted.
    #[arg(value_name = "RESIDUE")]
    pub residue: Option<String>,
}

/// Arguments for the `resolve` subcommand.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Three-letter residue code (e.g. ILE).
    #[arg(required = true, value_name = "RESIDUE")]
    pub residue: String,

    /// Atom name as written in an assignment, without the residue number (e.g. HG1).
    #[arg(required = true, value_name = "ATOM")]
    pub atom: String,
}
