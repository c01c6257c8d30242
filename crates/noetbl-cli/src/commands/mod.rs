pub mod catalog;
pub mod generate;
pub mod resolve;

/// Trims and upper-cases a residue code or atom name given on the command line.
pub(crate) fn normalize_arg(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}
