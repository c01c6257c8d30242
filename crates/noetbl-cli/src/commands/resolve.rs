use super::normalize_arg;
use crate::cli::ResolveArgs;
use crate::error::{CliError, Result};
use noetbl::core::forcefield::catalog::ForceFieldCatalog;
use noetbl::core::models::entry::AtomName;
use noetbl::core::models::residue::ResidueType;
use noetbl::engine::pair::collapse_rotational;
use noetbl::engine::resolver::{AtomResolver, ResolvedAtom};

pub fn run(args: ResolveArgs) -> Result<()> {
    let residue_type: ResidueType = normalize_arg(&args.residue)
        .parse()
        .map_err(|e| CliError::Argument(format!("{}", e)))?;
    let name: AtomName = normalize_arg(&args.atom)
        .parse()
        .map_err(|e| CliError::Argument(format!("'{}': {}", args.atom, e)))?;

    let catalog = ForceFieldCatalog::new();
    let resolved = AtomResolver::new(&catalog).resolve(&name, residue_type);

    if resolved.is_empty() {
        println!("{} in {}: no matching label", name, residue_type);
        return Ok(());
    }

    println!("{} in {}: {}", name, residue_type, join_labels(&resolved));
    let collapsed = collapse_rotational(resolved.clone());
    if collapsed.len() < resolved.len() {
        println!("  rotating group, represented by {}", join_labels(&collapsed));
    }
    Ok(())
}

fn join_labels(atoms: &[ResolvedAtom]) -> String {
    atoms
        .iter()
        .map(|atom| atom.label.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
