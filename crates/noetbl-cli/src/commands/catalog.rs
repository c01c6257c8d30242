use super::normalize_arg;
use crate::cli::CatalogArgs;
use crate::error::{CliError, Result};
use noetbl::core::forcefield::catalog::{ForceFieldCatalog, ForceFieldEntry};
use noetbl::core::models::residue::ResidueType;
use tracing::info;

pub fn run(args: CatalogArgs) -> Result<()> {
    let catalog = ForceFieldCatalog::new();
    let rows: Vec<(String, &'static [ForceFieldEntry])> = match &args.residue {
        Some(code) => {
            let code = normalize_arg(code);
            let entries = catalog
                .entries_for_code(&code)
                .map_err(|e| CliError::Argument(e.to_string()))?;
            vec![(code, entries)]
        }
        None => ResidueType::ALL
            .iter()
            .map(|&residue_type| {
                (
                    residue_type.code().to_string(),
                    catalog.entries_for(residue_type),
                )
            })
            .collect(),
    };
    info!("Listing hydrogen labels for {} residue type(s).", rows.len());

    for (code, entries) in &rows {
        println!("{}", describe(code, entries));
    }
    println!("(* = member of a rotating group)");
    Ok(())
}

/// One line per residue: the code, then every label in catalog order.
fn describe(code: &str, entries: &[ForceFieldEntry]) -> String {
    let labels: Vec<String> = entries
        .iter()
        .map(|entry| {
            if entry.rotational {
                format!("{}*", entry.label())
            } else {
                entry.label()
            }
        })
        .collect();
    format!("{:<4} {}", code, labels.join(" "))
}
