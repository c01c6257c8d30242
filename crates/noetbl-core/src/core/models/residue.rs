use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResidueType {
    // --- Standard Amino Acids ---
    Alanine,       // Alanine (ALA)
    Arginine,      // Arginine (ARG)
    Asparagine,    // Asparagine (ASN)
    AsparticAcid,  // Aspartic Acid (ASP)
    Cysteine,      // Cysteine (CYS)
    GlutamicAcid,  // Glutamic Acid (GLU)
    Glutamine,     // Glutamine (GLN)
    Glycine,       // Glycine (GLY)
    Histidine,     // Histidine (HIS)
    Isoleucine,    // Isoleucine (ILE)
    Leucine,       // Leucine (LEU)
    Lysine,        // Lysine (LYS)
    Methionine,    // Methionine (MET)
    Phenylalanine, // Phenylalanine (PHE)
    Proline,       // Proline (PRO)
    Serine,        // Serine (SER)
    Threonine,     // Threonine (THR)
    Tryptophan,    // Tryptophan (TRP)
    Tyrosine,      // Tyrosine (TYR)
    Valine,        // Valine (VAL)

    // --- Custom Residues ---
    Cpc,    // Custom cyclic residue (CPC)
    Tpc,    // Custom cyclic residue (TPC)
    Acetyl, // N-terminal acetyl cap (ACE)
}

static RESIDUE_CODES: Map<&'static str, ResidueType> = phf_map! {
    "ALA" => ResidueType::Alanine,
    "ARG" => ResidueType::Arginine,
    "ASN" => ResidueType::Asparagine,
    "ASP" => ResidueType::AsparticAcid,
    "CYS" => ResidueType::Cysteine,
    "GLU" => ResidueType::GlutamicAcid,
    "GLN" => ResidueType::Glutamine,
    "GLY" => ResidueType::Glycine,
    "HIS" => ResidueType::Histidine,
    "ILE" => ResidueType::Isoleucine,
    "LEU" => ResidueType::Leucine,
    "LYS" => ResidueType::Lysine,
    "MET" => ResidueType::Methionine,
    "PHE" => ResidueType::Phenylalanine,
    "PRO" => ResidueType::Proline,
    "SER" => ResidueType::Serine,
    "THR" => ResidueType::Threonine,
    "TRP" => ResidueType::Tryptophan,
    "TYR" => ResidueType::Tyrosine,
    "VAL" => ResidueType::Valine,
    "CPC" => ResidueType::Cpc,
    "TPC" => ResidueType::Tpc,
    "ACE" => ResidueType::Acetyl,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown residue type code: '{0}'")]
pub struct UnknownResidueType(pub String);

impl ResidueType {
    /// Every residue type known to the force-field catalog, in catalog order.
    pub const ALL: [ResidueType; 23] = [
        ResidueType::Alanine,
        ResidueType::Arginine,
        ResidueType::Asparagine,
        ResidueType::AsparticAcid,
        ResidueType::Cysteine,
        ResidueType::GlutamicAcid,
        ResidueType::Glutamine,
        ResidueType::Glycine,
        ResidueType::Histidine,
        ResidueType::Isoleucine,
        ResidueType::Leucine,
        ResidueType::Lysine,
        ResidueType::Methionine,
        ResidueType::Phenylalanine,
        ResidueType::Proline,
        ResidueType::Serine,
        ResidueType::Threonine,
        ResidueType::Tryptophan,
        ResidueType::Tyrosine,
        ResidueType::Valine,
        ResidueType::Cpc,
        ResidueType::Tpc,
        ResidueType::Acetyl,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ResidueType::Alanine => "ALA",
            ResidueType::Arginine => "ARG",
            ResidueType::Asparagine => "ASN",
            ResidueType::AsparticAcid => "ASP",
            ResidueType::Cysteine => "CYS",
            ResidueType::GlutamicAcid => "GLU",
            ResidueType::Glutamine => "GLN",
            ResidueType::Glycine => "GLY",
            ResidueType::Histidine => "HIS",
            ResidueType::Isoleucine => "ILE",
            ResidueType::Leucine => "LEU",
            ResidueType::Lysine => "LYS",
            ResidueType::Methionine => "MET",
            ResidueType::Phenylalanine => "PHE",
            ResidueType::Proline => "PRO",
            ResidueType::Serine => "SER",
            ResidueType::Threonine => "THR",
            ResidueType::Tryptophan => "TRP",
            ResidueType::Tyrosine => "TYR",
            ResidueType::Valine => "VAL",
            ResidueType::Cpc => "CPC",
            ResidueType::Tpc => "TPC",
            ResidueType::Acetyl => "ACE",
        }
    }
}

impl FromStr for ResidueType {
    type Err = UnknownResidueType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RESIDUE_CODES
            .get(s)
            .copied()
            .ok_or_else(|| UnknownResidueType(s.to_string()))
    }
}

impl fmt::Display for ResidueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
