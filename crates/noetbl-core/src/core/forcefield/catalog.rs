use crate::core::models::residue::{ResidueType, UnknownResidueType};
use std::fmt;
use std::str::FromStr;

/// One hydrogen label in a residue's force-field atom inventory.
///
/// `rotational` marks members of a freely rotating group (the three protons of
/// a methyl, for example). Members of such a group cannot be told apart by an
/// NOE measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ForceFieldEntry {
    pub base: &'static str,
    pub number: Option<u32>,
    pub rotational: bool,
}

impl ForceFieldEntry {
    pub const fn plain(base: &'static str) -> Self {
        Self {
            base,
            number: None,
            rotational: false,
        }
    }

    pub const fn numbered(base: &'static str, number: u32) -> Self {
        Self {
            base,
            number: Some(number),
            rotational: false,
        }
    }

    pub const fn rotor(base: &'static str, number: u32) -> Self {
        Self {
            base,
            number: Some(number),
            rotational: true,
        }
    }

    /// The force-field atom name, e.g. `HB2` or `HN`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ForceFieldEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base)?;
        if let Some(number) = self.number {
            write!(f, "{}", number)?;
        }
        Ok(())
    }
}

use ForceFieldEntry as E;

static ALA: &[ForceFieldEntry] = &[
    E::plain("HN"),
    E::plain("HA"),
    E::rotor("HB", 1),
    E::rotor("HB", 2),
    E::rotor("HB", 3),
];

static ARG: &[ForceFieldEntry] = &[
    E::plain("HN"),
    E::plain("HA"),
    E::numbered("HB", 1),
    E::numbered("HB", 2),
    E::numbered("HG", 1),
    E::numbered("HG", 2),
    E::numbered("HH", 11),
    E::numbered("HH", 12),
    E::numbered("HH", 21),
    E::numbered("HH", 22),
];

static ASN: &[ForceFieldEntry] = &[
    E::plain("HN"),
    E::plain("HA"),
    E::numbered("HB", 1),
    E::numbered("HB", 2),
    E::numbered("HD", 21),
    E::numbered("HD", 22),
];

static ASP: &[ForceFieldEntry] = &[
    E::plain("HN"),
    E::plain("HA"),
    E::numbered("HB", 1),
    E::numbered("HB", 2),
];

static CYS: &[ForceFieldEntry] = &[
    E::plain("HN"),
    E::plain("HA"),
    E::numbered("HB", 1),
    E::numbered("HB", 2),
    E::plain("HG"),
];

static GLU: &[ForceFieldEntry] = &[
    E::plain("HN"),
    E::plain("HA"),
    E::numbered("HB", 1),
    E::numbered("HB", 2),
    E::numbered("HG", 1),
    E::numbered("HG", 2),
];

static GLN: &[ForceFieldEntry] = &[
    E::plain("HN"),
    E::plain("HA"),
    E::numbered("HB", 1),
    E::numbered("HB", 2),
    E::numbered("HG", 1),
    E::numbered("HG", 2),
    E::numbered("HH", 21),
    E::numbered("HH", 22),
];

static GLY: &[ForceFieldEntry] = &[E::plain("HN"), E::numbered("HA", 1), E::numbered("HA", 2)];

// HE1/HE2 sit on both a carbon and a nitrogen; the catalog does not separate them.
static HIS: &[ForceFieldEntry] = &[
    E::plain("HN"),
    E::plain("HA"),
    E::numbered("HB", 1),
    E::numbered("HB", 2),
    E::numbered("HD", 1),
    E::numbered("HD", 2),
    E::numbered("HE", 1),
    E::numbered("HE", 2),
];

// ILE and LEU share one inventory.
static ILE_LEU: &[ForceFieldEntry] = &[
    E::plain("HN"),
    E::plain("HA"),
    E::plain("HB"),
    E::numbered("HG", 11),
    E::numbered("HG", 12),
    E::rotor("HG", 21),
    E::rotor("HG", 22),
    E::rotor("HG", 23),
    E::rotor("HD", 11),
    E::rotor("HD", 12),
    E::rotor("HD", 13),
];

static LYS: &[ForceFieldEntry] = &[
    E::plain("HN"),
    E::plain("HA"),
    E::numbered("HB", 1),
    E::numbered("HB", 2),
    E::numbered("HG", 1),
    E::numbered("HG", 2),
    E::numbered("HD", 1),
    E::numbered("HD", 2),
    E::numbered("HE", 1),
    E::numbered("HE", 2),
    E::rotor("HZ", 11),
    E::rotor("HZ", 12),
    E::rotor("HZ", 13),
];

static MET: &[ForceFieldEntry] = &[
    E::plain("HN"),
    E::plain("HA"),
    E::numbered("HB", 1),
    E::numbered("HB", 2),
    E::numbered("HG", 1),
    E::numbered("HG", 2),
    E::rotor("HE", 1),
    E::rotor("HE", 2),
    E::rotor("HE", 3),
];

static PHE: &[ForceFieldEntry] = &[
    E::plain("HN"),
    E::plain("HA"),
    E::numbered("HB", 1),
    E::numbered("HB", 2),
    E::numbered("HD", 1),
    E::numbered("HD", 2),
    E::numbered("HE", 1),
    E::numbered("HE", 2),
    E::plain("HZ"),
];

static PRO: &[ForceFieldEntry] = &[
    E::plain("HA"),
    E::numbered("HB", 1),
    E::numbered("HB", 2),
    E::numbered("HG", 1),
    E::numbered("HG", 2),
    E::numbered("HD", 1),
    E::numbered("HD", 2),
];

static SER: &[ForceFieldEntry] = &[
    E::plain("HN"),
    E::plain("HA"),
    E::numbered("HB", 1),
    E::numbered("HB", 2),
    E::plain("HG"),
];

static THR: &[ForceFieldEntry] = &[
    E::plain("HN"),
    E::plain("HA"),
    E::plain("HB"),
    E::numbered("HG", 1),
    E::rotor("HG", 21),
    E::rotor("HG", 22),
    E::rotor("HG", 23),
];

static TRP: &[ForceFieldEntry] = &[
    E::plain("HN"),
    E::plain("HA"),
    E::numbered("HB", 1),
    E::numbered("HB", 2),
    E::numbered("HD", 1),
    E::numbered("HE", 1),
    E::numbered("HE", 3),
    E::numbered("HZ", 2),
    E::numbered("HZ", 3),
    E::numbered("HH", 2),
];

static TYR: &[ForceFieldEntry] = &[
    E::plain("HN"),
    E::plain("HA"),
    E::numbered("HB", 1),
    E::numbered("HB", 2),
    E::numbered("HD", 1),
    E::numbered("HD", 2),
    E::numbered("HE", 1),
    E::numbered("HE", 2),
    E::plain("HH"),
];

static VAL: &[ForceFieldEntry] = &[
    E::plain("HN"),
    E::plain("HA"),
    E::plain("HB"),
    E::rotor("HG", 11),
    E::rotor("HG", 12),
    E::rotor("HG", 13),
    E::rotor("HG", 21),
    E::rotor("HG", 22),
    E::rotor("HG", 23),
];

// CPC and TPC share one inventory.
static CPC_TPC: &[ForceFieldEntry] = &[
    E::plain("HN"),
    E::plain("HA"),
    E::plain("HB"),
    E::numbered("HG", 11),
    E::numbered("HG", 12),
    E::numbered("HG", 21),
    E::numbered("HG", 22),
    E::numbered("HD", 1),
    E::numbered("HD", 2),
];

static ACE: &[ForceFieldEntry] = &[E::rotor("HA", 1), E::rotor("HA", 2), E::rotor("HA", 3)];

/// The hand-curated force-field hydrogen inventory for every supported residue type.
///
/// The table is immutable static data; the order of entries within a residue is
/// significant because resolution results preserve it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForceFieldCatalog;

impl ForceFieldCatalog {
    pub fn new() -> Self {
        Self
    }

    pub fn entries_for(&self, residue_type: ResidueType) -> &'static [ForceFieldEntry] {
        match residue_type {
            ResidueType::Alanine => ALA,
            ResidueType::Arginine => ARG,
            ResidueType::Asparagine => ASN,
            ResidueType::AsparticAcid => ASP,
            ResidueType::Cysteine => CYS,
            ResidueType::GlutamicAcid => GLU,
            ResidueType::Glutamine => GLN,
            ResidueType::Glycine => GLY,
            ResidueType::Histidine => HIS,
            ResidueType::Isoleucine | ResidueType::Leucine => ILE_LEU,
            ResidueType::Lysine => LYS,
            ResidueType::Methionine => MET,
            ResidueType::Phenylalanine => PHE,
            ResidueType::Proline => PRO,
            ResidueType::Serine => SER,
            ResidueType::Threonine => THR,
            ResidueType::Tryptophan => TRP,
            ResidueType::Tyrosine => TYR,
            ResidueType::Valine => VAL,
            ResidueType::Cpc | ResidueType::Tpc => CPC_TPC,
            ResidueType::Acetyl => ACE,
        }
    }

    /// Looks up a residue by its three-letter code.
    pub fn entries_for_code(
        &self,
        code: &str,
    ) -> Result<&'static [ForceFieldEntry], UnknownResidueType> {
        ResidueType::from_str(code).map(|residue_type| self.entries_for(residue_type))
    }
}
