//! Formatters for the per-fragment input files.
//!
//! Each formatter is a pure function returning the file contents; writing
//! them to disk is left to [`crate::app`].

mod mc;
mod nwchem;
mod xyz;

pub use mc::{format_mc_deck, mc_job_name, MC_JOB_SUFFIX};
pub use nwchem::format_nwchem_deck;
pub use xyz::{atom_line, format_xyz};

use crate::fragment::Fragment;

/// Directory shared by all molecules when movecs files are pooled,
/// relative to the output root.
pub const SHARED_MOVECS_DIR: &str = "movecs";

/// Job name of one fragment, e.g. `water_monomer_a`. Every file of the
/// fragment is named after it.
pub fn job_name(molecule: &str, fragment: Fragment) -> String {
    format!("{}_{}", molecule, fragment.suffix())
}

/// Movecs path as seen from the molecule directory.
pub fn movecs_path(job: &str, shared: bool) -> String {
    if shared {
        format!("../{SHARED_MOVECS_DIR}/{job}.movecs")
    } else {
        format!("{job}.movecs")
    }
}
