use super::atom_line;
use crate::config::{GeometryFlags, RunConfig};
use crate::fragment::{BasisLabel, FragmentView, GHOST_PREFIX};
use std::fmt::Write;

/// NWChem single-point SCF deck for one fragment.
///
/// `movecs` is only written into the deck when the vectors are redirected
/// to the shared directory; otherwise NWChem's default `<job>.movecs` is
/// already the path the Monte Carlo deck expects.
pub fn format_nwchem_deck(
    job: &str,
    view: &FragmentView,
    config: &RunConfig,
    movecs: &str,
) -> String {
    let mut out = String::new();
    // writes to a String cannot fail
    let _ = writeln!(out, "title \"{job}\"\n");
    if let Some(mb) = config.memory {
        let _ = writeln!(out, "memory {mb} mb\n");
    }

    let _ = writeln!(out, "{}", geometry_directive(config.geometry));
    for atom in view.atoms() {
        let _ = writeln!(out, "    {}", atom_line(atom));
    }
    out.push_str("end\n\n");

    out.push_str("basis\n");
    for label in view.basis_labels() {
        let _ = writeln!(out, "    {}", basis_declaration(&label, &config.basis));
    }
    out.push_str("end\n\n");

    out.push_str("scf\n");
    out.push_str("    thresh 1.0e-8\n");
    if config.shared_movecs {
        let _ = writeln!(out, "    vectors output {movecs}");
    }
    out.push_str("end\n\n");

    out.push_str("task scf energy\n");
    out
}

fn geometry_directive(flags: GeometryFlags) -> String {
    let mut line = String::from("geometry nocenter");
    if flags.noautosym {
        line.push_str(" noautosym");
    }
    if flags.noautoz {
        line.push_str(" noautoz");
    }
    line
}

/// `O library aug-cc-pvdz` for a real atom, `xO library o aug-cc-pvdz` for
/// its ghost.
fn basis_declaration(label: &BasisLabel, basis: &str) -> String {
    if label.ghost {
        format!(
            "{GHOST_PREFIX}{} library {} {basis}",
            label.symbol,
            label.symbol.to_lowercase()
        )
    } else {
        format!("{} library {basis}", label.symbol)
    }
}
