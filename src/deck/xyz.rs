use crate::fragment::{FragmentAtom, FragmentView};

/// One coordinate line, shared by the XYZ file and the NWChem geometry block.
pub fn atom_line(atom: &FragmentAtom) -> String {
    let p = &atom.atom.position;
    format!("{:<4}{:>16.10}{:>16.10}{:>16.10}", atom.label(), p.x, p.y, p.z)
}

/// XYZ file of a fragment with ghost atoms relabelled. The comment line is
/// left blank.
pub fn format_xyz(view: &FragmentView) -> String {
    let mut out = format!("{}\n\n", view.len());
    for atom in view.atoms() {
        out.push_str(&atom_line(atom));
        out.push('\n');
    }
    out
}
