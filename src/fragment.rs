//! Counterpoise partitioning of a dimer into three fragments.

use crate::geometry::{Atom, Geometry};
use itertools::Itertools;
use std::fmt;

/// Prefix marking a ghost (basis-only) atom in the generated decks.
pub const GHOST_PREFIX: &str = "x";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fragment {
    Dimer,
    MonomerA,
    MonomerB,
}

impl Fragment {
    /// Generation order; scripts list the fragments in this order.
    pub const ALL: [Fragment; 3] = [Fragment::Dimer, Fragment::MonomerA, Fragment::MonomerB];

    pub fn suffix(self) -> &'static str {
        match self {
            Fragment::Dimer => "dimer",
            Fragment::MonomerA => "monomer_a",
            Fragment::MonomerB => "monomer_b",
        }
    }

    pub fn is_dimer(self) -> bool {
        self == Fragment::Dimer
    }

    /// Whether the atom at zero-based `index` is a ghost in this fragment.
    ///
    /// Atoms are numbered from one in the XYZ body: monomer A ghosts every
    /// atom numbered above `split`, monomer B every atom numbered at or below
    /// it. For an odd atom count the middle atom is therefore real in
    /// monomer B.
    pub fn ghosts(self, index: usize, split: usize) -> bool {
        let number = index + 1;
        match self {
            Fragment::Dimer => false,
            Fragment::MonomerA => number > split,
            Fragment::MonomerB => number <= split,
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// An atom as seen from one fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentAtom<'a> {
    pub atom: &'a Atom,
    pub ghost: bool,
}

impl FragmentAtom<'_> {
    /// The label written to the decks, `xO` for a ghosted oxygen.
    pub fn label(&self) -> String {
        if self.ghost {
            format!("{GHOST_PREFIX}{}", self.atom.symbol)
        } else {
            self.atom.symbol.clone()
        }
    }
}

/// One basis declaration of a fragment: an element, possibly ghosted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BasisLabel {
    pub symbol: String,
    pub ghost: bool,
}

/// Borrowed view of a geometry with the other monomer ghosted.
#[derive(Debug, Clone)]
pub struct FragmentView<'a> {
    pub fragment: Fragment,
    atoms: Vec<FragmentAtom<'a>>,
}

impl<'a> FragmentView<'a> {
    pub fn new(geometry: &'a Geometry, fragment: Fragment) -> Self {
        let split = geometry.split_index();
        let atoms = geometry
            .atoms()
            .iter()
            .enumerate()
            .map(|(i, atom)| FragmentAtom {
                atom,
                ghost: fragment.ghosts(i, split),
            })
            .collect();
        Self { fragment, atoms }
    }

    pub fn atoms(&self) -> &[FragmentAtom<'a>] {
        &self.atoms
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn ghost_count(&self) -> usize {
        self.atoms.iter().filter(|a| a.ghost).count()
    }

    /// Distinct labels in first-appearance order.
    pub fn basis_labels(&self) -> Vec<BasisLabel> {
        self.atoms
            .iter()
            .map(|a| BasisLabel {
                symbol: a.atom.symbol.clone(),
                ghost: a.ghost,
            })
            .unique()
            .collect()
    }
}

/// The three fragment views of a dimer in generation order.
pub fn partition(geometry: &Geometry) -> [FragmentView<'_>; 3] {
    Fragment::ALL.map(|fragment| FragmentView::new(geometry, fragment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn geometry(text: &str) -> Geometry {
        Geometry::parse(text, Path::new("t_dimer.xyz")).unwrap()
    }

    fn labels(view: &FragmentView) -> Vec<String> {
        view.atoms().iter().map(FragmentAtom::label).collect()
    }

    #[test]
    fn test_carbon_oxygen_dimer() {
        let geom = geometry("4\nC 0 0 0\nC 0 0 1.5\nO 2 0 0\nO 2 0 1.5\n");
        let [dimer, a, b] = partition(&geom);
        assert_eq!(labels(&dimer), ["C", "C", "O", "O"]);
        assert_eq!(labels(&a), ["C", "C", "xO", "xO"]);
        assert_eq!(labels(&b), ["xC", "xC", "O", "O"]);
    }

    #[test]
    fn test_odd_count_middle_atom_is_real_in_monomer_b() {
        let geom = geometry("5\nO 0 0 0\nH 0 0 1\nN 3 0 0\nH 3 0 1\nH 3 1 0\n");
        let [_, a, b] = partition(&geom);
        assert_eq!(geom.split_index(), 2);
        assert_eq!(labels(&a), ["O", "H", "xN", "xH", "xH"]);
        assert_eq!(labels(&b), ["xO", "xH", "N", "H", "H"]);
    }

    #[test]
    fn test_fragments_keep_every_atom() {
        for n in 1..12 {
            let body: String = (0..n).map(|i| format!("H 0 0 {i}\n")).collect();
            let geom = geometry(&format!("{n}\n{body}"));
            for view in partition(&geom) {
                assert_eq!(view.len(), geom.len());
            }
        }
    }

    #[test]
    fn test_ghosting_is_complementary() {
        for n in 1..12 {
            let split = n / 2;
            for i in 0..n {
                let a = Fragment::MonomerA.ghosts(i, split);
                let b = Fragment::MonomerB.ghosts(i, split);
                assert!(a ^ b, "atom {i} of {n}");
                assert!(!Fragment::Dimer.ghosts(i, split));
            }
        }
    }

    #[test]
    fn test_basis_labels_are_distinct_labels() {
        let geom = geometry("6\nO 0 0 0\nH 0 0 1\nH 0 1 0\nO 3 0 0\nH 3 0 1\nH 3 1 0\n");
        let [dimer, a, _] = partition(&geom);

        let got: Vec<String> = a
            .basis_labels()
            .iter()
            .map(|l| if l.ghost { format!("x{}", l.symbol) } else { l.symbol.clone() })
            .collect();
        assert_eq!(got, ["O", "H", "xO", "xH"]);
        assert_eq!(a.ghost_count(), 3);

        assert_eq!(dimer.basis_labels().len(), 2);
        assert!(dimer.basis_labels().iter().all(|l| !l.ghost));
    }
}
