use super::element::Element;
use std::fmt;

/// Molecules with more than this many atoms are "big" for game-difficulty
/// purposes; the balance algorithm never looks at this.
const BIG_MOLECULE_THRESHOLD: usize = 5;

/// An immutable chemical species: an ordered sequence of atoms and the
/// display symbol derived from it.
///
/// The atom order is significant. Consecutive runs of the same element are
/// collapsed into one symbol-plus-subscript group, but chemically identical
/// elements that are not adjacent stay separate (`[C,H,H,H,O,H]` renders as
/// `CH₃OH`, not `CH₄O`). Downstream atom counting also iterates atoms in
/// exactly this order.
///
/// Each species in the catalog is constructed once and shared by reference
/// across every equation that uses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Molecule {
    symbol: String,
    plain_symbol: String,
    atoms: Vec<Element>,
}

impl Molecule {
    pub fn new(atoms: &[Element]) -> Self {
        debug_assert!(!atoms.is_empty(), "a molecule needs at least one atom");
        let mut symbol = String::new();
        let mut plain_symbol = String::new();
        let mut i = 0;
        while i < atoms.len() {
            let element = atoms[i];
            let mut run = 1;
            while i + run < atoms.len() && atoms[i + run] == element {
                run += 1;
            }
            symbol.push_str(element.symbol());
            plain_symbol.push_str(element.symbol());
            if run > 1 {
                symbol.push_str(&subscript(run));
                plain_symbol.push_str(&run.to_string());
            }
            i += run;
        }
        Self {
            symbol,
            plain_symbol,
            atoms: atoms.to_vec(),
        }
    }

    /// The display symbol with Unicode subscripts, e.g. `"C₂H₆"`.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The markup-free symbol variant, e.g. `"C2H6"`.
    pub fn plain_symbol(&self) -> &str {
        &self.plain_symbol
    }

    /// The atoms in their defining order, one entry per atom.
    pub fn atoms(&self) -> &[Element] {
        &self.atoms
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_big(&self) -> bool {
        self.atoms.len() > BIG_MOLECULE_THRESHOLD
    }
}

impl fmt::Display for Molecule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

fn subscript(n: usize) -> String {
    const DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];
    n.to_string()
        .bytes()
        .map(|b| DIGITS[(b - b'0') as usize])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::element::Element::{C, Cl, H, O, P};

    #[test]
    fn single_atom_has_bare_symbol() {
        let molecule = Molecule::new(&[C]);
        assert_eq!(molecule.symbol(), "C");
        assert_eq!(molecule.plain_symbol(), "C");
        assert_eq!(molecule.atom_count(), 1);
    }

    #[test]
    fn runs_collapse_into_subscripts() {
        let molecule = Molecule::new(&[C, C, H, H, H, H, H, H]);
        assert_eq!(molecule.symbol(), "C₂H₆");
        assert_eq!(molecule.plain_symbol(), "C2H6");
    }

    #[test]
    fn non_adjacent_equal_elements_stay_separate() {
        let methanol = Molecule::new(&[C, H, H, H, O, H]);
        assert_eq!(methanol.symbol(), "CH₃OH");
        assert_eq!(methanol.plain_symbol(), "CH3OH");

        let ethanol = Molecule::new(&[C, C, H, H, H, H, H, O, H]);
        assert_eq!(ethanol.symbol(), "C₂H₅OH");
        assert_eq!(ethanol.plain_symbol(), "C2H5OH");
    }

    #[test]
    fn atoms_preserve_input_order() {
        let molecule = Molecule::new(&[C, H, H, O]);
        assert_eq!(molecule.atoms(), &[C, H, H, O]);
    }

    #[test]
    fn is_big_uses_strictly_more_than_five_atoms() {
        // CH4 has exactly 5 atoms and is not big.
        assert!(!Molecule::new(&[C, H, H, H, H]).is_big());
        // PCl5 has 6 atoms and is.
        assert!(Molecule::new(&[P, Cl, Cl, Cl, Cl, Cl]).is_big());
    }

    #[test]
    fn display_uses_subscripted_symbol() {
        assert_eq!(Molecule::new(&[H, H, O]).to_string(), "H₂O");
    }
}
