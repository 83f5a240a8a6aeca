use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A chemical element from the fixed set the equation catalog is built over.
///
/// Elements are compared by identity (enum equality), never by symbol string.
/// Display properties beyond the symbol exist for consumers such as particle
/// visualizations; the balance algorithm itself only uses identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    /// Hydrogen.
    H,
    /// Carbon.
    C,
    /// Nitrogen.
    N,
    /// Oxygen.
    O,
    /// Fluorine.
    F,
    /// Phosphorus.
    P,
    /// Sulfur.
    S,
    /// Chlorine.
    Cl,
}

static ELEMENTS_BY_SYMBOL: Map<&'static str, Element> = phf_map! {
    "H" => Element::H,
    "C" => Element::C,
    "N" => Element::N,
    "O" => Element::O,
    "F" => Element::F,
    "P" => Element::P,
    "S" => Element::S,
    "Cl" => Element::Cl,
};

impl Element {
    /// The display symbol, e.g. `"Cl"`.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Element::H => "H",
            Element::C => "C",
            Element::N => "N",
            Element::O => "O",
            Element::F => "F",
            Element::P => "P",
            Element::S => "S",
            Element::Cl => "Cl",
        }
    }

    pub const fn atomic_number(&self) -> u8 {
        match self {
            Element::H => 1,
            Element::C => 6,
            Element::N => 7,
            Element::O => 8,
            Element::F => 9,
            Element::P => 15,
            Element::S => 16,
            Element::Cl => 17,
        }
    }

    /// Looks up an element by its exact (case-sensitive) symbol.
    pub fn from_symbol(symbol: &str) -> Option<Element> {
        ELEMENTS_BY_SYMBOL.get(symbol).copied()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown element symbol '{0}'")]
pub struct ParseElementError(pub String);

impl FromStr for Element {
    type Err = ParseElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Element::from_symbol(s).ok_or_else(|| ParseElementError(s.to_string()))
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_round_trips_through_lookup() {
        for element in [
            Element::H,
            Element::C,
            Element::N,
            Element::O,
            Element::F,
            Element::P,
            Element::S,
            Element::Cl,
        ] {
            assert_eq!(Element::from_symbol(element.symbol()), Some(element));
        }
    }

    #[test]
    fn from_str_rejects_unknown_symbols() {
        assert_eq!(
            Element::from_str("Xe"),
            Err(ParseElementError("Xe".to_string()))
        );
        assert_eq!(
            Element::from_str("cl"),
            Err(ParseElementError("cl".to_string()))
        );
        assert!(Element::from_str("").is_err());
    }

    #[test]
    fn display_matches_symbol() {
        assert_eq!(Element::Cl.to_string(), "Cl");
        assert_eq!(Element::H.to_string(), "H");
    }

    #[test]
    fn atomic_numbers_are_correct() {
        assert_eq!(Element::H.atomic_number(), 1);
        assert_eq!(Element::C.atomic_number(), 6);
        assert_eq!(Element::Cl.atomic_number(), 17);
    }
}
