use super::config::{CoefficientSettings, SettingsError};
use super::counting::{self, AtomCount};
use super::term::{EquationTerm, TermError, TermSpec};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EquationError {
    #[error("an equation needs at least one reactant and one product")]
    MissingTerms,

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Term(#[from] TermError),

    #[error(
        "reference coefficients do not balance {symbol}: \
         {reactants_total} reactant atoms vs {products_total} product atoms"
    )]
    UnbalancedReference {
        symbol: &'static str,
        reactants_total: i32,
        products_total: i32,
    },

    #[error("snapshot holds {actual} coefficients but the equation has {expected} terms")]
    SnapshotLengthMismatch { expected: usize, actual: usize },
}

/// Construction parameters for an equation: the term specs for each side and
/// the coefficient settings shared by every term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquationSpec {
    pub reactants: Vec<TermSpec>,
    pub products: Vec<TermSpec>,
    pub settings: CoefficientSettings,
}

/// A chemical equation: ordered reactant and product terms, plus the derived
/// balance facts computed from their current coefficients.
///
/// The balanced (reference) coefficients are supplied at construction and
/// verified to actually balance every element; the equation never solves
/// stoichiometry, it only checks user coefficients against the reference set.
/// Derived facts are computed on read, so they are never stale.
///
/// Identity is instance identity. Equations are selected from fixed catalogs
/// and never structurally compared.
#[derive(Debug)]
pub struct Equation {
    reactants: Vec<EquationTerm>,
    products: Vec<EquationTerm>,
}

impl Equation {
    /// Builds an equation, failing fast on defective catalog data: an empty
    /// side, invalid settings, an unreachable balanced coefficient, or a
    /// reference coefficient set that leaves some element unbalanced.
    pub fn new(spec: EquationSpec) -> Result<Self, EquationError> {
        if spec.reactants.is_empty() || spec.products.is_empty() {
            return Err(EquationError::MissingTerms);
        }
        spec.settings.validate()?;
        let reactants = spec
            .reactants
            .iter()
            .map(|&term| EquationTerm::new(term, &spec.settings))
            .collect::<Result<Vec<_>, _>>()?;
        let products = spec
            .products
            .iter()
            .map(|&term| EquationTerm::new(term, &spec.settings))
            .collect::<Result<Vec<_>, _>>()?;

        let equation = Self {
            reactants,
            products,
        };
        equation.verify_reference_coefficients()?;
        Ok(equation)
    }

    fn verify_reference_coefficients(&self) -> Result<(), EquationError> {
        let reference_counts =
            counting::count_atoms_with(self, |term| term.balanced_coefficient());
        for count in reference_counts {
            if count.reactants_total != count.products_total {
                return Err(EquationError::UnbalancedReference {
                    symbol: count.element.symbol(),
                    reactants_total: count.reactants_total,
                    products_total: count.products_total,
                });
            }
        }
        Ok(())
    }

    pub fn reactants(&self) -> &[EquationTerm] {
        &self.reactants
    }

    pub fn products(&self) -> &[EquationTerm] {
        &self.products
    }

    /// All terms, reactants first, in their display order.
    pub fn terms(&self) -> impl Iterator<Item = &EquationTerm> {
        self.reactants.iter().chain(self.products.iter())
    }

    pub fn terms_mut(&mut self) -> impl Iterator<Item = &mut EquationTerm> {
        self.reactants.iter_mut().chain(self.products.iter_mut())
    }

    pub fn term_count(&self) -> usize {
        self.reactants.len() + self.products.len()
    }

    /// # Panics
    ///
    /// Panics if `index` is out of bounds, like slice indexing.
    pub fn reactant_mut(&mut self, index: usize) -> &mut EquationTerm {
        &mut self.reactants[index]
    }

    /// # Panics
    ///
    /// Panics if `index` is out of bounds, like slice indexing.
    pub fn product_mut(&mut self, index: usize) -> &mut EquationTerm {
        &mut self.products[index]
    }

    /// True iff every term's current coefficient is the same positive
    /// rational multiple of its balanced coefficient and no coefficient is
    /// zero. The multiplier is pinned by the first reactant and checked by
    /// cross-multiplication, so it never needs to be an integer a priori.
    pub fn is_balanced(&self) -> bool {
        let reference = &self.reactants[0];
        let reference_coefficient = reference.coefficient();
        let reference_balanced = reference.balanced_coefficient();
        self.terms().all(|term| {
            let coefficient = term.coefficient();
            coefficient != 0
                && coefficient * reference_balanced
                    == reference_coefficient * term.balanced_coefficient()
        })
    }

    /// True iff every term's current coefficient equals its balanced
    /// coefficient exactly (balanced with multiplier 1). Implies
    /// [`is_balanced`](Self::is_balanced), since balanced coefficients are
    /// always positive.
    pub fn is_simplified(&self) -> bool {
        self.terms()
            .all(|term| term.coefficient() == term.balanced_coefficient())
    }

    pub fn has_nonzero_coefficient(&self) -> bool {
        self.terms().any(|term| term.coefficient() != 0)
    }

    /// Sets every term's coefficient to its balanced coefficient, producing
    /// the simplified-balanced state. Idempotent.
    pub fn balance(&mut self) {
        for term in self.terms_mut() {
            term.apply_balanced_coefficient();
        }
    }

    /// Restores every term's coefficient to its configured initial value.
    pub fn reset(&mut self) {
        for term in self.terms_mut() {
            term.reset();
        }
    }

    /// Rewrites the initial value future `reset()` calls restore to, for
    /// every term. Current coefficients are left untouched; the update is
    /// all-or-nothing, so an out-of-range value changes no term.
    pub fn set_initial_coefficients(&mut self, value: i32) -> Result<(), TermError> {
        for term in self.terms() {
            let range = term.coefficient_range();
            if !range.contains(&value) {
                return Err(TermError::CoefficientOutOfRange {
                    value,
                    min: *range.start(),
                    max: *range.end(),
                });
            }
        }
        for term in self.terms_mut() {
            term.set_initial_coefficient(value);
        }
        Ok(())
    }

    /// Per-element atom counts under the current coefficients, in
    /// first-encounter order. See [`counting::count_atoms`].
    pub fn atom_counts(&self) -> Vec<AtomCount> {
        counting::count_atoms(self)
    }

    pub fn has_big_molecule(&self) -> bool {
        self.terms().any(|term| term.molecule().is_big())
    }

    /// The balanced form without markup, e.g. `"N2 + 3 H2 -> 2 NH3"`.
    pub fn answer_string(&self) -> String {
        self.format_balanced(false)
    }

    /// The balanced form with Unicode subscripts, e.g. `"N₂ + 3 H₂ → 2 NH₃"`.
    pub fn display_string(&self) -> String {
        self.format_balanced(true)
    }

    fn format_balanced(&self, with_markup: bool) -> String {
        let mut out = String::new();
        format_terms(&self.reactants, with_markup, &mut out);
        out.push_str(if with_markup { " → " } else { " -> " });
        format_terms(&self.products, with_markup, &mut out);
        out
    }
}

fn format_terms(terms: &[EquationTerm], with_markup: bool, out: &mut String) {
    for (i, term) in terms.iter().enumerate() {
        if i > 0 {
            out.push_str(" + ");
        }
        let coefficient = term.balanced_coefficient();
        if coefficient != 1 {
            out.push_str(&coefficient.to_string());
            out.push(' ');
        }
        out.push_str(if with_markup {
            term.molecule().symbol()
        } else {
            term.molecule().plain_symbol()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::molecules;

    /// N2 + 3 H2 -> 2 NH3 with the default settings.
    fn ammonia() -> Equation {
        Equation::new(EquationSpec {
            reactants: vec![
                TermSpec::new(1, &molecules::N2),
                TermSpec::new(3, &molecules::H2),
            ],
            products: vec![TermSpec::new(2, &molecules::NH3)],
            settings: CoefficientSettings::default(),
        })
        .expect("hand-verified stoichiometry")
    }

    fn set_coefficients(equation: &mut Equation, coefficients: &[i32]) {
        for (term, &value) in equation.terms_mut().zip(coefficients) {
            term.set_coefficient(value).expect("in range");
        }
    }

    #[test]
    fn simplest_coefficients_are_balanced_and_simplified() {
        let mut equation = ammonia();
        set_coefficients(&mut equation, &[1, 3, 2]);
        assert!(equation.is_balanced());
        assert!(equation.is_simplified());
        assert!(equation.has_nonzero_coefficient());
    }

    #[test]
    fn doubled_coefficients_are_balanced_but_not_simplified() {
        let mut equation = ammonia();
        set_coefficients(&mut equation, &[2, 6, 4]);
        assert!(equation.is_balanced());
        assert!(!equation.is_simplified());
    }

    #[test]
    fn inconsistent_coefficients_are_not_balanced() {
        let mut equation = ammonia();
        set_coefficients(&mut equation, &[1, 2, 2]);
        assert!(!equation.is_balanced());
        assert!(!equation.is_simplified());
    }

    #[test]
    fn all_zero_coefficients_are_never_balanced() {
        let mut equation = ammonia();
        set_coefficients(&mut equation, &[0, 0, 0]);
        assert!(!equation.is_balanced());
        assert!(!equation.is_simplified());
        assert!(!equation.has_nonzero_coefficient());
    }

    #[test]
    fn fractional_multiplier_still_balances_when_consistent() {
        // 2 H2 + O2 -> 2 H2O at (1, ?, 1) has multiplier 1/2, which no
        // integer coefficient for O2 can satisfy.
        let mut equation = Equation::new(EquationSpec {
            reactants: vec![
                TermSpec::new(2, &molecules::H2),
                TermSpec::new(1, &molecules::O2),
            ],
            products: vec![TermSpec::new(2, &molecules::H2O)],
            settings: CoefficientSettings::default(),
        })
        .expect("hand-verified stoichiometry");
        set_coefficients(&mut equation, &[1, 1, 1]);
        assert!(!equation.is_balanced());
        // Doubling everything restores an integer multiplier.
        set_coefficients(&mut equation, &[4, 2, 4]);
        assert!(equation.is_balanced());
        assert!(!equation.is_simplified());
    }

    #[test]
    fn balance_produces_the_simplified_state_and_is_idempotent() {
        let mut equation = ammonia();
        equation.balance();
        for term in equation.terms() {
            assert_eq!(term.coefficient(), term.balanced_coefficient());
        }
        assert!(equation.is_balanced());
        assert!(equation.is_simplified());

        equation.balance();
        let after_second: Vec<i32> = equation.terms().map(|term| term.coefficient()).collect();
        assert_eq!(after_second, vec![1, 3, 2]);
    }

    #[test]
    fn reset_restores_initial_values() {
        let mut equation = ammonia();
        equation.balance();
        equation.reset();
        assert!(equation.terms().all(|term| term.coefficient() == 0));
        assert!(!equation.has_nonzero_coefficient());
    }

    #[test]
    fn reset_with_nonzero_initial_reports_nonzero_coefficients() {
        let mut equation = Equation::new(EquationSpec {
            reactants: vec![
                TermSpec::new(1, &molecules::N2),
                TermSpec::new(3, &molecules::H2),
            ],
            products: vec![TermSpec::new(2, &molecules::NH3)],
            settings: CoefficientSettings::new(0..=7, 1),
        })
        .expect("hand-verified stoichiometry");
        equation.balance();
        equation.reset();
        assert!(equation.terms().all(|term| term.coefficient() == 1));
        assert!(equation.has_nonzero_coefficient());
    }

    #[test]
    fn set_initial_coefficients_applies_on_the_next_reset_only() {
        let mut equation = ammonia();
        set_coefficients(&mut equation, &[1, 3, 2]);
        equation.set_initial_coefficients(1).expect("in range");
        // Current values survive the default change.
        assert!(equation.is_simplified());
        equation.reset();
        assert!(equation.terms().all(|term| term.coefficient() == 1));
    }

    #[test]
    fn set_initial_coefficients_rejects_out_of_range_values() {
        let mut equation = ammonia();
        assert!(equation.set_initial_coefficients(8).is_err());
        // All-or-nothing: nothing changed.
        assert!(equation.terms().all(|term| term.initial_coefficient() == 0));
    }

    #[test]
    fn negative_coefficient_ranges_are_rejected_at_construction() {
        // Negative current coefficients would satisfy the cross-multiplied
        // multiplier check with a negative multiplier (e.g. (-1, -3, -2) for
        // N2 + 3 H2 -> 2 NH3), so ranges below zero must never construct.
        let negative = Equation::new(EquationSpec {
            reactants: vec![
                TermSpec::new(1, &molecules::N2),
                TermSpec::new(3, &molecules::H2),
            ],
            products: vec![TermSpec::new(2, &molecules::NH3)],
            settings: CoefficientSettings::new(-7..=7, 0),
        });
        assert_eq!(
            negative.err(),
            Some(EquationError::Settings(SettingsError::RangeTooNarrow {
                min: -7,
                max: 7,
            }))
        );
    }

    #[test]
    fn construction_requires_both_sides() {
        let missing = Equation::new(EquationSpec {
            reactants: vec![TermSpec::new(1, &molecules::H2O)],
            products: vec![],
            settings: CoefficientSettings::default(),
        });
        assert!(matches!(missing, Err(EquationError::MissingTerms)));
    }

    #[test]
    fn construction_rejects_unbalanced_reference_coefficients() {
        // H2 + O2 -> H2O leaves oxygen unbalanced (2 vs 1).
        let defective = Equation::new(EquationSpec {
            reactants: vec![
                TermSpec::new(1, &molecules::H2),
                TermSpec::new(1, &molecules::O2),
            ],
            products: vec![TermSpec::new(1, &molecules::H2O)],
            settings: CoefficientSettings::default(),
        });
        assert_eq!(
            defective.err(),
            Some(EquationError::UnbalancedReference {
                symbol: "O",
                reactants_total: 2,
                products_total: 1,
            })
        );
    }

    #[test]
    fn answer_and_display_strings_elide_coefficient_one() {
        let equation = ammonia();
        assert_eq!(equation.answer_string(), "N2 + 3 H2 -> 2 NH3");
        assert_eq!(equation.display_string(), "N₂ + 3 H₂ → 2 NH₃");
    }

    #[test]
    fn has_big_molecule_checks_both_sides() {
        let mut with_big = Equation::new(EquationSpec {
            reactants: vec![
                TermSpec::new(2, &molecules::C2H6),
                TermSpec::new(7, &molecules::O2),
            ],
            products: vec![
                TermSpec::new(4, &molecules::CO2),
                TermSpec::new(6, &molecules::H2O),
            ],
            settings: CoefficientSettings::default(),
        })
        .expect("hand-verified stoichiometry");
        assert!(with_big.has_big_molecule());
        // The fact does not depend on current coefficients.
        with_big.balance();
        assert!(with_big.has_big_molecule());

        assert!(!ammonia().has_big_molecule());
    }
}
