use super::element::Element;
use super::equation::Equation;
use super::term::EquationTerm;

/// Per-element atom tally across both sides of an equation, under one set of
/// coefficients. A fresh list is produced by every call to [`count_atoms`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtomCount {
    pub element: Element,
    pub reactants_total: i32,
    pub products_total: i32,
}

enum Side {
    Reactants,
    Products,
}

/// Counts atoms per element under the equation's current coefficients.
///
/// The result order is a contract: elements appear in the order they are
/// first encountered scanning reactant terms left to right (atoms left to
/// right within each molecule), then product terms for anything not already
/// seen. Equation-string generation and the visual side-by-side comparisons
/// rely on this order.
pub fn count_atoms(equation: &Equation) -> Vec<AtomCount> {
    count_atoms_with(equation, |term| term.coefficient())
}

/// Same tally, but reading the coefficient through `coefficient_of`. Used at
/// construction time to verify the reference coefficients balance.
pub(crate) fn count_atoms_with(
    equation: &Equation,
    coefficient_of: impl Fn(&EquationTerm) -> i32,
) -> Vec<AtomCount> {
    let mut counts: Vec<AtomCount> = Vec::new();
    tally(&mut counts, equation.reactants(), Side::Reactants, &coefficient_of);
    tally(&mut counts, equation.products(), Side::Products, &coefficient_of);
    counts
}

fn tally(
    counts: &mut Vec<AtomCount>,
    terms: &[EquationTerm],
    side: Side,
    coefficient_of: &impl Fn(&EquationTerm) -> i32,
) {
    for term in terms {
        let coefficient = coefficient_of(term);
        for &element in term.molecule().atoms() {
            // Terms and molecules are small, so a linear scan keyed by
            // element identity preserves first-encounter order for free.
            if let Some(count) = counts.iter_mut().find(|count| count.element == element) {
                match side {
                    Side::Reactants => count.reactants_total += coefficient,
                    Side::Products => count.products_total += coefficient,
                }
            } else {
                let (reactants_total, products_total) = match side {
                    Side::Reactants => (coefficient, 0),
                    Side::Products => (0, coefficient),
                };
                counts.push(AtomCount {
                    element,
                    reactants_total,
                    products_total,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::equations;
    use crate::model::element::Element::{C, H, O};

    #[test]
    fn methane_combustion_counts_in_first_encounter_order() {
        let mut equation = equations::displacement_ch4_2o2_co2_2h2o();
        equation.balance();

        let counts = count_atoms(&equation);
        assert_eq!(
            counts,
            vec![
                AtomCount {
                    element: C,
                    reactants_total: 1,
                    products_total: 1
                },
                AtomCount {
                    element: H,
                    reactants_total: 4,
                    products_total: 4
                },
                AtomCount {
                    element: O,
                    reactants_total: 4,
                    products_total: 4
                },
            ]
        );
    }

    #[test]
    fn all_zero_coefficients_yield_zero_totals_in_the_same_order() {
        let equation = equations::displacement_ch4_2o2_co2_2h2o();
        let counts = count_atoms(&equation);
        assert_eq!(
            counts.iter().map(|count| count.element).collect::<Vec<_>>(),
            vec![C, H, O]
        );
        assert!(
            counts
                .iter()
                .all(|count| count.reactants_total == 0 && count.products_total == 0)
        );
    }

    #[test]
    fn counts_reflect_unbalanced_current_coefficients() {
        let mut equation = equations::synthesis_2h2_o2_2h2o();
        equation.reactant_mut(0).set_coefficient(1).expect("in range");
        equation.reactant_mut(1).set_coefficient(1).expect("in range");
        equation.product_mut(0).set_coefficient(2).expect("in range");

        let counts = count_atoms(&equation);
        assert_eq!(
            counts,
            vec![
                AtomCount {
                    element: H,
                    reactants_total: 2,
                    products_total: 4
                },
                AtomCount {
                    element: O,
                    reactants_total: 2,
                    products_total: 2
                },
            ]
        );
    }
}
