//! Equation-family factories.
//!
//! Thin constructors that bake in the term arrangement of each chemical
//! family; all validation happens in [`Equation::new`].

use crate::model::config::CoefficientSettings;
use crate::model::equation::{Equation, EquationError, EquationSpec};
use crate::model::term::TermSpec;

/// Two reactants combine into one product.
pub fn synthesis(
    reactant1: TermSpec,
    reactant2: TermSpec,
    product: TermSpec,
    settings: CoefficientSettings,
) -> Result<Equation, EquationError> {
    Equation::new(EquationSpec {
        reactants: vec![reactant1, reactant2],
        products: vec![product],
        settings,
    })
}

/// One reactant breaks into two products.
pub fn decomposition(
    reactant: TermSpec,
    product1: TermSpec,
    product2: TermSpec,
    settings: CoefficientSettings,
) -> Result<Equation, EquationError> {
    Equation::new(EquationSpec {
        reactants: vec![reactant],
        products: vec![product1, product2],
        settings,
    })
}

/// Two reactants exchange partners into two products. Combustion-style
/// equations use this shape too.
pub fn displacement(
    reactant1: TermSpec,
    reactant2: TermSpec,
    product1: TermSpec,
    product2: TermSpec,
    settings: CoefficientSettings,
) -> Result<Equation, EquationError> {
    Equation::new(EquationSpec {
        reactants: vec![reactant1, reactant2],
        products: vec![product1, product2],
        settings,
    })
}
