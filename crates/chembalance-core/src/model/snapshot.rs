use super::equation::{Equation, EquationError};
use serde::{Deserialize, Serialize};

/// Persisted coefficient state for one equation.
///
/// Coefficients are stored in term order, reactants then products. Which
/// equation a snapshot belongs to is the caller's concern; catalogs are fixed,
/// so equation identity is reconstructed by position in the catalog, not
/// stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoefficientSnapshot {
    pub coefficients: Vec<i32>,
}

impl Equation {
    pub fn save_coefficients(&self) -> CoefficientSnapshot {
        CoefficientSnapshot {
            coefficients: self.terms().map(|term| term.coefficient()).collect(),
        }
    }

    /// Restores current coefficients from a snapshot.
    ///
    /// Writes only current values; the initial (reset) values are a separate
    /// setting and are never touched by a restore, so restores and
    /// `set_initial_coefficients` can happen in either order. Length and
    /// range are validated before any term is written.
    pub fn restore_coefficients(
        &mut self,
        snapshot: &CoefficientSnapshot,
    ) -> Result<(), EquationError> {
        if snapshot.coefficients.len() != self.term_count() {
            return Err(EquationError::SnapshotLengthMismatch {
                expected: self.term_count(),
                actual: snapshot.coefficients.len(),
            });
        }
        for (term, &value) in self.terms().zip(&snapshot.coefficients) {
            let range = term.coefficient_range();
            if !range.contains(&value) {
                return Err(EquationError::Term(
                    super::term::TermError::CoefficientOutOfRange {
                        value,
                        min: *range.start(),
                        max: *range.end(),
                    },
                ));
            }
        }
        for (term, &value) in self.terms_mut().zip(&snapshot.coefficients) {
            term.set_coefficient(value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::equations;

    #[test]
    fn save_and_restore_round_trip() {
        let mut equation = equations::synthesis_n2_3h2_2nh3();
        equation.reactant_mut(0).set_coefficient(2).expect("in range");
        equation.reactant_mut(1).set_coefficient(6).expect("in range");
        equation.product_mut(0).set_coefficient(4).expect("in range");
        let snapshot = equation.save_coefficients();
        assert_eq!(snapshot.coefficients, vec![2, 6, 4]);

        equation.reset();
        assert!(!equation.has_nonzero_coefficient());
        equation.restore_coefficients(&snapshot).expect("same shape");
        assert!(equation.is_balanced());
        assert!(!equation.is_simplified());
    }

    #[test]
    fn restore_rejects_wrong_length() {
        let mut equation = equations::synthesis_n2_3h2_2nh3();
        let snapshot = CoefficientSnapshot {
            coefficients: vec![1, 3],
        };
        assert_eq!(
            equation.restore_coefficients(&snapshot),
            Err(EquationError::SnapshotLengthMismatch {
                expected: 3,
                actual: 2,
            })
        );
    }

    #[test]
    fn restore_rejects_out_of_range_values_without_writing() {
        let mut equation = equations::synthesis_n2_3h2_2nh3();
        equation.balance();
        let snapshot = CoefficientSnapshot {
            coefficients: vec![1, 99, 2],
        };
        assert!(equation.restore_coefficients(&snapshot).is_err());
        // Nothing was clobbered by the failed restore.
        assert!(equation.is_simplified());
    }

    #[test]
    fn restore_is_independent_of_initial_coefficient_changes() {
        let mut equation = equations::synthesis_n2_3h2_2nh3();
        equation.balance();
        let snapshot = equation.save_coefficients();

        equation.reset();
        equation.set_initial_coefficients(1).expect("in range");
        equation.restore_coefficients(&snapshot).expect("same shape");
        // The restored values win, in either call order.
        assert!(equation.is_simplified());
        equation.set_initial_coefficients(0).expect("in range");
        assert!(equation.is_simplified());
    }

    #[test]
    fn snapshot_serializes_through_toml() {
        let mut equation = equations::synthesis_n2_3h2_2nh3();
        equation.balance();
        let snapshot = equation.save_coefficients();

        let serialized = toml::to_string(&snapshot).expect("serializable");
        assert_eq!(serialized.trim(), "coefficients = [1, 3, 2]");
        let restored: CoefficientSnapshot = toml::from_str(&serialized).expect("parseable");
        assert_eq!(restored, snapshot);
    }
}
