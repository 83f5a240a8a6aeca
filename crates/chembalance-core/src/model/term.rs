use super::config::CoefficientSettings;
use super::molecule::Molecule;
use super::observable::{ListenerKey, ObservableValue};
use std::ops::RangeInclusive;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TermError {
    #[error("coefficient {value} is outside the allowed range {min}..={max}")]
    CoefficientOutOfRange { value: i32, min: i32, max: i32 },
    #[error("balanced coefficient for {symbol} must be at least 1, got {value}")]
    InvalidBalancedCoefficient { symbol: String, value: i32 },
}

/// Construction parameters for one term: the molecule and its hand-verified
/// balanced coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermSpec {
    pub balanced_coefficient: i32,
    pub molecule: &'static Molecule,
}

impl TermSpec {
    pub fn new(balanced_coefficient: i32, molecule: &'static Molecule) -> Self {
        Self {
            balanced_coefficient,
            molecule,
        }
    }
}

/// One coefficient-bearing occurrence of a molecule within an equation.
///
/// The balanced coefficient is the fixed reference value the owning equation
/// verifies user coefficients against; the current coefficient is the mutable,
/// observable state the user adjusts. `reset()` restores the current value to
/// the configured initial value, which the owning equation may rewrite when a
/// global default changes.
#[derive(Debug)]
pub struct EquationTerm {
    molecule: &'static Molecule,
    balanced_coefficient: i32,
    initial_coefficient: i32,
    range: RangeInclusive<i32>,
    coefficient: ObservableValue<i32>,
}

impl EquationTerm {
    pub(crate) fn new(spec: TermSpec, settings: &CoefficientSettings) -> Result<Self, TermError> {
        // The balanced value must be reachable, otherwise balance() could
        // escape the range the setter enforces.
        if spec.balanced_coefficient < 1 || !settings.range.contains(&spec.balanced_coefficient) {
            return Err(TermError::InvalidBalancedCoefficient {
                symbol: spec.molecule.plain_symbol().to_string(),
                value: spec.balanced_coefficient,
            });
        }
        Ok(Self {
            molecule: spec.molecule,
            balanced_coefficient: spec.balanced_coefficient,
            initial_coefficient: settings.initial_coefficient,
            range: settings.range.clone(),
            coefficient: ObservableValue::new(settings.initial_coefficient),
        })
    }

    pub fn molecule(&self) -> &'static Molecule {
        self.molecule
    }

    pub fn balanced_coefficient(&self) -> i32 {
        self.balanced_coefficient
    }

    pub fn coefficient(&self) -> i32 {
        self.coefficient.get()
    }

    pub fn coefficient_range(&self) -> &RangeInclusive<i32> {
        &self.range
    }

    pub fn initial_coefficient(&self) -> i32 {
        self.initial_coefficient
    }

    /// Sets the current coefficient. This is the validation boundary: writes
    /// outside the configured range are refused and nothing is notified.
    pub fn set_coefficient(&mut self, value: i32) -> Result<(), TermError> {
        if !self.range.contains(&value) {
            return Err(TermError::CoefficientOutOfRange {
                value,
                min: *self.range.start(),
                max: *self.range.end(),
            });
        }
        self.coefficient.set(value);
        Ok(())
    }

    /// Restores the current coefficient to the configured initial value.
    pub fn reset(&mut self) {
        self.coefficient.set(self.initial_coefficient);
    }

    pub(crate) fn apply_balanced_coefficient(&mut self) {
        self.coefficient.set(self.balanced_coefficient);
    }

    /// Rewrites the value future `reset()` calls restore to. The current
    /// coefficient is deliberately left untouched.
    pub(crate) fn set_initial_coefficient(&mut self, value: i32) {
        self.initial_coefficient = value;
    }

    pub fn on_coefficient_change(
        &mut self,
        listener: impl FnMut(i32, i32) + 'static,
    ) -> ListenerKey {
        self.coefficient.subscribe(listener)
    }

    /// # Panics
    ///
    /// Panics if `key` is not currently registered on this term.
    pub fn remove_coefficient_listener(&mut self, key: ListenerKey) {
        self.coefficient.unsubscribe(key);
    }
}
