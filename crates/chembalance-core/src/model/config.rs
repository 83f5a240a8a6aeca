use std::ops::RangeInclusive;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("initial coefficient {value} is outside the allowed range {min}..={max}")]
    InitialOutOfRange { value: i32, min: i32, max: i32 },
    #[error("coefficient range {min}..={max} is empty")]
    EmptyRange { min: i32, max: i32 },
    #[error("coefficient range {min}..={max} must start at 0 and admit at least one positive value")]
    RangeTooNarrow { min: i32, max: i32 },
}

/// How term coefficients are initialized and constrained, shared by every
/// term of one equation.
///
/// This is the explicit replacement for a global "default coefficient"
/// preference: callers thread it through equation construction, and a later
/// preference change goes through `Equation::set_initial_coefficients`
/// rather than ambient state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoefficientSettings {
    /// Inclusive range every current coefficient must stay within.
    pub range: RangeInclusive<i32>,
    /// The value `reset()` restores coefficients to.
    pub initial_coefficient: i32,
}

impl CoefficientSettings {
    pub fn new(range: RangeInclusive<i32>, initial_coefficient: i32) -> Self {
        Self {
            range,
            initial_coefficient,
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let (min, max) = (*self.range.start(), *self.range.end());
        if self.range.is_empty() {
            return Err(SettingsError::EmptyRange { min, max });
        }
        // Coefficients may be zeroed but never go negative, and balanced
        // values are >= 1, so the range starts at exactly 0 and reaches past it.
        if min != 0 || max < 1 {
            return Err(SettingsError::RangeTooNarrow { min, max });
        }
        if !self.range.contains(&self.initial_coefficient) {
            return Err(SettingsError::InitialOutOfRange {
                value: self.initial_coefficient,
                min,
                max,
            });
        }
        Ok(())
    }
}

impl Default for CoefficientSettings {
    /// The range the original simulation offers its coefficient spinners.
    fn default() -> Self {
        Self {
            range: 0..=7,
            initial_coefficient: 0,
        }
    }
}
