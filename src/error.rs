//! Error types for the capacitor calculator.
//!
//! This module provides a unified error type [`CapacitorError`] that covers
//! the error conditions of input collection, consistency checking, and the
//! scenario runner. Arithmetic edge cases (division by zero, square roots of
//! negative ratios) are deliberately *not* errors: they surface as IEEE-754
//! infinities and NaNs in the solved values.

use thiserror::Error;

use crate::quantity::Quantity;

/// Result type alias using [`CapacitorError`].
pub type Result<T> = std::result::Result<T, CapacitorError>;

/// Unified error type for all capacitor calculator operations.
#[derive(Error, Debug)]
pub enum CapacitorError {
    // ============ Input Errors ============
    /// Name does not match any quantity symbol or long name
    #[error("{name} is not in list")]
    UnknownQuantity { name: String },

    /// Text could not be parsed as a real number
    #[error("That is not a acceptable number: '{input}'")]
    InvalidValue { input: String },

    /// Malformed `NAME=VALUE` assignment
    #[error("Invalid assignment '{input}': expected NAME=VALUE")]
    InvalidAssignment { input: String },

    /// Input stream ended before every quantity was known
    #[error("Input ended with {missing} quantities still unknown")]
    InputClosed { missing: usize },

    // ============ Solver Errors ============
    /// Overdetermined input disagrees with an equation (strict mode only)
    #[error(
        "Inconsistent values for equation {equation}: {quantity} is {actual:.3e} but the other two give {expected:.3e}"
    )]
    Inconsistent {
        equation: &'static str,
        quantity: Quantity,
        expected: f64,
        actual: f64,
    },

    /// Propagation did not settle within the configured number of passes
    #[error("Propagation did not reach a fixed point after {passes} passes")]
    PassLimitExceeded { passes: usize },

    // ============ Scenario Errors ============
    /// A scenario perturbs a quantity that is absent from the baseline
    #[error("Scenario '{scenario}' needs a value for {quantity}")]
    MissingBaseQuantity {
        scenario: &'static str,
        quantity: Quantity,
    },

    // ============ I/O Errors ============
    /// Error reading the prompt input or writing results
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CapacitorError {
    /// Create an unknown quantity error
    pub fn unknown_quantity(name: impl Into<String>) -> Self {
        Self::UnknownQuantity { name: name.into() }
    }

    /// Create an invalid value error
    pub fn invalid_value(input: impl Into<String>) -> Self {
        Self::InvalidValue {
            input: input.into(),
        }
    }

    /// Create an invalid assignment error
    pub fn invalid_assignment(input: impl Into<String>) -> Self {
        Self::InvalidAssignment {
            input: input.into(),
        }
    }

    /// Whether the interactive prompt can recover by discarding the last
    /// entry and asking again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::UnknownQuantity { .. }
                | Self::InvalidValue { .. }
                | Self::InvalidAssignment { .. }
                | Self::Inconsistent { .. }
        )
    }
}
