//! The ordered list of equations the solver iterates over.

use super::{EnergyEquation, Equation, RatioEquation};

/// An ordered, immutable collection of equations.
#[derive(Debug, Clone, PartialEq)]
pub struct EquationRegistry {
    equations: Vec<Equation>,
}

impl Default for EquationRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl EquationRegistry {
    /// The five capacitor equations in evaluation order.
    pub fn standard() -> Self {
        Self::from_equations(vec![
            RatioEquation::parallel_plate_capacitor().into(),
            RatioEquation::electric_field().into(),
            RatioEquation::charge_density().into(),
            EnergyEquation::potential_energy().into(),
            RatioEquation::potential_voltage_difference().into(),
        ])
    }

    /// Build a registry that evaluates `equations` in the given order.
    pub fn from_equations(equations: Vec<Equation>) -> Self {
        Self { equations }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Equation> {
        self.equations.iter()
    }

    pub fn len(&self) -> usize {
        self.equations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }

    /// Consume the registry, returning its equations.
    pub fn into_equations(self) -> Vec<Equation> {
        self.equations
    }
}
