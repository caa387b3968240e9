//! Equation models for the capacitor relations.
//!
//! This module provides the five ternary relations the solver works with:
//! - Ratio family (`s0 = k·s1/s2`): ParallelPlateCapacitor, PotentialVoltageDifference,
//!   ChargeDensity, ElectricField
//! - Quadratic: PotentialEnergy
//!
//! Each equation can solve for any one of its three slots given the other
//! two. Equations are plain values; they keep no state between solves.

mod energy;
mod ratio;
mod registry;

pub use energy::EnergyEquation;
pub use ratio::{RatioEquation, Scale};
pub use registry::EquationRegistry;

use crate::quantity::{KnownSet, Quantity};

/// Position of a quantity within an equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    First,
    Second,
    Third,
}

impl Slot {
    /// All slots in order.
    pub const ALL: [Slot; 3] = [Slot::First, Slot::Second, Slot::Third];

    /// Index into a slot array.
    pub fn index(&self) -> usize {
        match self {
            Slot::First => 0,
            Slot::Second => 1,
            Slot::Third => 2,
        }
    }
}

/// Mismatch between a fully known equation and its own relation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Residual {
    /// The quantity in the first slot
    pub quantity: Quantity,
    /// Value the other two slots imply
    pub expected: f64,
    /// Value currently known
    pub actual: f64,
}

impl Residual {
    /// Relative difference between the expected and actual values.
    ///
    /// Returns `None` if either value is not finite.
    pub fn relative_error(&self) -> Option<f64> {
        if !self.expected.is_finite() || !self.actual.is_finite() {
            return None;
        }
        let scale = self.expected.abs().max(self.actual.abs());
        if scale == 0.0 {
            return Some(0.0);
        }
        Some((self.expected - self.actual).abs() / scale)
    }
}

/// A relation between three quantities.
#[derive(Debug, Clone, PartialEq)]
pub enum Equation {
    Ratio(RatioEquation),
    Energy(EnergyEquation),
}

impl Equation {
    /// Get the equation name.
    pub fn name(&self) -> &'static str {
        match self {
            Equation::Ratio(r) => r.name,
            Equation::Energy(e) => e.name,
        }
    }

    /// Get the quantities in slot order.
    pub fn slots(&self) -> [Quantity; 3] {
        match self {
            Equation::Ratio(r) => r.slots,
            Equation::Energy(e) => e.slots,
        }
    }

    /// Compute the value of `slot` from the values of the other two.
    ///
    /// The entry of `values` at `slot` is ignored.
    pub fn solve_slot(&self, slot: Slot, values: [f64; 3]) -> f64 {
        match self {
            Equation::Ratio(r) => r.solve(slot, values),
            Equation::Energy(e) => e.solve(slot, values),
        }
    }

    /// Try to derive the one missing quantity.
    ///
    /// Returns `Some` only when exactly two of the three slots are known.
    /// With fewer the equation is underdetermined; with all three it is
    /// already satisfied and nothing is recomputed. `known` is not modified.
    pub fn try_solve(&self, known: &KnownSet) -> Option<(Quantity, f64)> {
        let slots = self.slots();
        let mut values = [0.0; 3];
        let mut missing = None;
        let mut present = 0;

        for slot in Slot::ALL {
            match known.get(slots[slot.index()]) {
                Some(v) => {
                    values[slot.index()] = v;
                    present += 1;
                }
                None => missing = Some(slot),
            }
        }

        if present != 2 {
            return None;
        }
        let slot = missing?;
        Some((slots[slot.index()], self.solve_slot(slot, values)))
    }

    /// Compare the first slot against the value the other two imply.
    ///
    /// Returns `None` unless all three slots are known.
    pub fn residual(&self, known: &KnownSet) -> Option<Residual> {
        let slots = self.slots();
        let values = [
            known.get(slots[0])?,
            known.get(slots[1])?,
            known.get(slots[2])?,
        ];
        Some(Residual {
            quantity: slots[0],
            expected: self.solve_slot(Slot::First, values),
            actual: values[0],
        })
    }
}

impl From<RatioEquation> for Equation {
    fn from(r: RatioEquation) -> Self {
        Equation::Ratio(r)
    }
}

impl From<EnergyEquation> for Equation {
    fn from(e: EnergyEquation) -> Self {
        Equation::Energy(e)
    }
}
