//! Scaled ratio relations of the form `s0 = k·s1/s2`.

use super::Slot;
use crate::quantity::Quantity;
use crate::EPSILON_NOUGHT;

/// Constant factor applied to the plain ratio `s1/s2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    /// No scaling
    Unit,
    /// Ratio is multiplied by the constant
    Times(f64),
    /// Ratio is divided by the constant
    Over(f64),
}

impl Scale {
    /// Apply the scale to a plain ratio.
    pub fn apply(&self, x: f64) -> f64 {
        match self {
            Scale::Unit => x,
            Scale::Times(k) => x * k,
            Scale::Over(k) => x / k,
        }
    }

    /// Undo the scale.
    pub fn unapply(&self, x: f64) -> f64 {
        match self {
            Scale::Unit => x,
            Scale::Times(k) => x / k,
            Scale::Over(k) => x * k,
        }
    }
}

/// A relation `s0 = k·s1/s2`.
///
/// Solving:
///   s0 = k·(s1/s2)
///   s1 = (s0·s2)/k
///   s2 = k·(s1/s0)
///
/// Zero denominators are not guarded and yield infinities or NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct RatioEquation {
    pub name: &'static str,
    pub slots: [Quantity; 3],
    pub scale: Scale,
}

impl RatioEquation {
    /// Create a new ratio equation.
    pub fn new(name: &'static str, slots: [Quantity; 3], scale: Scale) -> Self {
        Self { name, slots, scale }
    }

    /// C = ε₀·A/d
    pub fn parallel_plate_capacitor() -> Self {
        Self::new(
            "ParallelPlateCapacitor",
            [Quantity::Capacitance, Quantity::Area, Quantity::Separation],
            Scale::Times(EPSILON_NOUGHT),
        )
    }

    /// V = Q/C
    pub fn potential_voltage_difference() -> Self {
        Self::new(
            "PotentialVoltageDifference",
            [Quantity::Voltage, Quantity::Charge, Quantity::Capacitance],
            Scale::Unit,
        )
    }

    /// σ = Q/A
    pub fn charge_density() -> Self {
        Self::new(
            "ChargeDensity",
            [Quantity::SurfaceChargeDensity, Quantity::Charge, Quantity::Area],
            Scale::Unit,
        )
    }

    /// E = Q/(ε₀·A)
    pub fn electric_field() -> Self {
        Self::new(
            "ElectricField",
            [Quantity::ElectricField, Quantity::Charge, Quantity::Area],
            Scale::Over(EPSILON_NOUGHT),
        )
    }

    /// Compute `slot` from the other two entries of `values`.
    pub fn solve(&self, slot: Slot, values: [f64; 3]) -> f64 {
        let [s0, s1, s2] = values;
        match slot {
            Slot::First => self.scale.apply(s1 / s2),
            Slot::Second => self.scale.unapply(s0 * s2),
            Slot::Third => self.scale.apply(s1 / s0),
        }
    }
}
