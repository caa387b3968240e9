//! Stored energy of a charged capacitor.

use super::Slot;
use crate::quantity::Quantity;

/// The quadratic relation U = ½·C·V².
///
/// Solving for V takes the positive root. A zero or negative C gives an
/// infinite or NaN voltage.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyEquation {
    pub name: &'static str,
    pub slots: [Quantity; 3],
}

impl EnergyEquation {
    pub fn potential_energy() -> Self {
        Self {
            name: "PotentialEnergy",
            slots: [Quantity::StoredEnergy, Quantity::Capacitance, Quantity::Voltage],
        }
    }

    /// Compute `slot` from the other two entries of `values`.
    pub fn solve(&self, slot: Slot, values: [f64; 3]) -> f64 {
        let [u, c, v] = values;
        match slot {
            Slot::First => 0.5 * c * (v * v),
            Slot::Second => (2.0 * u) / (v * v),
            Slot::Third => ((2.0 * u) / c).sqrt(),
        }
    }
}
