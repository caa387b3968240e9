//! What-if perturbations of the base inputs.
//!
//! A scenario scales one base quantity of a solved baseline, forgets every
//! derived quantity and propagates again. Each scenario starts from the
//! baseline, never from the previous scenario's result.

use log::info;

use crate::error::{CapacitorError, Result};
use crate::quantity::{KnownSet, Quantity};
use crate::solver::Propagator;

/// A single perturbation of a base quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    /// Heading printed above the result
    pub label: &'static str,
    /// Quantity to scale
    pub quantity: Quantity,
    /// Multiplier applied to the baseline value
    pub factor: f64,
}

/// ±20% on Area, then ±20% on Charge.
pub const STANDARD_SCENARIOS: [Scenario; 4] = [
    Scenario::new("Configuration A 20% larger", Quantity::Area, 1.2),
    Scenario::new("Configuration A 20% smaller", Quantity::Area, 0.8),
    Scenario::new("Configuration Q 20% larger", Quantity::Charge, 1.2),
    Scenario::new("Configuration Q 20% smaller", Quantity::Charge, 0.8),
];

/// Result of running one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioOutcome {
    pub scenario: Scenario,
    /// The re-propagated set
    pub known: KnownSet,
}

impl Scenario {
    pub const fn new(label: &'static str, quantity: Quantity, factor: f64) -> Self {
        Self {
            label,
            quantity,
            factor,
        }
    }

    /// Run this scenario against `baseline`, leaving the baseline untouched.
    pub fn apply(&self, baseline: &KnownSet, propagator: &Propagator) -> Result<KnownSet> {
        let value = baseline
            .get(self.quantity)
            .ok_or(CapacitorError::MissingBaseQuantity {
                scenario: self.label,
                quantity: self.quantity,
            })?;

        let mut known = baseline.clone();
        known.insert(self.quantity, value * self.factor);
        known.clear_derived();

        info!(
            "{}: {} {:.3e} -> {:.3e} {}",
            self.label,
            self.quantity,
            value,
            value * self.factor,
            self.quantity.unit()
        );

        propagator.run(&mut known)?;
        Ok(known)
    }
}

/// Run every scenario in order against the same baseline.
pub fn run_scenarios(
    baseline: &KnownSet,
    propagator: &Propagator,
    scenarios: &[Scenario],
) -> Result<Vec<ScenarioOutcome>> {
    scenarios
        .iter()
        .map(|scenario| {
            Ok(ScenarioOutcome {
                scenario: *scenario,
                known: scenario.apply(baseline, propagator)?,
            })
        })
        .collect()
}
