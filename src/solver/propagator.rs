//! The propagation engine.

use log::{debug, trace};

use super::{DEFAULT_MAX_PASSES, DEFAULT_TOLERANCE};
use crate::equations::EquationRegistry;
use crate::error::{CapacitorError, Result};
use crate::quantity::{KnownSet, Quantity, Scientific};

/// How overdetermined input is treated once a fixed point is reached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConsistencyMode {
    /// Fully known equations are taken as satisfied without checking.
    Permissive,
    /// Fully known equations must agree within a relative tolerance.
    Strict { tolerance: f64 },
}

impl ConsistencyMode {
    /// Strict mode with the default tolerance.
    pub fn strict() -> Self {
        ConsistencyMode::Strict {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Configuration for the propagator.
#[derive(Debug, Clone)]
pub struct PropagatorConfig {
    /// Treatment of overdetermined equations.
    pub consistency: ConsistencyMode,
    /// Safety bound on the number of passes.
    pub max_passes: usize,
}

impl Default for PropagatorConfig {
    fn default() -> Self {
        Self {
            consistency: ConsistencyMode::Permissive,
            max_passes: DEFAULT_MAX_PASSES,
        }
    }
}

impl PropagatorConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the consistency mode.
    pub fn with_consistency(mut self, consistency: ConsistencyMode) -> Self {
        self.consistency = consistency;
        self
    }

    /// Enable strict checking with the given relative tolerance.
    pub fn strict(self, tolerance: f64) -> Self {
        self.with_consistency(ConsistencyMode::Strict { tolerance })
    }

    /// Set the maximum number of passes.
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }
}

/// A single derived value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derivation {
    pub quantity: Quantity,
    pub value: f64,
    /// Name of the equation that produced it
    pub equation: &'static str,
    /// 1-based pass number
    pub pass: usize,
}

/// Summary of one propagation run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropagationReport {
    /// Passes executed, including the final pass that changed nothing
    pub passes: usize,
    /// Derived values in the order they were recorded
    pub derived: Vec<Derivation>,
}

impl PropagationReport {
    /// Check whether the run derived anything.
    pub fn changed(&self) -> bool {
        !self.derived.is_empty()
    }
}

/// Fixed-point solver over an equation registry.
#[derive(Debug, Clone)]
pub struct Propagator {
    registry: EquationRegistry,
    config: PropagatorConfig,
}

impl Default for Propagator {
    fn default() -> Self {
        Self::new()
    }
}

impl Propagator {
    /// Create a permissive propagator over the standard registry.
    pub fn new() -> Self {
        Self::with_config(EquationRegistry::standard(), PropagatorConfig::default())
    }

    /// Create a propagator with a custom registry and configuration.
    pub fn with_config(registry: EquationRegistry, config: PropagatorConfig) -> Self {
        Self { registry, config }
    }

    /// Expand `known` to its fixed point without any checks.
    ///
    /// Total: every changing pass adds a quantity, so the loop ends after
    /// at most one pass per quantity plus one.
    pub fn expand(&self, known: &mut KnownSet) -> PropagationReport {
        let mut report = PropagationReport::default();
        while self.pass(known, &mut report) {}
        self.trace_fixed_point(known, &report);
        report
    }

    /// Expand `known` to its fixed point and apply the configured checks.
    ///
    /// Stops with an error if a pass still derives something once
    /// `max_passes` passes have run; `known` keeps what was derived so far.
    /// In strict mode it also fails if a fully known equation disagrees
    /// with its own relation.
    pub fn run(&self, known: &mut KnownSet) -> Result<PropagationReport> {
        let mut report = PropagationReport::default();

        loop {
            if report.passes >= self.config.max_passes {
                return Err(CapacitorError::PassLimitExceeded {
                    passes: report.passes,
                });
            }
            if !self.pass(known, &mut report) {
                break;
            }
        }
        self.trace_fixed_point(known, &report);

        if let ConsistencyMode::Strict { tolerance } = self.config.consistency {
            self.check_consistency(known, tolerance)?;
        }

        Ok(report)
    }

    /// Offer every equation the current set once.
    ///
    /// Returns `true` if anything was derived.
    fn pass(&self, known: &mut KnownSet, report: &mut PropagationReport) -> bool {
        report.passes += 1;

        let mut changed = false;
        for equation in self.registry.iter() {
            if let Some((quantity, value)) = equation.try_solve(known) {
                if known.record(quantity, value) {
                    debug!(
                        "{} derived {} = {} {}",
                        equation.name(),
                        quantity,
                        Scientific(value),
                        quantity.unit()
                    );
                    report.derived.push(Derivation {
                        quantity,
                        value,
                        equation: equation.name(),
                        pass: report.passes,
                    });
                    changed = true;
                }
            }
        }
        changed
    }

    fn trace_fixed_point(&self, known: &KnownSet, report: &PropagationReport) {
        trace!(
            "Fixed point after {} passes ({} derived, {} known)",
            report.passes,
            report.derived.len(),
            known.len()
        );
    }

    /// Verify every fully known equation within `tolerance`.
    fn check_consistency(&self, known: &KnownSet, tolerance: f64) -> Result<()> {
        for equation in self.registry.iter() {
            let Some(residual) = equation.residual(known) else {
                continue;
            };
            match residual.relative_error() {
                Some(err) if err > tolerance => {
                    return Err(CapacitorError::Inconsistent {
                        equation: equation.name(),
                        quantity: residual.quantity,
                        expected: residual.expected,
                        actual: residual.actual,
                    });
                }
                _ => {}
            }
        }
        Ok(())
    }
}

/// Expand `known` to its fixed point using the standard equations.
///
/// Overdetermined input is accepted as-is, so this never fails.
pub fn propagate(known: &mut KnownSet) -> PropagationReport {
    Propagator::new().expand(known)
}
