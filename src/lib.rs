//! # Capacitor Core
//!
//! An equation-propagation calculator for parallel-plate capacitors.
//!
//! This library provides:
//! - A closed vocabulary of eight capacitor quantities with units
//! - Five ternary equations, each solvable for any one of its slots
//! - A fixed-point engine that derives every quantity the known ones allow
//! - ±20% what-if scenarios on plate area and charge
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`quantity`] - Quantity vocabulary and the set of known values
//! - [`equations`] - Equation models and the registry
//! - [`solver`] - Fixed-point propagation over the registry
//! - [`scenario`] - Perturbation runner
//! - [`console`] - Prompt loop and result printer (CLI only)
//!
//! ## Usage
//!
//! ```
//! use capacitor_core::quantity::{KnownSet, Quantity};
//! use capacitor_core::propagate;
//!
//! let mut known: KnownSet = [(Quantity::Area, 2.0), (Quantity::Separation, 0.01)]
//!     .into_iter()
//!     .collect();
//! propagate(&mut known);
//! assert!(known.contains(Quantity::Capacitance));
//! ```
//!
//! ## Equations
//!
//! | Equation | Relation |
//! |----------|----------|
//! | ParallelPlateCapacitor | C = ε₀·A/d |
//! | ElectricField | E = Q/(ε₀·A) |
//! | ChargeDensity | σ = Q/A |
//! | PotentialEnergy | U = ½·C·V² |
//! | PotentialVoltageDifference | V = Q/C |
//!
//! Division by zero is not guarded: degenerate inputs produce infinities or
//! NaN in the solved set rather than errors.

pub mod equations;
pub mod error;
pub mod quantity;
pub mod scenario;
pub mod solver;

#[cfg(feature = "cli")]
pub mod console;

// Re-export main types for convenience
pub use equations::{Equation, EquationRegistry};
pub use error::{CapacitorError, Result};
pub use quantity::{KnownSet, Quantity};
pub use scenario::{run_scenarios, Scenario, ScenarioOutcome, STANDARD_SCENARIOS};
pub use solver::{propagate, Propagator, PropagatorConfig};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmCapacitorSolver;

/// Vacuum permittivity ε₀ in F/m, rounded to three significant figures.
pub const EPSILON_NOUGHT: f64 = 8.85e-12;
