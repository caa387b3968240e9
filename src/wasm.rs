//! WASM bindings for Capacitor Core.
//!
//! This module provides JavaScript-friendly bindings for running the
//! calculator in a browser.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmCapacitorSolver } from 'capacitor_core';
//!
//! await init();
//!
//! const solver = new WasmCapacitorSolver();
//! solver.set('A', 2.0);
//! solver.set('d', 0.01);
//! solver.set('V', 5.0);
//! solver.solve();
//!
//! console.log(solver.get('Q'));      // 8.85e-9
//! console.log(solver.render());
//! console.log(solver.scenarios());
//! ```

use std::fmt::Write;

use wasm_bindgen::prelude::*;

use crate::quantity::{KnownSet, Quantity};
use crate::scenario::{run_scenarios, STANDARD_SCENARIOS};
use crate::solver::{Propagator, PropagatorConfig};
use crate::EquationRegistry;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(e: impl ToString) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// WASM-compatible capacitor calculator.
///
/// Holds a set of known values and the propagator that expands it.
#[wasm_bindgen]
pub struct WasmCapacitorSolver {
    known: KnownSet,
    propagator: Propagator,
}

impl Default for WasmCapacitorSolver {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WasmCapacitorSolver {
    /// Create an empty, permissive solver.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmCapacitorSolver {
        WasmCapacitorSolver {
            known: KnownSet::new(),
            propagator: Propagator::new(),
        }
    }

    /// Create a solver that rejects inconsistent overdetermined input.
    ///
    /// # Arguments
    /// * `tolerance` - Relative tolerance for the consistency check
    #[wasm_bindgen]
    pub fn strict(tolerance: f64) -> WasmCapacitorSolver {
        WasmCapacitorSolver {
            known: KnownSet::new(),
            propagator: Propagator::with_config(
                EquationRegistry::standard(),
                PropagatorConfig::new().strict(tolerance),
            ),
        }
    }

    /// Set a quantity by symbol (`A`, `d`, `Q`, ...) or long name.
    #[wasm_bindgen]
    pub fn set(&mut self, name: &str, value: f64) -> Result<(), JsValue> {
        let quantity: Quantity = name.parse().map_err(to_js)?;
        self.known.insert(quantity, value);
        Ok(())
    }

    /// Get a quantity's value, or `undefined` if it is unknown.
    #[wasm_bindgen]
    pub fn get(&self, name: &str) -> Option<f64> {
        Quantity::lookup(name).and_then(|q| self.known.get(q))
    }

    /// Forget every value.
    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.known = KnownSet::new();
    }

    /// Derive everything the known values allow.
    ///
    /// # Returns
    /// The number of passes the solver needed.
    #[wasm_bindgen]
    pub fn solve(&mut self) -> Result<usize, JsValue> {
        let report = self.propagator.run(&mut self.known).map_err(to_js)?;
        Ok(report.passes)
    }

    /// Check whether every quantity is known.
    #[wasm_bindgen(getter)]
    pub fn complete(&self) -> bool {
        self.known.is_complete()
    }

    /// Render the known values, one per line.
    #[wasm_bindgen]
    pub fn render(&self) -> String {
        self.known.to_string()
    }

    /// Run the ±20% scenarios and render each result under its label.
    #[wasm_bindgen]
    pub fn scenarios(&self) -> Result<String, JsValue> {
        let outcomes =
            run_scenarios(&self.known, &self.propagator, &STANDARD_SCENARIOS).map_err(to_js)?;
        let mut out = String::new();
        for outcome in outcomes {
            writeln!(out, "{}:\n{}", outcome.scenario.label, outcome.known).map_err(to_js)?;
        }
        Ok(out)
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Get the vacuum permittivity used by the equations.
#[wasm_bindgen]
pub fn epsilon_nought() -> f64 {
    crate::EPSILON_NOUGHT
}
