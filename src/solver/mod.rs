//! Fixed-point propagation over the equation registry.
//!
//! ## Algorithm
//!
//! Each pass offers every equation, in registry order, the current
//! [`KnownSet`](crate::quantity::KnownSet). An equation with exactly two of
//! its three slots known derives the third, which is recorded immediately
//! so later equations in the same pass can use it. Passes repeat until one
//! derives nothing.
//!
//! Because a value is only ever added, never replaced, each changing pass
//! grows the set by at least one of the eight quantities. The loop is
//! therefore bounded by [`DEFAULT_MAX_PASSES`].

mod propagator;

pub use propagator::{
    propagate, ConsistencyMode, Derivation, PropagationReport, Propagator, PropagatorConfig,
};

use crate::quantity::QUANTITY_COUNT;

/// Upper bound on passes: one per quantity plus the final pass that changes nothing.
pub const DEFAULT_MAX_PASSES: usize = QUANTITY_COUNT + 1;

/// Default relative tolerance for strict consistency checking.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;
