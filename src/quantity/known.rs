//! The set of solved quantities.

use std::collections::BTreeMap;
use std::fmt;

use super::types::{Quantity, QUANTITY_COUNT};

/// Mapping from quantity to its current value.
///
/// During a propagation run values are only ever added through
/// [`KnownSet::record`], which refuses to overwrite. Callers outside the
/// engine (the prompt, the scenario runner) use [`KnownSet::insert`] and
/// [`KnownSet::clear_derived`] between runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KnownSet {
    values: BTreeMap<Quantity, f64>,
}

impl KnownSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value of a quantity, if known.
    pub fn get(&self, quantity: Quantity) -> Option<f64> {
        self.values.get(&quantity).copied()
    }

    pub fn contains(&self, quantity: Quantity) -> bool {
        self.values.contains_key(&quantity)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check whether every quantity has a value.
    pub fn is_complete(&self) -> bool {
        self.values.len() == QUANTITY_COUNT
    }

    /// Set a value, replacing any previous one.
    ///
    /// Returns the previous value.
    pub fn insert(&mut self, quantity: Quantity, value: f64) -> Option<f64> {
        self.values.insert(quantity, value)
    }

    /// Record a derived value unless the quantity is already known.
    ///
    /// Returns `true` if the value was inserted.
    pub fn record(&mut self, quantity: Quantity, value: f64) -> bool {
        if self.values.contains_key(&quantity) {
            return false;
        }
        self.values.insert(quantity, value);
        true
    }

    /// Forget every derived quantity, keeping Area, Separation and Charge.
    pub fn clear_derived(&mut self) {
        self.values.retain(|q, _| !q.is_derived());
    }

    /// Iterate over `(quantity, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Quantity, f64)> + '_ {
        self.values.iter().map(|(q, v)| (*q, *v))
    }

    /// Known quantities in canonical order.
    pub fn quantities(&self) -> impl Iterator<Item = Quantity> + '_ {
        self.values.keys().copied()
    }

    /// Quantities that still have no value, in canonical order.
    pub fn unknown(&self) -> Vec<Quantity> {
        Quantity::ALL
            .iter()
            .copied()
            .filter(|q| !self.contains(*q))
            .collect()
    }
}

impl FromIterator<(Quantity, f64)> for KnownSet {
    fn from_iter<I: IntoIterator<Item = (Quantity, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// A value in three-decimal scientific notation with a signed, two-digit
/// exponent (`1.770e-09`, `2.000e+00`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scientific(pub f64);

impl fmt::Display for Scientific {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("NaN");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
        }

        let text = format!("{value:.3e}");
        let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(f, "{mantissa}e{sign}{:02}", exponent.abs())
    }
}

impl fmt::Display for KnownSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (quantity, value) in self.iter() {
            writeln!(f, "{}: {} {}", quantity.name(), Scientific(value), quantity.unit())?;
        }
        Ok(())
    }
}
