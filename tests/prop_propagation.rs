//! Property-based tests for the propagation engine using proptest.
//!
//! Covers: termination, monotonicity, idempotence, and independence of the
//! fixed point from the order equations are evaluated in.

use capacitor_core::quantity::{KnownSet, Quantity};
use capacitor_core::{propagate, EquationRegistry, Propagator, PropagatorConfig};
use proptest::prelude::*;

/// Values as raw bits so NaN compares equal to itself.
fn bits(known: &KnownSet) -> Vec<(Quantity, u64)> {
    known.iter().map(|(q, v)| (q, v.to_bits())).collect()
}

fn arbitrary_set() -> impl Strategy<Value = KnownSet> {
    (
        prop::sample::subsequence(Quantity::ALL.to_vec(), 0..=Quantity::ALL.len()),
        prop::collection::vec(any::<f64>(), Quantity::ALL.len()),
    )
        .prop_map(|(quantities, values)| quantities.into_iter().zip(values).collect())
}

/// A fully solved, physically consistent set.
fn consistent_baseline() -> impl Strategy<Value = KnownSet> {
    (1e-3f64..10.0, 1e-4f64..1e-1, 0.1f64..1000.0).prop_map(|(area, separation, voltage)| {
        let mut known: KnownSet = [
            (Quantity::Area, area),
            (Quantity::Separation, separation),
            (Quantity::Voltage, voltage),
        ]
        .into_iter()
        .collect();
        propagate(&mut known);
        known
    })
}

proptest! {
    /// Any input terminates within eight passes.
    #[test]
    fn propagate_terminates(known in arbitrary_set()) {
        let mut known = known;
        let report = propagate(&mut known);
        prop_assert!(report.passes <= 8, "took {} passes", report.passes);
        prop_assert!(report.passes >= 1);
    }

    /// Known quantities stay known and keep their values.
    #[test]
    fn propagate_is_monotonic(known in arbitrary_set()) {
        let before = known.clone();
        let mut after = known;
        let report = propagate(&mut after);

        for (q, v) in before.iter() {
            prop_assert_eq!(after.get(q).map(f64::to_bits), Some(v.to_bits()));
        }
        prop_assert_eq!(after.len(), before.len() + report.derived.len());
    }

    /// A second run changes nothing.
    #[test]
    fn propagate_is_idempotent(known in arbitrary_set()) {
        let mut known = known;
        propagate(&mut known);
        let once = bits(&known);
        let report = propagate(&mut known);
        prop_assert_eq!(bits(&known), once);
        prop_assert!(!report.changed());
        prop_assert_eq!(report.passes, 1);
    }

    /// Fewer than two known values cannot unlock any equation.
    #[test]
    fn single_value_is_a_fixed_point(index in 0usize..8, value in any::<f64>()) {
        let q = Quantity::ALL[index];
        let mut known: KnownSet = [(q, value)].into_iter().collect();
        propagate(&mut known);
        prop_assert_eq!(known.len(), 1);
    }

    /// Shuffling the evaluation order reaches the same fixed point.
    #[test]
    fn fixed_point_is_order_independent(
        baseline in consistent_baseline(),
        subset in prop::sample::subsequence(Quantity::ALL.to_vec(), 0..=Quantity::ALL.len()),
        order in Just(EquationRegistry::standard().into_equations()).prop_shuffle(),
    ) {
        let start: KnownSet = subset
            .iter()
            .filter_map(|q| baseline.get(*q).map(|v| (*q, v)))
            .collect();

        let mut standard = start.clone();
        propagate(&mut standard);

        let shuffled = Propagator::with_config(
            EquationRegistry::from_equations(order),
            PropagatorConfig::new(),
        );
        let mut reordered = start;
        shuffled.expand(&mut reordered);

        let keys: Vec<_> = standard.quantities().collect();
        let reordered_keys: Vec<_> = reordered.quantities().collect();
        prop_assert_eq!(keys, reordered_keys);

        for (q, v) in standard.iter() {
            let w = reordered.get(q).unwrap();
            let scale = v.abs().max(w.abs());
            prop_assert!(
                (v - w).abs() <= 1e-9 * scale,
                "{} differs: {} vs {}", q, v, w
            );
        }
    }

    /// Any consistent set passes strict checking after propagation.
    #[test]
    fn consistent_sets_pass_strict_mode(
        baseline in consistent_baseline(),
        subset in prop::sample::subsequence(Quantity::ALL.to_vec(), 0..=Quantity::ALL.len()),
    ) {
        let mut known: KnownSet = subset
            .iter()
            .filter_map(|q| baseline.get(*q).map(|v| (*q, v)))
            .collect();
        let strict = Propagator::with_config(
            EquationRegistry::standard(),
            PropagatorConfig::new().strict(1e-9),
        );
        prop_assert!(strict.run(&mut known).is_ok());
    }
}
