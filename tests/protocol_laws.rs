//! Property-based tests for the protocol laws.
//!
//! ## Generator laws
//! - **Idempotent exhaustion**: once a generator pulls `Sentinel`, every
//!   later pull is `Sentinel` too.
//! - **Range correctness**: `range(a, b)` produces exactly `a..b`, in order.
//! - **Filter purity**: the filtered output is exactly the order-preserving
//!   passing subsequence of the source's output.
//! - **Concat ordering**: all of the first source's values, then all of the
//!   second's.
//! - **Collect transparency**: the sink ends up equal to what was produced,
//!   and collecting changes nothing about what is produced.
//!
//! ## Chain laws
//! - **Sum/fold agreement** with the standard library folds.
//! - **Collect-chain order preservation**.
//!
//! Using proptest, we generate random inputs to verify these laws across a
//! wide range of values.

use proptest::collection::vec;
use proptest::prelude::*;

use pullchain::*;

fn drain<G: Generator>(g: &mut G) -> Vec<G::Item> {
    let mut out = Vec::new();
    while let Value(v) = g.pull() {
        out.push(v);
    }
    out
}

proptest! {
    #[test]
    fn range_produces_exactly_the_half_open_interval(
        start in -100i64..100,
        len in 0i64..80,
    ) {
        let end = start + len;
        let mut g = range(start, end);
        prop_assert_eq!(drain(&mut g), (start..end).collect::<Vec<_>>());
        prop_assert_eq!(g.pull(), Sentinel);
    }

    #[test]
    fn exhaustion_is_idempotent_for_every_pipeline_shape(
        items in vec(any::<i16>(), 0..40),
        extra_pulls in 1usize..20,
    ) {
        let mut sink = Vec::new();
        let mut g = items
            .clone()
            .into_gen()
            .filter(|n| n % 2 == 0)
            .map(|n| n as i32)
            .collect_into(&mut sink);
        drain(&mut g);
        for _ in 0..extra_pulls {
            prop_assert_eq!(g.pull(), Sentinel);
        }
    }

    #[test]
    fn filter_output_is_the_passing_subsequence(
        items in vec(-50i32..50, 0..60),
        threshold in -50i32..50,
    ) {
        let mut g = items.clone().into_gen().filter(move |&v| v >= threshold);
        let got = drain(&mut g);
        let expected: Vec<i32> =
            items.into_iter().filter(|&v| v >= threshold).collect();
        prop_assert_eq!(got, expected);
        prop_assert_eq!(g.pull(), Sentinel);
    }

    #[test]
    fn concat_is_first_then_second(
        first in vec(any::<i32>(), 0..40),
        second in vec(any::<i32>(), 0..40),
    ) {
        let mut g = first.clone().into_gen().concat(second.clone().into_gen());
        let mut expected = first;
        expected.extend(second);
        prop_assert_eq!(drain(&mut g), expected);
        prop_assert_eq!(g.pull(), Sentinel);
    }

    #[test]
    fn collect_sink_matches_the_produced_values(
        items in vec(any::<i32>(), 0..40),
    ) {
        let mut sink = Vec::new();
        let produced = drain(&mut items.clone().into_gen().collect_into(&mut sink));
        prop_assert_eq!(&sink, &produced);
        prop_assert_eq!(produced, items);
    }

    #[test]
    fn element_projects_every_in_bounds_index(
        items in vec(any::<u8>(), 1..20),
    ) {
        let mut g = element(&items);
        prop_assert_eq!(drain(&mut g), items.clone());
        prop_assert_eq!(g.pull(), Sentinel);
    }

    #[test]
    fn sum_chain_agrees_with_the_standard_fold(
        initial in proptest::option::of(-1000i64..1000),
        pushes in vec(-1000i64..1000, 0..40),
    ) {
        let mut chain = sum_chain(initial);
        for &v in &pushes {
            chain.push(v);
        }
        let expected = match (initial, pushes.is_empty()) {
            (None, true) => None,
            _ => Some(initial.unwrap_or(0) + pushes.iter().sum::<i64>()),
        };
        prop_assert_eq!(chain.finish(), expected);
        // A finished chain starts over from the unseeded state.
        prop_assert_eq!(chain.finish(), None);
    }

    #[test]
    fn fold_chain_agrees_with_reduce(
        pushes in vec(-8i64..8, 0..12),
    ) {
        let mut chain = fold_chain(|acc: i64, v| acc * v);
        for &v in &pushes {
            chain.push(v);
        }
        let expected = pushes.into_iter().reduce(|acc, v| acc * v);
        prop_assert_eq!(chain.finish(), expected);
    }

    #[test]
    fn collect_chain_preserves_push_order(
        first in proptest::option::of(any::<i32>()),
        pushes in vec(any::<i32>(), 0..40),
    ) {
        let mut chain = collect_chain(first);
        for &v in &pushes {
            chain.push(v);
        }
        let mut expected: Vec<i32> = first.into_iter().collect();
        expected.extend(&pushes);
        prop_assert_eq!(chain.finish(), expected);
    }
}
