use crate::{
    chain, compress, cycle, dropwhile, group_by, pack, slice, take, takewhile, tee, to_vec, weave,
    zip,
};
use proptest::prelude::*;

proptest! {
    /// Chaining two sequences is concatenation.
    #[test]
    fn prop_chain_concatenation(a: Vec<u8>, b: Vec<u8>) {
        let chained = to_vec(chain(vec![a.clone(), b.clone()]));

        let mut expected = a;
        expected.extend(b);
        prop_assert_eq!(chained, expected);
    }

    /// Cycling a nonempty sequence for k whole laps repeats it k times.
    #[test]
    fn prop_cycle_whole_laps(
        a in prop::collection::vec(any::<u8>(), 1..20),
        k in 1usize..5,
    ) {
        let cycled = to_vec(take(cycle(a.clone()), k * a.len()));

        let mut expected = Vec::new();
        for _ in 0..k {
            expected.extend(a.iter().copied());
        }
        prop_assert_eq!(cycled, expected);
    }

    /// Every tee branch sees exactly the source, in order, regardless of
    /// how the branches are interleaved.
    #[test]
    fn prop_tee_branches_match_source(input: Vec<u8>) {
        let mut branches = tee(input.clone().into_iter(), 2);
        let b1 = branches.pop().expect("two branches");
        let b0 = branches.pop().expect("two branches");
        prop_assert_eq!(to_vec(b0), input.clone());
        prop_assert_eq!(to_vec(b1), input);
    }

    /// Pulling branch 0 k times then branch 1 k times yields the same
    /// prefix both times.
    #[test]
    fn prop_tee_prefix_fidelity(input: Vec<u8>, k in 0usize..32) {
        let mut branches = tee(input.clone().into_iter(), 2);
        let mut b1 = branches.pop().expect("two branches");
        let mut b0 = branches.pop().expect("two branches");

        let seen0: Vec<u8> = (0..k).map_while(|_| b0.next()).collect();
        let seen1: Vec<u8> = (0..k).map_while(|_| b1.next()).collect();
        let expected: Vec<u8> = input.into_iter().take(k).collect();
        prop_assert_eq!(&seen0, &expected);
        prop_assert_eq!(&seen1, &expected);
    }

    /// Zip pairs exactly min(len(a), len(b)) elements, componentwise.
    #[test]
    fn prop_zip_lockstep(a: Vec<u8>, b: Vec<u8>) {
        let pairs = to_vec(zip(a.clone(), b.clone()));
        prop_assert_eq!(pairs.len(), a.len().min(b.len()));
        for (i, (x, y)) in pairs.into_iter().enumerate() {
            prop_assert_eq!(x, a[i]);
            prop_assert_eq!(y, b[i]);
        }
    }

    /// Slicing matches the skip/take view of the same window.
    #[test]
    fn prop_slice_matches_window(
        input: Vec<u8>,
        start in 0usize..20,
        len in 0usize..20,
    ) {
        let stop = start + len;
        let sliced = to_vec(slice(input.clone(), start, stop));
        let expected: Vec<u8> = input.into_iter().skip(start).take(len).collect();
        prop_assert_eq!(sliced, expected);
    }

    /// takewhile and dropwhile split a sequence at the first predicate
    /// failure; together they reassemble it.
    #[test]
    fn prop_while_combinators_partition(input: Vec<u8>) {
        let is_even = |x: &u8| x % 2 == 0;
        let mut reassembled = to_vec(takewhile(input.clone(), is_even));
        reassembled.extend(to_vec(dropwhile(input.clone(), is_even)));
        prop_assert_eq!(reassembled, input);
    }

    /// Fully draining every subgroup reassembles the input; runs are
    /// internally constant and adjacent runs differ.
    #[test]
    fn prop_group_by_runs_reassemble(input: Vec<u8>) {
        let runs = to_vec(pack(input.clone()));

        let reassembled: Vec<u8> = runs.iter().flatten().copied().collect();
        prop_assert_eq!(reassembled, input);

        for run in &runs {
            prop_assert!(!run.is_empty());
            prop_assert!(run.iter().all(|x| x == &run[0]));
        }
        for pair in runs.windows(2) {
            prop_assert_ne!(pair[0][0], pair[1][0]);
        }
    }

    /// compress yields exactly the first element of each packed run.
    #[test]
    fn prop_compress_is_run_heads(input: Vec<u8>) {
        let heads: Vec<u8> = to_vec(pack(input.clone()))
            .into_iter()
            .map(|run| run[0])
            .collect();
        prop_assert_eq!(to_vec(compress(input)), heads);
    }

    /// group_by with a key function groups exactly the maximal runs of
    /// equal keys.
    #[test]
    fn prop_group_by_keyed_runs_are_maximal(input: Vec<u8>) {
        let pairs: Vec<(u8, Vec<u8>)> = group_by(input.clone(), |x| x / 16)
            .map(|(key, group)| (key, group.collect()))
            .collect();

        let reassembled: Vec<u8> = pairs.iter().flat_map(|(_, run)| run.clone()).collect();
        prop_assert_eq!(reassembled, input);

        for (key, run) in &pairs {
            prop_assert!(run.iter().all(|x| x / 16 == *key));
        }
        for pair in pairs.windows(2) {
            prop_assert_ne!(pair[0].0, pair[1].0);
        }
    }

    /// Weaving preserves element count and round-robin order.
    #[test]
    fn prop_weave_counts_and_order(a: Vec<u8>, b: Vec<u8>) {
        let woven = to_vec(weave(vec![a.clone(), b.clone()]));
        prop_assert_eq!(woven.len(), a.len() + b.len());

        // While both inputs are live the outputs alternate a, b, a, b.
        let live = a.len().min(b.len());
        for i in 0..live {
            prop_assert_eq!(woven[2 * i], a[i]);
            prop_assert_eq!(woven[2 * i + 1], b[i]);
        }
    }
}

/// Bolero fuzz test: the buffering layer never panics on arbitrary input
/// when used within its contract.
#[test]
fn fuzz_buffering_no_panic() {
    bolero::check!().with_type::<Vec<u8>>().for_each(|input| {
        let runs = to_vec(pack(input.clone()));
        let reassembled: Vec<u8> = runs.iter().flatten().copied().collect();
        assert_eq!(reassembled, *input);

        let _ = to_vec(compress(input.clone()));

        let laps = to_vec(take(cycle(input.clone()), input.len() * 2));
        assert_eq!(laps.len(), input.len() * 2);

        let mut branches = tee(input.clone().into_iter(), 3);
        let b2 = branches.pop().expect("three branches");
        let b1 = branches.pop().expect("three branches");
        let b0 = branches.pop().expect("three branches");
        assert_eq!(to_vec(b0), *input);
        assert_eq!(to_vec(b1), *input);
        assert_eq!(to_vec(b2), *input);
    });
}
