use crate::generate::generate_trace;
use crate::trace::Trace;
use crate::Algorithm;
use nanorand::{Rng, WyRand};
use std::fmt::Debug;

/// Random values in 1..=100; lengths above ~15 are all but guaranteed to
/// contain duplicates, which is intentional.
pub fn gen_values(n: usize) -> Vec<u32> {
    let mut rng = WyRand::new();

    (0..n).map(|_| rng.generate_range(1..=100u32)).collect()
}

/// Check the trace invariants that hold for every algorithm:
/// snapshot 0 is the input, the final snapshot is the sorted input, and every
/// snapshot in between holds exactly the input's multiset of values.
pub fn validate_trace<T>(input: &[T], trace: &Trace<T>)
where
    T: Ord + Copy + Debug,
{
    assert_eq!(trace.initial().values(), input);

    let mut expected = input.to_vec();
    expected.sort_unstable();
    assert_eq!(trace.sorted().values(), &expected[..]);

    for snapshot in trace.snapshots() {
        assert_eq!(snapshot.len(), input.len());

        let mut values = snapshot.values().to_vec();
        values.sort_unstable();
        assert_eq!(values, expected);
    }
}

/// Generate and validate traces for `algorithm` across a spread of input
/// lengths. `expected_len` gives the algorithm's snapshot count (including
/// the initial state) for inputs of length n >= 2; pass `None` when the
/// count depends on the values themselves.
pub fn trace_comparison_suite(algorithm: Algorithm, expected_len: Option<fn(usize) -> usize>) {
    for n in [0usize, 1, 2, 3, 4, 5, 8, 16, 20, 50] {
        let input = gen_values(n);
        let trace = generate_trace(algorithm, &input);

        validate_trace(&input, &trace);

        if let Some(expected_len) = expected_len {
            let expected = if n <= 1 { 1 } else { expected_len(n) };
            assert_eq!(
                trace.len(),
                expected,
                "unexpected trace length for {} over {} values",
                algorithm,
                n
            );
        }
    }
}
