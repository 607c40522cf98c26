use crate::sorts;
use crate::trace::{Trace, TraceRecorder};
use crate::Algorithm;

/// Run `algorithm` over a copy of `input` and record every stable
/// intermediate state, eagerly, in one uninterrupted call.
///
/// The returned trace always starts with `input` itself as snapshot 0 and
/// ends with the fully sorted array. Degenerate inputs (length 0 or 1) yield
/// a single-snapshot trace without running the algorithm at all.
pub fn generate_trace<T>(algorithm: Algorithm, input: &[T]) -> Trace<T>
where
    T: Ord + Copy,
{
    let mut recorder = TraceRecorder::starting_from(input);

    // By definition, this is already sorted
    if input.len() > 1 {
        let mut data = input.to_vec();

        match algorithm {
            Algorithm::Selection => sorts::selection_sort(&mut data, &mut recorder),
            Algorithm::Insertion => sorts::insertion_sort(&mut data, &mut recorder),
            Algorithm::Bubble => sorts::bubble_sort(&mut data, &mut recorder),
            Algorithm::Merge => sorts::merge_sort(&mut data, &mut recorder),
            Algorithm::Quick => sorts::quick_sort(&mut data, &mut recorder),
        }
    }

    let trace = recorder.into_trace(algorithm);
    log::debug!(
        "{}: {} snapshots over {} values",
        algorithm,
        trace.len(),
        input.len()
    );

    trace
}
