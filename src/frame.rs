use crate::trace::{Snapshot, Trace};
use std::cmp::min;

/// Select the snapshot to display at `tick`.
///
/// Advances one snapshot per tick and, once the trace is exhausted, holds on
/// the final sorted snapshot for every later tick. The clock driving `tick`
/// never has to know when sorting finished.
#[inline]
pub fn select_frame<T>(trace: &Trace<T>, tick: usize) -> &Snapshot<T> {
    &trace.snapshots()[min(tick, trace.len() - 1)]
}

#[cfg(test)]
mod tests {
    use crate::frame::select_frame;
    use crate::generate::generate_trace;
    use crate::Algorithm;

    #[test]
    pub fn test_advances_one_snapshot_per_tick() {
        let trace = generate_trace(Algorithm::Selection, &[5, 3, 4, 1, 2]);
        assert_eq!(trace.len(), 6);

        for (tick, expected) in [(0usize, 0usize), (1, 1), (5, 5), (100, 5)] {
            assert_eq!(select_frame(&trace, tick), &trace.snapshots()[expected]);
        }
    }

    #[test]
    pub fn test_holds_final_snapshot_after_completion() {
        let trace = generate_trace(Algorithm::Bubble, &[9, 7, 8, 1]);
        let last = trace.len() - 1;

        for tick in last..last + 50 {
            assert_eq!(select_frame(&trace, tick), trace.sorted());
        }
    }

    #[test]
    pub fn test_select_frame_is_idempotent() {
        let trace = generate_trace(Algorithm::Quick, &[4, 2, 6, 1, 3]);

        for tick in 0..trace.len() + 5 {
            assert_eq!(select_frame(&trace, tick), select_frame(&trace, tick));
        }
    }

    #[test]
    pub fn test_single_snapshot_trace_always_shows_its_input() {
        let trace = generate_trace(Algorithm::Merge, &[42]);

        for tick in [0usize, 1, 17, 1_000_000] {
            assert_eq!(select_frame(&trace, tick).values(), [42]);
        }
    }
}
