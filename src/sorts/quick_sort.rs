use crate::trace::TraceRecorder;

/// In-place quick sort with a Lomuto partition around the last element of
/// each range. One snapshot after each partition completes, captured right
/// after the pivot lands in its final position. Not stable. Snapshot count
/// depends on the pivot choices the input produces; an already-sorted input
/// degenerates to n - 1 single-sided partitions that each leave the array
/// untouched.
pub fn quick_sort<T>(data: &mut [T], recorder: &mut TraceRecorder<T>)
where
    T: Ord + Copy,
{
    if data.len() > 1 {
        let hi = data.len() - 1;
        quick_range(data, 0, hi, recorder);
    }
}

// Bounds are inclusive so that empty sub-ranges never underflow below zero.
fn quick_range<T>(data: &mut [T], lo: usize, hi: usize, recorder: &mut TraceRecorder<T>)
where
    T: Ord + Copy,
{
    if lo >= hi {
        return;
    }

    let pivot_idx = partition(data, lo, hi, recorder);

    if pivot_idx > 0 {
        quick_range(data, lo, pivot_idx - 1, recorder);
    }
    quick_range(data, pivot_idx + 1, hi, recorder);
}

fn partition<T>(data: &mut [T], lo: usize, hi: usize, recorder: &mut TraceRecorder<T>) -> usize
where
    T: Ord + Copy,
{
    let pivot = data[hi];
    let mut i = lo;

    for j in lo..hi {
        if data[j] < pivot {
            data.swap(i, j);
            i += 1;
        }
    }

    data.swap(i, hi);
    recorder.capture(data);

    i
}

#[cfg(test)]
mod tests {
    use crate::generate::generate_trace;
    use crate::sorts::quick_sort::quick_sort;
    use crate::trace::TraceRecorder;
    use crate::utils::test_utils::trace_comparison_suite;
    use crate::Algorithm;

    #[test]
    pub fn test_quick_sort_suite() {
        trace_comparison_suite(Algorithm::Quick, None);
    }

    #[test]
    pub fn test_one_partition_per_snapshot() {
        let trace = generate_trace(Algorithm::Quick, &[3, 1, 2]);

        let expected: [&[u32]; 2] = [&[3, 1, 2], &[1, 2, 3]];

        assert_eq!(trace.len(), expected.len());
        for (snapshot, expected) in trace.snapshots().iter().zip(expected) {
            assert_eq!(snapshot.values(), expected);
        }
    }

    #[test]
    pub fn test_sorted_input_produces_identical_snapshots() {
        let input: Vec<u32> = (1..=8).collect();
        let trace = generate_trace(Algorithm::Quick, &input);

        // Worst case: the max is picked as pivot every time, one partition
        // per remaining range.
        assert_eq!(trace.len(), 8);
        for snapshot in trace.snapshots() {
            assert_eq!(snapshot.values(), &input[..]);
        }
    }

    #[test]
    pub fn test_empty() {
        // This is expected not to panic
        let mut recorder = TraceRecorder::<u32>::starting_from(&[]);
        quick_sort::<u32>(&mut [], &mut recorder);
    }
}
