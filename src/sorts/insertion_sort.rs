use crate::trace::TraceRecorder;

/// Insertion sort. One snapshot after each element is inserted into the
/// sorted prefix. Stable: equal elements keep their relative order because
/// the shift only moves strictly greater elements.
pub fn insertion_sort<T>(data: &mut [T], recorder: &mut TraceRecorder<T>)
where
    T: Ord + Copy,
{
    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;

        while j > 0 && key < data[j - 1] {
            data[j] = data[j - 1];
            j -= 1;
        }

        data[j] = key;
        recorder.capture(data);
    }
}

#[cfg(test)]
mod tests {
    use crate::generate::generate_trace;
    use crate::sorts::insertion_sort::insertion_sort;
    use crate::trace::TraceRecorder;
    use crate::utils::test_utils::trace_comparison_suite;
    use crate::Algorithm;

    #[test]
    pub fn test_insertion_sort_suite() {
        trace_comparison_suite(Algorithm::Insertion, Some(|n| n));
    }

    #[test]
    pub fn test_one_insertion_per_snapshot() {
        let trace = generate_trace(Algorithm::Insertion, &[3, 1, 2]);

        let expected: [&[u32]; 3] = [&[3, 1, 2], &[1, 3, 2], &[1, 2, 3]];

        assert_eq!(trace.len(), expected.len());
        for (snapshot, expected) in trace.snapshots().iter().zip(expected) {
            assert_eq!(snapshot.values(), expected);
        }
    }

    #[test]
    pub fn test_reverse_sorted_input() {
        let trace = generate_trace(Algorithm::Insertion, &[4, 3, 2, 1]);

        assert_eq!(trace.len(), 4);
        assert_eq!(trace.sorted().values(), [1, 2, 3, 4]);
    }

    #[test]
    pub fn test_empty() {
        // This is expected not to panic
        let mut recorder = TraceRecorder::<u32>::starting_from(&[]);
        insertion_sort::<u32>(&mut [], &mut recorder);
    }
}
