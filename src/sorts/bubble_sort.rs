use crate::trace::TraceRecorder;

/// Bubble sort. One snapshot after each completed inner pass, whether or not
/// that pass swapped anything. No early exit: n - 1 passes always run, so the
/// pacing is the same for every input of a given length. Stable.
pub fn bubble_sort<T>(data: &mut [T], recorder: &mut TraceRecorder<T>)
where
    T: Ord + Copy,
{
    let n = data.len();

    for i in 0..n.saturating_sub(1) {
        for j in 0..(n - 1 - i) {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
            }
        }

        recorder.capture(data);
    }
}
