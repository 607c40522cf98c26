use crate::trace::TraceRecorder;

/// Top-down merge sort. One snapshot per merge operation, captured right
/// after the merge's result is written back into the working array, so every
/// snapshot shows the full array mid-sort. Splits at the midpoint down to
/// single elements; a length-n input therefore produces n - 1 merges. Stable:
/// the merge takes from the left run on ties.
pub fn merge_sort<T>(data: &mut [T], recorder: &mut TraceRecorder<T>)
where
    T: Ord + Copy,
{
    let len = data.len();
    if len > 1 {
        merge_range(data, 0, len, recorder);
    }
}

fn merge_range<T>(data: &mut [T], lo: usize, hi: usize, recorder: &mut TraceRecorder<T>)
where
    T: Ord + Copy,
{
    if hi - lo <= 1 {
        return;
    }

    let mid = lo + (hi - lo) / 2;
    merge_range(data, lo, mid, recorder);
    merge_range(data, mid, hi, recorder);
    merge(data, lo, mid, hi, recorder);
}

fn merge<T>(data: &mut [T], lo: usize, mid: usize, hi: usize, recorder: &mut TraceRecorder<T>)
where
    T: Ord + Copy,
{
    let left = data[lo..mid].to_vec();
    let right = data[mid..hi].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut k = lo;

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            data[k] = left[i];
            i += 1;
        } else {
            data[k] = right[j];
            j += 1;
        }
        k += 1;
    }

    while i < left.len() {
        data[k] = left[i];
        i += 1;
        k += 1;
    }

    while j < right.len() {
        data[k] = right[j];
        j += 1;
        k += 1;
    }

    recorder.capture(data);
}
