use crate::trace::TraceRecorder;

/// Selection sort. One snapshot after each outer-loop placement of the i-th
/// minimum, including the final self-swap placement. Not stable.
pub fn selection_sort<T>(data: &mut [T], recorder: &mut TraceRecorder<T>)
where
    T: Ord + Copy,
{
    let n = data.len();

    for i in 0..n {
        let mut min_idx = i;

        for j in (i + 1)..n {
            if data[j] < data[min_idx] {
                min_idx = j;
            }
        }

        data.swap(i, min_idx);
        recorder.capture(data);
    }
}
