use crate::generate::generate_trace;
use crate::trace::Trace;
use crate::Algorithm;

pub trait SortTrace<T> {
    /// sort_trace runs `algorithm` over a copy of the data and records every
    /// stable intermediate state, from the unsorted input through to the
    /// sorted result.
    ///
    /// ```
    /// use sortrace::{Algorithm, SortTrace};
    ///
    /// let values = [3, 1, 2];
    /// let trace = values.sort_trace(Algorithm::Bubble);
    ///
    /// assert_eq!(trace.initial().values(), [3, 1, 2]);
    /// assert_eq!(trace.sorted().values(), [1, 2, 3]);
    /// ```
    fn sort_trace(&self, algorithm: Algorithm) -> Trace<T>;
}

impl<T> SortTrace<T> for [T]
where
    T: Ord + Copy,
{
    fn sort_trace(&self, algorithm: Algorithm) -> Trace<T> {
        generate_trace(algorithm, self)
    }
}

impl<T> SortTrace<T> for Vec<T>
where
    T: Ord + Copy,
{
    fn sort_trace(&self, algorithm: Algorithm) -> Trace<T> {
        generate_trace(algorithm, self)
    }
}
