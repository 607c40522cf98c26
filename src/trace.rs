use crate::frame::select_frame;
use crate::Algorithm;

/// An immutable copy of the array's contents at one point during sorting.
///
/// A snapshot owns its storage; later mutation of the working array never
/// changes a snapshot that was already captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<T> {
    values: Box<[T]>,
}

impl<T: Copy> Snapshot<T> {
    pub(crate) fn capture(state: &[T]) -> Self {
        Self {
            values: state.into(),
        }
    }
}

impl<T> Snapshot<T> {
    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T> AsRef<[T]> for Snapshot<T> {
    fn as_ref(&self) -> &[T] {
        &self.values
    }
}

/// The ordered sequence of snapshots one algorithm produced for one input,
/// from the unsorted initial state through to the fully sorted final state.
#[derive(Debug, Clone)]
pub struct Trace<T> {
    algorithm: Algorithm,
    snapshots: Vec<Snapshot<T>>,
}

impl<T> Trace<T> {
    pub(crate) fn new(algorithm: Algorithm, snapshots: Vec<Snapshot<T>>) -> Self {
        // This is an invariant of Trace that must be upheld: the initial
        // state is always snapshot 0.
        assert!(!snapshots.is_empty(), "Trace must hold at least one snapshot");

        Self {
            algorithm,
            snapshots,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Number of snapshots, including the initial state. Always >= 1.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn snapshots(&self) -> &[Snapshot<T>] {
        &self.snapshots
    }

    /// The unsorted input, as captured before the algorithm ran.
    pub fn initial(&self) -> &Snapshot<T> {
        &self.snapshots[0]
    }

    /// The fully sorted final state.
    pub fn sorted(&self) -> &Snapshot<T> {
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// The snapshot on display at `tick`. See [`select_frame`].
    pub fn frame(&self, tick: usize) -> &Snapshot<T> {
        select_frame(self, tick)
    }
}

/// Accumulator threaded through the sorting routines; collects one snapshot
/// per externally-visible stable state.
pub(crate) struct TraceRecorder<T> {
    snapshots: Vec<Snapshot<T>>,
}

impl<T: Copy> TraceRecorder<T> {
    /// Start a recording with `input` as snapshot 0.
    pub(crate) fn starting_from(input: &[T]) -> Self {
        Self {
            snapshots: vec![Snapshot::capture(input)],
        }
    }

    pub(crate) fn capture(&mut self, state: &[T]) {
        self.snapshots.push(Snapshot::capture(state));
    }

    pub(crate) fn into_trace(self, algorithm: Algorithm) -> Trace<T> {
        Trace::new(algorithm, self.snapshots)
    }
}
