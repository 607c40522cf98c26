use crate::frame::select_frame;
use crate::generate::generate_trace;
use crate::sample::sample_values;
use crate::trace::{Snapshot, Trace};
use crate::Algorithm;
#[cfg(feature = "multi-threaded")]
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Values drawn for each panel of the five-algorithm gallery.
pub const GALLERY_SAMPLE: usize = 20;
const GALLERY_MAX_VALUE: u32 = 100;

/// Values drawn for each side of a two-algorithm comparison.
pub const COMPARISON_SAMPLE: usize = 50;
const COMPARISON_MAX_VALUE: u32 = 1000;

/// One trace-consuming view: an algorithm animating over its own input.
///
/// A panel owns its trace outright; tearing the view down drops everything,
/// and nothing is shared with any other panel.
pub struct Panel {
    trace: Trace<u32>,
}

impl Panel {
    pub fn new(algorithm: Algorithm, values: Vec<u32>) -> Self {
        Self {
            trace: generate_trace(algorithm, &values),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.trace.algorithm()
    }

    pub fn trace(&self) -> &Trace<u32> {
        &self.trace
    }

    pub fn frame(&self, tick: usize) -> &Snapshot<u32> {
        select_frame(&self.trace, tick)
    }

    /// Bar-chart feed for the rendering layer: positions 1..=n paired with
    /// the values on display at `tick`.
    pub fn bar_series(&self, tick: usize) -> (Vec<usize>, &[u32]) {
        let values = self.frame(tick).values();
        ((1..=values.len()).collect(), values)
    }

    /// Whether the panel has reached its steady-state sorted display.
    pub fn is_finished(&self, tick: usize) -> bool {
        tick >= self.trace.len() - 1
    }
}

/// Two algorithms side by side, each over a fresh independent sample, with a
/// crude wall-clock readout.
pub struct Comparison {
    left: Panel,
    right: Panel,
}

impl Comparison {
    pub fn new(left: Algorithm, right: Algorithm) -> Self {
        Self {
            left: Panel::new(left, sample_values(COMPARISON_SAMPLE, COMPARISON_MAX_VALUE)),
            right: Panel::new(right, sample_values(COMPARISON_SAMPLE, COMPARISON_MAX_VALUE)),
        }
    }

    pub fn left(&self) -> &Panel {
        &self.left
    }

    pub fn right(&self) -> &Panel {
        &self.right
    }

    pub fn frames(&self, tick: usize) -> (&Snapshot<u32>, &Snapshot<u32>) {
        (self.left.frame(tick), self.right.frame(tick))
    }

    /// Time one full run of each side's algorithm over its own input.
    pub fn stopwatch(&self) -> (Duration, Duration) {
        (
            measure_runtime(self.left.algorithm(), self.left.trace.initial().values()),
            measure_runtime(self.right.algorithm(), self.right.trace.initial().values()),
        )
    }
}

/// All five algorithms animating one shared input, one panel each.
pub struct Gallery {
    panels: Vec<Panel>,
}

impl Gallery {
    pub fn new() -> Self {
        Self::from_values(sample_values(GALLERY_SAMPLE, GALLERY_MAX_VALUE))
    }

    pub fn from_values(values: Vec<u32>) -> Self {
        // Each panel sorts its own copy, so the five generations are
        // independent and can run on worker threads.
        #[cfg(feature = "multi-threaded")]
        let panels = Algorithm::ALL
            .par_iter()
            .map(|&algorithm| Panel::new(algorithm, values.clone()))
            .collect();

        #[cfg(not(feature = "multi-threaded"))]
        let panels = Algorithm::ALL
            .iter()
            .map(|&algorithm| Panel::new(algorithm, values.clone()))
            .collect();

        Self { panels }
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn frames(&self, tick: usize) -> impl Iterator<Item = (Algorithm, &Snapshot<u32>)> {
        self.panels
            .iter()
            .map(move |panel| (panel.algorithm(), panel.frame(tick)))
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new()
    }
}

/// Wall-clock duration of one full trace generation. A crude readout for the
/// comparison view, not a benchmark.
pub fn measure_runtime<T>(algorithm: Algorithm, values: &[T]) -> Duration
where
    T: Ord + Copy,
{
    let start = Instant::now();
    let trace = generate_trace(algorithm, values);
    let elapsed = start.elapsed();

    log::debug!(
        "{}: {:?} for {} values ({} snapshots)",
        algorithm,
        elapsed,
        values.len(),
        trace.len()
    );

    elapsed
}

#[cfg(test)]
mod tests {
    use crate::panel::{Comparison, Gallery, Panel, COMPARISON_SAMPLE};
    use crate::Algorithm;

    #[test]
    pub fn test_gallery_runs_every_algorithm() {
        let gallery = Gallery::from_values(vec![4, 2, 5, 1, 3]);

        assert_eq!(gallery.panels().len(), Algorithm::ALL.len());
        for (panel, algorithm) in gallery.panels().iter().zip(Algorithm::ALL) {
            assert_eq!(panel.algorithm(), algorithm);
            assert_eq!(panel.trace().sorted().values(), [1, 2, 3, 4, 5]);
        }
    }

    #[test]
    pub fn test_gallery_panels_share_the_same_input() {
        let gallery = Gallery::new();
        let initial = gallery.panels()[0].trace().initial();

        for panel in gallery.panels() {
            assert_eq!(panel.trace().initial(), initial);
        }
    }

    #[test]
    pub fn test_comparison_sides_are_independent() {
        let comparison = Comparison::new(Algorithm::Bubble, Algorithm::Quick);

        assert_eq!(comparison.left().algorithm(), Algorithm::Bubble);
        assert_eq!(comparison.right().algorithm(), Algorithm::Quick);
        assert_eq!(comparison.left().trace().initial().len(), COMPARISON_SAMPLE);
        assert_eq!(comparison.right().trace().initial().len(), COMPARISON_SAMPLE);

        // Far past either trace's end, both sides hold their sorted state.
        let (left, right) = comparison.frames(10_000);
        assert_eq!(left, comparison.left().trace().sorted());
        assert_eq!(right, comparison.right().trace().sorted());
    }

    #[test]
    pub fn test_comparison_stopwatch_runs_both_sides() {
        let comparison = Comparison::new(Algorithm::Insertion, Algorithm::Merge);
        let (left, right) = comparison.stopwatch();

        assert!(left > std::time::Duration::ZERO);
        assert!(right > std::time::Duration::ZERO);
    }

    #[test]
    pub fn test_bar_series_positions_start_at_one() {
        let panel = Panel::new(Algorithm::Insertion, vec![3, 1, 2]);
        let (positions, values) = panel.bar_series(0);

        assert_eq!(positions, vec![1, 2, 3]);
        assert_eq!(values, [3, 1, 2]);
    }

    #[test]
    pub fn test_panel_reports_when_finished() {
        let panel = Panel::new(Algorithm::Bubble, vec![2, 1]);

        assert!(!panel.is_finished(0));
        assert!(panel.is_finished(1));
        assert!(panel.is_finished(500));
    }
}
