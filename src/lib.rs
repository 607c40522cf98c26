//! # sortrace
//!
//! sortrace generates step-by-step execution traces of classic sorting
//! algorithms and maps ticks of an external fixed-rate clock onto those
//! traces, for driving animated bar-chart visualizations.
//!
//! ## Usage
//!
//! ```
//! use sortrace::{select_frame, Algorithm, SortTrace};
//!
//! let values = vec![5, 3, 4, 1, 2];
//! let trace = values.sort_trace(Algorithm::Selection);
//!
//! // One snapshot per tick; the final frame holds once sorting completes.
//! assert_eq!(select_frame(&trace, 0).values(), [5, 3, 4, 1, 2]);
//! assert_eq!(select_frame(&trace, 100).values(), [1, 2, 3, 4, 5]);
//! ```
//!
//! Five algorithms are covered: selection, insertion, bubble, merge and
//! quick sort. Each one takes its snapshots at that algorithm's natural
//! stable states (a placement, an insertion, a pass, a merge, a partition),
//! so the animation pace reflects how the algorithm actually works.
//!
//! Traces are built eagerly up front and never mutated afterwards, which
//! makes frame selection a pure lookup that any number of concurrent views
//! can query independently.
//!
//! The `multi-threaded` feature (enabled by default) builds the five-panel
//! [`Gallery`] in parallel with rayon.

mod algorithm;
mod frame;
mod generate;
mod panel;
mod sample;
mod sort_trace;
mod sorts;
mod trace;
mod utils;


pub use algorithm::{Algorithm, Complexity, ParseAlgorithmError};
pub use frame::select_frame;
pub use generate::generate_trace;
pub use panel::{
    measure_runtime, Comparison, Gallery, Panel, COMPARISON_SAMPLE, GALLERY_SAMPLE,
};
pub use sample::sample_values;
pub use sort_trace::SortTrace;
pub use trace::{Snapshot, Trace};
