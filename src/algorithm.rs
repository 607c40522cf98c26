use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The closed set of sorting algorithms a trace can be generated for.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Algorithm {
    Selection,
    Insertion,
    Bubble,
    Merge,
    Quick,
}

impl Algorithm {
    /// All algorithms, in display order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Bubble,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    /// Human-readable label, as shown in a selection dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
        }
    }

    /// Short machine key, as used for dropdown values.
    pub fn key(&self) -> &'static str {
        match self {
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Bubble => "bubble",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
        }
    }

    /// Average-case complexity class. This is the hardcoded textbook
    /// characterization for the theoretical-curve display, not a measurement.
    /// Quick sort reports its average case; the O(n^2) worst case is not
    /// represented.
    pub fn complexity(&self) -> Complexity {
        match self {
            Algorithm::Selection | Algorithm::Insertion | Algorithm::Bubble => {
                Complexity::Quadratic
            }
            Algorithm::Merge | Algorithm::Quick => Complexity::Linearithmic,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A selector string outside the closed set of five algorithms is a contract
/// violation on the caller's side, reported rather than swallowed.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("unknown sorting algorithm: {0:?}")]
pub struct ParseAlgorithmError(String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "selection" | "Selection Sort" => Ok(Algorithm::Selection),
            "insertion" | "Insertion Sort" => Ok(Algorithm::Insertion),
            "bubble" | "Bubble Sort" => Ok(Algorithm::Bubble),
            "merge" | "Merge Sort" => Ok(Algorithm::Merge),
            "quick" | "Quick Sort" => Ok(Algorithm::Quick),
            other => Err(ParseAlgorithmError(other.to_owned())),
        }
    }
}

/// Theoretical time-complexity class of an algorithm's average case.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Complexity {
    Quadratic,
    Linearithmic,
}

impl Complexity {
    pub fn label(&self) -> &'static str {
        match self {
            Complexity::Quadratic => "O(n^2)",
            Complexity::Linearithmic => "O(n log n)",
        }
    }

    /// Operation-count estimate for an input of size `n`.
    #[inline]
    pub fn cost(&self, n: f64) -> f64 {
        match self {
            Complexity::Quadratic => n * n,
            Complexity::Linearithmic => n * n.ln(),
        }
    }

    /// Sample the curve at n = 1..=max_n, as an (x, y) vector pair for the
    /// line-chart collaborator.
    pub fn curve(&self, max_n: u32) -> (Vec<f64>, Vec<f64>) {
        let mut x = Vec::with_capacity(max_n as usize);
        let mut y = Vec::with_capacity(max_n as usize);

        for n in 1..=max_n {
            x.push(n as f64);
            y.push(self.cost(n as f64));
        }

        (x, y)
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
