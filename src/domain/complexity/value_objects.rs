use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

/// Smallest simulated input size.
pub const MIN_INPUT_SIZE: u32 = 1;
/// Largest simulated input size; the animation stops here.
pub const MAX_INPUT_SIZE: u32 = 50;
/// Delay between animation steps.
pub const STEP_INTERVAL_MS: u64 = 100;

/// Value Object - simulated input size n
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{}", _0)]
pub struct InputSize(u32);

impl InputSize {
    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }

    /// The next input size, or `None` past the terminal value.
    pub fn next(&self) -> Option<InputSize> {
        if self.0 >= MAX_INPUT_SIZE { None } else { Some(InputSize(self.0 + 1)) }
    }

    pub fn is_terminal(&self) -> bool {
        self.0 >= MAX_INPUT_SIZE
    }
}

impl From<u32> for InputSize {
    fn from(n: u32) -> Self {
        InputSize(n)
    }
}

/// Value Object - theoretical operation count, rounded to 2 decimal places
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);

    /// Rounds half away from zero, like `toFixed(2)` for the non-negative
    /// values produced here.
    pub fn round2(raw: f64) -> Self {
        Cost((raw * 100.0).round() / 100.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Value Object - which growth curve a rendered series belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, AsRefStr)]
pub enum CostSeriesKind {
    #[display(fmt = "Sorting O(n log n)")]
    #[strum(serialize = "sorting")]
    Sorting,
    #[display(fmt = "Priority Queue O(log n)")]
    #[strum(serialize = "priority-queue")]
    PriorityQueue,
}

impl CostSeriesKind {
    /// Line color on the chart.
    pub fn color_hex(&self) -> u32 {
        match self {
            CostSeriesKind::Sorting => 0x8884d8,
            CostSeriesKind::PriorityQueue => 0x82ca9d,
        }
    }

    /// One-line explanation shown in the summary panels.
    pub fn summary(&self) -> &'static str {
        match self {
            CostSeriesKind::Sorting => "Requires resorting entire list when new tasks arrive",
            CostSeriesKind::PriorityQueue => "Only needs to rebalance heap for new insertions",
        }
    }
}
