pub use super::value_objects::{Cost, InputSize, MAX_INPUT_SIZE, MIN_INPUT_SIZE};
use serde::{Deserialize, Serialize};

/// Domain entity - one sampled point of the two growth curves
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub n: InputSize,
    pub sorting_cost: Cost,
    pub priority_queue_cost: Cost,
}

impl SamplePoint {
    pub fn new(n: InputSize, sorting_cost: Cost, priority_queue_cost: Cost) -> Self {
        Self { n, sorting_cost, priority_queue_cost }
    }

    /// The larger of the two costs, used for axis scaling.
    pub fn max_cost(&self) -> Cost {
        if self.sorting_cost >= self.priority_queue_cost {
            self.sorting_cost
        } else {
            self.priority_queue_cost
        }
    }
}

/// Domain entity - the ordered sequence of points produced by one run
#[derive(Debug, Clone, Default)]
pub struct SampleSeries {
    points: Vec<SamplePoint>,
}

impl SampleSeries {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Append a point. The generator only produces strictly increasing n,
    /// but a replayed n replaces the existing point and a stale n is dropped
    /// so the sequence stays ordered no matter what.
    pub fn add_point(&mut self, point: SamplePoint) {
        if let Some(last) = self.points.last_mut() {
            if last.n == point.n {
                *last = point;
                return;
            }
            if point.n < last.n {
                return;
            }
        }
        self.points.push(point);
    }

    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn latest(&self) -> Option<&SamplePoint> {
        self.points.last()
    }

    pub fn count(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True once the full n = 1..=50 run has been accumulated.
    pub fn is_complete(&self) -> bool {
        self.points.len() == (MAX_INPUT_SIZE - MIN_INPUT_SIZE + 1) as usize
            && self.latest().is_some_and(|p| p.n.is_terminal())
    }

    /// Largest cost seen so far, zero for an empty series.
    pub fn max_cost(&self) -> Cost {
        self.points.iter().map(|p| p.max_cost()).fold(Cost::ZERO, |a, b| if b > a { b } else { a })
    }

    /// Drop all points; the series is rebuilt on every restart.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::complexity::CostModel;

    #[test]
    fn replayed_n_replaces_stale_n_is_dropped() {
        let mut series = SampleSeries::new();
        series.add_point(CostModel::sample(InputSize::from(1)));
        series.add_point(CostModel::sample(InputSize::from(2)));
        series.add_point(CostModel::sample(InputSize::from(2)));
        assert_eq!(series.count(), 2);

        series.add_point(CostModel::sample(InputSize::from(1)));
        assert_eq!(series.count(), 2);
        assert_eq!(series.latest().unwrap().n.value(), 2);
    }

    #[test]
    fn empty_series_reports_zero_cost() {
        let series = SampleSeries::new();
        assert!(series.is_empty());
        assert!(!series.is_complete());
        assert_eq!(series.max_cost(), Cost::ZERO);
    }

    #[test]
    fn clear_resets_for_restart() {
        let mut series = SampleSeries::new();
        for n in 1..=5 {
            series.add_point(CostModel::sample(InputSize::from(n)));
        }
        series.clear();
        assert!(series.is_empty());
        assert!(series.latest().is_none());
    }
}
