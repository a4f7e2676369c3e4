use super::entities::SamplePoint;
use super::value_objects::{Cost, InputSize, MAX_INPUT_SIZE, MIN_INPUT_SIZE};

/// Domain service - closed-form cost formulas for the two strategies.
///
/// The values are theoretical operation counts, not measurements: a sorted
/// list pays n·log₂n per insertion batch, a binary heap pays log₂n.
pub struct CostModel;

impl CostModel {
    /// round2(n · log₂ n); 0.00 at n = 1 since log₂(1) = 0.
    pub fn sorting_cost(n: InputSize) -> Cost {
        Cost::round2(n.as_f64() * n.as_f64().log2())
    }

    /// round2(log₂ n)
    pub fn priority_queue_cost(n: InputSize) -> Cost {
        Cost::round2(n.as_f64().log2())
    }

    /// Both curves evaluated at one input size.
    pub fn sample(n: InputSize) -> SamplePoint {
        SamplePoint::new(n, Self::sorting_cost(n), Self::priority_queue_cost(n))
    }

    /// The whole n = 1..=50 run in one shot, for hosts that want the final
    /// chart without the animation.
    pub fn full_run() -> Vec<SamplePoint> {
        (MIN_INPUT_SIZE..=MAX_INPUT_SIZE).map(|n| Self::sample(InputSize::from(n))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn costs_at_one_are_zero() {
        let p = CostModel::sample(InputSize::from(1));
        assert_eq!(p.sorting_cost, Cost::ZERO);
        assert_eq!(p.priority_queue_cost, Cost::ZERO);
    }

    #[test]
    fn costs_at_powers_of_two() {
        let p4 = CostModel::sample(InputSize::from(4));
        assert_eq!(p4.sorting_cost.value(), 8.0);
        assert_eq!(p4.priority_queue_cost.value(), 2.0);

        let p8 = CostModel::sample(InputSize::from(8));
        assert_eq!(p8.sorting_cost.value(), 24.0);
        assert_eq!(p8.priority_queue_cost.value(), 3.0);
    }

    #[test]
    fn full_run_covers_range_in_order() {
        let run = CostModel::full_run();
        assert_eq!(run.len(), 50);
        for (i, p) in run.iter().enumerate() {
            assert_eq!(p.n.value(), i as u32 + 1);
        }
    }

    #[test]
    fn sorting_curve_dominates_queue_curve() {
        for p in CostModel::full_run().iter().skip(1) {
            assert!(p.sorting_cost > p.priority_queue_cost, "n = {}", p.n);
        }
    }
}
