use super::value_objects::{ChartType, Viewport};
use crate::domain::complexity::{SamplePoint, SampleSeries};

/// Domain entity - the complexity chart
#[derive(Debug, Clone)]
pub struct Chart {
    pub id: String,
    pub chart_type: ChartType,
    pub series: SampleSeries,
    pub viewport: Viewport,
}

impl Chart {
    pub fn new(id: String, chart_type: ChartType, width: u32, height: u32) -> Self {
        Self { id, chart_type, series: SampleSeries::new(), viewport: Viewport::new(width, height) }
    }

    /// Append one sampled point and stretch the cost axis to keep it inside
    /// the plot.
    pub fn add_point(&mut self, point: SamplePoint) {
        self.series.add_point(point);
        self.viewport.fit_cost(self.series.max_cost().value());
    }

    pub fn has_data(&self) -> bool {
        !self.series.is_empty()
    }

    pub fn point_count(&self) -> usize {
        self.series.count()
    }

    /// Reset for a fresh run: points gone, cost axis back to its floor.
    pub fn clear(&mut self) {
        self.series.clear();
        self.viewport = Viewport::new(self.viewport.width, self.viewport.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::complexity::{CostModel, InputSize};

    fn chart() -> Chart {
        Chart::new("test-chart".to_string(), ChartType::Line, 800, 500)
    }

    #[test]
    fn adding_points_grows_viewport() {
        let mut chart = chart();
        assert!(!chart.has_data());

        chart.add_point(CostModel::sample(InputSize::from(8)));
        assert!(chart.has_data());
        assert_eq!(chart.point_count(), 1);
        assert_eq!(chart.viewport.max_cost, 24.0);
    }

    #[test]
    fn clear_resets_series_and_axis() {
        let mut chart = chart();
        chart.add_point(CostModel::sample(InputSize::from(50)));
        chart.clear();
        assert!(!chart.has_data());
        assert_eq!(chart.viewport, Viewport::new(800, 500));
    }
}
