use complexity_chart_wasm::domain::chart::{Chart, ChartType, Color, Viewport};
use complexity_chart_wasm::domain::complexity::{CostModel, CostSeriesKind, InputSize};
use wasm_bindgen_test::*;

#[wasm_bindgen_test(unsupported = test)]
fn data_endpoints_hit_plot_edges() {
    let mut viewport = Viewport::new(800, 500);
    viewport.fit_cost(282.19);

    assert_eq!(viewport.n_to_x(1.0), viewport.padding);
    assert_eq!(viewport.n_to_x(50.0), 800.0 - viewport.padding);
    assert_eq!(viewport.cost_to_y(0.0), 500.0 - viewport.padding);
    assert_eq!(viewport.cost_to_y(282.19), viewport.padding);
}

#[wasm_bindgen_test(unsupported = test)]
fn x_mapping_is_monotonic() {
    let viewport = Viewport::new(800, 500);
    let mut last = f64::NEG_INFINITY;
    for n in 1..=50 {
        let x = viewport.n_to_x(n as f64);
        assert!(x > last, "n_to_x not increasing at n={}", n);
        last = x;
    }
}

#[wasm_bindgen_test(unsupported = test)]
fn chart_viewport_tracks_the_tallest_curve() {
    let mut chart = Chart::new("geometry".to_string(), ChartType::Line, 800, 500);
    for n in 1..=50 {
        chart.add_point(CostModel::sample(InputSize::from(n)));
    }

    // 50 * log2(50), rounded.
    assert_eq!(chart.viewport.max_cost, 282.19);
    // The tallest point sits on the top plot edge.
    assert_eq!(chart.viewport.cost_to_y(chart.series.max_cost().value()), chart.viewport.padding);
}

#[wasm_bindgen_test(unsupported = test)]
fn series_colors_match_the_legend() {
    assert_eq!(Color::from_hex(CostSeriesKind::Sorting.color_hex()).to_css(), "#8884d8");
    assert_eq!(Color::from_hex(CostSeriesKind::PriorityQueue.color_hex()).to_css(), "#82ca9d");
}
