use complexity_chart_wasm::domain::animation::AnimationSequencer;
use complexity_chart_wasm::domain::chart::{Chart, ChartType, Viewport};
use wasm_bindgen_test::*;

fn drained_chart() -> Chart {
    let mut chart = Chart::new("restart-test".to_string(), ChartType::Line, 800, 500);
    let mut sequencer = AnimationSequencer::new();
    sequencer.start();
    while let Some(point) = sequencer.advance() {
        chart.add_point(point);
    }
    chart
}

#[wasm_bindgen_test(unsupported = test)]
fn restart_clears_prior_output() {
    let mut chart = drained_chart();
    assert_eq!(chart.point_count(), 50);

    chart.clear();
    assert!(!chart.has_data());
    assert_eq!(chart.viewport, Viewport::new(800, 500));
}

#[wasm_bindgen_test(unsupported = test)]
fn rerun_after_clear_rebuilds_the_same_sequence() {
    let first = drained_chart();
    let mut chart = drained_chart();
    chart.clear();

    let mut sequencer = AnimationSequencer::new();
    sequencer.start();
    while let Some(point) = sequencer.advance() {
        chart.add_point(point);
    }

    assert_eq!(chart.point_count(), 50);
    assert_eq!(chart.series.points(), first.series.points());
}
