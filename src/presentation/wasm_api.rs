use std::time::Duration;

use gloo_timers::future::sleep;
use js_sys::Promise;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::domain::{
    animation::AnimationSequencer,
    chart::{Chart, ChartType},
    complexity::{CostModel, STEP_INTERVAL_MS},
    logging::{LogComponent, get_logger},
};
use crate::infrastructure::rendering::CanvasRenderer;

/// WASM API for hosts that drive the chart from JavaScript instead of the
/// Leptos app. Minimal logic - a bridge to the domain and rendering layers.
#[wasm_bindgen]
pub struct ComplexityChartApi {
    canvas_id: String,
    width: u32,
    height: u32,
}

#[wasm_bindgen]
impl ComplexityChartApi {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: String) -> Self {
        Self { canvas_id, width: 800, height: 500 }
    }

    #[wasm_bindgen(js_name = setDimensions)]
    pub fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// The full 50-point series as JSON, for hosts with their own renderer.
    #[wasm_bindgen(js_name = computeSeries)]
    pub fn compute_series(&self) -> Result<String, JsValue> {
        serde_json::to_string(&CostModel::full_run())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Draw the completed chart in one shot, skipping the animation.
    #[wasm_bindgen(js_name = renderFinalChart)]
    pub fn render_final_chart(&self) -> Result<(), JsValue> {
        let mut chart = self.new_chart();
        for point in CostModel::full_run() {
            chart.add_point(point);
        }
        self.renderer().render_chart(&chart).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Animated run drawing directly onto the canvas, one point per ~100 ms.
    /// Resolves with the point count once the terminal input size is reached.
    #[wasm_bindgen(js_name = startAnimation)]
    pub fn start_animation(&self) -> Promise {
        let renderer = self.renderer();
        let mut chart = self.new_chart();

        future_to_promise(async move {
            get_logger().info(
                LogComponent::Presentation("WasmApi"),
                "🎬 Starting standalone animation run",
            );

            let mut sequencer = AnimationSequencer::new();
            sequencer.start();

            loop {
                sleep(Duration::from_millis(STEP_INTERVAL_MS)).await;
                match sequencer.advance() {
                    Some(point) => {
                        chart.add_point(point);
                        renderer
                            .render_chart(&chart)
                            .map_err(|e| JsValue::from_str(&e.to_string()))?;
                    }
                    None => break,
                }
            }

            Ok(JsValue::from_f64(chart.point_count() as f64))
        })
    }

    fn new_chart(&self) -> Chart {
        Chart::new(format!("{}-chart", self.canvas_id), ChartType::Line, self.width, self.height)
    }

    fn renderer(&self) -> CanvasRenderer {
        CanvasRenderer::new(self.canvas_id.clone(), self.width, self.height)
    }
}
