use strum::IntoEnumIterator;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::domain::{
    chart::{Chart, Color},
    complexity::CostSeriesKind,
    errors::{ChartError, RenderResult},
    logging::{LogComponent, get_logger},
};
use crate::log_warn;

const BACKGROUND: &str = "#1a1a2e";
const GRID: &str = "#3a3a55";
const AXIS_TEXT: &str = "#aaaaaa";
const X_AXIS_LABEL: &str = "Number of Elements (n)";
const Y_AXIS_LABEL: &str = "Operations";

/// Precomputed pixel path for one growth curve.
#[derive(Debug, Clone)]
struct SeriesPath {
    label: String,
    color: String,
    points: Vec<(f64, f64)>,
}

/// Canvas 2D renderer for the complexity chart - Infrastructure implementation
pub struct CanvasRenderer {
    canvas_id: String,
    width: u32,
    height: u32,
}

impl CanvasRenderer {
    pub fn new(canvas_id: String, width: u32, height: u32) -> Self {
        Self { canvas_id, width, height }
    }

    /// Get canvas element and context
    fn get_canvas_context(&self) -> RenderResult<CanvasRenderingContext2d> {
        let canvas = gloo::utils::document()
            .get_element_by_id(&self.canvas_id)
            .ok_or_else(|| {
                ChartError::CanvasAccess(format!("canvas #{} not found", self.canvas_id))
            })?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| {
                ChartError::CanvasAccess(format!("element #{} is not a canvas", self.canvas_id))
            })?;

        canvas.set_width(self.width);
        canvas.set_height(self.height);

        canvas
            .get_context("2d")
            .map_err(|_| ChartError::CanvasAccess("failed to get 2D context".to_string()))?
            .ok_or_else(|| ChartError::CanvasAccess("2D context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ChartError::CanvasAccess("failed to cast to 2D context".to_string()))
    }

    /// Render the chart: grid, axes, both cost curves and the legend.
    pub fn render_chart(&self, chart: &Chart) -> RenderResult<()> {
        let context = self.get_canvas_context()?;

        context.clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
        context.set_fill_style(&JsValue::from(BACKGROUND));
        context.fill_rect(0.0, 0.0, self.width as f64, self.height as f64);

        self.render_grid(&context, chart)?;
        self.render_axes(&context, chart)?;

        if chart.has_data() {
            for path in self.compute_series_paths(chart) {
                self.render_series(&context, &path)?;
            }
            self.render_legend(&context)?;

            get_logger().debug(
                LogComponent::Infrastructure("CanvasRenderer"),
                &format!("Rendered {} points", chart.point_count()),
            );
        } else {
            self.render_placeholder(&context)?;
        }

        Ok(())
    }

    /// One pixel path per growth curve, in chart order.
    fn compute_series_paths(&self, chart: &Chart) -> Vec<SeriesPath> {
        CostSeriesKind::iter()
            .map(|kind| {
                let points = chart
                    .series
                    .points()
                    .iter()
                    .map(|p| {
                        let cost = match kind {
                            CostSeriesKind::Sorting => p.sorting_cost,
                            CostSeriesKind::PriorityQueue => p.priority_queue_cost,
                        };
                        (chart.viewport.n_to_x(p.n.as_f64()), chart.viewport.cost_to_y(cost.value()))
                    })
                    .collect();

                SeriesPath {
                    label: kind.to_string(),
                    color: Color::from_hex(kind.color_hex()).to_css(),
                    points,
                }
            })
            .collect()
    }

    fn render_series(&self, context: &CanvasRenderingContext2d, path: &SeriesPath) -> RenderResult<()> {
        let Some(first) = path.points.first() else {
            return Ok(());
        };

        context.set_stroke_style(&JsValue::from(&path.color));
        context.set_line_width(2.0);
        context.begin_path();
        context.move_to(first.0, first.1);
        for (x, y) in path.points.iter().skip(1) {
            context.line_to(*x, *y);
        }
        context.stroke();

        // Mark the leading edge of the animation.
        if let Some((x, y)) = path.points.last() {
            context.set_fill_style(&JsValue::from(&path.color));
            context.begin_path();
            context
                .arc(*x, *y, 3.0, 0.0, std::f64::consts::TAU)
                .map_err(|_| ChartError::Rendering(format!("arc failed for {}", path.label)))?;
            context.fill();
        }

        Ok(())
    }

    /// Dashed background grid: a vertical line every 5 elements, five
    /// horizontal cost divisions.
    fn render_grid(&self, context: &CanvasRenderingContext2d, chart: &Chart) -> RenderResult<()> {
        let vp = &chart.viewport;
        let dash = js_sys::Array::of2(&JsValue::from_f64(3.0), &JsValue::from_f64(3.0));
        context
            .set_line_dash(dash.as_ref())
            .map_err(|_| ChartError::Rendering("set_line_dash failed".to_string()))?;
        context.set_stroke_style(&JsValue::from(GRID));
        context.set_line_width(1.0);

        let mut n = 5.0;
        while n <= vp.max_n {
            let x = vp.n_to_x(n);
            context.begin_path();
            context.move_to(x, vp.padding);
            context.line_to(x, vp.padding + vp.plot_height());
            context.stroke();
            n += 5.0;
        }

        for step in 1..=5 {
            let y = vp.cost_to_y(vp.max_cost * step as f64 / 5.0);
            context.begin_path();
            context.move_to(vp.padding, y);
            context.line_to(vp.padding + vp.plot_width(), y);
            context.stroke();
        }

        let empty = js_sys::Array::new();
        context
            .set_line_dash(empty.as_ref())
            .map_err(|_| ChartError::Rendering("set_line_dash failed".to_string()))?;

        Ok(())
    }

    fn render_axes(&self, context: &CanvasRenderingContext2d, chart: &Chart) -> RenderResult<()> {
        let vp = &chart.viewport;

        context.set_stroke_style(&JsValue::from(AXIS_TEXT));
        context.set_line_width(1.0);
        context.begin_path();
        context.move_to(vp.padding, vp.padding);
        context.line_to(vp.padding, vp.padding + vp.plot_height());
        context.line_to(vp.padding + vp.plot_width(), vp.padding + vp.plot_height());
        context.stroke();

        context.set_fill_style(&JsValue::from(AXIS_TEXT));
        context.set_font("12px Arial");

        // X ticks every 10 elements.
        let mut n = 10.0;
        while n <= vp.max_n {
            context
                .fill_text(&format!("{}", n as u32), vp.n_to_x(n) - 8.0, vp.padding + vp.plot_height() + 18.0)
                .map_err(|_| ChartError::Rendering("x tick label failed".to_string()))?;
            n += 10.0;
        }

        // Y ticks on the five grid divisions.
        for step in 1..=5 {
            let cost = vp.max_cost * step as f64 / 5.0;
            context
                .fill_text(&format!("{:.0}", cost), 12.0, vp.cost_to_y(cost) + 4.0)
                .map_err(|_| ChartError::Rendering("y tick label failed".to_string()))?;
        }

        context.set_font("14px Arial");
        context
            .fill_text(
                X_AXIS_LABEL,
                vp.padding + vp.plot_width() / 2.0 - 80.0,
                self.height as f64 - 10.0,
            )
            .map_err(|_| ChartError::Rendering("x axis label failed".to_string()))?;

        context.save();
        context
            .translate(14.0, self.height as f64 / 2.0 + 35.0)
            .map_err(|_| ChartError::Rendering("translate failed".to_string()))?;
        context
            .rotate(-std::f64::consts::FRAC_PI_2)
            .map_err(|_| ChartError::Rendering("rotate failed".to_string()))?;
        context
            .fill_text(Y_AXIS_LABEL, 0.0, 0.0)
            .map_err(|_| ChartError::Rendering("y axis label failed".to_string()))?;
        context.restore();

        Ok(())
    }

    fn render_legend(&self, context: &CanvasRenderingContext2d) -> RenderResult<()> {
        let mut y = 24.0;
        context.set_font("13px Arial");

        for kind in CostSeriesKind::iter() {
            let color = Color::from_hex(kind.color_hex()).to_css();
            context.set_stroke_style(&JsValue::from(&color));
            context.set_line_width(2.0);
            context.begin_path();
            context.move_to(self.width as f64 - 220.0, y - 4.0);
            context.line_to(self.width as f64 - 195.0, y - 4.0);
            context.stroke();

            context.set_fill_style(&JsValue::from(&color));
            context
                .fill_text(&kind.to_string(), self.width as f64 - 188.0, y)
                .map_err(|_| ChartError::Rendering("legend label failed".to_string()))?;
            y += 18.0;
        }

        Ok(())
    }

    fn render_placeholder(&self, context: &CanvasRenderingContext2d) -> RenderResult<()> {
        log_warn!(LogComponent::Infrastructure("CanvasRenderer"), "No sample data to render yet");

        context.set_fill_style(&JsValue::from("#ffffff"));
        context.set_font("16px Arial");
        context
            .fill_text(
                "Press \"Start Visualization\" to generate the curves",
                self.width as f64 / 2.0 - 170.0,
                self.height as f64 / 2.0,
            )
            .map_err(|_| ChartError::Rendering("placeholder text failed".to_string()))?;
        Ok(())
    }
}
