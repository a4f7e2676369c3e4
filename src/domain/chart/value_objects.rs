use derive_more::Display;
use strum::{AsRefStr, EnumIter, EnumString};

use crate::domain::complexity::MAX_INPUT_SIZE;

/// Value Object - Chart type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, AsRefStr)]
pub enum ChartType {
    #[display(fmt = "Line")]
    #[strum(serialize = "line")]
    Line,
    #[display(fmt = "Area")]
    #[strum(serialize = "area")]
    Area,
}

/// Value Object - Viewport
///
/// Maps data coordinates (input size n, operation count) into canvas pixels.
/// The plot rectangle is inset from the canvas edges to leave room for the
/// axis labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub padding: f64,
    pub max_n: f64,
    pub max_cost: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 800, height: 500, padding: 50.0, max_n: MAX_INPUT_SIZE as f64, max_cost: 1.0 }
    }
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, ..Default::default() }
    }

    pub fn plot_width(&self) -> f64 {
        self.width as f64 - self.padding * 2.0
    }

    pub fn plot_height(&self) -> f64 {
        self.height as f64 - self.padding * 2.0
    }

    /// Grow the cost axis to fit newly arrived data. It never shrinks during
    /// a run, so the curves do not jump downwards between frames.
    pub fn fit_cost(&mut self, max_cost: f64) {
        if max_cost > self.max_cost {
            self.max_cost = max_cost;
        }
    }

    /// Input size to canvas X. n = 1 lands on the left plot edge,
    /// n = max_n on the right.
    pub fn n_to_x(&self, n: f64) -> f64 {
        let span = (self.max_n - 1.0).max(1.0);
        self.padding + (n - 1.0) / span * self.plot_width()
    }

    /// Operation count to canvas Y, inverted because Y grows down.
    pub fn cost_to_y(&self, cost: f64) -> f64 {
        let normalized = (cost / self.max_cost).clamp(0.0, 1.0);
        self.padding + (1.0 - normalized) * self.plot_height()
    }
}

/// Value Object - Color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn from_hex(hex: u32) -> Self {
        Self { r: ((hex >> 16) & 0xFF) as u8, g: ((hex >> 8) & 0xFF) as u8, b: (hex & 0xFF) as u8 }
    }

    /// CSS hex string for the 2D canvas API.
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Self::from_hex(hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_map_to_plot_edges() {
        let mut vp = Viewport::new(800, 500);
        vp.fit_cost(100.0);

        assert_eq!(vp.n_to_x(1.0), vp.padding);
        assert_eq!(vp.n_to_x(50.0), 800.0 - vp.padding);
        assert_eq!(vp.cost_to_y(0.0), 500.0 - vp.padding);
        assert_eq!(vp.cost_to_y(100.0), vp.padding);
    }

    #[test]
    fn cost_axis_never_shrinks() {
        let mut vp = Viewport::default();
        vp.fit_cost(40.0);
        vp.fit_cost(10.0);
        assert_eq!(vp.max_cost, 40.0);
    }

    #[test]
    fn color_round_trips_to_css() {
        assert_eq!(Color::from_hex(0x8884d8).to_css(), "#8884d8");
        assert_eq!(Color::from(0x82ca9d).to_css(), "#82ca9d");
    }
}
