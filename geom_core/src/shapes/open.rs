//! Open channels: rectangular, triangular, trapezoidal, parabolic and wide.

use serde::{Deserialize, Serialize};

use super::{require_non_negative, require_positive, CrossSection};
use crate::errors::{GeomError, GeomResult};
use crate::equations::{
    parabolic_area, parabolic_perimeter, parabolic_top_width, rect_open_top_width, rectangular_area,
    rectangular_perimeter, trapezoidal_area, trapezoidal_perimeter, trapezoidal_top_width, triangular_area,
    triangular_perimeter, triangular_top_width, wide_perimeter,
};

/// Open rectangular channel.
///
/// ## JSON Example
///
/// ```json
/// { "type": "RectOpen", "height_m": 2.0, "width_m": 1.5 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectOpenSection {
    /// Bank height (m)
    pub height_m: f64,
    /// Channel width (m)
    pub width_m: f64,
}

impl RectOpenSection {
    pub fn new(height_m: f64, width_m: f64) -> Self {
        Self { height_m, width_m }
    }
}

impl CrossSection for RectOpenSection {
    fn max_depth_m(&self) -> f64 {
        self.height_m
    }

    fn area_m2(&self, y_m: f64) -> f64 {
        rectangular_area(y_m, self.width_m)
    }

    fn wetted_perimeter_m(&self, y_m: f64) -> f64 {
        rectangular_perimeter(y_m, self.width_m)
    }

    fn top_width_m(&self, _y_m: f64) -> f64 {
        rect_open_top_width(self.width_m)
    }

    fn validate(&self) -> GeomResult<()> {
        require_positive("height_m", self.height_m)?;
        require_positive("width_m", self.width_m)
    }
}

/// V-shaped channel with equal bank slopes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangularSection {
    /// Bank height (m)
    pub height_m: f64,
    /// Inverse bank slope, run/rise
    pub side_slope: f64,
}

impl TriangularSection {
    pub fn new(height_m: f64, side_slope: f64) -> Self {
        Self { height_m, side_slope }
    }
}

impl CrossSection for TriangularSection {
    fn max_depth_m(&self) -> f64 {
        self.height_m
    }

    fn area_m2(&self, y_m: f64) -> f64 {
        triangular_area(y_m, self.side_slope)
    }

    fn wetted_perimeter_m(&self, y_m: f64) -> f64 {
        triangular_perimeter(y_m, self.side_slope)
    }

    fn top_width_m(&self, y_m: f64) -> f64 {
        triangular_top_width(y_m, self.height_m, self.side_slope)
    }

    fn validate(&self) -> GeomResult<()> {
        require_positive("height_m", self.height_m)?;
        require_positive("side_slope", self.side_slope)
    }
}

/// Trapezoidal channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrapezoidalSection {
    /// Bank height (m)
    pub height_m: f64,
    /// Bed width (m)
    pub bottom_width_m: f64,
    /// Inverse bank slope, run/rise
    pub side_slope: f64,
}

impl TrapezoidalSection {
    pub fn new(height_m: f64, bottom_width_m: f64, side_slope: f64) -> Self {
        Self {
            height_m,
            bottom_width_m,
            side_slope,
        }
    }
}

impl CrossSection for TrapezoidalSection {
    fn max_depth_m(&self) -> f64 {
        self.height_m
    }

    fn area_m2(&self, y_m: f64) -> f64 {
        trapezoidal_area(y_m, self.bottom_width_m, self.side_slope)
    }

    fn wetted_perimeter_m(&self, y_m: f64) -> f64 {
        trapezoidal_perimeter(y_m, self.bottom_width_m, self.side_slope)
    }

    fn top_width_m(&self, y_m: f64) -> f64 {
        trapezoidal_top_width(y_m, self.height_m, self.bottom_width_m, self.side_slope)
    }

    fn validate(&self) -> GeomResult<()> {
        require_positive("height_m", self.height_m)?;
        require_non_negative("bottom_width_m", self.bottom_width_m)?;
        require_non_negative("side_slope", self.side_slope)?;
        if self.bottom_width_m == 0.0 && self.side_slope == 0.0 {
            return Err(GeomError::invalid_input(
                "bottom_width_m",
                "0",
                "Bed width and side slope cannot both be zero",
            ));
        }
        Ok(())
    }
}

/// Parabolic channel, `width_m` wide at `height_m`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParabolicSection {
    /// Bank height (m)
    pub height_m: f64,
    /// Top width at bank height (m)
    pub width_m: f64,
}

impl ParabolicSection {
    pub fn new(height_m: f64, width_m: f64) -> Self {
        Self { height_m, width_m }
    }
}

impl CrossSection for ParabolicSection {
    fn max_depth_m(&self) -> f64 {
        self.height_m
    }

    fn area_m2(&self, y_m: f64) -> f64 {
        parabolic_area(y_m, self.width_m)
    }

    fn wetted_perimeter_m(&self, y_m: f64) -> f64 {
        parabolic_perimeter(y_m, self.width_m)
    }

    fn top_width_m(&self, y_m: f64) -> f64 {
        parabolic_top_width(y_m, self.height_m, self.width_m)
    }

    fn validate(&self) -> GeomResult<()> {
        require_positive("height_m", self.height_m)?;
        require_positive("width_m", self.width_m)
    }
}

/// Wide rectangular channel; the wetted perimeter is the bed width alone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WideSection {
    /// Bank height (m)
    pub height_m: f64,
    /// Channel width (m)
    pub width_m: f64,
}

impl WideSection {
    pub fn new(height_m: f64, width_m: f64) -> Self {
        Self { height_m, width_m }
    }
}

impl CrossSection for WideSection {
    fn max_depth_m(&self) -> f64 {
        self.height_m
    }

    fn area_m2(&self, y_m: f64) -> f64 {
        rectangular_area(y_m, self.width_m)
    }

    fn wetted_perimeter_m(&self, _y_m: f64) -> f64 {
        wide_perimeter(self.width_m)
    }

    fn top_width_m(&self, _y_m: f64) -> f64 {
        self.width_m
    }

    fn validate(&self) -> GeomResult<()> {
        require_positive("height_m", self.height_m)?;
        require_positive("width_m", self.width_m)
    }
}
