//! Composite two-stage channel: a trapezoidal low-flow channel set into the
//! floor of a trapezoidal floodplain channel.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "type": "Floodplain",
//!   "height_m": 3.0,
//!   "mid_height_m": 1.0,
//!   "lower_width_m": 2.0,
//!   "upper_width_m": 4.0,
//!   "lower_slope": 1.0,
//!   "upper_slope": 3.0
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::{require_non_negative, require_positive, CrossSection};
use crate::errors::{GeomError, GeomResult};
use crate::equations::{
    floodplain_area, floodplain_perimeter, floodplain_top_width, floodplain_transition_width,
};

/// Two-stage channel/floodplain section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloodplainSection {
    /// Total height of the section (m)
    pub height_m: f64,
    /// Height of the floodplain floor above the channel bottom (m)
    pub mid_height_m: f64,
    /// Bed width of the low-flow channel (m)
    pub lower_width_m: f64,
    /// Floor width of the floodplain channel, spanning the low-flow channel (m)
    pub upper_width_m: f64,
    /// Inverse bank slope of the low-flow channel
    pub lower_slope: f64,
    /// Inverse bank slope of the floodplain channel
    pub upper_slope: f64,
}

impl FloodplainSection {
    pub fn new(
        height_m: f64,
        mid_height_m: f64,
        lower_width_m: f64,
        upper_width_m: f64,
        lower_slope: f64,
        upper_slope: f64,
    ) -> Self {
        Self {
            height_m,
            mid_height_m,
            lower_width_m,
            upper_width_m,
            lower_slope,
            upper_slope,
        }
    }

    /// Floodplain whose floor meets the low-flow channel's banks with no
    /// bench (`upper_width_m` equals the channel top width at `mid_height_m`).
    /// Area, perimeter and top width are all continuous for this geometry.
    pub fn flush(height_m: f64, mid_height_m: f64, lower_width_m: f64, lower_slope: f64, upper_slope: f64) -> Self {
        let upper_width_m = floodplain_transition_width(mid_height_m, lower_width_m, lower_slope);
        Self::new(height_m, mid_height_m, lower_width_m, upper_width_m, lower_slope, upper_slope)
    }

    /// Top width of the low-flow channel at the transition depth (m).
    pub fn transition_width_m(&self) -> f64 {
        floodplain_transition_width(self.mid_height_m, self.lower_width_m, self.lower_slope)
    }

    /// Total bench width wetted at the transition (m). Zero for a flush
    /// floodplain; otherwise perimeter and top width step up by this much at
    /// `mid_height_m`.
    pub fn bench_width_m(&self) -> f64 {
        self.upper_width_m - self.transition_width_m()
    }
}

impl CrossSection for FloodplainSection {
    fn max_depth_m(&self) -> f64 {
        self.height_m
    }

    fn area_m2(&self, y_m: f64) -> f64 {
        floodplain_area(
            y_m,
            self.mid_height_m,
            self.lower_width_m,
            self.upper_width_m,
            self.lower_slope,
            self.upper_slope,
        )
    }

    fn wetted_perimeter_m(&self, y_m: f64) -> f64 {
        floodplain_perimeter(
            y_m,
            self.mid_height_m,
            self.lower_width_m,
            self.upper_width_m,
            self.lower_slope,
            self.upper_slope,
        )
    }

    fn top_width_m(&self, y_m: f64) -> f64 {
        floodplain_top_width(
            y_m,
            self.mid_height_m,
            self.lower_width_m,
            self.upper_width_m,
            self.lower_slope,
            self.upper_slope,
        )
    }

    fn validate(&self) -> GeomResult<()> {
        require_positive("height_m", self.height_m)?;
        require_positive("mid_height_m", self.mid_height_m)?;
        if self.mid_height_m >= self.height_m {
            return Err(GeomError::invalid_input(
                "mid_height_m",
                self.mid_height_m.to_string(),
                format!("Floodplain must start below the section height of {} m", self.height_m),
            ));
        }
        require_non_negative("lower_width_m", self.lower_width_m)?;
        require_non_negative("lower_slope", self.lower_slope)?;
        require_non_negative("upper_slope", self.upper_slope)?;
        require_non_negative("upper_width_m", self.upper_width_m)?;
        if self.lower_width_m == 0.0 && self.lower_slope == 0.0 {
            return Err(GeomError::invalid_input(
                "lower_width_m",
                "0",
                "Lower channel bed width and side slope cannot both be zero",
            ));
        }
        // Tolerance so that a flush floodplain computed in floating point passes
        let b_mid = self.transition_width_m();
        if self.upper_width_m < b_mid - 1e-9 * b_mid.max(1.0) {
            return Err(GeomError::invalid_input(
                "upper_width_m",
                self.upper_width_m.to_string(),
                format!("Floodplain floor narrower than the channel top width of {} m", b_mid),
            ));
        }
        Ok(())
    }
}
