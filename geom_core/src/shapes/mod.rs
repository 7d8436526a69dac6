//! # Cross-Section Shapes
//!
//! Strongly-typed shape records and the [`CrossSection`] capability trait.
//! Every record implements the same four operations on a reduced depth:
//! area, wetted perimeter, top width and (shared) hydraulic radius.
//!
//! ## Shape Types
//!
//! - **Closed conduits**: [`CircularSection`], [`RectClosedSection`],
//!   [`EllipticalSection`], [`ForceMainSection`]
//! - **Open channels**: [`RectOpenSection`], [`TriangularSection`],
//!   [`TrapezoidalSection`], [`ParabolicSection`], [`WideSection`]
//! - **Composite**: [`FloodplainSection`]
//!
//! ## Example
//!
//! ```rust
//! use geom_core::depth::DepthPair;
//! use geom_core::shapes::{CircularSection, CrossSection, Shape};
//!
//! let pipe = Shape::Circular(CircularSection::new(1.0, 0.001));
//!
//! // Half full: junction depths 0.4 m and 0.6 m
//! let state = pipe.evaluate(DepthPair::new(0.4, 0.6));
//! assert!((state.hydraulic_radius_m - 0.25).abs() < 1e-12);
//! assert!((state.top_width_m - 1.0).abs() < 1e-12);
//! ```

pub mod closed;
pub mod floodplain;
pub mod open;
pub mod parameters;

pub use closed::{CircularSection, EllipticalSection, ForceMainSection, RectClosedSection};
pub use floodplain::FloodplainSection;
pub use open::{ParabolicSection, RectOpenSection, TrapezoidalSection, TriangularSection, WideSection};
pub use parameters::ShapeParameters;

use serde::{Deserialize, Serialize};

use crate::depth::DepthPair;
use crate::equations::hydraulic_radius;
use crate::errors::{GeomError, GeomResult};
use crate::registry::GeometryKind;

// ============================================================================
// Cross-Section State
// ============================================================================

/// The four derived quantities for one link at one solver iteration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CrossSectionState {
    /// Flow area A (m²)
    pub area_m2: f64,
    /// Wetted perimeter Pe (m)
    pub perimeter_m: f64,
    /// Hydraulic radius R = A/Pe (m)
    pub hydraulic_radius_m: f64,
    /// Free-surface top width B (m)
    pub top_width_m: f64,
}

impl CrossSectionState {
    /// Build a state from area, perimeter and top width, applying the shared
    /// hydraulic radius rule.
    pub fn from_geometry(area_m2: f64, perimeter_m: f64, top_width_m: f64) -> Self {
        Self {
            area_m2,
            perimeter_m,
            hydraulic_radius_m: hydraulic_radius(area_m2, perimeter_m),
            top_width_m,
        }
    }

    /// `(A, Pe, R, B)` in that order.
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.area_m2, self.perimeter_m, self.hydraulic_radius_m, self.top_width_m)
    }

    /// All four values finite and non-negative.
    pub fn is_physical(&self) -> bool {
        [self.area_m2, self.perimeter_m, self.hydraulic_radius_m, self.top_width_m]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

// ============================================================================
// Capability Trait
// ============================================================================

/// Geometry of one cross-section shape.
///
/// `area_m2`, `wetted_perimeter_m` and `top_width_m` take the *reduced* depth
/// `y` (already clamped to `[0, max_depth_m]`); [`CrossSection::evaluate`]
/// performs the reduction from the two junction depths.
pub trait CrossSection {
    /// Full depth `y_max` used to clamp the reduced depth (m).
    fn max_depth_m(&self) -> f64;

    /// Flow area at reduced depth `y_m` (m²).
    fn area_m2(&self, y_m: f64) -> f64;

    /// Wetted perimeter at reduced depth `y_m` (m).
    fn wetted_perimeter_m(&self, y_m: f64) -> f64;

    /// Free-surface top width at reduced depth `y_m` (m).
    fn top_width_m(&self, y_m: f64) -> f64;

    /// Check the shape's dimensions. Called when a network is configured,
    /// never during evaluation.
    fn validate(&self) -> GeomResult<()>;

    /// Representative depth for the link.
    fn reduce_depth(&self, depths: DepthPair) -> f64 {
        depths.reduce(self.max_depth_m())
    }

    /// Hydraulic radius from area and perimeter. Shared by every shape.
    fn hydraulic_radius_m(&self, area_m2: f64, perimeter_m: f64) -> f64 {
        hydraulic_radius(area_m2, perimeter_m)
    }

    /// Evaluate A, Pe, R and B for a pair of junction depths.
    fn evaluate(&self, depths: DepthPair) -> CrossSectionState {
        let y = self.reduce_depth(depths);
        let area = self.area_m2(y);
        let perimeter = self.wetted_perimeter_m(y);
        CrossSectionState {
            area_m2: area,
            perimeter_m: perimeter,
            hydraulic_radius_m: self.hydraulic_radius_m(area, perimeter),
            top_width_m: self.top_width_m(y),
        }
    }
}

// ============================================================================
// Shape Enum
// ============================================================================

/// Any supported cross-section, tagged by kind.
///
/// ## JSON Serialization
///
/// Shapes serialize with a "type" discriminator and named dimensions:
///
/// ```json
/// { "type": "Trapezoidal", "height_m": 2.0, "bottom_width_m": 3.0, "side_slope": 1.5 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    Circular(CircularSection),
    RectClosed(RectClosedSection),
    RectOpen(RectOpenSection),
    Triangular(TriangularSection),
    Trapezoidal(TrapezoidalSection),
    Parabolic(ParabolicSection),
    Elliptical(EllipticalSection),
    Wide(WideSection),
    ForceMain(ForceMainSection),
    Floodplain(FloodplainSection),
}

impl Shape {
    /// The kind tag of this shape.
    pub fn kind(&self) -> GeometryKind {
        match self {
            Shape::Circular(_) => GeometryKind::Circular,
            Shape::RectClosed(_) => GeometryKind::RectClosed,
            Shape::RectOpen(_) => GeometryKind::RectOpen,
            Shape::Triangular(_) => GeometryKind::Triangular,
            Shape::Trapezoidal(_) => GeometryKind::Trapezoidal,
            Shape::Parabolic(_) => GeometryKind::Parabolic,
            Shape::Elliptical(_) => GeometryKind::Elliptical,
            Shape::Wide(_) => GeometryKind::Wide,
            Shape::ForceMain(_) => GeometryKind::ForceMain,
            Shape::Floodplain(_) => GeometryKind::Floodplain,
        }
    }

    fn as_cross_section(&self) -> &dyn CrossSection {
        match self {
            Shape::Circular(s) => s,
            Shape::RectClosed(s) => s,
            Shape::RectOpen(s) => s,
            Shape::Triangular(s) => s,
            Shape::Trapezoidal(s) => s,
            Shape::Parabolic(s) => s,
            Shape::Elliptical(s) => s,
            Shape::Wide(s) => s,
            Shape::ForceMain(s) => s,
            Shape::Floodplain(s) => s,
        }
    }

    /// Build a typed shape from a kind and legacy `g1..g6` values.
    ///
    /// Slots beyond the kind's arity are ignored.
    ///
    /// # Errors
    /// `MissingParameter` when `params` is shorter than the kind's arity.
    ///
    /// # Example
    /// ```rust
    /// use geom_core::registry::GeometryKind;
    /// use geom_core::shapes::{Shape, TriangularSection};
    ///
    /// let shape = Shape::from_parameters(GeometryKind::Triangular, &[1.0, 2.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
    /// assert_eq!(shape, Shape::Triangular(TriangularSection::new(1.0, 2.0)));
    /// ```
    pub fn from_parameters(kind: GeometryKind, params: &[f64]) -> GeomResult<Self> {
        let arity = kind.arity();
        if params.len() < arity {
            return Err(GeomError::missing_parameter(kind.display_name(), params.len() + 1));
        }
        let g = |i: usize| params[i];

        let shape = match kind {
            GeometryKind::Circular => Shape::Circular(CircularSection::new(g(0), g(1))),
            GeometryKind::RectClosed => Shape::RectClosed(RectClosedSection::new(g(0), g(1), g(2))),
            GeometryKind::RectOpen => Shape::RectOpen(RectOpenSection::new(g(0), g(1))),
            GeometryKind::Triangular => Shape::Triangular(TriangularSection::new(g(0), g(1))),
            GeometryKind::Trapezoidal => Shape::Trapezoidal(TrapezoidalSection::new(g(0), g(1), g(2))),
            GeometryKind::Parabolic => Shape::Parabolic(ParabolicSection::new(g(0), g(1))),
            GeometryKind::Elliptical => Shape::Elliptical(EllipticalSection::new(g(0), g(1))),
            GeometryKind::Wide => Shape::Wide(WideSection::new(g(0), g(1))),
            GeometryKind::ForceMain => Shape::ForceMain(ForceMainSection::new(g(0), g(1))),
            GeometryKind::Floodplain => {
                Shape::Floodplain(FloodplainSection::new(g(0), g(1), g(2), g(3), g(4), g(5)))
            }
        };
        Ok(shape)
    }

    /// Legacy six-slot representation of this shape.
    pub fn to_parameters(&self) -> ShapeParameters {
        let values: Vec<f64> = match self {
            Shape::Circular(s) => vec![s.diameter_m, s.slot_ratio],
            Shape::RectClosed(s) => vec![s.height_m, s.width_m, s.slot_ratio],
            Shape::RectOpen(s) => vec![s.height_m, s.width_m],
            Shape::Triangular(s) => vec![s.height_m, s.side_slope],
            Shape::Trapezoidal(s) => vec![s.height_m, s.bottom_width_m, s.side_slope],
            Shape::Parabolic(s) => vec![s.height_m, s.width_m],
            Shape::Elliptical(s) => vec![s.height_m, s.width_m],
            Shape::Wide(s) => vec![s.height_m, s.width_m],
            Shape::ForceMain(s) => vec![s.diameter_m, s.slot_ratio],
            Shape::Floodplain(s) => vec![
                s.height_m,
                s.mid_height_m,
                s.lower_width_m,
                s.upper_width_m,
                s.lower_slope,
                s.upper_slope,
            ],
        };
        ShapeParameters::from_slice(&values)
    }
}

impl CrossSection for Shape {
    fn max_depth_m(&self) -> f64 {
        self.as_cross_section().max_depth_m()
    }

    fn area_m2(&self, y_m: f64) -> f64 {
        self.as_cross_section().area_m2(y_m)
    }

    fn wetted_perimeter_m(&self, y_m: f64) -> f64 {
        self.as_cross_section().wetted_perimeter_m(y_m)
    }

    fn top_width_m(&self, y_m: f64) -> f64 {
        self.as_cross_section().top_width_m(y_m)
    }

    fn validate(&self) -> GeomResult<()> {
        self.as_cross_section().validate()
    }

    fn evaluate(&self, depths: DepthPair) -> CrossSectionState {
        self.as_cross_section().evaluate(depths)
    }
}

// ============================================================================
// Validation Helpers
// ============================================================================

pub(crate) fn require_positive(field: &str, value: f64) -> GeomResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeomError::invalid_input(field, value.to_string(), "Must be finite and positive"))
    }
}

pub(crate) fn require_non_negative(field: &str, value: f64) -> GeomResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GeomError::invalid_input(field, value.to_string(), "Must be finite and non-negative"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{example_parameters, ALL_KINDS};

    #[test]
    fn test_kind_matches_variant() {
        for kind in ALL_KINDS {
            let shape = Shape::from_parameters(kind, &example_parameters(kind)).unwrap();
            assert_eq!(shape.kind(), kind);
        }
    }

    #[test]
    fn test_parameters_round_trip() {
        for kind in ALL_KINDS {
            let shape = Shape::from_parameters(kind, &example_parameters(kind)).unwrap();
            let params = shape.to_parameters();
            assert_eq!(Shape::from_parameters(kind, params.as_slice()).unwrap(), shape);
        }
    }

    #[test]
    fn test_missing_parameter() {
        let err = Shape::from_parameters(GeometryKind::Trapezoidal, &[2.0, 3.0]).unwrap_err();
        assert_eq!(err, GeomError::missing_parameter("Trapezoidal", 3));
    }

    #[test]
    fn test_extra_slots_ignored() {
        let shape = Shape::from_parameters(GeometryKind::RectOpen, &[2.0, 1.5, 9.0, 9.0, 9.0, 9.0]).unwrap();
        assert_eq!(shape, Shape::RectOpen(RectOpenSection::new(2.0, 1.5)));
    }

    #[test]
    fn test_json_tagging() {
        let shape = Shape::Trapezoidal(TrapezoidalSection::new(2.0, 3.0, 1.5));
        let json = serde_json::to_value(shape).unwrap();
        assert_eq!(json["type"], "Trapezoidal");
        assert_eq!(json["bottom_width_m"], 3.0);

        let parsed: Shape = serde_json::from_str(
            r#"{ "type": "Circular", "diameter_m": 0.9, "slot_ratio": 0.001 }"#,
        )
        .unwrap();
        assert_eq!(parsed, Shape::Circular(CircularSection::new(0.9, 0.001)));
    }

    #[test]
    fn test_json_tag_matches_registry() {
        for kind in ALL_KINDS {
            let shape = Shape::from_parameters(kind, &example_parameters(kind)).unwrap();
            let json = serde_json::to_value(shape).unwrap();
            assert_eq!(json["type"], kind.type_tag());
        }
    }

    #[test]
    fn test_example_shapes_validate() {
        for kind in ALL_KINDS {
            let shape = Shape::from_parameters(kind, &example_parameters(kind)).unwrap();
            assert!(shape.validate().is_ok(), "{} example should validate", kind);
        }
    }

    #[test]
    fn test_state_is_physical() {
        let state = CrossSectionState::from_geometry(1.0, 0.0, 2.0);
        assert_eq!(state.hydraulic_radius_m, 0.0);
        assert!(state.is_physical());
        assert!(!CrossSectionState::from_geometry(f64::NAN, 1.0, 1.0).is_physical());
        assert_eq!(state.as_tuple(), (1.0, 0.0, 0.0, 2.0));
    }
}
