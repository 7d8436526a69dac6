//! # Geometry Registry
//!
//! Central registry of the supported cross-section kinds. Each kind has:
//!
//! - a symbolic name used in persisted network configurations (`"circular"`)
//! - a stable numeric code (1-9), except the composite floodplain shape
//! - ordered parameter descriptions for the legacy `g1..g6` slots
//!
//! ## Usage
//!
//! ```rust
//! use geom_core::registry::GeometryKind;
//!
//! let kind = GeometryKind::from_code(5).unwrap();
//! assert_eq!(kind, GeometryKind::Trapezoidal);
//! assert_eq!(kind.name(), "trapezoidal");
//!
//! let meta = kind.metadata();
//! assert_eq!(meta.parameters.len(), 3);
//! println!("g1 = {}", meta.parameters[0].description);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{GeomError, GeomResult};

// ============================================================================
// Geometry Kind
// ============================================================================

/// All supported cross-section kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeometryKind {
    /// Circular pipe with Preissman slot
    Circular,
    /// Closed rectangular box with Preissman slot
    RectClosed,
    /// Open rectangular channel
    RectOpen,
    /// V-shaped channel
    Triangular,
    /// Trapezoidal channel
    Trapezoidal,
    /// Parabolic channel
    Parabolic,
    /// Elliptical conduit
    Elliptical,
    /// Laterally unbounded rectangular channel
    Wide,
    /// Always-full pressurized circular pipe
    ForceMain,
    /// Two-stage channel with floodplain
    Floodplain,
}

/// Every kind, in code order (Floodplain last).
pub const ALL_KINDS: [GeometryKind; 10] = [
    GeometryKind::Circular,
    GeometryKind::RectClosed,
    GeometryKind::RectOpen,
    GeometryKind::Triangular,
    GeometryKind::Trapezoidal,
    GeometryKind::Parabolic,
    GeometryKind::Elliptical,
    GeometryKind::Wide,
    GeometryKind::ForceMain,
    GeometryKind::Floodplain,
];

impl GeometryKind {
    /// Stable numeric code for persisted configurations.
    ///
    /// The floodplain shape has no code; configurations select it by name.
    pub fn code(&self) -> Option<u8> {
        match self {
            GeometryKind::Circular => Some(1),
            GeometryKind::RectClosed => Some(2),
            GeometryKind::RectOpen => Some(3),
            GeometryKind::Triangular => Some(4),
            GeometryKind::Trapezoidal => Some(5),
            GeometryKind::Parabolic => Some(6),
            GeometryKind::Elliptical => Some(7),
            GeometryKind::Wide => Some(8),
            GeometryKind::ForceMain => Some(9),
            GeometryKind::Floodplain => None,
        }
    }

    /// Look up a kind by numeric code.
    ///
    /// # Errors
    /// `UnknownGeometryCode` for anything outside 1-9.
    pub fn from_code(code: i64) -> GeomResult<Self> {
        ALL_KINDS
            .iter()
            .copied()
            .find(|kind| kind.code().map(i64::from) == Some(code))
            .ok_or(GeomError::UnknownGeometryCode { code })
    }

    /// Symbolic name used in configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            GeometryKind::Circular => "circular",
            GeometryKind::RectClosed => "rect_closed",
            GeometryKind::RectOpen => "rect_open",
            GeometryKind::Triangular => "triangular",
            GeometryKind::Trapezoidal => "trapezoidal",
            GeometryKind::Parabolic => "parabolic",
            GeometryKind::Elliptical => "elliptical",
            GeometryKind::Wide => "wide",
            GeometryKind::ForceMain => "force_main",
            GeometryKind::Floodplain => "floodplain",
        }
    }

    /// Look up a kind by symbolic name (case-insensitive, surrounding
    /// whitespace ignored).
    ///
    /// Both the configuration spelling (`"rect_closed"`) and the [`Shape`]
    /// tag spelling (`"RectClosed"`) are accepted.
    ///
    /// [`Shape`]: crate::shapes::Shape
    pub fn from_name(name: &str) -> GeomResult<Self> {
        let wanted = name.trim();
        ALL_KINDS
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted) || kind.type_tag().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GeomError::unknown_name(name))
    }

    /// Variant name used as the `"type"` tag of a serialized [`Shape`].
    ///
    /// [`Shape`]: crate::shapes::Shape
    pub fn type_tag(&self) -> &'static str {
        match self {
            GeometryKind::Circular => "Circular",
            GeometryKind::RectClosed => "RectClosed",
            GeometryKind::RectOpen => "RectOpen",
            GeometryKind::Triangular => "Triangular",
            GeometryKind::Trapezoidal => "Trapezoidal",
            GeometryKind::Parabolic => "Parabolic",
            GeometryKind::Elliptical => "Elliptical",
            GeometryKind::Wide => "Wide",
            GeometryKind::ForceMain => "ForceMain",
            GeometryKind::Floodplain => "Floodplain",
        }
    }

    /// Exact-match lookup of a serialized `"type"` tag.
    pub fn from_type_tag(tag: &str) -> Option<Self> {
        ALL_KINDS.iter().copied().find(|kind| kind.type_tag() == tag)
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            GeometryKind::Circular => "Circular",
            GeometryKind::RectClosed => "Closed Rectangular",
            GeometryKind::RectOpen => "Open Rectangular",
            GeometryKind::Triangular => "Triangular",
            GeometryKind::Trapezoidal => "Trapezoidal",
            GeometryKind::Parabolic => "Parabolic",
            GeometryKind::Elliptical => "Elliptical",
            GeometryKind::Wide => "Wide Rectangular",
            GeometryKind::ForceMain => "Force Main",
            GeometryKind::Floodplain => "Floodplain",
        }
    }

    /// Number of `g` slots the kind reads.
    ///
    /// Called on every legacy evaluation, so it does not go through
    /// [`GeometryKind::metadata`].
    pub fn arity(&self) -> usize {
        match self {
            GeometryKind::Circular
            | GeometryKind::RectOpen
            | GeometryKind::Triangular
            | GeometryKind::Parabolic
            | GeometryKind::Elliptical
            | GeometryKind::Wide
            | GeometryKind::ForceMain => 2,
            GeometryKind::RectClosed | GeometryKind::Trapezoidal => 3,
            GeometryKind::Floodplain => 6,
        }
    }

    /// True for closed conduits that carry a Preissman slot.
    pub fn has_slot(&self) -> bool {
        matches!(
            self,
            GeometryKind::Circular | GeometryKind::RectClosed | GeometryKind::ForceMain
        )
    }

    /// Full metadata for documentation, prompts and error messages.
    pub fn metadata(&self) -> ShapeMetadata {
        match self {
            GeometryKind::Circular => ShapeMetadata {
                kind: *self,
                description: "Part-full circular pipe; top width switches to a Preissman slot at full depth",
                parameters: vec![
                    ParameterInfo::new("d", "Diameter", "m", 1.0),
                    ParameterInfo::new("p", "Preissman slot width as a ratio of the diameter", "-", 0.001),
                ],
                area_formula: "A = r²(θ − sinθ·cosθ), r = d/2, θ = arccos(1 − y/r)",
                perimeter_formula: "Pe = 2rθ",
                top_width_formula: "B = 2r·sinθ (y < d), B = p·d (y ≥ d)",
            },
            GeometryKind::RectClosed => ShapeMetadata {
                kind: *self,
                description: "Box culvert; top width switches to a Preissman slot at full height",
                parameters: vec![
                    ParameterInfo::new("h", "Height", "m", 1.0),
                    ParameterInfo::new("b", "Width", "m", 1.0),
                    ParameterInfo::new("p", "Preissman slot width as a ratio of the width", "-", 0.001),
                ],
                area_formula: "A = y·b",
                perimeter_formula: "Pe = b + 2y",
                top_width_formula: "B = b (y < h), B = p·b (y ≥ h)",
            },
            GeometryKind::RectOpen => ShapeMetadata {
                kind: *self,
                description: "Open rectangular channel",
                parameters: vec![
                    ParameterInfo::new("h", "Height", "m", 2.0),
                    ParameterInfo::new("b", "Width", "m", 1.5),
                ],
                area_formula: "A = y·b",
                perimeter_formula: "Pe = b + 2y",
                top_width_formula: "B = b",
            },
            GeometryKind::Triangular => ShapeMetadata {
                kind: *self,
                description: "V-shaped channel",
                parameters: vec![
                    ParameterInfo::new("h", "Height", "m", 1.0),
                    ParameterInfo::new("m", "Inverse side slope (run/rise)", "-", 2.0),
                ],
                area_formula: "A = m·y²",
                perimeter_formula: "Pe = 2y·√(1 + m²)",
                top_width_formula: "B = 2m·min(y, h)",
            },
            GeometryKind::Trapezoidal => ShapeMetadata {
                kind: *self,
                description: "Trapezoidal channel",
                parameters: vec![
                    ParameterInfo::new("h", "Height", "m", 2.0),
                    ParameterInfo::new("b", "Bottom width", "m", 3.0),
                    ParameterInfo::new("m", "Inverse side slope (run/rise)", "-", 1.5),
                ],
                area_formula: "A = y(b + m·y)",
                perimeter_formula: "Pe = b + 2y·√(1 + m²)",
                top_width_formula: "B = b + 2m·min(y, h)",
            },
            GeometryKind::Parabolic => ShapeMetadata {
                kind: *self,
                description: "Parabolic channel; perimeter evaluated at machine epsilon when empty",
                parameters: vec![
                    ParameterInfo::new("h", "Height", "m", 1.0),
                    ParameterInfo::new("b", "Top width at full height", "m", 3.0),
                ],
                area_formula: "A = 2by/3",
                perimeter_formula: "Pe = (b/2)[√(1 + x²) + ln(x + √(1 + x²))/x], x = 4y/b",
                top_width_formula: "B = b·√(y/h)",
            },
            GeometryKind::Elliptical => ShapeMetadata {
                kind: *self,
                description: "Elliptical conduit; perimeter is the exact wetted arc length by quadrature",
                parameters: vec![
                    ParameterInfo::new("h", "Full height", "m", 1.0),
                    ParameterInfo::new("w", "Full width", "m", 1.5),
                ],
                area_formula: "A = ab(π/2 + θ′) + ab·cosθ′·sinθ′, a = w/2, b = h/2, θ′ = arcsin((y − b)/b)",
                perimeter_formula: "Pe = 2∫ √(a²sin²t + b²cos²t) dt over [−π/2, θ′]",
                top_width_formula: "B = 2cosθ′·√(a²cos²θ′ + b²sin²θ′)",
            },
            GeometryKind::Wide => ShapeMetadata {
                kind: *self,
                description: "Laterally unbounded channel; side walls neglected",
                parameters: vec![
                    ParameterInfo::new("h", "Height", "m", 1.0),
                    ParameterInfo::new("b", "Width", "m", 20.0),
                ],
                area_formula: "A = y·b",
                perimeter_formula: "Pe = b",
                top_width_formula: "B = b",
            },
            GeometryKind::ForceMain => ShapeMetadata {
                kind: *self,
                description: "Pressurized circular pipe, always full",
                parameters: vec![
                    ParameterInfo::new("d", "Diameter", "m", 0.5),
                    ParameterInfo::new("p", "Preissman slot width as a ratio of the diameter", "-", 0.001),
                ],
                area_formula: "A = π(d/2)²",
                perimeter_formula: "Pe = πd",
                top_width_formula: "B = p·d",
            },
            GeometryKind::Floodplain => ShapeMetadata {
                kind: *self,
                description: "Trapezoidal low-flow channel under a trapezoidal floodplain channel",
                parameters: vec![
                    ParameterInfo::new("h", "Height", "m", 3.0),
                    ParameterInfo::new("y_mid", "Height of floodplain above channel bottom", "m", 1.0),
                    ParameterInfo::new("b_l", "Bottom width of lower channel", "m", 2.0),
                    ParameterInfo::new("b_u", "Bottom width of upper channel", "m", 4.0),
                    ParameterInfo::new("m_l", "Inverse side slope of lower channel", "-", 1.0),
                    ParameterInfo::new("m_u", "Inverse side slope of upper channel", "-", 3.0),
                ],
                area_formula: "A = y_l(b_l + m_l·y_l) + y_u(b_u + m_u·y_u)",
                perimeter_formula: "Pe = b_l + 2y_l·√(1 + m_l²) + k(b_u − b_mid) + 2y_u·√(1 + m_u²)",
                top_width_formula: "B = b_l + 2m_l·y (y < y_mid), B = b_u + 2m_u·y_u (y ≥ y_mid)",
            },
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for GeometryKind {
    type Err = GeomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeometryKind::from_name(s)
    }
}

// ============================================================================
// Metadata
// ============================================================================

/// Description of one legacy parameter slot.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterInfo {
    /// Symbol (e.g., "d", "m", "y_mid")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units ("m" or "-" for ratios)
    pub units: &'static str,
    /// Representative value for prompts and examples
    pub example: f64,
}

impl ParameterInfo {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str, example: f64) -> Self {
        Self {
            symbol,
            description,
            units,
            example,
        }
    }
}

/// Metadata for one geometry kind.
#[derive(Debug, Clone)]
pub struct ShapeMetadata {
    pub kind: GeometryKind,
    /// Brief description of the shape
    pub description: &'static str,
    /// Parameters in slot order (g1, g2, ...)
    pub parameters: Vec<ParameterInfo>,
    pub area_formula: &'static str,
    pub perimeter_formula: &'static str,
    pub top_width_formula: &'static str,
}

/// Example parameter vector for a kind, in slot order.
pub fn example_parameters(kind: GeometryKind) -> Vec<f64> {
    kind.metadata().parameters.iter().map(|p| p.example).collect()
}

// ============================================================================
// Markdown Reference
// ============================================================================

/// Generate a Markdown reference of every shape, its code, parameters and
/// formulas.
pub fn generate_shapes_markdown() -> String {
    let mut md = String::new();
    md.push_str("# Cross-Section Shapes\n\n");
    md.push_str("> Generated from the geometry registry. Do not edit by hand.\n\n");
    md.push_str("All lengths in meters; slopes are horizontal run per unit rise. ");
    md.push_str("`y` is the mean of the two junction depths clamped to `[0, y_max]`. ");
    md.push_str("Hydraulic radius is `R = A/Pe` (0 when `Pe = 0`) for every shape.\n\n");

    md.push_str("| Code | Name | Kind | Parameters |\n");
    md.push_str("|------|------|------|------------|\n");
    for kind in ALL_KINDS {
        let code = kind.code().map(|c| c.to_string()).unwrap_or_else(|| "-".to_string());
        let params: Vec<&str> = kind.metadata().parameters.iter().map(|p| p.symbol).collect();
        md.push_str(&format!(
            "| {} | `{}` | {} | {} |\n",
            code,
            kind.name(),
            kind.display_name(),
            params.join(", ")
        ));
    }
    md.push('\n');

    for kind in ALL_KINDS {
        let meta = kind.metadata();
        md.push_str(&format!("## {}\n\n", kind.display_name()));
        md.push_str(&format!("{}\n\n", meta.description));
        md.push_str("| Slot | Symbol | Description | Units |\n");
        md.push_str("|------|--------|-------------|-------|\n");
        for (i, p) in meta.parameters.iter().enumerate() {
            md.push_str(&format!("| g{} | `{}` | {} | {} |\n", i + 1, p.symbol, p.description, p.units));
        }
        md.push('\n');
        md.push_str(&format!("- **Area:** `{}`\n", meta.area_formula));
        md.push_str(&format!("- **Perimeter:** `{}`\n", meta.perimeter_formula));
        md.push_str(&format!("- **Top width:** `{}`\n\n", meta.top_width_formula));
    }

    md
}
