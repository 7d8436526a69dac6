//! # Per-Link Dispatcher
//!
//! Entry points that map a link's persisted `(code, g1..g6)` description to
//! the matching shape evaluator. Code lookup and parameter conversion are the
//! only fallible steps; once a [`Shape`] exists, evaluation cannot fail.
//!
//! ## Example
//!
//! ```rust
//! use geom_core::evaluate::evaluate;
//!
//! // Code 3: open rectangular channel, h = 2.0 m, b = 1.5 m
//! let state = evaluate(3, &[2.0, 1.5, 0.0, 0.0, 0.0, 0.0], 1.0, 1.0).unwrap();
//! assert_eq!(state.area_m2, 1.5);
//! assert_eq!(state.perimeter_m, 3.5);
//!
//! assert!(evaluate(42, &[1.0], 0.5, 0.5).is_err());
//! ```

use crate::depth::DepthPair;
use crate::errors::GeomResult;
use crate::registry::GeometryKind;
use crate::shapes::{CrossSection, CrossSectionState, Shape};

/// Evaluate A, Pe, R and B for a link given by numeric geometry code.
///
/// # Errors
/// - `UnknownGeometryCode` if `code` is not 1-9
/// - `MissingParameter` if `params` is shorter than the kind's arity
pub fn evaluate(code: i64, params: &[f64], h_upstream_m: f64, h_downstream_m: f64) -> GeomResult<CrossSectionState> {
    let kind = GeometryKind::from_code(code)?;
    evaluate_kind(kind, params, h_upstream_m, h_downstream_m)
}

/// Evaluate a link given by symbolic kind name (e.g. `"floodplain"`).
///
/// # Errors
/// - `UnknownGeometryName` if `name` is not registered
/// - `MissingParameter` if `params` is shorter than the kind's arity
pub fn evaluate_named(name: &str, params: &[f64], h_upstream_m: f64, h_downstream_m: f64) -> GeomResult<CrossSectionState> {
    let kind = GeometryKind::from_name(name)?;
    evaluate_kind(kind, params, h_upstream_m, h_downstream_m)
}

/// Evaluate a link of a known kind from legacy slot values.
pub fn evaluate_kind(
    kind: GeometryKind,
    params: &[f64],
    h_upstream_m: f64,
    h_downstream_m: f64,
) -> GeomResult<CrossSectionState> {
    let shape = Shape::from_parameters(kind, params)?;
    Ok(evaluate_shape(&shape, DepthPair::new(h_upstream_m, h_downstream_m)))
}

/// Evaluate a typed shape. Infallible.
#[inline]
pub fn evaluate_shape(shape: &Shape, depths: DepthPair) -> CrossSectionState {
    shape.evaluate(depths)
}
