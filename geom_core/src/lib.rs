//! # geom_core - Hydraulic Cross-Section Geometry
//!
//! `geom_core` computes the cross-section geometry a free-surface network
//! solver needs on every iteration: flow area, wetted perimeter, hydraulic
//! radius and top width, for each link's shape at the mean of its two
//! junction depths.
//!
//! ## Design Philosophy
//!
//! - **Pure**: Evaluation allocates nothing and never fails
//! - **Typed**: One parameter record per shape, behind the [`shapes::CrossSection`] trait
//! - **Legacy-compatible**: Persisted `(code, g1..g6)` links still evaluate
//! - **JSON-First**: Shapes, results, tables and errors implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use geom_core::depth::DepthPair;
//! use geom_core::shapes::{CrossSection, Shape, TrapezoidalSection};
//!
//! let channel = Shape::Trapezoidal(TrapezoidalSection::new(2.0, 3.0, 1.5));
//! let state = channel.evaluate(DepthPair::new(0.8, 1.2));
//!
//! assert!((state.area_m2 - 4.5).abs() < 1e-12);
//! assert!((state.top_width_m - 6.0).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`depth`] - Depth reduction from junction depths
//! - [`equations`] - Closed-form per-shape formulas
//! - [`shapes`] - Typed shape records and the `Shape` enum
//! - [`registry`] - Geometry kinds, codes, names and metadata
//! - [`evaluate`] - Legacy per-link dispatcher
//! - [`batch`] - Parallel evaluation over all links
//! - [`errors`] - Structured error types
//!
//! With the default `tables` feature:
//!
//! - `network` - Geometry table configuration
//! - `file_io` - Atomic geometry table saves and loads
//!
//! Solvers that only evaluate shapes can build with `default-features = false`.

pub mod batch;
pub mod depth;
pub mod equations;
pub mod errors;
pub mod evaluate;
#[cfg(feature = "tables")]
pub mod file_io;
#[cfg(feature = "tables")]
pub mod network;
pub mod registry;
pub mod shapes;

// Re-export commonly used types at crate root for convenience
pub use depth::DepthPair;
pub use errors::{GeomError, GeomResult};
pub use evaluate::evaluate;
#[cfg(feature = "tables")]
pub use file_io::{load_geometry_table, save_geometry_table};
#[cfg(feature = "tables")]
pub use network::{GeometryTable, LinkSpec, ResolvedLink};
pub use registry::GeometryKind;
pub use shapes::{CrossSection, CrossSectionState, Shape};
