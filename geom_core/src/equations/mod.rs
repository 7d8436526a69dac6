//! # Cross-Section Geometry Equations
//!
//! Closed-form geometry for every supported conduit shape. Each function takes
//! the already-reduced depth `y` (see [`crate::depth`]) and the shape's fixed
//! dimensions, and returns one of:
//!
//! - `A` = flow area (m²)
//! - `Pe` = wetted perimeter (m)
//! - `B` = free-surface top width (m)
//!
//! The hydraulic radius `R = A/Pe` is one shared rule, [`hydraulic_radius`].
//!
//! ## Modules
//!
//! - [`circular`] - Part-full circular pipe with Preissman slot
//! - [`rectangular`] - Closed box, open channel and wide channel
//! - [`trapezoidal`] - Trapezoidal and triangular channels
//! - [`parabolic`] - Parabolic channel
//! - [`elliptical`] - Elliptical conduit
//! - [`force_main`] - Pressurized circular pipe
//! - [`floodplain`] - Two-stage channel/floodplain section
//! - [`radius`] - Hydraulic radius
//!
//! ## Conventions
//!
//! - **Depth**: meters above the invert, measured vertically
//! - **Side slope**: horizontal run per unit rise (m = 2 means 2H:1V)
//! - **Slot ratio**: Preissman slot width as a fraction of the diameter or
//!   width of a closed conduit
//! - **Angles**: radians

pub mod circular;
pub mod elliptical;
pub mod floodplain;
pub mod force_main;
pub mod parabolic;
pub mod radius;
pub mod rectangular;
pub mod trapezoidal;

// Re-export commonly used items
pub use circular::{circular_area, circular_perimeter, circular_theta, circular_top_width};
pub use elliptical::{elliptical_area, elliptical_perimeter, elliptical_theta, elliptical_top_width};
pub use floodplain::{
    floodplain_area,
    floodplain_perimeter,
    floodplain_split,
    floodplain_top_width,
    floodplain_transition_width,
};
pub use force_main::{force_main_area, force_main_perimeter, force_main_top_width};
pub use parabolic::{parabolic_area, parabolic_perimeter, parabolic_top_width};
pub use radius::hydraulic_radius;
pub use rectangular::{
    rect_closed_top_width,
    rect_open_top_width,
    rectangular_area,
    rectangular_perimeter,
    wide_perimeter,
};
pub use trapezoidal::{
    side_slope_factor,
    trapezoidal_area,
    trapezoidal_perimeter,
    trapezoidal_top_width,
    triangular_area,
    triangular_perimeter,
    triangular_top_width,
};
