//! # Batch Evaluation
//!
//! Links are independent, so one solver iteration's geometry update is a
//! data-parallel map over `(shape, depths)` pairs. Results come back in link
//! order.
//!
//! ## Example
//!
//! ```rust
//! use geom_core::batch::evaluate_links;
//! use geom_core::depth::DepthPair;
//! use geom_core::shapes::{CircularSection, RectOpenSection, Shape};
//!
//! let shapes = [
//!     Shape::Circular(CircularSection::new(1.0, 0.001)),
//!     Shape::RectOpen(RectOpenSection::new(2.0, 1.5)),
//! ];
//! let depths = [DepthPair::uniform(0.5), DepthPair::uniform(1.0)];
//!
//! let states = evaluate_links(&shapes, &depths).unwrap();
//! assert_eq!(states.len(), 2);
//! assert_eq!(states[1].area_m2, 1.5);
//! ```

use rayon::prelude::*;

use crate::depth::DepthPair;
use crate::errors::{GeomError, GeomResult};
#[cfg(feature = "tables")]
use crate::network::ResolvedLink;
use crate::shapes::{CrossSection, CrossSectionState, Shape};

fn check_lengths(n_links: usize, n_depths: usize) -> GeomResult<()> {
    if n_links != n_depths {
        return Err(GeomError::invalid_input(
            "depths",
            n_depths.to_string(),
            format!("Expected one depth pair per link ({} links)", n_links),
        ));
    }
    Ok(())
}

/// Evaluate every link in parallel.
///
/// # Errors
/// `InvalidInput` if `shapes` and `depths` differ in length.
pub fn evaluate_links(shapes: &[Shape], depths: &[DepthPair]) -> GeomResult<Vec<CrossSectionState>> {
    check_lengths(shapes.len(), depths.len())?;
    Ok(shapes
        .par_iter()
        .zip(depths.par_iter())
        .map(|(shape, pair)| shape.evaluate(*pair))
        .collect())
}

/// Evaluate every link on the calling thread.
///
/// # Errors
/// `InvalidInput` if `shapes` and `depths` differ in length.
pub fn evaluate_links_sequential(shapes: &[Shape], depths: &[DepthPair]) -> GeomResult<Vec<CrossSectionState>> {
    check_lengths(shapes.len(), depths.len())?;
    Ok(shapes
        .iter()
        .zip(depths)
        .map(|(shape, pair)| shape.evaluate(*pair))
        .collect())
}

/// Evaluate resolved network links in parallel.
#[cfg(feature = "tables")]
pub fn evaluate_resolved(links: &[ResolvedLink], depths: &[DepthPair]) -> GeomResult<Vec<CrossSectionState>> {
    check_lengths(links.len(), depths.len())?;
    Ok(links
        .par_iter()
        .zip(depths.par_iter())
        .map(|(link, pair)| link.shape.evaluate(*pair))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{example_parameters, ALL_KINDS};

    fn example_network(copies: usize) -> (Vec<Shape>, Vec<DepthPair>) {
        let mut shapes = Vec::new();
        let mut depths = Vec::new();
        for i in 0..copies {
            for kind in ALL_KINDS {
                shapes.push(Shape::from_parameters(kind, &example_parameters(kind)).unwrap());
                let h = (i % 25) as f64 * 0.1 - 0.3;
                depths.push(DepthPair::new(h, h + 0.2));
            }
        }
        (shapes, depths)
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let (shapes, depths) = example_network(40);
        let parallel = evaluate_links(&shapes, &depths).unwrap();
        let sequential = evaluate_links_sequential(&shapes, &depths).unwrap();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_preserves_link_order() {
        let (shapes, depths) = example_network(10);
        let states = evaluate_links(&shapes, &depths).unwrap();
        for (i, state) in states.iter().enumerate() {
            assert_eq!(*state, shapes[i].evaluate(depths[i]));
        }
    }

    #[test]
    fn test_length_mismatch() {
        let (shapes, mut depths) = example_network(1);
        depths.pop();
        let err = evaluate_links(&shapes, &depths).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(evaluate_links_sequential(&shapes, &depths).is_err());
    }

    #[test]
    fn test_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Shape>();
        assert_send_sync::<CrossSectionState>();
        #[cfg(feature = "tables")]
        assert_send_sync::<ResolvedLink>();
        assert_send_sync::<GeomError>();
    }

    #[test]
    fn test_empty_network() {
        assert!(evaluate_links(&[], &[]).unwrap().is_empty());
    }
}
