//! Legacy six-slot shape parameters.
//!
//! Network configurations that predate the typed [`Shape`](super::Shape)
//! store every link as `(code, g1..g6)`. The meaning of each slot depends on
//! the kind (see [`GeometryKind::metadata`]); unused trailing slots are zero.

use serde::{Deserialize, Serialize};

use crate::registry::GeometryKind;

/// Maximum number of `g` slots any kind reads.
pub const MAX_PARAMETERS: usize = 6;

/// Ordered `g1..g6` values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeParameters(pub [f64; MAX_PARAMETERS]);

impl ShapeParameters {
    /// Copy up to six values, zero-filling the rest.
    pub fn from_slice(values: &[f64]) -> Self {
        let mut slots = [0.0; MAX_PARAMETERS];
        for (slot, value) in slots.iter_mut().zip(values) {
            *slot = *value;
        }
        Self(slots)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// 1-based indices of slots the kind does not read but which hold a
    /// non-zero value.
    pub fn ignored_slots(&self, kind: GeometryKind) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .skip(kind.arity())
            .filter(|(_, value)| **value != 0.0)
            .map(|(i, _)| i + 1)
            .collect()
    }
}

impl From<[f64; MAX_PARAMETERS]> for ShapeParameters {
    fn from(values: [f64; MAX_PARAMETERS]) -> Self {
        Self(values)
    }
}
