//! # Network Geometry Table
//!
//! The configuration layer: a named list of links, each with a label and a
//! cross-section. Tables serialize to human-readable JSON and are resolved
//! into validated [`Shape`]s once, at network setup, before any solver
//! iteration runs.
//!
//! ## Structure
//!
//! ```text
//! GeometryTable
//! ├── meta: TableMetadata (version, name, description)
//! └── links: Vec<LinkSpec>
//!     ├── label
//!     └── geometry: typed Shape  |  legacy { kind: code or name, params: [g1..g6] }
//! ```
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "meta": { "version": "0.1.0", "name": "Outfall 3", "description": "" },
//!   "links": [
//!     { "label": "C1", "geometry": { "type": "Circular", "diameter_m": 0.9, "slot_ratio": 0.001 } },
//!     { "label": "C2", "geometry": { "kind": 5, "params": [2.0, 3.0, 1.5] } },
//!     { "label": "C3", "geometry": { "kind": "floodplain", "params": [3.0, 1.0, 2.0, 4.0, 1.0, 3.0] } }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::fmt;

use log::{debug, info, warn};
use serde::de::{Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{GeomError, GeomResult};
use crate::registry::GeometryKind;
use crate::shapes::parameters::MAX_PARAMETERS;
use crate::shapes::{CrossSection, Shape, ShapeParameters};

/// Current schema version for geometry table files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root geometry table container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryTable {
    pub meta: TableMetadata,
    /// Links in solver order
    pub links: Vec<LinkSpec>,
}

/// Table metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableMetadata {
    /// Schema version for migration support
    pub version: String,
    /// Network or model name
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// One link's label and cross-section description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkSpec {
    pub label: String,
    pub geometry: GeometrySpec,
}

/// A cross-section given either as a typed shape or as legacy slot values.
///
/// Objects with a `"type"` tag read as [`Shape`]; objects with a `"kind"`
/// field read as legacy slots. Field errors from either form are reported
/// as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GeometrySpec {
    Typed(Shape),
    Legacy { kind: KindSelector, params: Vec<f64> },
}

#[derive(Deserialize)]
struct LegacyRecord {
    kind: KindSelector,
    params: Vec<f64>,
}

impl<'de> Deserialize<'de> for GeometrySpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if value.get("type").is_some() {
            return Shape::deserialize(value).map(GeometrySpec::Typed).map_err(D::Error::custom);
        }
        if value.get("kind").is_some() {
            let LegacyRecord { kind, params } = LegacyRecord::deserialize(value).map_err(D::Error::custom)?;
            return Ok(GeometrySpec::Legacy { kind, params });
        }
        Err(D::Error::custom("geometry needs a \"type\" tag or a \"kind\" field"))
    }
}

/// Geometry kind given by numeric code or symbolic name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KindSelector {
    Code(i64),
    Name(String),
}

impl KindSelector {
    pub fn resolve(&self) -> GeomResult<GeometryKind> {
        match self {
            KindSelector::Code(code) => GeometryKind::from_code(*code),
            KindSelector::Name(name) => GeometryKind::from_name(name),
        }
    }
}

impl From<i64> for KindSelector {
    fn from(code: i64) -> Self {
        KindSelector::Code(code)
    }
}

impl From<&str> for KindSelector {
    fn from(name: &str) -> Self {
        KindSelector::Name(name.to_string())
    }
}

impl From<GeometryKind> for KindSelector {
    /// Prefers the numeric code; floodplain falls back to its name.
    fn from(kind: GeometryKind) -> Self {
        match kind.code() {
            Some(code) => KindSelector::Code(i64::from(code)),
            None => KindSelector::Name(kind.name().to_string()),
        }
    }
}

impl fmt::Display for KindSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KindSelector::Code(code) => write!(f, "code {}", code),
            KindSelector::Name(name) => write!(f, "'{}'", name),
        }
    }
}

/// A validated link, ready for [`crate::batch::evaluate_resolved`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLink {
    pub label: String,
    pub shape: Shape,
}

impl LinkSpec {
    pub fn typed(label: impl Into<String>, shape: Shape) -> Self {
        LinkSpec {
            label: label.into(),
            geometry: GeometrySpec::Typed(shape),
        }
    }

    pub fn legacy(label: impl Into<String>, kind: impl Into<KindSelector>, params: &[f64]) -> Self {
        LinkSpec {
            label: label.into(),
            geometry: GeometrySpec::Legacy {
                kind: kind.into(),
                params: params.to_vec(),
            },
        }
    }

    /// Convert to a typed shape and validate its dimensions.
    ///
    /// Errors carry the link label.
    pub fn resolve(&self) -> GeomResult<Shape> {
        self.resolve_unlabelled().map_err(|err| err.in_link(&self.label))
    }

    fn resolve_unlabelled(&self) -> GeomResult<Shape> {
        let shape = match &self.geometry {
            GeometrySpec::Typed(shape) => *shape,
            GeometrySpec::Legacy { kind, params } => {
                let kind = kind.resolve()?;
                if params.len() > MAX_PARAMETERS {
                    return Err(GeomError::invalid_input(
                        "params",
                        params.len().to_string(),
                        format!("At most {} parameters (g1..g6)", MAX_PARAMETERS),
                    ));
                }
                let ignored = ShapeParameters::from_slice(params).ignored_slots(kind);
                if !ignored.is_empty() {
                    warn!(
                        "Link '{}': {} geometry ignores non-zero slots {:?}",
                        self.label, kind, ignored
                    );
                }
                Shape::from_parameters(kind, params)?
            }
        };
        shape.validate()?;
        Ok(shape)
    }
}

impl GeometryTable {
    /// Create an empty table.
    ///
    /// # Example
    ///
    /// ```rust
    /// use geom_core::network::{GeometryTable, LinkSpec};
    /// use geom_core::shapes::{CircularSection, Shape};
    ///
    /// let mut table = GeometryTable::new("Outfall 3");
    /// table.add_link(LinkSpec::typed("C1", Shape::Circular(CircularSection::new(0.9, 0.001))));
    /// table.add_link(LinkSpec::legacy("C2", 5, &[2.0, 3.0, 1.5]));
    ///
    /// let links = table.resolve().unwrap();
    /// assert_eq!(links.len(), 2);
    /// assert_eq!(links[1].label, "C2");
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        GeometryTable {
            meta: TableMetadata {
                version: SCHEMA_VERSION.to_string(),
                name: name.into(),
                description: String::new(),
            },
            links: Vec::new(),
        }
    }

    /// Parse a table from JSON text.
    ///
    /// A typed geometry whose `"type"` tag names no shape fails with
    /// `UnknownGeometryName` for that link; other malformed input fails with
    /// `SerializationError` carrying serde's field-level message.
    pub fn from_json_str(json: &str) -> GeomResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        check_type_tags(&value)?;
        Ok(serde_json::from_value(value)?)
    }

    pub fn add_link(&mut self, link: LinkSpec) {
        self.links.push(link);
    }

    /// Number of links
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Resolve and validate every link, stopping at the first failure.
    ///
    /// # Errors
    /// - `UnknownGeometryCode` / `UnknownGeometryName` for an unrecognized kind
    /// - `MissingParameter` for a short legacy parameter list
    /// - `InvalidInput` for bad dimensions, a duplicate label, or more than six
    ///   legacy parameters
    pub fn resolve(&self) -> GeomResult<Vec<ResolvedLink>> {
        info!("Resolving geometry table '{}' ({} links)", self.meta.name, self.links.len());

        let mut seen = HashSet::new();
        let mut resolved = Vec::with_capacity(self.links.len());
        for link in &self.links {
            if !seen.insert(link.label.as_str()) {
                return Err(GeomError::invalid_input("label", link.label.clone(), "Duplicate link label"));
            }
            let shape = link.resolve()?;
            debug!("Link '{}' resolved as {:?}", link.label, shape);
            resolved.push(ResolvedLink {
                label: link.label.clone(),
                shape,
            });
        }
        Ok(resolved)
    }

    /// Resolved shapes only, in link order.
    pub fn shapes(&self) -> GeomResult<Vec<Shape>> {
        Ok(self.resolve()?.into_iter().map(|link| link.shape).collect())
    }
}

fn check_type_tags(table: &Value) -> GeomResult<()> {
    let links = match table.get("links").and_then(Value::as_array) {
        Some(links) => links,
        None => return Ok(()),
    };
    for link in links {
        let tag = link.get("geometry").and_then(|g| g.get("type")).and_then(Value::as_str);
        if let Some(tag) = tag {
            if GeometryKind::from_type_tag(tag).is_none() {
                let label = link.get("label").and_then(Value::as_str).unwrap_or_default();
                return Err(GeomError::unknown_name(tag).in_link(label));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{CircularSection, TrapezoidalSection};

    fn sample_table() -> GeometryTable {
        let mut table = GeometryTable::new("Test Network");
        table.add_link(LinkSpec::typed("C1", Shape::Circular(CircularSection::new(0.9, 0.001))));
        table.add_link(LinkSpec::legacy("C2", 5, &[2.0, 3.0, 1.5, 0.0, 0.0, 0.0]));
        table.add_link(LinkSpec::legacy("C3", "floodplain", &[3.0, 1.0, 2.0, 4.0, 1.0, 3.0]));
        table
    }

    #[test]
    fn test_resolve_mixed_table() {
        let links = sample_table().resolve().unwrap();
        assert_eq!(links.len(), 3);
        assert_eq!(links[1].shape, Shape::Trapezoidal(TrapezoidalSection::new(2.0, 3.0, 1.5)));
        assert_eq!(links[2].shape.kind(), GeometryKind::Floodplain);
    }

    #[test]
    fn test_json_roundtrip() {
        let table = sample_table();
        let json = serde_json::to_string_pretty(&table).unwrap();
        let parsed: GeometryTable = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, table);
    }

    #[test]
    fn test_parse_handwritten_json() {
        let json = r#"{
            "meta": { "version": "0.1.0", "name": "Outfall 3" },
            "links": [
                { "label": "C1", "geometry": { "type": "RectOpen", "height_m": 2.0, "width_m": 1.5 } },
                { "label": "C2", "geometry": { "kind": "Triangular", "params": [1.0, 2.0] } }
            ]
        }"#;
        let table = GeometryTable::from_json_str(json).unwrap();
        assert_eq!(table.meta.description, "");
        let shapes = table.shapes().unwrap();
        assert_eq!(shapes[1].kind(), GeometryKind::Triangular);
    }

    #[test]
    fn test_unknown_type_tag_names_link() {
        let json = r#"{
            "meta": { "version": "0.1.0", "name": "Outfall 3" },
            "links": [
                { "label": "C1", "geometry": { "type": "Circular", "diameter_m": 0.9, "slot_ratio": 0.001 } },
                { "label": "C2", "geometry": { "type": "Horseshoe", "diameter_m": 1.2 } }
            ]
        }"#;
        let err = GeometryTable::from_json_str(json).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_GEOMETRY_NAME");
        assert!(err.is_configuration_error());
        assert_eq!(
            err,
            GeomError::UnknownGeometryName {
                name: "Horseshoe".to_string(),
                link: Some("C2".to_string()),
            }
        );
    }

    #[test]
    fn test_missing_shape_field_reported() {
        let json = r#"{
            "meta": { "version": "0.1.0", "name": "Outfall 3" },
            "links": [
                { "label": "C1", "geometry": { "type": "Circular", "diameter_m": 0.9 } }
            ]
        }"#;
        match GeometryTable::from_json_str(json).unwrap_err() {
            GeomError::SerializationError { reason } => assert!(reason.contains("slot_ratio"), "{}", reason),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_legacy_field_error_reported() {
        let json = r#"{
            "meta": { "version": "0.1.0", "name": "Outfall 3" },
            "links": [ { "label": "C1", "geometry": { "kind": 5 } } ]
        }"#;
        match GeometryTable::from_json_str(json).unwrap_err() {
            GeomError::SerializationError { reason } => assert!(reason.contains("params"), "{}", reason),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_geometry_without_type_or_kind() {
        let json = r#"{
            "meta": { "version": "0.1.0", "name": "Outfall 3" },
            "links": [ { "label": "C1", "geometry": { "params": [1.0, 0.001] } } ]
        }"#;
        match GeometryTable::from_json_str(json).unwrap_err() {
            GeomError::SerializationError { reason } => assert!(reason.contains("\"kind\""), "{}", reason),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_legacy_name_names_link() {
        let mut table = GeometryTable::new("Unknown");
        table.add_link(LinkSpec::legacy("X1", "Horseshoe", &[1.0]));
        assert_eq!(
            table.resolve().unwrap_err().to_string(),
            "Unknown geometry name: 'Horseshoe' in link 'X1'"
        );
    }

    #[test]
    fn test_too_many_params_names_link() {
        let mut table = GeometryTable::new("Long");
        table.add_link(LinkSpec::legacy("C9", 1, &[1.0, 0.001, 0.0, 0.0, 0.0, 0.0, 0.0]));
        match table.resolve().unwrap_err() {
            GeomError::InvalidInput { field, .. } => assert_eq!(field, "C9.params"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_code_fails_fast() {
        let mut table = sample_table();
        table.add_link(LinkSpec::legacy("C4", 12, &[1.0]));
        let err = table.resolve().unwrap_err();
        assert_eq!(err, GeomError::UnknownGeometryCode { code: 12 });
    }

    #[test]
    fn test_invalid_dimension_names_link() {
        let mut table = GeometryTable::new("Bad");
        table.add_link(LinkSpec::typed("P7", Shape::Circular(CircularSection::new(-1.0, 0.001))));
        match table.resolve().unwrap_err() {
            GeomError::InvalidInput { field, .. } => assert_eq!(field, "P7.diameter_m"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_short_params() {
        let mut table = GeometryTable::new("Short");
        table.add_link(LinkSpec::legacy("C1", "circular", &[1.0]));
        assert_eq!(table.resolve().unwrap_err().error_code(), "MISSING_PARAMETER");
    }

    #[test]
    fn test_too_many_params() {
        let mut table = GeometryTable::new("Long");
        table.add_link(LinkSpec::legacy("C1", 1, &[1.0, 0.001, 0.0, 0.0, 0.0, 0.0, 0.0]));
        assert_eq!(table.resolve().unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_duplicate_label() {
        let mut table = sample_table();
        table.add_link(LinkSpec::legacy("C1", 8, &[1.0, 20.0]));
        let err = table.resolve().unwrap_err();
        assert_eq!(err, GeomError::invalid_input("label", "C1", "Duplicate link label"));
    }

    #[test]
    fn test_kind_selector_from_kind() {
        assert_eq!(KindSelector::from(GeometryKind::Wide), KindSelector::Code(8));
        assert_eq!(
            KindSelector::from(GeometryKind::Floodplain),
            KindSelector::Name("floodplain".to_string())
        );
    }
}
