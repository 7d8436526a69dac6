//! # File I/O Module
//!
//! Geometry table file operations:
//! - **Atomic saves**: Write to .tmp, verify, rename to prevent corruption
//! - **Version validation**: Ensure schema compatibility on load
//!
//! ## File Format
//!
//! Geometry tables are saved as plain JSON (see [`crate::network`]).
//!
//! ## Example
//!
//! ```rust,no_run
//! use geom_core::file_io::{load_geometry_table, save_geometry_table};
//! use geom_core::network::GeometryTable;
//! use std::path::Path;
//!
//! let table = GeometryTable::new("Outfall 3");
//! let path = Path::new("outfall3.json");
//!
//! save_geometry_table(&table, path).unwrap();
//! let loaded = load_geometry_table(path).unwrap();
//! assert_eq!(loaded, table);
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::errors::{GeomError, GeomResult};
use crate::network::{GeometryTable, SCHEMA_VERSION};

/// Temporary path used while saving `path`.
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

/// Save a geometry table with atomic write semantics.
///
/// The save process:
/// 1. Serialize table to JSON
/// 2. Write to a temporary file (.tmp) and sync to disk
/// 3. Re-read and parse the temporary file
/// 4. Rename .tmp over the target (atomic on most filesystems)
pub fn save_geometry_table(table: &GeometryTable, path: &Path) -> GeomResult<()> {
    let json = serde_json::to_string_pretty(table)?;
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        GeomError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        GeomError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        GeomError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    drop(tmp_file);

    // Verify before replacing the previous file
    if let Err(err) = read_table(&tmp_path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err);
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        GeomError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    info!("Saved geometry table '{}' ({} links) to {}", table.meta.name, table.len(), path.display());
    Ok(())
}

/// Load a geometry table from a file.
///
/// The table is parsed and version-checked but not resolved; call
/// [`GeometryTable::resolve`] to validate the links.
///
/// # Returns
///
/// * `Ok(GeometryTable)` - Successfully loaded table
/// * `Err(GeomError::VersionMismatch)` - File version is incompatible
/// * `Err(GeomError::SerializationError)` - Invalid JSON
/// * `Err(GeomError::FileError)` - I/O error
pub fn load_geometry_table(path: &Path) -> GeomResult<GeometryTable> {
    let table = read_table(path)?;
    validate_version(&table.meta.version)?;
    info!("Loaded geometry table '{}' ({} links) from {}", table.meta.name, table.len(), path.display());
    Ok(table)
}

fn read_table(path: &Path) -> GeomResult<GeometryTable> {
    let mut file = File::open(path).map_err(|e| {
        GeomError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        GeomError::file_error("read", path.display().to_string(), e.to_string())
    })?;
    debug!("Read {} bytes from {}", contents.len(), path.display());

    GeometryTable::from_json_str(&contents).map_err(|err| match err {
        GeomError::SerializationError { reason } => GeomError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), reason),
        },
        other => other,
    })
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> GeomResult<()> {
    let mismatch = || GeomError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version.split('.').filter_map(|p| p.parse().ok()).collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION.split('.').filter_map(|p| p.parse().ok()).collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // For 0.x versions, a newer minor version is not readable
    if current_parts[0] == 0 && file_parts.len() > 1 && current_parts.len() > 1 && file_parts[1] > current_parts[1] {
        return Err(mismatch());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::LinkSpec;
    use crate::shapes::{CircularSection, Shape};
    use std::env::temp_dir;

    fn temp_table_path(name: &str) -> PathBuf {
        temp_dir().join(format!("geom_core_test_{}_{}.json", name, std::process::id()))
    }

    fn sample_table() -> GeometryTable {
        let mut table = GeometryTable::new("File Test");
        table.add_link(LinkSpec::typed("C1", Shape::Circular(CircularSection::new(0.9, 0.001))));
        table.add_link(LinkSpec::legacy("C2", "floodplain", &[3.0, 1.0, 2.0, 4.0, 1.0, 3.0]));
        table
    }

    #[test]
    fn test_tmp_path() {
        assert_eq!(tmp_path_for(Path::new("/data/net.json")), Path::new("/data/net.json.tmp"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_table_path("roundtrip");
        let table = sample_table();
        save_geometry_table(&table, &path).unwrap();

        let loaded = load_geometry_table(&path).unwrap();
        assert_eq!(loaded, table);
        assert_eq!(loaded.resolve().unwrap().len(), 2);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_table_path("atomic");
        save_geometry_table(&sample_table(), &path).unwrap();

        assert!(!tmp_path_for(&path).exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_geometry_table(&temp_table_path("does_not_exist")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_invalid_json() {
        let path = temp_table_path("invalid_json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_geometry_table(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_rejects_future_version() {
        let path = temp_table_path("future");
        let mut table = sample_table();
        table.meta.version = "1.0.0".to_string();
        fs::write(&path, serde_json::to_string(&table).unwrap()).unwrap();
        let err = load_geometry_table(&path).unwrap_err();
        assert_eq!(err.error_code(), "VERSION_MISMATCH");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version("0.1.0").is_ok());
        assert!(validate_version("0.0.9").is_ok());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("garbage").is_err());
    }
}
