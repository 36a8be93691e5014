//! # Reference Data Store
//!
//! Static lookup tables the calculator is built on: bolt dimensions,
//! material properties, and clearance hole sizes. Tables load once per
//! process, either from a directory of JSON files or from the built-in
//! copies of the same data.
//!
//! ## Input files
//!
//! - `bolt_sizes.json` — ordered array of [`BoltSizeRecord`]
//! - `materials.json` — mapping material name → properties
//! - `clearance_holes.json` — mapping bolt size → fit-class diameters
//!
//! A missing or malformed file fails with [`JointError::DataLoad`]; callers
//! surface that to the user instead of panicking.
//!
//! ## Example
//!
//! ```rust
//! use joint_core::data::{FitClass, ReferenceData};
//!
//! let data = ReferenceData::builtin();
//!
//! let bolt = data.bolt_size("1/4").unwrap();
//! let steel = data.material("Steel").unwrap();
//! let hole = data.clearance_hole("1/4", FitClass::Standard).unwrap();
//!
//! assert_eq!(bolt.d_in, 0.250);
//! assert_eq!(steel.e_psi, 29.0e6);
//! assert!(hole > bolt.d_in);
//! ```

pub mod bolt_sizes;
pub mod clearance_holes;
pub mod materials;

pub use bolt_sizes::{BoltSizeRecord, BoltSizeTable, ThreadRecord};
pub use clearance_holes::{ClearanceHoleRecord, ClearanceHoleTable, FitClass};
pub use materials::{MaterialProps, MaterialRecord, MaterialTable};

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;

use crate::errors::{JointError, JointResult};

static BUILTIN: Lazy<ReferenceData> = Lazy::new(|| ReferenceData {
    bolt_sizes: bolt_sizes::builtin_bolt_sizes(),
    materials: materials::builtin_materials(),
    clearance_holes: clearance_holes::builtin_clearance_holes(),
});

/// The three reference tables, loaded together.
///
/// Read-only once constructed; every joint built in the process borrows
/// from the same store.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub bolt_sizes: BoltSizeTable,
    pub materials: MaterialTable,
    pub clearance_holes: ClearanceHoleTable,
}

impl ReferenceData {
    /// The built-in tables, initialized once per process.
    ///
    /// Use this when no data directory is configured; the values mirror the
    /// shipped JSON files.
    pub fn builtin() -> &'static ReferenceData {
        &BUILTIN
    }

    /// Load all three tables from a directory of JSON files.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use joint_core::data::ReferenceData;
    /// use std::path::Path;
    ///
    /// let data = ReferenceData::load_from_dir(Path::new("data")).unwrap();
    /// assert!(!data.bolt_sizes.is_empty());
    /// ```
    pub fn load_from_dir(dir: &Path) -> JointResult<Self> {
        let bolt_records: Vec<BoltSizeRecord> = read_json(&dir.join("bolt_sizes.json"))?;
        let material_props: HashMap<String, MaterialProps> =
            read_json(&dir.join("materials.json"))?;
        let hole_map: HashMap<String, ClearanceHoleRecord> =
            read_json(&dir.join("clearance_holes.json"))?;

        Ok(ReferenceData {
            bolt_sizes: BoltSizeTable::from_records(bolt_records),
            materials: MaterialTable::from_props(material_props),
            clearance_holes: ClearanceHoleTable::from_map(hole_map),
        })
    }

    /// Look up a bolt size record by designation.
    pub fn bolt_size(&self, size: &str) -> JointResult<&BoltSizeRecord> {
        self.bolt_sizes
            .get(size)
            .ok_or_else(|| JointError::bolt_size_not_found(size))
    }

    /// Look up the thread record for a (size, tpi) pair.
    pub fn thread(&self, size: &str, tpi: u32) -> JointResult<&ThreadRecord> {
        self.bolt_size(size)?
            .thread(tpi)
            .ok_or_else(|| JointError::thread_not_found(size, tpi))
    }

    /// Look up a material record by name (case-insensitive).
    pub fn material(&self, name: &str) -> JointResult<&MaterialRecord> {
        self.materials
            .get(name)
            .ok_or_else(|| JointError::material_not_found(name))
    }

    /// Look up the clearance hole diameter for a bolt size and fit class.
    pub fn clearance_hole(&self, size: &str, fit: FitClass) -> JointResult<f64> {
        self.clearance_holes
            .get(size)
            .map(|record| record.diameter_in(fit))
            .ok_or_else(|| JointError::clearance_hole_not_found(size))
    }
}

/// Read and deserialize one JSON file, mapping both I/O and parse failures
/// to `DataLoad`.
fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> JointResult<T> {
    let text = fs::read_to_string(path)
        .map_err(|e| JointError::data_load(path.display().to_string(), e.to_string()))?;
    serde_json::from_str(&text)
        .map_err(|e| JointError::data_load(path.display().to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn shipped_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    #[test]
    fn test_builtin_store() {
        let data = ReferenceData::builtin();
        assert!(!data.bolt_sizes.is_empty());
        assert!(!data.materials.is_empty());
        assert!(!data.clearance_holes.is_empty());

        // Every bolt size should have a clearance hole entry.
        for size in data.bolt_sizes.sizes() {
            assert!(data.clearance_holes.get(size).is_some(), "{}", size);
        }
    }

    #[test]
    fn test_load_from_shipped_files() {
        let data = ReferenceData::load_from_dir(&shipped_data_dir()).unwrap();

        // The files mirror the built-in tables.
        let builtin = ReferenceData::builtin();
        assert_eq!(data.bolt_sizes.len(), builtin.bolt_sizes.len());
        assert_eq!(data.materials.len(), builtin.materials.len());
        assert_eq!(data.clearance_holes.len(), builtin.clearance_holes.len());

        let quarter = data.bolt_size("1/4").unwrap();
        assert_eq!(quarter.d_in, 0.250);
        assert_eq!(
            data.clearance_hole("1/4", FitClass::Standard).unwrap(),
            0.2812
        );
    }

    #[test]
    fn test_load_missing_dir() {
        let err = ReferenceData::load_from_dir(Path::new("/no/such/dir")).unwrap_err();
        assert_eq!(err.error_code(), "DATA_LOAD");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = std::env::temp_dir().join("joint_core_malformed_data_test");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("bolt_sizes.json"), "not json").unwrap();

        let err = ReferenceData::load_from_dir(&dir).unwrap_err();
        assert_eq!(err.error_code(), "DATA_LOAD");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_lookup_errors() {
        let data = ReferenceData::builtin();

        assert_eq!(
            data.bolt_size("M6").unwrap_err().error_code(),
            "BOLT_SIZE_NOT_FOUND"
        );
        assert_eq!(
            data.thread("1/4", 99).unwrap_err().error_code(),
            "THREAD_NOT_FOUND"
        );
        assert_eq!(
            data.material("unobtainium").unwrap_err().error_code(),
            "MATERIAL_NOT_FOUND"
        );
        assert_eq!(
            data.clearance_hole("M6", FitClass::Close)
                .unwrap_err()
                .error_code(),
            "CLEARANCE_HOLE_NOT_FOUND"
        );
    }

    #[test]
    fn test_thread_lookup() {
        let data = ReferenceData::builtin();
        let unf = data.thread("#10", 32).unwrap();
        assert_eq!(unf.tpi, 32);
        assert_eq!(unf.a_t_in2, 0.0200);
    }
}
