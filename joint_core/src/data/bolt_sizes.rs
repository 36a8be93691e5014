//! Bolt Size Table (Unified Inch Series)
//!
//! Dimensional data for machine screws and hex cap screws in the unified
//! inch series. Each size carries its nominal diameter, hex head dimensions,
//! and one thread record per available pitch (UNC and UNF).
//!
//! ## Data Source
//!
//! Nominal diameters and stress areas follow the standard UN thread tables
//! (ASME B1.1); tensile stress area A_t and minor-diameter area A_r are the
//! tabulated reference values, not recomputed from thread geometry.
//!
//! ## Example
//!
//! ```rust
//! use joint_core::data::ReferenceData;
//!
//! let data = ReferenceData::builtin();
//! let quarter = data.bolt_size("1/4").unwrap();
//! let unc = quarter.thread(20).unwrap();
//!
//! assert_eq!(quarter.d_in, 0.250);
//! assert_eq!(unc.a_t_in2, 0.0318);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One thread pitch available for a bolt size.
///
/// Areas are in square inches, straight from the UN thread tables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThreadRecord {
    /// Threads per inch
    pub tpi: u32,
    /// Tensile stress area A_t (in²)
    pub a_t_in2: f64,
    /// Minor-diameter (root) area A_r (in²)
    pub a_r_in2: f64,
}

/// Dimensional record for one bolt size designation.
///
/// Identity is (size, tpi): the size designation picks this record, the TPI
/// picks one of its thread records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoltSizeRecord {
    /// Size designation (e.g., "#10", "1/4", "3/8")
    pub size: String,

    /// Nominal (major) diameter (in)
    pub d_in: f64,

    /// Hex head width across flats (in)
    pub head_flats_in: f64,

    /// Hex head height (in)
    pub head_height_in: f64,

    /// Available thread pitches, coarse first
    pub threads: Vec<ThreadRecord>,
}

impl BoltSizeRecord {
    /// Look up the thread record for a given TPI, if this size offers it.
    pub fn thread(&self, tpi: u32) -> Option<&ThreadRecord> {
        self.threads.iter().find(|t| t.tpi == tpi)
    }

    /// All TPI values available for this size, in table order.
    pub fn tpi_options(&self) -> Vec<u32> {
        self.threads.iter().map(|t| t.tpi).collect()
    }
}

/// Ordered bolt size table with index by designation.
///
/// Order is preserved from the source file so UIs can present sizes
/// smallest-first without re-sorting.
#[derive(Debug, Clone, Default)]
pub struct BoltSizeTable {
    records: Vec<BoltSizeRecord>,
    index: HashMap<String, usize>,
}

impl BoltSizeTable {
    /// Build a table from an ordered sequence of records.
    ///
    /// A later record with a duplicate designation replaces the earlier one.
    pub fn from_records(records: Vec<BoltSizeRecord>) -> Self {
        let mut table = BoltSizeTable::default();
        for record in records {
            table.insert(record);
        }
        table
    }

    /// Insert a record, replacing any existing record with the same size.
    pub fn insert(&mut self, record: BoltSizeRecord) {
        if let Some(&pos) = self.index.get(&record.size) {
            self.records[pos] = record;
        } else {
            self.index.insert(record.size.clone(), self.records.len());
            self.records.push(record);
        }
    }

    /// Look up a record by size designation (exact match).
    pub fn get(&self, size: &str) -> Option<&BoltSizeRecord> {
        self.index.get(size).map(|&pos| &self.records[pos])
    }

    /// All records in table order.
    pub fn records(&self) -> &[BoltSizeRecord] {
        &self.records
    }

    /// All size designations in table order.
    pub fn sizes(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.size.as_str()).collect()
    }

    /// Number of sizes in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Built-in bolt size table covering the common machine-screw and
/// fractional sizes, for use without a data directory.
pub fn builtin_bolt_sizes() -> BoltSizeTable {
    // (size, d, head flats, head height, [(tpi, A_t, A_r)])
    let rows: [(&str, f64, f64, f64, &[(u32, f64, f64)]); 8] = [
        ("#4", 0.112, 0.1875, 0.060, &[(40, 0.00604, 0.00496), (48, 0.00661, 0.00566)]),
        ("#6", 0.138, 0.250, 0.093, &[(32, 0.00909, 0.00745), (40, 0.01015, 0.00874)]),
        ("#8", 0.164, 0.250, 0.110, &[(32, 0.0140, 0.01196), (36, 0.01474, 0.01285)]),
        ("#10", 0.190, 0.3125, 0.120, &[(24, 0.0175, 0.0145), (32, 0.0200, 0.0175)]),
        ("1/4", 0.250, 0.4375, 0.163, &[(20, 0.0318, 0.0269), (28, 0.0364, 0.0326)]),
        ("5/16", 0.3125, 0.500, 0.211, &[(18, 0.0524, 0.0454), (24, 0.0580, 0.0524)]),
        ("3/8", 0.375, 0.5625, 0.243, &[(16, 0.0775, 0.0678), (24, 0.0878, 0.0809)]),
        ("1/2", 0.500, 0.750, 0.323, &[(13, 0.1419, 0.1257), (20, 0.1599, 0.1486)]),
    ];

    let records = rows
        .iter()
        .map(|(size, d, flats, height, threads)| BoltSizeRecord {
            size: size.to_string(),
            d_in: *d,
            head_flats_in: *flats,
            head_height_in: *height,
            threads: threads
                .iter()
                .map(|&(tpi, a_t, a_r)| ThreadRecord {
                    tpi,
                    a_t_in2: a_t,
                    a_r_in2: a_r,
                })
                .collect(),
        })
        .collect();

    BoltSizeTable::from_records(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table() {
        let table = builtin_bolt_sizes();
        assert_eq!(table.len(), 8);

        let quarter = table.get("1/4").unwrap();
        assert_eq!(quarter.d_in, 0.250);
        assert_eq!(quarter.thread(20).unwrap().a_t_in2, 0.0318);
        assert_eq!(quarter.thread(28).unwrap().a_t_in2, 0.0364);
        assert!(quarter.thread(32).is_none());
    }

    #[test]
    fn test_table_order_preserved() {
        let table = builtin_bolt_sizes();
        let sizes = table.sizes();
        assert_eq!(sizes.first(), Some(&"#4"));
        assert_eq!(sizes.last(), Some(&"1/2"));
    }

    #[test]
    fn test_tpi_options_coarse_first() {
        let table = builtin_bolt_sizes();
        let ten = table.get("#10").unwrap();
        assert_eq!(ten.tpi_options(), vec![24, 32]);
    }

    #[test]
    fn test_insert_replaces_duplicate() {
        let mut table = builtin_bolt_sizes();
        let len_before = table.len();
        let mut replacement = table.get("#10").unwrap().clone();
        replacement.d_in = 0.191;
        table.insert(replacement);

        assert_eq!(table.len(), len_before);
        assert_eq!(table.get("#10").unwrap().d_in, 0.191);
    }

    #[test]
    fn test_record_serialization() {
        let table = builtin_bolt_sizes();
        let record = table.get("3/8").unwrap();
        let json = serde_json::to_string(record).unwrap();
        let roundtrip: BoltSizeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(*record, roundtrip);
    }
}
