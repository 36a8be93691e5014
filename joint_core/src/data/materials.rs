//! Material Property Table
//!
//! Elastic and strength properties for common fastener and member
//! materials. Values are room-temperature handbook numbers; they are good
//! enough for stiffness and clearance work, not for qualified strength
//! substantiation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Elastic and strength properties for one material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    /// Display name (e.g., "Steel", "A-286 Alloy")
    pub name: String,

    /// Young's modulus E (psi)
    pub e_psi: f64,

    /// Yield strength (psi)
    pub yield_psi: f64,

    /// Poisson's ratio
    pub poisson: f64,
}

/// Property fields as they appear in `materials.json`, where the material
/// name is the mapping key rather than a record field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProps {
    pub e_psi: f64,
    pub yield_psi: f64,
    pub poisson: f64,
}

/// Material table with case-insensitive lookup by name.
#[derive(Debug, Clone, Default)]
pub struct MaterialTable {
    records: HashMap<String, MaterialRecord>,
}

impl MaterialTable {
    /// Build a table from a name → properties mapping (the file shape).
    pub fn from_props(props: HashMap<String, MaterialProps>) -> Self {
        let mut table = MaterialTable::default();
        for (name, p) in props {
            table.insert(MaterialRecord {
                name,
                e_psi: p.e_psi,
                yield_psi: p.yield_psi,
                poisson: p.poisson,
            });
        }
        table
    }

    /// Insert a record, keyed case-insensitively by name.
    pub fn insert(&mut self, record: MaterialRecord) {
        self.records.insert(record.name.to_lowercase(), record);
    }

    /// Look up a material by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&MaterialRecord> {
        self.records.get(&name.to_lowercase())
    }

    /// All material names, sorted for stable presentation.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.records.values().map(|r| r.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Number of materials in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Built-in material table for use without a data directory.
pub fn builtin_materials() -> MaterialTable {
    let rows: [(&str, f64, f64, f64); 6] = [
        ("Steel", 29.0e6, 36_000.0, 0.29),
        ("Stainless Steel", 28.0e6, 30_000.0, 0.30),
        ("A-286 Alloy", 29.1e6, 85_000.0, 0.31),
        ("Aluminum", 10.0e6, 35_000.0, 0.33),
        ("Titanium", 16.5e6, 120_000.0, 0.34),
        ("Brass", 15.0e6, 45_000.0, 0.33),
    ];

    let mut table = MaterialTable::default();
    for (name, e, yield_psi, poisson) in rows {
        table.insert(MaterialRecord {
            name: name.to_string(),
            e_psi: e,
            yield_psi,
            poisson,
        });
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_materials() {
        let table = builtin_materials();
        assert_eq!(table.len(), 6);

        let steel = table.get("Steel").unwrap();
        assert_eq!(steel.e_psi, 29.0e6);
        assert_eq!(steel.poisson, 0.29);
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let table = builtin_materials();
        assert!(table.get("a-286 alloy").is_some());
        assert!(table.get("A-286 ALLOY").is_some());
        assert!(table.get("unobtainium").is_none());
    }

    #[test]
    fn test_names_sorted() {
        let table = builtin_materials();
        let names = table.names();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_from_props() {
        let mut props = HashMap::new();
        props.insert(
            "Magnesium".to_string(),
            MaterialProps {
                e_psi: 6.5e6,
                yield_psi: 21_000.0,
                poisson: 0.35,
            },
        );
        let table = MaterialTable::from_props(props);
        assert_eq!(table.get("magnesium").unwrap().e_psi, 6.5e6);
    }
}
