//! Clearance Hole Table
//!
//! Recommended clearance hole diameters per bolt size for close, standard,
//! and loose fits, following the usual drill-chart values (number and
//! fractional drills for the machine-screw sizes, n/64 steps above 1/4").

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Clearance hole fit class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitClass {
    /// Tight locational fit, minimal clearance
    Close,
    /// Normal free fit (the default)
    Standard,
    /// Generous clearance for misalignment
    Loose,
}

impl FitClass {
    /// All fit classes for iteration
    pub const ALL: [FitClass; 3] = [FitClass::Close, FitClass::Standard, FitClass::Loose];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            FitClass::Close => "Close",
            FitClass::Standard => "Standard",
            FitClass::Loose => "Loose",
        }
    }

    /// Parse from a user-facing string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "close" => Some(FitClass::Close),
            "standard" | "normal" => Some(FitClass::Standard),
            "loose" | "free" => Some(FitClass::Loose),
            _ => None,
        }
    }
}

impl Default for FitClass {
    fn default() -> Self {
        FitClass::Standard
    }
}

impl std::fmt::Display for FitClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Clearance hole diameters for one bolt size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClearanceHoleRecord {
    /// Close-fit hole diameter (in)
    pub close_in: f64,
    /// Standard-fit hole diameter (in)
    pub standard_in: f64,
    /// Loose-fit hole diameter (in)
    pub loose_in: f64,
}

impl ClearanceHoleRecord {
    /// Hole diameter for the given fit class.
    pub fn diameter_in(&self, fit: FitClass) -> f64 {
        match fit {
            FitClass::Close => self.close_in,
            FitClass::Standard => self.standard_in,
            FitClass::Loose => self.loose_in,
        }
    }
}

/// Clearance hole table keyed by bolt size designation.
#[derive(Debug, Clone, Default)]
pub struct ClearanceHoleTable {
    records: HashMap<String, ClearanceHoleRecord>,
}

impl ClearanceHoleTable {
    /// Build a table from a size → record mapping (the file shape).
    pub fn from_map(records: HashMap<String, ClearanceHoleRecord>) -> Self {
        ClearanceHoleTable { records }
    }

    /// Insert a record for a bolt size.
    pub fn insert(&mut self, size: impl Into<String>, record: ClearanceHoleRecord) {
        self.records.insert(size.into(), record);
    }

    /// Look up the record for a bolt size.
    pub fn get(&self, size: &str) -> Option<&ClearanceHoleRecord> {
        self.records.get(size)
    }

    /// Number of sizes covered.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Built-in clearance hole table matching the built-in bolt sizes.
pub fn builtin_clearance_holes() -> ClearanceHoleTable {
    let rows: [(&str, f64, f64, f64); 8] = [
        ("#4", 0.1200, 0.1285, 0.1360),
        ("#6", 0.1440, 0.1495, 0.1570),
        ("#8", 0.1695, 0.1770, 0.1850),
        ("#10", 0.1960, 0.2010, 0.2130),
        ("1/4", 0.2656, 0.2812, 0.2969),
        ("5/16", 0.3281, 0.3438, 0.3594),
        ("3/8", 0.3906, 0.4062, 0.4219),
        ("1/2", 0.5156, 0.5312, 0.5469),
    ];

    let mut table = ClearanceHoleTable::default();
    for (size, close, standard, loose) in rows {
        table.insert(
            size,
            ClearanceHoleRecord {
                close_in: close,
                standard_in: standard,
                loose_in: loose,
            },
        );
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_class_parsing() {
        assert_eq!(FitClass::parse("close"), Some(FitClass::Close));
        assert_eq!(FitClass::parse("Standard"), Some(FitClass::Standard));
        assert_eq!(FitClass::parse("normal"), Some(FitClass::Standard));
        assert_eq!(FitClass::parse("LOOSE"), Some(FitClass::Loose));
        assert_eq!(FitClass::parse("snug"), None);
    }

    #[test]
    fn test_builtin_holes() {
        let table = builtin_clearance_holes();
        let quarter = table.get("1/4").unwrap();

        assert_eq!(quarter.diameter_in(FitClass::Close), 0.2656);
        assert_eq!(quarter.diameter_in(FitClass::Standard), 0.2812);
        assert_eq!(quarter.diameter_in(FitClass::Loose), 0.2969);
    }

    #[test]
    fn test_fits_are_ordered() {
        // Every built-in record should satisfy close < standard < loose.
        let table = builtin_clearance_holes();
        for size in ["#4", "#6", "#8", "#10", "1/4", "5/16", "3/8", "1/2"] {
            let record = table.get(size).unwrap();
            assert!(record.close_in < record.standard_in, "{}", size);
            assert!(record.standard_in < record.loose_in, "{}", size);
        }
    }

    #[test]
    fn test_fit_class_serialization() {
        let json = serde_json::to_string(&FitClass::Standard).unwrap();
        assert_eq!(json, "\"standard\"");
        let roundtrip: FitClass = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, FitClass::Standard);
    }
}
