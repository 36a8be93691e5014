//! # Joint Input
//!
//! The full selection set for one joint configuration, exactly as the host
//! UI collects it. Rebuilding a [`crate::joint::BoltedJoint`] from a
//! `JointInput` is the only way state changes: there is no long-lived
//! mutable joint, just a pure recomputation from current selections.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "label": "J-1",
//!   "bolt_size": "1/4",
//!   "tpi": 20,
//!   "bolt_material": "Steel",
//!   "bolt_length_in": 1.25,
//!   "fit": "standard",
//!   "members": [
//!     { "thickness_in": 0.5, "material": "Steel" },
//!     { "thickness_in": 0.25, "material": "Steel" }
//!   ],
//!   "washers": [],
//!   "preload_lb": 0.0
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::data::FitClass;
use crate::errors::{JointError, JointResult};

/// One member selection: a plate in the clamped stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberInput {
    /// Plate thickness (in)
    pub thickness_in: f64,
    /// Material name, resolved against the material table
    pub material: String,
}

/// One washer selection, placed under the bolt head.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasherInput {
    /// Inner diameter (in)
    pub id_in: f64,
    /// Outer diameter (in)
    pub od_in: f64,
    /// Thickness (in)
    pub thickness_in: f64,
    /// Material name
    pub material: String,
}

/// Complete selection set for one joint configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointInput {
    /// User label for this joint (e.g., "J-1")
    pub label: String,

    /// Bolt size designation (e.g., "#10", "1/4")
    pub bolt_size: String,

    /// Threads per inch; must be available for the selected size
    pub tpi: u32,

    /// Bolt material name
    pub bolt_material: String,

    /// Overall bolt length under the head (in)
    pub bolt_length_in: f64,

    /// Clearance hole fit class
    #[serde(default)]
    pub fit: FitClass,

    /// Clamped members, outermost (under the head) first
    pub members: Vec<MemberInput>,

    /// Washers under the bolt head, head side first
    #[serde(default)]
    pub washers: Vec<WasherInput>,

    /// Installed preload (lb); zero when not analyzed
    #[serde(default)]
    pub preload_lb: f64,
}

impl JointInput {
    /// Validate scalar inputs.
    ///
    /// Reference lookups (size, TPI, material names) are validated later
    /// during resolution; this checks only what can be checked without the
    /// tables. An empty member stack is allowed here and flagged by the
    /// joint itself, so the UI can show a partial configuration.
    pub fn validate(&self) -> JointResult<()> {
        if self.bolt_length_in <= 0.0 {
            return Err(JointError::invalid_input(
                "bolt_length_in",
                self.bolt_length_in.to_string(),
                "Bolt length must be positive",
            ));
        }
        if self.preload_lb < 0.0 {
            return Err(JointError::invalid_input(
                "preload_lb",
                self.preload_lb.to_string(),
                "Preload cannot be negative",
            ));
        }
        for (i, member) in self.members.iter().enumerate() {
            if member.thickness_in <= 0.0 {
                return Err(JointError::invalid_input(
                    format!("members[{}].thickness_in", i),
                    member.thickness_in.to_string(),
                    "Member thickness must be positive",
                ));
            }
        }
        for (i, washer) in self.washers.iter().enumerate() {
            if washer.thickness_in <= 0.0 {
                return Err(JointError::invalid_input(
                    format!("washers[{}].thickness_in", i),
                    washer.thickness_in.to_string(),
                    "Washer thickness must be positive",
                ));
            }
            if washer.id_in <= 0.0 || washer.od_in <= washer.id_in {
                return Err(JointError::invalid_input(
                    format!("washers[{}]", i),
                    format!("id={}, od={}", washer.id_in, washer.od_in),
                    "Washer must have 0 < id < od",
                ));
            }
        }
        Ok(())
    }
}

impl Default for JointInput {
    /// A reasonable starting configuration: 1/4"-20 steel bolt through two
    /// steel plates with a standard-fit hole.
    fn default() -> Self {
        JointInput {
            label: "J-1".to_string(),
            bolt_size: "1/4".to_string(),
            tpi: 20,
            bolt_material: "Steel".to_string(),
            bolt_length_in: 1.25,
            fit: FitClass::Standard,
            members: vec![
                MemberInput {
                    thickness_in: 0.5,
                    material: "Steel".to_string(),
                },
                MemberInput {
                    thickness_in: 0.25,
                    material: "Steel".to_string(),
                },
            ],
            washers: Vec::new(),
            preload_lb: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validates() {
        assert!(JointInput::default().validate().is_ok());
    }

    #[test]
    fn test_negative_thickness_rejected() {
        let mut input = JointInput::default();
        input.members[1].thickness_in = -0.1;
        let err = input.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.to_string().contains("members[1]"));
    }

    #[test]
    fn test_bad_washer_rejected() {
        let mut input = JointInput::default();
        input.washers.push(WasherInput {
            id_in: 0.5,
            od_in: 0.3,
            thickness_in: 0.063,
            material: "Steel".to_string(),
        });
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_negative_preload_rejected() {
        let mut input = JointInput::default();
        input.preload_lb = -100.0;
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let input = JointInput::default();
        let json = serde_json::to_string(&input).unwrap();
        let roundtrip: JointInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }

    #[test]
    fn test_defaults_in_json() {
        // fit, washers, and preload may be omitted from hand-written files.
        let json = r##"{
            "label": "J-2",
            "bolt_size": "#10",
            "tpi": 32,
            "bolt_material": "A-286 Alloy",
            "bolt_length_in": 0.75,
            "members": [{ "thickness_in": 0.25, "material": "Aluminum" }]
        }"##;
        let input: JointInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.fit, crate::data::FitClass::Standard);
        assert!(input.washers.is_empty());
        assert_eq!(input.preload_lb, 0.0);
    }
}
