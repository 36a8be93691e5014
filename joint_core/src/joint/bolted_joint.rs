//! # Bolted Joint
//!
//! The assembled joint: one bolt, an ordered stack of members, optional
//! washers under the head, and a resolved clearance hole. Every derived
//! quantity is a pure function of the fields; nothing is cached and
//! nothing mutates after construction.
//!
//! ## Stiffness model
//!
//! The bolt is modeled as two springs in series (Shigley): the unthreaded
//! shank at the full nominal area and the threaded portion inside the grip
//! at the tensile stress area,
//!
//! ```text
//! k_b = A_d A_t E / (A_d l_t + A_t l_d)
//! ```
//!
//! Members are axial springs in series over a uniform annular bearing area
//! taken from the washer-face diameter (1.5 d) down to the clearance hole.
//! This deliberately ignores the pressure-cone spread; it keeps the member
//! number conservative and the formula inspectable.
//!
//! ## Example
//!
//! ```rust
//! use joint_core::data::ReferenceData;
//! use joint_core::joint::{BoltedJoint, JointInput};
//!
//! let data = ReferenceData::builtin();
//! let joint = BoltedJoint::from_input(data, &JointInput::default()).unwrap();
//!
//! assert_eq!(joint.grip_length_in().unwrap(), 0.75);
//! assert!(joint.is_valid());
//! ```

use serde::{Deserialize, Serialize};

use crate::data::{FitClass, MaterialRecord, ReferenceData};
use crate::errors::{JointError, JointResult};
use crate::joint::{Bolt, JointInput};
use crate::units::{Inches, LbPerIn};

/// Ratio of hex washer-face diameter to nominal diameter, used for the
/// member bearing annulus.
const WASHER_FACE_RATIO: f64 = 1.5;

/// A clamped plate with its resolved material record.
///
/// Position in the stack is the index in [`BoltedJoint::members`],
/// outermost (under the head) first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Plate thickness (in)
    pub thickness_in: f64,
    /// Resolved material
    pub material: MaterialRecord,
}

/// A washer under the bolt head with its resolved material record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Washer {
    /// Inner diameter (in)
    pub id_in: f64,
    /// Outer diameter (in)
    pub od_in: f64,
    /// Thickness (in)
    pub thickness_in: f64,
    /// Resolved material
    pub material: MaterialRecord,
}

/// One fully resolved joint configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoltedJoint {
    /// User label carried over from the input
    pub label: String,

    /// The resolved bolt
    pub bolt: Bolt,

    /// Clamped members, outermost first; order is geometric only, the
    /// derived scalars do not depend on it
    pub members: Vec<Member>,

    /// Washers under the bolt head
    pub washers: Vec<Washer>,

    /// Selected fit class
    pub fit: FitClass,

    /// Resolved clearance hole diameter (in)
    pub hole_diameter_in: f64,

    /// Installed preload (lb)
    pub preload_lb: f64,
}

impl BoltedJoint {
    /// Build a joint by resolving every selection against the reference
    /// tables. This is the single construction path: any change of
    /// selection rebuilds the joint from scratch.
    pub fn from_input(data: &ReferenceData, input: &JointInput) -> JointResult<Self> {
        input.validate()?;

        let bolt = Bolt::from_data(
            data,
            &input.bolt_size,
            input.tpi,
            &input.bolt_material,
            input.bolt_length_in,
        )?;
        let hole_diameter_in = data.clearance_hole(&input.bolt_size, input.fit)?;

        let members = input
            .members
            .iter()
            .map(|m| {
                Ok(Member {
                    thickness_in: m.thickness_in,
                    material: data.material(&m.material)?.clone(),
                })
            })
            .collect::<JointResult<Vec<_>>>()?;

        let washers = input
            .washers
            .iter()
            .map(|w| {
                Ok(Washer {
                    id_in: w.id_in,
                    od_in: w.od_in,
                    thickness_in: w.thickness_in,
                    material: data.material(&w.material)?.clone(),
                })
            })
            .collect::<JointResult<Vec<_>>>()?;

        Ok(BoltedJoint {
            label: input.label.clone(),
            bolt,
            members,
            washers,
            fit: input.fit,
            hole_diameter_in,
            preload_lb: input.preload_lb,
        })
    }

    /// Total grip length: member thicknesses plus washer thicknesses (in).
    ///
    /// Fails with `InvalidJoint` when the member stack is empty.
    pub fn grip_length_in(&self) -> JointResult<f64> {
        if self.members.is_empty() {
            return Err(JointError::invalid_joint(
                "Joint has no members; add at least one plate to the stack",
            ));
        }
        let members: f64 = self.members.iter().map(|m| m.thickness_in).sum();
        let washers: f64 = self.washers.iter().map(|w| w.thickness_in).sum();
        Ok(members + washers)
    }

    /// Radial clearance between hole and bolt, as a diameter difference (in).
    ///
    /// Fails with `IncompatibleSelection` when the hole is smaller than the
    /// bolt.
    pub fn clearance_in(&self) -> JointResult<f64> {
        let clearance = self.hole_diameter_in - self.bolt.d_in;
        if clearance < 0.0 {
            return Err(JointError::incompatible_selection(format!(
                "Clearance hole ({:.4} in) is smaller than the bolt ({:.4} in)",
                self.hole_diameter_in, self.bolt.d_in
            )));
        }
        Ok(clearance)
    }

    /// Minimum thread engagement allowance beyond the grip (in).
    ///
    /// One nominal diameter, the usual rule of thumb for full-strength
    /// engagement in a nut or tapped hole.
    pub fn min_engagement_in(&self) -> f64 {
        self.bolt.d_in
    }

    /// Bolt axial stiffness (lb/in), threaded and unthreaded segments as
    /// springs in series.
    pub fn bolt_stiffness_lb_per_in(&self) -> JointResult<f64> {
        let grip = self.grip_length_in()?;
        if grip <= 0.0 {
            return Err(JointError::degenerate_geometry("grip length"));
        }

        let a_d = self.bolt.shank_area_in2();
        let a_t = self.bolt.a_t_in2;
        let e = self.bolt.e_psi;

        // Unthreaded shank inside the grip; whatever remains of the grip is
        // threaded. Thread that sticks out past the nut does not load.
        let l_d = self.bolt.shank_length_in().min(grip);
        let l_t = grip - l_d;

        if l_t <= 0.0 {
            return Ok(a_d * e / grip);
        }
        if l_d <= 0.0 {
            return Ok(a_t * e / grip);
        }

        let denom = a_d * l_t + a_t * l_d;
        if denom <= 0.0 {
            return Err(JointError::degenerate_geometry("bolt spring length"));
        }
        Ok(a_d * a_t * e / denom)
    }

    /// Effective bearing area under the head for member compression (in²):
    /// the annulus from the washer-face diameter down to the hole.
    pub fn bearing_area_in2(&self) -> JointResult<f64> {
        let face_d = WASHER_FACE_RATIO * self.bolt.d_in;
        if face_d <= self.hole_diameter_in {
            return Err(JointError::degenerate_geometry("bearing annulus"));
        }
        Ok(std::f64::consts::PI / 4.0 * (face_d.powi(2) - self.hole_diameter_in.powi(2)))
    }

    /// Combined member stiffness (lb/in): each member an axial spring over
    /// the bearing annulus, all in series. Washers contribute to grip but
    /// not to the spring chain.
    pub fn member_stiffness_lb_per_in(&self) -> JointResult<f64> {
        if self.members.is_empty() {
            return Err(JointError::invalid_joint(
                "Joint has no members; add at least one plate to the stack",
            ));
        }
        let area = self.bearing_area_in2()?;

        let mut compliance = 0.0;
        for member in &self.members {
            let k = member.material.e_psi * area / member.thickness_in;
            if k <= 0.0 {
                return Err(JointError::degenerate_geometry("member spring stiffness"));
            }
            compliance += 1.0 / k;
        }
        Ok(1.0 / compliance)
    }

    /// Joint stiffness constant C = k_b / (k_b + k_m): the fraction of an
    /// external load seen by the bolt.
    pub fn stiffness_constant(&self) -> JointResult<f64> {
        let k_b = self.bolt_stiffness_lb_per_in()?;
        let k_m = self.member_stiffness_lb_per_in()?;
        Ok(k_b / (k_b + k_m))
    }

    /// Bolt tension under an external axial load (lb): C·P + F_i.
    pub fn bolt_load_lb(&self, external_lb: f64) -> JointResult<f64> {
        Ok(self.stiffness_constant()? * external_lb + self.preload_lb)
    }

    /// External load at which the members unload completely and the joint
    /// separates (lb): F_i / (1 − C).
    pub fn separation_load_lb(&self) -> JointResult<f64> {
        let c = self.stiffness_constant()?;
        if c >= 1.0 {
            return Err(JointError::degenerate_geometry("member share of load"));
        }
        Ok(self.preload_lb / (1.0 - c))
    }

    /// Check overall validity: non-empty stack, non-negative clearance, and
    /// enough bolt beyond the grip for full thread engagement. Equality at
    /// the engagement boundary counts as valid.
    pub fn is_valid(&self) -> bool {
        let grip = match self.grip_length_in() {
            Ok(g) => g,
            Err(_) => return false,
        };
        let clearance_ok = self.hole_diameter_in >= self.bolt.d_in;
        let length_ok = grip <= self.bolt.length_in - self.min_engagement_in();
        clearance_ok && length_ok
    }

    /// Produce the UI-facing summary record.
    pub fn summarize(&self) -> JointResult<JointSummary> {
        Ok(JointSummary {
            label: self.label.clone(),
            bolt: self.bolt.to_string(),
            grip_length: Inches(self.grip_length_in()?),
            clearance: Inches(self.clearance_in()?),
            min_engagement: Inches(self.min_engagement_in()),
            bolt_stiffness: LbPerIn(self.bolt_stiffness_lb_per_in()?),
            member_stiffness: LbPerIn(self.member_stiffness_lb_per_in()?),
            stiffness_constant: self.stiffness_constant()?,
            is_valid: self.is_valid(),
        })
    }
}

/// Summary values for display, one row per derived quantity.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "J-1",
///   "bolt": "1/4-20 x 1.250\" (Steel)",
///   "grip_length": 0.75,
///   "clearance": 0.0312,
///   "min_engagement": 0.25,
///   "bolt_stiffness": 1607000.0,
///   "member_stiffness": 1869000.0,
///   "stiffness_constant": 0.46,
///   "is_valid": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointSummary {
    pub label: String,
    pub bolt: String,
    pub grip_length: Inches,
    pub clearance: Inches,
    pub min_engagement: Inches,
    pub bolt_stiffness: LbPerIn,
    pub member_stiffness: LbPerIn,
    pub stiffness_constant: f64,
    pub is_valid: bool,
}
