//! # Joint Domain Model
//!
//! Value objects for one joint configuration and the calculations over
//! them. The flow mirrors the UI: a [`JointInput`] captures the current
//! selections, [`BoltedJoint::from_input`] resolves them against the
//! reference tables, and the joint's methods derive grip length,
//! stiffness, clearance, and validity as pure functions.

pub mod bolt;
pub mod bolted_joint;
pub mod input;

pub use bolt::Bolt;
pub use bolted_joint::{BoltedJoint, JointSummary, Member, Washer};
pub use input::{JointInput, MemberInput, WasherInput};
