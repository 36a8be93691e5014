//! # joint_core - Bolted Joint Calculation Engine
//!
//! `joint_core` models one bolted joint at a time: a bolt resolved from
//! standard size tables, a stack of clamped members, optional washers, and
//! a clearance-hole choice. From that it derives grip length, bolt and
//! member stiffness, clearance, preload load-sharing, and a list of
//! geometric primitives for a host UI to draw.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: every interaction rebuilds a fresh joint from the
//!   current selections; derived values are pure functions
//! - **JSON-First**: reference tables, inputs, summaries, and drawables
//!   all serialize cleanly
//! - **Rich Errors**: structured error types, not just strings; only a
//!   failed data load is fatal
//!
//! ## Quick Start
//!
//! ```rust
//! use joint_core::data::ReferenceData;
//! use joint_core::joint::{BoltedJoint, JointInput};
//! use joint_core::presentation::to_drawables;
//!
//! let data = ReferenceData::builtin();
//! let joint = BoltedJoint::from_input(data, &JointInput::default()).unwrap();
//!
//! let summary = joint.summarize().unwrap();
//! assert!(summary.is_valid);
//!
//! let drawables = to_drawables(&joint).unwrap();
//! assert!(!drawables.is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`data`] - Reference tables: bolt sizes, materials, clearance holes
//! - [`joint`] - Domain model: Bolt, Member, Washer, BoltedJoint
//! - [`presentation`] - Joint → drawable primitives for the host UI
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod data;
pub mod errors;
pub mod joint;
pub mod presentation;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use data::{FitClass, ReferenceData};
pub use errors::{JointError, JointResult};
pub use joint::{BoltedJoint, JointInput, JointSummary};
