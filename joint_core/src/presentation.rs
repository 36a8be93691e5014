//! # Presentation Adapter
//!
//! Converts a [`BoltedJoint`] into plain geometric primitives for a host
//! plotting layer. No rendering happens here: the output is an ordered
//! list of rectangles and circles, proportioned to the real joint
//! dimensions, that any canvas can draw.
//!
//! ## Coordinate system
//!
//! The joint axis is the vertical line x = 0. y grows downward along the
//! stack, with y = 0 at the top of the member stack (the underside of the
//! washers, or of the head when there are none). Everything above the
//! stack (washers, head) has negative y.
//!
//! ## Example
//!
//! ```rust
//! use joint_core::data::ReferenceData;
//! use joint_core::joint::{BoltedJoint, JointInput};
//! use joint_core::presentation::{to_drawables, Role};
//!
//! let data = ReferenceData::builtin();
//! let joint = BoltedJoint::from_input(data, &JointInput::default()).unwrap();
//!
//! let drawables = to_drawables(&joint).unwrap();
//! assert_eq!(drawables[0].role, Role::BoltHead);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::JointResult;
use crate::joint::BoltedJoint;

/// Nut height as a fraction of nominal diameter (standard hex nut).
const NUT_HEIGHT_RATIO: f64 = 0.875;

/// Half-width of the drawn member plates, in nominal diameters. Plates are
/// clipped to this extent so the section stays compact.
const MEMBER_EXTENT_RATIO: f64 = 3.0;

/// Vertical gap between the section and the end-view circles, in nominal
/// diameters.
const END_VIEW_GAP_RATIO: f64 = 2.0;

/// What a primitive represents, so hosts can pick consistent styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    BoltHead,
    BoltShank,
    Nut,
    Washer,
    MemberLeft,
    MemberRight,
    /// End view: clearance hole outline
    HoleOutline,
    /// End view: bolt cross-section
    BoltEnd,
}

/// A drawable primitive. Rectangles are given by their top-left corner in
/// the downward-positive frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Shape {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Circle {
        x: f64,
        y: f64,
        radius: f64,
    },
}

/// One primitive with its role and optional annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drawable {
    pub shape: Shape,
    pub role: Role,
    pub label: Option<String>,
}

impl Drawable {
    fn rect(role: Role, label: Option<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Drawable {
            shape: Shape::Rect {
                x,
                y,
                width,
                height,
            },
            role,
            label,
        }
    }

    fn circle(role: Role, label: Option<String>, x: f64, y: f64, radius: f64) -> Self {
        Drawable {
            shape: Shape::Circle { x, y, radius },
            role,
            label,
        }
    }
}

/// Convert a joint into its cross-section primitives, ordered top to
/// bottom: head, washers, shank, member halves, nut, then the end-view
/// circles.
///
/// Pure with respect to the joint; fails only when the joint itself is
/// invalid (empty stack, hole smaller than bolt), propagating the domain
/// error unchanged.
pub fn to_drawables(joint: &BoltedJoint) -> JointResult<Vec<Drawable>> {
    joint.grip_length_in()?;
    joint.clearance_in()?;

    let bolt = &joint.bolt;
    let d = bolt.d_in;
    let hole = joint.hole_diameter_in;
    let washer_stack: f64 = joint.washers.iter().map(|w| w.thickness_in).sum();
    let member_stack: f64 = joint.members.iter().map(|m| m.thickness_in).sum();
    let nut_height = NUT_HEIGHT_RATIO * d;
    let member_extent = MEMBER_EXTENT_RATIO * d;

    let mut drawables = Vec::new();

    // Head, above the washers.
    drawables.push(Drawable::rect(
        Role::BoltHead,
        Some(bolt.to_string()),
        -bolt.head_flats_in / 2.0,
        -washer_stack - bolt.head_height_in,
        bolt.head_flats_in,
        bolt.head_height_in,
    ));

    // Washers stack downward from under the head to the members.
    let mut y = -washer_stack;
    for (i, washer) in joint.washers.iter().enumerate() {
        drawables.push(Drawable::rect(
            Role::Washer,
            Some(format!("Washer {}", i + 1)),
            -washer.od_in / 2.0,
            y,
            washer.od_in,
            washer.thickness_in,
        ));
        y += washer.thickness_in;
    }

    // Shank runs from the head underside through the stack.
    drawables.push(Drawable::rect(
        Role::BoltShank,
        None,
        -d / 2.0,
        -washer_stack,
        d,
        bolt.length_in,
    ));

    // Member halves flank the clearance hole.
    let half_width = member_extent - hole / 2.0;
    let mut y = 0.0;
    for (i, member) in joint.members.iter().enumerate() {
        let label = format!(
            "Member {} ({:.3}\" {})",
            i + 1,
            member.thickness_in,
            member.material.name
        );
        drawables.push(Drawable::rect(
            Role::MemberLeft,
            Some(label),
            -member_extent,
            y,
            half_width,
            member.thickness_in,
        ));
        drawables.push(Drawable::rect(
            Role::MemberRight,
            None,
            hole / 2.0,
            y,
            half_width,
            member.thickness_in,
        ));
        y += member.thickness_in;
    }

    // Nut under the stack.
    drawables.push(Drawable::rect(
        Role::Nut,
        None,
        -bolt.head_flats_in / 2.0,
        member_stack,
        bolt.head_flats_in,
        nut_height,
    ));

    // End view: hole and bolt circles below the section.
    let end_y = member_stack + nut_height + END_VIEW_GAP_RATIO * d;
    drawables.push(Drawable::circle(
        Role::HoleOutline,
        Some(format!("{} hole ∅{:.4}\"", joint.fit, hole)),
        0.0,
        end_y,
        hole / 2.0,
    ));
    drawables.push(Drawable::circle(Role::BoltEnd, None, 0.0, end_y, d / 2.0));

    Ok(drawables)
}
