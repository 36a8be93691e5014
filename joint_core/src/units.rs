//! # Unit Types
//!
//! Type-safe wrappers for the units that appear in joint reports. These are
//! lightweight newtypes over `f64` rather than a full units library:
//! fastener work in US practice uses a small, fixed set of units, and the
//! wrappers keep JSON serialization clean (just numbers).
//!
//! ## Units used
//!
//! - Length: inches (in)
//! - Area: square inches (in²)
//! - Stress / modulus: psi, ksi
//! - Force: pounds (lb), kips (k = 1000 lb)
//! - Stiffness: pounds per inch (lb/in)
//!
//! ## Example
//!
//! ```rust
//! use joint_core::units::{Psi, Ksi, Pounds, Kips};
//!
//! let e = Psi(29.0e6);
//! let e_ksi: Ksi = e.into();
//! assert_eq!(e_ksi.0, 29_000.0);
//!
//! let preload = Kips(1.2);
//! let preload_lb: Pounds = preload.into();
//! assert_eq!(preload_lb.0, 1200.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length and Area
// ============================================================================

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

/// Area in square inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqIn(pub f64);

// ============================================================================
// Stress
// ============================================================================

/// Stress in pounds per square inch (psi)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Psi(pub f64);

/// Stress in kips per square inch (ksi)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ksi(pub f64);

impl From<Psi> for Ksi {
    fn from(psi: Psi) -> Self {
        Ksi(psi.0 / 1000.0)
    }
}

impl From<Ksi> for Psi {
    fn from(ksi: Ksi) -> Self {
        Psi(ksi.0 * 1000.0)
    }
}

// ============================================================================
// Force
// ============================================================================

/// Force in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

/// Force in kips (1 kip = 1000 pounds)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kips(pub f64);

impl From<Pounds> for Kips {
    fn from(lb: Pounds) -> Self {
        Kips(lb.0 / 1000.0)
    }
}

impl From<Kips> for Pounds {
    fn from(k: Kips) -> Self {
        Pounds(k.0 * 1000.0)
    }
}

// ============================================================================
// Stiffness
// ============================================================================

/// Axial stiffness in pounds per inch (lb/in)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LbPerIn(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Inches);
impl_arithmetic!(SqIn);
impl_arithmetic!(Psi);
impl_arithmetic!(Ksi);
impl_arithmetic!(Pounds);
impl_arithmetic!(Kips);
impl_arithmetic!(LbPerIn);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_psi_to_ksi() {
        let e = Psi(29.0e6);
        let ksi: Ksi = e.into();
        assert_eq!(ksi.0, 29_000.0);
    }

    #[test]
    fn test_kips_to_pounds() {
        let k = Kips(1.5);
        let lb: Pounds = k.into();
        assert_eq!(lb.0, 1500.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Inches(0.5);
        let b = Inches(0.25);
        assert_eq!((a + b).0, 0.75);
        assert_eq!((a - b).0, 0.25);
        assert_eq!((a * 2.0).0, 1.0);
        assert_eq!((a / 2.0).0, 0.25);
    }

    #[test]
    fn test_serialization() {
        let grip = Inches(0.75);
        let json = serde_json::to_string(&grip).unwrap();
        assert_eq!(json, "0.75");

        let roundtrip: Inches = serde_json::from_str(&json).unwrap();
        assert_eq!(grip, roundtrip);
    }
}
