//! # Bolt
//!
//! A bolt resolved from the reference tables: size designation, thread, and
//! material selections turned into concrete dimensions and elastic
//! properties.
//!
//! ## Example
//!
//! ```rust
//! use joint_core::data::ReferenceData;
//! use joint_core::joint::Bolt;
//!
//! let data = ReferenceData::builtin();
//! let bolt = Bolt::from_data(data, "1/4", 20, "Steel", 1.25).unwrap();
//!
//! assert_eq!(bolt.d_in, 0.250);
//! assert_eq!(bolt.tpi, 20);
//! assert_eq!(bolt.a_t_in2, 0.0318);
//! ```

use serde::{Deserialize, Serialize};

use crate::data::ReferenceData;
use crate::errors::{JointError, JointResult};

/// A bolt with resolved dimensions and material properties.
///
/// Constructed via [`Bolt::from_data`] so that every field is consistent
/// with the reference tables; the struct itself is a plain value object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bolt {
    /// Size designation (e.g., "#10", "1/4")
    pub size: String,

    /// Threads per inch
    pub tpi: u32,

    /// Material name
    pub material: String,

    /// Nominal (major) diameter (in)
    pub d_in: f64,

    /// Tensile stress area A_t (in²)
    pub a_t_in2: f64,

    /// Minor-diameter (root) area A_r (in²)
    pub a_r_in2: f64,

    /// Young's modulus of the bolt material (psi)
    pub e_psi: f64,

    /// Overall bolt length under the head (in)
    pub length_in: f64,

    /// Hex head width across flats (in)
    pub head_flats_in: f64,

    /// Hex head height (in)
    pub head_height_in: f64,
}

impl Bolt {
    /// Resolve a bolt from the reference tables.
    ///
    /// Fails if the size, the TPI for that size, or the material is not in
    /// the tables, or if the length is not positive.
    pub fn from_data(
        data: &ReferenceData,
        size: &str,
        tpi: u32,
        material: &str,
        length_in: f64,
    ) -> JointResult<Self> {
        if length_in <= 0.0 {
            return Err(JointError::invalid_input(
                "bolt_length_in",
                length_in.to_string(),
                "Bolt length must be positive",
            ));
        }

        let record = data.bolt_size(size)?;
        let thread = data.thread(size, tpi)?;
        let mat = data.material(material)?;

        Ok(Bolt {
            size: record.size.clone(),
            tpi: thread.tpi,
            material: mat.name.clone(),
            d_in: record.d_in,
            a_t_in2: thread.a_t_in2,
            a_r_in2: thread.a_r_in2,
            e_psi: mat.e_psi,
            length_in,
            head_flats_in: record.head_flats_in,
            head_height_in: record.head_height_in,
        })
    }

    /// Unthreaded shank cross-sectional area, π d²/4 (in²).
    pub fn shank_area_in2(&self) -> f64 {
        std::f64::consts::PI * self.d_in.powi(2) / 4.0
    }

    /// Threaded length measured from the point end (in).
    ///
    /// ASME convention for inch fasteners: 2d + 1/4 for lengths up to 6 in,
    /// 2d + 1/2 beyond, capped at the full bolt length (short screws are
    /// threaded all the way to the head).
    pub fn thread_length_in(&self) -> f64 {
        let nominal = if self.length_in <= 6.0 {
            2.0 * self.d_in + 0.25
        } else {
            2.0 * self.d_in + 0.5
        };
        nominal.min(self.length_in)
    }

    /// Unthreaded shank length under the head (in).
    pub fn shank_length_in(&self) -> f64 {
        self.length_in - self.thread_length_in()
    }
}

impl std::fmt::Display for Bolt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{} x {:.3}\" ({})",
            self.size, self.tpi, self.length_in, self.material
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ReferenceData;

    #[test]
    fn test_record_round_trip() {
        // Constructing a Bolt reproduces the record's diameter and TPI
        // exactly.
        let data = ReferenceData::builtin();
        let record = data.bolt_size("#10").unwrap().clone();
        let bolt = Bolt::from_data(data, "#10", 24, "A-286 Alloy", 1.0).unwrap();

        assert_eq!(bolt.d_in, record.d_in);
        assert_eq!(bolt.tpi, 24);
        assert_eq!(bolt.a_t_in2, record.thread(24).unwrap().a_t_in2);
    }

    #[test]
    fn test_unavailable_tpi_rejected() {
        let data = ReferenceData::builtin();
        let err = Bolt::from_data(data, "#10", 20, "Steel", 1.0).unwrap_err();
        assert_eq!(err.error_code(), "THREAD_NOT_FOUND");
    }

    #[test]
    fn test_unknown_size_rejected() {
        let data = ReferenceData::builtin();
        let err = Bolt::from_data(data, "M8", 20, "Steel", 1.0).unwrap_err();
        assert_eq!(err.error_code(), "BOLT_SIZE_NOT_FOUND");
    }

    #[test]
    fn test_nonpositive_length_rejected() {
        let data = ReferenceData::builtin();
        let err = Bolt::from_data(data, "1/4", 20, "Steel", 0.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_thread_length_convention() {
        let data = ReferenceData::builtin();

        let short = Bolt::from_data(data, "1/4", 20, "Steel", 1.25).unwrap();
        assert_eq!(short.thread_length_in(), 0.75); // 2(0.25) + 0.25
        assert_eq!(short.shank_length_in(), 0.5);

        let long = Bolt::from_data(data, "1/4", 20, "Steel", 7.0).unwrap();
        assert_eq!(long.thread_length_in(), 1.0); // 2(0.25) + 0.5

        // Fully threaded when shorter than the nominal thread length.
        let stubby = Bolt::from_data(data, "1/4", 20, "Steel", 0.5).unwrap();
        assert_eq!(stubby.thread_length_in(), 0.5);
        assert_eq!(stubby.shank_length_in(), 0.0);
    }

    #[test]
    fn test_shank_area() {
        let data = ReferenceData::builtin();
        let bolt = Bolt::from_data(data, "1/2", 13, "Steel", 2.0).unwrap();
        let expected = std::f64::consts::PI * 0.25 / 4.0;
        assert!((bolt.shank_area_in2() - expected).abs() < 1e-12);
    }
}
