//! # Unit Types
//!
//! Newtypes over `f64`, one per physical dimension used by the strength
//! formulas. Each serializes as a bare number.
//!
//! A full quantity library is not needed: member strength checks use a
//! small, fixed set of dimensions.
//!
//! A stress multiplied by an area is a force, a stress multiplied by a
//! section modulus is a moment. Only the products the AISC formulas need are
//! implemented; anything else fails to compile instead of failing at runtime.
//!
//! ## Metric Units (Primary)
//!
//! steel_core works in newtons and millimeters internally, which makes
//! stresses come out in MPa (N/mm²) with no conversion factors:
//! - Length: millimeters (mm), meters (m)
//! - Area: mm², section modulus: mm³, inertia: mm⁴, warping constant: mm⁶
//! - Force: newtons (N)
//! - Stress: megapascals (MPa)
//! - Moment: newton-millimeters (N·mm)
//!
//! ## Example
//!
//! ```rust
//! use steel_core::units::{Meters, Millimeters, MegaPascals, SqMm, Newtons};
//!
//! let length: Millimeters = Meters(1.5).into();
//! assert_eq!(length.0, 1500.0);
//!
//! let force: Newtons = MegaPascals(355.0) * SqMm(2860.0);
//! assert_eq!(force.0, 1_015_300.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

// ============================================================================
// Section Properties
// ============================================================================

/// Area in square millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqMm(pub f64);

/// Section modulus in millimeters^3
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mm3(pub f64);

/// Moment of inertia or torsional constant in millimeters^4
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mm4(pub f64);

/// Warping constant in millimeters^6
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mm6(pub f64);

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MegaPascals(pub f64);

// ============================================================================
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in newton-millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMillimeters(pub f64);

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

        impl Mul<$type> for f64 {
            type Output = $type;
            fn mul(self, rhs: $type) -> Self::Output {
                <$type>::new(self * rhs.0)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        /// Ratio of two values of the same dimension
        impl Div for $type {
            type Output = f64;
            fn div(self, rhs: Self) -> Self::Output {
                self.0 / rhs.0
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

            /// Smaller of two values
            pub fn min(self, other: Self) -> Self {
                Self(self.0.min(other.0))
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(Meters);
impl_arithmetic!(SqMm);
impl_arithmetic!(Mm3);
impl_arithmetic!(Mm4);
impl_arithmetic!(Mm6);
impl_arithmetic!(MegaPascals);
impl_arithmetic!(Newtons);
impl_arithmetic!(NewtonMillimeters);

// ============================================================================
// Cross-Dimension Products
// ============================================================================

/// Force = stress × area
impl Mul<SqMm> for MegaPascals {
    type Output = Newtons;
    fn mul(self, rhs: SqMm) -> Self::Output {
        Newtons(self.0 * rhs.0)
    }
}

impl Mul<MegaPascals> for SqMm {
    type Output = Newtons;
    fn mul(self, rhs: MegaPascals) -> Self::Output {
        Newtons(self.0 * rhs.0)
    }
}

/// Moment = stress × section modulus
impl Mul<Mm3> for MegaPascals {
    type Output = NewtonMillimeters;
    fn mul(self, rhs: Mm3) -> Self::Output {
        NewtonMillimeters(self.0 * rhs.0)
    }
}

impl Mul<MegaPascals> for Mm3 {
    type Output = NewtonMillimeters;
    fn mul(self, rhs: MegaPascals) -> Self::Output {
        NewtonMillimeters(self.0 * rhs.0)
    }
}

/// Area = length × length
impl Mul for Millimeters {
    type Output = SqMm;
    fn mul(self, rhs: Millimeters) -> Self::Output {
        SqMm(self.0 * rhs.0)
    }
}
