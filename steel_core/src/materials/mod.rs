//! # Structural Steel Materials
//!
//! Mechanical properties consumed by the strength calculations. A
//! [`Material`] is a plain value: build it once and share it by reference
//! across every section and load case that uses it.
//!
//! ## Grades
//!
//! | Grade         | Fy (MPa) | Fu (MPa) |
//! |---------------|----------|----------|
//! | A36           | 250      | 400      |
//! | A572 Gr. 50   | 345      | 450      |
//! | A992          | 345      | 450      |
//!
//! ## Example
//!
//! ```rust
//! use steel_core::materials::{Material, SteelGrade};
//! use steel_core::units::MegaPascals;
//!
//! let a992 = SteelGrade::A992.material();
//! assert_eq!(a992.yield_strength, MegaPascals(345.0));
//!
//! let custom = Material::steel(MegaPascals(355.0), MegaPascals(500.0));
//! assert!(custom.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::MegaPascals;

/// Modulus of elasticity of structural steel, E (MPa)
pub const STEEL_MODULUS_LINEAR: MegaPascals = MegaPascals(200_000.0);

/// Shear modulus of structural steel, G (MPa)
pub const STEEL_MODULUS_SHEAR: MegaPascals = MegaPascals(77_000.0);

/// Poisson's ratio of structural steel
pub const STEEL_POISSON_RATIO: f64 = 0.3;

/// Isotropic material properties.
///
/// ## JSON Example
///
/// ```json
/// {
///   "modulus_linear": 200000.0,
///   "modulus_shear": 77000.0,
///   "poisson_ratio": 0.3,
///   "yield_strength": 355.0,
///   "ultimate_strength": 500.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// E
    pub modulus_linear: MegaPascals,
    /// G
    pub modulus_shear: MegaPascals,
    pub poisson_ratio: f64,
    /// Fy
    pub yield_strength: MegaPascals,
    /// Fu
    pub ultimate_strength: MegaPascals,
}

impl Material {
    pub fn new(
        modulus_linear: MegaPascals,
        modulus_shear: MegaPascals,
        poisson_ratio: f64,
        yield_strength: MegaPascals,
        ultimate_strength: MegaPascals,
    ) -> Self {
        Material {
            modulus_linear,
            modulus_shear,
            poisson_ratio,
            yield_strength,
            ultimate_strength,
        }
    }

    /// Structural steel with the standard elastic constants
    pub fn steel(yield_strength: MegaPascals, ultimate_strength: MegaPascals) -> Self {
        Material::new(
            STEEL_MODULUS_LINEAR,
            STEEL_MODULUS_SHEAR,
            STEEL_POISSON_RATIO,
            yield_strength,
            ultimate_strength,
        )
    }

    /// Validate material properties
    pub fn validate(&self) -> CalcResult<()> {
        let positive = [
            ("modulus_linear", self.modulus_linear),
            ("modulus_shear", self.modulus_shear),
            ("yield_strength", self.yield_strength),
            ("ultimate_strength", self.ultimate_strength),
        ];
        for (field, value) in positive {
            if !(value.0 > 0.0) || !value.0.is_finite() {
                return Err(CalcError::invalid_input(field, value.0.to_string(), "Must be a positive number"));
            }
        }
        if !(0.0..0.5).contains(&self.poisson_ratio) {
            return Err(CalcError::invalid_input(
                "poisson_ratio",
                self.poisson_ratio.to_string(),
                "Poisson's ratio must be in [0, 0.5)",
            ));
        }
        if self.ultimate_strength < self.yield_strength {
            return Err(CalcError::invalid_input(
                "ultimate_strength",
                self.ultimate_strength.0.to_string(),
                format!("Must not be less than yield strength {}", self.yield_strength.0),
            ));
        }
        Ok(())
    }
}

/// ASTM structural steel grades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelGrade {
    /// ASTM A36
    #[serde(rename = "A36")]
    A36,
    /// ASTM A572 Grade 50
    #[serde(rename = "A572-50")]
    A572Gr50,
    /// ASTM A992 (W-shapes)
    #[serde(rename = "A992")]
    A992,
}

impl SteelGrade {
    /// All grades for iteration
    pub const ALL: [SteelGrade; 3] = [SteelGrade::A36, SteelGrade::A572Gr50, SteelGrade::A992];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SteelGrade::A36 => "ASTM A36",
            SteelGrade::A572Gr50 => "ASTM A572 Gr. 50",
            SteelGrade::A992 => "ASTM A992",
        }
    }

    /// Minimum yield stress Fy
    pub fn yield_strength(&self) -> MegaPascals {
        match self {
            SteelGrade::A36 => MegaPascals(250.0),
            SteelGrade::A572Gr50 | SteelGrade::A992 => MegaPascals(345.0),
        }
    }

    /// Minimum tensile strength Fu
    pub fn ultimate_strength(&self) -> MegaPascals {
        match self {
            SteelGrade::A36 => MegaPascals(400.0),
            SteelGrade::A572Gr50 | SteelGrade::A992 => MegaPascals(450.0),
        }
    }

    pub fn material(&self) -> Material {
        Material::steel(self.yield_strength(), self.ultimate_strength())
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_properties() {
        let a36 = SteelGrade::A36.material();
        assert_eq!(a36.yield_strength, MegaPascals(250.0));
        assert_eq!(a36.ultimate_strength, MegaPascals(400.0));
        assert_eq!(a36.modulus_linear, STEEL_MODULUS_LINEAR);
        for grade in SteelGrade::ALL {
            assert!(grade.material().validate().is_ok());
        }
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut material = Material::steel(MegaPascals(355.0), MegaPascals(500.0));
        assert!(material.validate().is_ok());

        material.ultimate_strength = MegaPascals(300.0);
        let err = material.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let zero_modulus = Material {
            modulus_linear: MegaPascals(0.0),
            ..Material::steel(MegaPascals(355.0), MegaPascals(500.0))
        };
        assert!(zero_modulus.validate().is_err());

        let nan_yield = Material::steel(MegaPascals(f64::NAN), MegaPascals(500.0));
        assert!(nan_yield.validate().is_err());
    }

    #[test]
    fn test_material_json() {
        let json = r#"{
            "modulus_linear": 200000.0,
            "modulus_shear": 77000.0,
            "poisson_ratio": 0.3,
            "yield_strength": 355.0,
            "ultimate_strength": 500.0
        }"#;
        let material: Material = serde_json::from_str(json).unwrap();
        assert_eq!(material, Material::steel(MegaPascals(355.0), MegaPascals(500.0)));
    }

    #[test]
    fn test_grade_serialization() {
        let json = serde_json::to_string(&SteelGrade::A572Gr50).unwrap();
        assert_eq!(json, "\"A572-50\"");
    }
}
