//! # Element Slenderness
//!
//! Width-to-thickness classification of plate elements per AISC 360-16
//! Tables B4.1a (axial compression) and B4.1b (flexure).
//!
//! ## Classification Rules
//!
//! ```text
//! Axial:    λ < λr          → NonSlender,  otherwise Slender
//! Flexure:  λ < λp          → Compact
//!           λp ≤ λ < λr     → NonCompact
//!           λ ≥ λr          → Slender
//! ```
//!
//! Limits scale with `√(E/Fy)`. Built-up flanges are further scaled by
//! `kc = clamp(4/√(h/tw), 0.35, 0.76)`.
//!
//! The minor-axis flange classification always uses the rolled flange
//! limits, whatever the construction type.
//!
//! ## Example
//!
//! ```rust
//! use steel_core::sections::ConstructionType;
//! use steel_core::slenderness::{DoublySymmetricSlendernessCalculation, FlexuralSlenderness};
//! use steel_core::units::MegaPascals;
//!
//! let calc = DoublySymmetricSlendernessCalculation {
//!     construction: ConstructionType::Rolled,
//!     web_ratio: 21.6,
//!     flange_ratio: 11.5,
//!     modulus_linear: MegaPascals(200_000.0),
//!     yield_strength: MegaPascals(355.0),
//! };
//! let slenderness = calc.slenderness();
//! assert_eq!(slenderness.web_flexure_major_axis, FlexuralSlenderness::Compact);
//! assert_eq!(slenderness.flange_flexure_major_axis, FlexuralSlenderness::NonCompact);
//! ```

use serde::{Deserialize, Serialize};

use crate::criteria::aisc_ref;
use crate::errors::{CalcError, CalcResult};
use crate::sections::ConstructionType;
use crate::units::MegaPascals;

// ============================================================================
// Categories
// ============================================================================

/// Element category under axial compression (Table B4.1a)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AxialSlenderness {
    NonSlender,
    Slender,
}

/// Element category under flexure (Table B4.1b)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlexuralSlenderness {
    Compact,
    NonCompact,
    Slender,
}

impl FlexuralSlenderness {
    /// Check if the element reaches the plastic moment before local buckling
    pub fn is_compact(&self) -> bool {
        matches!(self, FlexuralSlenderness::Compact)
    }
}

/// Classify a ratio against a single slender limit.
pub fn axial_slenderness(ratio: f64, limit: f64) -> AxialSlenderness {
    if ratio < limit {
        AxialSlenderness::NonSlender
    } else {
        AxialSlenderness::Slender
    }
}

/// Classify a ratio against ordered compact and slender limits.
pub fn flexural_slenderness(ratio: f64, compact_limit: f64, slender_limit: f64) -> FlexuralSlenderness {
    if ratio < compact_limit {
        FlexuralSlenderness::Compact
    } else if ratio < slender_limit {
        FlexuralSlenderness::NonCompact
    } else {
        FlexuralSlenderness::Slender
    }
}

// ============================================================================
// Limits
// ============================================================================

fn root_modulus_ratio(modulus_linear: MegaPascals, yield_strength: MegaPascals) -> f64 {
    (modulus_linear / yield_strength).sqrt()
}

/// Flange local buckling coefficient kc (Table B4.1a note [a])
pub fn kc_coefficient(web_ratio: f64) -> f64 {
    (4.0 / web_ratio.sqrt()).clamp(0.35, 0.76)
}

/// Table B4.1a case 1: flanges of rolled I-shapes
pub fn axial_rolled_flange_limit(e: MegaPascals, fy: MegaPascals) -> f64 {
    0.56 * root_modulus_ratio(e, fy)
}

/// Table B4.1a case 2: flanges of built-up I-shapes
pub fn axial_built_up_flange_limit(e: MegaPascals, fy: MegaPascals, kc: f64) -> f64 {
    0.64 * root_modulus_ratio(e * kc, fy)
}

/// Table B4.1a case 5: webs of doubly symmetric I-shapes
pub fn axial_web_limit(e: MegaPascals, fy: MegaPascals) -> f64 {
    1.49 * root_modulus_ratio(e, fy)
}

/// Table B4.1b cases 10 and 11: λp of I-shape flanges
pub fn flexural_flange_compact_limit(e: MegaPascals, fy: MegaPascals) -> f64 {
    0.38 * root_modulus_ratio(e, fy)
}

/// Table B4.1b case 10: λr of rolled I-shape flanges
pub fn flexural_rolled_flange_slender_limit(e: MegaPascals, fy: MegaPascals) -> f64 {
    root_modulus_ratio(e, fy)
}

/// Table B4.1b case 11: λr of built-up I-shape flanges
pub fn flexural_built_up_flange_slender_limit(e: MegaPascals, fy: MegaPascals, kc: f64) -> f64 {
    0.95 * root_modulus_ratio(e * kc, fy)
}

/// Table B4.1b case 15: λp of doubly symmetric I-shape webs
pub fn flexural_web_compact_limit(e: MegaPascals, fy: MegaPascals) -> f64 {
    3.76 * root_modulus_ratio(e, fy)
}

/// Table B4.1b case 15: λr of doubly symmetric I-shape webs
pub fn flexural_web_slender_limit(e: MegaPascals, fy: MegaPascals) -> f64 {
    5.70 * root_modulus_ratio(e, fy)
}

/// Stress-dependent slender check of a compression element.
///
/// An element whose ratio exceeds `λr·√(Fy/Fcr)` needs the effective width
/// reduction of E7, which is not implemented.
pub fn check_axial_effective_width(
    element: &str,
    ratio: f64,
    limit: f64,
    yield_stress: MegaPascals,
    critical_stress: MegaPascals,
) -> CalcResult<()> {
    let refined_limit = limit * (yield_stress / critical_stress).sqrt();
    if ratio > refined_limit {
        return Err(CalcError::not_implemented(
            aisc_ref::E7,
            format!(
                "{} ratio {:.3} exceeds {:.3}; slender element reduction is not implemented",
                element, ratio, refined_limit
            ),
        ));
    }
    Ok(())
}

// ============================================================================
// Doubly Symmetric I-Shape
// ============================================================================

/// The five element classifications of a doubly symmetric I-shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoublySymmetricSlenderness {
    pub web_axial: AxialSlenderness,
    pub web_flexure_major_axis: FlexuralSlenderness,
    pub flange_axial: AxialSlenderness,
    pub flange_flexure_major_axis: FlexuralSlenderness,
    pub flange_flexure_minor_axis: FlexuralSlenderness,
}

/// Every ratio, limit and category behind a [`DoublySymmetricSlenderness`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlendernessMemory {
    pub reference_axial: &'static str,
    pub reference_flexure: &'static str,
    pub web_ratio: f64,
    pub flange_ratio: f64,
    pub kc_coefficient: f64,
    pub web_axial_slender_limit: f64,
    pub web_axial_slenderness: AxialSlenderness,
    pub web_flexural_compact_limit: f64,
    pub web_flexural_slender_limit: f64,
    pub web_flexural_slenderness: FlexuralSlenderness,
    pub flange_axial_slender_limit: f64,
    pub flange_axial_slenderness: AxialSlenderness,
    pub flange_flexural_major_axis_compact_limit: f64,
    pub flange_flexural_major_axis_slender_limit: f64,
    pub flange_flexural_major_axis_slenderness: FlexuralSlenderness,
    pub flange_flexural_minor_axis_compact_limit: f64,
    pub flange_flexural_minor_axis_slender_limit: f64,
    pub flange_flexural_minor_axis_slenderness: FlexuralSlenderness,
}

/// Slenderness inputs of a doubly symmetric I-shape.
///
/// `web_ratio` is h/tw and `flange_ratio` is bf/2tf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoublySymmetricSlendernessCalculation {
    pub construction: ConstructionType,
    pub web_ratio: f64,
    pub flange_ratio: f64,
    pub modulus_linear: MegaPascals,
    pub yield_strength: MegaPascals,
}

impl DoublySymmetricSlendernessCalculation {
    pub fn kc_coefficient(&self) -> f64 {
        kc_coefficient(self.web_ratio)
    }

    pub fn web_axial_limit(&self) -> f64 {
        axial_web_limit(self.modulus_linear, self.yield_strength)
    }

    pub fn flange_axial_limit(&self) -> f64 {
        match self.construction {
            ConstructionType::Rolled => axial_rolled_flange_limit(self.modulus_linear, self.yield_strength),
            ConstructionType::BuiltUp => {
                axial_built_up_flange_limit(self.modulus_linear, self.yield_strength, self.kc_coefficient())
            }
        }
    }

    pub fn web_flexural_compact_limit(&self) -> f64 {
        flexural_web_compact_limit(self.modulus_linear, self.yield_strength)
    }

    pub fn web_flexural_slender_limit(&self) -> f64 {
        flexural_web_slender_limit(self.modulus_linear, self.yield_strength)
    }

    /// λp of the flange; the same for rolled and built-up shapes
    pub fn flange_flexural_compact_limit(&self) -> f64 {
        flexural_flange_compact_limit(self.modulus_linear, self.yield_strength)
    }

    pub fn flange_flexural_slender_limit(&self) -> f64 {
        match self.construction {
            ConstructionType::Rolled => flexural_rolled_flange_slender_limit(self.modulus_linear, self.yield_strength),
            ConstructionType::BuiltUp => {
                flexural_built_up_flange_slender_limit(self.modulus_linear, self.yield_strength, self.kc_coefficient())
            }
        }
    }

    pub fn flange_minor_axis_compact_limit(&self) -> f64 {
        flexural_flange_compact_limit(self.modulus_linear, self.yield_strength)
    }

    pub fn flange_minor_axis_slender_limit(&self) -> f64 {
        flexural_rolled_flange_slender_limit(self.modulus_linear, self.yield_strength)
    }

    pub fn slenderness(&self) -> DoublySymmetricSlenderness {
        DoublySymmetricSlenderness {
            web_axial: axial_slenderness(self.web_ratio, self.web_axial_limit()),
            web_flexure_major_axis: flexural_slenderness(
                self.web_ratio,
                self.web_flexural_compact_limit(),
                self.web_flexural_slender_limit(),
            ),
            flange_axial: axial_slenderness(self.flange_ratio, self.flange_axial_limit()),
            flange_flexure_major_axis: flexural_slenderness(
                self.flange_ratio,
                self.flange_flexural_compact_limit(),
                self.flange_flexural_slender_limit(),
            ),
            flange_flexure_minor_axis: flexural_slenderness(
                self.flange_ratio,
                self.flange_minor_axis_compact_limit(),
                self.flange_minor_axis_slender_limit(),
            ),
        }
    }

    pub fn calculation_memory(&self) -> SlendernessMemory {
        let slenderness = self.slenderness();
        SlendernessMemory {
            reference_axial: aisc_ref::TABLE_B4_1A,
            reference_flexure: aisc_ref::TABLE_B4_1B,
            web_ratio: self.web_ratio,
            flange_ratio: self.flange_ratio,
            kc_coefficient: self.kc_coefficient(),
            web_axial_slender_limit: self.web_axial_limit(),
            web_axial_slenderness: slenderness.web_axial,
            web_flexural_compact_limit: self.web_flexural_compact_limit(),
            web_flexural_slender_limit: self.web_flexural_slender_limit(),
            web_flexural_slenderness: slenderness.web_flexure_major_axis,
            flange_axial_slender_limit: self.flange_axial_limit(),
            flange_axial_slenderness: slenderness.flange_axial,
            flange_flexural_major_axis_compact_limit: self.flange_flexural_compact_limit(),
            flange_flexural_major_axis_slender_limit: self.flange_flexural_slender_limit(),
            flange_flexural_major_axis_slenderness: slenderness.flange_flexure_major_axis,
            flange_flexural_minor_axis_compact_limit: self.flange_minor_axis_compact_limit(),
            flange_flexural_minor_axis_slender_limit: self.flange_minor_axis_slender_limit(),
            flange_flexural_minor_axis_slenderness: slenderness.flange_flexure_minor_axis,
        }
    }

    /// Refined E7 check of both elements for a member buckling at `critical_stress`
    pub fn check_compression_elements(&self, critical_stress: MegaPascals) -> CalcResult<()> {
        check_axial_effective_width(
            "flange",
            self.flange_ratio,
            self.flange_axial_limit(),
            self.yield_strength,
            critical_stress,
        )?;
        check_axial_effective_width(
            "web",
            self.web_ratio,
            self.web_axial_limit(),
            self.yield_strength,
            critical_stress,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn w6x15(construction: ConstructionType) -> DoublySymmetricSlendernessCalculation {
        DoublySymmetricSlendernessCalculation {
            construction,
            web_ratio: 21.6,
            flange_ratio: 11.5,
            modulus_linear: MegaPascals(200_000.0),
            yield_strength: MegaPascals(355.0),
        }
    }

    #[test]
    fn test_rolled_w6x15_limits() {
        let calc = w6x15(ConstructionType::Rolled);
        assert_relative_eq!(calc.web_axial_limit(), 35.366, max_relative = 1e-4);
        assert_relative_eq!(calc.flange_axial_limit(), 13.292, max_relative = 1e-4);
        assert_relative_eq!(calc.flange_flexural_compact_limit(), 9.0195, max_relative = 1e-4);
        assert_relative_eq!(calc.flange_flexural_slender_limit(), 23.7356, max_relative = 1e-4);
        assert_relative_eq!(calc.web_flexural_compact_limit(), 89.246, max_relative = 1e-4);
        assert_relative_eq!(calc.web_flexural_slender_limit(), 135.293, max_relative = 1e-4);
    }

    #[test]
    fn test_rolled_w6x15_classification() {
        let s = w6x15(ConstructionType::Rolled).slenderness();
        assert_eq!(s.web_axial, AxialSlenderness::NonSlender);
        assert_eq!(s.web_flexure_major_axis, FlexuralSlenderness::Compact);
        assert_eq!(s.flange_axial, AxialSlenderness::NonSlender);
        assert_eq!(s.flange_flexure_major_axis, FlexuralSlenderness::NonCompact);
        assert_eq!(s.flange_flexure_minor_axis, FlexuralSlenderness::NonCompact);
    }

    #[test]
    fn test_kc_coefficient_bounds() {
        assert_relative_eq!(kc_coefficient(4.0), 0.76);
        assert_relative_eq!(kc_coefficient(1000.0), 0.35);
        assert_relative_eq!(kc_coefficient(64.0), 0.5);
    }

    #[test]
    fn test_built_up_uses_kc() {
        let calc = w6x15(ConstructionType::BuiltUp);
        let kc = kc_coefficient(21.6);
        let root = (200_000.0f64 / 355.0).sqrt();
        assert_relative_eq!(calc.flange_axial_limit(), 0.64 * (kc * 200_000.0 / 355.0).sqrt());
        assert_relative_eq!(calc.flange_flexural_slender_limit(), 0.95 * (kc * 200_000.0 / 355.0).sqrt());
        // Minor axis keeps the rolled limits
        assert_relative_eq!(calc.flange_minor_axis_slender_limit(), root);
        assert_relative_eq!(calc.flange_minor_axis_compact_limit(), 0.38 * root);
    }

    #[test]
    fn test_boundaries_are_exclusive_on_lower_side() {
        assert_eq!(flexural_slenderness(9.0, 9.0, 23.0), FlexuralSlenderness::NonCompact);
        assert_eq!(flexural_slenderness(23.0, 9.0, 23.0), FlexuralSlenderness::Slender);
        assert_eq!(flexural_slenderness(8.999, 9.0, 23.0), FlexuralSlenderness::Compact);
        assert_eq!(axial_slenderness(13.0, 13.0), AxialSlenderness::Slender);
        assert_eq!(axial_slenderness(12.9, 13.0), AxialSlenderness::NonSlender);
    }

    #[test]
    fn test_effective_width_check() {
        let fy = MegaPascals(355.0);
        assert!(check_axial_effective_width("flange", 11.5, 13.292, fy, MegaPascals(300.0)).is_ok());
        // Low critical stress relaxes the limit, high ratio still trips it
        let err = check_axial_effective_width("web", 60.0, 35.366, fy, MegaPascals(300.0)).unwrap_err();
        assert!(err.is_not_implemented());
    }

    #[test]
    fn test_memory_serialization() {
        let memory = w6x15(ConstructionType::Rolled).calculation_memory();
        let json = serde_json::to_string(&memory).unwrap();
        assert!(json.contains("\"web_flexural_slenderness\":\"COMPACT\""));
        assert!(json.contains("\"flange_axial_slenderness\":\"NON_SLENDER\""));
    }
}
