//! # Flexure Limit States (AISC 360-16 Chapter F)
//!
//! Doubly symmetric I-shapes bent about either principal axis.
//!
//! ## Yielding (F2-1, F6-1)
//!
//! ```text
//! Major axis:  Mn = Mp = Fy × Zx
//! Minor axis:  Mn = min(Fy × Zy, 1.6 × Fy × Sy)
//! ```
//!
//! ## Lateral-Torsional Buckling (F2-2 .. F2-6)
//!
//! ```text
//! Lp  = 1.76 ry √(E/Fy)
//! rts = √(√(Iy Cw) / Sx)
//! Lr  = 1.95 rts E/(0.7Fy) √(Jc/(Sx ho) + √((Jc/(Sx ho))² + 6.76 (0.7Fy/E)²))
//!
//! Lb ≤ Lp:       not applicable (yielding governs)
//! Lp < Lb ≤ Lr:  Mn = min(Cb [Mp − (Mp − 0.7 Fy Sx)(Lb − Lp)/(Lr − Lp)], Mp)
//! Lb > Lr:       Mn = min(Fcr Sx, Mp)
//!                Fcr = Cb π²E/(Lb/rts)² √(1 + 0.078 Jc/(Sx ho) (Lb/rts)²)
//! ```
//!
//! ## Flange Local Buckling (F3-1, F3-2, F6-2, F6-3)
//!
//! ```text
//! Non-compact:  Mn = Mp − (Mp − 0.7 Fy S)(λ − λpf)/(λrf − λpf)
//! Slender:      Mn = 0.9 E kc Sx / λ²     (major axis)
//!               Mn = 0.69 E Sy / λ²       (minor axis)
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::CalculationMemory;
use crate::criteria::{aisc_ref, DesignType, SafetyFactors, Strength};
use crate::slenderness::{flexural_slenderness, FlexuralSlenderness};
use crate::units::{MegaPascals, Millimeters, Mm3, Mm4, Mm6, NewtonMillimeters};

/// Principal bending axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BendingAxis {
    Major,
    Minor,
}

// ============================================================================
// Yielding
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YieldingMomentMemory {
    pub reference: &'static str,
    pub plastic_section_modulus: Mm3,
    pub yield_stress: MegaPascals,
    pub nominal_strength: NewtonMillimeters,
    pub design_strength: NewtonMillimeters,
}

/// Plastic moment about the major axis (F2.1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldingMoment {
    pub plastic_section_modulus: Mm3,
    pub yield_stress: MegaPascals,
    pub design_type: DesignType,
    pub factors: SafetyFactors,
}

impl Strength for YieldingMoment {
    type Output = NewtonMillimeters;

    fn nominal_strength(&self) -> NewtonMillimeters {
        self.plastic_section_modulus * self.yield_stress
    }

    fn design_type(&self) -> DesignType {
        self.design_type
    }

    fn safety_factors(&self) -> SafetyFactors {
        self.factors
    }

    fn calculation_memory(&self) -> CalculationMemory {
        CalculationMemory::YieldingMoment(YieldingMomentMemory {
            reference: aisc_ref::F2_1,
            plastic_section_modulus: self.plastic_section_modulus,
            yield_stress: self.yield_stress,
            nominal_strength: self.nominal_strength(),
            design_strength: self.design_strength(),
        })
    }
}

/// Minor-axis plastic moment, min(Fy·Zy, 1.6·Fy·Sy)
pub fn minor_axis_plastic_moment(yield_stress: MegaPascals, plastic: Mm3, elastic: Mm3) -> NewtonMillimeters {
    (yield_stress * plastic).min(yield_stress * elastic * 1.6)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinorAxisYieldingMemory {
    pub reference: &'static str,
    pub plastic_section_modulus: Mm3,
    pub elastic_section_modulus: Mm3,
    pub yield_stress: MegaPascals,
    pub plastic_moment: NewtonMillimeters,
    pub elastic_limit_moment: NewtonMillimeters,
    pub nominal_strength: NewtonMillimeters,
    pub design_strength: NewtonMillimeters,
}

/// Yielding about the minor axis (F6.1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinorAxisYielding {
    pub plastic_section_modulus: Mm3,
    pub elastic_section_modulus: Mm3,
    pub yield_stress: MegaPascals,
    pub design_type: DesignType,
    pub factors: SafetyFactors,
}

impl Strength for MinorAxisYielding {
    type Output = NewtonMillimeters;

    fn nominal_strength(&self) -> NewtonMillimeters {
        minor_axis_plastic_moment(self.yield_stress, self.plastic_section_modulus, self.elastic_section_modulus)
    }

    fn design_type(&self) -> DesignType {
        self.design_type
    }

    fn safety_factors(&self) -> SafetyFactors {
        self.factors
    }

    fn calculation_memory(&self) -> CalculationMemory {
        CalculationMemory::MinorAxisYielding(MinorAxisYieldingMemory {
            reference: aisc_ref::F6_1,
            plastic_section_modulus: self.plastic_section_modulus,
            elastic_section_modulus: self.elastic_section_modulus,
            yield_stress: self.yield_stress,
            plastic_moment: self.yield_stress * self.plastic_section_modulus,
            elastic_limit_moment: self.yield_stress * self.elastic_section_modulus * 1.6,
            nominal_strength: self.nominal_strength(),
            design_strength: self.design_strength(),
        })
    }
}

// ============================================================================
// Lateral-Torsional Buckling
// ============================================================================

/// Which F2 equation the unbraced length falls under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LtbRegime {
    /// Lb ≤ Lp
    NotApplicable,
    /// Lp < Lb ≤ Lr (F2-2)
    Inelastic,
    /// Lb > Lr (F2-3)
    Elastic,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LateralTorsionalBucklingMemory {
    pub reference: &'static str,
    pub regime: LtbRegime,
    pub length: Millimeters,
    pub modification_factor: f64,
    pub coefficient_c: f64,
    pub plastic_moment: NewtonMillimeters,
    pub limiting_yield_length: Millimeters,
    pub effective_radius_of_gyration: Millimeters,
    pub limiting_buckling_length: Millimeters,
    /// F2-2 value, only in the inelastic range
    pub inelastic_strength: Option<NewtonMillimeters>,
    /// F2-4 stress, only in the elastic range
    pub critical_stress: Option<MegaPascals>,
    pub nominal_strength: NewtonMillimeters,
    pub design_strength: NewtonMillimeters,
}

/// Lateral-torsional buckling of a compact doubly symmetric I-shape (F2.2).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LateralTorsionalBuckling {
    /// Length between braces Lb
    pub length: Millimeters,
    pub modulus: MegaPascals,
    pub yield_stress: MegaPascals,
    pub plastic_section_modulus: Mm3,
    pub elastic_section_modulus: Mm3,
    pub distance_between_flange_centroids: Millimeters,
    pub torsional_constant: Mm4,
    pub warping_constant: Mm6,
    /// Minor-axis radius of gyration ry
    pub radius_of_gyration: Millimeters,
    pub minor_axis_inertia: Mm4,
    /// Cb
    pub modification_factor: f64,
    /// c, 1.0 for doubly symmetric I-shapes
    pub coefficient_c: f64,
    pub design_type: DesignType,
    pub factors: SafetyFactors,
}

impl LateralTorsionalBuckling {
    pub fn plastic_moment(&self) -> NewtonMillimeters {
        self.plastic_section_modulus * self.yield_stress
    }

    /// Lp (F2-5)
    pub fn limiting_yield_length(&self) -> Millimeters {
        self.radius_of_gyration * (1.76 * (self.modulus / self.yield_stress).sqrt())
    }

    /// rts (F2-7)
    pub fn effective_radius_of_gyration(&self) -> Millimeters {
        let root = (self.minor_axis_inertia.value() * self.warping_constant.value()).sqrt();
        Millimeters((root / self.elastic_section_modulus.value()).sqrt())
    }

    /// Jc / (Sx ho)
    fn torsion_ratio(&self) -> f64 {
        self.torsional_constant.value() * self.coefficient_c
            / (self.elastic_section_modulus.value() * self.distance_between_flange_centroids.value())
    }

    /// Lr (F2-6)
    pub fn limiting_buckling_length(&self) -> Millimeters {
        let ratio = self.torsion_ratio();
        let stress_ratio = 0.7 * (self.yield_stress / self.modulus);
        let inner_root = (ratio.powi(2) + 6.76 * stress_ratio.powi(2)).sqrt();
        let outer_root = (ratio + inner_root).sqrt();
        self.effective_radius_of_gyration() * (1.95 / stress_ratio * outer_root)
    }

    pub fn regime(&self) -> LtbRegime {
        if self.length <= self.limiting_yield_length() {
            LtbRegime::NotApplicable
        } else if self.length <= self.limiting_buckling_length() {
            LtbRegime::Inelastic
        } else {
            LtbRegime::Elastic
        }
    }

    /// F2-2, capped at Mp
    pub fn inelastic_strength(&self) -> NewtonMillimeters {
        let mp = self.plastic_moment();
        let lp = self.limiting_yield_length();
        let length_factor = (self.length - lp) / (self.limiting_buckling_length() - lp);
        let reduction = mp - self.elastic_section_modulus * self.yield_stress * 0.7;
        ((mp - reduction * length_factor) * self.modification_factor).min(mp)
    }

    /// Fcr (F2-4)
    pub fn critical_stress(&self) -> MegaPascals {
        let ratio = (self.length / self.effective_radius_of_gyration()).powi(2);
        let first_term = self.modulus * (self.modification_factor * PI.powi(2) / ratio);
        let second_term = (1.0 + 0.078 * self.torsion_ratio() * ratio).sqrt();
        first_term * second_term
    }

    /// F2-3, capped at Mp
    pub fn elastic_strength(&self) -> NewtonMillimeters {
        (self.critical_stress() * self.elastic_section_modulus).min(self.plastic_moment())
    }
}

impl Strength for LateralTorsionalBuckling {
    type Output = NewtonMillimeters;

    /// Mp when the member is braced closer than Lp
    fn nominal_strength(&self) -> NewtonMillimeters {
        match self.regime() {
            LtbRegime::NotApplicable => self.plastic_moment(),
            LtbRegime::Inelastic => self.inelastic_strength(),
            LtbRegime::Elastic => self.elastic_strength(),
        }
    }

    fn design_type(&self) -> DesignType {
        self.design_type
    }

    fn safety_factors(&self) -> SafetyFactors {
        self.factors
    }

    fn is_applicable(&self) -> bool {
        self.regime() != LtbRegime::NotApplicable
    }

    fn calculation_memory(&self) -> CalculationMemory {
        let regime = self.regime();
        CalculationMemory::LateralTorsionalBuckling(LateralTorsionalBucklingMemory {
            reference: aisc_ref::F2_2,
            regime,
            length: self.length,
            modification_factor: self.modification_factor,
            coefficient_c: self.coefficient_c,
            plastic_moment: self.plastic_moment(),
            limiting_yield_length: self.limiting_yield_length(),
            effective_radius_of_gyration: self.effective_radius_of_gyration(),
            limiting_buckling_length: self.limiting_buckling_length(),
            inelastic_strength: (regime == LtbRegime::Inelastic).then(|| self.inelastic_strength()),
            critical_stress: (regime == LtbRegime::Elastic).then(|| self.critical_stress()),
            nominal_strength: self.nominal_strength(),
            design_strength: self.design_strength(),
        })
    }
}

// ============================================================================
// Flange Local Buckling
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlangeLocalBucklingMemory {
    pub reference: &'static str,
    pub axis: BendingAxis,
    pub flange_ratio: f64,
    pub compact_limit: f64,
    pub slender_limit: f64,
    pub slenderness: FlexuralSlenderness,
    pub plastic_moment: NewtonMillimeters,
    pub nominal_strength: NewtonMillimeters,
    pub design_strength: NewtonMillimeters,
}

/// Local buckling of the compression flange (F3.2 major axis, F6.2 minor axis).
///
/// Only applicable to non-compact and slender flanges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlangeLocalBuckling {
    pub axis: BendingAxis,
    /// bf/2tf
    pub flange_ratio: f64,
    pub compact_limit: f64,
    pub slender_limit: f64,
    /// Only used by the slender major-axis equation
    pub kc_coefficient: f64,
    pub modulus: MegaPascals,
    pub yield_stress: MegaPascals,
    /// Zx or Zy
    pub plastic_section_modulus: Mm3,
    /// Sx or Sy
    pub elastic_section_modulus: Mm3,
    pub design_type: DesignType,
    pub factors: SafetyFactors,
}

impl FlangeLocalBuckling {
    pub fn slenderness(&self) -> FlexuralSlenderness {
        flexural_slenderness(self.flange_ratio, self.compact_limit, self.slender_limit)
    }

    pub fn plastic_moment(&self) -> NewtonMillimeters {
        match self.axis {
            BendingAxis::Major => self.plastic_section_modulus * self.yield_stress,
            BendingAxis::Minor => minor_axis_plastic_moment(
                self.yield_stress,
                self.plastic_section_modulus,
                self.elastic_section_modulus,
            ),
        }
    }

    fn non_compact_strength(&self) -> NewtonMillimeters {
        let mp = self.plastic_moment();
        let ratio = (self.flange_ratio - self.compact_limit) / (self.slender_limit - self.compact_limit);
        mp - (mp - self.yield_stress * self.elastic_section_modulus * 0.7) * ratio
    }

    fn slender_strength(&self) -> NewtonMillimeters {
        let lambda_squared = self.flange_ratio.powi(2);
        match self.axis {
            BendingAxis::Major => {
                self.modulus * (0.9 * self.kc_coefficient / lambda_squared) * self.elastic_section_modulus
            }
            BendingAxis::Minor => self.modulus * (0.69 / lambda_squared) * self.elastic_section_modulus,
        }
    }
}

impl Strength for FlangeLocalBuckling {
    type Output = NewtonMillimeters;

    fn nominal_strength(&self) -> NewtonMillimeters {
        match self.slenderness() {
            FlexuralSlenderness::Compact => self.plastic_moment(),
            FlexuralSlenderness::NonCompact => self.non_compact_strength(),
            FlexuralSlenderness::Slender => self.slender_strength(),
        }
    }

    fn design_type(&self) -> DesignType {
        self.design_type
    }

    fn safety_factors(&self) -> SafetyFactors {
        self.factors
    }

    fn is_applicable(&self) -> bool {
        !self.slenderness().is_compact()
    }

    fn calculation_memory(&self) -> CalculationMemory {
        CalculationMemory::FlangeLocalBuckling(FlangeLocalBucklingMemory {
            reference: match self.axis {
                BendingAxis::Major => aisc_ref::F3_2,
                BendingAxis::Minor => aisc_ref::F6_2,
            },
            axis: self.axis,
            flange_ratio: self.flange_ratio,
            compact_limit: self.compact_limit,
            slender_limit: self.slender_limit,
            slenderness: self.slenderness(),
            plastic_moment: self.plastic_moment(),
            nominal_strength: self.nominal_strength(),
            design_strength: self.design_strength(),
        })
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// Any flexure limit state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlexureCalculation {
    Yield(YieldingMoment),
    MinorAxisYield(MinorAxisYielding),
    LateralTorsionalBuckling(LateralTorsionalBuckling),
    FlangeLocalBuckling(FlangeLocalBuckling),
}

impl Strength for FlexureCalculation {
    type Output = NewtonMillimeters;

    fn nominal_strength(&self) -> NewtonMillimeters {
        match self {
            FlexureCalculation::Yield(c) => c.nominal_strength(),
            FlexureCalculation::MinorAxisYield(c) => c.nominal_strength(),
            FlexureCalculation::LateralTorsionalBuckling(c) => c.nominal_strength(),
            FlexureCalculation::FlangeLocalBuckling(c) => c.nominal_strength(),
        }
    }

    fn design_type(&self) -> DesignType {
        match self {
            FlexureCalculation::Yield(c) => c.design_type(),
            FlexureCalculation::MinorAxisYield(c) => c.design_type(),
            FlexureCalculation::LateralTorsionalBuckling(c) => c.design_type(),
            FlexureCalculation::FlangeLocalBuckling(c) => c.design_type(),
        }
    }

    fn safety_factors(&self) -> SafetyFactors {
        match self {
            FlexureCalculation::Yield(c) => c.safety_factors(),
            FlexureCalculation::MinorAxisYield(c) => c.safety_factors(),
            FlexureCalculation::LateralTorsionalBuckling(c) => c.safety_factors(),
            FlexureCalculation::FlangeLocalBuckling(c) => c.safety_factors(),
        }
    }

    fn is_applicable(&self) -> bool {
        match self {
            FlexureCalculation::Yield(c) => c.is_applicable(),
            FlexureCalculation::MinorAxisYield(c) => c.is_applicable(),
            FlexureCalculation::LateralTorsionalBuckling(c) => c.is_applicable(),
            FlexureCalculation::FlangeLocalBuckling(c) => c.is_applicable(),
        }
    }

    fn calculation_memory(&self) -> CalculationMemory {
        match self {
            FlexureCalculation::Yield(c) => c.calculation_memory(),
            FlexureCalculation::MinorAxisYield(c) => c.calculation_memory(),
            FlexureCalculation::LateralTorsionalBuckling(c) => c.calculation_memory(),
            FlexureCalculation::FlangeLocalBuckling(c) => c.calculation_memory(),
        }
    }
}
