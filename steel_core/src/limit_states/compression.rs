//! # Compression Limit States (AISC 360-16 Chapter E)
//!
//! Flexural buckling (E3) and torsional buckling of doubly symmetric members
//! (E4), for members without slender elements.
//!
//! ## Critical Stress (E3-2, E3-3)
//!
//! ```text
//! Fy/Fe ≤ 2.25:  Fcr = 0.658^(Fy/Fe) × Fy
//! Fy/Fe > 2.25:  Fcr = 0.877 × Fe
//! Pn = Fcr × Ag
//! ```
//!
//! with the elastic buckling stress
//!
//! ```text
//! flexural (E3-4):   Fe = π²E / (KL/r)²
//! torsional (E4-2):  Fe = (π²E·Cw/(KL)² + G·J) / (Ix + Iy)
//! ```

use std::f64::consts::PI;

use serde::Serialize;

use super::CalculationMemory;
use crate::criteria::{aisc_ref, DesignType, SafetyFactors, Strength};
use crate::units::{MegaPascals, Millimeters, Mm4, Mm6, Newtons, SqMm};

/// Fy/Fe above which buckling is elastic
pub const INELASTIC_STRESS_RATIO_LIMIT: f64 = 2.25;

/// Critical stress from the yield stress and the elastic buckling stress.
pub fn critical_stress(yield_stress: MegaPascals, elastic_buckling_stress: MegaPascals) -> MegaPascals {
    let ratio = yield_stress / elastic_buckling_stress;
    if ratio <= INELASTIC_STRESS_RATIO_LIMIT {
        yield_stress * 0.658f64.powf(ratio)
    } else {
        elastic_buckling_stress * 0.877
    }
}

/// Intermediate values of a buckling calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucklingMemory {
    pub reference: &'static str,
    /// KL/r for flexural buckling, absent for torsional buckling
    pub slenderness: Option<f64>,
    pub elastic_buckling_stress: MegaPascals,
    pub critical_stress: MegaPascals,
    pub nominal_strength: Newtons,
    pub design_strength: Newtons,
}

/// Flexural buckling about one principal axis (E3).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlexuralBuckling {
    pub length: Millimeters,
    pub factor_k: f64,
    pub yield_stress: MegaPascals,
    pub modulus_linear: MegaPascals,
    pub gross_area: SqMm,
    pub radius_of_gyration: Millimeters,
    pub design_type: DesignType,
    pub factors: SafetyFactors,
}

impl FlexuralBuckling {
    /// Effective slenderness KL/r
    pub fn slenderness(&self) -> f64 {
        self.length * self.factor_k / self.radius_of_gyration
    }

    pub fn elastic_buckling_stress(&self) -> MegaPascals {
        self.modulus_linear * (PI.powi(2) / self.slenderness().powi(2))
    }

    pub fn critical_stress(&self) -> MegaPascals {
        critical_stress(self.yield_stress, self.elastic_buckling_stress())
    }
}

impl Strength for FlexuralBuckling {
    type Output = Newtons;

    fn nominal_strength(&self) -> Newtons {
        self.critical_stress() * self.gross_area
    }

    fn design_type(&self) -> DesignType {
        self.design_type
    }

    fn safety_factors(&self) -> SafetyFactors {
        self.factors
    }

    fn calculation_memory(&self) -> CalculationMemory {
        CalculationMemory::Buckling(BucklingMemory {
            reference: aisc_ref::E3,
            slenderness: Some(self.slenderness()),
            elastic_buckling_stress: self.elastic_buckling_stress(),
            critical_stress: self.critical_stress(),
            nominal_strength: self.nominal_strength(),
            design_strength: self.design_strength(),
        })
    }
}

/// Torsional buckling of a doubly symmetric member (E4).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorsionalBuckling {
    pub length: Millimeters,
    pub factor_k: f64,
    pub yield_stress: MegaPascals,
    pub modulus_linear: MegaPascals,
    pub modulus_shear: MegaPascals,
    pub gross_area: SqMm,
    pub major_axis_inertia: Mm4,
    pub minor_axis_inertia: Mm4,
    pub torsional_constant: Mm4,
    pub warping_constant: Mm6,
    pub design_type: DesignType,
    pub factors: SafetyFactors,
}

impl TorsionalBuckling {
    pub fn elastic_buckling_stress(&self) -> MegaPascals {
        let effective_length = (self.length * self.factor_k).value();
        let warping = PI.powi(2) * self.modulus_linear.value() * self.warping_constant.value()
            / effective_length.powi(2);
        let torsion = self.modulus_shear.value() * self.torsional_constant.value();
        MegaPascals((warping + torsion) / (self.major_axis_inertia + self.minor_axis_inertia).value())
    }

    pub fn critical_stress(&self) -> MegaPascals {
        critical_stress(self.yield_stress, self.elastic_buckling_stress())
    }
}

impl Strength for TorsionalBuckling {
    type Output = Newtons;

    fn nominal_strength(&self) -> Newtons {
        self.critical_stress() * self.gross_area
    }

    fn design_type(&self) -> DesignType {
        self.design_type
    }

    fn safety_factors(&self) -> SafetyFactors {
        self.factors
    }

    fn calculation_memory(&self) -> CalculationMemory {
        CalculationMemory::Buckling(BucklingMemory {
            reference: aisc_ref::E4,
            slenderness: None,
            elastic_buckling_stress: self.elastic_buckling_stress(),
            critical_stress: self.critical_stress(),
            nominal_strength: self.nominal_strength(),
            design_strength: self.design_strength(),
        })
    }
}

/// Any compression limit state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CompressionCalculation {
    FlexuralBuckling(FlexuralBuckling),
    TorsionalBuckling(TorsionalBuckling),
}

impl CompressionCalculation {
    /// Fcr of the underlying buckling mode
    pub fn critical_stress(&self) -> MegaPascals {
        match self {
            CompressionCalculation::FlexuralBuckling(c) => c.critical_stress(),
            CompressionCalculation::TorsionalBuckling(c) => c.critical_stress(),
        }
    }
}

impl Strength for CompressionCalculation {
    type Output = Newtons;

    fn nominal_strength(&self) -> Newtons {
        match self {
            CompressionCalculation::FlexuralBuckling(c) => c.nominal_strength(),
            CompressionCalculation::TorsionalBuckling(c) => c.nominal_strength(),
        }
    }

    fn design_type(&self) -> DesignType {
        match self {
            CompressionCalculation::FlexuralBuckling(c) => c.design_type(),
            CompressionCalculation::TorsionalBuckling(c) => c.design_type(),
        }
    }

    fn safety_factors(&self) -> SafetyFactors {
        match self {
            CompressionCalculation::FlexuralBuckling(c) => c.safety_factors(),
            CompressionCalculation::TorsionalBuckling(c) => c.safety_factors(),
        }
    }

    fn calculation_memory(&self) -> CalculationMemory {
        match self {
            CompressionCalculation::FlexuralBuckling(c) => c.calculation_memory(),
            CompressionCalculation::TorsionalBuckling(c) => c.calculation_memory(),
        }
    }
}
