//! # Tension Limit States (AISC 360-16 D2)
//!
//! ```text
//! Yield   (D2-1):  Pn = Fy × Ag              Ω = 1.67, φ = 0.90
//! Rupture (D2-2):  Pn = Fu × Ae, Ae = An × U  Ω = 2.00, φ = 0.75
//! ```
//!
//! The two limit states are reduced independently, each with its own
//! factor pair, and only then compared.

use serde::Serialize;

use super::CalculationMemory;
use crate::criteria::{aisc_ref, DesignType, SafetyFactors, Strength};
use crate::units::{MegaPascals, Newtons, SqMm};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TensionYieldMemory {
    pub reference: &'static str,
    pub gross_area: SqMm,
    pub yield_stress: MegaPascals,
    pub nominal_strength: Newtons,
    pub design_strength: Newtons,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TensionRuptureMemory {
    pub reference: &'static str,
    pub net_area: SqMm,
    pub shear_lag_factor: f64,
    pub net_effective_area: SqMm,
    pub ultimate_stress: MegaPascals,
    pub nominal_strength: Newtons,
    pub design_strength: Newtons,
}

/// Tensile yielding in the gross section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TensionYield {
    pub gross_area: SqMm,
    pub yield_stress: MegaPascals,
    pub design_type: DesignType,
    pub factors: SafetyFactors,
}

impl TensionYield {
    pub fn new(gross_area: SqMm, yield_stress: MegaPascals, design_type: DesignType) -> Self {
        TensionYield {
            gross_area,
            yield_stress,
            design_type,
            factors: SafetyFactors::GENERIC,
        }
    }
}

impl Strength for TensionYield {
    type Output = Newtons;

    fn nominal_strength(&self) -> Newtons {
        self.yield_stress * self.gross_area
    }

    fn design_type(&self) -> DesignType {
        self.design_type
    }

    fn safety_factors(&self) -> SafetyFactors {
        self.factors
    }

    fn calculation_memory(&self) -> CalculationMemory {
        CalculationMemory::TensionYield(TensionYieldMemory {
            reference: aisc_ref::D2_A,
            gross_area: self.gross_area,
            yield_stress: self.yield_stress,
            nominal_strength: self.nominal_strength(),
            design_strength: self.design_strength(),
        })
    }
}

/// Tensile rupture in the net section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TensionRupture {
    pub net_area: SqMm,
    pub shear_lag_factor: f64,
    pub ultimate_stress: MegaPascals,
    pub design_type: DesignType,
    pub factors: SafetyFactors,
}

impl TensionRupture {
    pub fn new(net_area: SqMm, shear_lag_factor: f64, ultimate_stress: MegaPascals, design_type: DesignType) -> Self {
        TensionRupture {
            net_area,
            shear_lag_factor,
            ultimate_stress,
            design_type,
            factors: SafetyFactors::TENSION_RUPTURE,
        }
    }

    /// Ae = An × U
    pub fn net_effective_area(&self) -> SqMm {
        self.net_area * self.shear_lag_factor
    }
}

impl Strength for TensionRupture {
    type Output = Newtons;

    fn nominal_strength(&self) -> Newtons {
        self.ultimate_stress * self.net_effective_area()
    }

    fn design_type(&self) -> DesignType {
        self.design_type
    }

    fn safety_factors(&self) -> SafetyFactors {
        self.factors
    }

    fn calculation_memory(&self) -> CalculationMemory {
        CalculationMemory::TensionRupture(TensionRuptureMemory {
            reference: aisc_ref::D2_B,
            net_area: self.net_area,
            shear_lag_factor: self.shear_lag_factor,
            net_effective_area: self.net_effective_area(),
            ultimate_stress: self.ultimate_stress,
            nominal_strength: self.nominal_strength(),
            design_strength: self.design_strength(),
        })
    }
}

/// Any tension limit state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TensionCalculation {
    Yield(TensionYield),
    Rupture(TensionRupture),
}

impl Strength for TensionCalculation {
    type Output = Newtons;

    fn nominal_strength(&self) -> Newtons {
        match self {
            TensionCalculation::Yield(c) => c.nominal_strength(),
            TensionCalculation::Rupture(c) => c.nominal_strength(),
        }
    }

    fn design_type(&self) -> DesignType {
        match self {
            TensionCalculation::Yield(c) => c.design_type(),
            TensionCalculation::Rupture(c) => c.design_type(),
        }
    }

    fn safety_factors(&self) -> SafetyFactors {
        match self {
            TensionCalculation::Yield(c) => c.safety_factors(),
            TensionCalculation::Rupture(c) => c.safety_factors(),
        }
    }

    fn calculation_memory(&self) -> CalculationMemory {
        match self {
            TensionCalculation::Yield(c) => c.calculation_memory(),
            TensionCalculation::Rupture(c) => c.calculation_memory(),
        }
    }
}
