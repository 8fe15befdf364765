//! # Shear Limit States (AISC 360-16 Chapter G)
//!
//! ## Web Shear (G2.1)
//!
//! ```text
//! Vn = 0.6 × Fy × Aw × Cv1           Aw = d × tw
//!
//! rolled, h/tw ≤ 2.24√(E/Fy):   Cv1 = 1.0   Ω = 1.50, φ = 1.00
//! h/tw ≤ 1.10√(kv E/Fy):        Cv1 = 1.0
//! otherwise:                    Cv1 = 1.10√(kv E/Fy) / (h/tw)
//! ```
//!
//! ## Minor-Axis Shear (G6)
//!
//! ```text
//! Vn = 0.6 × Fy × Aw × Cv2           Aw = 2 × bf × tf, kv = 1.2, λ = bf/2tf
//!
//! λ ≤ 1.10√(kv E/Fy):           Cv2 = 1.0
//! λ ≤ 1.37√(kv E/Fy):           Cv2 = 1.10√(kv E/Fy) / λ
//! otherwise:                    Cv2 = 1.51 kv E / (λ² Fy)
//! ```

use serde::Serialize;

use super::CalculationMemory;
use crate::criteria::{aisc_ref, DesignType, SafetyFactors, Strength};
use crate::sections::ConstructionType;
use crate::units::{MegaPascals, Newtons, SqMm};

/// Web plate buckling coefficient for webs without transverse stiffeners
pub const WEB_PLATE_BUCKLING_COEFFICIENT: f64 = 5.34;

/// Plate buckling coefficient for flanges in minor-axis shear
pub const FLANGE_PLATE_BUCKLING_COEFFICIENT: f64 = 1.2;

fn shear_strength(yield_stress: MegaPascals, area: SqMm, coefficient: f64) -> Newtons {
    yield_stress * area * (0.6 * coefficient)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebShearMemory {
    pub reference: &'static str,
    pub web_ratio: f64,
    pub web_area: SqMm,
    pub plate_buckling_coefficient: f64,
    pub rolled_exception: bool,
    pub web_shear_coefficient: f64,
    pub safety_factors: SafetyFactors,
    pub nominal_strength: Newtons,
    pub design_strength: Newtons,
}

/// Shear yielding and buckling of an unstiffened I-shape web.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WebShear {
    pub construction: ConstructionType,
    /// h/tw
    pub web_ratio: f64,
    /// d × tw
    pub web_area: SqMm,
    pub yield_stress: MegaPascals,
    pub modulus: MegaPascals,
    pub plate_buckling_coefficient: f64,
    pub design_type: DesignType,
    pub factors: SafetyFactors,
    /// Factors of G2.1(a), used when the rolled-shape exception applies
    pub rolled_factors: SafetyFactors,
}

impl WebShear {
    pub fn new(
        construction: ConstructionType,
        web_ratio: f64,
        web_area: SqMm,
        yield_stress: MegaPascals,
        modulus: MegaPascals,
        design_type: DesignType,
    ) -> Self {
        WebShear {
            construction,
            web_ratio,
            web_area,
            yield_stress,
            modulus,
            plate_buckling_coefficient: WEB_PLATE_BUCKLING_COEFFICIENT,
            design_type,
            factors: SafetyFactors::GENERIC,
            rolled_factors: SafetyFactors::ROLLED_WEB_SHEAR,
        }
    }

    /// G2.1(a): stocky webs of rolled I-shapes
    pub fn rolled_exception(&self) -> bool {
        self.construction == ConstructionType::Rolled
            && self.web_ratio <= 2.24 * (self.modulus / self.yield_stress).sqrt()
    }

    /// Cv1
    pub fn web_shear_coefficient(&self) -> f64 {
        if self.rolled_exception() {
            return 1.0;
        }
        let limit = 1.10 * (self.modulus * self.plate_buckling_coefficient / self.yield_stress).sqrt();
        if self.web_ratio <= limit {
            1.0
        } else {
            limit / self.web_ratio
        }
    }
}

impl Strength for WebShear {
    type Output = Newtons;

    fn nominal_strength(&self) -> Newtons {
        shear_strength(self.yield_stress, self.web_area, self.web_shear_coefficient())
    }

    fn design_type(&self) -> DesignType {
        self.design_type
    }

    fn safety_factors(&self) -> SafetyFactors {
        if self.rolled_exception() {
            self.rolled_factors
        } else {
            self.factors
        }
    }

    fn calculation_memory(&self) -> CalculationMemory {
        CalculationMemory::WebShear(WebShearMemory {
            reference: aisc_ref::G2_1,
            web_ratio: self.web_ratio,
            web_area: self.web_area,
            plate_buckling_coefficient: self.plate_buckling_coefficient,
            rolled_exception: self.rolled_exception(),
            web_shear_coefficient: self.web_shear_coefficient(),
            safety_factors: self.safety_factors(),
            nominal_strength: self.nominal_strength(),
            design_strength: self.design_strength(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlangeShearMemory {
    pub reference: &'static str,
    pub flange_ratio: f64,
    pub shear_area: SqMm,
    pub plate_buckling_coefficient: f64,
    pub web_shear_buckling_coefficient: f64,
    pub nominal_strength: Newtons,
    pub design_strength: Newtons,
}

/// Minor-axis shear carried by both flanges (G6).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlangeShear {
    /// bf/2tf
    pub flange_ratio: f64,
    /// 2 × bf × tf
    pub shear_area: SqMm,
    pub yield_stress: MegaPascals,
    pub modulus: MegaPascals,
    pub plate_buckling_coefficient: f64,
    pub design_type: DesignType,
    pub factors: SafetyFactors,
}

impl FlangeShear {
    pub fn new(
        flange_ratio: f64,
        shear_area: SqMm,
        yield_stress: MegaPascals,
        modulus: MegaPascals,
        design_type: DesignType,
    ) -> Self {
        FlangeShear {
            flange_ratio,
            shear_area,
            yield_stress,
            modulus,
            plate_buckling_coefficient: FLANGE_PLATE_BUCKLING_COEFFICIENT,
            design_type,
            factors: SafetyFactors::GENERIC,
        }
    }

    /// Cv2 (G2-9 .. G2-11)
    pub fn web_shear_buckling_coefficient(&self) -> f64 {
        let root = (self.modulus * self.plate_buckling_coefficient / self.yield_stress).sqrt();
        if self.flange_ratio <= 1.10 * root {
            1.0
        } else if self.flange_ratio <= 1.37 * root {
            1.10 * root / self.flange_ratio
        } else {
            1.51 * self.plate_buckling_coefficient * (self.modulus / self.yield_stress) / self.flange_ratio.powi(2)
        }
    }
}

impl Strength for FlangeShear {
    type Output = Newtons;

    fn nominal_strength(&self) -> Newtons {
        shear_strength(self.yield_stress, self.shear_area, self.web_shear_buckling_coefficient())
    }

    fn design_type(&self) -> DesignType {
        self.design_type
    }

    fn safety_factors(&self) -> SafetyFactors {
        self.factors
    }

    fn calculation_memory(&self) -> CalculationMemory {
        CalculationMemory::FlangeShear(FlangeShearMemory {
            reference: aisc_ref::G6,
            flange_ratio: self.flange_ratio,
            shear_area: self.shear_area,
            plate_buckling_coefficient: self.plate_buckling_coefficient,
            web_shear_buckling_coefficient: self.web_shear_buckling_coefficient(),
            nominal_strength: self.nominal_strength(),
            design_strength: self.design_strength(),
        })
    }
}

/// Any shear limit state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShearCalculation {
    Web(WebShear),
    Flange(FlangeShear),
}

impl Strength for ShearCalculation {
    type Output = Newtons;

    fn nominal_strength(&self) -> Newtons {
        match self {
            ShearCalculation::Web(c) => c.nominal_strength(),
            ShearCalculation::Flange(c) => c.nominal_strength(),
        }
    }

    fn design_type(&self) -> DesignType {
        match self {
            ShearCalculation::Web(c) => c.design_type(),
            ShearCalculation::Flange(c) => c.design_type(),
        }
    }

    fn safety_factors(&self) -> SafetyFactors {
        match self {
            ShearCalculation::Web(c) => c.safety_factors(),
            ShearCalculation::Flange(c) => c.safety_factors(),
        }
    }

    fn calculation_memory(&self) -> CalculationMemory {
        match self {
            ShearCalculation::Web(c) => c.calculation_memory(),
            ShearCalculation::Flange(c) => c.calculation_memory(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn web(construction: ConstructionType, web_ratio: f64, design_type: DesignType) -> WebShear {
        WebShear::new(
            construction,
            web_ratio,
            SqMm(152.0 * 5.84),
            MegaPascals(250.0),
            MegaPascals(200_000.0),
            design_type,
        )
    }

    #[test]
    fn test_rolled_web_shear_w6x15() {
        let calc = web(ConstructionType::Rolled, 21.6, DesignType::Lrfd);
        assert!(calc.rolled_exception());
        assert_eq!(calc.safety_factors(), SafetyFactors::ROLLED_WEB_SHEAR);
        assert_relative_eq!(calc.design_strength().0, 133_152.0, max_relative = 1e-9);
    }

    #[test]
    fn test_built_up_uses_generic_factors() {
        let calc = web(ConstructionType::BuiltUp, 21.6, DesignType::Asd);
        assert!(!calc.rolled_exception());
        assert_relative_eq!(calc.web_shear_coefficient(), 1.0);
        assert_relative_eq!(calc.design_strength().0, 133_152.0 / 1.67, max_relative = 1e-9);
    }

    #[test]
    fn test_slender_web_coefficient() {
        let calc = web(ConstructionType::BuiltUp, 120.0, DesignType::Asd);
        let limit = 1.10 * (5.34 * 200_000.0f64 / 250.0).sqrt();
        assert!(120.0 > limit);
        assert_relative_eq!(calc.web_shear_coefficient(), limit / 120.0, max_relative = 1e-12);
    }

    #[test]
    fn test_flange_shear_stocky() {
        let calc = FlangeShear::new(
            11.5,
            SqMm(2.0 * 152.0 * 6.60),
            MegaPascals(250.0),
            MegaPascals(200_000.0),
            DesignType::Asd,
        );
        assert_relative_eq!(calc.web_shear_buckling_coefficient(), 1.0);
        assert_relative_eq!(calc.nominal_strength().0, 0.6 * 250.0 * 2006.4, max_relative = 1e-12);
    }

    #[test]
    fn test_flange_shear_buckling_ranges() {
        let root = (1.2 * 200_000.0f64 / 250.0).sqrt();
        let make = |ratio: f64| {
            FlangeShear::new(ratio, SqMm(1000.0), MegaPascals(250.0), MegaPascals(200_000.0), DesignType::Lrfd)
        };
        let inelastic = make(1.2 * root);
        assert_relative_eq!(inelastic.web_shear_buckling_coefficient(), 1.10 / 1.2, max_relative = 1e-12);
        let elastic = make(2.0 * root);
        let expected = 1.51 * 1.2 * 800.0 / (4.0 * root * root);
        assert_relative_eq!(elastic.web_shear_buckling_coefficient(), expected, max_relative = 1e-12);
    }
}
