//! # Strength Criteria
//!
//! Shared vocabulary for every limit state: the design philosophy
//! ([`DesignType`]), the limit-state key ([`StrengthType`]), the
//! nominal-to-design reduction rule ([`design_strength`]) and the aggregation
//! of competing limit states into one governing strength
//! ([`LoadStrengthCalculation`]).
//!
//! ## Reduction Rule
//!
//! ```text
//! ASD:  Rn / Ω      (Ω  = 1.67 unless the provision says otherwise)
//! LRFD: φ × Rn      (φ  = 0.90 unless the provision says otherwise)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use steel_core::criteria::{design_strength, DesignType, SafetyFactors};
//! use steel_core::units::Newtons;
//!
//! let nominal = Newtons(10_000.0);
//! let asd = design_strength(nominal, DesignType::Asd, SafetyFactors::GENERIC);
//! let lrfd = design_strength(nominal, DesignType::Lrfd, SafetyFactors::GENERIC);
//! assert!((asd.0 - 5988.02).abs() < 0.01);
//! assert!((lrfd.0 - 9000.0).abs() < 1e-9);
//! ```

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::ops::{Div, Mul};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::limit_states::CalculationMemory;
use crate::units::{NewtonMillimeters, Newtons};

// ============================================================================
// AISC Code Section References
// ============================================================================

/// AISC 360-16 references for every provision implemented in this crate.
///
/// Calculation memories carry these so a reviewer can trace each number
/// back to the Specification.
pub mod aisc_ref {
    /// Width-to-thickness limits, axial compression
    pub const TABLE_B4_1A: &str = "AISC 360-16 Table B4.1a";
    /// Width-to-thickness limits, flexure
    pub const TABLE_B4_1B: &str = "AISC 360-16 Table B4.1b";
    /// Flexural buckling of members without slender elements
    pub const E3: &str = "AISC 360-16 E3";
    /// Torsional buckling of doubly symmetric members
    pub const E4: &str = "AISC 360-16 E4";
    /// Members with slender elements
    pub const E7: &str = "AISC 360-16 E7";
    /// Tensile yielding in the gross section
    pub const D2_A: &str = "AISC 360-16 D2(a)";
    /// Tensile rupture in the net section
    pub const D2_B: &str = "AISC 360-16 D2(b)";
    /// Yielding of compact doubly symmetric I-shapes
    pub const F2_1: &str = "AISC 360-16 F2.1";
    /// Lateral-torsional buckling of compact doubly symmetric I-shapes
    pub const F2_2: &str = "AISC 360-16 F2.2";
    /// Compression flange local buckling, compact webs
    pub const F3_2: &str = "AISC 360-16 F3.2";
    /// Non-compact and slender webs
    pub const F4_F5: &str = "AISC 360-16 F4/F5";
    /// Minor-axis yielding
    pub const F6_1: &str = "AISC 360-16 F6.1";
    /// Minor-axis flange local buckling
    pub const F6_2: &str = "AISC 360-16 F6.2";
    /// Web shear strength
    pub const G2_1: &str = "AISC 360-16 G2.1";
    /// Shear buckling coefficient Cv2
    pub const G2_2: &str = "AISC 360-16 G2.2";
    /// Weak-axis shear of doubly symmetric shapes
    pub const G6: &str = "AISC 360-16 G6";
}

// ============================================================================
// Design Philosophy
// ============================================================================

/// Design methodology used to reduce nominal strengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DesignType {
    /// Allowable Strength Design - nominal strength divided by Ω
    #[default]
    Asd,
    /// Load and Resistance Factor Design - nominal strength multiplied by φ
    Lrfd,
}

impl DesignType {
    /// All design types for iteration
    pub const ALL: [DesignType; 2] = [DesignType::Asd, DesignType::Lrfd];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            DesignType::Asd => "ASD (Allowable Strength Design)",
            DesignType::Lrfd => "LRFD (Load and Resistance Factor Design)",
        }
    }

    /// Short abbreviation
    pub fn code(&self) -> &'static str {
        match self {
            DesignType::Asd => "ASD",
            DesignType::Lrfd => "LRFD",
        }
    }
}

impl std::fmt::Display for DesignType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Limit state identifier, used as the key of a [`LoadStrengthCalculation`].
///
/// Declaration order is the tie-break order when two limit states produce
/// the same design strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthType {
    /// Gross-section yielding (tension, flexure)
    Yield,
    /// Net-section rupture (tension)
    Ultimate,
    /// Flexural buckling about the major axis
    FlexuralBucklingMajorAxis,
    /// Flexural buckling about the minor axis
    FlexuralBucklingMinorAxis,
    /// Torsional buckling
    TorsionalBuckling,
    /// Lateral-torsional buckling
    LateralTorsionalBuckling,
    /// Compression flange local buckling
    CompressionFlangeLocalBuckling,
    /// Shear in the web
    WebShear,
    /// Shear in the flanges (minor axis)
    FlangeShear,
}

impl StrengthType {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            StrengthType::Yield => "Yielding",
            StrengthType::Ultimate => "Rupture",
            StrengthType::FlexuralBucklingMajorAxis => "Flexural buckling (major axis)",
            StrengthType::FlexuralBucklingMinorAxis => "Flexural buckling (minor axis)",
            StrengthType::TorsionalBuckling => "Torsional buckling",
            StrengthType::LateralTorsionalBuckling => "Lateral-torsional buckling",
            StrengthType::CompressionFlangeLocalBuckling => "Compression flange local buckling",
            StrengthType::WebShear => "Web shear",
            StrengthType::FlangeShear => "Flange shear",
        }
    }
}

impl std::fmt::Display for StrengthType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Design Strength
// ============================================================================

/// Safety factor Ω (ASD) and resistance factor φ (LRFD) of one limit state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafetyFactors {
    /// Ω, divides the nominal strength
    pub asd: f64,
    /// φ, multiplies the nominal strength
    pub lrfd: f64,
}

impl SafetyFactors {
    /// Ω = 1.67, φ = 0.90 (most limit states)
    pub const GENERIC: SafetyFactors = SafetyFactors { asd: 1.67, lrfd: 0.90 };
    /// Ω = 2.00, φ = 0.75 (tensile rupture)
    pub const TENSION_RUPTURE: SafetyFactors = SafetyFactors { asd: 2.00, lrfd: 0.75 };
    /// Ω = 1.50, φ = 1.00 (web shear of rolled I-shapes with stocky webs)
    pub const ROLLED_WEB_SHEAR: SafetyFactors = SafetyFactors { asd: 1.50, lrfd: 1.00 };

    /// Factor that applies to the given design type
    pub fn factor(&self, design_type: DesignType) -> f64 {
        match design_type {
            DesignType::Asd => self.asd,
            DesignType::Lrfd => self.lrfd,
        }
    }
}

impl Default for SafetyFactors {
    fn default() -> Self {
        SafetyFactors::GENERIC
    }
}

/// Reduce a nominal strength to a design strength.
pub fn design_strength<Q>(nominal_strength: Q, design_type: DesignType, factors: SafetyFactors) -> Q
where
    Q: Mul<f64, Output = Q> + Div<f64, Output = Q>,
{
    let factor = factors.factor(design_type);
    match design_type {
        DesignType::Asd => nominal_strength / factor,
        DesignType::Lrfd => nominal_strength * factor,
    }
}

/// A strength value that can be reduced and compared.
pub trait StrengthQuantity:
    Copy + PartialOrd + Mul<f64, Output = Self> + Div<f64, Output = Self> + Serialize
{
    /// Raw value in N or N·mm
    fn raw(self) -> f64;
}

impl StrengthQuantity for Newtons {
    fn raw(self) -> f64 {
        self.0
    }
}

impl StrengthQuantity for NewtonMillimeters {
    fn raw(self) -> f64 {
        self.0
    }
}

/// Common contract of every limit-state calculation.
///
/// Implementors are immutable values: every method is a pure function of
/// the fields, evaluated on demand.
pub trait Strength {
    /// Force for axial and shear limit states, moment for flexure
    type Output: StrengthQuantity;

    /// Theoretical capacity before any factor
    fn nominal_strength(&self) -> Self::Output;

    /// Design philosophy this calculation reduces with
    fn design_type(&self) -> DesignType;

    /// Ω/φ pair of this limit state
    fn safety_factors(&self) -> SafetyFactors {
        SafetyFactors::GENERIC
    }

    /// Whether the limit state applies to the member at all
    fn is_applicable(&self) -> bool {
        true
    }

    /// Nominal strength reduced per [`Strength::design_type`]
    fn design_strength(&self) -> Self::Output {
        design_strength(self.nominal_strength(), self.design_type(), self.safety_factors())
    }

    /// Every intermediate quantity of the calculation
    fn calculation_memory(&self) -> CalculationMemory;
}

// ============================================================================
// Load Strength Aggregation
// ============================================================================

/// All limit states for one loading direction, keyed by [`StrengthType`].
///
/// The governing strength is the minimum design strength among the
/// applicable criteria.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadStrengthCalculation<C> {
    load: &'static str,
    criteria: BTreeMap<StrengthType, C>,
}

impl<C: Strength> LoadStrengthCalculation<C> {
    /// Create a load check named `load` (e.g. "compression") from its criteria.
    ///
    /// Every criterion must reduce with the same [`DesignType`].
    pub fn new(load: &'static str, criteria: BTreeMap<StrengthType, C>) -> Self {
        debug_assert!(
            criteria
                .values()
                .map(Strength::design_type)
                .collect::<Vec<_>>()
                .windows(2)
                .all(|pair| pair[0] == pair[1]),
            "criteria of '{}' mix design types",
            load
        );
        LoadStrengthCalculation { load, criteria }
    }

    /// Name of the loading direction
    pub fn load(&self) -> &'static str {
        self.load
    }

    /// Design type shared by the criteria, `None` when there are none
    pub fn design_type(&self) -> Option<DesignType> {
        self.criteria.values().next().map(Strength::design_type)
    }

    /// Whether any criterion applies, i.e. a governing strength exists
    pub fn has_applicable_criteria(&self) -> bool {
        self.criteria.values().any(Strength::is_applicable)
    }

    /// Full per-limit-state mapping
    pub fn criteria(&self) -> &BTreeMap<StrengthType, C> {
        &self.criteria
    }

    /// Calculation for one limit state, if present
    pub fn criterion(&self, strength_type: StrengthType) -> Option<&C> {
        self.criteria.get(&strength_type)
    }

    /// Governing (minimum) design strength and the limit state producing it.
    ///
    /// Inapplicable criteria are skipped. Fails with
    /// [`CalcError::EmptyCriteria`] when nothing is left to compare, and with
    /// [`CalcError::InvalidInput`] when a criterion yields a non-finite
    /// strength (e.g. from a zero radius of gyration).
    pub fn design_strength_tuple(&self) -> CalcResult<(C::Output, StrengthType)> {
        let mut governing: Option<(C::Output, StrengthType)> = None;
        for (strength_type, calculation) in self.criteria.iter().filter(|(_, c)| c.is_applicable()) {
            let strength = calculation.design_strength();
            if !strength.raw().is_finite() {
                return Err(CalcError::invalid_input(
                    strength_type.display_name(),
                    strength.raw().to_string(),
                    format!("{} design strength is not a finite number", self.load),
                ));
            }
            match governing {
                Some((min, _)) if strength.partial_cmp(&min) != Some(Ordering::Less) => {}
                _ => governing = Some((strength, *strength_type)),
            }
        }
        governing.ok_or_else(|| CalcError::empty_criteria(self.load))
    }

    /// Governing design strength
    pub fn design_strength(&self) -> CalcResult<C::Output> {
        Ok(self.design_strength_tuple()?.0)
    }

    /// Limit state that governs
    pub fn design_strength_criterion(&self) -> CalcResult<StrengthType> {
        Ok(self.design_strength_tuple()?.1)
    }

    /// Calculation of the governing limit state, for its full memory
    pub fn design_strength_calculation(&self) -> CalcResult<&C> {
        let criterion = self.design_strength_criterion()?;
        self.criteria
            .get(&criterion)
            .ok_or_else(|| CalcError::empty_criteria(self.load))
    }

    /// Serializable summary of the load check
    pub fn report(&self) -> CalcResult<LoadStrengthReport<C::Output>> {
        let (design_strength, governing) = self.design_strength_tuple()?;
        Ok(LoadStrengthReport {
            load: self.load.to_string(),
            governing,
            design_strength,
            criteria: self
                .criteria
                .iter()
                .map(|(k, c)| (*k, c.calculation_memory()))
                .collect(),
        })
    }
}

/// JSON-ready outcome of a [`LoadStrengthCalculation`].
#[derive(Debug, Clone, Serialize)]
pub struct LoadStrengthReport<Q> {
    /// Loading direction (e.g. "tension")
    pub load: String,
    /// Governing limit state
    pub governing: StrengthType,
    /// Governing design strength (N or N·mm)
    pub design_strength: Q,
    /// Memory of every limit state, applicable or not
    pub criteria: BTreeMap<StrengthType, CalculationMemory>,
}
