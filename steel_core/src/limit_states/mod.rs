//! # Limit States
//!
//! One calculation type per AISC limit state, grouped by loading direction.
//! Every calculation is an immutable value implementing
//! [`Strength`](crate::criteria::Strength): nominal strength, design strength
//! and calculation memory are evaluated on demand from its fields.
//!
//! | Module          | Limit states                                        | AISC 360-16  |
//! |-----------------|-----------------------------------------------------|--------------|
//! | [`compression`] | Flexural buckling, torsional buckling               | E3, E4       |
//! | [`tension`]     | Gross-section yield, net-section rupture            | D2           |
//! | [`flexure`]     | Yield, minor-axis yield, LTB, flange local buckling | F2, F3, F6   |
//! | [`shear`]       | Web shear, flange (minor-axis) shear                | G2, G6       |
//!
//! Each module also provides a closed enum (e.g.
//! [`compression::CompressionCalculation`]) so all limit states of one loading
//! direction fit in a single
//! [`LoadStrengthCalculation`](crate::criteria::LoadStrengthCalculation).

pub mod compression;
pub mod flexure;
pub mod shear;
pub mod tension;

use serde::Serialize;

pub use compression::{BucklingMemory, CompressionCalculation, FlexuralBuckling, TorsionalBuckling};
pub use flexure::{
    BendingAxis, FlangeLocalBuckling, FlangeLocalBucklingMemory, FlexureCalculation, LateralTorsionalBuckling,
    LateralTorsionalBucklingMemory, LtbRegime, MinorAxisYielding, MinorAxisYieldingMemory, YieldingMoment,
    YieldingMomentMemory,
};
pub use shear::{FlangeShear, FlangeShearMemory, ShearCalculation, WebShear, WebShearMemory};
pub use tension::{TensionCalculation, TensionRupture, TensionRuptureMemory, TensionYield, TensionYieldMemory};

/// Detailed breakdown of one limit-state calculation.
///
/// Serializes with a `calculation` tag naming the limit state, followed by
/// every intermediate quantity and the governing AISC reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "calculation", rename_all = "snake_case")]
pub enum CalculationMemory {
    Buckling(BucklingMemory),
    TensionYield(TensionYieldMemory),
    TensionRupture(TensionRuptureMemory),
    YieldingMoment(YieldingMomentMemory),
    MinorAxisYielding(MinorAxisYieldingMemory),
    LateralTorsionalBuckling(LateralTorsionalBucklingMemory),
    FlangeLocalBuckling(FlangeLocalBucklingMemory),
    WebShear(WebShearMemory),
    FlangeShear(FlangeShearMemory),
}

impl CalculationMemory {
    /// AISC provision the calculation follows
    pub fn reference(&self) -> &'static str {
        match self {
            CalculationMemory::Buckling(m) => m.reference,
            CalculationMemory::TensionYield(m) => m.reference,
            CalculationMemory::TensionRupture(m) => m.reference,
            CalculationMemory::YieldingMoment(m) => m.reference,
            CalculationMemory::MinorAxisYielding(m) => m.reference,
            CalculationMemory::LateralTorsionalBuckling(m) => m.reference,
            CalculationMemory::FlangeLocalBuckling(m) => m.reference,
            CalculationMemory::WebShear(m) => m.reference,
            CalculationMemory::FlangeShear(m) => m.reference,
        }
    }
}
