//! # Cross-Sections
//!
//! Section geometry records, shape families and the per-family section
//! models that expose the loading-mode API.
//!
//! ## Flow
//!
//! ```text
//! SectionDb::lookup("W6X15")  →  SectionGeometry
//! Section::new(geometry, material, construction, connection)
//!     → Section::DoublySymmetricI(..)      (W, M, S, HP)
//!     → NotImplemented                     (every other family)
//! section.compression(..) / tension(..) / flexure_major_axis(..) / ...
//!     → LoadStrengthCalculation
//! ```
//!
//! ## Example
//!
//! ```rust
//! use steel_core::criteria::{DesignType, StrengthType};
//! use steel_core::materials::Material;
//! use steel_core::sections::{builtin_shapes, ConstructionType, Section};
//! use steel_core::units::MegaPascals;
//!
//! let geometry = builtin_shapes().lookup("W6X15").unwrap();
//! let material = Material::steel(MegaPascals(355.0), MegaPascals(500.0));
//! let section = Section::new(geometry, material, ConstructionType::Rolled, None).unwrap();
//!
//! let tension = section.tension(DesignType::Asd);
//! assert_eq!(tension.design_strength_criterion().unwrap(), StrengthType::Yield);
//! ```

pub mod database;
pub mod i_section;

pub use database::{builtin_shapes, load_database, SectionDb};
pub use i_section::{DoublySymmetricI, DoublySymmetricIGeometry};

use serde::{Deserialize, Serialize};

use crate::criteria::{DesignType, LoadStrengthCalculation};
use crate::errors::{CalcError, CalcResult};
use crate::limit_states::{CompressionCalculation, FlexureCalculation, ShearCalculation, TensionCalculation};
use crate::materials::Material;
use crate::slenderness::{DoublySymmetricSlenderness, SlendernessMemory};
use crate::units::{Millimeters, Mm3, Mm4, Mm6, SqMm};

// ============================================================================
// Section Types
// ============================================================================

/// AISC shape designation prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionType {
    /// Wide flange (W-shape)
    W,
    /// Miscellaneous shape (M-shape)
    M,
    /// American Standard beam (S-shape)
    S,
    /// H-pile (HP-shape)
    HP,
    /// American Standard channel (C-shape)
    C,
    /// Miscellaneous channel (MC-shape)
    MC,
    /// Single angle (L-shape)
    L,
    /// Double angle (2L-shape)
    TwoL,
    /// Tee cut from a W-shape
    WT,
    /// Tee cut from an M-shape
    MT,
    /// Tee cut from an S-shape
    ST,
    /// Rectangular or square HSS
    HssRect,
    /// Round HSS
    HssRound,
    /// Pipe
    Pipe,
}

impl SectionType {
    /// All section types for iteration
    pub const ALL: [SectionType; 14] = [
        SectionType::W,
        SectionType::M,
        SectionType::S,
        SectionType::HP,
        SectionType::C,
        SectionType::MC,
        SectionType::L,
        SectionType::TwoL,
        SectionType::WT,
        SectionType::MT,
        SectionType::ST,
        SectionType::HssRect,
        SectionType::HssRound,
        SectionType::Pipe,
    ];

    /// Parse from the AISC `Type` column.
    ///
    /// `HSS` always maps to [`SectionType::HssRect`]; the database loader
    /// refines it to round when an outside diameter is present.
    pub fn from_aisc_code(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "W" => Some(SectionType::W),
            "M" => Some(SectionType::M),
            "S" => Some(SectionType::S),
            "HP" => Some(SectionType::HP),
            "C" => Some(SectionType::C),
            "MC" => Some(SectionType::MC),
            "L" => Some(SectionType::L),
            "2L" => Some(SectionType::TwoL),
            "WT" => Some(SectionType::WT),
            "MT" => Some(SectionType::MT),
            "ST" => Some(SectionType::ST),
            "HSS" => Some(SectionType::HssRect),
            "PIPE" => Some(SectionType::Pipe),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SectionType::W => "Wide Flange (W)",
            SectionType::M => "Miscellaneous (M)",
            SectionType::S => "American Standard (S)",
            SectionType::HP => "H-Pile (HP)",
            SectionType::C => "Channel (C)",
            SectionType::MC => "Miscellaneous Channel (MC)",
            SectionType::L => "Angle (L)",
            SectionType::TwoL => "Double Angle (2L)",
            SectionType::WT => "Tee (WT)",
            SectionType::MT => "Tee (MT)",
            SectionType::ST => "Tee (ST)",
            SectionType::HssRect => "HSS Rectangular/Square",
            SectionType::HssRound => "HSS Round",
            SectionType::Pipe => "Pipe",
        }
    }

    /// Family whose limit states apply to this shape
    pub fn family(&self) -> SectionFamily {
        match self {
            SectionType::W | SectionType::M | SectionType::S | SectionType::HP => SectionFamily::DoublySymmetricI,
            SectionType::C | SectionType::MC => SectionFamily::Channel,
            SectionType::WT | SectionType::MT | SectionType::ST => SectionFamily::Tee,
            SectionType::L => SectionFamily::Angle,
            SectionType::TwoL => SectionFamily::DoubleAngle,
            SectionType::HssRect => SectionFamily::RectangularHss,
            SectionType::HssRound => SectionFamily::RoundHss,
            SectionType::Pipe => SectionFamily::Pipe,
        }
    }
}

impl std::fmt::Display for SectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Group of shapes sharing one set of limit-state formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionFamily {
    DoublySymmetricI,
    Channel,
    Tee,
    Angle,
    DoubleAngle,
    RectangularHss,
    RoundHss,
    Pipe,
}

impl SectionFamily {
    pub fn display_name(&self) -> &'static str {
        match self {
            SectionFamily::DoublySymmetricI => "doubly symmetric I-shape",
            SectionFamily::Channel => "channel",
            SectionFamily::Tee => "tee",
            SectionFamily::Angle => "single angle",
            SectionFamily::DoubleAngle => "double angle",
            SectionFamily::RectangularHss => "rectangular HSS",
            SectionFamily::RoundHss => "round HSS",
            SectionFamily::Pipe => "pipe",
        }
    }

    /// Whether strength calculations exist for this family
    pub fn is_supported(&self) -> bool {
        matches!(self, SectionFamily::DoublySymmetricI)
    }
}

/// How the member is fabricated. Selects the flange slenderness formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConstructionType {
    #[default]
    Rolled,
    BuiltUp,
}

// ============================================================================
// Geometry
// ============================================================================

/// Cross-section dimensions and properties in metric units.
///
/// Properties a shape family does not define (e.g. `cw` for an HSS), and
/// blank cells of the shapes database, are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionGeometry {
    pub section_type: SectionType,
    /// AISC Manual label (imperial), e.g. "W6X15"
    pub label: String,
    /// Metric label, e.g. "W150X22.5"
    pub metric_label: Option<String>,
    /// Nominal weight (kg/m)
    pub weight: Option<f64>,
    pub area: Option<SqMm>,
    pub d: Option<Millimeters>,
    pub bf: Option<Millimeters>,
    pub tw: Option<Millimeters>,
    pub tf: Option<Millimeters>,
    /// Flange slenderness bf/2tf
    pub bf_2tf: Option<f64>,
    /// Web slenderness h/tw
    pub h_tw: Option<f64>,
    pub ix: Option<Mm4>,
    pub zx: Option<Mm3>,
    pub sx: Option<Mm3>,
    pub rx: Option<Millimeters>,
    pub iy: Option<Mm4>,
    pub zy: Option<Mm3>,
    pub sy: Option<Mm3>,
    pub ry: Option<Millimeters>,
    /// Torsional constant
    pub j: Option<Mm4>,
    /// Warping constant
    pub cw: Option<Mm6>,
    pub rts: Option<Millimeters>,
    /// Distance between flange centroids
    pub ho: Option<Millimeters>,
}

impl SectionGeometry {
    pub fn family(&self) -> SectionFamily {
        self.section_type.family()
    }
}

impl std::fmt::Display for SectionGeometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)?;
        if let (Some(area), Some(ix), Some(sx)) = (self.area, self.ix, self.sx) {
            write!(f, " (A={:.0} mm², Ix={:.3e} mm⁴, Sx={:.3e} mm³)", area.0, ix.0, sx.0)?;
        }
        Ok(())
    }
}

/// End connection of a tension member.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// Area removed by holes, An = Ag − reduction
    pub area_reduction: SqMm,
    /// U
    pub shear_lag_factor: f64,
}

impl Connection {
    /// Validate against the gross area of the connected section
    pub fn validate(&self, gross_area: SqMm) -> CalcResult<()> {
        if !(self.area_reduction.0 >= 0.0) || self.area_reduction >= gross_area {
            return Err(CalcError::invalid_input(
                "area_reduction",
                self.area_reduction.0.to_string(),
                format!("Must be non-negative and less than the gross area {}", gross_area.0),
            ));
        }
        if !(self.shear_lag_factor > 0.0 && self.shear_lag_factor <= 1.0) {
            return Err(CalcError::invalid_input(
                "shear_lag_factor",
                self.shear_lag_factor.to_string(),
                "Shear lag factor must be in (0, 1]",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Load Parameters
// ============================================================================

/// Unbraced lengths and effective-length factors of a compression member.
///
/// Minor-axis and torsional lengths default to the major-axis length when
/// unset.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length_major_axis": 3000.0,
///   "factor_k_major_axis": 1.0,
///   "length_minor_axis": 1500.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompressionParams {
    pub length_major_axis: Millimeters,
    #[serde(default = "default_factor_k")]
    pub factor_k_major_axis: f64,
    #[serde(default)]
    pub length_minor_axis: Option<Millimeters>,
    #[serde(default = "default_factor_k")]
    pub factor_k_minor_axis: f64,
    #[serde(default)]
    pub length_torsion: Option<Millimeters>,
    #[serde(default = "default_factor_k")]
    pub factor_k_torsion: f64,
    #[serde(default)]
    pub design_type: DesignType,
}

fn default_factor_k() -> f64 {
    1.0
}

impl CompressionParams {
    /// Same length about every axis, K = 1, ASD
    pub fn new(length: Millimeters) -> Self {
        CompressionParams {
            length_major_axis: length,
            factor_k_major_axis: 1.0,
            length_minor_axis: None,
            factor_k_minor_axis: 1.0,
            length_torsion: None,
            factor_k_torsion: 1.0,
            design_type: DesignType::Asd,
        }
    }

    pub fn with_major_axis_factor(mut self, factor_k: f64) -> Self {
        self.factor_k_major_axis = factor_k;
        self
    }

    pub fn with_minor_axis(mut self, length: Millimeters, factor_k: f64) -> Self {
        self.length_minor_axis = Some(length);
        self.factor_k_minor_axis = factor_k;
        self
    }

    pub fn with_torsion(mut self, length: Millimeters, factor_k: f64) -> Self {
        self.length_torsion = Some(length);
        self.factor_k_torsion = factor_k;
        self
    }

    pub fn with_design_type(mut self, design_type: DesignType) -> Self {
        self.design_type = design_type;
        self
    }

    pub fn minor_axis_length(&self) -> Millimeters {
        self.length_minor_axis.unwrap_or(self.length_major_axis)
    }

    pub fn torsion_length(&self) -> Millimeters {
        self.length_torsion.unwrap_or(self.length_major_axis)
    }

    pub fn validate(&self) -> CalcResult<()> {
        let lengths = [
            ("length_major_axis", self.length_major_axis),
            ("length_minor_axis", self.minor_axis_length()),
            ("length_torsion", self.torsion_length()),
        ];
        for (field, length) in lengths {
            if !(length.0 > 0.0) || !length.0.is_finite() {
                return Err(CalcError::invalid_input(field, length.0.to_string(), "Length must be positive"));
            }
        }
        let factors = [
            ("factor_k_major_axis", self.factor_k_major_axis),
            ("factor_k_minor_axis", self.factor_k_minor_axis),
            ("factor_k_torsion", self.factor_k_torsion),
        ];
        for (field, factor) in factors {
            if !(factor > 0.0) || !factor.is_finite() {
                return Err(CalcError::invalid_input(
                    field,
                    factor.to_string(),
                    "Effective length factor must be positive",
                ));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Section Models
// ============================================================================

/// A section model, one variant per supported [`SectionFamily`].
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    DoublySymmetricI(DoublySymmetricI),
}

impl Section {
    /// Build the section model matching the geometry's family.
    ///
    /// Fails with `NotImplemented` for families without strength
    /// calculations, and with `InvalidInput`/`MissingField` for bad data.
    pub fn new(
        geometry: &SectionGeometry,
        material: Material,
        construction: ConstructionType,
        connection: Option<Connection>,
    ) -> CalcResult<Self> {
        material.validate()?;
        match geometry.family() {
            SectionFamily::DoublySymmetricI => {
                let geometry = DoublySymmetricIGeometry::try_from(geometry)?;
                if let Some(connection) = &connection {
                    connection.validate(geometry.area)?;
                }
                Ok(Section::DoublySymmetricI(DoublySymmetricI::new(
                    geometry,
                    material,
                    construction,
                    connection,
                )))
            }
            family @ (SectionFamily::Channel
            | SectionFamily::Tee
            | SectionFamily::Angle
            | SectionFamily::DoubleAngle
            | SectionFamily::RectangularHss
            | SectionFamily::RoundHss
            | SectionFamily::Pipe) => Err(CalcError::not_implemented(
                family.display_name(),
                format!("no strength calculations for {} sections", geometry.label),
            )),
        }
    }

    pub fn family(&self) -> SectionFamily {
        match self {
            Section::DoublySymmetricI(_) => SectionFamily::DoublySymmetricI,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Section::DoublySymmetricI(s) => &s.geometry.label,
        }
    }

    pub fn slenderness(&self) -> DoublySymmetricSlenderness {
        match self {
            Section::DoublySymmetricI(s) => s.slenderness(),
        }
    }

    pub fn slenderness_memory(&self) -> SlendernessMemory {
        match self {
            Section::DoublySymmetricI(s) => s.slenderness_memory(),
        }
    }

    pub fn compression(&self, params: &CompressionParams) -> CalcResult<LoadStrengthCalculation<CompressionCalculation>> {
        match self {
            Section::DoublySymmetricI(s) => s.compression(params),
        }
    }

    pub fn tension(&self, design_type: DesignType) -> LoadStrengthCalculation<TensionCalculation> {
        match self {
            Section::DoublySymmetricI(s) => s.tension(design_type),
        }
    }

    pub fn flexure_major_axis(
        &self,
        length: Millimeters,
        modification_factor: f64,
        design_type: DesignType,
    ) -> CalcResult<LoadStrengthCalculation<FlexureCalculation>> {
        match self {
            Section::DoublySymmetricI(s) => s.flexure_major_axis(length, modification_factor, design_type),
        }
    }

    pub fn flexure_minor_axis(&self, design_type: DesignType) -> LoadStrengthCalculation<FlexureCalculation> {
        match self {
            Section::DoublySymmetricI(s) => s.flexure_minor_axis(design_type),
        }
    }

    pub fn flange_local_buckling_major_axis(
        &self,
        design_type: DesignType,
    ) -> CalcResult<LoadStrengthCalculation<FlexureCalculation>> {
        match self {
            Section::DoublySymmetricI(s) => s.flange_local_buckling_major_axis(design_type),
        }
    }

    pub fn flange_local_buckling_minor_axis(
        &self,
        design_type: DesignType,
    ) -> LoadStrengthCalculation<FlexureCalculation> {
        match self {
            Section::DoublySymmetricI(s) => s.flange_local_buckling_minor_axis(design_type),
        }
    }

    pub fn shear_major_axis(&self, design_type: DesignType) -> LoadStrengthCalculation<ShearCalculation> {
        match self {
            Section::DoublySymmetricI(s) => s.shear_major_axis(design_type),
        }
    }

    pub fn shear_minor_axis(&self, design_type: DesignType) -> LoadStrengthCalculation<ShearCalculation> {
        match self {
            Section::DoublySymmetricI(s) => s.shear_minor_axis(design_type),
        }
    }
}
