//! # Member Checks
//!
//! JSON-first entry point: a [`MemberInput`] names a section and a material,
//! and [`check_member`] returns every strength the member has as a
//! serializable [`MemberResult`].
//!
//! Tension, shear about both axes, and minor-axis flexure are always
//! evaluated. Compression runs when `compression` lengths are given, and
//! major-axis flexure when `flexure_length` is given. Flange local buckling
//! is reported for each bending axis checked, unless the flange is compact.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "label": "C-1",
//!   "section": "W14X90",
//!   "material": {
//!     "modulus_linear": 200000.0,
//!     "modulus_shear": 77000.0,
//!     "poisson_ratio": 0.3,
//!     "yield_strength": 345.0,
//!     "ultimate_strength": 450.0
//!   },
//!   "compression": { "length_major_axis": 4000.0 },
//!   "flexure_length": 4000.0
//! }
//! ```

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::criteria::{DesignType, LoadStrengthCalculation, LoadStrengthReport, Strength};
use crate::errors::{CalcError, CalcResult};
use crate::materials::Material;
use crate::sections::{CompressionParams, Connection, ConstructionType, Section, SectionDb};
use crate::settings::DesignSettings;
use crate::slenderness::SlendernessMemory;
use crate::units::{Millimeters, NewtonMillimeters, Newtons};

/// Input for a single member check.
///
/// Unset options fall back to the [`DesignSettings`] defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberInput {
    /// User-defined label (e.g. "B-1")
    pub label: String,

    /// Imperial or metric section label (e.g. "W14X90" or "W360X134")
    pub section: String,

    pub material: Material,

    #[serde(default)]
    pub construction: Option<ConstructionType>,

    /// End connection of the member in tension
    #[serde(default)]
    pub connection: Option<Connection>,

    /// Column lengths; compression is skipped when absent
    #[serde(default)]
    pub compression: Option<CompressionParams>,

    /// Unbraced length Lb; major-axis flexure is skipped when absent
    #[serde(default)]
    pub flexure_length: Option<Millimeters>,

    /// Cb
    #[serde(default)]
    pub modification_factor: Option<f64>,

    /// Applies to every loading mode, including compression
    #[serde(default)]
    pub design_type: Option<DesignType>,
}

impl MemberInput {
    /// A member with every option left to the settings
    pub fn new(label: impl Into<String>, section: impl Into<String>, material: Material) -> Self {
        MemberInput {
            label: label.into(),
            section: section.into(),
            material,
            construction: None,
            connection: None,
            compression: None,
            flexure_length: None,
            modification_factor: None,
            design_type: None,
        }
    }

    /// Parse a list of members from a JSON array
    pub fn list_from_json(json: &str) -> CalcResult<Vec<MemberInput>> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn validate(&self) -> CalcResult<()> {
        if self.label.trim().is_empty() {
            return Err(CalcError::invalid_input("label", &self.label, "Label must not be empty"));
        }
        if self.section.trim().is_empty() {
            return Err(CalcError::missing_field("section"));
        }
        Ok(())
    }
}

/// Strengths of one member, ready for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct MemberResult {
    pub label: String,
    /// Section label as found in the database
    pub section: String,
    pub design_type: DesignType,
    pub slenderness: SlendernessMemory,
    pub tension: LoadStrengthReport<Newtons>,
    pub compression: Option<LoadStrengthReport<Newtons>>,
    pub flexure_major_axis: Option<LoadStrengthReport<NewtonMillimeters>>,
    pub flexure_minor_axis: LoadStrengthReport<NewtonMillimeters>,
    /// Absent for compact flanges or without `flexure_length`
    pub flange_local_buckling_major_axis: Option<LoadStrengthReport<NewtonMillimeters>>,
    /// Absent for compact flanges
    pub flange_local_buckling_minor_axis: Option<LoadStrengthReport<NewtonMillimeters>>,
    pub shear_major_axis: LoadStrengthReport<Newtons>,
    pub shear_minor_axis: LoadStrengthReport<Newtons>,
}

fn applicable_report<C: Strength>(
    calculation: LoadStrengthCalculation<C>,
) -> CalcResult<Option<LoadStrengthReport<C::Output>>> {
    if calculation.has_applicable_criteria() {
        Ok(Some(calculation.report()?))
    } else {
        Ok(None)
    }
}

/// Check a single member against every applicable limit state.
///
/// # Errors
///
/// - `SectionNotFound` when the section is not in `db`
/// - `InvalidInput` / `MissingField` for bad member data
/// - `NotImplemented` when the member needs a provision this crate lacks
pub fn check_member(input: &MemberInput, db: &SectionDb, settings: &DesignSettings) -> CalcResult<MemberResult> {
    input.validate()?;
    settings.validate()?;

    let geometry = db.lookup(&input.section)?;
    let construction = input.construction.unwrap_or(settings.construction);
    let design_type = input.design_type.unwrap_or(settings.design_type);
    let section = Section::new(geometry, input.material, construction, input.connection)?;

    let compression = match &input.compression {
        Some(params) => Some(section.compression(&params.with_design_type(design_type))?.report()?),
        None => None,
    };

    let (flexure_major_axis, flange_local_buckling_major_axis) = match input.flexure_length {
        Some(length) => {
            let cb = input
                .modification_factor
                .unwrap_or(settings.lateral_torsional_buckling_modification_factor);
            (
                Some(section.flexure_major_axis(length, cb, design_type)?.report()?),
                applicable_report(section.flange_local_buckling_major_axis(design_type)?)?,
            )
        }
        None => (None, None),
    };

    Ok(MemberResult {
        label: input.label.clone(),
        section: section.label().to_string(),
        design_type,
        slenderness: section.slenderness_memory(),
        tension: section.tension(design_type).report()?,
        compression,
        flexure_major_axis,
        flexure_minor_axis: section.flexure_minor_axis(design_type).report()?,
        flange_local_buckling_major_axis,
        flange_local_buckling_minor_axis: applicable_report(section.flange_local_buckling_minor_axis(design_type))?,
        shear_major_axis: section.shear_major_axis(design_type).report()?,
        shear_minor_axis: section.shear_minor_axis(design_type).report()?,
    })
}

/// Check many members in parallel.
///
/// Results are returned in input order; a failing member does not stop the
/// others.
pub fn check_members(
    inputs: &[MemberInput],
    db: &SectionDb,
    settings: &DesignSettings,
) -> Vec<CalcResult<MemberResult>> {
    inputs
        .par_iter()
        .map(|input| check_member(input, db, settings))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::StrengthType;
    use crate::materials::SteelGrade;
    use crate::sections::builtin_shapes;
    use crate::units::MegaPascals;
    use approx::assert_relative_eq;

    fn steel_355() -> Material {
        Material::steel(MegaPascals(355.0), MegaPascals(500.0))
    }

    #[test]
    fn test_minimal_member() {
        let input = MemberInput::new("T-1", "W6X15", steel_355());
        let result = check_member(&input, builtin_shapes(), &DesignSettings::default()).unwrap();

        assert_eq!(result.section, "W6X15");
        assert_eq!(result.design_type, DesignType::Asd);
        assert!(result.compression.is_none());
        assert!(result.flexure_major_axis.is_none());
        assert!(result.flange_local_buckling_major_axis.is_none());
        assert_eq!(result.tension.governing, StrengthType::Yield);
        assert_relative_eq!(result.tension.design_strength.0, 355.0 * 2860.0 / 1.67, max_relative = 1e-12);
        assert_eq!(result.shear_major_axis.governing, StrengthType::WebShear);
        assert_eq!(result.shear_minor_axis.governing, StrengthType::FlangeShear);
    }

    #[test]
    fn test_metric_label_lookup() {
        let input = MemberInput::new("T-1", "W150X22.5", steel_355());
        let result = check_member(&input, builtin_shapes(), &DesignSettings::default()).unwrap();
        assert_eq!(result.section, "W6X15");
    }

    #[test]
    fn test_full_member_a36() {
        let mut input = MemberInput::new("B-1", "W6X15", SteelGrade::A36.material());
        input.flexure_length = Some(Millimeters(2100.0));
        input.compression = Some(CompressionParams::new(Millimeters(3000.0)));

        let result = check_member(&input, builtin_shapes(), &DesignSettings::default()).unwrap();

        let major = result.flexure_major_axis.unwrap();
        assert_eq!(major.governing, StrengthType::LateralTorsionalBuckling);
        assert_relative_eq!(major.design_strength.0, 25_925_504.9, max_relative = 1e-6);

        let minor = result.flexure_minor_axis;
        assert_eq!(minor.governing, StrengthType::Yield);
        assert_eq!(minor.criteria.len(), 1);
        let minor_flb = result.flange_local_buckling_minor_axis.unwrap();
        assert!(minor_flb.design_strength < minor.design_strength);

        let compression = result.compression.unwrap();
        assert_eq!(compression.criteria.len(), 3);
        assert!(compression.design_strength.0 < 250.0 * 2860.0 / 1.67);
    }

    #[test]
    fn test_flange_local_buckling_reported_separately() {
        let mut input = MemberInput::new("B-2", "W6X15", steel_355());
        input.flexure_length = Some(Millimeters(1000.0));
        let result = check_member(&input, builtin_shapes(), &DesignSettings::default()).unwrap();

        let major = result.flexure_major_axis.unwrap();
        assert_eq!(major.governing, StrengthType::Yield);
        let flb = result.flange_local_buckling_major_axis.unwrap();
        assert_eq!(flb.governing, StrengthType::CompressionFlangeLocalBuckling);
        assert!(flb.design_strength < major.design_strength);

        // Compact flanges have nothing to report
        let mut compact = MemberInput::new("B-3", "W44X335", steel_355());
        compact.flexure_length = Some(Millimeters(1000.0));
        let result = check_member(&compact, builtin_shapes(), &DesignSettings::default()).unwrap();
        assert!(result.flexure_major_axis.is_some());
        assert!(result.flange_local_buckling_major_axis.is_none());
        assert!(result.flange_local_buckling_minor_axis.is_none());
    }

    #[test]
    fn test_settings_supply_defaults() {
        let settings = DesignSettings {
            design_type: DesignType::Lrfd,
            ..DesignSettings::default()
        };
        let input = MemberInput::new("T-1", "W6X15", SteelGrade::A36.material());
        let result = check_member(&input, builtin_shapes(), &settings).unwrap();
        assert_eq!(result.design_type, DesignType::Lrfd);
        assert_relative_eq!(result.shear_major_axis.design_strength.0, 133_152.0, max_relative = 1e-9);

        let mut overridden = input.clone();
        overridden.design_type = Some(DesignType::Asd);
        let result = check_member(&overridden, builtin_shapes(), &settings).unwrap();
        assert_eq!(result.design_type, DesignType::Asd);
    }

    #[test]
    fn test_invalid_inputs() {
        let db = builtin_shapes();
        let settings = DesignSettings::default();

        let unknown = MemberInput::new("X-1", "W99X999", steel_355());
        assert_eq!(
            check_member(&unknown, db, &settings).unwrap_err().error_code(),
            "SECTION_NOT_FOUND"
        );

        let unlabeled = MemberInput::new("  ", "W6X15", steel_355());
        assert_eq!(
            check_member(&unlabeled, db, &settings).unwrap_err().error_code(),
            "INVALID_INPUT"
        );

        let mut bad_length = MemberInput::new("B-3", "W6X15", steel_355());
        bad_length.flexure_length = Some(Millimeters(-1.0));
        assert_eq!(
            check_member(&bad_length, db, &settings).unwrap_err().error_code(),
            "INVALID_INPUT"
        );
    }

    #[test]
    fn test_check_members_preserves_order() {
        let inputs = vec![
            MemberInput::new("A", "W6X15", steel_355()),
            MemberInput::new("B", "W99X999", steel_355()),
            MemberInput::new("C", "W44X335", steel_355()),
            MemberInput::new("D", "W14X90", SteelGrade::A992.material()),
        ];
        let results = check_members(&inputs, builtin_shapes(), &DesignSettings::default());

        assert_eq!(results.len(), 4);
        assert_eq!(results[0].as_ref().unwrap().label, "A");
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().label, "C");
        assert_eq!(results[3].as_ref().unwrap().section, "W14X90");
    }

    #[test]
    fn test_member_json() {
        let json = r#"[{
            "label": "C-1",
            "section": "W14X90",
            "material": {
                "modulus_linear": 200000.0,
                "modulus_shear": 77000.0,
                "poisson_ratio": 0.3,
                "yield_strength": 345.0,
                "ultimate_strength": 450.0
            },
            "construction": "ROLLED",
            "compression": { "length_major_axis": 4000.0 },
            "design_type": "Lrfd"
        }]"#;
        let inputs = MemberInput::list_from_json(json).unwrap();
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].compression.unwrap().factor_k_minor_axis, 1.0);

        let result = check_member(&inputs[0], builtin_shapes(), &DesignSettings::default()).unwrap();
        let output = serde_json::to_string(&result).unwrap();
        assert!(output.contains("\"label\":\"C-1\""));
        assert!(output.contains("\"flexure_major_axis\":null"));
    }
}
