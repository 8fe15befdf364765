//! # Design Settings
//!
//! Defaults applied to every member check that does not override them.
//! Settings are stored as JSON next to the member inputs.
//!
//! ## Example
//!
//! ```rust
//! use steel_core::criteria::DesignType;
//! use steel_core::settings::DesignSettings;
//!
//! let settings = DesignSettings::from_json(r#"{ "design_type": "Lrfd" }"#).unwrap();
//! assert_eq!(settings.design_type, DesignType::Lrfd);
//! assert_eq!(settings.lateral_torsional_buckling_modification_factor, 1.0);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::criteria::DesignType;
use crate::errors::{CalcError, CalcResult};
use crate::sections::ConstructionType;

fn default_modification_factor() -> f64 {
    1.0
}

/// Global design settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DesignSettings {
    /// ASD or LRFD
    pub design_type: DesignType,

    /// Construction assumed when a member does not specify one
    pub construction: ConstructionType,

    /// Default Cb
    #[serde(default = "default_modification_factor")]
    pub lateral_torsional_buckling_modification_factor: f64,

    /// AISC shapes database CSV; the built-in table is used when absent
    pub shapes_csv_path: Option<String>,
}

impl Default for DesignSettings {
    fn default() -> Self {
        DesignSettings {
            design_type: DesignType::default(),
            construction: ConstructionType::default(),
            lateral_torsional_buckling_modification_factor: default_modification_factor(),
            shapes_csv_path: None,
        }
    }
}

impl DesignSettings {
    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: DesignSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> CalcResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> CalcResult<()> {
        let cb = self.lateral_torsional_buckling_modification_factor;
        if !(cb > 0.0) || !cb.is_finite() {
            return Err(CalcError::invalid_input(
                "lateral_torsional_buckling_modification_factor",
                cb.to_string(),
                "Cb must be a positive number",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = DesignSettings::default();
        assert_eq!(settings.design_type, DesignType::Asd);
        assert_eq!(settings.construction, ConstructionType::Rolled);
        assert_eq!(settings.lateral_torsional_buckling_modification_factor, 1.0);
        assert!(settings.shapes_csv_path.is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = DesignSettings::from_json(r#"{ "construction": "BUILT_UP" }"#).unwrap();
        assert_eq!(settings.construction, ConstructionType::BuiltUp);
        assert_eq!(settings.design_type, DesignType::Asd);
        assert_eq!(settings.lateral_torsional_buckling_modification_factor, 1.0);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = DesignSettings::from_json(r#"{ "code": "IBC2024" }"#).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_invalid_modification_factor() {
        let err =
            DesignSettings::from_json(r#"{ "lateral_torsional_buckling_modification_factor": 0.0 }"#).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_settings_roundtrip() {
        let settings = DesignSettings {
            design_type: DesignType::Lrfd,
            shapes_csv_path: Some("aisc-shapes-database-v16.0.csv".to_string()),
            ..DesignSettings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(DesignSettings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_load_missing_file() {
        let err = DesignSettings::load("no/such/settings.json").unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
