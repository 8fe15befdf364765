//! # steel_core - AISC 360 Member Strength Engine
//!
//! `steel_core` computes the nominal and design strengths of structural steel
//! members per AISC 360-16. Each loading mode (compression, tension, flexure,
//! shear) is a set of limit-state criteria; the governing criterion is the one
//! with the lowest design strength. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Sections and calculations are plain values; building one
//!   never mutates shared state
//! - **JSON-First**: Inputs deserialize from JSON, results serialize with every
//!   intermediate quantity and the AISC equation reference
//! - **Rich Errors**: Unsupported provisions are reported as
//!   [`CalcError::NotImplemented`], never computed with the wrong formula
//! - **Metric**: N and mm throughout, so stresses are in MPa (N/mm²)
//!
//! ## Quick Start
//!
//! ```rust
//! use steel_core::criteria::{DesignType, StrengthType};
//! use steel_core::materials::Material;
//! use steel_core::sections::{builtin_shapes, ConstructionType, Section};
//! use steel_core::units::{MegaPascals, Millimeters};
//!
//! let geometry = builtin_shapes().lookup("W6X15").unwrap();
//! let material = Material::steel(MegaPascals(250.0), MegaPascals(400.0));
//! let section = Section::new(geometry, material, ConstructionType::Rolled, None).unwrap();
//!
//! let flexure = section
//!     .flexure_major_axis(Millimeters(2100.0), 1.0, DesignType::Asd)
//!     .unwrap();
//! assert_eq!(
//!     flexure.design_strength_criterion().unwrap(),
//!     StrengthType::LateralTorsionalBuckling
//! );
//! ```
//!
//! ## Modules
//!
//! - [`criteria`] - Design types, safety factors, and governing-strength selection
//! - [`slenderness`] - Element slenderness classification (Table B4.1)
//! - [`limit_states`] - Strength calculators for chapters D through G
//! - [`sections`] - Section geometry, the shapes database, and section models
//! - [`materials`] - Steel material properties and grades
//! - [`member`] - Batch member checks from JSON input
//! - [`settings`] - Design defaults
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod criteria;
pub mod errors;
pub mod limit_states;
pub mod materials;
pub mod member;
pub mod sections;
pub mod settings;
pub mod slenderness;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use criteria::{DesignType, LoadStrengthCalculation, LoadStrengthReport, SafetyFactors, Strength, StrengthType};
pub use errors::{CalcError, CalcResult};
pub use materials::{Material, SteelGrade};
pub use member::{check_member, check_members, MemberInput, MemberResult};
pub use sections::{Section, SectionDb, SectionGeometry};
pub use settings::DesignSettings;
