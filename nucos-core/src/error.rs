//! Conversion and unit-table errors
//!
//! `ConversionError` is what callers see: every failed lookup or conversion
//! returns exactly one of its variants. `TableError` only happens while the
//! unit table is turned into lookup structures, and means the table itself
//! is corrupt.

use serde::Serialize;
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const NOT_SUPPORTED_UNIT: &str = "NOT_SUPPORTED_UNIT";
    pub const INVALID_UNIT: &str = "INVALID_UNIT";
    pub const INVALID_UNIT_TYPE: &str = "INVALID_UNIT_TYPE";
    pub const INCOMPATIBLE_UNITS: &str = "INCOMPATIBLE_UNITS";
}

/// Errors returned by unit lookups and conversions
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConversionError {
    /// The unit name is not known to the type-inferring lookup at all
    #[error("The unit: {unit} is not supported or not recognized")]
    NotSupportedUnit { unit: String },

    /// The unit name is not one of the units of an already resolved type
    #[error("The unit: {unit} is not in the list for Unit Type: {unit_type}")]
    InvalidUnit { unit: String, unit_type: String },

    /// The explicit unit type does not exist
    #[error("The unit type: {unit_type} is not in the UnitConversion database")]
    InvalidUnitType { unit_type: String },

    /// Both units are known, but belong to different unit types
    #[error("Cannot convert {from} ({from_type}) to {to} ({to_type})")]
    IncompatibleUnits {
        from: String,
        from_type: String,
        to: String,
        to_type: String,
    },
}

impl ConversionError {
    pub fn not_supported(unit: impl Into<String>) -> Self {
        Self::NotSupportedUnit { unit: unit.into() }
    }

    pub fn invalid_unit(unit: impl Into<String>, unit_type: impl Into<String>) -> Self {
        Self::InvalidUnit {
            unit: unit.into(),
            unit_type: unit_type.into(),
        }
    }

    pub fn invalid_unit_type(unit_type: impl Into<String>) -> Self {
        Self::InvalidUnitType {
            unit_type: unit_type.into(),
        }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotSupportedUnit { .. } => codes::NOT_SUPPORTED_UNIT,
            Self::InvalidUnit { .. } => codes::INVALID_UNIT,
            Self::InvalidUnitType { .. } => codes::INVALID_UNIT_TYPE,
            Self::IncompatibleUnits { .. } => codes::INCOMPATIBLE_UNITS,
        }
    }
}

/// Integrity errors found while building lookup structures from a unit table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("Duplicate unit name in {unit_type}: {name:?} is used by both {first:?} and {second:?}")]
    DuplicateName {
        unit_type: String,
        name: String,
        first: String,
        second: String,
    },

    #[error("Duplicate name in global unit index: {name:?} belongs to both {first} and {second}")]
    DuplicateGlobalName {
        name: String,
        first: String,
        second: String,
    },

    #[error("Duplicate unit type: {0}")]
    DuplicateUnitType(String),

    #[error("Malformed conversion datum for {unit:?} in {unit_type}: {reason}")]
    MalformedDatum {
        unit_type: String,
        unit: String,
        reason: String,
    },

    #[error("{unit_type} refers to a unit it does not define: {unit:?}")]
    MissingReference { unit_type: String, unit: String },

    #[error("Index policy {rule} names unknown unit type: {unit_type}")]
    UnknownPolicyType { rule: String, unit_type: String },
}
