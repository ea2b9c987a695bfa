//! NUCOS Units - Unit Conversion Engine
//!
//! Converts values between units of the same physical quantity, looking
//! units up by any of their names or abbreviations.
//!
//! Unit types:
//! - Linear: a scale factor to the type's base unit (Length, Mass, Volume,
//!   Time, Velocity, Discharge, Pressure, concentrations and fractions, ...)
//! - Affine: temperatures, with a per-unit zero point
//! - Density: linear, plus API gravity through specific gravity at 15°C
//!
//! Conversions name the unit type explicitly, or leave it to be inferred
//! from the first unit through a global name index. Types whose names
//! overlap too much with others are only reachable the explicit way.

mod convert;
mod dump;
mod index;
mod oil;
mod registry;
mod resolver;
mod unit;
mod units;

pub use convert::{api_to_specific_gravity, specific_gravity_to_api};
pub use dump::{to_json, to_rst, to_text, write_json, write_rst, write_text, TableDump};
pub use index::{GlobalNameIndex, IndexPolicy, ReservedName, UnitTypeId};
pub use registry::{UnitRegistry, UNITS};
pub use resolver::{SynonymResolver, UnitId};
pub use unit::{ConversionKind, Datum, UnitDef, UnitTypeDef};
pub use units::{unit_type_def, SPECIFIC_GRAVITY, UNIT_TABLE};

pub use nucos_core::{ConversionError, TableError};

/// Convert `value` from `from` to `to`, inferring the unit type from `from`
pub fn convert(from: &str, to: &str, value: f64) -> Result<f64, ConversionError> {
    UNITS.convert(from, to, value)
}

/// Convert `value` between two units of the named unit type
pub fn convert_with_type(
    unit_type: &str,
    from: &str,
    to: &str,
    value: f64,
) -> Result<f64, ConversionError> {
    UNITS.convert_with_type(unit_type, from, to, value)
}

pub fn is_same_unit(a: &str, b: &str) -> bool {
    UNITS.is_same_unit(a, b)
}

pub fn is_supported(unit: &str) -> bool {
    UNITS.is_supported(unit)
}

pub fn is_supported_unit(unit_type: &str, unit: &str) -> bool {
    UNITS.is_supported_unit(unit_type, unit)
}

pub fn unit_types() -> Vec<&'static str> {
    UNITS.unit_types()
}

pub fn unit_names(unit_type: &str) -> Result<Vec<&'static str>, ConversionError> {
    UNITS.unit_names(unit_type)
}

pub fn supported_names(unit_type: &str) -> Result<Vec<&'static str>, ConversionError> {
    UNITS.supported_names(unit_type)
}

pub fn unit_type_of(unit: &str) -> Result<&'static str, ConversionError> {
    UNITS.unit_type_of(unit)
}

pub fn primary_name(unit: &str, unit_type: Option<&str>) -> Result<&'static str, ConversionError> {
    UNITS.primary_name(unit, unit_type)
}

pub fn abbreviation(unit: &str, unit_type: Option<&str>) -> Result<&'static str, ConversionError> {
    UNITS.abbreviation(unit, unit_type)
}

/// Volume of `mass` at `density`, see [`UnitRegistry::mass_to_volume`]
pub fn mass_to_volume(
    mass: f64,
    mass_unit: &str,
    density: f64,
    density_unit: &str,
    volume_unit: &str,
) -> Result<f64, ConversionError> {
    UNITS.mass_to_volume(mass, mass_unit, density, density_unit, volume_unit)
}

/// Mass of `volume` at `density`, see [`UnitRegistry::volume_to_mass`]
pub fn volume_to_mass(
    volume: f64,
    volume_unit: &str,
    density: f64,
    density_unit: &str,
    mass_unit: &str,
) -> Result<f64, ConversionError> {
    UNITS.volume_to_mass(volume, volume_unit, density, density_unit, mass_unit)
}
