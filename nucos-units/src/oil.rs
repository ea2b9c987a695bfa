//! Oil quantity: mass/volume conversion at a known density
//!
//! Density can be given in any density unit, API gravity included. Every
//! step goes through the explicit-type conversion form.

use nucos_core::ConversionError;

use crate::registry::UnitRegistry;

const DENSITY_BASE: &str = "kg/m^3";
const MASS_BASE: &str = "kg";
const VOLUME_BASE: &str = "m^3";

impl UnitRegistry {
    /// Volume in `volume_unit` of `mass` at the given density
    pub fn mass_to_volume(
        &self,
        mass: f64,
        mass_unit: &str,
        density: f64,
        density_unit: &str,
        volume_unit: &str,
    ) -> Result<f64, ConversionError> {
        let density = self.convert_with_type("Density", density_unit, DENSITY_BASE, density)?;
        let mass = self.convert_with_type("Mass", mass_unit, MASS_BASE, mass)?;
        self.convert_with_type("Volume", VOLUME_BASE, volume_unit, mass / density)
    }

    /// Mass in `mass_unit` of `volume` at the given density
    pub fn volume_to_mass(
        &self,
        volume: f64,
        volume_unit: &str,
        density: f64,
        density_unit: &str,
        mass_unit: &str,
    ) -> Result<f64, ConversionError> {
        let density = self.convert_with_type("Density", density_unit, DENSITY_BASE, density)?;
        let volume = self.convert_with_type("Volume", volume_unit, VOLUME_BASE, volume)?;
        self.convert_with_type("Mass", MASS_BASE, mass_unit, volume * density)
    }
}
