//! Known conversion values, mostly from the Handbook of Chemistry and Physics

use std::f64::consts::PI;

use nucos_core::{normalize, ConversionError};
use nucos_units::{
    convert, convert_with_type, is_same_unit, mass_to_volume, unit_names, unit_types,
    volume_to_mass, IndexPolicy, UnitRegistry, UNITS, UNIT_TABLE,
};

const REL_TOL: f64 = 1e-5;

fn is_close(a: f64, b: f64) -> bool {
    let diff = (a - b).abs();
    diff <= REL_TOL * a.abs().max(b.abs()) || diff < 1e-12
}

/// (unit type, from, to, value, expected)
const KNOWN_VALUES: &[(&str, &str, &str, f64, f64)] = &[
    ("length", "meters", "feet", 1.0, 3.2808398),
    ("length", "feet", "meters", 1.0, 0.3048),
    ("length", "feet", "miles", 1.0, 0.000189393),
    ("length", "feet", "nauticalmiles", 1.0, 0.00016457883),
    ("length", "feet", "inches", 1.0, 12.0),
    ("length", "fathom", "cm", 1.0, 182.88),
    ("length", "Latitude Minutes", "NauticalMiles", 1.0, 1.0),
    ("Length", "LatitudeDegrees", "NauticalMiles", 1.0, 60.0),
    ("Length", "micron", "mm", 100.0, 0.1),
    ("Length", "\u{b5}m", "m", 1.0, 1e-6),
    ("Length", "km", "yard", 1.0, 1093.6133),
    // oil slick thickness; the mass/area units assume a density of 0.95
    ("Oil Concentration", "micron", "mm", 100.0, 0.1),
    ("Oil Concentration", "\u{b5}m", "mm", 1.0, 1e-3),
    ("Oil Concentration", "in", "mm", 1.0, 25.4),
    ("Oil Concentration", "micron", "bbl/acre", 1.0, 0.02545396),
    ("Oil Concentration", "bbl/acre", "m^3/km^2", 1.0, 39.2866),
    ("Oil Concentration", "bbl/acre", "bbl/sq.mile", 1.0, 640.0),
    ("Oil Concentration", "gal/acre", "bbl/acre", 42.0, 1.0),
    ("Oil Concentration", "m\u{b3}/km\u{b2}", "liter/hectare", 1.0, 10.0),
    ("Oil Concentration", "l/m\u{b2}", "liter/hectare", 1.0, 10000.0),
    ("Oil Concentration", "micron", "g/m^2", 100.0, 95.0),
    ("Oil Concentration", "kg/m^2", "micron", 0.95, 1000.0),
    ("Oil Concentration", "kg/km^2", "g/m^2", 1.0, 1e-3),
    ("Oil Concentration", "kg/m^2", "g/m^2", 1.0, 1e3),
    ("Area", "sq m", "ft^2", 10.0, 107.63910),
    ("Area", "Acre", "square yards", 1.0, 4840.0),
    ("Area", "Hectares", "cm^2", 1.0, 1e8),
    ("Area", "ha", "sq miles", 1.0, 0.0038610216),
    ("Area", "ft^2", "in^2", 1.0, 144.0),
    ("Area", "km^2", "ft^2", 1.0, 1.0763910e7),
    ("Area", "nm^2", "acre", 1.0, 847.547741),
    ("Area", "nm^2", "square mile", 1.0, 1.3242932),
    ("Volume", "liters", "gal", 1.0, 0.26417205),
    ("Volume", "cubicmeters", "gal", 0.0037854118, 1.0),
    ("Volume", "ml", "cc", 1.0, 1.0),
    ("Volume", "milliongallons", "gal", 1.0, 1e6),
    ("Volume", "liters", "ft\u{b3}", 1.0, 0.035314667),
    ("volume", "bbl", "l", 1.0, 158.9873),
    ("volume", "cubicinches", "cubicfeet", 1.0, 0.00057870370),
    ("volume", "cc", "cubicyard", 1.0, 1.3079506e-6),
    ("volume", "fluid ounce (UK)", "fluid oz", 1.0, 0.9607594),
    ("volume", "gallon (UK)", "gal", 1.0, 1.200949),
    ("volume", "cubic kilometer", "m\u{b3}", 1.0, 1e9),
    ("volume", "cubic kilometer", "ft^3", 1.0, 3.531467e10),
    ("mass", "kg", "lb", 1.0, 2.2046226),
    ("Mass", "kg", "metrictons", 1.0, 0.001),
    ("mass", "pound", "slug", 1.0, 0.0310810),
    ("mass", "ounce", "lbs", 1.0, 0.0625),
    ("mass", "ton", "gram", 1.0, 907184.74),
    ("mass", "ton(UK)", "ton", 1.0, 1.12),
    ("mass", "mg", "g", 1000.0, 1.0),
    ("mass", "g", "\u{b5}g", 1.0, 1e6),
    ("Time", "seconds", "minutes", 60.0, 1.0),
    ("time", "days", "minutes", 1.0, 24.0 * 60.0),
    ("time", "hr", "seconds", 1.0, 60.0 * 60.0),
    ("Velocity", "m/s", "cm/s", 1.0, 100.0),
    ("Velocity", "m s-1", "cm/s", 1.0, 100.0),
    ("Velocity", "m.s-1", "cm/s", 1.0, 100.0),
    ("Velocity", "km/h", "kts", 1.0, 0.5399568),
    ("Velocity", "mph", "ft/s", 1.0, 1.4666666),
    ("Velocity", "ft/min", "mph", 1.0, 0.01136363),
    ("Velocity", "ft/s", "m/min", 1.0, 18.288),
    ("Velocity", "ft/hr", "cm/s", 1.0, 0.0084666),
    ("Velocity", "ft/hr", "km/hr", 1.0, 0.0003048),
    ("Velocity", "knot", "m/s", 1.0, 0.514444),
    ("Velocity", "km/day", "m/s", 1.0, 0.01157404166666666),
    ("Velocity", "km/hr", "km/day", 1.0, 24.0),
    ("Discharge", "cfs", "l/s", 1.0, 28.31685),
    ("Discharge", "gal/hr", "gal/min", 60.0, 1.0),
    ("Discharge", "bbl/day", "l/s", 1.0, 158.9873 / 24.0 / 3600.0),
    ("Discharge", "ft^3/min", "gal/min", 1.0, 7.4805195),
    ("Discharge", "m^3/min", "m^3/s", 1.0, 1.0 / 60.0),
    ("Discharge", "m^3/min", "gal/min", 1.0, 264.1721),
    ("Discharge", "gal/hr", "m^3/min", 1.0, 6.3090197e-5),
    ("Discharge", "gal/hr", "m^3/hr", 1.0, 6.3090197e-5 * 60.0),
    ("Discharge", "bbl/day", "gal/day", 1.0, 42.0),
    ("Discharge", "l/min", "cfs", 1.0, 0.000588578),
    ("Discharge", "bbl/hr", "cfs", 1.0, 5.614583 / 3600.0),
    ("Discharge", "cfs", "gal/sec", 1.0, 448.83117 / 60.0),
    ("Mass Discharge", "kg/s", "g/s", 1.0, 1000.0),
    ("Kinematic Viscosity", "stokes", "cSt", 1.0, 100.0),
    ("Kinematic Viscosity", "cm^2/s", "m^2/s", 1.0, 0.0001),
    ("Kinematic Viscosity", "cm^2/s", "square inch per second", 1.0, 0.15500031),
    ("Kinematic Viscosity", "SSU", "cSt", 462.0, 100.0),
    ("Kinematic Viscosity", "SSF", "cSt", 342.0, 724.0),
    ("Kinematic Viscosity", "mm^2/s", "cSt", 1.0, 1.0),
    ("Dynamic Viscosity", "kg/(m s)", "Pa s", 1.0, 1.0),
    ("Dynamic Viscosity", "Pa s", "N s/m^2", 1.0, 1.0),
    ("Dynamic Viscosity", "N s/m^2", "kg/(m s)", 1.0, 1.0),
    ("Dynamic Viscosity", "g/(cm s)", "Pa s", 1.0, 0.1),
    ("Dynamic Viscosity", "poise", "Pa s", 1.0, 0.1),
    ("Dynamic Viscosity", "dyne s/cm^2", "Pa s", 1.0, 0.1),
    ("Dynamic Viscosity", "centipoise", "Pa s", 1.0, 0.001),
    ("Dynamic Viscosity", "mPa s", "Pa s", 1.0, 0.001),
    ("temperature", "F", "C", 32.0, 0.0),
    ("temperature", "F", "C", 212.0, 100.0),
    ("temperature", "C", "K", 0.0, 273.15),
    ("temperature", "F", "K", 32.0, 273.15),
    ("deltatemperature", "F", "C", 1.0, 5.0 / 9.0),
    ("deltatemperature", "F", "C", 0.0, 0.0),
    ("deltatemperature", "C", "K", 12.2, 12.2),
    ("deltatemperature", "K", "F", 10.0, 90.0 / 5.0),
    // specific gravity is relative to water at 15C: 0.99913 g/cm^3
    ("density", "g/cm^3", "Specific Gravity (15C)", 1.0, 1.0 / 0.99913),
    ("density", "g/cm^3", "Specific Gravity (15C)", 0.99913, 1.0),
    ("density", "g/L", "kg/m^3", 1.0, 1.0),
    ("density", "kg/L", "kg/m^3", 1.0, 1000.0),
    ("density", "g/mL", "kg/m^3", 1.0, 1000.0),
    ("density", "Specific gravity", "gramspercubiccentimeter", 1.0, 0.99913),
    ("density", "SG", "API", 1.0, 10.0),
    ("density", "SG", "API", 2.0, -60.75),
    ("density", "SG", "API", 0.9, 25.7222),
    ("density", "API", "SG", 25.7222, 0.9),
    ("density", "lbs/ft^3", "Grams per Cubic Centimeter", 1.0, 0.016018463),
    ("density", "tonne per cubic meter", "kg/m^3", 1.0, 1000.0),
    ("density", "T/m\u{b3}", "kg/m^3", 1.0, 1000.0),
    ("density", "kg/m^3", "pound per gallon", 1.0, 0.0083454),
    ("density", "lb/gal", "g/cm\u{b3}", 1.0, 0.119826427),
    ("Interfacial Tension", "dyn/cm", "N/m", 1.0, 0.001),
    ("Interfacial Tension", "N/m", "dyn/cm", 1.0, 1000.0),
    ("Interfacial Tension", "N/m", "J/m^2", 0.001, 0.001),
    ("Interfacial Tension", "N/m", "mN/m", 1.0, 1000.0),
    ("Interfacial Tension", "N/m", "dyne/cm", 1.0, 1000.0),
    ("Interfacial Tension", "N/m", "pdl/in", 1.0, 0.1837185500656),
    ("Interfacial Tension", "N/m", "lbf/in", 1.0, 0.0057101470975576),
    ("Interfacial Tension", "N/m", "erg/cm^2", 1.0, 1000.0),
    ("Interfacial Tension", "N/m", "erg/cm\u{b2}", 1.0, 1000.0),
    ("Interfacial Tension", "N/m", "erg/mm^2", 1.0, 10.0),
    ("Interfacial Tension", "N/m", "erg/mm\u{b2}", 1.0, 10.0),
    ("Concentration In Water", "ppb", "ppm", 1000.0, 1.0),
    ("Concentration In Water", "fraction", "%", 1.0, 100.0),
    ("ConcentrationInWater", "lb/ft^3", "mg/l", 1.0, 16018.450433864),
    ("ConcentrationInwater", "mg/l", "ppm", 1.0, 1.0),
    ("ConcentrationInwater", "mg/l", "ppb", 1.0, 1000.0),
    ("ConcentrationInwater", "mg/kg", "ppb", 1.0, 1000.0),
    ("ConcentrationInWater", "ppt", "percent", 1.0, 0.1),
    ("ConcentrationInWater", "ug/l", "ppb", 1.0, 1.0),
    ("ConcentrationInWater", "\u{b5}g/l", "ppb", 1.0, 1.0),
    ("ConcentrationInWater", "ug/g", "ppm", 1.0, 1.0),
    ("ConcentrationInWater", "mg/ml", "ppm", 1.0, 1000.0),
    ("ConcentrationInWater", "mg/g", "ppt", 1.0, 1.0),
    ("ConcentrationInWater", "nanogramperliter", "partpertrillion", 1.0, 1.0),
    ("ConcentrationInWater", "g/m\u{b3}", "ppm", 1.0, 1.0),
    ("ConcentrationInWater", "g/l", "ppm", 1.0, 1000.0),
    ("ConcentrationInWater", "kg/l", "part per thousand", 1.0, 1000.0),
    ("Concentration", "fraction", "%", 1.0, 100.0),
    ("Concentration", "percent", "\u{2030}", 1.0, 10.0),
    ("Concentration", "\u{2030}", "ppm", 1.0, 1000.0),
    ("Concentration", "ppm", "ppb", 1.0, 1000.0),
    ("Concentration", "ppb", "part per trillion", 1.0, 1000.0),
    ("Concentration", "parts per trillion", "1", 1.0, 1e-12),
    ("Dimensionless", "fraction", "%", 1.0, 100.0),
    ("Dimensionless", "percent", "\u{2030}", 1.0, 10.0),
    ("MassFraction", "fraction", "%", 1.0, 100.0),
    ("MassFraction", "\u{2030}", "percent", 1.0, 0.1),
    ("MassFraction", "ppb", "ppm", 1000.0, 1.0),
    ("MassFraction", "parts per trillion", "1", 1.0, 1e-12),
    ("MassFraction", "g/kg", "fraction", 1.0, 1e-3),
    ("MassFraction", "mg/g", "0/00", 1.0, 1.0),
    ("MassFraction", "mg/kg", "ppb", 1.0, 1000.0),
    ("MassFraction", "mg/kg", "fraction", 1.0, 1e-6),
    ("MassFraction", "ug/g", "ppm", 1.0, 1.0),
    ("MassFraction", "ng/g", "fraction", 1.0, 1e-9),
    ("MassFraction", "ng/g", "ppb", 1.0, 1.0),
    ("VolumeFraction", "fraction", "%", 1.0, 100.0),
    ("VolumeFraction", "\u{2030}", "percent", 1.0, 0.1),
    ("VolumeFraction", "ppb", "ppm", 1000.0, 1.0),
    ("VolumeFraction", "parts per trillion", "1", 1.0, 1e-12),
    ("VolumeFraction", "mL/L", "fraction", 1.0, 1e-3),
    ("VolumeFraction", "L/m^3", "0/00", 1.0, 1.0),
    ("Angular Measure", "degree", "radian", 180.0, PI),
    ("Angular Measure", "radians", "degrees", 2.0 * PI, 360.0),
    ("Angular Velocity", "1/s", "rad/s", 1.0, 1.0),
    ("Angular Velocity", "hz", "1/s", 5.0, 5.0 * 2.0 * PI),
    ("Angular Velocity", "rpm", "1/s", 1.0, 2.0 * PI / 60.0),
    ("Pressure", "Pa", "N/m^2", 1.0, 1.0),
    ("Pressure", "psi", "Pa", 5.0, 34473.8),
];

/// Types whose rows cannot be checked without naming the type
const NOT_INFERRABLE: &[&str] = &[
    "oilconcentration",
    "concentrationinwater",
    "massfraction",
    "volumefraction",
    "deltatemperature",
];

#[test]
fn test_known_values_with_type() {
    for &(unit_type, from, to, value, expected) in KNOWN_VALUES {
        let got = convert_with_type(unit_type, from, to, value)
            .unwrap_or_else(|e| panic!("{unit_type}: {from} -> {to}: {e}"));
        assert!(
            is_close(got, expected),
            "{unit_type}: {value} {from} -> {to}: got {got}, expected {expected}"
        );
    }
}

#[test]
fn test_known_values_inferred_type() {
    for &(unit_type, from, to, value, expected) in KNOWN_VALUES {
        if NOT_INFERRABLE.contains(&normalize(unit_type).as_str()) {
            continue;
        }
        let got = convert(from, to, value)
            .unwrap_or_else(|e| panic!("{from} -> {to}: {e}"));
        assert!(
            is_close(got, expected),
            "{value} {from} -> {to}: got {got}, expected {expected}"
        );
    }
}

#[test]
fn test_round_trip() {
    for &(unit_type, from, to, value, _) in KNOWN_VALUES {
        let there = convert_with_type(unit_type, from, to, value).unwrap();
        let back = convert_with_type(unit_type, to, from, there).unwrap();
        assert!(is_close(back, value), "{unit_type}: {from} <-> {to}");
    }
}

#[test]
fn test_identity_is_exact() {
    for unit_type in unit_types() {
        for unit in unit_names(unit_type).unwrap() {
            for x in [0.0, 1.0, -3.5, 1234.5678] {
                assert_eq!(convert_with_type(unit_type, unit, unit, x).unwrap(), x);
            }
        }
    }
}

#[test]
fn test_one_shot() {
    assert!(is_close(convert("meter", "foot", 1.0).unwrap(), 3.28083989501));
    assert!(is_close(convert("API", "SG", 10.0).unwrap(), 1.0));
    assert!(is_close(convert("meter second-1", "knot", 1.0).unwrap(), 1.94384));
    assert!(is_close(convert("m/s", "knot", 1.0).unwrap(), 1.94384));
}

#[test]
fn test_bare_oz_is_fluid_ounce() {
    let cc = convert("oz", "cc", 1.0).unwrap();
    assert!(is_close(cc, 29.57353));
}

#[test]
fn test_error_surfaces() {
    assert!(matches!(
        convert_with_type("BadType", "feet", "miles", 0.0),
        Err(ConversionError::InvalidUnitType { .. })
    ));
    assert!(matches!(
        convert_with_type("Length", "eggs", "miles", 0.0),
        Err(ConversionError::InvalidUnit { .. })
    ));
    assert!(matches!(
        convert_with_type("Length", "feet", "spam", 0.0),
        Err(ConversionError::InvalidUnit { .. })
    ));
    assert!(matches!(
        convert_with_type("Mass", "kg", "miles", 0.0),
        Err(ConversionError::InvalidUnit { .. })
    ));
    assert!(matches!(
        convert("kg", "miles", 0.0),
        Err(ConversionError::IncompatibleUnits { .. })
    ));
    for (from, to) in [("kgt", "miles"), ("kg", "miless"), ("foo", "spam"), ("micron", "g/m^2")] {
        assert!(
            matches!(convert(from, to, 0.0), Err(ConversionError::NotSupportedUnit { .. })),
            "{from} -> {to}"
        );
    }
}

#[test]
fn test_same_unit() {
    assert!(is_same_unit("knot", "kts"));
    assert!(!is_same_unit("knot", "m/s"));
    assert!(!is_same_unit("nonexistent", "gal/sec"));
}

#[test]
fn test_oil_quantity() {
    let bbl = mass_to_volume(1.0, "metricton", 25.0, "API", "bbl").unwrap();
    assert!(is_close(bbl, 6.9626324));
    let bbl = mass_to_volume(1.0, "metricton", 0.816, "SG", "bbl").unwrap();
    assert!(is_close(bbl, 7.71481307));

    let tonnes = volume_to_mass(6.9626324, "bbls", 25.0, "API", "metricton").unwrap();
    assert!(is_close(tonnes, 1.0));
    let long_tons = volume_to_mass(7.83861191, "bbls", 0.816, "SG", "longton").unwrap();
    assert!(is_close(long_tons, 1.0));
}

#[test]
fn test_global_index_builds_over_full_table() {
    let registry = UnitRegistry::with_policy(UNIT_TABLE, &IndexPolicy::default());
    assert!(registry.is_ok(), "{:?}", registry.err());
    assert_eq!(UNITS.unit_types().len(), 23);
    assert!(unit_types().contains(&"Length"));
}

#[test]
fn test_full_table_needs_the_policy() {
    assert!(UnitRegistry::with_policy(UNIT_TABLE, &IndexPolicy::permissive()).is_err());
}
