//! The unit table: every unit type, its canonical units and their spellings
//!
//! Conversion factors are from the Handbook of Chemistry and Physics (HCP)
//! unless noted. Each type states its base unit; a `Scale` datum is the
//! value of one unit in that base.

use crate::unit::{ConversionKind, UnitDef, UnitTypeDef};

/// Primary name of the density unit that API gravity is defined against
pub const SPECIFIC_GRAVITY: &str = "specific gravity (15\u{b0}C)";

/// The compiled-in unit table, in display order
pub static UNIT_TABLE: &[UnitTypeDef] = &[
    // base: meter
    UnitTypeDef {
        name: "Length",
        kind: ConversionKind::Linear,
        units: &[
            UnitDef::scale("meter", 1.0, &["m", "meters", "metre"]),
            UnitDef::scale("centimeter", 0.01, &["cm", "centimeters"]),
            UnitDef::scale("millimeter", 0.001, &["mm", "millimeters"]),
            UnitDef::scale("micron", 0.000001, &["\u{b5}m", "micrometer", "microns"]),
            UnitDef::scale("kilometer", 1000.0, &["km", "kilometers"]),
            UnitDef::scale("foot", 0.3048, &["ft", "feet"]),
            UnitDef::scale("inch", 0.0254, &["in", "inches"]),
            UnitDef::scale("yard", 0.9144, &["yrd", "yards"]),
            UnitDef::scale("mile", 1609.344, &["mi", "miles"]),
            UnitDef::scale("nautical mile", 1852.0, &["nm", "nauticalmiles"]),
            UnitDef::scale("fathom", 1.8288, &["fthm", "fathoms"]),
            UnitDef::scale("latitude degree", 111120.0, &["latitudedegrees"]),
            UnitDef::scale("latitude minute", 1852.0, &["latitudeminutes"]),
        ],
    },
    // Technically a length (thickness of a slick), kept apart because it is
    // used differently. Base: micron. The mass/area units assume a density
    // of 0.95.
    UnitTypeDef {
        name: "Oil Concentration",
        kind: ConversionKind::Linear,
        units: &[
            UnitDef::scale("micron", 1.0, &["\u{b5}m", "microns", "micrometer"]),
            UnitDef::scale(
                "cubic meter per square kilometer",
                1.0,
                &["m\u{b3}/km\u{b2}", "m^3/km^2"],
            ),
            UnitDef::scale("millimeter", 1000.0, &["mm", "millimeters"]),
            UnitDef::scale("inch", 25400.0, &["in", "inches"]),
            UnitDef::scale("barrel per acre", 39.2866176, &["bbl/acre"]),
            UnitDef::scale(
                "barrel per square mile",
                0.06138533995,
                &["bbl/mile\u{b2}", "bbl/sq.mile"],
            ),
            UnitDef::scale("gallon per acre", 0.93539563202687404, &["gal/acre"]),
            UnitDef::scale("liter per hectare", 0.1, &["liter/hectare", "l/hectare"]),
            UnitDef::scale("liter per square meter", 1000.0, &["l/m\u{b2}", "l/m^2"]),
            UnitDef::scale("gram per square meter", 1.0526315789473684, &["g/m\u{b2}", "g/m^2"]),
            UnitDef::scale(
                "kilogram per square meter",
                1052.6315789473684,
                &["kg/m\u{b2}", "kg/m^2"],
            ),
            UnitDef::scale(
                "kilogram per square kilometer",
                0.0010526315789473684,
                &["g/km\u{b2}", "kg/km^2"],
            ),
        ],
    },
    // base: square meter
    UnitTypeDef {
        name: "Area",
        kind: ConversionKind::Linear,
        units: &[
            UnitDef::scale("square meter", 1.0, &["m\u{b2}", "m^2", "sq m"]),
            UnitDef::scale("square centimeter", 0.0001, &["cm\u{b2}", "cm^2", "sq cm"]),
            UnitDef::scale("square kilometer", 1e6, &["km\u{b2}", "km^2", "sq km"]),
            UnitDef::scale("acre", 4046.8564, &["ac", "acres"]),
            UnitDef::scale("square mile", 2589988.1, &["sq miles"]),
            UnitDef::scale("square nautical mile", 3429904.0, &["nm\u{b2}", "sq nm", "nm^2"]),
            UnitDef::scale("square yard", 0.83612736, &["yd\u{b2}", "sq yards", "square yards"]),
            UnitDef::scale(
                "square foot",
                0.09290304,
                &["ft\u{b2}", "ft^2", "sq foot", "square feet"],
            ),
            UnitDef::scale(
                "square inch",
                0.00064516,
                &["in\u{b2}", "in^2", "sq inch", "square inches"],
            ),
            UnitDef::scale("hectare", 10000.0, &["hectares", "ha"]),
        ],
    },
    // base: cubic meter
    UnitTypeDef {
        name: "Volume",
        kind: ConversionKind::Linear,
        units: &[
            UnitDef::scale("cubic meter", 1.0, &["m\u{b3}", "m^3", "cu m", "cubic meters"]),
            UnitDef::scale(
                "cubic kilometer",
                1e9,
                &["km\u{b3}", "km^3", "cu km", "cubic kilometers"],
            ),
            UnitDef::scale("cubic centimeter", 1e-6, &["cm\u{b3}", "cm^3", "cu cm", "cc"]),
            UnitDef::scale("milliliter", 1e-6, &["ml", "milliters"]),
            UnitDef::scale("barrel (petroleum)", 0.1589873, &["bbl", "barrels", "barrel", "bbls"]),
            UnitDef::scale("liter", 1e-3, &["l", "liters"]),
            UnitDef::scale("gallon", 0.0037854118, &["gal", "gallons", "usgal"]),
            UnitDef::scale("gallon (UK)", 0.004546090, &["ukgal", "gallons(uk)"]),
            UnitDef::scale("million US gallon", 3785.4118, &["milliongallons", "milgal"]),
            UnitDef::scale(
                "cubic foot",
                0.028316847,
                &["ft\u{b3}", "ft^3", "cu feet", "cubicfeet"],
            ),
            UnitDef::scale(
                "cubic inch",
                16.387064e-6,
                &["in\u{b3}", "in^3", "cu inch", "cubicinches"],
            ),
            UnitDef::scale(
                "cubic yard",
                0.76455486,
                &["yd\u{b3}", "yd^3", "cu yard", "cubicyards"],
            ),
            UnitDef::scale("fluid ounce", 2.9573530e-5, &["oz", "ounces(fluid)", "fluid oz"]),
            UnitDef::scale("fluid ounce (UK)", 2.841306e-5, &["ukoz", "fluid oz(uk)"]),
        ],
    },
    // base: kelvin, as (multiply by, add)
    UnitTypeDef {
        name: "Temperature",
        kind: ConversionKind::Affine,
        units: &[
            UnitDef::affine(
                "Kelvin",
                1.0,
                0.0,
                &["K", "degrees k", "degree k", "degrees kelvin", "degree kelvin", "deg k"],
            ),
            UnitDef::affine(
                "Celsius",
                1.0,
                273.15,
                &["C", "degrees c", "degrees celsius", "deg c", "centigrade"],
            ),
            UnitDef::affine(
                "Fahrenheit",
                0.55555555555555558,
                273.15 * (9.0 / 5.0) - 32.0,
                &["F", "degrees f", "degree f", "degrees fahrenheit", "deg f"],
            ),
        ],
    },
    // Temperature differences: no zero-point shift. Base: kelvin.
    UnitTypeDef {
        name: "Delta Temperature",
        kind: ConversionKind::Linear,
        units: &[
            UnitDef::scale(
                "Kelvin",
                1.0,
                &["K", "degrees k", "degree k", "degrees kelvin", "degree kelvin", "deg k"],
            ),
            UnitDef::scale(
                "Celsius",
                1.0,
                &["C", "degrees c", "degrees celsius", "deg c", "centigrade"],
            ),
            UnitDef::scale(
                "Fahrenheit",
                5.0 / 9.0,
                &["F", "degrees f", "degree f", "deg f", "degrees fahrenheit"],
            ),
        ],
    },
    // base: kilogram (weight is taken to be mass at standard g)
    UnitTypeDef {
        name: "Mass",
        kind: ConversionKind::Linear,
        units: &[
            UnitDef::scale("kilogram", 1.0, &["kg", "kilograms"]),
            UnitDef::scale("pound", 0.45359237, &["lb", "pounds", "lbs"]),
            UnitDef::scale("gram", 0.001, &["g", "grams"]),
            UnitDef::scale("milligram", 0.000001, &["mg"]),
            UnitDef::scale("microgram", 0.000000001, &["\u{b5}g", "ug"]),
            UnitDef::scale("ton", 907.18474, &["tons", "uston"]),
            UnitDef::scale(
                "metric ton (tonne)",
                1000.0,
                &["tonnes", "metric ton", "metric tons", "mt"],
            ),
            UnitDef::scale("slug", 14.5939, &["slugs"]),
            UnitDef::scale("ounce", 0.028349523, &["oz", "ounces"]),
            UnitDef::scale("ton (UK)", 1016.0469, &["ukton", "long ton"]),
        ],
    },
    // base: second
    UnitTypeDef {
        name: "Time",
        kind: ConversionKind::Linear,
        units: &[
            UnitDef::scale("second", 1.0, &["s", "sec", "seconds"]),
            UnitDef::scale("minute", 60.0, &["min", "minutes"]),
            UnitDef::scale("hour", 3600.0, &["hr", "hours", "hrs"]),
            UnitDef::scale("day", 86400.0, &["days"]),
        ],
    },
    // base: meter per second
    UnitTypeDef {
        name: "Velocity",
        kind: ConversionKind::Linear,
        units: &[
            UnitDef::scale(
                "meter per second",
                1.0,
                &[
                    "m/s",
                    "meters per second",
                    "mps",
                    "meter second-1",
                    "meters s-1",
                    "m s-1",
                    "meter/sec",
                ],
            ),
            UnitDef::scale("centimeter per second", 0.01, &["cm/s"]),
            UnitDef::scale("meter per minute", 0.01666666666, &["m/min", "meters per minute"]),
            UnitDef::scale("kilometer per hour", 0.277777, &["km/h", "km/hr"]),
            UnitDef::scale("kilometer per day", 0.0115740416666666, &["km/day", "km/d"]),
            UnitDef::scale("knot", 0.514444, &["kts", "knots"]),
            UnitDef::scale("mile per hour", 0.44704, &["mph", "miles per hour"]),
            UnitDef::scale(
                "foot per second",
                0.3048,
                &["ft/s", "ft/sec", "feet per second", "feet/s"],
            ),
            UnitDef::scale(
                "foot per minute",
                0.00508,
                &["ft/min", "feet per minute", "feet/min"],
            ),
            UnitDef::scale(
                "foot per hour",
                0.000084666,
                &["ft/hr", "feet per hour", "feet/hour"],
            ),
        ],
    },
    // base: cubic meter per second
    UnitTypeDef {
        name: "Discharge",
        kind: ConversionKind::Linear,
        units: &[
            UnitDef::scale(
                "cubic meter per second",
                1.0,
                &["m\u{b3}/s", "m^3/s", "cu m/s", "cms"],
            ),
            UnitDef::scale("cubic meter per min", 1.0 / 60.0, &["m\u{b3}/min", "m^3/min"]),
            UnitDef::scale("cubic meter per hour", 1.0 / 3600.0, &["m\u{b3}/hr", "m^3/hr"]),
            UnitDef::scale("liter per second", 0.001, &["l/s", "lps"]),
            UnitDef::scale("liter per minute", 0.001 / 60.0, &["l/min"]),
            UnitDef::scale(
                "cubic foot per second",
                0.02831685,
                &["ft\u{b3}/s", "cfs", "cu feet/s", "feet^3/s"],
            ),
            // calculated from cm^3/s
            UnitDef::scale("cubic foot per minute", 0.00047194744, &["ft\u{b3}/min", "ft^3/min"]),
            UnitDef::scale("gallon per day", 4.3812636805555563e-08, &["gal/day"]),
            UnitDef::scale("gallon per hour", 1.0515032833333335e-06, &["gal/hr"]),
            UnitDef::scale("gallon per minute", 6.3090197000000006e-05, &["gal/min", "gpm"]),
            UnitDef::scale("gallon per second", 0.0037854118, &["gal/s", "gal/sec"]),
            UnitDef::scale("barrel per hour", 4.4163138888888885e-05, &["bbl/hr"]),
            UnitDef::scale("barrel per day", 1.84013078e-06, &["bbl/day", "bbl/d"]),
        ],
    },
    // base: kilogram per second
    UnitTypeDef {
        name: "Mass Discharge",
        kind: ConversionKind::Linear,
        units: &[
            UnitDef::scale("kilogram per second", 1.0, &["kg/s"]),
            UnitDef::scale("gram per second", 0.001, &["g/s"]),
        ],
    },
    // base: gram per cubic centimeter. Specific gravity is relative to water
    // at 15C (60F), the oil industry standard.
    UnitTypeDef {
        name: "Density",
        kind: ConversionKind::DensityWithApi {
            reference: SPECIFIC_GRAVITY,
        },
        units: &[
            UnitDef::scale(
                "gram per cubic centimeter",
                1.0,
                &["g/cm\u{b3}", "g/cm^3", "grams per cubic centimeter"],
            ),
            UnitDef::scale("gram per liter", 0.001, &["g/L", "gram per litre"]),
            UnitDef::scale("kilogram per liter", 1.0, &["kg/L", "kilogram per litre"]),
            UnitDef::scale("gram per milliliter", 1.0, &["g/mL", "gram per millilitre"]),
            UnitDef::scale(
                SPECIFIC_GRAVITY,
                0.99913,
                &["S", "specificgravity", "Spec grav", "SG", "specificgravity(15C)"],
            ),
            UnitDef::scale("kilogram per cubic meter", 0.001, &["kg/m\u{b3}", "kg/m^3"]),
            UnitDef::scale(
                "tonne per cubic meter",
                1.0,
                &["tonne/m\u{b3}", "tonne/m^3", "t/m^3", "t/m\u{b3}"],
            ),
            UnitDef::scale(
                "pound per cubic foot",
                0.016018463,
                &["lb/ft\u{b3}", "lbs/ft^3", "lb/ft^3"],
            ),
            UnitDef::scale("pound per gallon", 0.11982643, &["lbs/gal", "lb/gal"]),
            UnitDef::api("API degree", &["api"]),
        ],
    },
    // base: Stoke. Saybolt values are approximations: SSU from CRC (only good
    // above 100 cSt), SSF from the Fuel Oil Manual (good at 724 cSt).
    UnitTypeDef {
        name: "Kinematic Viscosity",
        kind: ConversionKind::Linear,
        units: &[
            UnitDef::scale("Stoke", 1.0, &["St", "stokes"]),
            UnitDef::scale("centiStoke", 0.01, &["cSt", "centistokes"]),
            UnitDef::scale("square millimeter per second", 0.01, &["mm\u{b2}/s", "mm^2/s"]),
            UnitDef::scale("square centimeter per second", 1.0, &["cm\u{b2}/s", "cm^2/s"]),
            UnitDef::scale("square meter per second", 10000.0, &["m\u{b2}/s", "m^2/s"]),
            UnitDef::scale(
                "square inch per second",
                6.4516,
                &["in\u{b2}/s", "in^2/s", "squareinchespersecond"],
            ),
            UnitDef::scale("Saybolt Universal Second", 1.0 / 462.0, &["SSU", "SUS"]),
            UnitDef::scale("Saybolt Furol Second", 0.02116959064, &["SSF", "SFS"]),
        ],
    },
    // base: Pascal second
    UnitTypeDef {
        name: "Dynamic Viscosity",
        kind: ConversionKind::Linear,
        units: &[
            UnitDef::scale("kilogram per meter per second", 1.0, &["kg/(m s)"]),
            UnitDef::scale("Pascal second", 1.0, &["Pa s"]),
            UnitDef::scale("milliPascal second", 0.001, &["mPa s"]),
            UnitDef::scale(
                "Newton seconds per square meter",
                1.0,
                &["N s/m\u{b2}", "N s/m^2"],
            ),
            UnitDef::scale("gram per centimeter per second", 0.1, &["g/(cm s)"]),
            UnitDef::scale("poise", 0.1, &["p"]),
            UnitDef::scale(
                "dyne seconds per square centimeter",
                0.1,
                &["dyne s/cm\u{b2}", "dyne s/cm^2"],
            ),
            UnitDef::scale("centipoise", 0.001, &["cP"]),
        ],
    },
    // Force per length, plus energy per area (erg/cm^2 and friends).
    // Base: Newton per meter.
    UnitTypeDef {
        name: "Interfacial Tension",
        kind: ConversionKind::Linear,
        units: &[
            UnitDef::scale("Newton per meter", 1.0, &["N/m"]),
            UnitDef::scale("milliNewton per meter", 0.001, &["mN/m"]),
            UnitDef::scale("dyne per centimeter", 0.001, &["dyne/cm", "dyn/cm"]),
            UnitDef::scale("Poundal per inch", 5.443108492, &["pdl/in"]),
            UnitDef::scale("Pound force per inch", 175.126837, &["lbf/in"]),
            UnitDef::scale("erg per square centimeter", 0.001, &["erg/cm\u{b2}", "erg/cm^2"]),
            UnitDef::scale("erg per square millimeter", 0.1, &["erg/mm\u{b2}", "erg/mm^2"]),
            UnitDef::scale("joule per square meter", 1.0, &["j/m\u{b2}", "j/m^2"]),
        ],
    },
    // base: Pascal
    UnitTypeDef {
        name: "Pressure",
        kind: ConversionKind::Linear,
        units: &[
            UnitDef::scale("Pascal", 1.0, &["Pa"]),
            UnitDef::scale("kiloPascal", 1000.0, &["kPa"]),
            UnitDef::scale("megaPascal", 1000000.0, &["MPa"]),
            UnitDef::scale("Newton per square meter", 1.0, &["N/m\u{b2}", "N/m^2"]),
            UnitDef::scale("bar", 100000.0, &["bars"]),
            UnitDef::scale("millibar", 100.0, &["mbar"]),
            UnitDef::scale("dyne per square centimeter", 0.1, &["dyn/cm\u{b2}", "dyn/cm^2"]),
            UnitDef::scale("pound per square inch", 6894.76, &["lb/in\u{b2}", "lb/in^2", "psi"]),
        ],
    },
    // Mixes mass/volume and mass/mass, which only works because the solvent
    // is water. Base: kilogram per cubic meter.
    UnitTypeDef {
        name: "Concentration In Water",
        kind: ConversionKind::Linear,
        units: &[
            UnitDef::scale("kilogram per cubic meter", 1.0, &["kg/m\u{b3}", "kg/m^3"]),
            UnitDef::scale("gram per cubic meter", 1e-3, &["g/m\u{b3}", "g/m^3"]),
            UnitDef::scale("part per million", 1e-3, &["ppm", "parts per million"]),
            UnitDef::scale("part per billion", 1e-6, &["ppb", "parts per billion"]),
            UnitDef::scale(
                "part per thousand",
                1.0,
                &["\u{2030}", "0/00", "ppt", "parts per thousand"],
            ),
            UnitDef::scale("part per trillion", 1e-9, &["pptr", "parts per trillion"]),
            UnitDef::scale("fraction (decimal)", 1e3, &["fraction", "mass per mass", "1"]),
            UnitDef::scale("percent", 10.0, &["%", "parts per hundred"]),
            UnitDef::scale("pound per cubic foot", 16.018450433864, &["lb/ft\u{b3}", "lb/ft^3"]),
            UnitDef::scale("milligram per liter", 0.001, &["mg/l"]),
            UnitDef::scale("gram per liter", 1.0, &["g/l"]),
            UnitDef::scale("kilogram per liter", 1000.0, &["kg/l"]),
            UnitDef::scale("milligram per gram", 1.0, &["mg/g"]),
            UnitDef::scale("milligram per kilogram", 0.001, &["mg/kg"]),
            UnitDef::scale("milligram per milliliter", 1.0, &["mg/ml"]),
            UnitDef::scale("microgram per liter", 1e-6, &["\u{b5}g/l", "ug/l"]),
            UnitDef::scale("microgram per gram", 1e-3, &["\u{b5}g/g", "ug/g"]),
            UnitDef::scale("nanogram per liter", 1e-9, &["ng/l"]),
        ],
    },
    // unitless: base is a plain fraction
    UnitTypeDef {
        name: "Concentration",
        kind: ConversionKind::Linear,
        units: &[
            UnitDef::scale("fraction (decimal)", 1.0, &["fraction", "mass per mass", "1"]),
            UnitDef::scale("percent", 0.01, &["%", "parts per hundred"]),
            UnitDef::scale(
                "part per thousand",
                1e-3,
                &["\u{2030}", "0/00", "parts per thousand"],
            ),
            UnitDef::scale("part per million", 1e-6, &["ppm", "parts per million"]),
            UnitDef::scale("part per billion", 1e-9, &["ppb", "parts per billion"]),
            UnitDef::scale("part per trillion", 1e-12, &["parts per trillion"]),
        ],
    },
    UnitTypeDef {
        name: "Dimensionless",
        kind: ConversionKind::Linear,
        units: &[
            UnitDef::scale("fraction (decimal)", 1.0, &["number", "fraction", "1"]),
            UnitDef::scale("percent", 0.01, &["%", "parts per hundred"]),
            UnitDef::scale(
                "part per thousand",
                1e-3,
                &["\u{2030}", "0/00", "ppt", "parts per thousand"],
            ),
        ],
    },
    // Any mass/mass ratio
    UnitTypeDef {
        name: "Mass Fraction",
        kind: ConversionKind::Linear,
        units: &[
            UnitDef::scale("fraction (decimal)", 1.0, &["fraction", "1", "mass per mass"]),
            UnitDef::scale("percent", 0.01, &["%", "parts per hundred"]),
            UnitDef::scale(
                "part per thousand",
                1e-3,
                &["\u{2030}", "0/00", "ppt", "parts per thousand"],
            ),
            UnitDef::scale("part per million", 1e-6, &["ppm", "parts per million"]),
            UnitDef::scale("part per billion", 1e-9, &["ppb", "parts per billion"]),
            UnitDef::scale("part per trillion", 1e-12, &["parts per trillion"]),
            UnitDef::scale("gram per kilogram", 1e-3, &["g/kg"]),
            UnitDef::scale("milligram per gram", 1e-3, &["mg/g"]),
            UnitDef::scale("milligram per kilogram", 1e-6, &["mg/kg"]),
            UnitDef::scale("microgram per gram", 1e-6, &["\u{b5}g/g", "ug/g"]),
            UnitDef::scale("nanogram per gram", 1e-9, &["ng/g", "nanograms per gram"]),
        ],
    },
    // Any volume/volume ratio
    UnitTypeDef {
        name: "Volume Fraction",
        kind: ConversionKind::Linear,
        units: &[
            UnitDef::scale("fraction (decimal)", 1.0, &["fraction", "1", "mass per mass"]),
            UnitDef::scale("percent", 0.01, &["%", "parts per hundred"]),
            UnitDef::scale(
                "part per thousand",
                1e-3,
                &["\u{2030}", "0/00", "ppt", "parts per thousand"],
            ),
            UnitDef::scale("part per million", 1e-6, &["ppm", "parts per million"]),
            UnitDef::scale("part per billion", 1e-9, &["ppb", "parts per billion"]),
            UnitDef::scale("part per trillion", 1e-12, &["parts per trillion"]),
            UnitDef::scale("milliliter per liter", 1e-3, &["ml/l", "mL/dm^3"]),
            UnitDef::scale("liter per cubic meter", 1e-3, &["l/m^3"]),
        ],
    },
    // base: radian
    UnitTypeDef {
        name: "Angular Measure",
        kind: ConversionKind::Linear,
        units: &[
            UnitDef::scale("radians", 1.0, &["radian", "rad"]),
            UnitDef::scale("degrees", std::f64::consts::PI / 180.0, &["degree", "deg"]),
        ],
    },
    // base: radian per second
    UnitTypeDef {
        name: "Angular Velocity",
        kind: ConversionKind::Linear,
        units: &[
            UnitDef::scale("rad/s", 1.0, &["1/s", "radians/sec"]),
            UnitDef::scale("hertz", 2.0 * std::f64::consts::PI, &["hz", "cycles/sec"]),
            UnitDef::scale("rpm", std::f64::consts::PI / 30.0, &["rotations per minute"]),
        ],
    },
];

/// Look up a unit type definition by its exact display name
pub fn unit_type_def(name: &str) -> Option<&'static UnitTypeDef> {
    UNIT_TABLE.iter().find(|t| t.name == name)
}
