//! Unit table entries with their conversion data

use serde::ser::{SerializeTuple, Serializer};
use serde::Serialize;

/// How a value in one unit maps onto the base unit of its type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Datum {
    /// base = value * scale
    Scale(f64),
    /// base = (value + offset) * scale, for units with their own zero point
    Affine { scale: f64, offset: f64 },
    /// Degrees API: nonlinear, converted through specific gravity
    ApiGravity,
}

impl Datum {
    pub fn is_scale(&self) -> bool {
        matches!(self, Datum::Scale(_))
    }

    pub fn is_affine(&self) -> bool {
        matches!(self, Datum::Affine { .. })
    }
}

impl Serialize for Datum {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Datum::Scale(scale) => serializer.serialize_f64(*scale),
            Datum::Affine { scale, offset } => {
                let mut pair = serializer.serialize_tuple(2)?;
                pair.serialize_element(scale)?;
                pair.serialize_element(offset)?;
                pair.end()
            }
            Datum::ApiGravity => serializer.serialize_str("API gravity"),
        }
    }
}

/// Which conversion rule a unit type uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum ConversionKind {
    /// Every unit is a `Datum::Scale`
    Linear,
    /// Every unit is a `Datum::Affine`
    Affine,
    /// Scales plus exactly one `Datum::ApiGravity` unit, which is converted
    /// through `reference` (the specific gravity unit)
    DensityWithApi { reference: &'static str },
}

/// One canonical unit: its primary name, datum and accepted spellings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDef {
    pub name: &'static str,
    pub datum: Datum,
    /// The first synonym, when present, is the conventional abbreviation
    pub synonyms: &'static [&'static str],
}

impl UnitDef {
    pub const fn scale(name: &'static str, scale: f64, synonyms: &'static [&'static str]) -> Self {
        UnitDef {
            name,
            datum: Datum::Scale(scale),
            synonyms,
        }
    }

    pub const fn affine(
        name: &'static str,
        scale: f64,
        offset: f64,
        synonyms: &'static [&'static str],
    ) -> Self {
        UnitDef {
            name,
            datum: Datum::Affine { scale, offset },
            synonyms,
        }
    }

    pub const fn api(name: &'static str, synonyms: &'static [&'static str]) -> Self {
        UnitDef {
            name,
            datum: Datum::ApiGravity,
            synonyms,
        }
    }

    /// First synonym, or the primary name if there are none
    pub fn abbreviation(&self) -> &'static str {
        self.synonyms.first().copied().unwrap_or(self.name)
    }

    /// Primary name followed by every synonym
    pub fn all_names(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.name).chain(self.synonyms.iter().copied())
    }
}

/// A category of physical quantity and its canonical units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitTypeDef {
    pub name: &'static str,
    pub kind: ConversionKind,
    pub units: &'static [UnitDef],
}
