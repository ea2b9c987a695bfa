//! Conversion rules, one per kind of unit type
//!
//! Resolution happens before dispatch: by the time a value gets here both
//! units are known members of the type, so the rules themselves cannot fail.

use nucos_core::TableError;

use crate::resolver::{SynonymResolver, UnitId};
use crate::unit::{ConversionKind, Datum, UnitTypeDef};

/// Numerator of the API gravity relation `SG = 141.5 / (API + 131.5)`
pub const API_NUMERATOR: f64 = 141.5;
/// Offset of the API gravity relation
pub const API_OFFSET: f64 = 131.5;

/// Specific gravity for a given API gravity
pub fn api_to_specific_gravity(api: f64) -> f64 {
    API_NUMERATOR / (api + API_OFFSET)
}

/// API gravity for a given specific gravity
pub fn specific_gravity_to_api(sg: f64) -> f64 {
    API_NUMERATOR / sg - API_OFFSET
}

/// A unit type's conversion kind, checked against its data and with any
/// special units already resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Strategy {
    Linear,
    Affine,
    DensityWithApi { api: UnitId, reference: UnitId },
}

impl Strategy {
    /// Check every datum of `def` fits its kind and resolve special units
    pub(crate) fn for_type(def: &UnitTypeDef, resolver: &SynonymResolver) -> Result<Self, TableError> {
        let malformed = |unit: &str, reason: &str| TableError::MalformedDatum {
            unit_type: def.name.to_string(),
            unit: unit.to_string(),
            reason: reason.to_string(),
        };

        match def.kind {
            ConversionKind::Linear => {
                if let Some(bad) = def.units.iter().find(|u| !u.datum.is_scale()) {
                    return Err(malformed(bad.name, "linear unit types need a scale factor"));
                }
                Ok(Strategy::Linear)
            }
            ConversionKind::Affine => {
                if let Some(bad) = def.units.iter().find(|u| !u.datum.is_affine()) {
                    return Err(malformed(bad.name, "affine unit types need a (scale, offset) pair"));
                }
                Ok(Strategy::Affine)
            }
            ConversionKind::DensityWithApi { reference } => {
                let mut api = None;
                for (id, unit) in resolver.units() {
                    match unit.datum {
                        Datum::Scale(_) => {}
                        Datum::ApiGravity if api.is_none() => api = Some(id),
                        Datum::ApiGravity => {
                            return Err(malformed(unit.name, "more than one API gravity unit"));
                        }
                        Datum::Affine { .. } => {
                            return Err(malformed(unit.name, "density units need a scale factor"));
                        }
                    }
                }
                let api = api.ok_or_else(|| TableError::MissingReference {
                    unit_type: def.name.to_string(),
                    unit: "API gravity".to_string(),
                })?;
                let reference = resolver
                    .get(reference)
                    .filter(|&id| resolver.datum(id).is_scale())
                    .ok_or_else(|| TableError::MissingReference {
                        unit_type: def.name.to_string(),
                        unit: reference.to_string(),
                    })?;
                Ok(Strategy::DensityWithApi { api, reference })
            }
        }
    }

    /// Convert `value` from one unit of the type to another
    pub(crate) fn apply(&self, resolver: &SynonymResolver, from: UnitId, to: UnitId, value: f64) -> f64 {
        match *self {
            Strategy::Linear => linear(scale(resolver, from), scale(resolver, to), value),
            Strategy::Affine => affine(resolver.datum(from), resolver.datum(to), value),
            Strategy::DensityWithApi { api, reference } => {
                let (from, value) = if from == api {
                    (reference, api_to_specific_gravity(value))
                } else {
                    (from, value)
                };
                if to == api {
                    let sg = linear(scale(resolver, from), scale(resolver, reference), value);
                    specific_gravity_to_api(sg)
                } else {
                    linear(scale(resolver, from), scale(resolver, to), value)
                }
            }
        }
    }
}

fn scale(resolver: &SynonymResolver, id: UnitId) -> f64 {
    match resolver.datum(id) {
        Datum::Scale(s) => s,
        Datum::Affine { scale, .. } => scale,
        // only reachable through the API branch, which never asks for it
        Datum::ApiGravity => 1.0,
    }
}

/// `value * from / to`
pub fn linear(from_scale: f64, to_scale: f64, value: f64) -> f64 {
    value * from_scale / to_scale
}

/// Shift into the source zero point, rescale, shift out of the target's
fn affine(from: Datum, to: Datum, value: f64) -> f64 {
    let (a1, b1) = affine_pair(from);
    let (a2, b2) = affine_pair(to);
    (value + b1) * a1 / a2 - b2
}

fn affine_pair(datum: Datum) -> (f64, f64) {
    match datum {
        Datum::Affine { scale, offset } => (scale, offset),
        Datum::Scale(s) => (s, 0.0),
        Datum::ApiGravity => (1.0, 0.0),
    }
}
