//! Per-type synonym lookup

use std::collections::HashMap;

use nucos_core::{normalize, ConversionError, TableError};

use crate::unit::{Datum, UnitDef, UnitTypeDef};

/// Position of a canonical unit within its unit type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitId(usize);

/// Maps every normalized spelling of a type's units to its canonical unit.
///
/// Immutable once built.
#[derive(Debug, Clone)]
pub struct SynonymResolver {
    unit_type: &'static str,
    units: &'static [UnitDef],
    lookup: HashMap<String, UnitId>,
}

impl SynonymResolver {
    /// Build the lookup, failing if two spellings normalize to the same key
    pub fn new(def: &UnitTypeDef) -> Result<Self, TableError> {
        let mut lookup = HashMap::new();

        for (i, unit) in def.units.iter().enumerate() {
            for name in unit.all_names() {
                let key = normalize(name).into_owned();
                if let Some(prev) = lookup.insert(key.clone(), UnitId(i)) {
                    return Err(TableError::DuplicateName {
                        unit_type: def.name.to_string(),
                        name: key,
                        first: def.units[prev.0].name.to_string(),
                        second: unit.name.to_string(),
                    });
                }
            }
        }

        Ok(SynonymResolver {
            unit_type: def.name,
            units: def.units,
            lookup,
        })
    }

    /// Display name of the unit type this resolver belongs to
    pub fn unit_type(&self) -> &'static str {
        self.unit_type
    }

    pub fn get(&self, unit: &str) -> Option<UnitId> {
        self.lookup.get(normalize(unit).as_str()).copied()
    }

    pub fn resolve(&self, unit: &str) -> Result<UnitId, ConversionError> {
        self.get(unit)
            .ok_or_else(|| ConversionError::invalid_unit(unit, self.unit_type))
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.get(unit).is_some()
    }

    /// Ids handed out by this resolver always index in range
    pub(crate) fn def(&self, id: UnitId) -> &'static UnitDef {
        &self.units[id.0]
    }

    pub(crate) fn datum(&self, id: UnitId) -> Datum {
        self.def(id).datum
    }

    /// `None` when `id` is out of range for this resolver
    pub fn unit(&self, id: UnitId) -> Option<&'static UnitDef> {
        self.units.get(id.0)
    }

    pub fn primary_name(&self, id: UnitId) -> Option<&'static str> {
        self.unit(id).map(|u| u.name)
    }

    /// Synonyms in table order; the first is the conventional abbreviation
    pub fn synonyms(&self, id: UnitId) -> Option<&'static [&'static str]> {
        self.unit(id).map(|u| u.synonyms)
    }

    pub fn abbreviation(&self, id: UnitId) -> Option<&'static str> {
        self.unit(id).map(UnitDef::abbreviation)
    }

    /// Canonical units in table order
    pub fn units(&self) -> impl Iterator<Item = (UnitId, &'static UnitDef)> {
        self.units.iter().enumerate().map(|(i, u)| (UnitId(i), u))
    }

    /// Number of distinct spellings accepted
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}
