//! Unit registry: the built table, per-type resolvers and the global index

use std::collections::HashMap;
use std::sync::LazyLock;

use nucos_core::{normalize, ConversionError, TableError};

use crate::convert::Strategy;
use crate::index::{GlobalNameIndex, IndexPolicy, UnitTypeId};
use crate::resolver::SynonymResolver;
use crate::unit::UnitTypeDef;
use crate::units::UNIT_TABLE;

/// Global registry built from the compiled-in table.
///
/// A table that fails its integrity checks is a build defect, so first use
/// panics rather than serving conversions against it.
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(|| {
    match UnitRegistry::build(UNIT_TABLE) {
        Ok(registry) => registry,
        Err(e) => panic!("unit table failed integrity checks: {e}"),
    }
});

/// Immutable lookup and conversion state for one unit table
#[derive(Debug, Clone)]
pub struct UnitRegistry {
    table: &'static [UnitTypeDef],
    resolvers: Vec<SynonymResolver>,
    strategies: Vec<Strategy>,
    types: HashMap<String, UnitTypeId>,
    index: GlobalNameIndex,
}

impl UnitRegistry {
    /// Build with the default index policy. That policy names types from
    /// `UNIT_TABLE`; other tables need [`UnitRegistry::with_policy`].
    pub fn build(table: &'static [UnitTypeDef]) -> Result<Self, TableError> {
        Self::with_policy(table, &IndexPolicy::default())
    }

    /// Build resolvers, then strategies, then the global index
    pub fn with_policy(
        table: &'static [UnitTypeDef],
        policy: &IndexPolicy,
    ) -> Result<Self, TableError> {
        let mut resolvers = Vec::with_capacity(table.len());
        let mut strategies = Vec::with_capacity(table.len());
        let mut types = HashMap::with_capacity(table.len());

        for (i, def) in table.iter().enumerate() {
            let key = normalize(def.name).into_owned();
            if types.insert(key, UnitTypeId(i)).is_some() {
                return Err(TableError::DuplicateUnitType(def.name.to_string()));
            }
            let resolver = SynonymResolver::new(def)?;
            strategies.push(Strategy::for_type(def, &resolver)?);
            resolvers.push(resolver);
        }

        let index = GlobalNameIndex::build(&resolvers, policy)?;
        tracing::debug!(unit_types = table.len(), "unit registry built");

        Ok(UnitRegistry {
            table,
            resolvers,
            strategies,
            types,
            index,
        })
    }

    /// The table this registry was built from
    pub fn table(&self) -> &'static [UnitTypeDef] {
        self.table
    }

    pub fn index(&self) -> &GlobalNameIndex {
        &self.index
    }

    /// Find a unit type by any spelling that normalizes to its name
    pub fn unit_type_id(&self, unit_type: &str) -> Result<UnitTypeId, ConversionError> {
        self.types
            .get(normalize(unit_type).as_str())
            .copied()
            .ok_or_else(|| ConversionError::invalid_unit_type(unit_type))
    }

    /// Display name of a unit type, given any spelling of it
    pub fn unit_type_name(&self, unit_type: &str) -> Result<&'static str, ConversionError> {
        self.unit_type_id(unit_type).map(|id| self.type_name(id))
    }

    pub(crate) fn resolver(&self, id: UnitTypeId) -> &SynonymResolver {
        &self.resolvers[id.index()]
    }

    fn type_name(&self, id: UnitTypeId) -> &'static str {
        self.resolvers[id.index()].unit_type()
    }

    /// Convert `value` between two units of a named unit type
    pub fn convert_with_type(
        &self,
        unit_type: &str,
        from: &str,
        to: &str,
        value: f64,
    ) -> Result<f64, ConversionError> {
        let id = self.unit_type_id(unit_type)?;
        self.convert_in(id, from, to, value)
    }

    /// Convert `value` between two units, inferring the unit type from `from`.
    ///
    /// `to` must belong to the same type. If it names a unit of some other
    /// type the call fails with `IncompatibleUnits`; if no indexed type knows
    /// it, with `NotSupportedUnit`.
    pub fn convert(&self, from: &str, to: &str, value: f64) -> Result<f64, ConversionError> {
        let id = self
            .index
            .get(from)
            .ok_or_else(|| ConversionError::not_supported(from))?;

        if !self.resolver(id).contains(to) {
            let other = self
                .index
                .get(to)
                .ok_or_else(|| ConversionError::not_supported(to))?;
            return Err(ConversionError::IncompatibleUnits {
                from: from.to_string(),
                from_type: self.type_name(id).to_string(),
                to: to.to_string(),
                to_type: self.type_name(other).to_string(),
            });
        }
        self.convert_in(id, from, to, value)
    }

    fn convert_in(
        &self,
        id: UnitTypeId,
        from: &str,
        to: &str,
        value: f64,
    ) -> Result<f64, ConversionError> {
        let resolver = self.resolver(id);
        let from_id = resolver.resolve(from)?;
        let to_id = resolver.resolve(to)?;
        if from_id == to_id {
            return Ok(value);
        }

        let strategy = &self.strategies[id.index()];
        tracing::trace!(
            unit_type = resolver.unit_type(),
            from = resolver.def(from_id).name,
            to = resolver.def(to_id).name,
            value,
            "converting"
        );
        Ok(strategy.apply(resolver, from_id, to_id, value))
    }

    /// True when both names resolve through the global index to the same
    /// canonical unit
    pub fn is_same_unit(&self, a: &str, b: &str) -> bool {
        let (Some(ta), Some(tb)) = (self.index.get(a), self.index.get(b)) else {
            return false;
        };
        if ta != tb {
            return false;
        }
        let resolver = self.resolver(ta);
        match (resolver.get(a), resolver.get(b)) {
            (Some(ua), Some(ub)) => ua == ub,
            _ => false,
        }
    }

    /// True when `unit` is reachable without naming a unit type
    pub fn is_supported(&self, unit: &str) -> bool {
        self.index.contains(unit)
    }

    /// True when `unit` resolves within `unit_type`; false for unknown types
    pub fn is_supported_unit(&self, unit_type: &str, unit: &str) -> bool {
        self.unit_type_id(unit_type)
            .map(|id| self.resolver(id).contains(unit))
            .unwrap_or(false)
    }

    /// Display names of every unit type, in table order
    pub fn unit_types(&self) -> Vec<&'static str> {
        self.table.iter().map(|t| t.name).collect()
    }

    /// Primary names of a unit type's units, in table order
    pub fn unit_names(&self, unit_type: &str) -> Result<Vec<&'static str>, ConversionError> {
        let id = self.unit_type_id(unit_type)?;
        Ok(self.resolver(id).units().map(|(_, u)| u.name).collect())
    }

    /// Every accepted spelling for a unit type: each primary name followed
    /// by its synonyms
    pub fn supported_names(&self, unit_type: &str) -> Result<Vec<&'static str>, ConversionError> {
        let id = self.unit_type_id(unit_type)?;
        Ok(self
            .resolver(id)
            .units()
            .flat_map(|(_, u)| u.all_names())
            .collect())
    }

    /// Display name of the unit type that owns `unit` in the global index
    pub fn unit_type_of(&self, unit: &str) -> Result<&'static str, ConversionError> {
        self.index
            .get(unit)
            .map(|id| self.type_name(id))
            .ok_or_else(|| ConversionError::not_supported(unit))
    }

    fn type_for(&self, unit: &str, unit_type: Option<&str>) -> Result<UnitTypeId, ConversionError> {
        match unit_type {
            Some(t) => self.unit_type_id(t),
            None => self
                .index
                .get(unit)
                .ok_or_else(|| ConversionError::not_supported(unit)),
        }
    }

    /// Canonical display name of `unit`, inferring the type when not given
    pub fn primary_name(
        &self,
        unit: &str,
        unit_type: Option<&str>,
    ) -> Result<&'static str, ConversionError> {
        let resolver = self.resolver(self.type_for(unit, unit_type)?);
        let id = resolver.resolve(unit)?;
        Ok(resolver.def(id).name)
    }

    /// Conventional abbreviation of `unit`: its first synonym, or its
    /// primary name when it has none
    pub fn abbreviation(
        &self,
        unit: &str,
        unit_type: Option<&str>,
    ) -> Result<&'static str, ConversionError> {
        let resolver = self.resolver(self.type_for(unit, unit_type)?);
        let id = resolver.resolve(unit)?;
        Ok(resolver.def(id).abbreviation())
    }
}
