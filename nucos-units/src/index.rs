//! Global name index for conversions that do not name a unit type
//!
//! Maps every normalized unit name to the one unit type that owns it. Some
//! types share so many names with others that they are left out entirely,
//! and a few individual names are pinned to one owner. That policy is
//! hand-curated: any new unit type with overlapping names needs the same
//! review, and the build fails loudly when it is missing.

use std::collections::{HashMap, HashSet};

use nucos_core::{normalize, TableError};

use crate::resolver::SynonymResolver;

/// Identifies a unit type by its position in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitTypeId(pub(crate) usize);

impl UnitTypeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A name that only one unit type may claim in the global index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservedName {
    pub name: &'static str,
    pub owner: &'static str,
}

/// Which names are left out of, or pinned in, the global index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexPolicy {
    /// Unit types that are only reachable with an explicit type
    pub excluded_types: Vec<&'static str>,
    /// Pairs of types whose shared units are dropped from both; units
    /// unique to either side stay
    pub shared_pairs: Vec<(&'static str, &'static str)>,
    /// Names claimed by a single owner; other types skip them
    pub reserved: Vec<ReservedName>,
}

impl Default for IndexPolicy {
    fn default() -> Self {
        IndexPolicy {
            // Oil Concentration repeats Length's names, Concentration In
            // Water mixes mass/volume with mass/mass, Delta Temperature
            // repeats Temperature and Dimensionless repeats Concentration.
            excluded_types: vec![
                "Oil Concentration",
                "Concentration In Water",
                "Delta Temperature",
                "Dimensionless",
            ],
            shared_pairs: vec![("Mass Fraction", "Volume Fraction")],
            // bare "oz" is a fluid ounce; bare "s" is a second, not specific gravity
            reserved: vec![
                ReservedName { name: "oz", owner: "Volume" },
                ReservedName { name: "s", owner: "Time" },
            ],
        }
    }
}

impl IndexPolicy {
    /// A policy that indexes every unit type and name
    pub fn permissive() -> Self {
        IndexPolicy {
            excluded_types: Vec::new(),
            shared_pairs: Vec::new(),
            reserved: Vec::new(),
        }
    }

    /// Every type the policy names must exist, and every reserved name must
    /// belong to its owner
    fn validate(&self, resolvers: &[SynonymResolver]) -> Result<(), TableError> {
        let find = |name: &str| find_resolver(resolvers, name);
        let unknown = |rule: &str, unit_type: &str| TableError::UnknownPolicyType {
            rule: rule.to_string(),
            unit_type: unit_type.to_string(),
        };

        for &t in &self.excluded_types {
            find(t).ok_or_else(|| unknown("excluded_types", t))?;
        }
        for &(a, b) in &self.shared_pairs {
            find(a).ok_or_else(|| unknown("shared_pairs", a))?;
            find(b).ok_or_else(|| unknown("shared_pairs", b))?;
        }
        for r in &self.reserved {
            let owner = find(r.owner).ok_or_else(|| unknown("reserved", r.owner))?;
            if !owner.contains(r.name) {
                return Err(TableError::MissingReference {
                    unit_type: owner.unit_type().to_string(),
                    unit: r.name.to_string(),
                });
            }
        }
        Ok(())
    }

    fn excludes(&self, unit_type: &str) -> bool {
        let key = normalize(unit_type);
        self.excluded_types
            .iter()
            .any(|t| normalize(t).as_str() == key.as_str())
    }

    fn reserved_owner(&self, name: &str) -> Option<&'static str> {
        self.reserved
            .iter()
            .find(|r| normalize(r.name).as_str() == name)
            .map(|r| r.owner)
    }

    /// Normalized primary names to drop for `unit_type`, per `shared_pairs`
    fn shared_units(&self, unit_type: &str, resolvers: &[SynonymResolver]) -> HashSet<String> {
        let find = |name: &str| find_resolver(resolvers, name);
        let primaries = |r: &SynonymResolver| -> HashSet<String> {
            r.units().map(|(_, u)| normalize(u.name).into_owned()).collect()
        };

        let key = normalize(unit_type);
        let mut shared = HashSet::new();
        for &(a, b) in &self.shared_pairs {
            let pair_hit = normalize(a).as_str() == key.as_str()
                || normalize(b).as_str() == key.as_str();
            if !pair_hit {
                continue;
            }
            if let (Some(ra), Some(rb)) = (find(a), find(b)) {
                let (pa, pb) = (primaries(ra), primaries(rb));
                shared.extend(pa.intersection(&pb).cloned());
            }
        }
        shared
    }
}

fn find_resolver<'a>(resolvers: &'a [SynonymResolver], unit_type: &str) -> Option<&'a SynonymResolver> {
    let key = normalize(unit_type);
    resolvers
        .iter()
        .find(|r| normalize(r.unit_type()).as_str() == key.as_str())
}

/// Immutable map from normalized unit name to owning unit type
#[derive(Debug, Clone, Default)]
pub struct GlobalNameIndex {
    names: HashMap<String, UnitTypeId>,
}

impl GlobalNameIndex {
    /// Build from per-type resolvers, given in registry order
    pub fn build(resolvers: &[SynonymResolver], policy: &IndexPolicy) -> Result<Self, TableError> {
        policy.validate(resolvers)?;
        let mut names: HashMap<String, UnitTypeId> = HashMap::new();

        for (i, resolver) in resolvers.iter().enumerate() {
            let unit_type = resolver.unit_type();
            if policy.excludes(unit_type) {
                tracing::trace!(unit_type, "unit type left out of global index");
                continue;
            }
            let shared = policy.shared_units(unit_type, resolvers);
            let type_key = normalize(unit_type);

            for (_, unit) in resolver.units() {
                if shared.contains(normalize(unit.name).as_str()) {
                    tracing::trace!(unit_type, unit = unit.name, "shared unit left out of global index");
                    continue;
                }
                for raw in unit.all_names() {
                    let key = normalize(raw).into_owned();
                    if let Some(owner) = policy.reserved_owner(&key) {
                        if normalize(owner).as_str() != type_key.as_str() {
                            tracing::trace!(unit_type, name = raw, owner, "reserved name skipped");
                            continue;
                        }
                    }
                    match names.get(&key) {
                        Some(&prev) if prev.0 != i => {
                            return Err(TableError::DuplicateGlobalName {
                                name: key,
                                first: resolvers[prev.0].unit_type().to_string(),
                                second: unit_type.to_string(),
                            });
                        }
                        Some(_) => {}
                        None => {
                            names.insert(key, UnitTypeId(i));
                        }
                    }
                }
            }
        }

        tracing::debug!(names = names.len(), "global unit index built");
        Ok(GlobalNameIndex { names })
    }

    /// Owning unit type of a raw unit name
    pub fn get(&self, unit: &str) -> Option<UnitTypeId> {
        self.names.get(normalize(unit).as_str()).copied()
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.get(unit).is_some()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
