//! Archetype registry for key lookup.
//!
//! Lookup is by key through an index map; iteration follows insertion
//! order, which is also the order archetypes are listed to players.

use rustc_hash::FxHashMap;

use super::archetype::{builtin_archetypes, Archetype};
use crate::core::{Error, Result};

/// Registry of archetypes.
///
/// ## Example
///
/// ```
/// use archetype_ccg::cards::{Archetype, ArchetypeRegistry};
///
/// let mut registry = ArchetypeRegistry::new();
/// registry.register(Archetype::new("golem", "Golem", 0.3));
///
/// let found = registry.get("golem").unwrap();
/// assert_eq!(found.name, "Golem");
/// assert!(registry.get("dragon").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ArchetypeRegistry {
    archetypes: Vec<Archetype>,
    index: FxHashMap<String, usize>,
}

impl ArchetypeRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the shipped archetypes.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for archetype in builtin_archetypes() {
            registry.register(archetype);
        }
        registry
    }

    /// Parse a JSON array of archetype records.
    ///
    /// Later duplicates of a key replace earlier ones in place.
    pub fn from_json(json: &str) -> Result<Self> {
        let archetypes: Vec<Archetype> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for archetype in archetypes {
            registry.register(archetype);
        }
        Ok(registry)
    }

    /// Register an archetype.
    ///
    /// Re-registering a key replaces the record but keeps its position.
    pub fn register(&mut self, archetype: Archetype) {
        match self.index.get(&archetype.key) {
            Some(&pos) => self.archetypes[pos] = archetype,
            None => {
                self.index.insert(archetype.key.clone(), self.archetypes.len());
                self.archetypes.push(archetype);
            }
        }
    }

    /// Get an archetype by key.
    pub fn get(&self, key: &str) -> Result<&Archetype> {
        self.find(key).ok_or_else(|| Error::NotFound(key.to_string()))
    }

    /// Get an archetype by key, `None` if unknown.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&Archetype> {
        self.index.get(key).map(|&pos| &self.archetypes[pos])
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }

    /// Iterate `(key, archetype)` pairs in insertion order.
    pub fn all(&self) -> impl Iterator<Item = (&str, &Archetype)> {
        self.archetypes.iter().map(|a| (a.key.as_str(), a))
    }
}
