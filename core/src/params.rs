//! Ordered, uniquely named parameter bindings.

use crate::value::Value;
use hashbrown::HashMap;

/// Ordered set of named parameter bindings.
///
/// Names are unique within a set. Adding a value under a name that is
/// already bound renames it deterministically: `name`, `name_1`,
/// `name_2`, ... taking the first free suffix.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamSet {
    entries: Vec<(String, Value)>,
    index: HashMap<String, usize>,
}

impl ParamSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `value` under `base` (or the first free `base_N`) and returns
    /// the name actually used.
    pub fn add(&mut self, base: &str, value: Value) -> String {
        let name = self.free_name(base);
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name.clone(), value));
        name
    }

    fn free_name(&self, base: &str) -> String {
        let base = if base.is_empty() { "p" } else { base };
        if !self.index.contains_key(base) {
            return base.to_string();
        }
        (1usize..)
            .map(|n| format!("{base}_{n}"))
            .find(|candidate| !self.index.contains_key(candidate.as_str()))
            .unwrap_or_else(|| format!("{base}_{}", self.entries.len()))
    }

    /// Drops every binding added after the first `len`.
    pub(crate) fn truncate(&mut self, len: usize) {
        for (name, _) in self.entries.drain(len.min(self.entries.len())..) {
            self.index.remove(name.as_str());
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn into_vec(self) -> Vec<(String, Value)> {
        self.entries
    }
}
