//! Bidirectional mapping between airport codes and dense node ids.

use crate::datastr::graph::NodeId;
use crate::error::{Error, Result};
use std::collections::HashMap;

/// Assigns node ids to airport codes in first-seen order.
///
/// Ids are dense (`0..len()`) and never change once assigned.
/// Codes are case sensitive, `"jfk"` and `"JFK"` are different airports.
#[derive(Debug, Clone, Default)]
pub struct AirportRegistry {
    codes: Vec<String>,
    ids: HashMap<String, NodeId>,
}

impl AirportRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `code` unless it is already known. Returns the id of the airport either way.
    pub fn add(&mut self, code: &str) -> NodeId {
        if let Some(&id) = self.ids.get(code) {
            return id;
        }

        let id = self.codes.len() as NodeId;
        self.codes.push(code.to_string());
        self.ids.insert(code.to_string(), id);
        id
    }

    /// Look up the id of `code` without registering it.
    pub fn index_of(&self, code: &str) -> Result<NodeId> {
        self.get(code).ok_or_else(|| Error::UnknownAirport(code.to_string()))
    }

    pub fn get(&self, code: &str) -> Option<NodeId> {
        self.ids.get(code).copied()
    }

    /// Code of the airport with the given id.
    /// Panics if the id was never assigned.
    pub fn code(&self, id: NodeId) -> &str {
        &self.codes[id as usize]
    }

    /// All codes, indexed by id.
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_dense_in_first_seen_order() {
        let mut registry = AirportRegistry::new();
        assert_eq!(registry.add("JFK"), 0);
        assert_eq!(registry.add("LAX"), 1);
        assert_eq!(registry.add("ORD"), 2);
        assert_eq!(registry.codes(), &["JFK", "LAX", "ORD"]);
        assert_eq!(registry.code(1), "LAX");
    }

    #[test]
    fn adding_twice_keeps_the_id() {
        let mut registry = AirportRegistry::new();
        let jfk = registry.add("JFK");
        registry.add("LAX");
        assert_eq!(registry.add("JFK"), jfk);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn codes_are_case_sensitive() {
        let mut registry = AirportRegistry::new();
        assert_ne!(registry.add("JFK"), registry.add("jfk"));
    }

    #[test]
    fn lookup_of_unknown_code_fails() {
        let mut registry = AirportRegistry::new();
        assert!(registry.is_empty());
        registry.add("JFK");
        assert_eq!(registry.index_of("JFK"), Ok(0));
        assert_eq!(registry.index_of("XXX"), Err(Error::UnknownAirport("XXX".to_string())));
        assert_eq!(registry.len(), 1);
    }
}
