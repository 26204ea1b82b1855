//! Data structures used by algorithms.

pub mod airport_registry;
pub mod graph;
