//! Algorithms on the flight graph, working on node ids only.

pub mod dijkstra;
pub mod hubs;
