//! Selecting the nodes with maximum degree.

use crate::datastr::graph::NodeId;

/// All nodes sharing the maximum degree, ascending by id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hubs {
    pub degree: usize,
    pub nodes: Vec<NodeId>,
}

impl Hubs {
    /// Ties are all reported. A degree of zero never makes a hub,
    /// so a graph without links (or without nodes) has no hubs at all.
    pub fn from_degrees(degrees: &[usize]) -> Hubs {
        let degree = degrees.iter().copied().max().unwrap_or(0);
        if degree == 0 {
            return Hubs::default();
        }

        Hubs {
            degree,
            nodes: (0..degrees.len() as NodeId).filter(|&node| degrees[node as usize] == degree).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
