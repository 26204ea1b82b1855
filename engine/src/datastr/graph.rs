//! Something with graphs 🛫
//!
//! Traits and types for working with the flight graph on the level of dense node ids.
//! Mapping airport codes to node ids is not the business of this module, see `airport_registry`.

pub mod adjacency_lists_graph;

pub use self::adjacency_lists_graph::AdjacencyListsGraph;

/// Node ids are 32bit unsigned ints, assigned densely starting at 0.
pub type NodeId = u32;
/// Flight costs are real numbers. Only non-negative costs give correct shortest paths.
pub type Weight = f64;
/// Distance of nodes which were not reached.
pub const INFINITY: Weight = f64::INFINITY;

/// Simple struct for weighted links.
/// No behaviour, just a pure data struct.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Link {
    pub node: NodeId,
    pub weight: Weight,
}

/// Base trait for graphs.
/// Interesting behaviour will be added through subtraits.
pub trait Graph {
    fn num_nodes(&self) -> usize;
    fn num_arcs(&self) -> usize;
    fn degree(&self, node: NodeId) -> usize;
}

pub trait LinkIterable<Link>: Graph {
    /// Type of the outgoing neighbor iterator.
    type Iter<'a>: Iterator<Item = Link>
    where
        Self: 'a;

    /// Get a iterator over the outgoing links of the given node.
    fn link_iter(&self, node: NodeId) -> Self::Iter<'_>;
}

/// Trait for graph data structures which allow iterating over outgoing links of a node.
pub trait LinkIterGraph: LinkIterable<Link> {
    /// Number of links pointing to each node.
    ///
    /// Not maintained anywhere, this scans all outgoing lists on every call, so `O(n + m)`.
    fn in_degrees(&self) -> Vec<usize> {
        let mut in_degrees = vec![0; self.num_nodes()];

        for node in 0..(self.num_nodes() as NodeId) {
            for Link { node: head, .. } in self.link_iter(node) {
                in_degrees[head as usize] += 1;
            }
        }

        in_degrees
    }

    /// Number of links leaving each node.
    fn out_degrees(&self) -> Vec<usize> {
        (0..(self.num_nodes() as NodeId)).map(|node| self.degree(node)).collect()
    }
}

impl<G: LinkIterable<Link>> LinkIterGraph for G {}
