//! Growable adjacency list graph.
//!
//! Unlike the compact first-out representation this one supports appending
//! nodes and links in any order, which is what building a network flight by flight needs.

use super::*;

#[derive(Debug, Clone, Default)]
pub struct AdjacencyListsGraph {
    outgoing: Vec<Vec<Link>>,
    num_arcs: usize,
}

impl AdjacencyListsGraph {
    /// Create a graph with `n` nodes and no links.
    pub fn new(n: usize) -> AdjacencyListsGraph {
        AdjacencyListsGraph {
            outgoing: (0..n).map(|_| Vec::new()).collect(),
            num_arcs: 0,
        }
    }

    /// Append a node without links and return its id.
    pub fn add_node(&mut self) -> NodeId {
        self.outgoing.push(Vec::new());
        (self.outgoing.len() - 1) as NodeId
    }

    /// Append a link to the end of the outgoing list of `from`.
    /// Parallel links and self loops are kept as they are.
    pub fn add_link(&mut self, from: NodeId, link: Link) {
        debug_assert!((link.node as usize) < self.num_nodes(), "link head {} out of range", link.node);
        self.outgoing[from as usize].push(link);
        self.num_arcs += 1;
    }

    /// Outgoing links of `node` in insertion order.
    pub fn outgoing(&self, node: NodeId) -> &[Link] {
        &self.outgoing[node as usize]
    }
}

impl Graph for AdjacencyListsGraph {
    fn num_nodes(&self) -> usize {
        self.outgoing.len()
    }

    fn num_arcs(&self) -> usize {
        self.num_arcs
    }

    fn degree(&self, node: NodeId) -> usize {
        self.outgoing[node as usize].len()
    }
}

impl LinkIterable<Link> for AdjacencyListsGraph {
    type Iter<'a> = std::iter::Copied<std::slice::Iter<'a, Link>>;

    #[inline]
    fn link_iter(&self, node: NodeId) -> Self::Iter<'_> {
        self.outgoing[node as usize].iter().copied()
    }
}
