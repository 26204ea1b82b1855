//! One-to-all Dijkstra with lazy deletion.
//!
//! The queue is a plain `std::collections::BinaryHeap` without decrease key.
//! Improving the distance of a node which is already queued pushes a second entry;
//! outdated entries are skipped when they are popped.
//! Every node is settled at most once, so a run terminates after at most `m + 1` pushes.
//! Only correct for non-negative weights. Negative weights are not detected,
//! on negative cycles the result is some path tree, not a shortest one.

use crate::datastr::graph::*;
use crate::util::in_range_option::InRangeOption;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Priority Queue entries
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct State {
    pub distance: Weight,
    pub node: NodeId,
}

// Distances are never NaN (NaN weights never relax anything), so comparing with `total_cmp` is a total order here.
impl Eq for State {}

// The priority queue depends on `Ord`.
// Explicitly implement the trait so the queue becomes a min-heap
// instead of a max-heap.
impl Ord for State {
    fn cmp(&self, other: &State) -> Ordering {
        // Notice that the we flip the ordering on distances.
        // In case of a tie we compare nodes - this step is necessary
        // to make implementations of `PartialEq` and `Ord` consistent.
        other.distance.total_cmp(&self.distance).then_with(|| self.node.cmp(&other.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &State) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Result of a one-to-all run: tentative distances and the shortest path tree.
#[derive(Debug, Clone)]
pub struct DijkstraData {
    pub distances: Vec<Weight>,
    pub predecessors: Vec<InRangeOption<NodeId>>,
}

impl DijkstraData {
    pub fn new(n: usize) -> Self {
        Self {
            distances: vec![INFINITY; n],
            predecessors: vec![InRangeOption::NONE; n],
        }
    }

    pub fn distance(&self, node: NodeId) -> Weight {
        self.distances[node as usize]
    }

    /// Predecessor on the shortest path tree. `None` for the source and unreached nodes.
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors[node as usize].value()
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distances[node as usize] < INFINITY
    }

    /// Nodes which the run did not reach, ascending by id.
    pub fn unreached(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.distances.len() as NodeId).filter(move |&node| !self.is_reachable(node))
    }

    /// Walk the predecessors from `to` back to `from`.
    /// `None` if `to` was not reached from `from` in this run.
    pub fn node_path(&self, from: NodeId, to: NodeId) -> Option<Vec<NodeId>> {
        if !self.is_reachable(to) {
            return None;
        }

        let mut path = vec![to];
        let mut cur = to;

        while cur != from {
            cur = self.predecessor(cur)?;
            path.push(cur);
            // with negative weights the predecessors may contain cycles
            if path.len() > self.distances.len() {
                return None;
            }
        }

        path.reverse();

        Some(path)
    }
}

pub struct Dijkstra<'a, G> {
    graph: &'a G,
    queue: BinaryHeap<State>,

    num_queue_pushs: usize,
    num_relaxed_arcs: usize,
}

impl<'a, G: LinkIterable<Link>> Dijkstra<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Dijkstra {
            graph,
            queue: BinaryHeap::new(),
            num_queue_pushs: 0,
            num_relaxed_arcs: 0,
        }
    }

    /// Run to completion from `source` over the current graph.
    /// Distances and predecessors are computed fresh, nothing is cached between runs.
    pub fn one_to_all(&mut self, source: NodeId) -> DijkstraData {
        let graph = self.graph;
        let n = graph.num_nodes();
        assert!((source as usize) < n, "source {} out of range for {} nodes", source, n);

        // reset
        self.queue.clear();
        self.num_queue_pushs = 0;
        self.num_relaxed_arcs = 0;

        let mut data = DijkstraData::new(n);
        let mut settled = vec![false; n];
        data.distances[source as usize] = 0.0;
        self.push(State { distance: 0.0, node: source });

        let mut num_queue_pops: usize = 0;
        while let Some(State { distance, node }) = self.queue.pop() {
            num_queue_pops += 1;

            // we may have already found a better way
            if distance > data.distances[node as usize] || settled[node as usize] {
                continue;
            }
            settled[node as usize] = true;

            for Link { node: head, weight } in graph.link_iter(node) {
                self.num_relaxed_arcs += 1;
                let next = State {
                    distance: distance + weight,
                    node: head,
                };

                if !settled[head as usize] && next.distance < data.distances[head as usize] {
                    data.distances[head as usize] = next.distance;
                    data.predecessors[head as usize] = InRangeOption::some(node);
                    self.push(next);
                }
            }
        }

        report!("num_queue_pops", num_queue_pops);
        report!("num_queue_pushs", self.num_queue_pushs);
        report!("num_relaxed_arcs", self.num_relaxed_arcs);

        data
    }

    fn push(&mut self, state: State) {
        self.num_queue_pushs += 1;
        self.queue.push(state);
    }

    pub fn num_relaxed_arcs(&self) -> usize {
        self.num_relaxed_arcs
    }

    pub fn num_queue_pushs(&self) -> usize {
        self.num_queue_pushs
    }
}

/// Convenience wrapper for a single run.
pub fn one_to_all<G: LinkIterable<Link>>(graph: &G, source: NodeId) -> DijkstraData {
    Dijkstra::new(graph).one_to_all(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> AdjacencyListsGraph {
        // This is the directed graph we're going to use.
        // The node numbers correspond to the different states,
        // and the edge weights symbolize the cost of moving
        // from one node to another.
        // Note that the edges are one-way.
        //
        //                  7
        //          +-----------------+
        //          |                 |
        //          v   1        2    |  2
        //          0 -----> 1 -----> 3 ---> 4      5
        //          |        ^        ^      ^
        //          |        | 1      |      |
        //          |        |        | 3    | 1
        //          +------> 2 -------+      |
        //           10      |               |
        //                   +---------------+
        //
        let mut graph = AdjacencyListsGraph::new(6);
        for &(from, to, weight) in &[(0, 2, 10.0), (0, 1, 1.0), (1, 3, 2.0), (2, 1, 1.0), (2, 3, 3.0), (2, 4, 1.0), (3, 0, 7.0), (3, 4, 2.0)] {
            graph.add_link(from, Link { node: to, weight });
        }
        graph
    }

    #[test]
    fn correct_distances() {
        let graph = graph();
        let data = one_to_all(&graph, 0);
        assert_eq!(data.distances, vec![0.0, 1.0, 10.0, 3.0, 5.0, INFINITY]);

        let data = one_to_all(&graph, 3);
        assert_eq!(data.distance(0), 7.0);

        let data = one_to_all(&graph, 4);
        assert_eq!(data.distances, vec![INFINITY, INFINITY, INFINITY, INFINITY, 0.0, INFINITY]);
    }

    #[test]
    fn predecessors_form_shortest_path_tree() {
        let data = one_to_all(&graph(), 0);
        assert_eq!(data.predecessor(0), None);
        assert_eq!(data.predecessor(4), Some(3));
        assert_eq!(data.predecessor(5), None);
        assert_eq!(data.node_path(0, 4), Some(vec![0, 1, 3, 4]));
        assert_eq!(data.node_path(0, 0), Some(vec![0]));
        assert_eq!(data.node_path(0, 5), None);
        assert_eq!(data.unreached().collect::<Vec<_>>(), vec![5]);
    }

    #[test]
    fn parallel_links_use_the_cheapest() {
        let mut graph = AdjacencyListsGraph::new(2);
        graph.add_link(0, Link { node: 1, weight: 9.0 });
        graph.add_link(0, Link { node: 1, weight: 4.0 });
        graph.add_link(0, Link { node: 1, weight: 6.0 });
        assert_eq!(one_to_all(&graph, 0).distance(1), 4.0);
    }

    #[test]
    fn stale_queue_entries_are_skipped() {
        // 1 is first queued with 10 and then improved to 2 via 2
        let mut graph = AdjacencyListsGraph::new(3);
        graph.add_link(0, Link { node: 1, weight: 10.0 });
        graph.add_link(0, Link { node: 2, weight: 1.0 });
        graph.add_link(2, Link { node: 1, weight: 1.0 });
        graph.add_link(1, Link { node: 0, weight: 1.0 });

        let mut dijkstra = Dijkstra::new(&graph);
        let data = dijkstra.one_to_all(0);
        assert_eq!(data.distance(1), 2.0);
        assert_eq!(dijkstra.num_queue_pushs(), 4);
        // popping the stale entry for 1 must not relax 1 -> 0 a second time
        assert_eq!(dijkstra.num_relaxed_arcs(), 4);
    }

    #[test]
    fn negative_cycles_terminate() {
        let mut graph = AdjacencyListsGraph::new(3);
        graph.add_link(0, Link { node: 0, weight: -1e290 });
        graph.add_link(0, Link { node: 1, weight: 1.0 });
        graph.add_link(1, Link { node: 2, weight: -5.0 });
        graph.add_link(2, Link { node: 1, weight: -5.0 });

        let mut dijkstra = Dijkstra::new(&graph);
        let data = dijkstra.one_to_all(0);
        assert!(dijkstra.num_queue_pushs() <= graph.num_arcs() + 1);
        assert!(dijkstra.num_relaxed_arcs() <= graph.num_arcs());

        // settled nodes are never improved, so the path tree stays acyclic
        assert_eq!(data.distances, vec![0.0, 1.0, -4.0]);
        assert_eq!(data.predecessor(0), None);
        assert_eq!(data.node_path(0, 2), Some(vec![0, 1, 2]));
    }

    #[test]
    fn nan_weights_are_ignored() {
        let mut graph = AdjacencyListsGraph::new(2);
        graph.add_link(0, Link { node: 1, weight: f64::NAN });
        assert!(!one_to_all(&graph, 0).is_reachable(1));
    }

    #[test]
    fn queue_pops_smallest_distance_first() {
        let mut queue = BinaryHeap::new();
        queue.push(State { distance: 3.0, node: 0 });
        queue.push(State { distance: 0.5, node: 1 });
        queue.push(State { distance: 2.0, node: 2 });
        assert_eq!(queue.pop().map(|s| s.node), Some(1));
        assert_eq!(queue.pop().map(|s| s.node), Some(2));
        assert_eq!(queue.pop().map(|s| s.node), Some(0));
    }
}
