//! The flight network and the queries it answers.
//!
//! `FlightNetwork` owns the airport registry and the adjacency lists and keeps both in sync:
//! node `i` of the graph is always the airport with id `i` in the registry.
//! Queries take and return airport codes, node ids stay an internal detail
//! (though they are exposed for callers who want to run the algorithms directly).

use crate::algo::{dijkstra::one_to_all, hubs::Hubs};
use crate::datastr::{airport_registry::AirportRegistry, graph::*};
use crate::error::Result;
use std::fmt;

#[derive(Debug, Clone, Default)]
pub struct FlightNetwork {
    airports: AirportRegistry,
    graph: AdjacencyListsGraph,
}

/// Cheapest route between two airports.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    /// Airport codes from start to destination, both included. Empty if there is no route.
    pub path: Vec<String>,
    /// Sum of the flight costs along `path`. `INFINITY` if there is no route.
    pub cost: Weight,
}

impl ShortestPath {
    pub fn unreachable() -> Self {
        ShortestPath { path: Vec::new(), cost: INFINITY }
    }

    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Airports sharing the maximum degree in one direction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HubAirports {
    pub degree: usize,
    pub airports: Vec<String>,
}

/// Airports with the most departing and the most arriving flights.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlightHubs {
    pub outgoing: HubAirports,
    pub incoming: HubAirports,
}

impl fmt::Display for FlightHubs {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (direction, hubs) in [("outgoing", &self.outgoing), ("incoming", &self.incoming)] {
            if hubs.airports.is_empty() {
                writeln!(f, "most {} flights: none", direction)?;
            } else {
                writeln!(f, "most {} flights ({}): {}", direction, hubs.degree, hubs.airports.join(", "))?;
            }
        }
        Ok(())
    }
}

/// Departing flights of one airport in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct AirportFlights {
    pub airport: String,
    pub flights: Vec<(String, Weight)>,
}

/// Departing flights of every airport, in airport id order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdjacencyList(pub Vec<AirportFlights>);

impl fmt::Display for AdjacencyList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for AirportFlights { airport, flights } in &self.0 {
            write!(f, "{} ->", airport)?;
            if flights.is_empty() {
                write!(f, " (no flights)")?;
            }
            for (i, (destination, cost)) in flights.iter().enumerate() {
                if i > 0 {
                    write!(f, ",")?;
                }
                write!(f, " {} ({})", destination, cost)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FlightNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an airport without any flights. Returns the existing id if the code is already known.
    pub fn add_airport(&mut self, code: &str) -> NodeId {
        let id = self.airports.add(code);
        if id as usize == self.graph.num_nodes() {
            self.graph.add_node();
        }
        debug_assert_eq!(self.airports.len(), self.graph.num_nodes());
        id
    }

    /// Add a one-way flight, registering both airports if necessary.
    ///
    /// Nothing is validated: negative costs, self loops and duplicate flights are stored as given.
    /// Shortest paths are only correct if all costs are non-negative.
    pub fn add_flight(&mut self, from: &str, to: &str, cost: Weight) {
        let from = self.add_airport(from);
        let to = self.add_airport(to);
        self.graph.add_link(from, Link { node: to, weight: cost });
    }

    pub fn index_of(&self, code: &str) -> Result<NodeId> {
        self.airports.index_of(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.airports.get(code).is_some()
    }

    pub fn airport_code(&self, id: NodeId) -> &str {
        self.airports.code(id)
    }

    /// All airport codes, indexed by id.
    pub fn airports(&self) -> &[String] {
        self.airports.codes()
    }

    pub fn num_airports(&self) -> usize {
        self.airports.len()
    }

    pub fn num_flights(&self) -> usize {
        self.graph.num_arcs()
    }

    pub fn graph(&self) -> &AdjacencyListsGraph {
        &self.graph
    }

    /// Minimum cost route from `from` to `to`.
    ///
    /// If `to` can't be reached, the result has an empty path and infinite cost.
    /// A query from an airport to itself is the single airport path with cost 0.
    pub fn shortest_path(&self, from: &str, to: &str) -> Result<ShortestPath> {
        let from = self.index_of(from)?;
        let to = self.index_of(to)?;
        report!("algo", "shortest_path");

        let data = one_to_all(&self.graph, from);

        Ok(match data.node_path(from, to) {
            Some(path) => ShortestPath {
                path: path.into_iter().map(|node| self.airport_code(node).to_string()).collect(),
                cost: data.distance(to),
            },
            None => ShortestPath::unreachable(),
        })
    }

    /// Airports with the most outgoing and the most incoming flights. Ties are all reported.
    pub fn hubs(&self) -> FlightHubs {
        report!("algo", "hubs");
        FlightHubs {
            outgoing: self.hub_airports(Hubs::from_degrees(&self.graph.out_degrees())),
            incoming: self.hub_airports(Hubs::from_degrees(&self.graph.in_degrees())),
        }
    }

    fn hub_airports(&self, hubs: Hubs) -> HubAirports {
        HubAirports {
            degree: hubs.degree,
            airports: hubs.nodes.into_iter().map(|node| self.airport_code(node).to_string()).collect(),
        }
    }

    pub fn print_hubs(&self) {
        print!("{}", self.hubs());
    }

    /// Airports without any route from `start`, in id order. `start` itself is never included.
    pub fn unreachable_from(&self, start: &str) -> Result<Vec<String>> {
        let start = self.index_of(start)?;
        report!("algo", "unreachable_from");

        let data = one_to_all(&self.graph, start);

        // the start is always reached, so it can't show up here
        Ok(data.unreached().map(|node| self.airport_code(node).to_string()).collect())
    }

    /// All flights grouped by departure airport.
    pub fn adjacency_list(&self) -> AdjacencyList {
        AdjacencyList(
            (0..self.num_airports() as NodeId)
                .map(|node| AirportFlights {
                    airport: self.airport_code(node).to_string(),
                    flights: self
                        .graph
                        .outgoing(node)
                        .iter()
                        .map(|link| (self.airport_code(link.node).to_string(), link.weight))
                        .collect(),
                })
                .collect(),
        )
    }

    pub fn print_adjacency_list(&self) {
        print!("{}", self.adjacency_list());
    }
}
