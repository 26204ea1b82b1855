//! Shortest routes and connectivity queries over a network of one-way flights.
//!
//! Airports are identified by their code (e.g. `"JFK"`) and get dense node ids in the order they are first seen.
//! Flights are directed, weighted links between those ids.
//! On top of that, the crate answers four kinds of queries: cheapest route between two airports,
//! hub airports (most outgoing / incoming flights), airports unreachable from a start and a dump of all flights.
//!
//! # Example
//!
//! ```
//! use rust_flight_router::FlightNetwork;
//!
//! let mut network = FlightNetwork::new();
//! network.add_flight("JFK", "LAX", 10.0);
//! network.add_flight("JFK", "ORD", 5.0);
//! network.add_flight("ORD", "LAX", 3.0);
//!
//! let route = network.shortest_path("JFK", "LAX")?;
//! assert_eq!(route.path, vec!["JFK", "ORD", "LAX"]);
//! assert_eq!(route.cost, 8.0);
//! # Ok::<(), rust_flight_router::Error>(())
//! ```

#[macro_use]
pub mod report;

pub mod algo;
pub mod cli;
pub mod datastr;
pub mod error;
pub mod experiments;
pub mod io;
pub mod network;
pub mod util;

pub use error::{Error, Result};
pub use network::FlightNetwork;

/// Build time information generated by the build script.
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
