//! Reading flight lists from CSV.
//!
//! The expected format is a header row followed by one flight per row:
//!
//! ```text
//! from,to,cost
//! JFK,LAX,10
//! # comments are skipped
//! JFK,ORD,5.5
//! ```
//!
//! Rows are added in file order, so airport ids follow the order of first appearance.
//!
//! # Example
//!
//! ```
//! # use rust_flight_router::io::read_flights;
//! let network = read_flights("from,to,cost\nJFK,LAX,10\n".as_bytes())?;
//! assert_eq!(network.num_flights(), 1);
//! # Ok::<(), csv::Error>(())
//! ```

use crate::datastr::graph::Weight;
use crate::network::FlightNetwork;
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::{io::Read, path::Path};

/// One row of a flight list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlightRecord {
    pub from: String,
    pub to: String,
    pub cost: Weight,
}

impl Extend<FlightRecord> for FlightNetwork {
    fn extend<I: IntoIterator<Item = FlightRecord>>(&mut self, flights: I) {
        for FlightRecord { from, to, cost } in flights {
            self.add_flight(&from, &to, cost);
        }
    }
}

impl FromIterator<FlightRecord> for FlightNetwork {
    fn from_iter<I: IntoIterator<Item = FlightRecord>>(flights: I) -> Self {
        let mut network = FlightNetwork::new();
        network.extend(flights);
        network
    }
}

/// Read a flight list from any reader.
/// Fails on the first malformed row, the error carries its position.
pub fn read_flights<R: Read>(reader: R) -> csv::Result<FlightNetwork> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).comment(Some(b'#')).from_reader(reader);

    reader.deserialize::<FlightRecord>().collect()
}

/// Read a flight list from the file at `path`.
pub fn load_flights<P: AsRef<Path>>(path: P) -> csv::Result<FlightNetwork> {
    let file = std::fs::File::open(path)?;
    read_flights(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_rows_in_file_order() {
        let csv = "from, to, cost\n# a comment\nJFK, LAX, 10\nJFK,ORD,5\nORD,LAX,3.5\n";
        let network = read_flights(csv.as_bytes()).unwrap();

        assert_eq!(network.airports(), &["JFK", "LAX", "ORD"]);
        assert_eq!(network.num_flights(), 3);
        assert_eq!(network.shortest_path("JFK", "LAX").unwrap().cost, 8.5);
    }

    #[test]
    fn accepts_negative_costs_and_self_loops() {
        let network = read_flights("from,to,cost\nAAA,AAA,1\nAAA,BBB,-2\n".as_bytes()).unwrap();
        assert_eq!(network.num_flights(), 2);
    }

    #[test]
    fn rejects_malformed_cost() {
        let err = read_flights("from,to,cost\nJFK,LAX,cheap\n".as_bytes()).unwrap_err();
        assert!(matches!(err.kind(), csv::ErrorKind::Deserialize { .. }));
    }

    #[test]
    fn rejects_missing_column() {
        assert!(read_flights("from,to,cost\nJFK,LAX\n".as_bytes()).is_err());
    }

    #[test]
    fn collects_from_records() {
        let network: FlightNetwork = vec![
            FlightRecord {
                from: "JFK".to_string(),
                to: "LAX".to_string(),
                cost: 10.0,
            },
            FlightRecord {
                from: "LAX".to_string(),
                to: "SEA".to_string(),
                cost: 2.0,
            },
        ]
        .into_iter()
        .collect();

        assert_eq!(network.unreachable_from("SEA").unwrap(), vec!["JFK", "LAX"]);
    }
}
