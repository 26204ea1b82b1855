//! Utility module for command line interfaces

use std::{error::Error, fmt, fmt::Display};

/// An error struct to wrap simple static error messages
#[derive(Debug, PartialEq, Eq)]
pub struct CliErr(pub &'static str);

impl Display for CliErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Error for CliErr {}

pub const USAGE: &str = "usage: flight_queries <flights.csv> (path FROM TO | hubs | unreachable START | adjacency)";

/// The queries `flight_queries` can run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Path { from: String, to: String },
    Hubs,
    Unreachable { start: String },
    Adjacency,
}

impl Command {
    /// Parse the command and its arguments, i.e. everything after the flight file argument.
    pub fn parse<I: Iterator<Item = String>>(mut args: I) -> Result<Command, CliErr> {
        let command = match args.next().ok_or(CliErr(USAGE))?.as_str() {
            "path" => Command::Path {
                from: args.next().ok_or(CliErr("path: no departure airport given"))?,
                to: args.next().ok_or(CliErr("path: no destination airport given"))?,
            },
            "hubs" => Command::Hubs,
            "unreachable" => Command::Unreachable {
                start: args.next().ok_or(CliErr("unreachable: no start airport given"))?,
            },
            "adjacency" => Command::Adjacency,
            _ => return Err(CliErr(USAGE)),
        };

        if args.next().is_some() {
            return Err(CliErr("too many arguments"));
        }

        Ok(command)
    }
}
