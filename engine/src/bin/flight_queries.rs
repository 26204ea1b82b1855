#[macro_use]
extern crate rust_flight_router;
use rust_flight_router::{
    cli::{CliErr, Command, USAGE},
    io::load_flights,
    report::*,
};
use std::{env, error::Error, path::Path};

pub fn main() -> Result<(), Box<dyn Error>> {
    let reporter = env::var_os("FLIGHT_ROUTER_REPORT").map(|_| enable_reporting("flight_queries"));

    let result = run();

    // stdout is reserved for the query output
    if let Some(reporter) = reporter {
        eprintln!("{}", reporter.into_value());
    }

    result
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args = env::args();
    args.next();
    let arg = &args.next().ok_or(CliErr(USAGE))?;
    let path = Path::new(arg);
    let command = Command::parse(args)?;

    let network = report_time_with_key("loading flights", "load_time_ms", || load_flights(path))?;
    report!("graph", { "num_airports": network.num_airports(), "num_flights": network.num_flights() });

    let _query_ctxt = push_context("query".to_string());

    match command {
        Command::Path { from, to } => {
            let route = network.shortest_path(&from, &to)?;
            if route.is_reachable() {
                println!("{} (cost {})", route.path.join(" -> "), route.cost);
            } else {
                println!("no route from {} to {}", from, to);
            }
        }
        Command::Hubs => network.print_hubs(),
        Command::Unreachable { start } => {
            let unreachable = network.unreachable_from(&start)?;
            if unreachable.is_empty() {
                println!("every airport is reachable from {}", start);
            }
            for airport in unreachable {
                println!("{}", airport);
            }
        }
        Command::Adjacency => network.print_adjacency_list(),
    }

    Ok(())
}
