#[macro_use]
extern crate rust_flight_router;
use rust_flight_router::{cli::CliErr, experiments, io::load_flights, report::*};
use std::{env, error::Error, path::Path};

use rand::prelude::*;

pub fn main() -> Result<(), Box<dyn Error>> {
    let _reporter = enable_reporting("random_flight_queries");

    let mut args = env::args();
    args.next();
    let arg = &args.next().ok_or(CliErr("No flight list arg given"))?;
    let path = Path::new(arg);

    let network = report_time_with_key("loading flights", "load_time_ms", || load_flights(path))?;
    report!("graph", { "num_airports": network.num_airports(), "num_flights": network.num_flights() });

    let seed = experiments::random_seed();
    report!("seed", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let stats = {
        let mut algo_runs_ctxt = push_collection_context("algo_runs".to_string());
        experiments::run_random_queries(&network, &mut rng, &mut algo_runs_ctxt, experiments::num_random_queries())
    };
    report!("num_queries", stats.num_queries);
    report!("num_reachable", stats.num_reachable);

    Ok(())
}
