//! Random query workloads for measuring query performance on real flight lists.

use rand::prelude::*;
use std::time::Duration;

use crate::{network::FlightNetwork, report::*};

/// Number of random queries performed for experiments.
/// Can be overriden through the NUM_RANDOM_QUERIES env var.
pub fn num_random_queries() -> usize {
    env_or("NUM_RANDOM_QUERIES", 1000)
}

/// Seed for the random query generator.
/// Can be overriden through the RANDOM_SEED env var.
pub fn random_seed() -> u64 {
    env_or("RANDOM_SEED", 0)
}

fn env_or<T: std::str::FromStr>(var: &str, default: T) -> T {
    std::env::var(var).ok().and_then(|val| val.parse().ok()).unwrap_or(default)
}

/// Aggregated outcome of a batch of queries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryStats {
    pub num_queries: usize,
    pub num_reachable: usize,
    pub total_query_time: Duration,
}

/// Run `num_queries` shortest path queries between uniformly random airports.
/// Every query is reported as one item of `reporting_context`.
pub fn run_random_queries(network: &FlightNetwork, rng: &mut StdRng, reporting_context: &mut CollectionContextGuard, num_queries: usize) -> QueryStats {
    let n = network.num_airports();
    if n == 0 {
        return QueryStats::default();
    }

    let queries = std::iter::from_fn(move || Some((rng.gen_range(0..n), rng.gen_range(0..n)))).take(num_queries);
    let mut stats = QueryStats::default();

    for (from, to) in queries {
        let _query_ctxt = reporting_context.push_collection_item();
        let (from, to) = (&network.airports()[from], &network.airports()[to]);

        report!("from", from);
        report!("to", to);

        let (route, time) = measure(|| network.shortest_path(from, to));
        // both codes come from the network itself
        let route = route.expect("airport of the network not found");

        report!("running_time_ms", time.as_secs_f64() * 1000.0);
        report!("result", route.cost);
        report!("num_hops", route.path.len().saturating_sub(1));

        stats.num_queries += 1;
        stats.total_query_time += time;
        if route.is_reachable() {
            stats.num_reachable += 1;
        }
    }

    if stats.num_queries > 0 {
        eprintln!("Avg. query time {:?}", stats.total_query_time / stats.num_queries as u32)
    };

    stats
}
