//! Measuring how long loading and querying takes.

use std::time::*;

/// Measure how long executing `f` takes, print progress to stderr,
/// report the time in ms under `key` and return the result of `f`.
pub fn report_time_with_key<Out, F: FnOnce() -> Out>(name: &str, key: &'static str, f: F) -> Out {
    eprintln!("starting {}", name);
    let (res, t_passed) = measure(f);
    let t_passed = t_passed.as_secs_f64() * 1000.0;
    eprintln!("{} done - took: {}ms", name, t_passed);
    report!(key, t_passed);
    res
}

/// Like `report_time_with_key` with the key `running_time_ms`.
pub fn report_time<Out, F: FnOnce() -> Out>(name: &str, f: F) -> Out {
    report_time_with_key(name, "running_time_ms", f)
}

/// Measure how long executing `f` takes
/// and return a tuple of the result of `f` and the duration.
pub fn measure<Out, F: FnOnce() -> Out>(f: F) -> (Out, Duration) {
    let start = Instant::now();
    let res = f();
    (res, start.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_returns_the_result() {
        let (sum, time) = measure(|| (1..=10).sum::<u32>());
        assert_eq!(sum, 55);
        assert!(time < Duration::from_secs(60));
    }
}
