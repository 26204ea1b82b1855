//! Utilities for structured reporting of query statistics as JSON.
//!
//! Values are reported with `report!(key, json)` into the current context.
//! Contexts nest through RAII guards: `push_context` opens an object under a key,
//! `push_collection_context` opens an array under a key, and each `push_collection_item`
//! opens one object in that array. Dropping a guard closes its context.
//!
//! Nothing is collected unless `enable_reporting` was called on the current thread,
//! so library code can report unconditionally.
//! When the guard returned by `enable_reporting` is dropped, the whole document is printed to stdout.
//!
//! Reporting the same key twice in one object is considered a bug and panics,
//! unless the `report-allow-override` feature is active.

use crate::built_info;
use serde_json::{Map, Value};
use std::{cell::RefCell, mem::take};

pub use serde_json::json;

#[derive(Debug)]
enum ContextStackItem {
    Key(String),
    Collection(Vec<Value>),
    Object(Map<String, Value>),
}

#[derive(Debug)]
enum CurrentReportingContext {
    Collection(Vec<Value>),
    Object(Map<String, Value>),
}

#[derive(Debug)]
pub struct Reporter {
    current: CurrentReportingContext,
    context_stack: Vec<ContextStackItem>,
}

impl Default for Reporter {
    fn default() -> Self {
        Reporter {
            current: CurrentReportingContext::Object(Map::new()),
            context_stack: Vec::new(),
        }
    }
}

impl Reporter {
    fn open_under_key(&mut self, key: String, new_context: CurrentReportingContext) {
        match &mut self.current {
            CurrentReportingContext::Object(object) => {
                self.context_stack.push(ContextStackItem::Object(take(object)));
                self.context_stack.push(ContextStackItem::Key(key));
                self.current = new_context;
            }
            CurrentReportingContext::Collection(_) => panic!("Cannot open context at key {:?} in collection", key),
        }
    }

    fn create_collection_item(&mut self) {
        match &mut self.current {
            CurrentReportingContext::Collection(collection) => {
                self.context_stack.push(ContextStackItem::Collection(take(collection)));
                self.current = CurrentReportingContext::Object(Map::new());
            }
            CurrentReportingContext::Object(_) => panic!("Cannot create collection item in object"),
        }
    }

    fn report(&mut self, key: String, val: Value) {
        match &mut self.current {
            CurrentReportingContext::Object(object) => {
                let prev = object.insert(key, val);
                if !cfg!(feature = "report-allow-override") {
                    assert!(prev.is_none(), "value reported twice in the same context");
                }
            }
            CurrentReportingContext::Collection(_) => panic!("Cannot report value {:?} on collection", key),
        }
    }

    fn pop_context(&mut self) {
        let finished = match take_current(&mut self.current) {
            CurrentReportingContext::Object(object) => Value::Object(object),
            CurrentReportingContext::Collection(collection) => Value::Array(collection),
        };

        match self.context_stack.pop().expect("tried to pop from empty context") {
            ContextStackItem::Key(key) => {
                let mut parent = match self.context_stack.pop() {
                    Some(ContextStackItem::Object(parent)) => parent,
                    _ => panic!("Inconsistent context stack"),
                };
                let prev = parent.insert(key, finished);
                assert_eq!(prev, None);
                self.current = CurrentReportingContext::Object(parent);
            }
            ContextStackItem::Collection(mut collection) => {
                collection.push(finished);
                self.current = CurrentReportingContext::Collection(collection);
            }
            ContextStackItem::Object(_) => panic!("Inconsistent context stack"),
        }
    }

    fn finish(&mut self) -> Value {
        assert!(self.context_stack.is_empty(), "reporting finished with open contexts");
        match take_current(&mut self.current) {
            CurrentReportingContext::Object(object) => Value::Object(object),
            CurrentReportingContext::Collection(_) => panic!("broken root object for reporting"),
        }
    }
}

fn take_current(current: &mut CurrentReportingContext) -> CurrentReportingContext {
    std::mem::replace(current, CurrentReportingContext::Object(Map::new()))
}

thread_local! {
    static REPORTER: RefCell<Option<Reporter>> = RefCell::new(None);
}

fn with_reporter(f: impl FnOnce(&mut Reporter)) {
    REPORTER.with(|reporter| {
        if let Some(r) = reporter.borrow_mut().as_mut() {
            f(r)
        }
    });
}

/// Is reporting enabled on the current thread?
pub fn is_enabled() -> bool {
    REPORTER.with(|reporter| reporter.borrow().is_some())
}

#[must_use]
pub struct ContextGuard(());

impl Drop for ContextGuard {
    fn drop(&mut self) {
        with_reporter(Reporter::pop_context);
    }
}

pub fn push_context(key: String) -> ContextGuard {
    with_reporter(|r| r.open_under_key(key, CurrentReportingContext::Object(Map::new())));
    ContextGuard(())
}

#[must_use]
pub struct CollectionContextGuard(());

impl Drop for CollectionContextGuard {
    fn drop(&mut self) {
        with_reporter(Reporter::pop_context);
    }
}

pub fn push_collection_context(key: String) -> CollectionContextGuard {
    with_reporter(|r| r.open_under_key(key, CurrentReportingContext::Collection(Vec::new())));
    CollectionContextGuard(())
}

impl CollectionContextGuard {
    pub fn push_collection_item(&mut self) -> CollectionItemContextGuard<'_> {
        with_reporter(Reporter::create_collection_item);
        CollectionItemContextGuard(self)
    }
}

#[must_use]
pub struct CollectionItemContextGuard<'a>(&'a CollectionContextGuard);

impl<'a> Drop for CollectionItemContextGuard<'a> {
    fn drop(&mut self) {
        with_reporter(Reporter::pop_context);
    }
}

pub fn report(key: String, val: Value) {
    if cfg!(feature = "report-to-stderr") {
        eprintln!("{}: {}", key, val);
    }
    report_silent(key, val)
}

pub fn report_silent(key: String, val: Value) {
    with_reporter(|r| r.report(key, val));
}

#[must_use]
pub struct ReportingGuard(());

impl ReportingGuard {
    /// Stop reporting and return the collected document instead of printing it.
    pub fn into_value(self) -> Value {
        let value = REPORTER.with(|reporter| reporter.borrow_mut().take().map(|mut r| r.finish()));
        std::mem::forget(self);
        value.unwrap_or(Value::Null)
    }
}

impl Drop for ReportingGuard {
    fn drop(&mut self) {
        if let Some(mut r) = REPORTER.with(|reporter| reporter.borrow_mut().take()) {
            println!("{}", r.finish());
        }
    }
}

#[macro_export]
macro_rules! report {
    ($k:expr, $($json:tt)+) => { $crate::report::report($k.to_string(), $crate::report::json!($($json)+)) };
}

#[macro_export]
macro_rules! report_silent {
    ($k:expr, $($json:tt)+) => { $crate::report::report_silent($k.to_string(), $crate::report::json!($($json)+)) };
}

/// Start collecting reported values on the current thread.
/// Records build information, the program name, start time and command line arguments.
pub fn enable_reporting(program: &str) -> ReportingGuard {
    REPORTER.with(|reporter| reporter.replace(Some(Reporter::default())));

    report!("package_version", built_info::PKG_VERSION);
    report!("build_target", built_info::TARGET);
    report!("build_profile", built_info::PROFILE);
    report!("feature_flags", built_info::FEATURES_STR);
    report!("build_with_rustc", built_info::RUSTC_VERSION);

    report!("program", program);
    report!(
        "start_time",
        time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Rfc2822)
            .unwrap_or_default()
    );
    report!("args", std::env::args().collect::<Vec<String>>());

    ReportingGuard(())
}

pub mod benchmark;
pub use benchmark::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_is_collected_while_disabled() {
        assert!(!is_enabled());
        report!("ignored", 1);
        let mut ctxt = push_collection_context("runs".to_string());
        let _item = ctxt.push_collection_item();
        report!("ignored", 2);
    }

    #[test]
    fn nested_contexts_build_one_document() {
        let guard = enable_reporting("test");
        assert!(is_enabled());
        {
            let _graph = push_context("graph".to_string());
            report!("num_airports", 3);
        }
        {
            let mut runs = push_collection_context("runs".to_string());
            for i in 0..2 {
                let _item = runs.push_collection_item();
                report!("run", i);
            }
        }
        let value = guard.into_value();

        assert!(!is_enabled());
        assert_eq!(value["program"], json!("test"));
        assert_eq!(value["graph"], json!({ "num_airports": 3 }));
        assert_eq!(value["runs"], json!([{ "run": 0 }, { "run": 1 }]));
    }

    #[test]
    fn report_survives_an_early_return() {
        fn failing_query() -> Result<(), &'static str> {
            let _query = push_context("query".to_string());
            report!("algo", "shortest_path");
            Err("unknown airport")
        }

        let guard = enable_reporting("test");
        assert!(failing_query().is_err());
        let value = guard.into_value();

        assert_eq!(value["query"], json!({ "algo": "shortest_path" }));
        assert!(!is_enabled());
    }

    #[test]
    #[cfg(not(feature = "report-allow-override"))]
    #[should_panic]
    fn duplicate_keys_panic() {
        let _guard = enable_reporting("test");
        report!("key", 1);
        report!("key", 2);
    }
}
