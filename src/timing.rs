//! Wall-clock instrumentation for the operations under comparison.
//!
//! Two layers: [`time`] is the bare primitive (run a closure, return its
//! value plus the elapsed `Duration`), and [`run_reported`] adds the
//! printed report the demo binary uses. The wrapped operation's value
//! passes through untouched in both cases - errors the operation chose
//! to report are rendered, never swallowed or rewritten.

use std::fmt;
use std::time::{Duration, Instant};

/// Runs `op` and returns its value together with the elapsed wall-clock
/// time, read from a monotonic clock immediately before and after the
/// call.
pub fn time<T>(op: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = op();
    (result, start.elapsed())
}

/// Times `op`, prints its report, and returns its value unchanged.
///
/// The report is three parts: a header naming the operation, the
/// rendered result (a full matrix dump, or the incompatibility line the
/// operation reported), and the elapsed seconds at microsecond
/// precision.
pub fn run_reported<T: fmt::Display>(name: &str, op: impl FnOnce() -> T) -> T {
    let (result, elapsed) = time(op);
    println!("\n--- {name} ---");
    println!("Result:");
    println!("{result}");
    println!("Time taken: {:.6} seconds", elapsed.as_secs_f64());
    result
}
