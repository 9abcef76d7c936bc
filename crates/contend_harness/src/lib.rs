//! Contend is a harness for demonstrating a concurrent aggregation hazard:
//! it computes a sum over independent work items twice — once strictly
//! sequentially, once with one concurrent worker per item sharing a single
//! buffer — and reports whether the concurrent run agreed with the
//! sequential baseline.
//!
//! The harness provides no correctness guarantee of its own. The
//! [`Mode::Unsafe`](contend_core::Mode) configuration is *allowed* to be
//! wrong; the harness's job is only to run both paths and compare.
//!
//! # Example
//!
//! ```rust
//! use contend_core::Mode;
//! use contend_harness::{check_results, fixed_items, run_concurrent, run_sequential, verify};
//!
//! let items = fixed_items();
//!
//! // The sequential run is the oracle and must always be self-consistent.
//! let sequential = run_sequential(&items);
//! check_results(&items, &sequential).expect("oracle is self-consistent");
//!
//! // Holding one lock across each whole aggregation step restores
//! // correctness even though the workers still run concurrently.
//! let guarded = run_concurrent(&items, Mode::Guarded);
//! check_results(&items, &guarded).expect("locking restores correctness");
//!
//! // Without the lock the workers interleave their push/pop sequences on
//! // the shared buffer, and totals usually come out wrong.
//! let racy = run_concurrent(&items, Mode::Unsafe);
//! let mismatches = verify(&items, &racy);
//! println!("{} of {} totals corrupted", mismatches.len(), items.len());
//! ```

#![deny(unused_must_use)]
#![warn(rust_2018_idioms, unreachable_pub)]

mod aggregator;
mod generator;
mod report;
mod runner;
mod verifier;

pub use aggregator::aggregate;

pub use aggregator::race_window;

pub use generator::fixed_items;

pub use generator::generate;

pub use generator::MAX_ELEMENT;

pub use report::Origin;

pub use report::Outcome;

pub use runner::run_concurrent;

pub use runner::run_sequential;

pub use runner::ResultMap;

pub use verifier::check_results;

pub use verifier::verify;

pub use verifier::VerifyFailure;
