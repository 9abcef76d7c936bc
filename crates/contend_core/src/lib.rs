//! This module specifies the core types for the [Contend](https://docs.rs/contend_harness/)
//! aggregation hazard harness.
//!
//! # Usage
//!
//! Please see the `contend_harness` docs.
//!
//! # Features
//!
//! - `serde`: Implement `Serialize` and `Deserialize` where applicable.

#![deny(unused_must_use)]
#![warn(rust_2018_idioms, unreachable_pub)]

mod buffer;
mod item;

use core::fmt::{Display, Formatter};

pub use buffer::SharedBuffer;
pub use item::WorkItem;

/// Selects whether the concurrent runner serializes aggregation steps.
///
/// In [`Mode::Unsafe`] the workers share one buffer with no step-level
/// mutual exclusion, so their push/pop sequences interleave freely. In
/// [`Mode::Guarded`] a single lock is held across each whole aggregation
/// step, which restores the sequential invariant.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Mode {
    Unsafe,
    Guarded,
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Mode::Unsafe => "UNSAFE",
            Mode::Guarded => "GUARDED",
        })
    }
}

/// A discrepancy between an item's arithmetic sum and the total a runner
/// recorded for it.
///
/// `actual` is `None` when the runner never recorded a total for the item,
/// which indicates a harness bug rather than a data race.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Mismatch {
    pub item: WorkItem,
    pub expected: u64,
    pub actual: Option<u64>,
}

impl Display for Mismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self.actual {
            Some(actual) => f.write_fmt(format_args!(
                "{}: expected {}, got {}",
                self.item, self.expected, actual
            )),
            None => f.write_fmt(format_args!(
                "{}: expected {}, but no total was recorded",
                self.item, self.expected
            )),
        }
    }
}

/// Rejected generator parameters. Raised before any run starts.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("item count must be positive (got {0})")]
    ItemCount(usize),
    #[error("item size must be positive (got {0})")]
    ItemSize(usize),
}
