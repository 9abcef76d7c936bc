use {
    crate::verifier::VerifyFailure,
    colorful::Colorful,
    contend_core::Mode,
    std::fmt::{Display, Formatter},
    tracing::{error, info},
};

/// Which runner produced a result map. A verification failure is fatal or
/// informational depending on the origin alone (a broken sequential or
/// guarded run means the harness itself is wrong; a broken unsafe run is
/// the expected demonstration).
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Origin {
    Sequential,
    Concurrent(Mode),
}

impl Origin {
    fn failure_is_expected(&self) -> bool {
        matches!(self, Origin::Concurrent(Mode::Unsafe))
    }
}

impl Display for Origin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Origin::Sequential => f.write_str("sequential"),
            Origin::Concurrent(mode) => f.write_fmt(format_args!("concurrent/{mode}")),
        }
    }
}

/// The harness-level interpretation of one run's verification result.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Outcome {
    /// The run's totals all matched.
    Pass { origin: Origin, items: usize },
    /// A run that must be correct was not. The aggregator or verifier is
    /// broken, and no conclusion can be drawn from the demonstration.
    HarnessInvariantViolation {
        origin: Origin,
        failure: VerifyFailure,
    },
    /// The unsafe run disagreed with the arithmetic sums — the expected
    /// outcome, reported with full detail and never treated as an error.
    RaceObserved { failure: VerifyFailure },
}

impl Outcome {
    /// Assigns severity by origin, never by mismatch content.
    pub fn classify(origin: Origin, items: usize, result: Result<(), VerifyFailure>) -> Self {
        match result {
            Ok(()) => Outcome::Pass { origin, items },
            Err(failure) if origin.failure_is_expected() => Outcome::RaceObserved { failure },
            Err(failure) => Outcome::HarnessInvariantViolation { origin, failure },
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Outcome::HarnessInvariantViolation { .. })
    }

    /// Prints a per-mode pass/fail line, with mismatch detail for
    /// failures, and emits the matching tracing event.
    pub fn report(&self) {
        match self {
            Outcome::Pass { origin, items } => {
                info!(%origin, items, "run verified clean");
                println!("{origin}: PASS ({items} summations)");
            }
            Outcome::HarnessInvariantViolation { origin, failure } => {
                error!(%origin, %failure, "harness invariant violation");
                let headline = format!("{origin}: FAIL ({failure}) — harness bug");
                println!("{}", headline.color(colorful::Color::Red));
                for mismatch in &failure.mismatches {
                    println!("{}", format!("\t{mismatch}").color(colorful::Color::Red));
                }
            }
            Outcome::RaceObserved { failure } => {
                info!(%failure, "race observed");
                println!("concurrent/{}: race observed ({failure})", Mode::Unsafe);
                for mismatch in &failure.mismatches {
                    println!("\t{mismatch}");
                }
            }
        }
    }
}
