//! Runs the built-in items (plus optional generated extras) through the
//! sequential runner, the guarded concurrent runner, and the unsafe
//! concurrent runner, printing per-mode pass/fail.
//!
//! Exit status: 0 when the sequential and guarded runs verify clean (an
//! observed race in the unsafe run is expected and informational), 1 when
//! a run that must be correct was not, 2 for usage or configuration
//! errors.

use {
    contend_core::Mode,
    contend_harness::{
        check_results, fixed_items, generate, run_concurrent, run_sequential, Origin, Outcome,
    },
    std::ffi::OsString,
    tracing::info,
};

const DEFAULT_ITEM_SIZE: usize = 100;

const USAGE: &str = "\
usage: contend [--count N] [--item-size K] [--seed S]

  --count N      generate N extra random items beyond the 4 built-ins
  --item-size K  elements per generated item (default 100)
  --seed S       seed the generator for a reproducible item set
  --help         print this message
";

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    count: Option<usize>,
    item_size: usize,
    seed: Option<u64>,
    show_help: bool,
}

fn main() {
    tracing_subscriber::fmt::init();
    let exit_code = run(std::env::args_os());
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run<I>(args: I) -> i32
where
    I: IntoIterator<Item = OsString>,
{
    let options = match parse_args(args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}");
            eprint!("{USAGE}");
            return 2;
        }
    };

    if options.show_help {
        print!("{USAGE}");
        return 0;
    }

    let mut items = fixed_items();
    if let Some(count) = options.count {
        match generate(count, options.item_size, options.seed) {
            Ok(extra) => {
                info!(
                    count,
                    item_size = options.item_size,
                    seed = ?options.seed,
                    "generated extra items"
                );
                items.extend(extra);
            }
            Err(error) => {
                eprintln!("error: {error}");
                return 2;
            }
        }
    }

    let mut fatal = false;
    let runs = [
        (Origin::Sequential, run_sequential(&items)),
        (
            Origin::Concurrent(Mode::Guarded),
            run_concurrent(&items, Mode::Guarded),
        ),
        (
            Origin::Concurrent(Mode::Unsafe),
            run_concurrent(&items, Mode::Unsafe),
        ),
    ];
    for (origin, results) in runs {
        let outcome = Outcome::classify(origin, items.len(), check_results(&items, &results));
        outcome.report();
        fatal |= outcome.is_fatal();
    }

    if fatal {
        1
    } else {
        0
    }
}

fn parse_args<I>(args: I) -> Result<CliOptions, String>
where
    I: IntoIterator<Item = OsString>,
{
    let mut iter = args.into_iter();
    let _argv0 = iter.next();

    let mut count = None;
    let mut item_size = DEFAULT_ITEM_SIZE;
    let mut seed = None;
    let mut show_help = false;

    while let Some(argument) = iter.next() {
        let arg = argument.to_string_lossy();
        match arg.as_ref() {
            "--help" | "-h" => show_help = true,
            "--count" => count = Some(parse_value(&arg, iter.next())?),
            "--item-size" => item_size = parse_value(&arg, iter.next())?,
            "--seed" => seed = Some(parse_value(&arg, iter.next())?),
            other => return Err(format!("unrecognized argument: {other}")),
        }
    }

    Ok(CliOptions {
        count,
        item_size,
        seed,
        show_help,
    })
}

fn parse_value<T>(flag: &str, value: Option<OsString>) -> Result<T, String>
where
    T: std::str::FromStr,
{
    let value = value.ok_or_else(|| format!("{flag} requires a value"))?;
    let value = value.to_string_lossy();
    value
        .parse()
        .map_err(|_| format!("{flag} got an invalid value: {value}"))
}

#[cfg(test)]
mod test {
    use super::*;

    fn args(list: &[&str]) -> Vec<OsString> {
        std::iter::once("contend")
            .chain(list.iter().copied())
            .map(OsString::from)
            .collect()
    }

    #[test]
    fn defaults_run_only_the_fixed_items() {
        let options = parse_args(args(&[])).unwrap();
        assert_eq!(
            options,
            CliOptions {
                count: None,
                item_size: DEFAULT_ITEM_SIZE,
                seed: None,
                show_help: false,
            }
        );
    }

    #[test]
    fn accepts_a_full_generator_configuration() {
        let options = parse_args(args(&["--count", "10", "--item-size", "512", "--seed", "42"]))
            .unwrap();
        assert_eq!(options.count, Some(10));
        assert_eq!(options.item_size, 512);
        assert_eq!(options.seed, Some(42));
    }

    #[test]
    fn rejects_unknown_flags_and_bad_values() {
        assert!(parse_args(args(&["--frobnicate"])).is_err());
        assert!(parse_args(args(&["--count"])).is_err());
        assert!(parse_args(args(&["--count", "lots"])).is_err());
    }

    #[test]
    fn a_clean_default_run_exits_zero() {
        assert_eq!(run(args(&[])), 0);
    }

    #[test]
    fn zero_count_is_a_configuration_error() {
        assert_eq!(run(args(&["--count", "0"])), 2);
    }
}
