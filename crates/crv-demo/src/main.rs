//! Curve kernel demo CLI
//!
//! Generates a random set of circles, ellipses and helices, prints every
//! curve's point and first derivative at one parameter, then sums the radii
//! of the circles sequentially and in parallel and reports both timings.
//!
//! # Usage
//!
//! ```bash
//! # Random curve count, fresh seed
//! crv_demo
//!
//! # Reproducible run without the per-curve listing
//! crv_demo --count 100000 --seed 42 --quiet
//!
//! # JSON summary, with debug logs from the library crates
//! RUST_LOG=debug crv_demo --quiet --json
//! ```

mod args;
mod generate;
mod report;

use std::io::{self, Write};
use std::process;

use crv_core::Tolerance;
use crv_geometry::{sort_by_radius, Circle};
use crv_reduce::{compare_sums, RadiusSums, ReduceConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use args::{parse_args, DemoError, Options};
use generate::{generate_set, GeneratorConfig, MAX_COUNT};
use report::{write_report, write_samples, Report};

fn print_usage() {
    eprintln!(
        r#"Curve kernel demo

USAGE:
    crv_demo [OPTIONS]

OPTIONS:
    --count <n>       Number of curves to generate (default: random, 1..=1000000)
    --seed <u64>      Seed for the random generator (default: OS entropy)
    --workers <n>     Chunks for the parallel sum (default: hardware threads)
    --param <t>       Parameter at which curves are sampled (default: PI/4)
    --invalid <p>     Probability of drawing a negative radius (default: 0)
    --quiet, -q       Do not print every curve
    --json            Print the summary as JSON
    --help, -h        Show this help message

Set RUST_LOG (e.g. RUST_LOG=debug) to control log output.
"#
    );
}

fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}\n", e);
            print_usage();
            process::exit(1);
        }
    };

    if options.help {
        print_usage();
        return;
    }

    if let Err(e) = run(&options) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(options: &Options) -> Result<(), DemoError> {
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let count = options
        .count
        .unwrap_or_else(|| rng.gen_range(1..=MAX_COUNT));

    let generator = GeneratorConfig {
        invalid_ratio: options.invalid_ratio,
        ..GeneratorConfig::default()
    };
    let (set, rejected) = generate_set(&mut rng, count, &generator);
    info!(requested = count, generated = set.len(), rejected, "generated curves");

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if !options.quiet {
        write_samples(&mut out, &set, options.param)?;
    }

    let mut circles = set.filter::<Circle>();
    sort_by_radius(&mut circles);

    let config = options.workers.map_or_else(ReduceConfig::default, ReduceConfig::new);

    let sums = compare_sums(&circles, &config);
    let RadiusSums {
        sequential,
        parallel,
        ..
    } = sums;
    let agree = sums.agree(Tolerance::default());
    if agree {
        info!(sequential, parallel, "radius sums agree");
    } else {
        warn!(
            sequential,
            parallel,
            relative_error = Tolerance::relative_error(sequential, parallel),
            "radius sums disagree"
        );
    }

    let report = Report {
        curves: set.len(),
        rejected,
        circles: circles.len(),
        workers: config.workers,
        sums,
        agree,
    };

    if options.json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else {
        write_report(&mut out, &report)?;
    }
    out.flush()?;
    Ok(())
}
