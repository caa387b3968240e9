//! Capacitor - Parallel-Plate Capacitor Calculator
//!
//! Prompts for known quantities, derives everything the capacitor
//! equations allow, and shows how the result shifts when the plate area or
//! the charge changes by 20%.
//!
//! # Usage
//!
//! ```bash
//! capacitor
//! capacitor --set A=2.0 --set d=0.01 --set V=5
//! RUST_LOG=debug capacitor --strict
//! ```

use clap::Parser;
use capacitor_core::{
    console::{parse_assignment, StdConsole},
    error::Result,
    quantity::{KnownSet, Quantity},
    run_scenarios, EquationRegistry, Propagator, PropagatorConfig, STANDARD_SCENARIOS,
};
use log::info;

/// Parallel-plate capacitor calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Preset a known value (repeatable), e.g. `--set A=2.0`
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_preset)]
    presets: Vec<(Quantity, f64)>,

    /// Reject overdetermined input that disagrees with an equation
    #[arg(long)]
    strict: bool,

    /// Relative tolerance for --strict
    #[arg(long, default_value_t = capacitor_core::solver::DEFAULT_TOLERANCE, requires = "strict")]
    tolerance: f64,

    /// Skip the ±20% area and charge scenarios
    #[arg(long)]
    no_scenarios: bool,
}

fn parse_preset(text: &str) -> std::result::Result<(Quantity, f64), String> {
    parse_assignment(text).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    // Log to stderr, quiet unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    // Build the propagator
    let mut config = PropagatorConfig::new();
    if args.strict {
        config = config.strict(args.tolerance);
    }
    let propagator = Propagator::with_config(EquationRegistry::standard(), config);

    // Solve whatever the presets already allow
    let mut known: KnownSet = args.presets.into_iter().collect();
    let report = propagator.run(&mut known)?;
    info!(
        "Presets derived {} more quantities ({} known)",
        report.derived.len(),
        known.len()
    );

    // Prompt for the rest
    let mut console = StdConsole::stdio();
    if !known.is_complete() {
        console.banner()?;
    }
    console.collect(&mut known, &propagator)?;
    console.render_results(&known)?;

    // Perturb area and charge
    if !args.no_scenarios {
        let outcomes = run_scenarios(&known, &propagator, &STANDARD_SCENARIOS)?;
        console.render_outcomes(&outcomes)?;
    }

    Ok(())
}
