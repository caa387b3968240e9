//! Interactive console frontend for the CLI.
//!
//! Collects values from a line-oriented reader and renders solved sets to
//! a writer. Readers and writers are generic so the prompt loop can run
//! against in-memory buffers as well as the terminal.

use std::io::{self, BufRead, Stderr, StdinLock, Stdout, Write};

use log::debug;

use crate::error::{CapacitorError, Result};
use crate::quantity::{KnownSet, Quantity};
use crate::scenario::ScenarioOutcome;
use crate::solver::Propagator;

const BANNER: &str = "\
!*!*!*------------------------------------------!*!*!*
                   Welcome to Physics
                       Capacitors
!*!*!*------------------------------------------!*!*!*
";

/// Prompt loop and result printer.
pub struct Console<R, W, E> {
    input: R,
    output: W,
    errors: E,
}

/// Console attached to the process's standard streams.
pub type StdConsole = Console<StdinLock<'static>, Stdout, Stderr>;

impl StdConsole {
    /// Create a console on stdin, stdout and stderr.
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout(), io::stderr())
    }
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    /// Create a console over the given streams.
    pub fn new(input: R, output: W, errors: E) -> Self {
        Self {
            input,
            output,
            errors,
        }
    }

    /// Print the welcome banner.
    pub fn banner(&mut self) -> Result<()> {
        writeln!(self.output, "{BANNER}")?;
        Ok(())
    }

    /// Prompt for values until every quantity is known.
    ///
    /// The set is propagated after each entry, so only quantities that are
    /// still unknown are offered. Unknown names, unparseable numbers and
    /// (in strict mode) entries that contradict earlier ones are reported on
    /// the error stream; the entry is discarded and the prompt repeats.
    pub fn collect(&mut self, known: &mut KnownSet, propagator: &Propagator) -> Result<()> {
        propagator.run(known)?;

        while !known.is_complete() {
            let remaining = known.unknown();
            let symbols: Vec<_> = remaining.iter().map(|q| q.symbol()).collect();
            write!(
                self.output,
                "enter the variable you want to set ({} ): ",
                symbols.join(" ")
            )?;
            self.output.flush()?;

            let name = self.next_line(known)?;
            let quantity = match name.parse::<Quantity>() {
                Ok(q) if !known.contains(q) => q,
                Ok(_) => {
                    self.report(&CapacitorError::unknown_quantity(name.trim()))?;
                    continue;
                }
                Err(err) => {
                    self.report(&err)?;
                    continue;
                }
            };

            write!(
                self.output,
                "Enter value for {} ({}): ",
                quantity.symbol(),
                quantity.unit()
            )?;
            self.output.flush()?;

            let text = self.next_line(known)?;
            let value = match parse_value(&text) {
                Ok(v) => v,
                Err(err) if err.is_recoverable() => {
                    self.report(&err)?;
                    continue;
                }
                Err(err) => return Err(err),
            };

            // Roll back the entry and everything derived from it on rejection
            let snapshot = known.clone();
            known.insert(quantity, value);
            let report = match propagator.run(known) {
                Ok(report) => report,
                Err(err) if err.is_recoverable() => {
                    *known = snapshot;
                    self.report(&err)?;
                    continue;
                }
                Err(err) => return Err(err),
            };
            debug!(
                "{} = {:.3e} unlocked {} more",
                quantity,
                value,
                report.derived.len()
            );
        }

        writeln!(self.output)?;
        Ok(())
    }

    /// Print a set, one quantity per line, followed by a blank line.
    pub fn render(&mut self, known: &KnownSet) -> Result<()> {
        writeln!(self.output, "{known}")?;
        Ok(())
    }

    /// Print the solved baseline under a heading.
    pub fn render_results(&mut self, known: &KnownSet) -> Result<()> {
        writeln!(self.output, "Results:")?;
        self.render(known)
    }

    /// Print each scenario label followed by its solved set.
    pub fn render_outcomes(&mut self, outcomes: &[ScenarioOutcome]) -> Result<()> {
        for outcome in outcomes {
            writeln!(self.output, "{}:", outcome.scenario.label)?;
            self.render(&outcome.known)?;
        }
        self.output.flush()?;
        Ok(())
    }

    /// Consume the console, returning its streams.
    pub fn into_inner(self) -> (R, W, E) {
        (self.input, self.output, self.errors)
    }

    fn report(&mut self, err: &CapacitorError) -> Result<()> {
        writeln!(self.errors, "{err}")?;
        Ok(())
    }

    /// Read one line, failing if the input is exhausted.
    fn next_line(&mut self, known: &KnownSet) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CapacitorError::InputClosed {
                missing: known.unknown().len(),
            });
        }
        Ok(line.trim().to_string())
    }
}

/// Parse a real number typed at the prompt.
pub fn parse_value(text: &str) -> Result<f64> {
    let text = text.trim();
    text.parse::<f64>()
        .map_err(|_| CapacitorError::invalid_value(text))
}

/// Parse a `NAME=VALUE` assignment such as `A=2.0` or `Separation=1e-3`.
pub fn parse_assignment(text: &str) -> Result<(Quantity, f64)> {
    let (name, value) = text
        .split_once('=')
        .ok_or_else(|| CapacitorError::invalid_assignment(text))?;
    Ok((name.parse()?, parse_value(value)?))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::scenario::{run_scenarios, STANDARD_SCENARIOS};
    use crate::solver::PropagatorConfig;
    use crate::EquationRegistry;

    fn run(input: &str) -> (Result<()>, KnownSet, String, String) {
        run_with(input, &Propagator::new())
    }

    fn run_with(input: &str, propagator: &Propagator) -> (Result<()>, KnownSet, String, String) {
        let mut console = Console::new(input.as_bytes(), Vec::new(), Vec::new());
        let mut known = KnownSet::new();
        let result = console.collect(&mut known, propagator);
        let (_, out, err) = console.into_inner();
        (
            result,
            known,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_collect_stops_once_complete() {
        let (result, known, out, err) = run("A\n2.0\nd\n0.01\nV\n5\n");
        assert!(result.is_ok());
        assert!(known.is_complete());
        assert!(err.is_empty());
        assert_relative_eq!(known.get(Quantity::Charge).unwrap(), 8.85e-9, max_relative = 1e-12);

        // After A and d, C is no longer offered.
        assert!(out.contains("enter the variable you want to set (A d Q C V Sigma E U ): "));
        assert!(out.contains("enter the variable you want to set (Q V Sigma E U ): "));
        assert!(out.contains("Enter value for d (m): "));
    }

    #[test]
    fn test_collect_reprompts_on_bad_input() {
        let (result, known, _, err) = run("X\nA\nabc\nA\n2\nA\nd\n0.01\nQ\n8.85e-9\n");
        assert!(result.is_ok());
        assert!(known.is_complete());
        assert_eq!(
            err,
            "X is not in list\nThat is not a acceptable number: 'abc'\nA is not in list\n"
        );
    }

    fn strict() -> Propagator {
        Propagator::with_config(
            EquationRegistry::standard(),
            PropagatorConfig::new().strict(1e-6),
        )
    }

    #[test]
    fn test_strict_collect_discards_contradicting_entry() {
        // Sigma = 1 and E = 1 disagree by a factor of ε₀, so any entry that
        // pins down Q and A exposes the conflict. d alone does not.
        let (result, known, out, err) =
            run_with("Sigma\n1\nE\n1\nQ\n1\nd\n0.01\nA\n2\n", &strict());
        assert!(matches!(
            result,
            Err(CapacitorError::InputClosed { missing: 5 })
        ));

        // Q and A were rolled back along with everything derived from them.
        let left: Vec<_> = known.quantities().collect();
        assert_eq!(
            left,
            vec![
                Quantity::Separation,
                Quantity::SurfaceChargeDensity,
                Quantity::ElectricField,
            ]
        );
        assert_eq!(known.get(Quantity::SurfaceChargeDensity), Some(1.0));

        let lines: Vec<_> = err.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            assert!(line.starts_with("Inconsistent values for equation ChargeDensity"));
        }

        // Rejected quantities are offered again.
        assert!(out.ends_with("enter the variable you want to set (A Q C V U ): "));
    }

    #[test]
    fn test_strict_collect_accepts_consistent_entries() {
        let (result, known, _, err) = run_with("A\n2\nd\n0.01\nV\n5\n", &strict());
        assert!(result.is_ok());
        assert!(known.is_complete());
        assert!(err.is_empty());
    }

    #[test]
    fn test_collect_reports_closed_input() {
        let (result, known, _, _) = run("A\n2.0\n");
        assert!(matches!(
            result,
            Err(CapacitorError::InputClosed { missing: 7 })
        ));
        assert_eq!(known.len(), 1);
    }

    #[test]
    fn test_render_outcomes() {
        let mut known: KnownSet = [
            (Quantity::Area, 2.0),
            (Quantity::Separation, 0.01),
            (Quantity::Voltage, 5.0),
        ]
        .into_iter()
        .collect();
        let propagator = Propagator::new();
        propagator.run(&mut known).unwrap();
        let outcomes = run_scenarios(&known, &propagator, &STANDARD_SCENARIOS).unwrap();

        let mut console = Console::new(&b""[..], Vec::new(), Vec::new());
        console.render_results(&known).unwrap();
        console.render_outcomes(&outcomes).unwrap();
        let (_, out, _) = console.into_inner();
        let out = String::from_utf8(out).unwrap();

        assert!(out.starts_with("Results:\nArea: 2.000e+00 m^2\nSeparation: 1.000e-02 m\n"));
        assert!(out.contains("Configuration A 20% larger:\nArea: 2.400e+00 m^2\n"));
        assert!(out.contains("Configuration Q 20% smaller:\n"));
        assert!(out.contains("Capacitance: 2.124e-09 F\n"));
    }

    #[test]
    fn test_parse_assignment() {
        let (q, v) = parse_assignment("Sigma=4.4e-9").unwrap();
        assert_eq!(q, Quantity::SurfaceChargeDensity);
        assert_relative_eq!(v, 4.4e-9);

        assert!(matches!(
            parse_assignment("A2.0"),
            Err(CapacitorError::InvalidAssignment { .. })
        ));
        assert!(matches!(
            parse_assignment("A=two"),
            Err(CapacitorError::InvalidValue { .. })
        ));
        assert!(matches!(
            parse_assignment("W=1"),
            Err(CapacitorError::UnknownQuantity { .. })
        ));
    }
}
