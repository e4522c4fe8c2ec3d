//! Harness runner
//!
//! Resolves the scenario from CLI arguments and user settings, runs the
//! bias harness for each selected variant, and renders the results as a
//! table or as JSON.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;

use crate::core::cli::CliArgs;
use crate::core::config_file::ConfigFile;
use crate::sequence::shuffle::ShuffleVariant;
use crate::stats::{Probability, ShuffleResults};
use crate::text;

/// A fully resolved harness scenario.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub input: String,
    pub iterations: u32,
    pub trials: u32,
    pub guarantee_discontinuity: bool,
    pub seed: Option<u64>,
    pub variants: Vec<ShuffleVariant>,
}

impl Scenario {
    /// Resolve CLI arguments against the optional settings file.
    pub fn resolve(cli_args: &CliArgs, config: Option<&ConfigFile>) -> Scenario {
        Scenario {
            input: cli_args.resolved_input(config),
            iterations: cli_args.resolved_iterations(config),
            trials: cli_args.resolved_trials(config),
            guarantee_discontinuity: cli_args.guarantee_discontinuity,
            seed: cli_args.resolved_seed(config),
            variants: cli_args.resolved_variants(),
        }
    }

    /// Build the random source, seeded when the scenario asks for it.
    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Run the bias harness for the given CLI arguments.
pub fn run_app(cli_args: CliArgs) -> Result<()> {
    if cli_args.new_config {
        return ConfigFile::initialize_config_directory();
    }

    if let Err(message) = cli_args.validate() {
        anyhow::bail!(message);
    }

    let config = ConfigFile::load();
    let scenario = Scenario::resolve(&cli_args, config.as_ref());
    info!(
        input = %scenario.input,
        iterations = scenario.iterations,
        trials = scenario.trials,
        guarantee_discontinuity = scenario.guarantee_discontinuity,
        "running bias harness"
    );
    info!(
        "testing variants: {}",
        text::separated(scenario.variants.iter(), ',', true)
    );

    let report = run_scenario(&scenario)?;

    if cli_args.json {
        print_json(&scenario, &report)?;
    } else {
        print_table(&scenario, &report);
    }

    Ok(())
}

/// Run every variant in the scenario and collect its statistics.
///
/// All variants share one random source, so a seeded scenario reproduces
/// the whole report.
pub fn run_scenario(scenario: &Scenario) -> Result<Vec<(ShuffleVariant, ShuffleResults)>> {
    let mut rng = scenario.rng();
    let mut report = Vec::with_capacity(scenario.variants.len());
    for variant in &scenario.variants {
        let results = ShuffleResults::compute_variant(
            &scenario.input,
            *variant,
            scenario.iterations,
            scenario.guarantee_discontinuity,
            scenario.trials,
            &mut rng,
        )
        .with_context(|| format!("running the {variant} variant"))?;
        info!(variant = %variant, "computed bias statistics");
        report.push((*variant, results));
    }
    Ok(report)
}

/// Render the report as an aligned table on stdout.
fn print_table(scenario: &Scenario, report: &[(ShuffleVariant, ShuffleResults)]) {
    println!(
        "Shuffle bias over {:?}: {} trials, {} iterations, discontinuity fixup {}",
        scenario.input,
        scenario.trials,
        scenario.iterations,
        if scenario.guarantee_discontinuity {
            "on"
        } else {
            "off"
        },
    );
    if let Some(seed) = scenario.seed {
        println!("Seed: {seed}");
    }
    println!();
    println!(
        "{:<20} {:>14} {:>14} {:>17}",
        "variant", "ordered-pair", "last-to-first", "index-continuity"
    );
    for (variant, results) in report {
        println!(
            "{:<20} {:>14} {:>14} {:>17}",
            variant,
            format_probability(&results.ordered_pair),
            format_probability(&results.last_to_first),
            format_probability(&results.index_continuity),
        );
    }
}

/// Render one probability as its ratio with four decimal places.
fn format_probability(probability: &Probability) -> String {
    format!("{:.4}", probability.probability)
}

/// Per-variant statistics without the raw samples.
#[derive(Serialize)]
struct VariantReport<'a> {
    variant: ShuffleVariant,
    ordered_pair: &'a Probability,
    last_to_first: &'a Probability,
    index_continuity: &'a Probability,
}

/// Render the report as pretty JSON on stdout.
fn print_json(scenario: &Scenario, report: &[(ShuffleVariant, ShuffleResults)]) -> Result<()> {
    #[derive(Serialize)]
    struct JsonReport<'a> {
        input: &'a str,
        iterations: u32,
        trials: u32,
        guarantee_discontinuity: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        seed: Option<u64>,
        variants: Vec<VariantReport<'a>>,
    }

    let variants = report
        .iter()
        .map(|(variant, results)| VariantReport {
            variant: *variant,
            ordered_pair: &results.ordered_pair,
            last_to_first: &results.last_to_first,
            index_continuity: &results.index_continuity,
        })
        .collect();

    let json = serde_json::to_string_pretty(&JsonReport {
        input: &scenario.input,
        iterations: scenario.iterations,
        trials: scenario.trials,
        guarantee_discontinuity: scenario.guarantee_discontinuity,
        seed: scenario.seed,
        variants,
    })?;
    println!("{json}");
    Ok(())
}
