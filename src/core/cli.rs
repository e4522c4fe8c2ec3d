//! Command line interface for the riffle bias harness
//!
//! Handles parsing command line arguments and provides validation for user
//! inputs. Scenario values the user leaves out are resolved against the
//! settings file and then built-in defaults.

use clap::Parser;
use tracing::{debug, warn};

use crate::core::config_file::ConfigFile;
use crate::sequence::shuffle::ShuffleVariant;

/// Built-in scenario defaults, used when neither the CLI nor the settings
/// file specifies a value.
pub const DEFAULT_INPUT: &str = "0123456789";
pub const DEFAULT_ITERATIONS: u32 = 1;
pub const DEFAULT_TRIALS: u32 = 1000;

/// riffle CLI arguments
///
/// Examples:
///   riffle                                  # Test all four shuffle variants
///   riffle --variant descending-reverse     # Test a single variant
///   riffle --input abcdef --trials 5000     # Custom scenario
///   riffle --guarantee-discontinuity        # Apply the first-position fixup
///   riffle --seed 42 --json                 # Reproducible machine output
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "riffle",
    version,
    about = "Measure permutation bias in list shuffling algorithms",
    long_about = "Riffle runs a family of in-place shuffle algorithms many times over a fixed input sequence and reports three bias statistics per algorithm: how often adjacent input pairs survive, how often the last element migrates to the front, and how often elements keep their original index. A uniform shuffle drives each statistic toward 1/len."
)]
pub struct CliArgs {
    /// Input sequence to shuffle, one element per character
    ///
    /// Each character is treated as one sequence element, so "0123456789"
    /// is a ten-element sequence. At least two characters are required
    /// for the pair statistics to mean anything.
    #[clap(
        long = "input",
        short = 'i',
        help = "Input sequence, one element per character",
        long_help = "Input sequence to shuffle. Each character is one element, so \"0123456789\" is a ten-element sequence. Needs at least two characters."
    )]
    pub input: Option<String>,

    /// Sweep multiplier handed to every shuffle call
    ///
    /// Each shuffle runs len * iterations full sweeps over the sequence,
    /// so higher values mix more at a quadratic cost.
    #[clap(
        long = "iterations",
        help = "Sweep multiplier per shuffle (default 1)",
        long_help = "Sweep multiplier handed to every shuffle call. Each call performs len * iterations full sweeps, so raising this mixes more at a quadratic cost in swaps."
    )]
    pub iterations: Option<u32>,

    /// Number of independent shuffle trials per variant
    #[clap(
        long = "trials",
        short = 't',
        help = "Independent trials per variant (default 1000)",
        long_help = "Number of independent shuffle trials to run per variant. Each trial starts from a fresh copy of the input. More trials tighten the statistics."
    )]
    pub trials: Option<u32>,

    /// Shuffle variants to test
    ///
    /// Repeat the flag to test several; all four run when omitted.
    #[clap(
        long = "variant",
        value_enum,
        help = "Variant to test; repeat for several (default: all four)",
        long_help = "Shuffle variant to test. Repeat the flag to test several in one run. When omitted, all four variants run in order."
    )]
    pub variants: Vec<ShuffleVariant>,

    /// Force the first output element to differ from the original last one
    #[clap(
        long = "guarantee-discontinuity",
        help = "Swap the ends when the original last element stays first",
        long_help = "After each shuffle, swap the first and last positions when the first element still equals the original last element. Only position 0 is ever checked or fixed."
    )]
    pub guarantee_discontinuity: bool,

    /// Seed for the random source
    ///
    /// Seeded runs reproduce their samples and statistics exactly.
    /// When omitted, each run draws a fresh entropy seed.
    #[clap(
        long = "seed",
        help = "Seed the random source for reproducible results",
        long_help = "Seed for the random source. Two runs with the same seed and scenario produce identical samples and statistics. When omitted, each run draws a fresh entropy seed."
    )]
    pub seed: Option<u64>,

    /// Emit results as JSON instead of a table
    #[clap(
        long = "json",
        help = "Emit results as JSON",
        long_help = "Emit the per-variant statistics as pretty-printed JSON on stdout instead of the human-readable table."
    )]
    pub json: bool,

    /// Raise log verbosity
    #[clap(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Raise log verbosity (-v info, -vv debug)"
    )]
    pub verbose: u8,

    /// Initialize user configuration directory with a settings file
    ///
    /// This creates the ~/.config/riffle directory with a settings.json
    /// holding the scenario defaults, ready to customize.
    #[clap(
        long = "new-config",
        help = "Write a starter settings file and exit",
        long_help = "Initialize the ~/.config/riffle directory with a settings.json file holding the built-in scenario defaults. Edit it to change the defaults without command line arguments."
    )]
    pub new_config: bool,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    ///
    /// This rejects scenarios the harness cannot run before any work
    /// starts, with messages that explain the constraint.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(input) = &self.input {
            if input.chars().count() < 2 {
                return Err(format!(
                    "Input must contain at least 2 characters, got {:?}\nThe pair statistics need adjacent positions to inspect.",
                    input
                ));
            }
        }

        if self.trials == Some(0) {
            return Err(
                "Trial count must be at least 1.\nZero trials would leave every statistic undefined.".to_string(),
            );
        }

        if self.iterations == Some(0) {
            return Err(
                "Iterations must be at least 1.\nShuffles treat zero iterations as a no-op, which measures nothing.".to_string(),
            );
        }

        Ok(())
    }

    /// Get the input sequence from CLI args, config file, or default
    ///
    /// Priority order:
    /// 1. CLI argument (--input)
    /// 2. Config file setting (~/.config/riffle/settings.json)
    /// 3. Built-in default ("0123456789")
    pub fn resolved_input(&self, config: Option<&ConfigFile>) -> String {
        // First check CLI args
        if let Some(input) = &self.input {
            debug!("Using input from CLI: {}", input);
            return input.clone();
        }

        // Then check config file
        if let Some(input) = config.and_then(|c| c.default_input.clone()) {
            if input.chars().count() >= 2 {
                debug!("Using input from config file: {}", input);
                return input;
            }
            warn!("Ignoring config file input shorter than 2 characters");
        }

        // Finally use built-in default
        debug!("Using default input: {}", DEFAULT_INPUT);
        DEFAULT_INPUT.to_string()
    }

    /// Get the sweep multiplier from CLI args, config file, or default
    pub fn resolved_iterations(&self, config: Option<&ConfigFile>) -> u32 {
        if let Some(iterations) = self.iterations {
            return iterations;
        }
        if let Some(iterations) = config.and_then(|c| c.default_iterations) {
            if iterations > 0 {
                return iterations;
            }
            warn!("Ignoring zero iterations from config file");
        }
        DEFAULT_ITERATIONS
    }

    /// Get the trial count from CLI args, config file, or default
    pub fn resolved_trials(&self, config: Option<&ConfigFile>) -> u32 {
        if let Some(trials) = self.trials {
            return trials;
        }
        if let Some(trials) = config.and_then(|c| c.default_trials) {
            if trials > 0 {
                return trials;
            }
            warn!("Ignoring zero trials from config file");
        }
        DEFAULT_TRIALS
    }

    /// Get the seed from CLI args or config file, if either sets one
    pub fn resolved_seed(&self, config: Option<&ConfigFile>) -> Option<u64> {
        self.seed.or_else(|| config.and_then(|c| c.default_seed))
    }

    /// Get the variants to test, defaulting to all four
    pub fn resolved_variants(&self) -> Vec<ShuffleVariant> {
        if self.variants.is_empty() {
            ShuffleVariant::ALL.to_vec()
        } else {
            self.variants.clone()
        }
    }
}
