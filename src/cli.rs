//! Command-line surface of the `arrayprep` binary.
//!
//! Parsing is done with `clap`'s derive API; [`execute`] resolves the
//! configuration, builds the inputs (literal or generated), runs them through
//! the registry and renders the outcome to the given writer.

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use serde_json::json;

use arrayprep::config::{OutputFormat, PrepConfig};
use arrayprep::generator::{generate_values, rng_from_config};
use arrayprep::{strings, Algorithm, Input, Outcome, PrepError, Registry};

//==================================================================================
// 1. Argument Definitions
//==================================================================================

/// Simple exercises for arrays and strings.
#[derive(Parser, Debug)]
#[command(name = "arrayprep", version)]
#[command(about = "Simple exercises for arrays and strings")]
pub struct Cli {
    /// JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit info-level logs, including per-algorithm timings
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Seed for generated values and shuffles
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sorting operations
    Sort {
        /// Type of sorting algorithm to use
        #[arg(value_parser = parse_sort_method)]
        method: Algorithm,

        /// Values to pass to the sorting algorithm (generated when omitted)
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Generate a list of test values for use as sorting input
        #[arg(short, long, num_args = 2, value_names = ["SIZE", "MAX_VALUE"])]
        autogenerate: Option<Vec<u32>>,
    },

    /// String processing and manipulation
    Str(StrArgs),

    /// Misc. array processing and manipulation
    Arrays(ArraysArgs),
}

#[derive(Args, Debug)]
pub struct StrArgs {
    /// Determine if an ASCII string has all unique characters
    #[arg(long)]
    pub unique: Option<String>,

    /// Reverse a C-style (nul-terminated) string
    #[arg(long)]
    pub reverse: Option<String>,

    /// Remove duplicate characters
    #[arg(long)]
    pub duplicates: Option<String>,

    /// Check if two strings are anagrams
    #[arg(long, num_args = 2, value_names = ["FIRST", "SECOND"])]
    pub anagrams: Option<Vec<String>>,

    /// Generate data for a word cloud of the input
    #[arg(long)]
    pub word_cloud: Option<String>,
}

#[derive(Args, Debug)]
pub struct ArraysArgs {
    /// Generate a list of test values for use as input
    #[arg(short, long, num_args = 2, value_names = ["SIZE", "MAX_VALUE"])]
    pub autogenerate: Option<Vec<u32>>,

    #[command(subcommand)]
    pub kind: ArrayKind,
}

/// Array operations separated by allowed input.
#[derive(Subcommand, Debug)]
pub enum ArrayKind {
    /// Integer specific array operations
    Int {
        /// Which problem to test
        #[arg(value_parser = parse_int_problem)]
        problem: Algorithm,

        /// Values to pass to the problem
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// String array operations
    Str {
        /// Which problem to test
        #[arg(value_parser = parse_str_problem)]
        problem: Algorithm,

        /// Values to pass to the problem
        values: Vec<String>,
    },
}

fn parse_algorithm(name: &str, accept: fn(&Algorithm) -> bool) -> Result<Algorithm, String> {
    let allowed: Vec<&str> = Algorithm::ALL
        .iter()
        .filter(|a| accept(a))
        .map(Algorithm::name)
        .collect();
    name.parse::<Algorithm>()
        .ok()
        .filter(accept)
        .ok_or_else(|| format!("expected one of: {}", allowed.join(", ")))
}

fn parse_sort_method(name: &str) -> Result<Algorithm, String> {
    parse_algorithm(name, Algorithm::is_sort)
}

fn parse_int_problem(name: &str) -> Result<Algorithm, String> {
    parse_algorithm(name, |a| !a.is_sort() && !matches!(a, Algorithm::Shuffle | Algorithm::RotationPoint))
}

fn parse_str_problem(name: &str) -> Result<Algorithm, String> {
    parse_algorithm(name, Algorithm::accepts_words)
}

//==================================================================================
// 2. Execution
//==================================================================================

/// Merges the config file (if any) with the command-line overrides.
pub fn resolve_config(cli: &Cli) -> Result<PrepConfig, PrepError> {
    let mut config = match &cli.config {
        Some(path) => PrepConfig::from_json_file(path)?,
        None => PrepConfig::default(),
    };
    if cli.verbose {
        config.verbose = true;
    }
    if cli.json {
        config.output = OutputFormat::Json;
    }
    if cli.seed.is_some() {
        config.generator.seed = cli.seed;
    }
    Ok(config)
}

/// Runs the parsed command, writing its results to `out`.
pub fn execute<W: Write>(cli: &Cli, config: &PrepConfig, out: &mut W) -> Result<(), PrepError> {
    let start = Instant::now();
    let mut rng = rng_from_config(&config.generator);
    let registry = Registry::standard();

    match &cli.command {
        Command::Sort {
            method,
            values,
            autogenerate,
        } => {
            let values = match autogenerate.as_deref() {
                Some(&[size, max_value]) => generate_values(size as usize, max_value, &mut rng),
                _ if values.is_empty() => {
                    let generator = &config.generator;
                    generate_values(generator.size, generator.max_value, &mut rng)
                }
                _ => values.clone(),
            };
            let outcome = registry.run(*method, Input::Ints(values), &mut rng)?;
            render_outcome(&outcome, config.output, out)?;
        }
        Command::Arrays(args) => {
            let generated = match args.autogenerate.as_deref() {
                Some(&[size, max_value]) => Some(generate_values(size as usize, max_value, &mut rng)),
                _ => None,
            };
            let (problem, input) = match &args.kind {
                ArrayKind::Int { problem, values } => {
                    (*problem, Input::Ints(generated.unwrap_or_else(|| values.clone())))
                }
                // Generated values stay numeric so they compare as numbers.
                ArrayKind::Str { problem, values } => match generated {
                    Some(ints) => (*problem, Input::Ints(ints)),
                    None => (*problem, Input::Words(values.clone())),
                },
            };
            let outcome = registry.run(problem, input, &mut rng)?;
            render_outcome(&outcome, config.output, out)?;
        }
        Command::Str(args) => run_string_ops(args, config.output, out)?,
    }

    if config.report_timing {
        let line = format!("Time taken: {:.2?}", start.elapsed());
        match config.output {
            OutputFormat::Plain => writeln!(out, "{}", line.dimmed())?,
            OutputFormat::Json => log::info!("{}", line),
        }
    }
    Ok(())
}

fn render_outcome<W: Write>(outcome: &Outcome, format: OutputFormat, out: &mut W) -> Result<(), PrepError> {
    match format {
        OutputFormat::Plain => writeln!(out, "{}", outcome)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(outcome)?)?,
    }
    Ok(())
}

fn run_string_ops<W: Write>(args: &StrArgs, format: OutputFormat, out: &mut W) -> Result<(), PrepError> {
    let mut results = Vec::new();

    if let Some(s) = &args.unique {
        let repeated = strings::find_non_unique(s);
        let plain = match repeated {
            Some(c) => format!("Non-unique char found: {}", c),
            None => format!("{} has all unique characters. Congratulations.", s),
        };
        results.push((plain, json!({"unique": repeated.is_none(), "offending": repeated})));
    }
    if let Some(s) = &args.reverse {
        let reversed = strings::reverse_c_string(s)?;
        results.push((reversed.clone(), json!({"reversed": reversed})));
    }
    if let Some(s) = &args.duplicates {
        let deduped = strings::remove_duplicates(s);
        results.push((deduped.clone(), json!({"deduplicated": deduped})));
    }
    if let Some(pair) = &args.anagrams {
        if let [first, second] = pair.as_slice() {
            let anagram = strings::is_anagram(first, second);
            let plain = if anagram {
                "congrats! you got yourself an anagram."
            } else {
                "it's no good bro"
            };
            results.push((plain.to_string(), json!({"anagram": anagram})));
        }
    }
    if let Some(text) = &args.word_cloud {
        let tally = strings::word_cloud(text);
        let plain = tally
            .iter()
            .map(|(word, count)| format!("{}: {}", word, count))
            .collect::<Vec<_>>()
            .join("\n");
        results.push((plain, json!({"word_cloud": tally})));
    }

    if results.is_empty() {
        return Err(PrepError::InvalidArgument(
            "str needs at least one of --unique, --reverse, --duplicates, --anagrams, --word-cloud".to_string(),
        ));
    }
    for (plain, structured) in results {
        match format {
            OutputFormat::Plain => writeln!(out, "{}", plain)?,
            OutputFormat::Json => writeln!(out, "{}", structured)?,
        }
    }
    Ok(())
}
