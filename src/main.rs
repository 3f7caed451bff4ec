//! cvspin CLI
//!
//! Usage:
//!   cvspin tul4NUsfs9Cl7mOf.1                        # Spin with defaults
//!   cvspin tul4NUsfs9Cl7mOf.1 --periodicity long     # Wider counter
//!   cvspin tul4NUsfs9Cl7mOf.1 --validate --count 3   # Validate base, spin 3 times
//!   cvspin tul4NUsfs9Cl7mOf.1 --json                 # JSON output

use clap::Parser;
use colored::Colorize;

use cvspin::types::{SpinCounterInterval, SpinCounterPeriodicity, SpinEntropy, SpinOutput};
use cvspin::{SpinConfig, SpinError, SpinGenerator, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "cvspin",
    version = VERSION,
    about = "Apply the Spin operator to correlation vectors",
    long_about = "Appends a time and entropy derived segment to each correlation vector.\n\n\
                  Interval:\n  \
                  coarse  - counter increments every ~1.67s\n  \
                  fine    - counter increments every ~6.5ms\n\n\
                  Periodicity (counter bits):\n  \
                  none=0  short=16  medium=24  long=32\n\n\
                  Entropy: 0-4 random bytes. More than 32 bits total\n\
                  produces two decimal fields."
)]
struct Args {
    /// Correlation vectors to spin
    #[arg(required = true)]
    vectors: Vec<String>,

    /// Counter interval: coarse or fine
    #[arg(long)]
    interval: Option<SpinCounterInterval>,

    /// Counter periodicity: none, short, medium or long
    #[arg(long)]
    periodicity: Option<SpinCounterPeriodicity>,

    /// Entropy bytes (0-4)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=4))]
    entropy: Option<u8>,

    /// Validate each base vector before spinning
    #[arg(long)]
    validate: bool,

    /// JSON config file (SpinConfig)
    #[arg(long)]
    config: Option<String>,

    /// Spins per input vector
    #[arg(long, default_value_t = 1)]
    count: usize,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Debug logging
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    if args.no_color {
        colored::control::set_override(false);
    }

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            std::process::exit(1);
        }
    };

    tracing::debug!(?config, "starting");

    let generator = SpinGenerator::new(config);
    let mut failures = 0usize;

    for input in &args.vectors {
        for _ in 0..args.count {
            match generator.spin(input) {
                Ok(cv) => print_output(&SpinOutput::new(input, &cv, config.parameters), &args),
                Err(e) => {
                    failures += 1;
                    print_error(input, &e, &args);
                    break;
                }
            }
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
}

/// Config file first, then flags on top
fn build_config(args: &Args) -> Result<SpinConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => SpinConfig::load(path)?,
        None => SpinConfig::default(),
    };

    if args.validate {
        config.validate_during_creation = true;
    }
    if let Some(interval) = args.interval {
        config.parameters.interval = interval;
    }
    if let Some(periodicity) = args.periodicity {
        config.parameters.periodicity = periodicity;
    }
    if let Some(entropy) = args.entropy {
        config.parameters.entropy = SpinEntropy::new(entropy)?;
    }

    Ok(config)
}

fn print_output(output: &SpinOutput, args: &Args) {
    if args.json {
        match serde_json::to_string(output) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Cannot serialize output: {}", e),
        }
    } else if args.no_color {
        println!("{}", output.to_parseable_string());
    } else {
        println!("{}", output.to_terminal_string());
    }
}

fn print_error(input: &str, error: &SpinError, args: &Args) {
    if args.json {
        let body = serde_json::json!({
            "input": input,
            "code": error.code(),
            "kind": error.kind(),
            "message": error.to_string(),
        });
        println!("{}", body);
    } else {
        eprintln!("{} {} {}", error.code().red().bold(), input, error.to_string().dimmed());
    }
}
