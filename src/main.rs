use clap::Parser;
use libwazer::{is_short_link, Config, Extractor, Match};
use std::{
    error::Error,
    io::{self, Read},
};
use tracing_subscriber::EnvFilter;

/// Convert a Google Maps link or coordinates into a Waze navigation link.
#[derive(Parser)]
#[command(name = "wazer", version)]
struct Cli {
    /// Google Maps link, DMS coordinates or a decimal "lat, lng" pair. Read from stdin when
    /// omitted.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    text: Vec<String>,
    /// Reject out-of-range coordinates from every input format, not just decimal pairs
    #[arg(long, action)]
    strict: bool,
    /// Print the result as JSON
    #[arg(long, action)]
    json: bool,
    #[arg(short, long, action)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Run the extractor, turning its failure into a message the user can act on.
fn convert(text: &str, config: Config) -> Result<Match, String> {
    if text.trim().is_empty() {
        return Err("Please enter a Google Maps link or coordinates".to_string());
    }
    Extractor::new(config).extract_match(text).map_err(|e| {
        if is_short_link(text) {
            "Short links must be opened in a browser first; paste the full Google Maps link instead"
                .to_string()
        } else {
            e.to_string()
        }
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::parse();
    init_tracing(args.verbose);
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Starting");

    let text = if args.text.is_empty() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        args.text.join(" ")
    };

    let config = Config {
        strict_ranges: args.strict,
        ..Config::default()
    };
    let found = convert(&text, config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&found)?);
    } else {
        println!("Coordinates: {}", found.coordinate);
        println!("Waze: {}", found.coordinate.to_link());
    }

    Ok(())
}
