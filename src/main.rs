use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use nearby_customers::config::{SearchConfig, DEFAULT_CENTER, DEFAULT_DISTANCE_KM};
use nearby_customers::{logger, pipeline, FinderError};
use std::io;

/// Finds customers within range of a point.
///
/// Reads one JSON customer per line and prints `name (user_id)` for every
/// customer within the given distance, sorted by user_id.
///
/// Examples:
///   find-customers customers.txt
///   find-customers -d 50 -c 51.8985 -8.4756 customers.txt
///   cat customers.txt | find-customers -
#[derive(Parser)]
#[command(name = "find-customers", version, about, long_about = None)]
struct Cli {
    /// Input file with one JSON customer per line, or `-` for stdin.
    file: String,

    /// Distance in km that is good to match.
    #[arg(short, long, default_value_t = DEFAULT_DISTANCE_KM, allow_hyphen_values = true)]
    distance: f64,

    /// Point the distance is measured from. Defaults to the Dublin office.
    #[arg(
        short,
        long,
        num_args = 2,
        action = ArgAction::Set,
        value_names = ["LAT", "LON"],
        default_values_t = [DEFAULT_CENTER.lat, DEFAULT_CENTER.lon],
        allow_hyphen_values = true
    )]
    center: Vec<f64>,

    /// Log the run to stderr.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn search_config(&self) -> SearchConfig {
        match self.center[..] {
            [lat, lon] => SearchConfig::new(self.distance, (lat, lon)),
            _ => Cli::command()
                .error(
                    ErrorKind::WrongNumberOfValues,
                    format!("--center takes exactly 2 values (LAT LON), got {}", self.center.len()),
                )
                .exit(),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let config = cli.search_config();
    tracing::debug!(
        "Searching within {} km of {}",
        config.distance_km,
        config.center
    );

    let input = pipeline::open_input(&cli.file).unwrap_or_else(|e| {
        Cli::command()
            .error(ErrorKind::Io, format!("Could not open file '{}': {}", cli.file, e))
            .exit()
    });

    let stdout = io::stdout();
    match pipeline::run(input, io::BufWriter::new(stdout.lock()), &config) {
        Ok(count) => tracing::debug!("Printed {} customers", count),
        Err(FinderError::Parse(e)) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
