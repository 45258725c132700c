//! End-to-end flow: read lines, parse, filter by radius, sort, render.
//!
//! Parsing is strict. Blank lines are skipped, and the first line that fails
//! to parse aborts the whole run before anything is written.

use crate::config::SearchConfig;
use crate::customer::{find_closest_customers, parse_customer, Customer};
use crate::error::{FinderError, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

/// Input path meaning "read from stdin".
pub const STDIN_PATH: &str = "-";

/// Open `path` for line reading, or stdin for `-`.
pub fn open_input(path: &str) -> io::Result<Box<dyn BufRead>> {
    if path == STDIN_PATH {
        Ok(Box::new(io::stdin().lock()))
    } else {
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }
}

/// Parse every non-blank line of `reader`, lazily.
///
/// Trailing whitespace is stripped before parsing, so error messages echo
/// the line as it appears without its line terminator.
pub fn customer_lines<R: BufRead>(reader: R) -> impl Iterator<Item = Result<Customer>> {
    reader.lines().filter_map(|line| match line {
        Ok(line) => {
            let line = line.trim_end();
            if line.is_empty() {
                None
            } else {
                Some(parse_customer(line).map_err(FinderError::from))
            }
        }
        Err(e) => Some(Err(FinderError::from(e))),
    })
}

/// All customers within the configured radius, sorted by id.
pub fn find_in_reader<R: BufRead>(reader: R, config: &SearchConfig) -> Result<Vec<Customer>> {
    let mut failure = None;
    let mut parsed = 0usize;

    let customers = customer_lines(reader)
        .map_while(|item| match item {
            Ok(customer) => Some(customer),
            Err(e) => {
                failure = Some(e);
                None
            }
        })
        .inspect(|customer| {
            parsed += 1;
            if let Err(e) = customer.location.validate() {
                tracing::debug!("Customer {}: {}", customer.id, e);
            }
        });

    let mut matches: Vec<Customer> =
        find_closest_customers(customers, config.distance_km, config.center).collect();

    if let Some(e) = failure {
        return Err(e);
    }

    matches.sort_by(|a, b| a.id.cmp(&b.id));
    tracing::debug!("{} of {} customers within {} km", matches.len(), parsed, config.distance_km);
    Ok(matches)
}

/// Write one `name (id)` line per customer.
pub fn render<W: Write>(customers: &[Customer], mut out: W) -> io::Result<()> {
    for customer in customers {
        writeln!(out, "{}", customer.display_line())?;
    }
    out.flush()
}

/// Run the full pipeline. Returns the number of customers written.
pub fn run<R: BufRead, W: Write>(reader: R, out: W, config: &SearchConfig) -> Result<usize> {
    let matches = find_in_reader(reader, config)?;
    render(&matches, out)?;
    Ok(matches.len())
}
