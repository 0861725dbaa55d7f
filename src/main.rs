use std::env;
use std::error::Error;
use std::io;
use std::process;

use chrono::NaiveDate;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    let (path, account, date_range) = match args.as_slice() {
        [_, path, account] => (path, account, None),
        [_, path, account, from, to] => {
            let from: NaiveDate = from.parse()?;
            let to: NaiveDate = to.parse()?;
            (path, account, Some((from, to)))
        }
        _ => {
            return Err("Usage: bankbook <transactions.csv> <account> [<from> <to>]".into());
        }
    };

    bankbook::run(path, account, date_range, io::stdout().lock())
}
