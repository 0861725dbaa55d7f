//! This example generates a CSV ledger with a fixed number of transactions
//! per account, for a number of accounts supplied as a command-line
//! argument.
//!
//! The output can then be used as a backing file for the `bankbook` crate.
//!
//! Example (100 accounts):
//! ```bash
//! cargo run --example generator 100 > data/100_accounts.csv
//! ```

use bankbook::{Transaction, TransactionType};
use chrono::{Duration, NaiveDate, NaiveTime};
use csv::Writer;
use rust_decimal::Decimal;
use std::{env, error::Error};

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: cargo run --example generator <num_accounts>");
        std::process::exit(1);
    }

    let num_accounts: u32 = match args[1].parse() {
        Ok(n) if n > 0 => n,
        _ => {
            eprintln!("Error: <num_accounts> must be a positive integer.");
            std::process::exit(1);
        }
    };

    const TX_PER_ACCOUNT: u32 = 10;
    let start = NaiveDate::from_ymd_opt(2024, 1, 1)
        .expect("valid date")
        .and_time(NaiveTime::MIN);

    let mut wtr = Writer::from_writer(std::io::stdout());

    // Round by round, every account produces its next transaction, so
    // accounts interleave the way a real ledger would.
    for round in 0..TX_PER_ACCOUNT {
        for account in 1..=num_accounts {
            let tx_type = match round % 3 {
                0 => TransactionType::Deposit,
                1 => TransactionType::Withdrawal,
                _ => TransactionType::Transfer,
            };
            let txn = Transaction {
                account_number: format!("ACC{account}"),
                timestamp: start + Duration::hours((round * num_accounts + account) as i64),
                tx_type,
                amount: Decimal::from(account * (round + 1)),
            };
            wtr.serialize(txn)?;
        }
    }
    wtr.flush()?;
    Ok(())
}
