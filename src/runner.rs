//! The runner wires the pieces together: open a store over a ledger file,
//! query one account (optionally bounded by a date range), and write the
//! matching rows as CSV to a writer.

use std::error::Error;
use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;

use crate::{
    csv_utils::write_csv,
    dto::{Account, Transaction},
    stores::TransactionStore,
};

/// Runs an account statement query over the ledger at `input_path` and
/// writes the matching transactions to the provided writer.
///
/// With `date_range = Some((from, to))` the result is bounded by the
/// store's date-range query, which excludes both midnight boundaries.
///
/// # Errors
/// Returns an error if:
/// * The ledger file cannot be read or contains malformed rows
/// * Writing to the output fails
pub fn run<P, W>(
    input_path: P,
    account_number: &str,
    date_range: Option<(NaiveDate, NaiveDate)>,
    writer: W,
) -> Result<(), Box<dyn Error>>
where
    P: AsRef<Path>,
    W: Write,
{
    let store = TransactionStore::open(input_path)?;
    let account = Account::new(account_number);

    let matches: Vec<&Transaction> = match date_range {
        Some((from, to)) => store.transactions_between(&account, from, to).collect(),
        None => store.transactions_for(&account).collect(),
    };

    write_csv(writer, matches.into_iter())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_statement() -> Result<(), Box<dyn Error>> {
        let mut output = Vec::new();
        run("data/example_transactions.csv", "ACC1", None, &mut output)?;

        let expected = "accountNumber,timeStamp,type,amount
ACC1,2024-03-01T10:00:00,DEPOSIT,100.00
ACC1,2024-03-02T09:15:00,WITHDRAWAL,40.00
ACC1,2024-03-03T16:45:00,TRANSFER,25.50
";
        assert_eq!(String::from_utf8(output)?, expected);
        Ok(())
    }

    #[test]
    fn test_example_statement_date_bounded() -> Result<(), Box<dyn Error>> {
        let from = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();

        let mut output = Vec::new();
        run(
            "data/example_transactions.csv",
            "ACC1",
            Some((from, to)),
            &mut output,
        )?;

        // The 2024-03-03 transfer sits past the exclusive upper bound.
        let expected = "accountNumber,timeStamp,type,amount
ACC1,2024-03-01T10:00:00,DEPOSIT,100.00
ACC1,2024-03-02T09:15:00,WITHDRAWAL,40.00
";
        assert_eq!(String::from_utf8(output)?, expected);
        Ok(())
    }

    #[test]
    fn test_unknown_account_writes_nothing() -> Result<(), Box<dyn Error>> {
        let mut output = Vec::new();
        run("data/example_transactions.csv", "ACC9", None, &mut output)?;

        assert!(output.is_empty());
        Ok(())
    }

    #[test]
    fn test_missing_ledger_is_an_error() {
        let result = run("no/such/ledger.csv", "ACC1", None, Vec::new());
        assert!(result.is_err());
    }
}
