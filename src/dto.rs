use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Category of a recorded transaction. Serialized as the upper-case variant
/// name, which is also the textual form in the backing file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    Transfer,
}

/// One recorded transaction. The serde renames pin the CSV column names;
/// field declaration order pins the column order on the write path.
///
/// Amount sign and magnitude carry whatever the domain layer handed in;
/// nothing here validates them.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    #[serde(rename = "accountNumber")]
    pub account_number: String,
    #[serde(rename = "timeStamp")]
    pub timestamp: NaiveDateTime,
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
    pub amount: Decimal,
}

/// An account as the store sees it: just the identifier used as the filter
/// key. Never mutated by the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub account_number: String,
}

impl Account {
    pub fn new(account_number: impl Into<String>) -> Self {
        Self {
            account_number: account_number.into(),
        }
    }
}
