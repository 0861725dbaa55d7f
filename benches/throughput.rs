use bankbook::{Account, TransactionStore};
use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::fmt::Write as _;
use std::path::Path;
use std::time::Duration;

const NUM_ACCOUNTS: u32 = 1_000;
const NUM_TRANSACTIONS: u32 = 100_000;

/// Writes a deterministic ledger: transactions cycle through the accounts,
/// alternate deposit/withdrawal, and spread across the days of January.
fn generate_ledger(path: &Path) {
    let mut contents = String::from("accountNumber,timeStamp,type,amount\n");
    for i in 0..NUM_TRANSACTIONS {
        let account = i % NUM_ACCOUNTS;
        let day = (i % 28) + 1;
        let tx_type = if i % 2 == 0 { "DEPOSIT" } else { "WITHDRAWAL" };
        writeln!(
            contents,
            "ACC{account},2024-01-{day:02}T12:00:00,{tx_type},{}.50",
            i % 500
        )
        .unwrap();
    }
    std::fs::write(path, contents).unwrap();
}

fn store_throughput(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.csv");
    generate_ledger(&path);

    let store = TransactionStore::open(&path).unwrap();
    let account = Account::new("ACC7");

    let mut group = c.benchmark_group("throughput");
    group.throughput(Throughput::Elements(NUM_TRANSACTIONS as u64));
    group.measurement_time(Duration::from_secs(20));

    group.bench_function("load_100K_transactions", |b| {
        b.iter(|| TransactionStore::open(&path).unwrap())
    });

    group.bench_function("scan_single_account", |b| {
        b.iter(|| store.transactions_for(&account).count())
    });

    group.bench_function("scan_single_account_date_bounded", |b| {
        let from = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
        b.iter(|| store.transactions_between(&account, from, to).count())
    });

    group.bench_function("save_100K_transactions", |b| {
        b.iter(|| store.save().unwrap())
    });

    group.finish();
}

criterion_group!(benches, store_throughput);
criterion_main!(benches);
