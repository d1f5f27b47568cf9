mod common;

use bank_ledger::{
    errors::LedgerError,
    ledger::{recompute_balance, TransactionKind},
};
use common::setup_test_store;

#[test]
fn asha_and_kofi_walkthrough() {
    let (mut store, _path) = setup_test_store();

    let asha = store.create_account("Asha", 1000.0).expect("create Asha");
    assert_eq!(asha.balance, 1000.0);
    let opening = &store.account(asha.account_number).unwrap().transactions;
    assert_eq!(opening.len(), 1);
    assert_eq!(opening[0].kind, TransactionKind::Created);
    assert_eq!(opening[0].amount, 1000.0);

    assert_eq!(store.deposit(asha.account_number, 500.0).unwrap(), 1500.0);

    let err = store
        .withdraw(asha.account_number, 2000.0)
        .expect_err("overdraft must be rejected");
    assert!(matches!(err, LedgerError::InvalidAmount(_)), "{err:?}");
    assert_eq!(store.account(asha.account_number).unwrap().balance, 1500.0);

    let kofi = store.create_account("Kofi", 0.0).expect("create Kofi");
    assert_eq!(kofi.balance, 0.0);
    let receipt = store
        .transfer(asha.account_number, kofi.account_number, 300.0)
        .expect("transfer");
    assert_eq!(receipt.sender_balance, 1200.0);
    assert_eq!(receipt.receiver_balance, 300.0);
    assert_eq!(
        store.account(kofi.account_number).unwrap().transactions.len(),
        2
    );

    let statement = store.statement(asha.account_number).unwrap();
    assert_eq!(statement.balance, 1200.0);
    let kinds: Vec<_> = statement.transactions.iter().map(|txn| txn.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TransactionKind::Created,
            TransactionKind::Deposit,
            TransactionKind::TransferOut {
                counterparty: kofi.account_number
            },
        ]
    );
    assert_eq!(recompute_balance(&statement.transactions), statement.balance);

    let listing = store.list_accounts();
    let names: Vec<_> = listing.iter().map(|summary| summary.name.as_str()).collect();
    assert_eq!(names, vec!["Asha", "Kofi"]);
}

#[test]
fn every_created_account_gets_a_distinct_six_digit_number() {
    let (mut store, _path) = setup_test_store();
    for idx in 0..200 {
        store.create_account(format!("holder {idx}"), 0.0).unwrap();
    }
    let mut numbers: Vec<_> = store
        .list_accounts()
        .iter()
        .map(|summary| summary.account_number)
        .collect();
    assert!(numbers.iter().all(|number| number.is_six_digit()));
    numbers.sort();
    numbers.dedup();
    assert_eq!(numbers.len(), 200);
}
