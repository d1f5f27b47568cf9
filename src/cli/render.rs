//! Plain-text rendering of menu entries and ledger views.

use crate::core::{Statement, TransferReceipt};
use crate::ledger::{AccountNumber, AccountSummary};

pub const MENU_TITLE: &str = "Welcome to the Banking System";
pub const GOODBYE: &str = "Exiting the Banking System. Goodbye!";
pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";

/// Actions offered by the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateAccount,
    Deposit,
    Withdraw,
    Transfer,
    Statement,
    ListAccounts,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::CreateAccount,
        MenuChoice::Deposit,
        MenuChoice::Withdraw,
        MenuChoice::Transfer,
        MenuChoice::Statement,
        MenuChoice::ListAccounts,
        MenuChoice::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::CreateAccount => "Create Account",
            MenuChoice::Deposit => "Deposit",
            MenuChoice::Withdraw => "Withdraw",
            MenuChoice::Transfer => "Transfer",
            MenuChoice::Statement => "Generate Statement",
            MenuChoice::ListAccounts => "List Accounts",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Maps the 1-based menu key typed by the user.
    pub fn parse(input: &str) -> Option<Self> {
        let index: usize = input.trim().parse().ok()?;
        index
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx).copied())
    }
}

pub fn menu_lines() -> Vec<String> {
    MenuChoice::ALL
        .iter()
        .enumerate()
        .map(|(idx, choice)| format!("{}. {}", idx + 1, choice.label()))
        .collect()
}

pub fn account_created(summary: &AccountSummary) -> String {
    format!(
        "Account created successfully for {} with account number {} and initial balance {}",
        summary.name, summary.account_number, summary.balance
    )
}

pub fn deposited(number: AccountNumber, amount: f64, balance: f64) -> String {
    format!(
        "Deposited {amount} into account with account number {number}. New balance: {balance}"
    )
}

pub fn withdrawn(number: AccountNumber, amount: f64, balance: f64) -> String {
    format!(
        "Withdrawn {amount} from account with account number {number}. New balance: {balance}"
    )
}

pub fn transferred(receipt: &TransferReceipt) -> String {
    format!(
        "Transferred {} from account with account number {} to account with account number {}. New balance: {}",
        receipt.amount, receipt.sender, receipt.receiver, receipt.sender_balance
    )
}

pub fn statement_lines(statement: &Statement) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Account statement for account with account number {}:",
            statement.account_number
        ),
        format!("Balance: {}", statement.balance),
        "Transaction History:".to_string(),
    ];
    lines.extend(
        statement
            .transactions
            .iter()
            .map(|txn| format!("- {}: {} {}", txn.timestamp, txn.kind, txn.amount)),
    );
    lines
}

pub fn account_list_lines(accounts: &[AccountSummary]) -> Vec<String> {
    if accounts.is_empty() {
        return vec!["No accounts yet.".to_string()];
    }
    accounts
        .iter()
        .flat_map(|account| {
            [
                format!("- Name: {},", account.name),
                format!("  Account Number: {},", account.account_number),
                format!("  Account Balance: {}", account.balance),
            ]
        })
        .collect()
}
