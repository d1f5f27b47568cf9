use std::sync::Arc;

use crate::errors::{LedgerError, Result};
use crate::ledger::{
    ensure_covered, ensure_finite, ensure_positive, Account, AccountNumber, AccountSummary,
    Transaction, TransactionKind,
};
use crate::storage::SnapshotStore;

use super::{account_numbers::AccountNumberGenerator, clock::Clock};

/// Balance and full history of one account.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub account_number: AccountNumber,
    pub name: String,
    pub balance: f64,
    pub transactions: Vec<Transaction>,
}

/// Outcome of a successful transfer.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferReceipt {
    pub sender: AccountNumber,
    pub receiver: AccountNumber,
    pub amount: f64,
    pub sender_balance: f64,
    pub receiver_balance: f64,
    pub timestamp: String,
}

/// Owns the accounts for the process lifetime and flushes them after every mutation.
pub struct LedgerStore {
    accounts: Vec<Account>,
    snapshots: Box<dyn SnapshotStore>,
    clock: Arc<dyn Clock>,
    numbers: AccountNumberGenerator,
}

impl LedgerStore {
    /// Bootstraps the snapshot if needed and loads it.
    pub fn open(snapshots: Box<dyn SnapshotStore>, clock: Arc<dyn Clock>) -> Result<Self> {
        Self::open_with_numbers(snapshots, clock, AccountNumberGenerator::new())
    }

    pub fn open_with_numbers(
        snapshots: Box<dyn SnapshotStore>,
        clock: Arc<dyn Clock>,
        numbers: AccountNumberGenerator,
    ) -> Result<Self> {
        snapshots.ensure_store_exists()?;
        let mut accounts = snapshots.load()?;
        for account in &mut accounts {
            let persisted = account.refresh_balance();
            if persisted != account.balance {
                tracing::warn!(
                    account = %account.account_number,
                    persisted,
                    recomputed = account.balance,
                    "persisted balance disagrees with transaction history"
                );
            }
        }
        tracing::info!(accounts = accounts.len(), "ledger loaded");
        Ok(Self {
            accounts,
            snapshots,
            clock,
            numbers,
        })
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.account_number == number)
    }

    pub fn create_account(
        &mut self,
        name: impl Into<String>,
        initial_balance: f64,
    ) -> Result<AccountSummary> {
        let initial_balance = ensure_finite(initial_balance)?;
        let number = self.numbers.next_unused(&self.accounts)?;
        let account = Account::open(number, name, initial_balance, self.clock.timestamp());
        let summary = account.summary();
        self.accounts.push(account);

        if let Err(err) = self.persist() {
            self.accounts.pop();
            return Err(err);
        }
        tracing::info!(account = %number, initial_balance, "account created");
        Ok(summary)
    }

    pub fn deposit(&mut self, number: AccountNumber, amount: f64) -> Result<f64> {
        let idx = self.index_of(number)?;
        let amount = ensure_positive(amount).inspect_err(|err| {
            tracing::warn!(account = %number, %err, "deposit rejected");
        })?;
        self.apply(&[(idx, TransactionKind::Deposit)], amount)?;
        let balance = self.accounts[idx].balance;
        tracing::info!(account = %number, amount, balance, "deposit recorded");
        Ok(balance)
    }

    pub fn withdraw(&mut self, number: AccountNumber, amount: f64) -> Result<f64> {
        let idx = self.index_of(number)?;
        let amount = ensure_positive(amount)
            .and_then(|amount| ensure_covered(amount, self.accounts[idx].balance).map(|_| amount))
            .inspect_err(|err| {
                tracing::warn!(account = %number, %err, "withdrawal rejected");
            })?;
        self.apply(&[(idx, TransactionKind::Withdrawal)], amount)?;
        let balance = self.accounts[idx].balance;
        tracing::info!(account = %number, amount, balance, "withdrawal recorded");
        Ok(balance)
    }

    /// Moves `amount` between two accounts, sender checked before receiver.
    pub fn transfer(
        &mut self,
        sender: AccountNumber,
        receiver: AccountNumber,
        amount: f64,
    ) -> Result<TransferReceipt> {
        let from = self.index_of(sender)?;
        let to = self.index_of(receiver)?;
        let amount = ensure_positive(amount)
            .and_then(|amount| ensure_covered(amount, self.accounts[from].balance).map(|_| amount))
            .inspect_err(|err| {
                tracing::warn!(%sender, %receiver, %err, "transfer rejected");
            })?;

        let timestamp = self.apply(
            &[
                (
                    from,
                    TransactionKind::TransferOut {
                        counterparty: receiver,
                    },
                ),
                (
                    to,
                    TransactionKind::TransferIn {
                        counterparty: sender,
                    },
                ),
            ],
            amount,
        )?;
        let receipt = TransferReceipt {
            sender,
            receiver,
            amount,
            sender_balance: self.accounts[from].balance,
            receiver_balance: self.accounts[to].balance,
            timestamp,
        };
        tracing::info!(%sender, %receiver, amount, "transfer recorded");
        Ok(receipt)
    }

    pub fn statement(&self, number: AccountNumber) -> Result<Statement> {
        let account = self
            .account(number)
            .ok_or(LedgerError::AccountNotFound(number))?;
        Ok(Statement {
            account_number: account.account_number,
            name: account.name.clone(),
            balance: account.balance,
            transactions: account.transactions.clone(),
        })
    }

    pub fn list_accounts(&self) -> Vec<AccountSummary> {
        self.accounts.iter().map(Account::summary).collect()
    }

    fn index_of(&self, number: AccountNumber) -> Result<usize> {
        self.accounts
            .iter()
            .position(|account| account.account_number == number)
            .ok_or_else(|| {
                tracing::warn!(account = %number, "account not found");
                LedgerError::AccountNotFound(number)
            })
    }

    /// Appends one transaction per entry under a single timestamp and persists once.
    ///
    /// On a failed write the appended transactions are removed again.
    fn apply(&mut self, entries: &[(usize, TransactionKind)], amount: f64) -> Result<String> {
        let timestamp = self.clock.timestamp();
        for (idx, kind) in entries {
            self.accounts[*idx].record(Transaction::new(timestamp.clone(), *kind, amount));
        }
        if let Err(err) = self.persist() {
            for (idx, _) in entries.iter().rev() {
                let account = &mut self.accounts[*idx];
                account.transactions.pop();
                account.refresh_balance();
            }
            return Err(err);
        }
        Ok(timestamp)
    }

    fn persist(&self) -> Result<()> {
        self.snapshots.save(&self.accounts).inspect_err(|err| {
            tracing::error!(%err, "failed to persist ledger snapshot");
        })
    }
}
