use std::collections::HashSet;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::errors::{LedgerError, Result};
use crate::ledger::{Account, AccountNumber};

const CAPACITY: usize = (AccountNumber::MAX - AccountNumber::MIN + 1) as usize;

/// Draws uniformly random six-digit account numbers, retrying on collision.
pub struct AccountNumberGenerator {
    rng: StdRng,
}

impl AccountNumberGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns a number not used by any of `existing`.
    ///
    /// `existing` must be the live account set at call time.
    pub fn next_unused(&mut self, existing: &[Account]) -> Result<AccountNumber> {
        let taken: HashSet<AccountNumber> = existing
            .iter()
            .map(|account| account.account_number)
            .filter(AccountNumber::is_six_digit)
            .collect();
        if taken.len() >= CAPACITY {
            return Err(LedgerError::AccountNumbersExhausted);
        }
        loop {
            let candidate =
                AccountNumber(self.rng.gen_range(AccountNumber::MIN..=AccountNumber::MAX));
            if !taken.contains(&candidate) {
                return Ok(candidate);
            }
            tracing::debug!(%candidate, "account number collision, drawing again");
        }
    }
}

impl Default for AccountNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn numbers_are_unique_and_six_digit() {
        let mut generator = AccountNumberGenerator::seeded(7);
        let mut accounts = Vec::new();
        for idx in 0..500 {
            let number = generator.next_unused(&accounts).unwrap();
            assert!(number.is_six_digit(), "{number} out of range");
            accounts.push(Account::open(number, format!("user-{idx}"), 0.0, "t"));
        }
        let distinct: HashSet<_> = accounts.iter().map(|a| a.account_number).collect();
        assert_eq!(distinct.len(), accounts.len());
    }

    #[test]
    fn same_seed_draws_same_sequence() {
        let mut first = AccountNumberGenerator::seeded(42);
        let mut second = AccountNumberGenerator::seeded(42);
        assert_eq!(
            first.next_unused(&[]).unwrap(),
            second.next_unused(&[]).unwrap()
        );
    }

    #[test]
    fn redraws_when_number_is_taken() {
        let taken = AccountNumberGenerator::seeded(3).next_unused(&[]).unwrap();
        let existing = vec![Account::open(taken, "Taken", 0.0, "t")];
        let fresh = AccountNumberGenerator::seeded(3)
            .next_unused(&existing)
            .unwrap();
        assert_ne!(fresh, taken);
    }

    #[test]
    fn full_range_reports_exhaustion() {
        let existing: Vec<Account> = (AccountNumber::MIN..=AccountNumber::MAX)
            .map(|number| Account::open(AccountNumber(number), "", 0.0, "t"))
            .collect();
        assert!(matches!(
            AccountNumberGenerator::seeded(1).next_unused(&existing),
            Err(LedgerError::AccountNumbersExhausted)
        ));
    }

    #[test]
    fn duplicates_and_out_of_range_numbers_do_not_count_as_capacity() {
        let mut existing: Vec<Account> = (AccountNumber::MIN..AccountNumber::MAX)
            .map(|number| Account::open(AccountNumber(number), "", 0.0, "t"))
            .collect();
        existing.push(Account::open(AccountNumber(AccountNumber::MIN), "dup", 0.0, "t"));
        existing.push(Account::open(AccountNumber(42), "legacy", 0.0, "t"));
        assert_eq!(
            AccountNumberGenerator::seeded(9)
                .next_unused(&existing)
                .unwrap(),
            AccountNumber(AccountNumber::MAX)
        );

        existing.push(Account::open(AccountNumber(AccountNumber::MAX), "last", 0.0, "t"));
        assert!(matches!(
            AccountNumberGenerator::seeded(9).next_unused(&existing),
            Err(LedgerError::AccountNumbersExhausted)
        ));
    }
}
