//! Parsing and validation of monetary input.

use crate::errors::{AmountIssue, LedgerError, Result};

/// Parses user input into an amount. Does not check the sign.
pub fn parse_amount(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(LedgerError::InvalidAmount(AmountIssue::NotANumber(
            trimmed.to_string(),
        ))),
    }
}

/// Accepts finite amounts strictly greater than zero.
pub fn ensure_positive(amount: f64) -> Result<f64> {
    if amount.is_nan() || amount.is_infinite() {
        return Err(LedgerError::InvalidAmount(AmountIssue::NotANumber(
            amount.to_string(),
        )));
    }
    if amount <= 0.0 {
        return Err(LedgerError::InvalidAmount(AmountIssue::NotPositive(amount)));
    }
    Ok(amount)
}

/// Accepts any finite amount, sign included; used for opening balances.
pub fn ensure_finite(amount: f64) -> Result<f64> {
    if !amount.is_finite() {
        return Err(LedgerError::InvalidAmount(AmountIssue::NotANumber(
            amount.to_string(),
        )));
    }
    Ok(amount)
}

/// Rejects debits larger than the available balance.
pub fn ensure_covered(amount: f64, available: f64) -> Result<()> {
    if amount > available {
        Err(LedgerError::InvalidAmount(AmountIssue::InsufficientFunds {
            requested: amount,
            available,
        }))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_input() {
        assert_eq!(parse_amount(" 12.50 ").unwrap(), 12.5);
        assert!(matches!(
            parse_amount("twelve"),
            Err(LedgerError::InvalidAmount(AmountIssue::NotANumber(ref raw))) if raw == "twelve"
        ));
        assert!(parse_amount("NaN").is_err());
        assert!(parse_amount("inf").is_err());
    }

    #[test]
    fn zero_and_negative_are_not_positive() {
        assert!(ensure_positive(0.0).is_err());
        assert!(ensure_positive(-5.0).is_err());
        assert!(ensure_positive(f64::NAN).is_err());
        assert_eq!(ensure_positive(0.01).unwrap(), 0.01);
    }

    #[test]
    fn opening_balance_only_needs_to_be_finite() {
        assert_eq!(ensure_finite(0.0).unwrap(), 0.0);
        assert_eq!(ensure_finite(-50.0).unwrap(), -50.0);
        assert!(ensure_finite(f64::INFINITY).is_err());
        assert!(ensure_finite(f64::NAN).is_err());
    }

    #[test]
    fn covered_allows_exact_balance() {
        assert!(ensure_covered(100.0, 100.0).is_ok());
        assert!(ensure_covered(100.01, 100.0).is_err());
    }
}
