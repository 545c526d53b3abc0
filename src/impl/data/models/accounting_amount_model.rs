use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::errors::{InvalidAccountingAmount, NegativeAmount};

/// Amount in accounting notation: thousands separators are ignored, and a
/// value wrapped in parentheses is negative.
#[derive(Debug)]
pub(crate) struct AccountingAmountModel(pub f64);
impl FromStr for AccountingAmountModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.replace(",", "");
        let raw = raw.trim();
        let (is_negative, numeric_part) = match (raw.strip_prefix('('), raw.strip_suffix(')')) {
            (Some(_), Some(_)) => (true, &raw[1..raw.len() - 1]),
            (None, None) => (false, raw),
            // Unbalanced parenthesis.
            _ => return Err(InvalidAccountingAmount::new(s)),
        };
        let amount = numeric_part
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite())
            .ok_or_else(|| InvalidAccountingAmount::new(s))?;
        Ok(AccountingAmountModel(if is_negative {
            -amount
        } else {
            amount
        }))
    }
}

impl AccountingAmountModel {
    pub(crate) fn non_negative(
        self,
        field: &str,
        file: &str,
        row: usize,
    ) -> Result<Self, ServerError> {
        if self.0 < 0.0 {
            return Err(NegativeAmount::new(field, self.0, file, row));
        }
        Ok(self)
    }
}

impl Into<f64> for AccountingAmountModel {
    fn into(self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_thousands_separators() {
        let amount: f64 = AccountingAmountModel::from_str("1,234,567").unwrap().into();
        assert_eq!(amount, 1_234_567.0);
    }

    #[test]
    fn test_parentheses_mean_negative() {
        let amount: f64 = AccountingAmountModel::from_str("(2,500.50)").unwrap().into();
        assert_eq!(amount, -2_500.5);
    }

    #[test]
    fn test_rejects_unbalanced_parentheses() {
        assert!(AccountingAmountModel::from_str("(500").is_err());
        assert!(AccountingAmountModel::from_str("500)").is_err());
        assert!(AccountingAmountModel::from_str("(").is_err());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(AccountingAmountModel::from_str("12abc").is_err());
        assert!(AccountingAmountModel::from_str("").is_err());
        assert!(AccountingAmountModel::from_str("NaN").is_err());
    }

    #[test]
    fn test_non_negative_check() {
        assert!(AccountingAmountModel(0.0).non_negative("amount", "x", 1).is_ok());
        assert!(AccountingAmountModel(-1.0).non_negative("amount", "x", 1).is_err());
    }
}
