use fractic_server_error::ServerError;
use iso_currency::Currency;

use crate::{
    data::models::year_month_model::YearMonthModel,
    entities::{MonthRange, YearMonth},
    errors::{InvalidIsoCurrencyCode, InvalidMonthRange, InvalidRon, ReadError},
};

/// Settings for computing and rendering distribution reports.
///
/// Written in RON, all fields optional:
///
/// ```ron
/// (
///     currency: Some("KRW"),
///     months: Some(("2025-01", "2025-12")),
///     note_width: Some(74),
/// )
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BookkeepingConfig {
    pub currency: Currency,
    /// Only months in this range are reported. Unrestricted if `None`.
    pub months: Option<MonthRange>,
    /// Wrap width of report notes.
    pub note_width: usize,
}

#[derive(Debug, serde_derive::Deserialize)]
struct BookkeepingConfigModel {
    #[serde(default)]
    currency: Option<String>,
    #[serde(default)]
    months: Option<(YearMonthModel, YearMonthModel)>,
    #[serde(default)]
    note_width: Option<usize>,
}

impl Default for BookkeepingConfig {
    fn default() -> Self {
        Self {
            currency: Currency::KRW,
            months: None,
            note_width: 74,
        }
    }
}

impl BookkeepingConfig {
    pub fn from_ron(s: &str) -> Result<Self, ServerError> {
        let model: BookkeepingConfigModel =
            ron::from_str(s).map_err(|e| InvalidRon::with_debug("BookkeepingConfig", &e))?;
        let defaults = Self::default();
        let currency = match model.currency {
            Some(code) => {
                Currency::from_code(&code).ok_or_else(|| InvalidIsoCurrencyCode::new(&code))?
            }
            None => defaults.currency,
        };
        let months = model
            .months
            .map(|(from, to)| Self::month_range(from.into(), to.into()))
            .transpose()?;
        Ok(Self {
            currency,
            months,
            note_width: model.note_width.unwrap_or(defaults.note_width),
        })
    }

    pub async fn from_file<P>(path: P) -> Result<Self, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let s = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        Self::from_ron(&s)
    }

    pub fn month_range(from: YearMonth, to: YearMonth) -> Result<MonthRange, ServerError> {
        if from > to {
            return Err(InvalidMonthRange::new(&from, &to));
        }
        Ok(MonthRange { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(
            BookkeepingConfig::from_ron("()").unwrap(),
            BookkeepingConfig::default()
        );
    }

    #[test]
    fn test_parses_all_fields() {
        let config = BookkeepingConfig::from_ron(
            r#"(currency: Some("USD"), months: Some(("2025-01", "2025-06")), note_width: Some(60))"#,
        )
        .unwrap();
        assert_eq!(config.currency, Currency::USD);
        let months = config.months.unwrap();
        assert_eq!(months.from().to_string(), "2025-01");
        assert_eq!(months.to().to_string(), "2025-06");
        assert_eq!(config.note_width, 60);
    }

    #[test]
    fn test_rejects_unknown_currency() {
        assert!(BookkeepingConfig::from_ron(r#"(currency: Some("XYZ1"))"#).is_err());
    }

    #[test]
    fn test_rejects_reversed_range() {
        assert!(
            BookkeepingConfig::from_ron(r#"(months: Some(("2025-06", "2025-01")))"#).is_err()
        );
    }
}
