use std::str::FromStr;

use chrono::NaiveDate;
use fractic_server_error::ServerError;
use regex::Regex;
use serde::Deserialize;

use crate::{entities::YearMonth, errors::InvalidMonth};

/// Parses "YYYY-MM", or a full ISO date "YYYY-MM-DD" reduced to its month.
#[derive(Debug)]
pub(crate) struct YearMonthModel(YearMonth);
impl FromStr for YearMonthModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pattern =
            Regex::new(r"^(\d{4})-(\d{2})(-\d{2})?$").expect("hardcoded regex should be valid");
        let caps = pattern
            .captures(s.trim())
            .ok_or_else(|| InvalidMonth::new(s))?;
        if caps.get(3).is_some() {
            let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
                .map_err(|e| InvalidMonth::with_debug(s, &e))?;
            return Ok(YearMonthModel(YearMonth::from_date(date)));
        }
        let year: i32 = caps[1]
            .parse()
            .map_err(|e| InvalidMonth::with_debug(s, &e))?;
        let month: u32 = caps[2]
            .parse()
            .map_err(|e| InvalidMonth::with_debug(s, &e))?;
        YearMonth::new(year, month)
            .map(YearMonthModel)
            .ok_or_else(|| InvalidMonth::new(s))
    }
}
impl<'de> Deserialize<'de> for YearMonthModel {
    fn deserialize<D>(deserializer: D) -> Result<YearMonthModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        YearMonthModel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl Into<YearMonth> for YearMonthModel {
    fn into(self) -> YearMonth {
        self.0
    }
}

impl FromStr for YearMonth {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        YearMonthModel::from_str(s).map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_month() {
        let m: YearMonth = "2025-11".parse().unwrap();
        assert_eq!((m.year(), m.month()), (2025, 11));
    }

    #[test]
    fn test_date_is_reduced_to_month() {
        let m: YearMonth = "2024-02-29".parse().unwrap();
        assert_eq!(m, YearMonth::new(2024, 2).unwrap());
    }

    #[test]
    fn test_rejects_malformed_months() {
        for raw in ["2025-1", "2025-13", "2025/11", "25-11", "2023-02-29", "", "2025-11-"] {
            assert!(raw.parse::<YearMonth>().is_err(), "accepted {raw:?}");
        }
    }
}
