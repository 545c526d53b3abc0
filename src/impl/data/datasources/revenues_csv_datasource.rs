use std::str::FromStr as _;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::models::{accounting_amount_model::AccountingAmountModel, year_month_model::YearMonthModel},
    entities::RevenueRecord,
    errors::InvalidCsv,
};

use super::utils::{check_headers, csv_reader, read_file, required_business};

const FILE: &str = "revenues";
const HEADERS: &[&str] = &["month", "business", "amount"];

#[async_trait]
pub(crate) trait RevenuesCsvDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<RevenueRecord>, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<Vec<RevenueRecord>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.from_string(&read_file(path).await?)
    }
}

pub(crate) struct RevenuesCsvDatasourceImpl;

impl RevenuesCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl RevenuesCsvDatasource for RevenuesCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<RevenueRecord>, ServerError> {
        if s.trim().is_empty() {
            return Ok(Vec::new());
        }
        let mut reader = csv_reader(s);
        check_headers(&mut reader, HEADERS, FILE)?;
        reader
            .records()
            .enumerate()
            .map(|(i, r)| {
                let row = i + 1;
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    let month = YearMonthModel::from_str(r.get(0).unwrap_or(""))?;
                    let business = required_business(r.get(1).unwrap_or(""), FILE, row)?;
                    let amount = AccountingAmountModel::from_str(r.get(2).unwrap_or(""))?
                        .non_negative("amount", FILE, row)?;
                    Ok(RevenueRecord {
                        month: month.into(),
                        business,
                        amount: amount.into(),
                    })
                })
            })
            .collect()
    }
}
