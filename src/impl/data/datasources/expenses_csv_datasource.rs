use std::str::FromStr as _;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::models::{accounting_amount_model::AccountingAmountModel, year_month_model::YearMonthModel},
    entities::ExpenseRecord,
    errors::InvalidCsv,
};

use super::utils::{check_headers, csv_reader, read_file, required_business, required_party};

const FILE: &str = "expenses";
const HEADERS: &[&str] = &["month", "business", "payment_source", "amount"];

#[async_trait]
pub(crate) trait ExpensesCsvDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<ExpenseRecord>, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<Vec<ExpenseRecord>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.from_string(&read_file(path).await?)
    }
}

pub(crate) struct ExpensesCsvDatasourceImpl;

impl ExpensesCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl ExpensesCsvDatasource for ExpensesCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<ExpenseRecord>, ServerError> {
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
                    // Extract from CSV record.
                    let raw_month = r.get(0).unwrap_or("");
                    let raw_business = r.get(1).unwrap_or("");
                    let raw_payment_source = r.get(2).unwrap_or("");
                    let raw_amount = r.get(3).unwrap_or("");
                    let raw_description = r.get(4).unwrap_or("");

                    // Parse.
                    let month = YearMonthModel::from_str(raw_month)?;
                    let business = required_business(raw_business, FILE, row)?;
                    let payment_source =
                        required_party(raw_payment_source, "payment source", FILE, row)?;
                    let amount = AccountingAmountModel::from_str(raw_amount)?
                        .non_negative("amount", FILE, row)?;

                    // Build.
                    Ok(ExpenseRecord {
                        month: month.into(),
                        business,
                        payment_source,
                        amount: amount.into(),
                        description: raw_description.into(),
                    })
                })
            })
            .collect()
    }
}
