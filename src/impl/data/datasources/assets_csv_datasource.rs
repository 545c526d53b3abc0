use std::str::FromStr as _;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::models::{accounting_amount_model::AccountingAmountModel, year_month_model::YearMonthModel},
    entities::AssetRecord,
    errors::InvalidCsv,
};

use super::utils::{check_headers, csv_reader, read_file, required_business};

const FILE: &str = "assets";
const HEADERS: &[&str] = &["business", "name", "acquired", "value"];

#[async_trait]
pub(crate) trait AssetsCsvDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<AssetRecord>, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<Vec<AssetRecord>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.from_string(&read_file(path).await?)
    }
}

pub(crate) struct AssetsCsvDatasourceImpl;

impl AssetsCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl AssetsCsvDatasource for AssetsCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<AssetRecord>, ServerError> {
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
                    let business = required_business(r.get(0).unwrap_or(""), FILE, row)?;
                    let name = r.get(1).unwrap_or("").to_string();
                    let acquired = YearMonthModel::from_str(r.get(2).unwrap_or(""))?;
                    let value = AccountingAmountModel::from_str(r.get(3).unwrap_or(""))?
                        .non_negative("value", FILE, row)?;
                    Ok(AssetRecord {
                        business,
                        name,
                        acquired: acquired.into(),
                        value: value.into(),
                    })
                })
            })
            .collect()
    }
}
