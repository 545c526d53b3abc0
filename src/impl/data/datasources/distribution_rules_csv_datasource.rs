use std::str::FromStr as _;

use async_trait::async_trait;
use fractic_server_error::ServerError;
use ron::from_str;

use crate::{
    data::models::{
        accounting_amount_model::AccountingAmountModel,
        distribution_type_model::DistributionTypeModel,
    },
    entities::{DistributionRule, DistributionType},
    errors::{InvalidCsv, InvalidRon, PercentageOutOfRange},
};

use super::utils::{check_headers, csv_reader, read_file, required_business, required_party};

const FILE: &str = "distribution rules";
const HEADERS: &[&str] = &["business", "recipient", "type", "value"];

#[async_trait]
pub(crate) trait DistributionRulesCsvDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<DistributionRule>, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<Vec<DistributionRule>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.from_string(&read_file(path).await?)
    }
}

pub(crate) struct DistributionRulesCsvDatasourceImpl;

impl DistributionRulesCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl DistributionRulesCsvDatasource for DistributionRulesCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<DistributionRule>, ServerError> {
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
                    let raw_business = r.get(0).unwrap_or("");
                    let raw_recipient = r.get(1).unwrap_or("");
                    let raw_type = r.get(2).unwrap_or("");
                    let raw_value = r.get(3).unwrap_or("");

                    // Parse.
                    let business = required_business(raw_business, FILE, row)?;
                    let recipient = required_party(raw_recipient, "recipient", FILE, row)?;
                    let distribution_type: DistributionType = from_str::<DistributionTypeModel>(
                        raw_type,
                    )
                    .map_err(|e| InvalidRon::with_debug("DistributionType", &e))?
                    .into();
                    let value: f64 = AccountingAmountModel::from_str(raw_value)?
                        .non_negative("value", FILE, row)?
                        .into();
                    if distribution_type == DistributionType::Percentage && value > 100.0 {
                        return Err(PercentageOutOfRange::new(
                            recipient.name(),
                            &business,
                            value,
                        ));
                    }

                    // Build.
                    Ok(DistributionRule {
                        business,
                        recipient,
                        distribution_type,
                        value,
                    })
                })
            })
            .collect()
    }
}
