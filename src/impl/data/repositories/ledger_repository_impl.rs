use std::collections::BTreeSet;

use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::debug;

use crate::{
    data::datasources::{
        assets_csv_datasource::{AssetsCsvDatasource, AssetsCsvDatasourceImpl},
        distribution_rules_csv_datasource::{
            DistributionRulesCsvDatasource, DistributionRulesCsvDatasourceImpl,
        },
        expenses_csv_datasource::{ExpensesCsvDatasource, ExpensesCsvDatasourceImpl},
        revenues_csv_datasource::{RevenuesCsvDatasource, RevenuesCsvDatasourceImpl},
    },
    domain::repositories::ledger_repository::LedgerRepository,
    entities::{
        AssetRecord, DistributionRule, ExpenseFilter, ExpenseRecord, LedgerRecords,
        RevenueRecord, YearMonth,
    },
};

/// Serves a snapshot of ledger records held in memory.
pub struct LedgerRepositoryImpl {
    records: LedgerRecords,
}

/// Raw CSV contents of every record kind. Assets are optional.
pub struct LedgerCsv<'a> {
    pub expenses: &'a str,
    pub revenues: &'a str,
    pub distribution_rules: &'a str,
    pub assets: Option<&'a str>,
}

/// Paths of the CSV files of every record kind. Assets are optional.
pub struct LedgerCsvFiles<P> {
    pub expenses: P,
    pub revenues: P,
    pub distribution_rules: P,
    pub assets: Option<P>,
}

impl LedgerRepositoryImpl {
    pub fn new(records: LedgerRecords) -> Self {
        Self { records }
    }

    pub fn from_string(csv: LedgerCsv<'_>) -> Result<Self, ServerError> {
        let records = LedgerRecords {
            expenses: ExpensesCsvDatasourceImpl::new().from_string(csv.expenses)?,
            revenues: RevenuesCsvDatasourceImpl::new().from_string(csv.revenues)?,
            distribution_rules: DistributionRulesCsvDatasourceImpl::new()
                .from_string(csv.distribution_rules)?,
            assets: match csv.assets {
                Some(s) => AssetsCsvDatasourceImpl::new().from_string(s)?,
                None => Vec::new(),
            },
        };
        Ok(Self::loaded(records))
    }

    pub async fn from_file<P>(files: LedgerCsvFiles<P>) -> Result<Self, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let records = LedgerRecords {
            expenses: ExpensesCsvDatasourceImpl::new()
                .from_file(files.expenses)
                .await?,
            revenues: RevenuesCsvDatasourceImpl::new()
                .from_file(files.revenues)
                .await?,
            distribution_rules: DistributionRulesCsvDatasourceImpl::new()
                .from_file(files.distribution_rules)
                .await?,
            assets: match files.assets {
                Some(p) => AssetsCsvDatasourceImpl::new().from_file(p).await?,
                None => Vec::new(),
            },
        };
        Ok(Self::loaded(records))
    }

    fn loaded(records: LedgerRecords) -> Self {
        debug!(
            expenses = records.expenses.len(),
            revenues = records.revenues.len(),
            distribution_rules = records.distribution_rules.len(),
            assets = records.assets.len(),
            "loaded ledger records"
        );
        Self::new(records)
    }
}

#[async_trait]
impl LedgerRepository for LedgerRepositoryImpl {
    async fn revenue(&self, business: &str, month: YearMonth) -> Result<f64, ServerError> {
        Ok(self
            .records
            .revenues
            .iter()
            .filter(|r| r.business == business && r.month == month)
            .map(|r| r.amount)
            .sum())
    }

    async fn list_revenues(&self) -> Result<Vec<RevenueRecord>, ServerError> {
        Ok(self.records.revenues.clone())
    }

    async fn list_expenses(
        &self,
        filter: &ExpenseFilter,
    ) -> Result<Vec<ExpenseRecord>, ServerError> {
        Ok(self
            .records
            .expenses
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect())
    }

    async fn list_distribution_rules(
        &self,
        business: &str,
    ) -> Result<Vec<DistributionRule>, ServerError> {
        Ok(self
            .records
            .distribution_rules
            .iter()
            .filter(|r| r.business == business)
            .cloned()
            .collect())
    }

    async fn list_businesses(&self) -> Result<Vec<String>, ServerError> {
        let businesses: BTreeSet<&str> = self
            .records
            .revenues
            .iter()
            .map(|r| r.business.as_str())
            .chain(self.records.expenses.iter().map(|e| e.business.as_str()))
            .chain(
                self.records
                    .distribution_rules
                    .iter()
                    .map(|r| r.business.as_str()),
            )
            .chain(self.records.assets.iter().map(|a| a.business.as_str()))
            .collect();
        Ok(businesses.into_iter().map(String::from).collect())
    }

    async fn list_assets(&self, business: Option<&str>) -> Result<Vec<AssetRecord>, ServerError> {
        Ok(self
            .records
            .assets
            .iter()
            .filter(|a| business.map_or(true, |b| b == a.business))
            .cloned()
            .collect())
    }
}
