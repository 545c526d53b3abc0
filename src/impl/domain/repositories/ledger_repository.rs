use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{
    AssetRecord, DistributionRule, ExpenseFilter, ExpenseRecord, RevenueRecord, YearMonth,
};

/// Read access to the bookkeeping store. Implementations own the data; the
/// distribution logic only consumes what is returned here.
#[async_trait]
pub trait LedgerRepository: Send + Sync {
    /// Total revenue recorded for the business in the given month, or 0 if
    /// there is none.
    async fn revenue(&self, business: &str, month: YearMonth) -> Result<f64, ServerError>;

    async fn list_revenues(&self) -> Result<Vec<RevenueRecord>, ServerError>;

    async fn list_expenses(&self, filter: &ExpenseFilter)
        -> Result<Vec<ExpenseRecord>, ServerError>;

    async fn list_distribution_rules(
        &self,
        business: &str,
    ) -> Result<Vec<DistributionRule>, ServerError>;

    /// Every business referenced by any record, sorted and deduplicated.
    async fn list_businesses(&self) -> Result<Vec<String>, ServerError>;

    async fn list_assets(&self, business: Option<&str>) -> Result<Vec<AssetRecord>, ServerError>;
}
