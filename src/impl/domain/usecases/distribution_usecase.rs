use async_trait::async_trait;
use fractic_server_error::ServerError;
use futures::future;
use tracing::{debug, info};

use crate::{
    domain::{
        logic::{
            distribution_engine::months_considered,
            distribution_processor::{BusinessLedger, DistributionProcessor},
        },
        repositories::ledger_repository::LedgerRepository,
    },
    entities::{DistributionReport, ExpenseFilter, MonthRange, RevenueRecord},
};

#[async_trait]
pub trait DistributionUsecase: Send + Sync {
    /// Computes distributions for every business and every month with
    /// activity, optionally restricted to a range of months.
    async fn compute(&self, months: Option<MonthRange>) -> Result<DistributionReport, ServerError>;
}

pub(crate) struct DistributionUsecaseImpl<R: LedgerRepository> {
    ledger_repository: R,
}

#[async_trait]
impl<R: LedgerRepository> DistributionUsecase for DistributionUsecaseImpl<R> {
    async fn compute(&self, months: Option<MonthRange>) -> Result<DistributionReport, ServerError> {
        let (businesses, revenues) = futures::try_join!(
            self.ledger_repository.list_businesses(),
            self.ledger_repository.list_revenues(),
        )?;
        debug!(businesses = businesses.len(), "loading business ledgers");

        let mut ledgers = Vec::with_capacity(businesses.len());
        for business in businesses {
            ledgers.push(self.load_ledger(business, &revenues, months.as_ref()).await?);
        }
        let assets = self.ledger_repository.list_assets(None).await?;

        let report = DistributionProcessor::new(ledgers, assets).process();
        info!(
            business_months = report.per_business.len(),
            recipients = report.aggregate.len(),
            "distribution report ready"
        );
        Ok(report)
    }
}

impl<R: LedgerRepository> DistributionUsecaseImpl<R> {
    pub(crate) fn new(ledger_repository: R) -> Self {
        Self { ledger_repository }
    }

    async fn load_ledger(
        &self,
        business: String,
        revenues: &[RevenueRecord],
        range: Option<&MonthRange>,
    ) -> Result<BusinessLedger, ServerError> {
        let filter = ExpenseFilter::for_business(business.clone());
        let (expenses, rules) = futures::try_join!(
            self.ledger_repository.list_expenses(&filter),
            self.ledger_repository.list_distribution_rules(&business),
        )?;

        let name = business.as_str();
        let monthly_revenue = future::try_join_all(
            months_considered(name, revenues, &expenses, range)
                .into_iter()
                .map(|month| async move {
                    let revenue = self.ledger_repository.revenue(name, month).await?;
                    Ok::<_, ServerError>((month, revenue))
                }),
        )
        .await?;
        debug!(
            business = %business,
            months = monthly_revenue.len(),
            expenses = expenses.len(),
            rules = rules.len(),
            "loaded business ledger"
        );

        Ok(BusinessLedger {
            business,
            monthly_revenue,
            expenses,
            rules,
        })
    }
}
