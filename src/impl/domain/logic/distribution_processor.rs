use std::collections::BTreeMap;

use tracing::debug;

use crate::entities::{
    AssetRecord, BusinessAssetTotal, BusinessDistribution, DistributionReport, DistributionRule,
    ExpenseRecord, YearMonth,
};

use super::{
    distribution_engine::{
        aggregate_across_businesses, compute_monthly_distribution, monthly_financials,
    },
    note_processor::NoteProcessor,
};

/// Everything needed to compute one business's distributions.
#[derive(Debug)]
pub(crate) struct BusinessLedger {
    pub(crate) business: String,
    /// Revenue per month to compute, in month order.
    pub(crate) monthly_revenue: Vec<(YearMonth, f64)>,
    pub(crate) expenses: Vec<ExpenseRecord>,
    pub(crate) rules: Vec<DistributionRule>,
}

pub(crate) struct DistributionProcessor {
    ledgers: Vec<BusinessLedger>,
    assets: Vec<AssetRecord>,
}

impl DistributionProcessor {
    pub(crate) fn new(ledgers: Vec<BusinessLedger>, assets: Vec<AssetRecord>) -> Self {
        Self { ledgers, assets }
    }

    pub(crate) fn process(self) -> DistributionReport {
        let per_business: Vec<BusinessDistribution> = self
            .ledgers
            .iter()
            .flat_map(|ledger| {
                ledger.monthly_revenue.iter().map(move |(month, revenue)| {
                    BusinessDistribution {
                        financials: monthly_financials(
                            &ledger.business,
                            *month,
                            *revenue,
                            &ledger.expenses,
                        ),
                        amounts: compute_monthly_distribution(
                            &ledger.business,
                            *month,
                            *revenue,
                            &ledger.expenses,
                            &ledger.rules,
                        ),
                    }
                })
            })
            .collect();
        let aggregate = aggregate_across_businesses(&per_business);
        let notes = NoteProcessor::new(&self.ledgers, &per_business).process();
        let assets = asset_totals(&self.assets);

        debug!(
            businesses = self.ledgers.len(),
            business_months = per_business.len(),
            recipients = aggregate.len(),
            notes = notes.len(),
            "computed distributions"
        );

        DistributionReport {
            per_business,
            aggregate,
            assets,
            notes,
        }
    }
}

fn asset_totals(assets: &[AssetRecord]) -> Vec<BusinessAssetTotal> {
    let mut totals: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
    for asset in assets {
        let entry = totals.entry(&asset.business).or_default();
        entry.0 += 1;
        entry.1 += asset.value;
    }
    totals
        .into_iter()
        .map(|(business, (count, total_value))| BusinessAssetTotal {
            business: business.to_string(),
            count,
            total_value,
        })
        .collect()
}
