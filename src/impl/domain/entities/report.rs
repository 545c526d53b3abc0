use super::distribution::{
    AggregateDistribution, BusinessDistribution, MonthlyBusinessFinancials, RecipientMonthlyAmount,
};

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct BusinessAssetTotal {
    pub business: String,
    pub count: usize,
    pub total_value: f64,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct DistributionReport {
    /// Sorted by business, then month.
    pub per_business: Vec<BusinessDistribution>,
    pub aggregate: AggregateDistribution,
    pub assets: Vec<BusinessAssetTotal>,
    pub notes: Vec<String>,
}

// --

impl DistributionReport {
    pub fn financials(&self) -> impl Iterator<Item = &MonthlyBusinessFinancials> {
        self.per_business.iter().map(|d| &d.financials)
    }

    /// Flattened aggregate, sorted by month, then recipient.
    pub fn transfers(&self) -> Vec<RecipientMonthlyAmount> {
        let mut rows: Vec<RecipientMonthlyAmount> = self
            .aggregate
            .iter()
            .flat_map(|(recipient, months)| {
                months.iter().map(move |(month, amount)| RecipientMonthlyAmount {
                    recipient: recipient.clone(),
                    month: *month,
                    distribution_amount: amount.distribution_amount,
                    expense_reimbursement: amount.expense_reimbursement,
                })
            })
            .collect();
        rows.sort_by(|a, b| (a.month, &a.recipient).cmp(&(b.month, &b.recipient)));
        rows
    }
}
