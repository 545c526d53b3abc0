use std::collections::BTreeMap;

use super::{payable_party::PayableParty, year_month::YearMonth};

/// Amount owed to one party, split by origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde_derive::Serialize)]
pub struct RecipientAmount {
    /// Share of the business's profit, from distribution rules.
    pub distribution_amount: f64,
    /// Expenses this party paid on behalf of the business.
    pub expense_reimbursement: f64,
}

/// Amounts owed for one business in one month, keyed by party.
pub type MonthlyDistribution = BTreeMap<PayableParty, RecipientAmount>;

/// Amounts owed across all businesses, keyed by party, then month.
pub type AggregateDistribution = BTreeMap<PayableParty, BTreeMap<YearMonth, RecipientAmount>>;

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct MonthlyBusinessFinancials {
    pub business: String,
    pub month: YearMonth,
    pub revenue: f64,
    pub expense: f64,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct BusinessDistribution {
    pub financials: MonthlyBusinessFinancials,
    pub amounts: MonthlyDistribution,
}

/// One row of the transfer schedule: what a party should receive in a month.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct RecipientMonthlyAmount {
    pub recipient: PayableParty,
    pub month: YearMonth,
    pub distribution_amount: f64,
    pub expense_reimbursement: f64,
}

// --

impl RecipientAmount {
    pub fn total(&self) -> f64 {
        self.distribution_amount + self.expense_reimbursement
    }

    pub(crate) fn accumulate(&mut self, other: &RecipientAmount) {
        self.distribution_amount += other.distribution_amount;
        self.expense_reimbursement += other.expense_reimbursement;
    }
}

impl MonthlyBusinessFinancials {
    /// May be negative.
    pub fn profit(&self) -> f64 {
        self.revenue - self.expense
    }
}

impl RecipientMonthlyAmount {
    pub fn total(&self) -> f64 {
        self.distribution_amount + self.expense_reimbursement
    }
}
