use super::{payable_party::PayableParty, year_month::YearMonth};

#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRecord {
    pub month: YearMonth,
    pub business: String,
    pub payment_source: PayableParty,
    pub amount: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevenueRecord {
    pub month: YearMonth,
    pub business: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssetRecord {
    pub business: String,
    pub name: String,
    pub acquired: YearMonth,
    pub value: f64,
}

/// Restricts which expenses are listed. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseFilter {
    pub month: Option<YearMonth>,
    pub business: Option<String>,
}

// --

impl ExpenseFilter {
    pub fn for_business(business: impl Into<String>) -> Self {
        Self {
            month: None,
            business: Some(business.into()),
        }
    }

    pub fn matches(&self, expense: &ExpenseRecord) -> bool {
        self.month.map_or(true, |m| m == expense.month)
            && self
                .business
                .as_deref()
                .map_or(true, |b| b == expense.business)
    }
}
