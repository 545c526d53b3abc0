use super::{
    distribution_rule::DistributionRule,
    records::{AssetRecord, ExpenseRecord, RevenueRecord},
};

/// Everything the bookkeeping store holds, as loaded in one pass.
#[derive(Debug, Clone, Default)]
pub struct LedgerRecords {
    pub expenses: Vec<ExpenseRecord>,
    pub revenues: Vec<RevenueRecord>,
    pub distribution_rules: Vec<DistributionRule>,
    pub assets: Vec<AssetRecord>,
}
