use super::payable_party::PayableParty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_derive::Serialize)]
pub enum DistributionType {
    /// Value is in percentage points (0-100) of the profit remaining after
    /// fixed amounts.
    Percentage,
    /// Value is a currency amount, paid regardless of available profit.
    FixedAmount,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct DistributionRule {
    pub business: String,
    pub recipient: PayableParty,
    pub distribution_type: DistributionType,
    pub value: f64,
}
