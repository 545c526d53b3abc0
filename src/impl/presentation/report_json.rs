use fractic_server_error::{CriticalError, ServerError};

use crate::entities::{
    AggregateDistribution, BusinessAssetTotal, BusinessDistribution, DistributionReport,
    MonthlyBusinessFinancials,
};

#[derive(serde_derive::Serialize)]
struct DistributionReportJson<'a> {
    financials: Vec<&'a MonthlyBusinessFinancials>,
    per_business: &'a [BusinessDistribution],
    aggregate: &'a AggregateDistribution,
    assets: &'a [BusinessAssetTotal],
    notes: &'a [String],
}

impl DistributionReport {
    /// Pretty-printed JSON, for dashboards and other consumers. The
    /// per-business profit rows are also listed under a top-level
    /// `financials` key.
    pub fn to_json(&self) -> Result<String, ServerError> {
        let json = DistributionReportJson {
            financials: self.financials().collect(),
            per_business: &self.per_business,
            aggregate: &self.aggregate,
            assets: &self.assets,
            notes: &self.notes,
        };
        serde_json::to_string_pretty(&json)
            .map_err(|e| CriticalError::with_debug("failed to serialize distribution report", &e))
    }
}

#[cfg(test)]
mod tests {
    use crate::entities::{
        party, BusinessDistribution, DistributionReport, MonthlyBusinessFinancials,
        RecipientAmount, YearMonth,
    };

    #[test]
    fn test_financials_are_exported_at_top_level() {
        let month = YearMonth::new(2025, 11).unwrap();
        let mut amounts = std::collections::BTreeMap::new();
        amounts.insert(
            party("Founder"),
            RecipientAmount {
                distribution_amount: 600.0,
                expense_reimbursement: 0.0,
            },
        );
        let report = DistributionReport {
            per_business: vec![BusinessDistribution {
                financials: MonthlyBusinessFinancials {
                    business: "Shop".to_string(),
                    month,
                    revenue: 1500.0,
                    expense: 500.0,
                },
                amounts,
            }],
            aggregate: Default::default(),
            assets: vec![],
            notes: vec![],
        };

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["financials"][0]["business"], serde_json::json!("Shop"));
        assert_eq!(json["financials"][0]["month"], serde_json::json!("2025-11"));
        assert_eq!(json["financials"][0]["revenue"], serde_json::json!(1500.0));
        assert_eq!(json["financials"][0]["expense"], serde_json::json!(500.0));
        assert_eq!(
            json["per_business"][0]["amounts"]["Founder"]["distribution_amount"],
            serde_json::json!(600.0)
        );
    }
}
