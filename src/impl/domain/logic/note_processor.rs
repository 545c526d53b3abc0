use std::collections::{BTreeSet, HashMap};

use crate::entities::{BusinessDistribution, DistributionType, PayableParty};

use super::{distribution_engine::profit_after_fixed, distribution_processor::BusinessLedger};

/// Produces human-readable remarks about results that are easy to misread.
pub(crate) struct NoteProcessor<'a> {
    ledgers: &'a [BusinessLedger],
    per_business: &'a [BusinessDistribution],
}

impl<'a> NoteProcessor<'a> {
    pub(crate) fn new(
        ledgers: &'a [BusinessLedger],
        per_business: &'a [BusinessDistribution],
    ) -> Self {
        Self {
            ledgers,
            per_business,
        }
    }

    pub(crate) fn process(&self) -> Vec<String> {
        let mut notes = self.shared_party_notes();
        notes.extend(self.negative_base_notes());
        notes
    }

    /// Recipients that also paid expenses receive one combined amount.
    fn shared_party_notes(&self) -> Vec<String> {
        self.ledgers
            .iter()
            .flat_map(|ledger| {
                let months: BTreeSet<_> = ledger.monthly_revenue.iter().map(|(m, _)| m).collect();
                let recipients: BTreeSet<&PayableParty> =
                    ledger.rules.iter().map(|r| &r.recipient).collect();
                let payers: BTreeSet<&PayableParty> = ledger
                    .expenses
                    .iter()
                    .filter(|e| months.contains(&e.month))
                    .map(|e| &e.payment_source)
                    .collect();
                recipients
                    .intersection(&payers)
                    .map(|p| {
                        format!(
                            "Business '{}': '{}' is both a distribution recipient and a payment \
                             source, so its profit share and expense reimbursement are combined.",
                            ledger.business, p
                        )
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// Months where fixed amounts and expenses exceed revenue, turning
    /// percentage shares negative.
    fn negative_base_notes(&self) -> Vec<String> {
        let ledgers: HashMap<&str, &BusinessLedger> = self
            .ledgers
            .iter()
            .map(|l| (l.business.as_str(), l))
            .collect();
        self.per_business
            .iter()
            .filter_map(|d| {
                let ledger = ledgers.get(d.financials.business.as_str())?;
                let has_percentage = ledger
                    .rules
                    .iter()
                    .any(|r| r.distribution_type == DistributionType::Percentage);
                let base = profit_after_fixed(&d.financials, &ledger.rules);
                (has_percentage && base < 0.0).then(|| {
                    format!(
                        "Business '{}', {}: profit after fixed amounts is negative ({}), so \
                         percentage shares for this month are negative.",
                        d.financials.business, d.financials.month, base
                    )
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        entities::{party, DistributionRule, ExpenseRecord, YearMonth},
        domain::logic::distribution_engine::{compute_monthly_distribution, monthly_financials},
    };

    fn ledger() -> BusinessLedger {
        let month = YearMonth::new(2025, 10).unwrap();
        BusinessLedger {
            business: "A".to_string(),
            monthly_revenue: vec![(month, 500.0)],
            expenses: vec![ExpenseRecord {
                month,
                business: "A".to_string(),
                payment_source: party("Founder"),
                amount: 1200.0,
                description: "Rent".to_string(),
            }],
            rules: vec![DistributionRule {
                business: "A".to_string(),
                recipient: party("Founder"),
                distribution_type: DistributionType::Percentage,
                value: 10.0,
            }],
        }
    }

    fn distributions(ledger: &BusinessLedger) -> Vec<BusinessDistribution> {
        ledger
            .monthly_revenue
            .iter()
            .map(|(month, revenue)| BusinessDistribution {
                financials: monthly_financials(&ledger.business, *month, *revenue, &ledger.expenses),
                amounts: compute_monthly_distribution(
                    &ledger.business,
                    *month,
                    *revenue,
                    &ledger.expenses,
                    &ledger.rules,
                ),
            })
            .collect()
    }

    #[test]
    fn test_notes_shared_party_and_negative_base() {
        let ledgers = vec![ledger()];
        let per_business = distributions(&ledgers[0]);
        let notes = NoteProcessor::new(&ledgers, &per_business).process();
        assert_eq!(notes.len(), 2);
        assert!(notes[0].contains("'Founder' is both a distribution recipient"));
        assert!(notes[1].contains("2025-10"));
        assert!(notes[1].contains("(-700)"));
    }

    #[test]
    fn test_no_notes_for_plain_month() {
        let mut l = ledger();
        l.monthly_revenue = vec![(YearMonth::new(2025, 10).unwrap(), 5000.0)];
        l.expenses[0].payment_source = party("Card");
        let ledgers = vec![l];
        let per_business = distributions(&ledgers[0]);
        assert!(NoteProcessor::new(&ledgers, &per_business)
            .process()
            .is_empty());
    }
}
