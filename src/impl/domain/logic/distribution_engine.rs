use std::collections::BTreeSet;

use crate::entities::{
    AggregateDistribution, BusinessDistribution, DistributionRule, DistributionType,
    ExpenseRecord, MonthRange, MonthlyBusinessFinancials, MonthlyDistribution, RevenueRecord,
    YearMonth,
};

/// Revenue, expense and profit of a business for one month. Expenses are
/// summed over every payer.
pub fn monthly_financials(
    business: &str,
    month: YearMonth,
    revenue: f64,
    expenses: &[ExpenseRecord],
) -> MonthlyBusinessFinancials {
    let expense: f64 = matching_expenses(business, month, expenses)
        .map(|e| e.amount)
        .sum();
    MonthlyBusinessFinancials {
        business: business.to_string(),
        month,
        revenue,
        expense,
    }
}

/// Computes what each party is owed by the business for the month.
///
/// Fixed amounts are paid in full and deducted from profit first. Every
/// percentage rule is then applied to that same remainder (rules do not
/// reduce each other's base), with fractional currency units floored away.
/// Nothing is clamped: a loss produces negative percentage shares.
///
/// Each payment source additionally receives the sum of the expenses it paid
/// for this business and month. A payer whose name matches a recipient is
/// the same party, so both amounts land in one entry.
///
/// Rules and expenses belonging to other businesses or months are ignored.
pub fn compute_monthly_distribution(
    business: &str,
    month: YearMonth,
    revenue: f64,
    expenses: &[ExpenseRecord],
    rules: &[DistributionRule],
) -> MonthlyDistribution {
    let financials = monthly_financials(business, month, revenue, expenses);
    let profit_after_fixed = profit_after_fixed(&financials, rules);

    let mut amounts = MonthlyDistribution::new();
    for rule in rules.iter().filter(|r| r.business == business) {
        let amount = match rule.distribution_type {
            DistributionType::FixedAmount => rule.value,
            DistributionType::Percentage => (profit_after_fixed * rule.value / 100.0).floor(),
        };
        amounts
            .entry(rule.recipient.clone())
            .or_default()
            .distribution_amount += amount;
    }
    for expense in matching_expenses(business, month, expenses) {
        amounts
            .entry(expense.payment_source.clone())
            .or_default()
            .expense_reimbursement += expense.amount;
    }
    amounts
}

/// Sums every party's amounts across businesses, per month.
pub fn aggregate_across_businesses(per_business: &[BusinessDistribution]) -> AggregateDistribution {
    let mut aggregate = AggregateDistribution::new();
    for distribution in per_business {
        for (party, amount) in &distribution.amounts {
            aggregate
                .entry(party.clone())
                .or_default()
                .entry(distribution.financials.month)
                .or_default()
                .accumulate(amount);
        }
    }
    aggregate
}

/// Months with any revenue or expense record for the business, optionally
/// restricted to a range.
pub fn months_considered(
    business: &str,
    revenues: &[RevenueRecord],
    expenses: &[ExpenseRecord],
    range: Option<&MonthRange>,
) -> BTreeSet<YearMonth> {
    revenues
        .iter()
        .filter(|r| r.business == business)
        .map(|r| r.month)
        .chain(
            expenses
                .iter()
                .filter(|e| e.business == business)
                .map(|e| e.month),
        )
        .filter(|m| range.map_or(true, |r| r.contains(m)))
        .collect()
}

/// Profit left after all fixed-amount rules of the business. Base for every
/// percentage rule.
pub(crate) fn profit_after_fixed(
    financials: &MonthlyBusinessFinancials,
    rules: &[DistributionRule],
) -> f64 {
    let total_fixed: f64 = rules
        .iter()
        .filter(|r| r.business == financials.business)
        .filter(|r| r.distribution_type == DistributionType::FixedAmount)
        .map(|r| r.value)
        .sum();
    financials.profit() - total_fixed
}

fn matching_expenses<'a>(
    business: &'a str,
    month: YearMonth,
    expenses: &'a [ExpenseRecord],
) -> impl Iterator<Item = &'a ExpenseRecord> {
    expenses
        .iter()
        .filter(move |e| e.business == business && e.month == month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{party, RecipientAmount};

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    fn expense(business: &str, month: YearMonth, payer: &str, amount: f64) -> ExpenseRecord {
        ExpenseRecord {
            month,
            business: business.to_string(),
            payment_source: party(payer),
            amount,
            description: String::new(),
        }
    }

    fn rule(business: &str, recipient: &str, t: DistributionType, value: f64) -> DistributionRule {
        DistributionRule {
            business: business.to_string(),
            recipient: party(recipient),
            distribution_type: t,
            value,
        }
    }

    fn distribution_of(amounts: &MonthlyDistribution, name: &str) -> f64 {
        amounts[&party(name)].distribution_amount
    }

    #[test]
    fn test_fixed_amounts_to_same_recipient_sum() {
        let rules = vec![
            rule("A", "Bob", DistributionType::FixedAmount, 300.0),
            rule("A", "Bob", DistributionType::FixedAmount, 200.0),
        ];
        let amounts = compute_monthly_distribution("A", ym(2025, 10), 10_000.0, &[], &rules);
        assert_eq!(amounts.len(), 1);
        assert_eq!(distribution_of(&amounts, "Bob"), 500.0);
    }

    #[test]
    fn test_percentage_rules_share_one_base() {
        let rules = vec![
            rule("A", "Ann", DistributionType::Percentage, 50.0),
            rule("A", "Ben", DistributionType::Percentage, 50.0),
        ];
        let amounts = compute_monthly_distribution("A", ym(2025, 10), 1000.0, &[], &rules);
        assert_eq!(distribution_of(&amounts, "Ann"), 500.0);
        assert_eq!(distribution_of(&amounts, "Ben"), 500.0);
    }

    #[test]
    fn test_percentage_share_is_floored() {
        let rules = vec![rule("A", "Ann", DistributionType::Percentage, 33.0)];
        let amounts = compute_monthly_distribution("A", ym(2025, 10), 999.0, &[], &rules);
        assert_eq!(distribution_of(&amounts, "Ann"), 329.0);
    }

    #[test]
    fn test_fixed_amount_is_paid_without_enough_profit() {
        let rules = vec![rule("A", "Ann", DistributionType::FixedAmount, 500.0)];
        let amounts = compute_monthly_distribution("A", ym(2025, 10), 100.0, &[], &rules);
        assert_eq!(distribution_of(&amounts, "Ann"), 500.0);
    }

    #[test]
    fn test_payer_is_reimbursed_without_rule() {
        let month = ym(2025, 10);
        let expenses = vec![
            expense("A", month, "Alice", 1000.0),
            expense("A", month, "Alice", 2000.0),
            expense("A", ym(2025, 9), "Alice", 700.0),
            expense("B", month, "Alice", 400.0),
        ];
        let amounts = compute_monthly_distribution("A", month, 0.0, &expenses, &[]);
        assert_eq!(
            amounts[&party("Alice")],
            RecipientAmount {
                distribution_amount: 0.0,
                expense_reimbursement: 3000.0,
            }
        );
    }

    #[test]
    fn test_month_without_rules_or_expenses_is_empty() {
        let amounts = compute_monthly_distribution("A", ym(2025, 10), 5000.0, &[], &[]);
        assert!(amounts.is_empty());
    }

    #[test]
    fn test_loss_yields_negative_percentage_share() {
        let month = ym(2025, 10);
        let expenses = vec![expense("A", month, "Card", 1200.0)];
        let rules = vec![rule("A", "Ann", DistributionType::Percentage, 10.0)];
        let amounts = compute_monthly_distribution("A", month, 500.0, &expenses, &rules);
        assert_eq!(distribution_of(&amounts, "Ann"), -70.0);
    }

    #[test]
    fn test_negative_share_floors_toward_negative_infinity() {
        let rules = vec![rule("A", "Ann", DistributionType::Percentage, 33.0)];
        let amounts = compute_monthly_distribution("A", ym(2025, 10), -999.0, &[], &rules);
        assert_eq!(distribution_of(&amounts, "Ann"), -330.0);
    }

    #[test]
    fn test_rules_of_other_businesses_are_ignored() {
        let rules = vec![
            rule("A", "Ann", DistributionType::Percentage, 10.0),
            rule("B", "Ben", DistributionType::FixedAmount, 900.0),
        ];
        let amounts = compute_monthly_distribution("A", ym(2025, 10), 1000.0, &[], &rules);
        assert_eq!(amounts.len(), 1);
        assert_eq!(distribution_of(&amounts, "Ann"), 100.0);
    }

    #[test]
    fn test_shop_scenario() {
        let month = ym(2025, 11);
        let expenses = vec![expense("Shop", month, "Card", 20_000.0)];
        let rules = vec![
            rule("Shop", "Founder", DistributionType::Percentage, 60.0),
            rule("Shop", "Partner", DistributionType::FixedAmount, 10_000.0),
        ];

        let financials = monthly_financials("Shop", month, 100_000.0, &expenses);
        assert_eq!(financials.expense, 20_000.0);
        assert_eq!(financials.profit(), 80_000.0);
        assert_eq!(profit_after_fixed(&financials, &rules), 70_000.0);

        let amounts = compute_monthly_distribution("Shop", month, 100_000.0, &expenses, &rules);
        assert_eq!(distribution_of(&amounts, "Founder"), 42_000.0);
        assert_eq!(distribution_of(&amounts, "Partner"), 10_000.0);
        assert_eq!(amounts[&party("Card")].expense_reimbursement, 20_000.0);
        assert_eq!(amounts[&party("Card")].total(), 20_000.0);
    }

    #[test]
    fn test_recipient_and_payer_with_same_name_merge() {
        let month = ym(2025, 11);
        let expenses = vec![expense("Shop", month, "Founder", 1_000.0)];
        let rules = vec![rule("Shop", "Founder", DistributionType::Percentage, 50.0)];
        let amounts = compute_monthly_distribution("Shop", month, 11_000.0, &expenses, &rules);
        assert_eq!(amounts.len(), 1);
        let founder = amounts[&party("Founder")];
        assert_eq!(founder.distribution_amount, 5_000.0);
        assert_eq!(founder.expense_reimbursement, 1_000.0);
        assert_eq!(founder.total(), 6_000.0);
    }

    #[test]
    fn test_aggregate_sums_same_recipient_across_businesses() {
        let month = ym(2025, 10);
        let single = |business: &str, value: f64| BusinessDistribution {
            financials: monthly_financials(business, month, 0.0, &[]),
            amounts: compute_monthly_distribution(
                business,
                month,
                0.0,
                &[],
                &[rule(business, "Bob", DistributionType::FixedAmount, value)],
            ),
        };
        let aggregate = aggregate_across_businesses(&[single("A", 100.0), single("B", 200.0)]);
        let bob = &aggregate[&party("Bob")][&month];
        assert_eq!(bob.distribution_amount, 300.0);
        assert_eq!(bob.total(), 300.0);
    }

    #[test]
    fn test_aggregate_keeps_months_apart() {
        let oct = ym(2025, 10);
        let nov = ym(2025, 11);
        let per_business: Vec<BusinessDistribution> = [oct, nov]
            .into_iter()
            .map(|month| {
                let expenses = vec![expense("A", month, "Card", 50.0)];
                BusinessDistribution {
                    financials: monthly_financials("A", month, 0.0, &expenses),
                    amounts: compute_monthly_distribution("A", month, 0.0, &expenses, &[]),
                }
            })
            .collect();
        let aggregate = aggregate_across_businesses(&per_business);
        assert_eq!(aggregate[&party("Card")].len(), 2);
        assert_eq!(aggregate[&party("Card")][&nov].expense_reimbursement, 50.0);
    }

    #[test]
    fn test_months_considered_is_union_of_revenue_and_expense_months() {
        let revenues = vec![
            RevenueRecord {
                month: ym(2025, 1),
                business: "A".to_string(),
                amount: 10.0,
            },
            RevenueRecord {
                month: ym(2025, 4),
                business: "B".to_string(),
                amount: 10.0,
            },
        ];
        let expenses = vec![
            expense("A", ym(2025, 2), "Card", 5.0),
            expense("A", ym(2025, 1), "Card", 5.0),
        ];
        let months = months_considered("A", &revenues, &expenses, None);
        assert_eq!(
            months.into_iter().collect::<Vec<_>>(),
            vec![ym(2025, 1), ym(2025, 2)]
        );

        let range = MonthRange {
            from: ym(2025, 2),
            to: ym(2025, 12),
        };
        let months = months_considered("A", &revenues, &expenses, Some(&range));
        assert_eq!(months.into_iter().collect::<Vec<_>>(), vec![ym(2025, 2)]);
    }
}
