use iso_currency::Currency;

use crate::entities::DistributionReport;

use super::amount_fmt::format_amount;

const LINE_WIDTH: usize = 80;

pub(crate) struct DistributionReportPrinter {
    currency: Currency,
    note_width: usize,
}

impl DistributionReportPrinter {
    pub(crate) fn new(currency: Currency, note_width: usize) -> Self {
        Self {
            currency,
            note_width,
        }
    }

    pub(crate) fn print_report(&self, report: &DistributionReport) -> String {
        let mut output = String::new();

        output.push_str(&section("Monthly financials"));
        self.print_financials(&mut output, report);
        output.push_str("\n\n");

        output.push_str(&section("Distributions by business"));
        self.print_per_business(&mut output, report);
        output.push_str("\n\n");

        output.push_str(&section("Transfers"));
        self.print_transfers(&mut output, report);

        if !report.assets.is_empty() {
            output.push_str("\n\n");
            output.push_str(&section("Assets"));
            self.print_assets(&mut output, report);
        }

        if !report.notes.is_empty() {
            output.push_str("\n\n");
            output.push_str(&section("Notes"));
            self.print_notes(&mut output, report);
        }

        output
    }

    fn print_financials(&self, output: &mut String, report: &DistributionReport) {
        let mut rows = vec![header(&["Business", "Month", "Revenue", "Expense", "Profit"])];
        rows.extend(report.financials().map(|f| {
            vec![
                f.business.clone(),
                f.month.to_string(),
                self.amount(f.revenue),
                self.amount(f.expense),
                self.amount(f.profit()),
            ]
        }));
        output.push_str(&table(&rows, 2));
    }

    fn print_per_business(&self, output: &mut String, report: &DistributionReport) {
        let mut rows = vec![header(&[
            "Business",
            "Month",
            "Recipient",
            "Distribution",
            "Reimbursement",
            "Total",
        ])];
        for distribution in &report.per_business {
            for (party, amount) in &distribution.amounts {
                rows.push(vec![
                    distribution.financials.business.clone(),
                    distribution.financials.month.to_string(),
                    party.to_string(),
                    self.amount(amount.distribution_amount),
                    self.amount(amount.expense_reimbursement),
                    self.amount(amount.total()),
                ]);
            }
        }
        output.push_str(&table(&rows, 3));
    }

    fn print_transfers(&self, output: &mut String, report: &DistributionReport) {
        let mut rows = vec![header(&[
            "Month",
            "Recipient",
            "Distribution",
            "Reimbursement",
            "Total",
        ])];
        rows.extend(report.transfers().iter().map(|t| {
            vec![
                t.month.to_string(),
                t.recipient.to_string(),
                self.amount(t.distribution_amount),
                self.amount(t.expense_reimbursement),
                self.amount(t.total()),
            ]
        }));
        output.push_str(&table(&rows, 2));
    }

    fn print_assets(&self, output: &mut String, report: &DistributionReport) {
        let mut rows = vec![header(&["Business", "Count", "Total value"])];
        rows.extend(report.assets.iter().map(|a| {
            vec![
                a.business.clone(),
                a.count.to_string(),
                self.amount(a.total_value),
            ]
        }));
        output.push_str(&table(&rows, 1));
    }

    fn print_notes(&self, output: &mut String, report: &DistributionReport) {
        let options = textwrap::Options::new(self.note_width)
            .initial_indent("- ")
            .subsequent_indent("  ");
        for note in &report.notes {
            for line in textwrap::wrap(note, &options) {
                output.push_str(&line);
                output.push('\n');
            }
        }
    }

    fn amount(&self, amount: f64) -> String {
        format_amount(amount, self.currency)
    }
}

fn section(title: &str) -> String {
    let prefix = format!("; --- {} ", title);
    let fill = LINE_WIDTH.saturating_sub(prefix.chars().count());
    format!("{}{}\n\n", prefix, "-".repeat(fill))
}

fn header(columns: &[&str]) -> Vec<String> {
    columns.iter().map(|c| c.to_string()).collect()
}

/// Renders rows as aligned columns. Columns from `first_numeric` onward are
/// right-aligned.
fn table(rows: &[Vec<String>], first_numeric: usize) -> String {
    let num_columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..num_columns)
        .map(|c| {
            rows.iter()
                .filter_map(|r| r.get(c))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();
    let mut output = String::new();
    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(c, cell)| {
                let width = widths[c];
                if c >= first_numeric {
                    format!("{:>width$}", cell)
                } else {
                    format!("{:<width$}", cell)
                }
            })
            .collect();
        output.push_str(cells.join("  ").trim_end());
        output.push('\n');
    }
    output
}
