use fractic_server_error::define_client_error;

use crate::entities::YearMonth;

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(InvalidCsvContent, "Invalid CSV content: {details}.", { details: &str });
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(
    InvalidMonth,
    "Invalid month: '{value}' (expected YYYY-MM or YYYY-MM-DD).",
    { value: &str }
);
define_client_error!(InvalidIsoCurrencyCode, "Invalid ISO currency code: {code}.", { code: &str });
define_client_error!(
    InvalidAccountingAmount,
    "Invalid accounting amount: '{value}'.",
    { value: &str }
);

// Record validation.
define_client_error!(
    EmptyBusinessName,
    "Missing business name in {file} (record {row}).",
    { file: &str, row: usize }
);
define_client_error!(
    EmptyPartyName,
    "Missing {role} name in {file} (record {row}).",
    { role: &str, file: &str, row: usize }
);
define_client_error!(
    NegativeAmount,
    "Unexpected negative {field} ({amount}) in {file} (record {row}).",
    { field: &str, amount: f64, file: &str, row: usize }
);
define_client_error!(
    PercentageOutOfRange,
    "Percentage rule for '{recipient}' in business '{business}' must be within 0-100 (got {value}).",
    { recipient: &str, business: &str, value: f64 }
);

// Configuration.
define_client_error!(
    InvalidMonthRange,
    "Invalid month range: {from} is after {to}.",
    { from: &YearMonth, to: &YearMonth }
);
