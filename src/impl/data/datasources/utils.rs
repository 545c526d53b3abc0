use fractic_server_error::ServerError;

use crate::{
    entities::{party, PayableParty},
    errors::{EmptyBusinessName, EmptyPartyName, InvalidCsv, InvalidCsvContent, ReadError},
};

/// Rows may be shorter than the header. Missing trailing cells read as empty
/// and are validated like any other empty cell.
pub(crate) fn csv_reader(s: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(s.as_bytes())
}

/// Checks that the header row starts with the expected columns. Extra
/// trailing columns are allowed.
pub(crate) fn check_headers(
    reader: &mut csv::Reader<&[u8]>,
    expected: &[&str],
    file: &str,
) -> Result<(), ServerError> {
    let headers = reader.headers().map_err(|e| InvalidCsv::with_debug(&e))?;
    let found: Vec<&str> = headers.iter().collect();
    if found.len() < expected.len() || found[..expected.len()] != *expected {
        return Err(InvalidCsvContent::new(&format!(
            "{} must start with columns [{}], found [{}]",
            file,
            expected.join(","),
            found.join(",")
        )));
    }
    Ok(())
}

pub(crate) fn required_business(raw: &str, file: &str, row: usize) -> Result<String, ServerError> {
    if raw.is_empty() {
        return Err(EmptyBusinessName::new(file, row));
    }
    Ok(raw.to_string())
}

pub(crate) fn required_party(
    raw: &str,
    role: &str,
    file: &str,
    row: usize,
) -> Result<PayableParty, ServerError> {
    if raw.is_empty() {
        return Err(EmptyPartyName::new(role, file, row));
    }
    Ok(party(raw))
}

pub(crate) async fn read_file<P>(path: P) -> Result<String, ServerError>
where
    P: AsRef<std::path::Path> + Send,
{
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ReadError::with_debug(&e))
}
