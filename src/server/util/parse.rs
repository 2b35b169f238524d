use chrono::NaiveDate;

use crate::server::error::AppError;

/// Date format accepted by every endpoint taking a calendar date.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date from a request field.
///
/// # Arguments
/// - `field` - Name of the request field, used in the error message
/// - `value` - The raw string to parse
///
/// # Returns
/// - `Ok(NaiveDate)` - Successfully parsed date
/// - `Err(AppError::BadRequest)` - Value is not a valid calendar date
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| {
        AppError::BadRequest(format!(
            "Invalid {}: '{}' is not a YYYY-MM-DD date ({})",
            field, value, e
        ))
    })
}

/// Splits a free-text full name into first and last name on the first whitespace run.
///
/// The remainder, including any further spaces, becomes the last name. A single word
/// yields an empty last name.
pub fn split_full_name(full_name: &str) -> (String, String) {
    let trimmed = full_name.trim();

    match trimmed.split_once(char::is_whitespace) {
        Some((first, rest)) => (first.to_string(), rest.trim_start().to_string()),
        None => (trimmed.to_string(), String::new()),
    }
}
