use crate::server::error::AppError;

/// Parses a Discord snowflake from a request parameter.
///
/// Snowflakes are non-zero unsigned 64-bit integers written as plain decimal digits;
/// signs and surrounding whitespace are not accepted.
///
/// # Arguments
/// - `value` - The raw parameter, `None` when it was not sent
/// - `name` - Human-readable name of the parameter, used in the error message
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed identifier
/// - `Err(AppError::BadRequest)` - Missing, empty, non-numeric, negative or zero
pub fn parse_snowflake(value: Option<&str>, name: &str) -> Result<u64, AppError> {
    let value = match value {
        Some(value) if !value.is_empty() => value,
        _ => return Err(AppError::BadRequest(format!("{} not provided", name))),
    };

    // u64::from_str also takes a leading '+'
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::BadRequest(format!("Invalid {} format", name)));
    }

    match value.parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::BadRequest(format!("Invalid {} format", name))),
    }
}
