pub mod favorites;
pub mod feed;
pub mod health;
pub mod preferences;
pub mod search;
pub mod trending;

use crate::error::{AppError, AppResult};
use std::str::FromStr;

/// Parse an optional query parameter, rejecting values that do not parse
fn parse_param<T>(name: &str, value: Option<&str>) -> AppResult<Option<T>>
where
    T: FromStr,
{
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| AppError::BadRequest(format!("Invalid {}: {}", name, raw))),
    }
}

/// Split a comma separated parameter into trimmed, non-empty values.
/// Case is kept, callers lowercase closed sets themselves.
fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split(',')
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}
