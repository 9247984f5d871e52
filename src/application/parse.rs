//! Turning command-line text into exercise input
//!
//! Values are separated by commas; matrix rows by semicolons.
//! Whitespace around values is ignored.

use std::str::FromStr;

use tracing::instrument;

use crate::application::{ApplicationError, ApplicationResult};

/// Parses `"1, 2,-3"` into `[1, 2, -3]`. An empty string is an empty list.
#[instrument(level = "trace")]
pub fn parse_list<T: FromStr>(input: &str) -> ApplicationResult<Vec<T>>
where
    T::Err: std::fmt::Display,
{
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    input.split(',').map(|item| parse_value(item, input)).collect()
}

/// Parses `"1,2,3"` into `[1, 2, 3]` (shorthand for [`parse_list`] on `i32`).
pub fn parse_int_list(input: &str) -> ApplicationResult<Vec<i32>> {
    parse_list(input)
}

/// Parses `"1,2;3,4"` into `[[1, 2], [3, 4]]`.
///
/// Row lengths are not checked here; squareness is a domain concern.
#[instrument(level = "trace")]
pub fn parse_matrix(input: &str) -> ApplicationResult<Vec<Vec<i32>>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    input
        .split(';')
        .map(|row| -> ApplicationResult<Vec<i32>> {
            if row.trim().is_empty() {
                return Err(ApplicationError::Parse {
                    input: input.to_string(),
                    reason: "empty row".to_string(),
                });
            }
            row.split(',').map(|item| parse_value(item, input)).collect()
        })
        .collect()
}

fn parse_value<T: FromStr>(item: &str, input: &str) -> ApplicationResult<T>
where
    T::Err: std::fmt::Display,
{
    let item = item.trim();
    if item.is_empty() {
        return Err(ApplicationError::Parse {
            input: input.to_string(),
            reason: "empty value".to_string(),
        });
    }
    item.parse().map_err(|e: T::Err| ApplicationError::Parse {
        input: input.to_string(),
        reason: format!("{item:?}: {e}"),
    })
}
