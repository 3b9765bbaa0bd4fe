//! Catalog loading: one blocking GET per invocation.
//!
//! There is deliberately no retry, no timeout and no cancellation here.
//! A failed attempt is terminal; the user reruns the command.

use crate::core::filter::retain_usable;
use crate::errors::{AppError, AppResult};
use crate::models::LogEntry;
use reqwest::blocking::Client;
use serde_json::Value;

/// Why a load ended with nothing to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// Payload was empty or not a JSON array.
    NoLogs,
    /// Entries existed but none kept a usable section after filtering.
    NoIntervalData,
}

impl EmptyReason {
    pub fn message(&self) -> &'static str {
        match self {
            EmptyReason::NoLogs => "No lithology logs available.",
            EmptyReason::NoIntervalData => "No logs with interval data.",
        }
    }
}

/// Terminal outcome of a load attempt. Transport and decode failures
/// surface as `Err(AppError)` instead.
#[derive(Debug)]
pub enum LoadOutcome {
    Success(Vec<LogEntry>),
    Empty(EmptyReason),
}

/// Fetch the catalog and apply the display filter.
///
/// A non-2xx response maps to [`AppError::HttpStatus`] with the numeric
/// status. An empty or non-array body is the empty state, not an error;
/// a body that cannot be decoded at all is.
pub fn load(url: &str) -> AppResult<LoadOutcome> {
    let response = Client::new().get(url).send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::HttpStatus(status.as_u16()));
    }

    let payload: Value = response.json()?;
    let is_usable_array = matches!(&payload, Value::Array(items) if !items.is_empty());
    if !is_usable_array {
        return Ok(LoadOutcome::Empty(EmptyReason::NoLogs));
    }

    let entries: Vec<LogEntry> = serde_json::from_value(payload)?;
    let entries = retain_usable(entries);

    if entries.is_empty() {
        Ok(LoadOutcome::Empty(EmptyReason::NoIntervalData))
    } else {
        Ok(LoadOutcome::Success(entries))
    }
}
