//! JSON-in, JSON-out entry point for hosts that speak raw request bodies.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::str::FromStr;

use crate::error::ApiError;
use crate::service::Calculator;

/// The operations served over the JSON boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Calculate,
    Expand,
    Info,
}

impl FromStr for Operation {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" | "items" => Ok(Operation::List),
            "calculate" => Ok(Operation::Calculate),
            "expand" => Ok(Operation::Expand),
            "info" => Ok(Operation::Info),
            other => Err(ApiError::UnknownOperation(other.to_string())),
        }
    }
}

/// Run `op` with a JSON `body` and return the JSON response.
///
/// An empty or whitespace-only body is read as `{}`. `List` ignores its body.
pub fn handle_json(calculator: &Calculator, op: Operation, body: &str) -> Result<String, ApiError> {
    tracing::debug!(?op, body_len = body.len(), "Handling request");
    match op {
        Operation::List => to_json(&calculator.list_items()),
        Operation::Calculate => to_json(&calculator.calculate(&parse_body(body)?)?),
        Operation::Expand => to_json(&calculator.expand(&parse_body(body)?)?),
        Operation::Info => to_json(&calculator.item_info(&parse_body(body)?)?),
    }
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let body = if body.trim().is_empty() { "{}" } else { body };
    Ok(serde_json::from_str(body)?)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    Ok(serde_json::to_string(value)?)
}
