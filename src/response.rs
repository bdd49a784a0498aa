//! Response body helpers.

use crate::error::AppError;
use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value};

/// `{"<key>": [...]}`, the shape of every list endpoint.
pub fn listing<T: Serialize>(key: &str, items: Vec<T>) -> Result<Json<Value>, AppError> {
    let mut body = Map::new();
    body.insert(key.to_string(), serde_json::to_value(items)?);
    Ok(Json(Value::Object(body)))
}

/// Favorite mutations answer with either a message or an inline error, both with status 200.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Message { message: String },
    Error { error: String },
}

impl Outcome {
    pub fn message(message: impl Into<String>) -> Self {
        Outcome::Message {
            message: message.into(),
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Outcome::Error { error: error.into() }
    }
}
