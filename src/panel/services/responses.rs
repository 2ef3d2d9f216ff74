//! # Response Decoding
//!
//! Turns a raw status + body into a tagged variant per endpoint. Unknown
//! statuses and bodies missing their key are errors, never silent no-ops.

use serde_json::{Map, Value};
use thiserror::Error;

/// Status code and body text of a finished request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new<S: Into<String>>(status: u16, body: S) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    #[error("status {status} body is not a JSON object")]
    MalformedBody { status: u16 },
    #[error("status {status} body has no `{key}`")]
    MissingKey { status: u16, key: &'static str },
    #[error("unrecognized response status {0}")]
    Unrecognized(u16),
}

/// Sign-in endpoint answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInResponse {
    /// 200 carrying the account identifier
    Identified { id: String },
    /// 200 carrying a message code
    Message { msg_code: String },
    /// 500 carrying an error code
    Failed { error_code: String },
}

/// Sign-up endpoint answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpResponse {
    /// 201
    Created { msg_code: String },
    /// 400, 422 or 500
    Rejected { status: u16, error_code: String },
}

/// Registration screen answers, which carry literal text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationResponse {
    Created { message: String },
    Rejected { status: u16, error: String },
}

fn body_object(raw: &RawResponse) -> Result<Map<String, Value>, ResponseError> {
    match serde_json::from_str::<Value>(&raw.body) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(ResponseError::MalformedBody { status: raw.status }),
    }
}

/// A present scalar field as text. Codes may arrive as strings (`"07"`) or
/// numbers (`7`); null, arrays and objects count as absent.
fn scalar_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Like `scalar_field`, but empty strings, zero and false count as absent
fn truthy_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::String(text) if text.is_empty() => None,
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        Value::Bool(false) => None,
        _ => scalar_field(map, key),
    }
}

fn required_field(
    map: &Map<String, Value>,
    status: u16,
    key: &'static str,
) -> Result<String, ResponseError> {
    scalar_field(map, key).ok_or(ResponseError::MissingKey { status, key })
}

impl SignInResponse {
    pub fn decode(raw: &RawResponse) -> Result<Self, ResponseError> {
        match raw.status {
            200 => {
                let map = body_object(raw)?;
                if let Some(id) = truthy_field(&map, "id") {
                    return Ok(SignInResponse::Identified { id });
                }
                let msg_code = required_field(&map, raw.status, "msg_code")?;
                Ok(SignInResponse::Message { msg_code })
            }
            500 => {
                let map = body_object(raw)?;
                let error_code = required_field(&map, raw.status, "error_code")?;
                Ok(SignInResponse::Failed { error_code })
            }
            status => Err(ResponseError::Unrecognized(status)),
        }
    }
}

impl SignUpResponse {
    pub fn decode(raw: &RawResponse) -> Result<Self, ResponseError> {
        match raw.status {
            201 => {
                let map = body_object(raw)?;
                let msg_code = required_field(&map, raw.status, "msg_code")?;
                Ok(SignUpResponse::Created { msg_code })
            }
            400 | 422 | 500 => {
                let map = body_object(raw)?;
                let error_code = required_field(&map, raw.status, "error_code")?;
                Ok(SignUpResponse::Rejected {
                    status: raw.status,
                    error_code,
                })
            }
            status => Err(ResponseError::Unrecognized(status)),
        }
    }
}

impl RegistrationResponse {
    pub fn decode(raw: &RawResponse) -> Result<Self, ResponseError> {
        let map = body_object(raw)?;
        if raw.status == 201 {
            let message = required_field(&map, raw.status, "message")?;
            Ok(RegistrationResponse::Created { message })
        } else {
            let error = required_field(&map, raw.status, "error")?;
            Ok(RegistrationResponse::Rejected {
                status: raw.status,
                error,
            })
        }
    }
}
