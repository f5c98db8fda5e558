// src/error.rs
use std::fmt;

use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde::Serialize;

/// A single offending field reported alongside a validation error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cause {
    pub field: String,
    pub message: String,
}

impl Cause {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    Validation { message: String, causes: Vec<Cause> },
    NotFound(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
    error: &'static str,
    code: u16,
    #[serde(skip_serializing_if = "no_causes")]
    causes: &'a [Cause],
}

fn no_causes(causes: &&[Cause]) -> bool {
    causes.is_empty()
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation { message: message.into(), causes: Vec::new() }
    }

    pub fn validation_with_causes(message: impl Into<String>, causes: Vec<Cause>) -> Self {
        AppError::Validation { message: message.into(), causes }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AppError::Internal(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable kind carried in the `error` field of the body.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "bad_request",
            AppError::NotFound(_) => "not_found",
            AppError::Internal(_) => "internal_server_error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message, .. } => message,
            AppError::NotFound(message) | AppError::Internal(message) => message,
        }
    }

    fn causes(&self) -> &[Cause] {
        match self {
            AppError::Validation { causes, .. } => causes.as_slice(),
            _ => &[],
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind(), self.message())
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorBody {
            message: self.message(),
            error: self.kind(),
            code: status.as_u16(),
            causes: self.causes(),
        });

        (status, body).into_response()
    }
}
