//! HTTP mapping for domain errors.
//!
//! `AppError` lives in hb-core and knows nothing about HTTP; this newtype
//! owns the status-code and body mapping so handlers can just use `?`.

use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use hb_core::error::AppError;
use serde::Serialize;

/// Client-visible error body, `{"detail": "Thread not found"}`.
#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

#[derive(Debug)]
pub struct ApiError(AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        log::debug!("request rejected: {}", self.0);
        HttpResponse::build(self.status_code()).json(ErrorBody {
            detail: self.0.to_string(),
        })
    }
}
