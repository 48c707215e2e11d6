use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum ServiceSwapError {
    #[error("Internal server error")]
    InternalError,
    #[error("Invalid data provided: {0}")]
    BadClientData(String),
    #[error("unauthorized access")]
    Unauthorized(String),
    #[error("forbidden access")]
    Forbidden(String),
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl actix_web::error::ResponseError for ServiceSwapError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadClientData(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // The reason is only logged, clients get the generic message
        if let Self::Unauthorized(reason) | Self::Forbidden(reason) = self {
            warn!("Rejected request with {}: {}", self.status_code(), reason);
        }
        HttpResponse::build(self.status_code()).json(ErrorBody {
            message: self.to_string(),
        })
    }
}
