use crate::{devops::ConfigurationError, diagram::RenderError, rest_client::TransportError};
use actix_web::{
    http::{header::ContentType, StatusCode},
    HttpResponse, ResponseError,
};
use thiserror::Error;

/// Failure of a request; always answered with a plain text body.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("'{0}' is a required parameter")]
    MissingParameter(&'static str),
    #[error("{0}")]
    BadRequest(&'static str),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Configuration(_) | ApiError::Render(_) | ApiError::Transport(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }
}
