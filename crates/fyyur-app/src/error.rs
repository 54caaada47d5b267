use axum::response::{IntoResponse, Response};
use http::StatusCode;
use tracing::{debug, error};

use crate::{notice::Notice, pages::errors::error_page};

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Unprocessable request: {}", .0.join("; "))]
    UnprocessableRequest(Vec<String>),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database did not respond in time")]
    Timeout,

    #[error("{notice}")]
    OperationFailed {
        notice: String,
        #[source]
        source: fyyur_dal::Error,
    },

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    /// Wraps a failed domain operation with the notice shown to the visitor.
    /// A missing record stays a plain not found error.
    pub fn failed(source: fyyur_dal::Error, notice: impl Into<String>) -> Self {
        match source {
            fyyur_dal::Error::RecordNotFound(what) => ApiError::ResourceNotFound(what),
            source => ApiError::OperationFailed {
                notice: notice.into(),
                source,
            },
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ResourceNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::UnprocessableRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Timeout => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::OperationFailed { source, .. } => dal_status(source),
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn dal_status(error: &fyyur_dal::Error) -> StatusCode {
    match error {
        fyyur_dal::Error::RecordNotFound(_) => StatusCode::NOT_FOUND,
        fyyur_dal::Error::ConstraintViolation(_) => StatusCode::CONFLICT,
        fyyur_dal::Error::Timeout => StatusCode::SERVICE_UNAVAILABLE,
        fyyur_dal::Error::DatabaseError(_) | fyyur_dal::Error::MigrationError(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<fyyur_dal::Error> for ApiError {
    fn from(value: fyyur_dal::Error) -> Self {
        match value {
            fyyur_dal::Error::RecordNotFound(what) => ApiError::ResourceNotFound(what),
            fyyur_dal::Error::ConstraintViolation(msg) => ApiError::Conflict(msg),
            fyyur_dal::Error::Timeout => ApiError::Timeout,
            other => ApiError::InternalError(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed: {self:?}");
        } else {
            debug!("Request rejected: {self}");
        }

        let (title, notices, details) = match self {
            ApiError::ResourceNotFound(_) => ("Not Found", vec![], vec![]),
            ApiError::InvalidRequest(msg) => ("Invalid Request", vec![Notice::error(msg)], vec![]),
            ApiError::UnprocessableRequest(errors) => ("Invalid Input", vec![], errors),
            ApiError::Conflict(_) => (
                "Conflict",
                vec![Notice::error("The request conflicts with existing records.")],
                vec![],
            ),
            ApiError::Timeout => (
                "Service Unavailable",
                vec![Notice::error("The database is busy, please try again later.")],
                vec![],
            ),
            ApiError::OperationFailed { notice, .. } => {
                ("Operation Failed", vec![Notice::error(notice)], vec![])
            }
            ApiError::InternalError(_) => ("Server Error", vec![], vec![]),
        };

        (status, error_page(status, title, &notices, &details)).into_response()
    }
}
