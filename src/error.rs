use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

/// Request-terminal failures, one variant per outcome class.
///
/// `Authentication` is "no usable identity"; `Authorization` is "known
/// identity, insufficient rights over this resource". Both answer 401 on the
/// wire unless `strict` moves a denied write to 403.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Authentication(String),

    #[error("{message}")]
    Authorization { message: String, strict: bool },

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Authentication(_) => StatusCode::UNAUTHORIZED,
            ApiError::Authorization { strict, .. } => {
                if *strict {
                    StatusCode::FORBIDDEN
                } else {
                    StatusCode::UNAUTHORIZED
                }
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        if matches!(err, sqlx::Error::RowNotFound) {
            return ApiError::NotFound("Resource not found".into());
        }
        if let sqlx::Error::Database(db) = &err {
            if db.is_unique_violation() {
                return ApiError::Conflict("Resource already exists".into());
            }
        }
        ApiError::Internal(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let ApiError::Internal(e) = &self {
            error!(error = %e, "internal error");
        }
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let err = ApiError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, ApiError::NotFound(_)));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn unexpected_sqlx_error_maps_to_internal() {
        let err = ApiError::from(sqlx::Error::PoolClosed);
        assert!(matches!(err, ApiError::Internal(_)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn denied_write_status_follows_strict_flag() {
        let lax = ApiError::Authorization {
            message: "denied".into(),
            strict: false,
        };
        let strict = ApiError::Authorization {
            message: "denied".into(),
            strict: true,
        };
        assert_eq!(lax.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(strict.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn internal_error_message_stays_generic() {
        let err = ApiError::Internal(anyhow::anyhow!("connection reset by peer"));
        assert_eq!(err.to_string(), "Internal server error");
    }
}
