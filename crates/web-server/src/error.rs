use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid page parameter: `{0}` is not a positive integer")]
    InvalidPage(String),
    #[error("Database error: {0}")]
    Database(#[from] database::DbError),
}

/// Converts our custom `AppError` into an HTTP response.
///
/// Every failure a route can hit is translated here; no route relies on
/// the framework's default error behavior.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InvalidPage(raw) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid page parameter: `{raw}` is not a positive integer"),
            ),
            AppError::Database(database::DbError::DuplicateStock(id)) => (
                StatusCode::CONFLICT,
                format!("A stock with id `{id}` already exists"),
            ),
            AppError::Database(db_err) => {
                tracing::error!(error = ?db_err, "Database error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal database error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_page_maps_to_bad_request() {
        let response = AppError::InvalidPage("abc".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn duplicate_stock_maps_to_conflict() {
        let err = AppError::Database(database::DbError::DuplicateStock("2330".to_string()));
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn other_database_errors_map_to_internal() {
        let err = AppError::Database(database::DbError::ConnectionError("down".to_string()));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
