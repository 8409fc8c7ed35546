use crate::{error::AppError, middleware::RequestContext, AppState};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use chrono::{DateTime, Utc};
use core_types::{Paginated, Pagination, Stock, StockPrice};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

/// Raw query parameters for the price listing route, before validation.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    /// Parses the loosely-typed `page` parameter into a 1-based page
    /// number. An absent or empty value defaults to page 1; anything that
    /// is not a positive integer is rejected at the boundary instead of
    /// reaching the storage query.
    pub fn parse_page(&self) -> Result<i64, AppError> {
        match self.page.as_deref() {
            None | Some("") => Ok(1),
            Some(raw) => match raw.parse::<i64>() {
                Ok(page) if page >= 1 => Ok(page),
                _ => Err(AppError::InvalidPage(raw.to_string())),
            },
        }
    }
}

/// Payload for the index route. Echoes the fields the middleware chain
/// attached, so the chain is observable from the outside.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Greeting {
    pub greeting: &'static str,
    pub label: &'static str,
    pub received_at: DateTime<Utc>,
}

/// # GET /
pub async fn index(Extension(context): Extension<RequestContext>) -> Json<Greeting> {
    tracing::info!(label = context.label, received_at = %context.received_at, "index hit");
    Json(Greeting {
        greeting: "Hello from marketboard",
        label: context.label,
        received_at: context.received_at,
    })
}

/// # GET /api
pub async fn api_info() -> Json<serde_json::Value> {
    Json(json!({ "name": "John", "age": 18 }))
}

/// # GET /api/stocks
pub async fn list_stocks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Stock>>, AppError> {
    let stocks = state.repo.list_stocks().await?;
    Ok(Json(stocks))
}

/// # GET /api/stocks/:stock_id
///
/// Pages through the price rows of one stock, five per page. The count
/// query runs first; the page fetch follows with bound LIMIT/OFFSET. A
/// page past the end returns an empty `data` array while `total` still
/// reports the full row count.
pub async fn stock_prices(
    Path(stock_id): Path<String>,
    Query(query): Query<PageQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Paginated<StockPrice>>, AppError> {
    let page = query.parse_page()?;

    let total = state.repo.count_prices(&stock_id).await?;
    let pagination = Pagination::for_page(total, page);
    let data = state
        .repo
        .prices_page(&stock_id, pagination.limit(), pagination.offset())
        .await?;

    Ok(Json(Paginated { pagination, data }))
}

/// Request body for stock creation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStock {
    pub stock_id: String,
    pub stock_name: String,
}

/// # POST /api/stocks
pub async fn create_stock(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewStock>,
) -> Result<Json<serde_json::Value>, AppError> {
    state
        .repo
        .insert_stock(&body.stock_id, &body.stock_name)
        .await?;
    Ok(Json(json!({ "result": "ok" })))
}

/// # GET /test
pub async fn test_page(Extension(context): Extension<RequestContext>) -> &'static str {
    tracing::info!(received_at = %context.received_at, "test page hit");
    "Hello from the test page"
}

/// Terminal handler for anything no route matched.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "There is no such page here.")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>) -> PageQuery {
        PageQuery {
            page: page.map(str::to_string),
        }
    }

    #[test]
    fn missing_page_defaults_to_one() {
        assert_eq!(query(None).parse_page().unwrap(), 1);
    }

    #[test]
    fn empty_page_defaults_to_one() {
        assert_eq!(query(Some("")).parse_page().unwrap(), 1);
    }

    #[test]
    fn numeric_pages_parse() {
        assert_eq!(query(Some("1")).parse_page().unwrap(), 1);
        assert_eq!(query(Some("42")).parse_page().unwrap(), 42);
    }

    #[test]
    fn non_numeric_page_is_rejected() {
        assert!(matches!(
            query(Some("abc")).parse_page(),
            Err(AppError::InvalidPage(raw)) if raw == "abc"
        ));
    }

    #[test]
    fn non_positive_pages_are_rejected() {
        assert!(query(Some("0")).parse_page().is_err());
        assert!(query(Some("-3")).parse_page().is_err());
    }
}
