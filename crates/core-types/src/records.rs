use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A listed instrument, keyed by its exchange code.
///
/// Rows are created through the insert endpoint and never updated or
/// deleted by this service.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Stock {
    pub id: String,
    pub name: String,
}

/// One daily quote row for a stock. Read-only from this service's
/// perspective; rows are loaded by an external ingest process.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct StockPrice {
    pub stock_id: String,
    pub date: NaiveDate,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: i64,
}
