use crate::error::DbError;
use core_types::{Stock, StockPrice};
use sqlx::PgPool;

/// The `StockRepository` provides a high-level, application-specific
/// interface to the stock tables. It encapsulates every SQL statement in
/// the system; all of them bind their values through the driver, never by
/// string concatenation.
#[derive(Debug, Clone)]
pub struct StockRepository {
    pool: PgPool,
}

impl StockRepository {
    /// Creates a new `StockRepository` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetches every stock row, ordered by code.
    pub async fn list_stocks(&self) -> Result<Vec<Stock>, DbError> {
        let stocks = sqlx::query_as::<_, Stock>("SELECT id, name FROM stocks ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(stocks)
    }

    /// Inserts a new stock row. A primary-key collision is reported as
    /// [`DbError::DuplicateStock`] rather than a bare driver error.
    pub async fn insert_stock(&self, id: &str, name: &str) -> Result<(), DbError> {
        sqlx::query("INSERT INTO stocks (id, name) VALUES ($1, $2)")
            .bind(id)
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    DbError::DuplicateStock(id.to_string())
                }
                _ => e.into(),
            })?;

        tracing::debug!(stock_id = id, "inserted stock");
        Ok(())
    }

    /// Counts the price rows recorded for one stock.
    pub async fn count_prices(&self, stock_id: &str) -> Result<i64, DbError> {
        let total =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM stock_prices WHERE stock_id = $1")
                .bind(stock_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(total)
    }

    /// Fetches one page of price rows for a stock, oldest first. LIMIT and
    /// OFFSET are bound as parameters like everything else.
    pub async fn prices_page(
        &self,
        stock_id: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<StockPrice>, DbError> {
        let prices = sqlx::query_as::<_, StockPrice>(
            "SELECT stock_id, date, open, high, low, close, volume \
             FROM stock_prices WHERE stock_id = $1 \
             ORDER BY date ASC LIMIT $2 OFFSET $3",
        )
        .bind(stock_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(prices)
    }
}
