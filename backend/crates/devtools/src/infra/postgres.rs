//! PostgreSQL Repository Implementations

use crate::domain::repository::{CounterRepository, FixtureRepository};
use crate::error::{DevToolsError, DevToolsResult};
use sqlx::PgPool;

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgDevRepository {
    pool: PgPool,
}

impl PgDevRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Read the current counter value without incrementing it.
    /// Used as a startup sanity check; `None` when never incremented.
    pub async fn counter_value(&self, key: &str) -> DevToolsResult<Option<i64>> {
        let value = sqlx::query_scalar::<_, i64>(
            "SELECT value FROM dev_counters WHERE counter_key = $1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(value)
    }
}

impl CounterRepository for PgDevRepository {
    async fn increment(&self, key: &str) -> DevToolsResult<i64> {
        let row = sqlx::query_as::<_, (i64,)>(
            r#"
            INSERT INTO dev_counters (counter_key, value)
            VALUES ($1, 1)
            ON CONFLICT (counter_key)
            DO UPDATE SET value = dev_counters.value + 1, updated_at = now()
            RETURNING value
            "#,
        )
        .bind(key)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.0)
    }
}

impl FixtureRepository for PgDevRepository {
    async fn truncate_all(&self, tables: &[String]) -> DevToolsResult<()> {
        if tables.is_empty() {
            return Ok(());
        }

        // Identifiers cannot be bound as parameters, so reject anything
        // that is not a plain lowercase identifier before interpolating.
        for table in tables {
            if !valid_table_name(table) {
                return Err(DevToolsError::InvalidTableName(table.clone()));
            }
        }

        let sql = format!(
            "TRUNCATE {} RESTART IDENTITY CASCADE",
            tables.join(", ")
        );
        sqlx::query(&sql).execute(&self.pool).await?;

        tracing::info!(tables = %tables.join(", "), "Emptied tables");

        Ok(())
    }
}

/// Plain lowercase SQL identifier: `[a-z_][a-z0-9_]*`
pub(crate) fn valid_table_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
