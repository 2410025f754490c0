use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use super::models::{RoleRecord, UserRecord};
use super::{RoleStore, StoreError, UserStore};

const USER_COLUMNS: &str =
    "id, name, role_ids, role_names, reports_to, is_active, created_at, updated_at";

/// Postgres-backed directory store over the `users` and `roles` tables.
/// Queries are built at runtime with bound parameters so the crate compiles
/// without a live database.
pub struct PgDirectoryStore {
    pool: PgPool,
}

impl PgDirectoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .connect(database_url)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        info!("Connected directory store pool");
        Ok(Self::new(pool))
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl UserStore for PgDirectoryStore {
    async fn user_by_id(&self, user_id: &str) -> Result<Option<UserRecord>, StoreError> {
        let query = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);
        let row = sqlx::query_as::<_, UserRecord>(&query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn active_users(&self) -> Result<Vec<UserRecord>, StoreError> {
        let query = format!("SELECT {} FROM users WHERE is_active = TRUE", USER_COLUMNS);
        let rows = sqlx::query_as::<_, UserRecord>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn active_users_reporting_to(
        &self,
        manager_id: &str,
    ) -> Result<Vec<UserRecord>, StoreError> {
        let query = format!(
            "SELECT {} FROM users WHERE is_active = TRUE AND reports_to = $1",
            USER_COLUMNS
        );
        let rows = sqlx::query_as::<_, UserRecord>(&query)
            .bind(manager_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn active_users_with_roles(
        &self,
        role_ids: &[String],
    ) -> Result<Vec<UserRecord>, StoreError> {
        if role_ids.is_empty() {
            return Ok(vec![]);
        }
        // && is the Postgres array-overlap operator
        let query = format!(
            "SELECT {} FROM users WHERE is_active = TRUE AND role_ids && $1",
            USER_COLUMNS
        );
        let rows = sqlx::query_as::<_, UserRecord>(&query)
            .bind(role_ids)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

#[async_trait]
impl RoleStore for PgDirectoryStore {
    async fn role_by_id(&self, role_id: &str) -> Result<Option<RoleRecord>, StoreError> {
        let row = sqlx::query_as::<_, RoleRecord>(
            "SELECT id, name, report_to FROM roles WHERE id = $1",
        )
        .bind(role_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn roles_reporting_to(&self, role_id: &str) -> Result<Vec<RoleRecord>, StoreError> {
        let rows = sqlx::query_as::<_, RoleRecord>(
            "SELECT id, name, report_to FROM roles WHERE report_to = $1",
        )
        .bind(role_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
