use async_trait::async_trait;

pub mod error;
pub mod memory;
pub mod models;
pub mod postgres;

pub use error::StoreError;
pub use memory::MemoryDirectoryStore;
pub use models::{RoleRecord, UserRecord};
pub use postgres::PgDirectoryStore;

/// Read-only lookups over CRM users. The engine never writes; user records
/// are maintained by unrelated CRUD endpoints.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn user_by_id(&self, user_id: &str) -> Result<Option<UserRecord>, StoreError>;

    async fn active_users(&self) -> Result<Vec<UserRecord>, StoreError>;

    /// Active users whose `reports_to` field equals `manager_id`.
    async fn active_users_reporting_to(
        &self,
        manager_id: &str,
    ) -> Result<Vec<UserRecord>, StoreError>;

    /// Active users holding any of the given roles.
    async fn active_users_with_roles(
        &self,
        role_ids: &[String],
    ) -> Result<Vec<UserRecord>, StoreError>;
}

/// Read-only lookups over the role graph.
#[async_trait]
pub trait RoleStore: Send + Sync {
    async fn role_by_id(&self, role_id: &str) -> Result<Option<RoleRecord>, StoreError>;

    /// Roles whose `report_to` equals `role_id`.
    async fn roles_reporting_to(&self, role_id: &str) -> Result<Vec<RoleRecord>, StoreError>;
}
