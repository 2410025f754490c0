mod levels;
mod reports;
mod scope;

use std::sync::Arc;

use crate::config::HierarchyConfig;
use crate::filter::ScopeFilter;
use crate::store::{RoleStore, StoreError, UserStore};

use levels::LevelResolver;

/// Organizational-hierarchy access control over injected user/role stores.
///
/// The engine is read-only and holds no mutable state, so a single instance
/// can be shared across concurrent request handlers.
pub struct HierarchyEngine {
    users: Arc<dyn UserStore>,
    roles: Arc<dyn RoleStore>,
    config: HierarchyConfig,
}

impl HierarchyEngine {
    pub fn new(
        users: Arc<dyn UserStore>,
        roles: Arc<dyn RoleStore>,
        config: HierarchyConfig,
    ) -> Self {
        Self {
            users,
            roles,
            config,
        }
    }

    /// Build an engine from a single store that serves both lookups, e.g.
    /// `PgDirectoryStore` or `MemoryDirectoryStore`.
    pub fn from_directory<S>(store: Arc<S>, config: HierarchyConfig) -> Self
    where
        S: UserStore + RoleStore + 'static,
    {
        Self {
            users: store.clone(),
            roles: store,
            config,
        }
    }

    pub fn config(&self) -> &HierarchyConfig {
        &self.config
    }

    /// Hierarchy level of a user: 0 at the top, increasing downward, `None`
    /// when undeterminable (no roles, dangling role ids, or a report_to
    /// cycle). Callers treat `None` as "self-only access".
    pub async fn user_level(&self, user_id: &str) -> Result<Option<i64>, StoreError> {
        let user = match self.users.user_by_id(user_id).await? {
            Some(user) => user,
            None => return Ok(None),
        };
        let mut resolver = LevelResolver::new(self.roles.as_ref());
        resolver.user_level(&user).await
    }

    /// Scope filter over the configured owner fields for everything the user
    /// may see. Route handlers apply the result to their lead/task/payment
    /// queries.
    pub async fn accessible_scope_filter(&self, user_id: &str) -> Result<ScopeFilter, StoreError> {
        let ids = self.accessible_user_ids(user_id, true).await?;
        Ok(ScopeFilter::new(ids).owner_fields(self.config.owner_fields.clone()))
    }
}
