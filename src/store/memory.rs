use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use super::models::{RoleRecord, UserRecord};
use super::{RoleStore, StoreError, UserStore};

/// In-memory directory store. Used by the test suites and embeddable
/// wherever a document database is not wired up.
///
/// The `offline` switch makes every lookup fail with
/// `StoreError::Unavailable`, so callers can verify that infrastructure
/// failures propagate instead of degrading into empty results.
#[derive(Default)]
pub struct MemoryDirectoryStore {
    users: RwLock<HashMap<String, UserRecord>>,
    roles: RwLock<HashMap<String, RoleRecord>>,
    offline: AtomicBool,
}

impl MemoryDirectoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_user(&self, user: UserRecord) {
        self.users.write().unwrap().insert(user.id.clone(), user);
    }

    pub fn insert_role(&self, role: RoleRecord) {
        self.roles.write().unwrap().insert(role.id.clone(), role);
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "in-memory directory store is offline".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryDirectoryStore {
    async fn user_by_id(&self, user_id: &str) -> Result<Option<UserRecord>, StoreError> {
        self.check_online()?;
        Ok(self.users.read().unwrap().get(user_id).cloned())
    }

    async fn active_users(&self) -> Result<Vec<UserRecord>, StoreError> {
        self.check_online()?;
        Ok(self
            .users
            .read()
            .unwrap()
            .values()
            .filter(|u| u.is_active)
            .cloned()
            .collect())
    }

    async fn active_users_reporting_to(
        &self,
        manager_id: &str,
    ) -> Result<Vec<UserRecord>, StoreError> {
        self.check_online()?;
        Ok(self
            .users
            .read()
            .unwrap()
            .values()
            .filter(|u| u.is_active && u.reports_to.as_deref() == Some(manager_id))
            .cloned()
            .collect())
    }

    async fn active_users_with_roles(
        &self,
        role_ids: &[String],
    ) -> Result<Vec<UserRecord>, StoreError> {
        self.check_online()?;
        Ok(self
            .users
            .read()
            .unwrap()
            .values()
            .filter(|u| u.is_active && u.role_ids.iter().any(|r| role_ids.contains(r)))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl RoleStore for MemoryDirectoryStore {
    async fn role_by_id(&self, role_id: &str) -> Result<Option<RoleRecord>, StoreError> {
        self.check_online()?;
        Ok(self.roles.read().unwrap().get(role_id).cloned())
    }

    async fn roles_reporting_to(&self, role_id: &str) -> Result<Vec<RoleRecord>, StoreError> {
        self.check_online()?;
        Ok(self
            .roles
            .read()
            .unwrap()
            .values()
            .filter(|r| r.report_to.as_deref() == Some(role_id))
            .cloned()
            .collect())
    }
}
