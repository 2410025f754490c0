#![allow(dead_code)]

use std::sync::Arc;

use crm_hierarchy::config::HierarchyConfig;
use crm_hierarchy::hierarchy::HierarchyEngine;
use crm_hierarchy::store::{MemoryDirectoryStore, RoleRecord, UserRecord};

/// Shared org-chart fixture over the in-memory directory store.
pub struct OrgFixture {
    pub store: Arc<MemoryDirectoryStore>,
}

impl OrgFixture {
    pub fn new() -> Self {
        Self {
            store: Arc::new(MemoryDirectoryStore::new()),
        }
    }

    pub fn engine(&self) -> HierarchyEngine {
        HierarchyEngine::from_directory(self.store.clone(), HierarchyConfig::default())
    }

    pub fn engine_with(&self, config: HierarchyConfig) -> HierarchyEngine {
        HierarchyEngine::from_directory(self.store.clone(), config)
    }

    /// Insert a root role and return its record.
    pub fn root_role(&self, name: &str) -> RoleRecord {
        let role = RoleRecord::root(name);
        self.store.insert_role(role.clone());
        role
    }

    /// Insert a role reporting to `parent` and return its record.
    pub fn role_under(&self, name: &str, parent: &RoleRecord) -> RoleRecord {
        let role = RoleRecord::under(name, parent);
        self.store.insert_role(role.clone());
        role
    }

    /// Insert a role whose report_to points at its own id (self-cycle).
    pub fn self_cycle_role(&self, name: &str) -> RoleRecord {
        let mut role = RoleRecord::root(name);
        role.report_to = Some(role.id.clone());
        self.store.insert_role(role.clone());
        role
    }

    /// Insert an active user holding the given role.
    pub fn user(&self, name: &str, role: &RoleRecord) -> UserRecord {
        let user = UserRecord::new(name).with_role(role);
        self.store.insert_user(user.clone());
        user
    }

    /// Insert an active user with no roles at all.
    pub fn roleless_user(&self, name: &str) -> UserRecord {
        let user = UserRecord::new(name);
        self.store.insert_user(user.clone());
        user
    }

    /// Insert an active user wired to a manager via the reports_to field.
    pub fn user_reporting_to(
        &self,
        name: &str,
        role: &RoleRecord,
        manager: &UserRecord,
    ) -> UserRecord {
        let user = UserRecord::new(name)
            .with_role(role)
            .reporting_to(manager.id.clone());
        self.store.insert_user(user.clone());
        user
    }

    /// Insert a deactivated user holding the given role.
    pub fn inactive_user(&self, name: &str, role: &RoleRecord) -> UserRecord {
        let user = UserRecord::new(name).with_role(role).deactivated();
        self.store.insert_user(user.clone());
        user
    }

    /// Standard three-tier chart used across the suites:
    /// Root(0) <- Mid(1) <- Leaf(2), with alice/bob/carol holding them.
    pub fn three_tier(&self) -> ThreeTier {
        let root = self.root_role("manager");
        let mid = self.role_under("team-lead", &root);
        let leaf = self.role_under("agent", &mid);
        let alice = self.user("alice", &root);
        let bob = self.user("bob", &mid);
        let carol = self.user("carol", &leaf);
        ThreeTier {
            root,
            mid,
            leaf,
            alice,
            bob,
            carol,
        }
    }
}

pub struct ThreeTier {
    pub root: RoleRecord,
    pub mid: RoleRecord,
    pub leaf: RoleRecord,
    pub alice: UserRecord,
    pub bob: UserRecord,
    pub carol: UserRecord,
}
