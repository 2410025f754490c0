use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::RoleRecord;

/// Directory view of a CRM user as the hierarchy engine consumes it.
/// `role_names` is the denormalized name list carried alongside `role_ids`
/// in the production documents; the admin check consults both.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub role_ids: Vec<String>,
    pub role_names: Vec<String>,
    pub reports_to: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().simple().to_string(),
            name: name.into(),
            role_ids: vec![],
            role_names: vec![],
            reports_to: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_role(mut self, role: &RoleRecord) -> Self {
        self.role_ids.push(role.id.clone());
        self.role_names.push(role.name.clone());
        self
    }

    /// Attach a role id that does not resolve to a stored role.
    pub fn with_role_id(mut self, role_id: impl Into<String>) -> Self {
        self.role_ids.push(role_id.into());
        self
    }

    pub fn reporting_to(mut self, manager_id: impl Into<String>) -> Self {
        self.reports_to = Some(manager_id.into());
        self
    }

    pub fn deactivated(mut self) -> Self {
        self.is_active = false;
        self
    }
}
