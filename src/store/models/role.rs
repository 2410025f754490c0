use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A named position in the organization. `report_to == None` marks a root;
/// multiple roots are allowed. Dangling `report_to` pointers occur in
/// production data and are tolerated by the level resolver.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoleRecord {
    pub id: String,
    pub name: String,
    pub report_to: Option<String>,
}

impl RoleRecord {
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().simple().to_string(),
            name: name.into(),
            report_to: None,
        }
    }

    pub fn under(name: impl Into<String>, parent: &RoleRecord) -> Self {
        Self {
            id: Uuid::new_v4().simple().to_string(),
            name: name.into(),
            report_to: Some(parent.id.clone()),
        }
    }
}
