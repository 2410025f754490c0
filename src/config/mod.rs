use serde::{Deserialize, Serialize};
use std::env;

/// Tunables for the hierarchy engine. Built once at startup and handed to
/// `HierarchyEngine::new` — there is intentionally no global singleton.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HierarchyConfig {
    /// Role name that grants the full-organization bypass.
    pub admin_role_name: String,
    /// Ownership columns that scope filters are built against.
    pub owner_fields: Vec<String>,
    pub debug_logging: bool,
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            admin_role_name: "admin".to_string(),
            owner_fields: vec!["assigned_to".to_string(), "created_by".to_string()],
            debug_logging: false,
        }
    }
}

impl HierarchyConfig {
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("HIERARCHY_ADMIN_ROLE") {
            if !v.trim().is_empty() {
                self.admin_role_name = v.trim().to_string();
            }
        }
        if let Ok(v) = env::var("HIERARCHY_OWNER_FIELDS") {
            let fields: Vec<String> = v
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if !fields.is_empty() {
                self.owner_fields = fields;
            }
        }
        if let Ok(v) = env::var("HIERARCHY_DEBUG_LOGGING") {
            self.debug_logging = v.parse().unwrap_or(self.debug_logging);
        }
        self
    }
}
