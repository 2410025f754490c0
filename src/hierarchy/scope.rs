use std::collections::HashSet;
use tracing::{debug, warn};

use crate::store::{StoreError, UserRecord};

use super::levels::LevelResolver;
use super::HierarchyEngine;

impl HierarchyEngine {
    /// Whether the user holds the admin role, either via the denormalized
    /// role-name list (exact match) or via a role id resolving to a role
    /// named like the configured admin role (case-insensitive).
    ///
    /// Kept as a named capability check so the hardcoded role-name match can
    /// later be swapped for a permission-flag system without touching call
    /// sites.
    pub async fn is_admin(&self, user_id: &str) -> Result<bool, StoreError> {
        match self.users.user_by_id(user_id).await? {
            Some(user) if user.is_active => self.is_admin_record(&user).await,
            _ => Ok(false),
        }
    }

    pub(super) async fn is_admin_record(&self, user: &UserRecord) -> Result<bool, StoreError> {
        let admin = &self.config.admin_role_name;
        if user.role_names.iter().any(|name| name == admin) {
            return Ok(true);
        }
        for role_id in &user.role_ids {
            if let Some(role) = self.roles.role_by_id(role_id).await? {
                if role.name.eq_ignore_ascii_case(admin) {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    /// All user ids the given user may view or act upon: themselves (when
    /// `include_self`), plus every active user at an equal-or-deeper
    /// hierarchy level. Admins get the full active-user set.
    ///
    /// Undeterminable hierarchy degrades to the seed set rather than failing
    /// open; only store failures propagate as errors.
    pub async fn accessible_user_ids(
        &self,
        user_id: &str,
        include_self: bool,
    ) -> Result<HashSet<String>, StoreError> {
        let mut accessible = HashSet::new();
        if include_self {
            accessible.insert(user_id.to_string());
        }

        let user = match self.users.user_by_id(user_id).await? {
            Some(user) if user.is_active => user,
            _ => {
                warn!(%user_id, "unknown or inactive user; access scope restricted to self");
                return Ok(accessible);
            }
        };

        if self.is_admin_record(&user).await? {
            for other in self.users.active_users().await? {
                accessible.insert(other.id);
            }
            return Ok(accessible);
        }

        let mut resolver = LevelResolver::new(self.roles.as_ref());
        let level = match resolver.user_level(&user).await? {
            Some(level) => level,
            None => {
                warn!(%user_id, "hierarchy level undeterminable; access scope restricted to self");
                return Ok(accessible);
            }
        };

        // Lower numbers are more senior, so "own level and below" means a
        // numerically greater-or-equal level.
        for other in self.users.active_users().await? {
            if other.id == user.id {
                continue;
            }
            if let Some(other_level) = resolver.user_level(&other).await? {
                if other_level >= level {
                    accessible.insert(other.id);
                }
            }
        }

        if self.config.debug_logging {
            debug!(%user_id, count = accessible.len(), "resolved access scope");
        }
        Ok(accessible)
    }

    /// Whether `user_id` may act on a resource owned by `resource_owner_id`.
    /// Denial is a `false` return, never an error.
    pub async fn can_access_resource(
        &self,
        user_id: &str,
        resource_owner_id: &str,
    ) -> Result<bool, StoreError> {
        if user_id == resource_owner_id {
            return Ok(true);
        }
        if self.is_admin(user_id).await? {
            return Ok(true);
        }
        let accessible = self.accessible_user_ids(user_id, true).await?;
        Ok(accessible.contains(resource_owner_id))
    }
}
