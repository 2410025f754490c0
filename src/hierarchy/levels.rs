use std::collections::{HashMap, HashSet};
use tracing::warn;

use crate::store::{RoleStore, StoreError, UserRecord};

/// Resolves hierarchy depth over the role `report_to` graph: 0 at a root,
/// parent + 1 below it, `None` when the level cannot be determined.
///
/// One resolver lives for the duration of a single engine call and memoizes
/// resolved levels by role id, since many users share the same roles.
pub(crate) struct LevelResolver<'a> {
    roles: &'a dyn RoleStore,
    cache: HashMap<String, Option<i64>>,
}

impl<'a> LevelResolver<'a> {
    pub(crate) fn new(roles: &'a dyn RoleStore) -> Self {
        Self {
            roles,
            cache: HashMap::new(),
        }
    }

    /// Level of a single role. Walks the `report_to` chain upward with a
    /// visited set; a revisited role id means a cycle and the whole walked
    /// path has no defined level. A missing parent role ends the chain as if
    /// the orphaned role were a root.
    pub(crate) async fn role_level(&mut self, role_id: &str) -> Result<Option<i64>, StoreError> {
        if let Some(&cached) = self.cache.get(role_id) {
            return Ok(cached);
        }

        let mut current = match self.roles.role_by_id(role_id).await? {
            Some(role) => role,
            None => {
                self.cache.insert(role_id.to_string(), None);
                return Ok(None);
            }
        };

        let mut visited: HashSet<String> = HashSet::new();
        let mut path: Vec<String> = Vec::new();

        // Level of the last role pushed onto `path`.
        let last_level: Option<i64> = loop {
            if !visited.insert(current.id.clone()) {
                warn!(role_id = %current.id, "report_to cycle detected; hierarchy level unknown");
                break None;
            }
            path.push(current.id.clone());

            let parent_id = match current.report_to.as_deref() {
                None | Some("") => break Some(0),
                Some(parent_id) => parent_id.to_string(),
            };

            if let Some(&cached) = self.cache.get(parent_id.as_str()) {
                break cached.map(|level| level + 1);
            }

            match self.roles.role_by_id(&parent_id).await? {
                Some(parent) => current = parent,
                // Dangling report_to pointer: treat the orphaned role as a root.
                None => break Some(0),
            }
        };

        let mut level = last_level;
        for id in path.iter().rev() {
            self.cache.insert(id.clone(), level);
            level = level.map(|l| l + 1);
        }

        Ok(self.cache.get(role_id).copied().unwrap_or(last_level))
    }

    /// Level of a user: the minimum defined level across their roles, so a
    /// user holding both a senior and a junior role is treated at their most
    /// senior position. `None` when no role yields a defined level.
    pub(crate) async fn user_level(
        &mut self,
        user: &UserRecord,
    ) -> Result<Option<i64>, StoreError> {
        let mut best: Option<i64> = None;
        for role_id in &user.role_ids {
            if let Some(level) = self.role_level(role_id).await? {
                best = Some(best.map_or(level, |b| b.min(level)));
            }
        }
        Ok(best)
    }
}
