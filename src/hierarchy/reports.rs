use std::collections::{HashSet, VecDeque};

use crate::store::StoreError;

use super::HierarchyEngine;

impl HierarchyEngine {
    /// Active users whose `reports_to` field points at the given user.
    pub async fn direct_reports(&self, user_id: &str) -> Result<Vec<String>, StoreError> {
        let reports = self.users.active_users_reporting_to(user_id).await?;
        Ok(reports.into_iter().map(|u| u.id).collect())
    }

    /// All transitive reports via the `reports_to` field, breadth-first.
    /// The visited set covers user ids (independent of the role-cycle guard
    /// in level resolution), so a user is never their own subordinate and
    /// cyclic reports_to data terminates.
    pub async fn subordinates_recursive(&self, user_id: &str) -> Result<Vec<String>, StoreError> {
        let mut visited: HashSet<String> = HashSet::new();
        visited.insert(user_id.to_string());

        let mut queue: VecDeque<String> = VecDeque::new();
        queue.push_back(user_id.to_string());

        let mut subordinates = Vec::new();
        while let Some(current) = queue.pop_front() {
            for report in self.users.active_users_reporting_to(&current).await? {
                if visited.insert(report.id.clone()) {
                    subordinates.push(report.id.clone());
                    queue.push_back(report.id);
                }
            }
        }
        Ok(subordinates)
    }

    /// Alternate path for records where `reports_to` is unpopulated: active
    /// holders of any role reporting to the user's primary (first) role.
    pub async fn subordinates_by_role(&self, user_id: &str) -> Result<Vec<String>, StoreError> {
        let user = match self.users.user_by_id(user_id).await? {
            Some(user) => user,
            None => return Ok(vec![]),
        };
        let Some(primary_role) = user.role_ids.first() else {
            return Ok(vec![]);
        };

        let child_roles = self.roles.roles_reporting_to(primary_role).await?;
        if child_roles.is_empty() {
            return Ok(vec![]);
        }
        let role_ids: Vec<String> = child_roles.into_iter().map(|r| r.id).collect();

        let holders = self.users.active_users_with_roles(&role_ids).await?;
        Ok(holders
            .into_iter()
            .filter(|u| u.id != user_id)
            .map(|u| u.id)
            .collect())
    }

    /// Team membership as the dashboard and team-structure handlers consume
    /// it: the explicit reports_to walk is authoritative, the role graph is
    /// consulted only when it comes back empty. Production data populates
    /// one or the other inconsistently; the two are never merged.
    pub async fn team_member_ids(&self, user_id: &str) -> Result<Vec<String>, StoreError> {
        let reports = self.subordinates_recursive(user_id).await?;
        if !reports.is_empty() {
            return Ok(reports);
        }
        self.subordinates_by_role(user_id).await
    }
}
