//! Role entity.
//!
//! Roles are scoped to an owning org unit; `org_id` 0 denotes a
//! tenant-wide role. Role records serialize snake_case.

use serde::{Deserialize, Serialize};

use crate::types::Id;

/// Sentinel `org_id` for roles that apply across the whole tenant.
pub const GLOBAL_ORG_ID: Id = 0;

/// A role definition as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: Id,
    /// Owning org unit; [`GLOBAL_ORG_ID`] for tenant-wide roles.
    pub org_id: Id,
    /// Short tag, unique within an org scope.
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Titled position (true) vs. general permission grouping (false).
    pub is_position: bool,
    pub active: bool,
}

impl Role {
    /// Whether this role applies tenant-wide rather than to one org unit.
    pub fn is_global(&self) -> bool {
        self.org_id == GLOBAL_ORG_ID
    }
}
