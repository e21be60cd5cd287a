//! Organizational unit entity.

use serde::{Deserialize, Serialize};

use crate::types::Id;

/// An organizational unit (company, department, team, ...).
///
/// Serializes camelCase; the classification field is named `type` on the
/// wire but `kind` in Rust.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgUnit {
    pub id: Id,
    pub name: String,
    /// Free-form classification (e.g. `"company"`, `"department"`, `"team"`).
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Owning tenant.
    pub tenant_id: Id,
}
