//! Member entity and DTOs.
//!
//! A member is either a human account or a virtual (automated) agent;
//! `agent_type` tags the automation flavor and is only meaningful when
//! `is_virtual` is set. The backend serializes member records in
//! camelCase (`isVirtual`, `agentType`, `createdAt`).

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{Id, Timestamp};

/// Lifecycle status of a member account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Active,
    Inactive,
    Suspended,
}

impl MemberStatus {
    /// Wire representation, as used in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Active => "active",
            MemberStatus::Inactive => "inactive",
            MemberStatus::Suspended => "suspended",
        }
    }
}

impl Default for MemberStatus {
    fn default() -> Self {
        MemberStatus::Active
    }
}

/// A membership record as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: Id,
    /// Unique human-readable handle.
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub status: MemberStatus,
    /// Distinguishes automated agents from human accounts.
    pub is_virtual: bool,
    /// Free-form automation tag (e.g. `"llm"`, `"bot"`, `"workflow"`).
    /// Only meaningful when `is_virtual` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_type: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new member (server assigns id and timestamps).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMember {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: MemberStatus,
    #[serde(default)]
    pub is_virtual: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_type: Option<String>,
}

/// Filter parameters for member list requests (`?status=&keyword=`).
#[derive(Debug, Clone, Default)]
pub struct MemberQuery {
    pub status: Option<MemberStatus>,
    pub keyword: Option<String>,
}

impl MemberQuery {
    /// Serialize to query pairs. Absent filters are excluded entirely
    /// rather than sent as empty values.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status".to_string(), status.as_str().to_string()));
        }
        if let Some(keyword) = &self.keyword {
            pairs.push(("keyword".to_string(), keyword.clone()));
        }
        pairs
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a member creation payload before submission.
///
/// Checks the username is non-empty, the email is plausible, and the
/// `agent_type` tag is only present on virtual members.
pub fn validate_new_member(input: &CreateMember) -> Result<(), CoreError> {
    if input.username.trim().is_empty() {
        return Err(CoreError::Validation("username must not be empty".to_string()));
    }

    let email = input.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(CoreError::Validation(format!("invalid email address: '{email}'")));
    }

    if input.agent_type.is_some() && !input.is_virtual {
        return Err(CoreError::Validation(
            "agent_type is only allowed on virtual members".to_string(),
        ));
    }

    Ok(())
}
