//! In-memory fixture data source.
//!
//! Simulates the backend's request/response contract over a small owned
//! dataset (five members, three roles, three org units) so the console
//! can run offline demos. Each store instance owns its collections, so
//! tests construct isolated stores. Every call sleeps a fixed artificial
//! delay before responding.
//!
//! Known limitation kept from the live demo: `GET /members` accepts
//! status/keyword filters but does not apply them -- the full member set
//! is always returned.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use orgdesk_core::auth::LoginResponse;
use orgdesk_core::error::CoreError;
use orgdesk_core::member::{self, CreateMember, Member, MemberStatus};
use orgdesk_core::org::OrgUnit;
use orgdesk_core::page::{Page, PageMeta};
use orgdesk_core::role::{Role, GLOBAL_ORG_ID};
use orgdesk_core::types::Id;

use crate::error::ClientResult;
use crate::request::ApiRequest;
use crate::source::{DataSource, LOGIN_PATH, MEMBERS_PATH, ORGS_PATH, ROLES_PATH};

/// Artificial latency applied to every fixture response.
pub const FIXTURE_DELAY: Duration = Duration::from_millis(600);

/// First identifier handed out for fixture-created members; seeded
/// records use ids below this.
const FIRST_CREATED_ID: Id = 1000;

/// Fixture-backed implementation of [`DataSource`].
pub struct FixtureStore {
    members: Mutex<Vec<Member>>,
    roles: Vec<Role>,
    orgs: Vec<OrgUnit>,
    next_member_id: AtomicI64,
    delay: Duration,
}

impl FixtureStore {
    /// A seeded store with the standard artificial delay.
    pub fn new() -> Self {
        Self::with_delay(FIXTURE_DELAY)
    }

    /// A seeded store with a custom delay (tests pass
    /// [`Duration::ZERO`]).
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            members: Mutex::new(seed_members()),
            roles: seed_roles(),
            orgs: seed_orgs(),
            next_member_id: AtomicI64::new(FIRST_CREATED_ID),
            delay,
        }
    }

    /// Number of member records currently held.
    pub fn member_count(&self) -> usize {
        self.members.lock().expect("members lock poisoned").len()
    }

    /// Dispatch one request against the in-memory collections.
    fn handle(&self, req: &ApiRequest) -> ClientResult<Option<serde_json::Value>> {
        match (req.method.as_str(), req.path.as_str()) {
            // Static success payload; credentials are not validated in
            // fixture mode.
            ("POST", LOGIN_PATH) => {
                let response = LoginResponse {
                    access_token: "fixture-token".to_string(),
                    username: "admin".to_string(),
                    full_name: "Administrator".to_string(),
                    tenant_id: Some(1),
                };
                Ok(Some(serde_json::to_value(response)?))
            }

            // Filters in req.query are accepted but not applied.
            ("GET", MEMBERS_PATH) => {
                let members = self.members.lock().expect("members lock poisoned");
                Ok(Some(envelope(members.clone())?))
            }

            ("POST", MEMBERS_PATH) => {
                let member = self.create_member_record(req)?;
                Ok(Some(serde_json::to_value(member)?))
            }

            ("GET", ROLES_PATH) => Ok(Some(envelope(self.roles.clone())?)),

            ("GET", ORGS_PATH) => Ok(Some(envelope(self.orgs.clone())?)),

            // Unrecognized endpoints are a silent no-op, not an error.
            (method, path) => {
                tracing::debug!(method, path, "Fixture store ignoring unrecognized endpoint");
                Ok(Some(serde_json::json!({})))
            }
        }
    }

    /// Decode and validate a member creation body, assign an id and
    /// timestamps, and append the record.
    fn create_member_record(&self, req: &ApiRequest) -> ClientResult<Member> {
        let body = req
            .body
            .clone()
            .ok_or_else(|| CoreError::Validation("missing request body".to_string()))?;
        let input: CreateMember = serde_json::from_value(body)
            .map_err(|e| CoreError::Validation(format!("malformed member payload: {e}")))?;
        member::validate_new_member(&input)?;

        let now = Utc::now();
        let created = Member {
            id: self.next_member_id.fetch_add(1, Ordering::SeqCst),
            username: input.username,
            full_name: input.full_name,
            nickname: input.nickname,
            email: input.email,
            phone: input.phone,
            status: input.status,
            is_virtual: input.is_virtual,
            agent_type: input.agent_type,
            created_at: now,
            updated_at: now,
        };

        let mut members = self.members.lock().expect("members lock poisoned");
        members.push(created.clone());
        Ok(created)
    }
}

impl Default for FixtureStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataSource for FixtureStore {
    async fn request(&self, req: ApiRequest) -> ClientResult<Option<serde_json::Value>> {
        tokio::time::sleep(self.delay).await;
        self.handle(&req)
    }
}

/// Wrap a collection in the single-page `{ data, meta }` envelope.
fn envelope<T: serde::Serialize>(data: Vec<T>) -> Result<serde_json::Value, serde_json::Error> {
    let meta = PageMeta::single_page(data.len() as i64);
    serde_json::to_value(Page { data, meta })
}

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

fn seed_members() -> Vec<Member> {
    let now = Utc::now();
    let member = |id: Id,
                  username: &str,
                  full_name: Option<&str>,
                  email: &str,
                  status: MemberStatus,
                  is_virtual: bool,
                  agent_type: Option<&str>| Member {
        id,
        username: username.to_string(),
        full_name: full_name.map(str::to_string),
        nickname: None,
        email: email.to_string(),
        phone: None,
        status,
        is_virtual,
        agent_type: agent_type.map(str::to_string),
        created_at: now,
        updated_at: now,
    };

    vec![
        member(1, "avasquez", Some("Ana Vasquez"), "ana@example.com", MemberStatus::Active, false, None),
        member(2, "bchen", Some("Bo Chen"), "bo@example.com", MemberStatus::Active, false, None),
        member(3, "mdiallo", Some("Mara Diallo"), "mara@example.com", MemberStatus::Inactive, false, None),
        member(4, "scout-bot", None, "scout@agents.example.com", MemberStatus::Active, true, Some("bot")),
        member(5, "drafter", None, "drafter@agents.example.com", MemberStatus::Suspended, true, Some("llm")),
    ]
}

fn seed_roles() -> Vec<Role> {
    vec![
        Role {
            id: 1,
            org_id: GLOBAL_ORG_ID,
            code: "admin".to_string(),
            name: "Administrator".to_string(),
            description: Some("Full tenant administration".to_string()),
            is_position: false,
            active: true,
        },
        Role {
            id: 2,
            org_id: 1,
            code: "eng-lead".to_string(),
            name: "Engineering Lead".to_string(),
            description: None,
            is_position: true,
            active: true,
        },
        Role {
            id: 3,
            org_id: 2,
            code: "viewer".to_string(),
            name: "Read-only Viewer".to_string(),
            description: Some("Dashboard access only".to_string()),
            is_position: false,
            active: false,
        },
    ]
}

fn seed_orgs() -> Vec<OrgUnit> {
    vec![
        OrgUnit {
            id: 1,
            name: "Acme Holdings".to_string(),
            kind: "company".to_string(),
            description: None,
            tenant_id: 1,
        },
        OrgUnit {
            id: 2,
            name: "Engineering".to_string(),
            kind: "department".to_string(),
            description: Some("Product engineering".to_string()),
            tenant_id: 1,
        },
        OrgUnit {
            id: 3,
            name: "Platform Team".to_string(),
            kind: "team".to_string(),
            description: None,
            tenant_id: 1,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_counts() {
        let store = FixtureStore::with_delay(Duration::ZERO);
        assert_eq!(store.member_count(), 5);
        assert_eq!(store.roles.len(), 3);
        assert_eq!(store.orgs.len(), 3);
    }

    #[test]
    fn test_created_ids_start_clear_of_seed_ids() {
        let store = FixtureStore::with_delay(Duration::ZERO);
        let max_seed = store
            .members
            .lock()
            .expect("members lock poisoned")
            .iter()
            .map(|m| m.id)
            .max()
            .expect("seed data is non-empty");
        assert!(FIRST_CREATED_ID > max_seed);
        assert_eq!(store.next_member_id.load(Ordering::SeqCst), FIRST_CREATED_ID);
    }
}
