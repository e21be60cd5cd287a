//! The data-source facade.
//!
//! [`DataSource`] is the single entry point for all reads and writes.
//! It exposes one low-level [`request`](DataSource::request) operation
//! plus named, typed operations built on it as default methods, so both
//! backing stores (remote, fixture) only implement the low-level entry
//! point.

use async_trait::async_trait;

use orgdesk_core::auth::{Credentials, LoginResponse};
use orgdesk_core::member::{self, CreateMember, Member, MemberQuery};
use orgdesk_core::org::OrgUnit;
use orgdesk_core::page::Page;
use orgdesk_core::role::Role;

use crate::error::{ClientError, ClientResult};
use crate::request::ApiRequest;

/// Endpoint paths of the backend contract.
pub const LOGIN_PATH: &str = "/auth/login";
pub const MEMBERS_PATH: &str = "/members";
pub const ROLES_PATH: &str = "/roles";
pub const ORGS_PATH: &str = "/orgs";

/// A backing store for the admin console's data.
///
/// `Ok(None)` from [`request`](Self::request) means the endpoint
/// produced no body (HTTP 204); typed operations that require a body
/// map that to [`ClientError::MissingBody`].
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Low-level request entry point.
    async fn request(&self, req: ApiRequest) -> ClientResult<Option<serde_json::Value>>;

    /// Authenticate with username + password.
    async fn login(&self, credentials: &Credentials) -> ClientResult<LoginResponse> {
        let body = serde_json::to_value(credentials)?;
        let value = self
            .request(ApiRequest::post(LOGIN_PATH, body))
            .await?
            .ok_or(ClientError::MissingBody)?;
        Ok(serde_json::from_value(value)?)
    }

    /// List members, optionally filtered by status/keyword.
    async fn list_members(&self, query: &MemberQuery) -> ClientResult<Page<Member>> {
        let value = self
            .request(ApiRequest::get(MEMBERS_PATH).with_query(query.to_query()))
            .await?
            .ok_or(ClientError::MissingBody)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Create a new member. The payload is validated client-side before
    /// submission.
    async fn create_member(&self, input: &CreateMember) -> ClientResult<Member> {
        member::validate_new_member(input)?;
        let body = serde_json::to_value(input)?;
        let value = self
            .request(ApiRequest::post(MEMBERS_PATH, body))
            .await?
            .ok_or(ClientError::MissingBody)?;
        Ok(serde_json::from_value(value)?)
    }

    /// List all role definitions.
    async fn list_roles(&self) -> ClientResult<Page<Role>> {
        let value = self
            .request(ApiRequest::get(ROLES_PATH))
            .await?
            .ok_or(ClientError::MissingBody)?;
        Ok(serde_json::from_value(value)?)
    }

    /// List all organizational units.
    async fn list_orgs(&self) -> ClientResult<Page<OrgUnit>> {
        let value = self
            .request(ApiRequest::get(ORGS_PATH))
            .await?
            .ok_or(ClientError::MissingBody)?;
        Ok(serde_json::from_value(value)?)
    }
}
