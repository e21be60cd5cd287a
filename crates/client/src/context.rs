//! Auth context: session lifecycle and active-store selection.
//!
//! One [`AuthContext`] is constructed at application start and passed by
//! reference to whatever drives the UI. It owns the session store, both
//! backing stores, and the handle to the currently active one. The mock
//! flag and the active handle are swapped together under one lock so
//! they can never disagree.

use std::sync::{Arc, RwLock};

use orgdesk_core::auth::{Credentials, CurrentUser};
use orgdesk_core::types::Id;

use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::fixture::FixtureStore;
use crate::remote::RemoteStore;
use crate::session::SessionStore;
use crate::source::DataSource;
use crate::storage::SessionStorage;

/// Tenant recorded for a fresh session when the login response does not
/// carry one.
pub const DEFAULT_TENANT_ID: Id = 1;

/// The active backing store plus the flag that selected it.
struct ActiveSource {
    source: Arc<dyn DataSource>,
    mock: bool,
}

/// Process-lifetime session and data-source state.
pub struct AuthContext {
    session: Arc<SessionStore>,
    remote: Arc<RemoteStore>,
    fixture: Arc<FixtureStore>,
    active: RwLock<ActiveSource>,
    current_user: RwLock<Option<CurrentUser>>,
}

impl AuthContext {
    /// Build the context from configuration: construct the session store
    /// over `storage` (reading persisted token/tenant), both backing
    /// stores, and select the initial mode.
    pub fn new(config: &ClientConfig, storage: Box<dyn SessionStorage>) -> Self {
        let session = Arc::new(SessionStore::new(storage));
        let remote = Arc::new(RemoteStore::new(config.api_url.clone(), Arc::clone(&session)));
        let fixture = Arc::new(FixtureStore::new());
        Self::with_stores(session, remote, fixture, config.mock_mode)
    }

    /// Assemble a context from pre-built parts. Tests use this to inject
    /// a zero-delay fixture store or a remote store aimed at a stub
    /// backend.
    pub fn with_stores(
        session: Arc<SessionStore>,
        remote: Arc<RemoteStore>,
        fixture: Arc<FixtureStore>,
        mock_mode: bool,
    ) -> Self {
        let source: Arc<dyn DataSource> = if mock_mode {
            Arc::clone(&fixture) as Arc<dyn DataSource>
        } else {
            Arc::clone(&remote) as Arc<dyn DataSource>
        };

        tracing::info!(mock = mock_mode, "Auth context initialized");

        Self {
            session,
            remote,
            fixture,
            active: RwLock::new(ActiveSource {
                source,
                mock: mock_mode,
            }),
            current_user: RwLock::new(None),
        }
    }

    /// The currently active data source. Views fetch through this handle
    /// rather than picking a store themselves.
    pub fn source(&self) -> Arc<dyn DataSource> {
        Arc::clone(&self.active.read().expect("active lock poisoned").source)
    }

    /// The shared session store.
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// Whether the fixture store is active.
    pub fn is_mock(&self) -> bool {
        self.active.read().expect("active lock poisoned").mock
    }

    /// Switch between fixture and remote mode. The session store is not
    /// touched -- persisted token/tenant survive mode toggles.
    pub fn set_mock(&self, enabled: bool) {
        let mut active = self.active.write().expect("active lock poisoned");
        active.mock = enabled;
        active.source = if enabled {
            Arc::clone(&self.fixture) as Arc<dyn DataSource>
        } else {
            Arc::clone(&self.remote) as Arc<dyn DataSource>
        };
        tracing::info!(mock = enabled, "Switched data source mode");
    }

    /// True when mock mode is on, or a bearer token is present.
    pub fn is_authenticated(&self) -> bool {
        self.is_mock() || self.session.has_token()
    }

    /// Identity of the logged-in user, if any.
    pub fn current_user(&self) -> Option<CurrentUser> {
        self.current_user
            .read()
            .expect("current_user lock poisoned")
            .clone()
    }

    /// Authenticate against the active store and record the session.
    ///
    /// On success the returned token is persisted, the tenant id is
    /// recorded (the response's tenant when present, otherwise
    /// [`DEFAULT_TENANT_ID`] for a fresh session), and the current-user
    /// state is set. Failures are re-raised to the caller unmodified.
    pub async fn login(&self, credentials: &Credentials) -> ClientResult<CurrentUser> {
        let response = self.source().login(credentials).await?;

        self.session.set_token(&response.access_token)?;
        match response.tenant_id {
            Some(tenant) => self.session.set_tenant_id(tenant)?,
            None => {
                if self.session.tenant_id().is_none() {
                    self.session.set_tenant_id(DEFAULT_TENANT_ID)?;
                }
            }
        }

        let user = CurrentUser {
            username: response.username,
            full_name: response.full_name,
        };
        *self
            .current_user
            .write()
            .expect("current_user lock poisoned") = Some(user.clone());

        tracing::info!(username = %user.username, "Logged in");
        Ok(user)
    }

    /// Tear the session down: clear the token slot and the current-user
    /// state. The tenant id is left intact.
    pub fn logout(&self) -> ClientResult<()> {
        self.session.clear_token()?;
        *self
            .current_user
            .write()
            .expect("current_user lock poisoned") = None;
        tracing::info!("Logged out");
        Ok(())
    }
}
