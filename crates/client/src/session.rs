//! Session store: bearer token and active tenant id.
//!
//! Both slots are mirrored in memory and in durable storage. The store
//! reads persisted state once at construction; logout clears only the
//! token slot -- the tenant id survives so the next login lands in the
//! same tenant. Token freshness is not checked client-side.

use std::sync::RwLock;

use orgdesk_core::types::Id;

use crate::error::ClientResult;
use crate::storage::{SessionStorage, TENANT_KEY, TOKEN_KEY};

/// Holds the current session's token and tenant id.
pub struct SessionStore {
    storage: Box<dyn SessionStorage>,
    token: RwLock<Option<String>>,
    tenant_id: RwLock<Option<Id>>,
}

impl SessionStore {
    /// Construct the store, reading any persisted token/tenant from
    /// `storage`.
    pub fn new(storage: Box<dyn SessionStorage>) -> Self {
        let token = storage.get(TOKEN_KEY);
        // A tenant entry that fails to parse is ignored rather than
        // failing startup.
        let tenant_id = storage.get(TENANT_KEY).and_then(|raw| raw.parse().ok());

        Self {
            storage,
            token: RwLock::new(token),
            tenant_id: RwLock::new(tenant_id),
        }
    }

    /// Store a bearer token in memory and durable storage.
    pub fn set_token(&self, token: &str) -> ClientResult<()> {
        *self.token.write().expect("token lock poisoned") = Some(token.to_string());
        self.storage.set(TOKEN_KEY, token)?;
        Ok(())
    }

    /// Current bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.token.read().expect("token lock poisoned").clone()
    }

    /// Whether a bearer token is present.
    pub fn has_token(&self) -> bool {
        self.token.read().expect("token lock poisoned").is_some()
    }

    /// Store the active tenant id in memory and durable storage.
    pub fn set_tenant_id(&self, id: Id) -> ClientResult<()> {
        *self.tenant_id.write().expect("tenant lock poisoned") = Some(id);
        self.storage.set(TENANT_KEY, &id.to_string())?;
        Ok(())
    }

    /// Active tenant id, if any.
    pub fn tenant_id(&self) -> Option<Id> {
        *self.tenant_id.read().expect("tenant lock poisoned")
    }

    /// Clear the token slot (logout). The tenant id is left intact.
    pub fn clear_token(&self) -> ClientResult<()> {
        *self.token.write().expect("token lock poisoned") = None;
        self.storage.remove(TOKEN_KEY)?;
        Ok(())
    }
}
