//! Authentication wire types.

use serde::{Deserialize, Serialize};

use crate::types::Id;

/// Request body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub username: String,
    pub full_name: String,
    /// Some deployments return the caller's tenant; absent otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<Id>,
}

/// Identity of the logged-in user, held by the auth context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub username: String,
    pub full_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_tolerates_missing_tenant() {
        let json = r#"{"access_token":"t","username":"admin","full_name":"Administrator"}"#;
        let resp: LoginResponse = serde_json::from_str(json).expect("response parses");
        assert_eq!(resp.tenant_id, None);
        assert_eq!(resp.access_token, "t");
    }
}
