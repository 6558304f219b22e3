use crate::compliance::domain::User;
use serde::{Deserialize, Serialize};

/// The bearer/refresh token pair issued by `/auth/login` and rotated by
/// `/auth/refresh`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionTokens {
    pub token: String,
    pub refresh_token: String,
}

/// Response body of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub refresh_token: String,
    pub user: User,
}

impl LoginResponse {
    pub fn tokens(&self) -> SessionTokens {
        SessionTokens {
            token: self.token.clone(),
            refresh_token: self.refresh_token.clone(),
        }
    }
}

/// Session state persisted between invocations.
///
/// The field names mirror the fixed storage keys the web dashboard used
/// for its browser storage, so a session written by either client reads
/// back identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    #[serde(rename = "grc.token")]
    pub token: String,
    #[serde(rename = "grc.refreshToken")]
    pub refresh_token: String,
    #[serde(rename = "grc.user")]
    pub user: User,
}

impl StoredSession {
    pub fn tokens(&self) -> SessionTokens {
        SessionTokens {
            token: self.token.clone(),
            refresh_token: self.refresh_token.clone(),
        }
    }
}
