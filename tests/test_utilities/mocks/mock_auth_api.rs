use anyhow::bail;
use async_trait::async_trait;

use grc_console::application::dto::{LoginResponse, SessionTokens};
use grc_console::compliance::domain::User;
use grc_console::prelude::*;

use crate::test_utilities::fixtures;

/// Mock AuthApi with per-operation failure injection.
pub struct MockAuthApi {
    pub user: User,
    pub login_error: Option<String>,
    pub refresh_error: Option<String>,
    pub logout_error: Option<String>,
}

impl MockAuthApi {
    pub fn new() -> Self {
        Self {
            user: fixtures::user(),
            login_error: None,
            refresh_error: None,
            logout_error: None,
        }
    }

    pub fn with_login_error(mut self, message: &str) -> Self {
        self.login_error = Some(message.to_string());
        self
    }

    pub fn with_logout_error(mut self, message: &str) -> Self {
        self.logout_error = Some(message.to_string());
        self
    }
}

impl Default for MockAuthApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthApi for MockAuthApi {
    async fn login(&self, _email: &str, _password: &str) -> Result<LoginResponse> {
        if let Some(message) = &self.login_error {
            bail!("{}", message);
        }
        Ok(LoginResponse {
            token: "token-1".to_string(),
            refresh_token: "refresh-1".to_string(),
            user: self.user.clone(),
        })
    }

    async fn refresh(&self, _refresh_token: &str) -> Result<SessionTokens> {
        if let Some(message) = &self.refresh_error {
            bail!("{}", message);
        }
        Ok(SessionTokens {
            token: "token-2".to_string(),
            refresh_token: "refresh-2".to_string(),
        })
    }

    async fn logout(&self) -> Result<()> {
        if let Some(message) = &self.logout_error {
            bail!("{}", message);
        }
        Ok(())
    }

    async fn current_user(&self) -> Result<User> {
        Ok(self.user.clone())
    }
}
