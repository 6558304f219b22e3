use crate::application::dto::SessionTokens;
use crate::application::store::load_state::LoadState;
use crate::compliance::domain::User;

/// Session state: the authenticated user plus the token pair backing
/// outgoing requests.
#[derive(Debug, Default)]
pub struct AuthSlice {
    user: LoadState<User>,
    tokens: Option<SessionTokens>,
}

impl AuthSlice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_login(&mut self) {
        self.user = LoadState::Loading;
    }

    pub fn login_succeeded(&mut self, user: User, tokens: SessionTokens) {
        self.user = LoadState::Loaded(user);
        self.tokens = Some(tokens);
    }

    pub fn login_failed(&mut self, message: String) {
        self.user = LoadState::Failed(message);
        self.tokens = None;
    }

    /// Primes the slice from a persisted session without a network call.
    pub fn restore(&mut self, user: User, tokens: SessionTokens) {
        self.user = LoadState::Loaded(user);
        self.tokens = Some(tokens);
    }

    /// Token rotation after a successful refresh; the user stays as-is.
    pub fn replace_tokens(&mut self, tokens: SessionTokens) {
        self.tokens = Some(tokens);
    }

    pub fn clear(&mut self) {
        self.user = LoadState::Idle;
        self.tokens = None;
    }

    pub fn user(&self) -> Option<&User> {
        self.user.loaded()
    }

    pub fn tokens(&self) -> Option<&SessionTokens> {
        self.tokens.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.loaded().is_some() && self.tokens.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.user.error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::domain::Role;
    use uuid::Uuid;

    fn user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "ana@example.com".to_string(),
            name: "Ana".to_string(),
            role: Role::Admin,
        }
    }

    fn tokens() -> SessionTokens {
        SessionTokens {
            token: "tok".to_string(),
            refresh_token: "ref".to_string(),
        }
    }

    #[test]
    fn test_login_flow() {
        let mut auth = AuthSlice::new();
        assert!(!auth.is_authenticated());

        auth.begin_login();
        auth.login_succeeded(user(), tokens());
        assert!(auth.is_authenticated());
        assert_eq!(auth.user().unwrap().name, "Ana");
    }

    #[test]
    fn test_failed_login_clears_tokens() {
        let mut auth = AuthSlice::new();
        auth.login_succeeded(user(), tokens());
        auth.begin_login();
        auth.login_failed("Invalid credentials".to_string());

        assert!(!auth.is_authenticated());
        assert_eq!(auth.error(), Some("Invalid credentials"));
        assert!(auth.tokens().is_none());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut auth = AuthSlice::new();
        auth.restore(user(), tokens());
        assert!(auth.is_authenticated());

        auth.clear();
        assert!(!auth.is_authenticated());
        assert!(auth.user().is_none());
        assert!(auth.error().is_none());
    }

    #[test]
    fn test_replace_tokens_keeps_user() {
        let mut auth = AuthSlice::new();
        auth.restore(user(), tokens());
        auth.replace_tokens(SessionTokens {
            token: "tok2".to_string(),
            refresh_token: "ref2".to_string(),
        });
        assert!(auth.is_authenticated());
        assert_eq!(auth.tokens().unwrap().token, "tok2");
    }
}
