//! Session lifecycle: login, logout, restore.
//!
//! The AuthApi adapter owns the bearer token it attaches to requests;
//! these functions keep the persisted session and the auth slice in step
//! with it.

use crate::application::dto::{SessionTokens, StoredSession};
use crate::application::store::AppStore;
use crate::compliance::domain::User;
use crate::ports::outbound::{AuthApi, SessionStore};
use crate::shared::Result;

/// Logs in, persists the session, and primes the auth slice.
pub async fn login<A: AuthApi, S: SessionStore>(
    api: &A,
    sessions: &S,
    store: &mut AppStore,
    email: &str,
    password: &str,
) -> Result<User> {
    store.auth.begin_login();
    let response = match api.login(email, password).await {
        Ok(response) => response,
        Err(error) => {
            store.auth.login_failed(error.to_string());
            store
                .notifications
                .error(format!("Login failed: {}", error));
            return Err(error);
        }
    };

    let session = StoredSession {
        token: response.token.clone(),
        refresh_token: response.refresh_token.clone(),
        user: response.user.clone(),
    };
    sessions.save(&session)?;
    store
        .auth
        .login_succeeded(response.user.clone(), response.tokens());
    store
        .notifications
        .success(format!("Logged in as {}", response.user.email));
    Ok(response.user)
}

/// Logs out. Server-side invalidation is best-effort: the local session
/// is cleared even when the server call fails.
pub async fn logout<A: AuthApi, S: SessionStore>(
    api: &A,
    sessions: &S,
    store: &mut AppStore,
) -> Result<()> {
    if let Err(error) = api.logout().await {
        store
            .notifications
            .warning(format!("Server logout failed: {}", error));
    }
    sessions.clear()?;
    store.auth.clear();
    store.notifications.info("Logged out");
    Ok(())
}

/// Writes a rotated token pair through to the auth slice and the
/// persisted session.
///
/// The API adapter refreshes in-flight when a request hits a 401, so by
/// the end of a command its pair may no longer match the one restored at
/// startup. Servers that invalidate the old refresh token on rotation
/// would otherwise leave the persisted session dead for the next
/// invocation. A no-op when nothing rotated or no session is active.
pub fn persist_rotation<S: SessionStore>(
    sessions: &S,
    store: &mut AppStore,
    current: Option<SessionTokens>,
) -> Result<()> {
    let Some(current) = current else {
        return Ok(());
    };
    if store.auth.tokens() == Some(&current) {
        return Ok(());
    }
    let Some(user) = store.auth.user().cloned() else {
        return Ok(());
    };
    store.auth.replace_tokens(current.clone());
    sessions.save(&StoredSession {
        token: current.token,
        refresh_token: current.refresh_token,
        user,
    })?;
    Ok(())
}

/// Primes the auth slice from a persisted session, if one exists.
/// No network call is made; an expired token is handled lazily by the
/// 401 refresh path on the next request.
pub fn restore<S: SessionStore>(sessions: &S, store: &mut AppStore) -> Result<Option<StoredSession>> {
    let Some(session) = sessions.load()? else {
        return Ok(None);
    };
    store
        .auth
        .restore(session.user.clone(), session.tokens());
    Ok(Some(session))
}
