use crate::application::dto::SessionTokens;
use crate::shared::ApiError;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;
use std::sync::RwLock;
use std::time::Duration;

/// Shape of the server's error body. Servers in the wild use either
/// `message` or `error`; both are accepted.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(alias = "error")]
    message: Option<String>,
}

/// Thin wrapper around reqwest for the compliance API.
///
/// Responsibilities: base-URL resolution, bearer-token attachment, JSON
/// decode, flattening error responses into a single message, and the
/// one-shot 401 refresh-and-retry. There is no other retry or backoff;
/// a failed request surfaces its message and nothing else happens.
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
    tokens: RwLock<Option<SessionTokens>>,
}

impl RestClient {
    const TIMEOUT_SECONDS: u64 = 15;

    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("grc-console/{}", version);
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()
            .map_err(ApiError::from)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            tokens: RwLock::new(None),
        })
    }

    // ---- session handling ----

    pub fn set_session(&self, tokens: SessionTokens) {
        *self.tokens.write().expect("token lock poisoned") = Some(tokens);
    }

    pub fn clear_session(&self) {
        *self.tokens.write().expect("token lock poisoned") = None;
    }

    pub fn session(&self) -> Option<SessionTokens> {
        self.tokens.read().expect("token lock poisoned").clone()
    }

    pub fn has_session(&self) -> bool {
        self.session().is_some()
    }

    fn bearer(&self) -> Option<String> {
        self.session().map(|t| t.token)
    }

    // ---- request helpers used by the API trait impls ----

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        let response = self
            .execute(|| self.http.get(&url).query(query))
            .await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        let response = self.execute(|| self.http.post(&url).json(body)).await?;
        Self::decode(response).await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        let response = self.execute(|| self.http.put(&url).json(body)).await?;
        Self::decode(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path);
        self.execute(|| self.http.delete(&url)).await?;
        Ok(())
    }

    /// Multipart form upload with a single file field.
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        field: &'static str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        // The form is rebuilt on each attempt since multipart bodies
        // cannot be reused after a send.
        let response = self
            .execute(|| {
                let part =
                    reqwest::multipart::Part::bytes(bytes.clone()).file_name(file_name.to_string());
                let form = reqwest::multipart::Form::new().part(field, part);
                self.http.post(&url).multipart(form)
            })
            .await?;
        Self::decode(response).await
    }

    // ---- core send path ----

    /// Sends a request with the current bearer token. On a 401 with a
    /// refresh token at hand, refreshes once and retries once; if the
    /// refresh fails, the original 401 error propagates untouched.
    async fn execute<F>(&self, build: F) -> Result<reqwest::Response, ApiError>
    where
        F: Fn() -> reqwest::RequestBuilder,
    {
        let response = self.send_with_bearer(&build).await?;
        if response.status().is_success() {
            return Ok(response);
        }

        let original = Self::normalize_error(response).await;
        if !original.is_unauthorized() {
            return Err(original);
        }
        let refresh_token = match self.session() {
            Some(tokens) => tokens.refresh_token,
            None => return Err(original),
        };
        if self.refresh_session(&refresh_token).await.is_err() {
            return Err(original);
        }

        let retried = self.send_with_bearer(&build).await?;
        Self::check(retried).await
    }

    async fn send_with_bearer<F>(&self, build: &F) -> Result<reqwest::Response, ApiError>
    where
        F: Fn() -> reqwest::RequestBuilder,
    {
        let mut request = build();
        if let Some(token) = self.bearer() {
            request = request.bearer_auth(token);
        }
        request.send().await.map_err(ApiError::from)
    }

    /// `POST /auth/refresh`. On success the rotated pair replaces the
    /// current one, so the retried request carries the fresh token.
    async fn refresh_session(&self, refresh_token: &str) -> Result<(), ApiError> {
        let url = self.url("/auth/refresh");
        let body = serde_json::json!({ "refreshToken": refresh_token });
        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(ApiError::from)?;
        let response = Self::check(response).await?;
        let tokens: SessionTokens = Self::decode(response).await?;
        self.set_session(tokens);
        Ok(())
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(Self::normalize_error(response).await)
        }
    }

    /// Flattens any non-success response into `ApiError::Api`, preferring
    /// the message in the server's error body over a generic default.
    async fn normalize_error(response: reqwest::Response) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        ApiError::Api {
            status: status.as_u16(),
            message: Self::message_from_body(status, &body),
        }
    }

    fn message_from_body(status: StatusCode, body: &str) -> String {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.message)
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()))
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        response.json::<T>().await.map_err(|e| {
            ApiError::Decode(format!("unexpected response shape: {}", e))
        })
    }
}
