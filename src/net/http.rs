//! Authenticated HTTP client for the backend API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every backend call goes through `ApiClient`. It reads the current session,
//! attaches the bearer header, sends exactly one request, and owns the single
//! session-expiry rule: a 401 clears the token store, navigates to login, and
//! surfaces `ApiError::SessionExpired`. Call sites never inspect 401 themselves.
//!
//! Headers are layered: JSON content type, then caller headers, then the
//! bearer header. Later layers replace earlier ones with the same name, so a
//! caller cannot override the session credential.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures (no response at all) become `ApiError::Transport` and
//! leave the session alone. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::ErrorBody;
use crate::util::auth::LOGIN_PATH;
use crate::util::config::api_base_url;
use crate::util::navigation::{BrowserNavigator, Navigator};
use crate::util::storage::{KeyValueStorage, LocalStorage};
use crate::util::token_store::{Session, TokenStore};

pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const AUTHORIZATION_HEADER: &str = "Authorization";
const JSON_CONTENT_TYPE: &str = "application/json";
const UNAUTHORIZED: u16 = 401;

/// Failure of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered 401. The session has already been cleared and a
    /// navigation to login issued.
    #[error("Session expired. Please login again.")]
    SessionExpired,
    /// No response was obtained.
    #[error("network error: {0}")]
    Transport(String),
    /// Non-2xx response; `detail` is the backend's message or a fallback.
    #[error("{detail}")]
    Backend { status: u16, detail: String },
    /// 2xx response without the expected `success`/`data` envelope.
    #[error("Invalid response from server")]
    InvalidResponse,
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// Caller-side request configuration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<serde_json::Value>,
    /// Extra headers, applied over the defaults.
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    /// A POST carrying `body` as JSON.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Encode` if `body` cannot be represented as JSON.
    pub fn post_json<B: Serialize + ?Sized>(body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(Self { method: Method::Post, body: Some(value), headers: Vec::new() })
    }

    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }
}

/// Fully resolved request handed to a `Transport`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl OutboundRequest {
    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status and body text of a backend response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// `true` for 2xx statuses.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// The backend's `detail` message, if the body carries one.
    pub fn error_detail(&self) -> Option<String> {
        serde_json::from_str::<ErrorBody>(&self.body)
            .ok()
            .map(|b| b.detail)
            .filter(|d| !d.is_empty())
    }

    /// Pass 2xx responses through; turn anything else into
    /// `ApiError::Backend`, using `fallback` when there is no `detail`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Backend` for non-2xx statuses.
    pub fn error_for_status(self, fallback: &str) -> Result<Self, ApiError> {
        if self.ok() {
            return Ok(self);
        }
        let detail = self.error_detail().unwrap_or_else(|| fallback.to_owned());
        Err(ApiError::Backend { status: self.status, detail })
    }
}

/// Replace a header with the same (case-insensitive) name, or append it.
fn set_header(headers: &mut Vec<(String, String)>, name: &str, value: &str) {
    if let Some(slot) = headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(name)) {
        *slot = (name.to_owned(), value.to_owned());
    } else {
        headers.push((name.to_owned(), value.to_owned()));
    }
}

/// Resolve `options` into a concrete request against `base_url + path`.
pub fn build_request(
    base_url: &str,
    path: &str,
    options: RequestOptions,
    session: Option<&Session>,
) -> OutboundRequest {
    let mut headers = vec![(CONTENT_TYPE_HEADER.to_owned(), JSON_CONTENT_TYPE.to_owned())];
    for (name, value) in &options.headers {
        set_header(&mut headers, name, value);
    }
    if let Some(session) = session {
        set_header(
            &mut headers,
            AUTHORIZATION_HEADER,
            &format!("Bearer {}", session.access_token),
        );
    }
    OutboundRequest {
        method: options.method,
        url: format!("{base_url}{path}"),
        headers,
        body: options.body.map(|b| b.to_string()),
    }
}

/// Sends one request and returns whatever status came back.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// # Errors
    ///
    /// Returns `ApiError::Transport` when no response was obtained.
    async fn send(&self, request: OutboundRequest) -> Result<RawResponse, ApiError>;
}

/// Browser `fetch` via `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[cfg(feature = "hydrate")]
fn gloo_method(method: Method) -> gloo_net::http::Method {
    use gloo_net::http::Method as M;
    match method {
        Method::Get => M::GET,
        Method::Post => M::POST,
        Method::Put => M::PUT,
        Method::Patch => M::PATCH,
        Method::Delete => M::DELETE,
    }
}

impl Transport for FetchTransport {
    async fn send(&self, request: OutboundRequest) -> Result<RawResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let transport_err = |e: gloo_net::Error| ApiError::Transport(e.to_string());
            let mut builder =
                gloo_net::http::RequestBuilder::new(&request.url).method(gloo_method(request.method));
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let prepared = match request.body {
                Some(body) => builder.body(body).map_err(transport_err)?,
                None => builder.build().map_err(transport_err)?,
            };
            let resp = prepared.send().await.map_err(transport_err)?;
            let status = resp.status();
            let body = resp.text().await.map_err(transport_err)?;
            Ok(RawResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }
}

/// Backend client bound to a token store, a transport, and a navigator.
#[derive(Clone, Debug)]
pub struct ApiClient<S = LocalStorage, T = FetchTransport, N = BrowserNavigator> {
    base_url: String,
    store: TokenStore<S>,
    transport: T,
    navigator: N,
}

impl ApiClient {
    /// Client for the running page: `localStorage`, `fetch`, and
    /// `window.location` navigation.
    pub fn browser() -> Self {
        Self::new(api_base_url(), TokenStore::new(LocalStorage), FetchTransport, BrowserNavigator)
    }
}

impl<S, T, N> ApiClient<S, T, N>
where
    S: KeyValueStorage,
    T: Transport,
    N: Navigator,
{
    pub fn new(base_url: impl Into<String>, store: TokenStore<S>, transport: T, navigator: N) -> Self {
        Self { base_url: base_url.into(), store, transport, navigator }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token_store(&self) -> &TokenStore<S> {
        &self.store
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Send an authenticated request.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::SessionExpired` on a 401 (after clearing the session
    /// and navigating to login) and `ApiError::Transport` when no response was
    /// obtained. Every other status is returned as `Ok` for the caller to
    /// interpret.
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<RawResponse, ApiError> {
        let session = self.store.read();
        let request = build_request(&self.base_url, path, options, session.as_ref());
        let response = self.transport.send(request).await?;
        if response.status == UNAUTHORIZED {
            leptos::logging::warn!("session expired on {path}; logging out");
            self.store.clear();
            self.navigator.navigate(LOGIN_PATH);
            return Err(ApiError::SessionExpired);
        }
        Ok(response)
    }

    /// Send a request without credentials and without the 401 rule.
    ///
    /// Used for login and signup, where the backend answers bad credentials
    /// with 401 and that must reach the form as an ordinary error.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` when no response was obtained.
    pub async fn request_public(&self, path: &str, options: RequestOptions) -> Result<RawResponse, ApiError> {
        let request = build_request(&self.base_url, path, options, None);
        self.transport.send(request).await
    }

    /// Authenticated GET decoded as `R`.
    ///
    /// # Errors
    ///
    /// See `request`; additionally `ApiError::Backend` for non-2xx statuses
    /// and `ApiError::Decode` for unexpected bodies.
    pub async fn get_json<R: DeserializeOwned>(&self, path: &str, fallback: &str) -> Result<R, ApiError> {
        self.request(path, RequestOptions::get())
            .await?
            .error_for_status(fallback)?
            .json()
    }

    /// Authenticated JSON POST decoded as `R`.
    ///
    /// # Errors
    ///
    /// See `get_json`; additionally `ApiError::Encode` if `body` cannot be
    /// serialized.
    pub async fn post_json<B, R>(&self, path: &str, body: &B, fallback: &str) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(path, RequestOptions::post_json(body)?)
            .await?
            .error_for_status(fallback)?
            .json()
    }
}
