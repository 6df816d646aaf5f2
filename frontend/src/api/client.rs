use log::{debug, warn};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    multipart::Form,
    Client, Method, RequestBuilder, StatusCode,
};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::Value;

use crate::{
    api::types::{ApiError, ErrorBody},
    config,
    state::session::SessionContext,
};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: SessionContext,
}

/// Status and raw body of a finished exchange.
pub(crate) struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(SessionContext::default())
    }
}

impl ApiClient {
    pub fn new(session: SessionContext) -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>, session: SessionContext) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            session,
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    async fn url(&self, path: &str) -> String {
        let base = self.resolved_base_url().await;
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }

    /// `Authorization: Bearer <token>` when the session holds a token,
    /// otherwise an empty map.
    pub(crate) fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(token) = self.session.token() {
            match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => warn!("stored token is not a valid header value"),
            }
        }
        headers
    }

    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        with_auth: bool,
    ) -> Result<T, ApiError> {
        let url = self.url(path).await;
        let mut builder = self
            .http_client()
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json");
        if with_auth {
            builder = builder.headers(self.auth_headers());
        }
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        let raw = self.execute(builder).await?;
        self.interpret(raw)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::GET, path, None, true).await
    }

    /// For calls whose response body is not needed.
    pub(crate) async fn send_ignoring_body(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<(), ApiError> {
        self.request::<IgnoredAny>(method, path, body, true)
            .await
            .map(|_| ())
    }

    /// Multipart upload. No JSON content type is set so the browser can
    /// supply the multipart boundary.
    pub async fn upload<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T, ApiError> {
        let url = self.url(path).await;
        let builder = self
            .http_client()
            .post(&url)
            .headers(self.auth_headers())
            .multipart(form);
        let raw = self.execute(builder).await?;
        self.interpret(raw)
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<RawResponse, ApiError> {
        let request = builder.build().map_err(ApiError::network)?;
        debug!("{} {}", request.method(), request.url());
        if let Some(raw) = mocked_response(&request)? {
            return Ok(raw);
        }
        let response = self
            .http_client()
            .execute(request)
            .await
            .map_err(ApiError::network)?;
        let status = response.status();
        let body = response.text().await.map_err(ApiError::network)?;
        Ok(RawResponse { status, body })
    }

    fn interpret<T: DeserializeOwned>(&self, raw: RawResponse) -> Result<T, ApiError> {
        if raw.status.is_success() {
            let text = raw.body.trim();
            let text = if text.is_empty() { "null" } else { text };
            return serde_json::from_str(text).map_err(ApiError::decode);
        }

        let message = serde_json::from_str::<ErrorBody>(&raw.body)
            .ok()
            .and_then(ErrorBody::into_message)
            .unwrap_or_else(|| {
                raw.status
                    .canonical_reason()
                    .unwrap_or("API Error")
                    .to_string()
            });

        if is_session_expired(raw.status, &message) {
            warn!("{}: {}", raw.status, message);
            self.session.invalidate();
            return Err(ApiError::SessionExpired);
        }

        Err(ApiError::Http {
            status: raw.status.as_u16(),
            message,
        })
    }
}

pub(crate) fn is_session_expired(status: StatusCode, message: &str) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
        && message.to_lowercase().contains("session expired")
}

/// Appends the present parameters as an encoded query string.
pub(crate) fn with_query(path: &str, params: &[(&str, Option<String>)]) -> String {
    let query = params
        .iter()
        .filter_map(|(key, value)| {
            value
                .as_ref()
                .map(|v| format!("{}={}", key, utf8_percent_encode(v, NON_ALPHANUMERIC)))
        })
        .collect::<Vec<_>>()
        .join("&");
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

pub(crate) fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

#[cfg(not(all(test, not(target_arch = "wasm32"))))]
fn mocked_response(_request: &reqwest::Request) -> Result<Option<RawResponse>, ApiError> {
    Ok(None)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
fn mocked_response(request: &reqwest::Request) -> Result<Option<RawResponse>, ApiError> {
    let Some(responder) = find_mock(request.url().as_str()) else {
        return Ok(None);
    };
    let mock = responder.respond(request)?;
    let status = StatusCode::from_u16(mock.status).map_err(ApiError::network)?;
    Ok(Some(RawResponse {
        status,
        body: mock.body,
    }))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub trait TestResponder {
    fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError>;
}

#[cfg(all(test, not(target_arch = "wasm32")))]
#[derive(Clone, Debug)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

#[cfg(all(test, not(target_arch = "wasm32")))]
impl MockResponse {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    pub fn empty(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
thread_local! {
    static MOCKS: std::cell::RefCell<Vec<(String, std::rc::Rc<dyn TestResponder>)>> =
        std::cell::RefCell::new(Vec::new());
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub fn register_mock(base_url: String, responder: std::rc::Rc<dyn TestResponder>) {
    MOCKS.with(|mocks| {
        let mut mocks = mocks.borrow_mut();
        mocks.retain(|(base, _)| base != &base_url);
        mocks.push((base_url, responder));
    });
}

#[cfg(all(test, not(target_arch = "wasm32")))]
fn find_mock(url: &str) -> Option<std::rc::Rc<dyn TestResponder>> {
    MOCKS.with(|mocks| {
        mocks
            .borrow()
            .iter()
            .filter(|(base, _)| url.starts_with(base.as_str()))
            .max_by_key(|(base, _)| base.len())
            .map(|(_, responder)| responder.clone())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_expired_requires_auth_status_and_message() {
        assert!(is_session_expired(
            StatusCode::UNAUTHORIZED,
            "Session expired"
        ));
        assert!(is_session_expired(
            StatusCode::FORBIDDEN,
            "Your SESSION EXPIRED, login again"
        ));
        assert!(!is_session_expired(StatusCode::UNAUTHORIZED, "Invalid token"));
        assert!(!is_session_expired(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Session expired"
        ));
    }

    #[test]
    fn with_query_skips_missing_values_and_encodes() {
        assert_eq!(with_query("/payments", &[("status", None)]), "/payments");
        assert_eq!(
            with_query(
                "/payments",
                &[("page", Some("2".into())), ("status", Some("a b".into()))]
            ),
            "/payments?page=2&status=a%20b"
        );
    }
}
