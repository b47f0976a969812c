//! Double-submit CSRF protection.
//!
//! A random token is handed to the browser twice: as the `csrftoken` cookie
//! and inside the page. Unsafe requests must echo the cookie value in the
//! configured header. A cross-site attacker can make the browser send the
//! cookie but cannot read it, so it cannot produce the header.

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::response::IntoResponse;
use http::{HeaderMap, HeaderValue, Method, Request, header};
use solarlead_core::config::CsrfConfig;
use tower::{Layer, Service};

use crate::ApiError;

const TOKEN_MAX_LEN: usize = 64;

/// Tower `Layer` that rejects unsafe requests without a matching token.
#[derive(Clone)]
pub struct CsrfLayer {
    config: Arc<CsrfConfig>,
}

impl CsrfLayer {
    /// Create a new CSRF layer.
    pub fn new(config: CsrfConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl<S> Layer<S> for CsrfLayer {
    type Service = CsrfService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CsrfService {
            inner,
            config: self.config.clone(),
        }
    }
}

/// Tower `Service` that checks the token before forwarding unsafe requests.
#[derive(Clone)]
pub struct CsrfService<S> {
    inner: S,
    config: Arc<CsrfConfig>,
}

impl<S> Service<Request<Body>> for CsrfService<S>
where
    S: Service<Request<Body>, Error = Infallible> + Clone + Send + 'static,
    S::Response: IntoResponse,
    S::Future: Send,
{
    type Response = axum::response::Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let config = self.config.clone();

        Box::pin(async move {
            if config.enabled && is_unsafe(req.method()) && !token_matches(req.headers(), &config)
            {
                tracing::warn!(method = %req.method(), path = %req.uri().path(), "rejected request without CSRF token");
                return Ok(ApiError::Csrf.into_response());
            }
            let resp = inner
                .call(req)
                .await
                .unwrap_or_else(|infallible| match infallible {});
            Ok(resp.into_response())
        })
    }
}

fn is_unsafe(method: &Method) -> bool {
    !matches!(
        *method,
        Method::GET | Method::HEAD | Method::OPTIONS | Method::TRACE
    )
}

fn token_matches(headers: &HeaderMap, config: &CsrfConfig) -> bool {
    let cookie = cookie_token(headers, &config.cookie_name);
    let header = headers
        .get(config.header_name.as_str())
        .and_then(|v| v.to_str().ok())
        .map(str::trim);
    match (cookie, header) {
        (Some(c), Some(h)) => constant_time_eq(c.as_bytes(), h.as_bytes()),
        _ => false,
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Returns the well-formed CSRF token carried in the request cookies, if any.
pub fn cookie_token<'a>(headers: &'a HeaderMap, cookie_name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .map(|(_, value)| value.trim())
        .filter(|value| is_well_formed(value))
}

fn is_well_formed(token: &str) -> bool {
    !token.is_empty()
        && token.len() <= TOKEN_MAX_LEN
        && token.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Generates a fresh random token.
pub fn new_token() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// `Set-Cookie` value that hands `token` to the browser.
///
/// Not `HttpOnly`: the page script may read it back.
pub fn set_cookie_value(cookie_name: &str, token: &str) -> Option<HeaderValue> {
    HeaderValue::from_str(&format!("{cookie_name}={token}; Path=/; SameSite=Lax")).ok()
}
