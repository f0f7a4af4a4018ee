//! One-time flash messages carried in a cookie across a redirect

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderName};
use std::convert::Infallible;

const COOKIE_NAME: &str = "flash";

/// Flash message sent by the previous response, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flash(pub Option<String>);

impl Flash {
    /// Read the flash cookie from request headers
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let message = headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == COOKIE_NAME)
            .and_then(|(_, value)| urlencoding::decode(value).ok())
            .map(|value| value.into_owned())
            .filter(|value| !value.is_empty());
        Self(message)
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Header that expires the cookie once the message has been shown
    #[must_use]
    pub fn clear_header(&self) -> Option<(HeaderName, String)> {
        self.0.as_ref().map(|_| {
            (
                SET_COOKIE,
                format!("{COOKIE_NAME}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax"),
            )
        })
    }
}

/// Header that carries `message` to the next request
#[must_use]
pub fn set_header(message: &str) -> (HeaderName, String) {
    (
        SET_COOKIE,
        format!(
            "{COOKIE_NAME}={}; Path=/; HttpOnly; SameSite=Lax",
            urlencoding::encode(message)
        ),
    )
}

#[async_trait]
impl<S> FromRequestParts<S> for Flash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}
