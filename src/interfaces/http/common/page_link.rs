//! Builds pagination links from the incoming request.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, OriginalUri};
use axum::http::header;
use axum::http::request::Parts;

use crate::shared::PageLink;

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Extracts a [`PageLink`] pointing back at the requested path.
///
/// With a `Host` header the link is absolute (`{scheme}://{host}{path}`,
/// scheme from `X-Forwarded-Proto`, default `http`); without one it is the
/// bare path.
pub struct RequestPageLink(pub PageLink);

impl<S> FromRequestParts<S> for RequestPageLink
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let path = parts
            .extensions
            .get::<OriginalUri>()
            .map(|uri| uri.0.path().to_string())
            .unwrap_or_else(|| parts.uri.path().to_string());

        let host = parts
            .headers
            .get(header::HOST)
            .and_then(|v| v.to_str().ok())
            .filter(|h| !h.is_empty());

        let base = match host {
            Some(host) => {
                let scheme = parts
                    .headers
                    .get(FORWARDED_PROTO)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("http");
                format!("{}://{}{}", scheme, host, path)
            }
            None => path,
        };

        Ok(RequestPageLink(PageLink::new(base)))
    }
}
