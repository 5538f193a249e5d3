//! Structural parsing of notification service URLs.
//!
//! Service URLs look like `<scheme>://<authority>/<segment>/...?<query>`.
//! The authority is kept as a raw string: bot tokens such as
//! `12345:secret` are not valid `host:port` pairs, so a generic URL parser
//! would reject them before the provider gets a chance to report a useful
//! error.

use crate::error::{NotifyError, NotifyResult};
use url::form_urlencoded;

/// A service URL split into its structural parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceUrl {
    scheme: String,
    authority: String,
    segments: Vec<String>,
    query: Vec<(String, String)>,
}

impl ServiceUrl {
    /// Splits a raw service URL
    ///
    /// Empty path segments are dropped, so `a//b/` yields `["a", "b"]`.
    /// The scheme is lowercased; everything else is kept verbatim apart
    /// from query percent-decoding.
    ///
    /// # Errors
    /// `InvalidUrl` if the `://` separator is missing or the scheme is malformed
    pub fn parse(raw: &str) -> NotifyResult<Self> {
        let raw = raw.trim();
        let (scheme, rest) = raw
            .split_once("://")
            .ok_or_else(|| NotifyError::invalid_url("expected <scheme>://..."))?;

        if scheme.is_empty() {
            return Err(NotifyError::invalid_url("missing scheme"));
        }
        if !scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        {
            return Err(NotifyError::invalid_url(format!(
                "scheme '{}' contains invalid characters",
                scheme
            )));
        }

        let (body, query) = match rest.split_once('?') {
            Some((body, query)) => (body, Some(query)),
            None => (rest, None),
        };

        let mut parts = body.split('/');
        let authority = parts.next().unwrap_or_default().to_string();
        let segments = parts
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();

        let query = query
            .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
            .unwrap_or_default();

        Ok(Self {
            scheme: scheme.to_ascii_lowercase(),
            authority,
            segments,
            query,
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn authority(&self) -> &str {
        &self.authority
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }
}
