//! Turns an endpoint template and call arguments into a `reqwest::Request`.

use std::collections::BTreeMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::endpoint::{API_VERSION, Operation};
use crate::{Error, Result};

/// Header carrying the URL the service calls once a batch job finishes.
pub const CALLBACK_HEADER: &str = "x-kickbox-callback";
/// Header naming an uploaded batch file.
pub const FILENAME_HEADER: &str = "x-kickbox-filename";

/// Query parameter holding the API key.
const API_KEY_PARAM: &str = "apikey";

/// Per-call inputs for one request.
#[derive(Debug, Default)]
pub(crate) struct RequestParts {
    pub segments: BTreeMap<&'static str, String>,
    pub params: BTreeMap<&'static str, String>,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl RequestParts {
    /// Parts with the operation's API version segment already set.
    pub fn for_operation(operation: Operation) -> Self {
        let mut parts = Self::default();
        parts.segment(API_VERSION, operation.api_version());
        parts
    }

    pub fn segment(&mut self, key: &'static str, value: impl Into<String>) -> &mut Self {
        self.segments.insert(key, value.into());
        self
    }

    pub fn param(&mut self, key: &'static str, value: impl Into<String>) -> &mut Self {
        self.params.insert(key, value.into());
        self
    }

    /// Set `name` unless `value` is absent or empty.
    ///
    /// `name` must be a lowercase header name.
    pub fn optional_header(&mut self, name: &'static str, value: Option<&str>) -> Result<&mut Self> {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.headers
                .insert(HeaderName::from_static(name), HeaderValue::from_str(value)?);
        }
        Ok(self)
    }

    pub fn body(&mut self, body: Vec<u8>) -> &mut Self {
        self.body = Some(body);
        self
    }
}

/// Percent-encode `value` so it stays a single path segment.
pub(crate) fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Replace every `{KEY}` in `template` with its value.
///
/// Placeholders without a value are left untouched.
pub(crate) fn resolve_path(template: &str, segments: &BTreeMap<&'static str, String>) -> String {
    let mut path = template.to_string();
    for (key, value) in segments {
        path = path.replace(&format!("{{{key}}}"), value);
    }
    path
}

/// Append `path` to `base_url` and encode `params` as the query string.
pub(crate) fn build_url(
    base_url: &str,
    path: &str,
    params: &BTreeMap<&'static str, String>,
) -> Result<Url> {
    let mut url = Url::parse(base_url)?;
    let joined = format!("{}{}", url.path().trim_end_matches('/'), path);
    url.set_path(&joined);
    if !params.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));
    }
    Ok(url)
}

/// Build the outbound request for `operation`.
pub(crate) fn build_request(
    http: &reqwest::Client,
    base_url: &str,
    api_key: &str,
    operation: Operation,
    mut parts: RequestParts,
) -> Result<reqwest::Request> {
    let endpoint = operation.endpoint();
    parts.param(API_KEY_PARAM, api_key);

    let path = resolve_path(endpoint.path, &parts.segments);
    let url = build_url(base_url, &path, &parts.params)?;

    let mut builder = http.request(endpoint.method, url).headers(parts.headers);
    if let Some(body) = parts.body {
        builder = builder.body(body);
    }
    // The URL carries the API key; keep it out of the error.
    builder.build().map_err(|err| Error::Build(err.without_url()))
}
