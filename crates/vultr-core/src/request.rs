//! Deterministic HTTP request construction.
//!
//! Turns an endpoint declaration plus call parameters into a complete
//! [`RequestDescriptor`]. Building is a pure function of its inputs: the
//! same endpoint, parameters, and configuration always produce a
//! byte-identical descriptor, so request shapes can be asserted in tests.

use crate::config::VultrConfig;
use crate::endpoint::Endpoint;
use crate::error::{Error, Result};
use crate::params::Params;
use reqwest::Method;
use serde_json::Value;
use url::form_urlencoded::Serializer;
use url::Url;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "API-Key";

/// Header identifying this client library.
pub const USER_AGENT_HEADER: &str = "User-Agent";

/// Content type used for request bodies.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Value sent in the `User-Agent` header.
pub const USER_AGENT: &str = concat!("vultr-rust/", env!("CARGO_PKG_VERSION"));

/// A fully assembled HTTP request, ready for the transport.
///
/// Constructed once per call and consumed by [`crate::transport::Transport`].
/// Read-style calls carry their parameters in the URL query; write-style
/// calls carry them in `body`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// HTTP method.
    pub method: Method,
    /// Absolute request URL, query string included.
    pub url: Url,
    /// Headers to send, authentication included.
    pub headers: Vec<(&'static str, String)>,
    /// Form-encoded body for write-style calls.
    pub body: Option<String>,
}

/// Assemble the request for one call.
///
/// Path placeholders of the form `{name}` are filled from `params` and the
/// consumed names are excluded from the encoded parameters. Values that are
/// themselves structures are JSON-serialized into the pair value; null
/// values are dropped.
///
/// # Errors
///
/// Fails with [`Error::MissingApiKey`] when the configuration has no key,
/// [`Error::MissingParameter`] when a placeholder has no value, and
/// [`Error::InvalidEndpoint`] when the base URL and path do not combine
/// into a valid URL.
pub fn build(
    endpoint: &Endpoint,
    params: &Params,
    config: &VultrConfig,
) -> Result<RequestDescriptor> {
    let api_key = config.api_key().ok_or(Error::MissingApiKey)?;

    let (path, consumed) = resolve_path(endpoint.path, params)?;
    let mut url = config.parse_base_url()?.join(&path)?;

    let pairs: Vec<(&str, String)> = params
        .iter()
        .filter(|(name, value)| !value.is_null() && !consumed.iter().any(|c| c == name))
        .map(|(name, value)| (name, encode_value(value)))
        .collect();

    let mut body = None;
    if endpoint.verb.has_body() {
        body = Some(encode_pairs(&pairs));
    } else if !pairs.is_empty() {
        url.set_query(Some(&encode_pairs(&pairs)));
    }

    let mut headers = vec![
        (API_KEY_HEADER, api_key.to_string()),
        (USER_AGENT_HEADER, USER_AGENT.to_string()),
    ];
    if body.is_some() {
        headers.push(("Content-Type", FORM_CONTENT_TYPE.to_string()));
    }

    Ok(RequestDescriptor {
        method: endpoint.verb.method(),
        url,
        headers,
        body,
    })
}

/// Fill `{name}` placeholders, returning the path and the consumed names.
fn resolve_path(template: &str, params: &Params) -> Result<(String, Vec<String>)> {
    let mut path = String::with_capacity(template.len());
    let mut consumed = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            return Err(Error::InvalidEndpoint(format!(
                "Unclosed placeholder in path `{template}`"
            )));
        };
        let name = &rest[start + 1..start + len];
        let value = params
            .get(name)
            .filter(|value| !value.is_null())
            .ok_or_else(|| Error::MissingParameter(name.to_string()))?;

        path.push_str(&rest[..start]);
        path.push_str(&encode_value(value));
        consumed.push(name.to_string());
        rest = &rest[start + len + 1..];
    }
    path.push_str(rest);

    Ok((path, consumed))
}

/// Render one parameter value as wire text.
///
/// Scalars encode naturally; arrays and objects are carried as compact JSON
/// so nothing is lost in the flat encoding.
fn encode_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        other => other.to_string(),
    }
}

fn encode_pairs(pairs: &[(&str, String)]) -> String {
    let mut serializer = Serializer::new(String::new());
    for (name, value) in pairs {
        serializer.append_pair(name, value);
    }
    serializer.finish()
}
