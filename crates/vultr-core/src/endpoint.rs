//! Declarative endpoint descriptions.
//!
//! An [`Endpoint`] declares everything the dispatch pipeline needs to know
//! about one API operation: the HTTP verb, the path (optionally containing
//! `{name}` placeholders filled from call parameters), and the declared
//! parameter names. Declarations are `'static` constants owned by the
//! resource modules and referenced, never mutated, by the pipeline.

use reqwest::Method;

/// HTTP verbs used by the v1 API.
///
/// The verb determines where call parameters are encoded: read-style verbs
/// carry them in the query string, write-style verbs in a form body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpVerb {
    /// Read operation; parameters go in the query string.
    Get,
    /// Write operation; parameters go in the request body.
    Post,
    /// Write operation; parameters go in the request body.
    Put,
    /// Removal operation; parameters go in the query string.
    Delete,
}

impl HttpVerb {
    /// Map to the underlying HTTP method.
    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Self::Get => Method::GET,
            Self::Post => Method::POST,
            Self::Put => Method::PUT,
            Self::Delete => Method::DELETE,
        }
    }

    /// Returns true when parameters are carried in the request body.
    #[must_use]
    pub const fn has_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

/// Immutable declaration of a single API operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// HTTP verb used by the operation.
    pub verb: HttpVerb,
    /// Path template, absolute against the configured base URL.
    pub path: &'static str,
    /// Parameter names that must be present, in declaration order.
    pub required: &'static [&'static str],
    /// Parameter names the endpoint accepts but does not require.
    pub optional: &'static [&'static str],
}

impl Endpoint {
    /// Declare an endpoint with no parameters.
    #[must_use]
    pub const fn new(verb: HttpVerb, path: &'static str) -> Self {
        Self {
            verb,
            path,
            required: &[],
            optional: &[],
        }
    }

    /// Declare the required parameter names, in order.
    #[must_use]
    pub const fn with_required(mut self, names: &'static [&'static str]) -> Self {
        self.required = names;
        self
    }

    /// Declare the optional parameter names.
    #[must_use]
    pub const fn with_optional(mut self, names: &'static [&'static str]) -> Self {
        self.optional = names;
        self
    }

    /// Returns true when `name` appears in the declared parameter sets.
    #[must_use]
    pub fn declares(&self, name: &str) -> bool {
        self.required
            .iter()
            .chain(self.optional)
            .any(|declared| *declared == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST: Endpoint = Endpoint::new(HttpVerb::Get, "/v1/iso/list");
    const CREATE: Endpoint = Endpoint::new(HttpVerb::Post, "/v1/server/create")
        .with_required(&["DCID", "VPSPLANID", "OSID"])
        .with_optional(&["label", "hostname"]);

    #[test]
    fn test_const_declaration() {
        assert_eq!(LIST.verb, HttpVerb::Get);
        assert_eq!(LIST.path, "/v1/iso/list");
        assert!(LIST.required.is_empty());

        assert_eq!(CREATE.required, &["DCID", "VPSPLANID", "OSID"]);
        assert_eq!(CREATE.optional, &["label", "hostname"]);
    }

    #[test]
    fn test_declares() {
        assert!(CREATE.declares("DCID"));
        assert!(CREATE.declares("hostname"));
        assert!(!CREATE.declares("SUBID"));
        assert!(!LIST.declares("anything"));
    }

    #[test]
    fn test_verb_method_mapping() {
        assert_eq!(HttpVerb::Get.method(), Method::GET);
        assert_eq!(HttpVerb::Post.method(), Method::POST);
        assert_eq!(HttpVerb::Put.method(), Method::PUT);
        assert_eq!(HttpVerb::Delete.method(), Method::DELETE);
    }

    #[test]
    fn test_verb_body_placement() {
        assert!(HttpVerb::Post.has_body());
        assert!(HttpVerb::Put.has_body());
        assert!(!HttpVerb::Get.has_body());
        assert!(!HttpVerb::Delete.has_body());
    }
}
