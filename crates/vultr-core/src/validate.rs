//! Pre-flight validation of a call against its endpoint declaration.
//!
//! Runs before any request is built: a call that fails here never touches
//! the network. The check is pure and has no side effects.

use crate::config::UnknownParamPolicy;
use crate::endpoint::Endpoint;
use crate::error::{Error, Result};
use crate::params::Params;

/// Check a call's arguments against the endpoint declaration.
///
/// Fails with [`Error::MissingApiKey`] when no usable key is configured,
/// with [`Error::MissingParameter`] for the first required name (in
/// declaration order) that is absent or null, and, under
/// [`UnknownParamPolicy::Reject`], with [`Error::UnknownParameter`] for
/// any name the endpoint does not declare.
///
/// # Errors
///
/// See above; `Ok(())` means the call may proceed to request building.
pub fn validate(
    endpoint: &Endpoint,
    params: &Params,
    api_key: Option<&str>,
    policy: UnknownParamPolicy,
) -> Result<()> {
    match api_key {
        Some(key) if !key.trim().is_empty() => {}
        _ => return Err(Error::MissingApiKey),
    }

    for name in endpoint.required {
        if !params.is_provided(name) {
            return Err(Error::MissingParameter((*name).to_string()));
        }
    }

    if policy == UnknownParamPolicy::Reject {
        for (name, _) in params.iter() {
            if !endpoint.declares(name) {
                return Err(Error::UnknownParameter(name.to_string()));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::HttpVerb;
    use crate::params;
    use serde_json::Value;

    const CREATE: Endpoint = Endpoint::new(HttpVerb::Post, "/v1/server/create")
        .with_required(&["DCID", "VPSPLANID", "OSID"])
        .with_optional(&["label"]);

    #[test]
    fn test_missing_api_key() {
        let params = params! { "DCID" => 1, "VPSPLANID" => 201, "OSID" => 127 };
        let err = validate(&CREATE, &params, None, UnknownParamPolicy::Forward).unwrap_err();
        assert_eq!(err, Error::MissingApiKey);
    }

    #[test]
    fn test_empty_api_key_counts_as_missing() {
        let params = params! { "DCID" => 1, "VPSPLANID" => 201, "OSID" => 127 };
        for key in ["", "   "] {
            let err =
                validate(&CREATE, &params, Some(key), UnknownParamPolicy::Forward).unwrap_err();
            assert_eq!(err, Error::MissingApiKey);
        }
    }

    #[test]
    fn test_key_checked_before_parameters() {
        let err = validate(&CREATE, &params! {}, None, UnknownParamPolicy::Forward).unwrap_err();
        assert_eq!(err, Error::MissingApiKey);
    }

    #[test]
    fn test_first_missing_required_in_declaration_order() {
        let err = validate(
            &CREATE,
            &params! {},
            Some("key"),
            UnknownParamPolicy::Forward,
        )
        .unwrap_err();
        assert_eq!(err, Error::MissingParameter("DCID".to_string()));

        let err = validate(
            &CREATE,
            &params! { "DCID" => 1, "OSID" => 127 },
            Some("key"),
            UnknownParamPolicy::Forward,
        )
        .unwrap_err();
        assert_eq!(err, Error::MissingParameter("VPSPLANID".to_string()));
    }

    #[test]
    fn test_null_required_counts_as_missing() {
        let params = params! { "DCID" => Value::Null, "VPSPLANID" => 201, "OSID" => 127 };
        let err = validate(&CREATE, &params, Some("key"), UnknownParamPolicy::Forward).unwrap_err();
        assert_eq!(err, Error::MissingParameter("DCID".to_string()));
    }

    #[test]
    fn test_complete_call_passes() {
        let params = params! { "DCID" => 1, "VPSPLANID" => 201, "OSID" => 127, "label" => "web" };
        assert!(validate(&CREATE, &params, Some("key"), UnknownParamPolicy::Forward).is_ok());
    }

    #[test]
    fn test_unknown_parameters_forwarded_by_default() {
        let params =
            params! { "DCID" => 1, "VPSPLANID" => 201, "OSID" => 127, "new_flag" => true };
        assert!(validate(&CREATE, &params, Some("key"), UnknownParamPolicy::Forward).is_ok());
    }

    #[test]
    fn test_unknown_parameters_rejected_under_policy() {
        let params =
            params! { "DCID" => 1, "VPSPLANID" => 201, "OSID" => 127, "new_flag" => true };
        let err = validate(&CREATE, &params, Some("key"), UnknownParamPolicy::Reject).unwrap_err();
        assert_eq!(err, Error::UnknownParameter("new_flag".to_string()));
    }

    #[test]
    fn test_declared_optional_passes_reject_policy() {
        let params = params! { "DCID" => 1, "VPSPLANID" => 201, "OSID" => 127, "label" => "web" };
        assert!(validate(&CREATE, &params, Some("key"), UnknownParamPolicy::Reject).is_ok());
    }
}
