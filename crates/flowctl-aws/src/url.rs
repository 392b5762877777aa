//! URL construction helpers.
//!
//! Pure functions turning an operation's REST binding and a built request
//! into the URL that is signed and sent.

use flowctl_core::{OperationSpec, Request, Service};
use url::Url;

use crate::error::{AwsError, AwsResult};

/// Regional endpoint of `service`, e.g. `https://appflow.us-east-1.amazonaws.com`.
pub fn regional_endpoint(service: Service, region: &str) -> String {
    let suffix = if region.starts_with("cn-") {
        "amazonaws.com.cn"
    } else {
        "amazonaws.com"
    };
    format!("https://{}.{region}.{suffix}", service.signing_name())
}

/// Expand the URI template, append the query and join onto `endpoint`.
///
/// Label values are percent-encoded as a single path segment, so ARNs with
/// `:` and `/` stay intact.
pub fn build_request_url(
    endpoint: &str,
    operation: &OperationSpec,
    request: &Request,
) -> AwsResult<Url> {
    let mut url = Url::parse(endpoint)?;
    if url.cannot_be_a_base() {
        return Err(AwsError::Configuration(format!(
            "endpoint '{endpoint}' is not a base URL"
        )));
    }

    let mut path = operation.http.uri.to_string();
    for label in operation.http.labels() {
        let value = request.path_params.get(label).ok_or_else(|| {
            AwsError::Configuration(format!("no value for URI label '{label}'"))
        })?;
        path = path.replace(&format!("{{{label}}}"), &urlencoding::encode(value));
    }

    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{base_path}{path}"));

    if !request.query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in &request.query {
            pairs.append_pair(key, value);
        }
    }

    Ok(url)
}
