use reqwest::{Response, StatusCode, header::HeaderMap, header::LOCATION};
use tracing::debug;

use crate::{
    domain::EndpointKind,
    error::{CheckError, RedirectError},
    utils::DiscoveryClient,
};

/// Location of a permanent redirect into the host domain.
///
/// Anything other than a 301 fails, a 200 included: the account domain must hand
/// discovery off to the host domain.
pub fn redirect_target(
    status: StatusCode,
    headers: &HeaderMap,
    expected_prefix: &str,
) -> Result<String, RedirectError> {
    if status != StatusCode::MOVED_PERMANENTLY {
        return Err(RedirectError::NoRedirect(status));
    }

    let location = headers
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    if location.is_empty() {
        return Err(RedirectError::MissingLocation);
    }

    if !location.starts_with(expected_prefix) {
        return Err(RedirectError::LocationMismatch {
            actual: location.to_string(),
            expected: expected_prefix.to_string(),
        });
    }

    Ok(location.to_string())
}

/// Checks the redirect, releases the first response and fetches its target (one hop only).
pub async fn validate_redirect(
    client: &DiscoveryClient,
    response: Response,
    host_base: &str,
    endpoint: EndpointKind,
) -> Result<Response, CheckError> {
    let location = redirect_target(response.status(), response.headers(), host_base)?;
    debug!("{} redirect location validated: {}", endpoint, location);

    drop(response);
    client.fetch(&location).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{CONTENT_TYPE, HeaderValue};

    const HOST_BASE: &str = "https://gts.example.org";

    fn location(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(LOCATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_ok_without_redirect_fails() {
        let mut headers = location("https://gts.example.org/.well-known/nodeinfo");
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        assert_eq!(
            redirect_target(StatusCode::OK, &headers, HOST_BASE),
            Err(RedirectError::NoRedirect(StatusCode::OK))
        );
        assert_eq!(
            redirect_target(StatusCode::OK, &HeaderMap::new(), HOST_BASE),
            Err(RedirectError::NoRedirect(StatusCode::OK))
        );
    }

    #[test]
    fn test_temporary_redirect_fails() {
        let headers = location("https://gts.example.org/x");

        assert_eq!(
            redirect_target(StatusCode::FOUND, &headers, HOST_BASE),
            Err(RedirectError::NoRedirect(StatusCode::FOUND))
        );
    }

    #[test]
    fn test_missing_location() {
        assert_eq!(
            redirect_target(StatusCode::MOVED_PERMANENTLY, &HeaderMap::new(), HOST_BASE),
            Err(RedirectError::MissingLocation)
        );
        assert_eq!(
            redirect_target(StatusCode::MOVED_PERMANENTLY, &location(""), HOST_BASE),
            Err(RedirectError::MissingLocation)
        );
    }

    #[test]
    fn test_location_on_host_domain() {
        let target = redirect_target(
            StatusCode::MOVED_PERMANENTLY,
            &location("https://gts.example.org/x"),
            HOST_BASE,
        );

        assert_eq!(target, Ok("https://gts.example.org/x".to_string()));
    }

    #[test]
    fn test_location_elsewhere() {
        let result = redirect_target(
            StatusCode::MOVED_PERMANENTLY,
            &location("http://gts.example.org/x"),
            HOST_BASE,
        );

        assert_eq!(
            result,
            Err(RedirectError::LocationMismatch {
                actual: "http://gts.example.org/x".to_string(),
                expected: HOST_BASE.to_string(),
            })
        );
    }
}
