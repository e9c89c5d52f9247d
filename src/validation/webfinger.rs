use reqwest::{Response, header::CONTENT_TYPE};
use tracing::debug;

use crate::{
    domain::{CheckTarget, JRD_CONTENT_TYPE, WebfingerDocument},
    error::CheckError,
};

/// Username part of `user@domain`, or an empty string for anything else.
pub fn extract_username(account: &str) -> &str {
    let parts: Vec<&str> = account.split('@').collect();
    if parts.len() == 2 { parts[0] } else { "" }
}

/// Content type, body, subject and self-link of the final Webfinger response.
pub async fn validate_webfinger(response: Response, target: &CheckTarget) -> Result<(), CheckError> {
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .unwrap_or_default();
    if !content_type.contains(JRD_CONTENT_TYPE) {
        return Err(CheckError::ContentType(content_type));
    }

    let url = response.url().to_string();
    let body = response
        .bytes()
        .await
        .map_err(|source| CheckError::Request { url, source })?;

    let document = WebfingerDocument::from_slice(&body)?;
    validate_document(&document, &target.host_base(), &target.account)
}

pub fn validate_document(
    document: &WebfingerDocument,
    host_base: &str,
    account: &str,
) -> Result<(), CheckError> {
    let expected_subject = format!("acct:{}", account);
    if document.subject != expected_subject {
        return Err(CheckError::SubjectMismatch {
            actual: document.subject.clone(),
            expected: expected_subject,
        });
    }

    let expected_self_link = format!("{}/users/{}", host_base, extract_username(account));
    match document.self_link() {
        Some(link) if link.href == expected_self_link => {
            debug!("Self-link validation passed: {}", link.href);
            Ok(())
        }
        Some(link) => Err(CheckError::SelfLinkMismatch {
            actual: link.href.clone(),
            expected: expected_self_link,
        }),
        None => Err(CheckError::SelfLinkNotFound),
    }
}
