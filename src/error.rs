use reqwest::StatusCode;
use std::fmt;
use thiserror::Error;

use crate::domain::EndpointKind;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("failed to query URL {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("404 when querying URL: {url}")]
    NotFound { url: String },
    #[error(transparent)]
    Redirect(#[from] RedirectError),
    #[error("unexpected content type: {0}")]
    ContentType(String),
    #[error("failed to parse webfinger response JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("subject mismatch: got {actual}, expected {expected}")]
    SubjectMismatch { actual: String, expected: String },
    #[error("unexpected self-link: got {actual}, expected {expected}")]
    SelfLinkMismatch { actual: String, expected: String },
    #[error("self-link not found in webfinger response")]
    SelfLinkNotFound,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RedirectError {
    #[error("no redirect received (status {0})")]
    NoRedirect(StatusCode),
    #[error("redirect received, but no location header provided")]
    MissingLocation,
    #[error("redirect location mismatch: got {actual}, expected to start with {expected}")]
    LocationMismatch { actual: String, expected: String },
}

/// Validation stage an endpoint was in when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Request,
    Redirect,
    Webfinger,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Request => write!(f, "request"),
            Stage::Redirect => write!(f, "redirect validation"),
            Stage::Webfinger => write!(f, "webfinger validation"),
        }
    }
}

#[derive(Debug, Error)]
#[error("{endpoint} {stage} failed: {source}")]
pub struct EndpointFailure {
    pub endpoint: EndpointKind,
    pub stage: Stage,
    pub source: CheckError,
}

impl EndpointFailure {
    pub fn new(endpoint: EndpointKind, stage: Stage, source: CheckError) -> Self {
        Self {
            endpoint,
            stage,
            source,
        }
    }
}
