use reqwest::{Client, Response, StatusCode, redirect};
use std::time::Duration;
use tracing::debug;

use crate::error::CheckError;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client that never follows redirects, so callers can inspect them.
#[derive(Debug, Clone)]
pub struct DiscoveryClient {
    client: Client,
}

impl DiscoveryClient {
    /// Builds the client. Without a timeout, reqwest's defaults apply.
    pub fn new(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().redirect(redirect::Policy::none());

        if let Some(timeout) = timeout {
            builder = builder
                .timeout(timeout)
                .connect_timeout(timeout.min(CONNECT_TIMEOUT));
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Single GET attempt. A 404 is a validation failure; any other status is handed back.
    pub async fn request(&self, url: &str) -> Result<Response, CheckError> {
        let response = self.fetch(url).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(CheckError::NotFound {
                url: url.to_string(),
            });
        }

        Ok(response)
    }

    /// Single GET attempt with no status interpretation.
    pub async fn fetch(&self, url: &str) -> Result<Response, CheckError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| CheckError::Request {
                url: url.to_string(),
                source,
            })?;

        debug!("{} answered {}", url, response.status());
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_transport_failure_is_request_error() {
        let client = DiscoveryClient::new(Some(Duration::from_secs(2))).unwrap();

        // Nothing listens on port 1 of the loopback interface.
        let err = client.request("http://127.0.0.1:1/.well-known/nodeinfo").await.unwrap_err();
        assert!(matches!(err, CheckError::Request { ref url, .. } if url.ends_with("/nodeinfo")));
    }
}
