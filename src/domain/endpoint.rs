use std::fmt;

pub const DEFAULT_SCHEME: &str = "https";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointKind {
    HostMeta,
    Nodeinfo,
    Webfinger,
}

impl fmt::Display for EndpointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointKind::HostMeta => write!(f, "Host-Meta"),
            EndpointKind::Nodeinfo => write!(f, "Nodeinfo"),
            EndpointKind::Webfinger => write!(f, "Webfinger"),
        }
    }
}

/// A well-known discovery URL on the account domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointSpec {
    pub kind: EndpointKind,
    pub url: String,
}

impl EndpointSpec {
    pub fn name(&self) -> String {
        self.kind.to_string()
    }
}

/// The deployment under test: where accounts are advertised and where the server actually runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckTarget {
    pub account_domain: String,
    pub host_domain: String,
    pub account: String,
    pub scheme: String,
}

impl CheckTarget {
    pub fn new(
        account_domain: impl Into<String>,
        host_domain: impl Into<String>,
        account: impl Into<String>,
    ) -> Self {
        Self {
            account_domain: account_domain.into(),
            host_domain: host_domain.into(),
            account: account.into(),
            scheme: DEFAULT_SCHEME.to_string(),
        }
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// Prefix every redirect target and self-link must start with.
    pub fn host_base(&self) -> String {
        format!("{}://{}", self.scheme, self.host_domain)
    }

    pub fn expected_subject(&self) -> String {
        format!("acct:{}", self.account)
    }

    /// Host-Meta, Nodeinfo and Webfinger URLs, in the order they are checked.
    ///
    /// The account is not validated here; a malformed one simply yields a URL that fails later.
    pub fn endpoints(&self) -> [EndpointSpec; 3] {
        let base = format!("{}://{}", self.scheme, self.account_domain);

        [
            EndpointSpec {
                kind: EndpointKind::HostMeta,
                url: format!("{}/.well-known/host-meta", base),
            },
            EndpointSpec {
                kind: EndpointKind::Nodeinfo,
                url: format!("{}/.well-known/nodeinfo", base),
            },
            EndpointSpec {
                kind: EndpointKind::Webfinger,
                url: format!(
                    "{}/.well-known/webfinger?resource=acct:{}",
                    base, self.account
                ),
            },
        ]
    }
}
