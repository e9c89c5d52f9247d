use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::time::Duration;

use crate::domain::{CheckArgs, CheckTarget, DEFAULT_SCHEME};

pub const DEFAULT_ACCOUNT_DOMAIN: &str = "gotosocial.org";
pub const DEFAULT_HOST_DOMAIN: &str = "gts.gotosocial.org";
pub const DEFAULT_ACCOUNT: &str = "admin@gotosocial.org";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub account_domain: String,
    pub host_domain: String,
    pub account: String,
    pub scheme: String,
    pub timeout_secs: Option<u64>,
    pub verbose: bool,
}

impl AppConfig {
    /// Defaults, then `config/default`, then `config/$SPLITCHECK_ENV`, then `SPLITCHECK_*`
    /// variables, then command-line flags.
    pub fn load(args: &CheckArgs) -> Result<Self, ConfigError> {
        let mut s = Config::builder()
            .set_default("account_domain", DEFAULT_ACCOUNT_DOMAIN)?
            .set_default("host_domain", DEFAULT_HOST_DOMAIN)?
            .set_default("account", DEFAULT_ACCOUNT)?
            .set_default("scheme", DEFAULT_SCHEME)?
            .set_default("verbose", false)?
            .add_source(File::with_name("config/default").required(false));

        if let Ok(env) = env::var("SPLITCHECK_ENV") {
            s = s.add_source(File::with_name(&format!("config/{}", env)).required(false));
        }

        s.add_source(Environment::with_prefix("SPLITCHECK"))
            .set_override_option("account_domain", args.account_domain.clone())?
            .set_override_option("host_domain", args.host_domain.clone())?
            .set_override_option("account", args.account.clone())?
            .set_override_option("timeout_secs", args.timeout_secs)?
            .set_override_option("verbose", args.wants_debug().then_some(true))?
            .build()?
            .try_deserialize()
    }

    /// Rejects accounts that are not `user@domain`; the checker itself would otherwise
    /// expect a self-link with an empty username.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.account.split_once('@') {
            Some((user, domain)) if !user.is_empty() && !domain.is_empty() && !domain.contains('@') => {
                Ok(())
            }
            _ => Err(ConfigError::Message(format!(
                "account must be in user@domain form, got '{}'",
                self.account
            ))),
        }
    }

    pub fn target(&self) -> CheckTarget {
        CheckTarget::new(&self.account_domain, &self.host_domain, &self.account)
            .with_scheme(&self.scheme)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
