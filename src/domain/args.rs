use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Subcommand, PartialEq)]
pub enum Command {
    /// Check a split-domain Fediverse deployment
    #[command(name = "checkSplitDomain", alias = "check-split-domain")]
    CheckSplitDomain,
}

#[derive(Parser, Debug, Default)]
#[command(
    version,
    about = "Fediverse split-domain deployment checker",
    long_about = "Validates a split-domain Fediverse deployment: well-known discovery requests on \
                  the account domain must redirect to the host domain, and the Webfinger \
                  response must identify the account's actor on the host domain."
)]
pub struct CheckArgs {
    #[command(subcommand)]
    pub command: Option<Command>,
    /// The account domain to check (default: gotosocial.org)
    #[clap(long = "accountDomain", alias = "account-domain", global = true)]
    pub account_domain: Option<String>,
    /// The host domain to check (default: gts.gotosocial.org)
    #[clap(long = "hostDomain", alias = "host-domain", global = true)]
    pub host_domain: Option<String>,
    /// The account to check (default: admin@gotosocial.org)
    #[clap(long, global = true)]
    pub account: Option<String>,
    /// Request timeout in seconds
    #[clap(long = "timeout", global = true)]
    pub timeout_secs: Option<u64>,
    /// Enable verbose logging
    #[clap(short, long, global = true)]
    pub verbose: bool,
    /// Enable debug logging
    #[clap(short, long, global = true)]
    pub debug: bool,
}

impl CheckArgs {
    pub fn wants_debug(&self) -> bool {
        self.verbose || self.debug
    }
}
