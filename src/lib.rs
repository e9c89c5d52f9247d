pub mod config;
pub mod domain;
pub mod error;
pub mod utils;
pub mod validation;

use domain::{CheckTarget, EndpointKind, ValidationOutcome};
use error::{EndpointFailure, Stage};
use utils::{Diagnostic, DiscoveryClient, Reporter};
use validation::{validate_redirect, validate_webfinger};

const CHECK_STEP: &str = "Split-domain check";

/// Runs the whole split-domain check and reports progress to `reporter`.
///
/// Endpoints are checked one after another; the first failure ends the run.
pub async fn run_check(
    client: &DiscoveryClient,
    target: &CheckTarget,
    reporter: &dyn Reporter,
) -> ValidationOutcome {
    reporter.report(Diagnostic::Started("split-domain check".to_string()));
    reporter.report(Diagnostic::Debug(format!(
        "account domain {}, host domain {}, account {}",
        target.account_domain, target.host_domain, target.account
    )));

    match validate_endpoints(client, target, reporter).await {
        Ok(()) => {
            reporter.report(Diagnostic::Passed(CHECK_STEP.to_string()));
            ValidationOutcome::Success
        }
        Err(failure) => {
            reporter.report(Diagnostic::Failed {
                step: CHECK_STEP.to_string(),
                cause: failure.to_string(),
            });
            ValidationOutcome::Failed(failure)
        }
    }
}

async fn validate_endpoints(
    client: &DiscoveryClient,
    target: &CheckTarget,
    reporter: &dyn Reporter,
) -> Result<(), EndpointFailure> {
    let host_base = target.host_base();

    for endpoint in target.endpoints() {
        let kind = endpoint.kind;
        let name = endpoint.name();
        reporter.report(Diagnostic::Passed(format!("Checking {} endpoint", name)));
        reporter.report(Diagnostic::Debug(format!("{} URL: {}", name, endpoint.url)));

        let response = client
            .request(&endpoint.url)
            .await
            .map_err(|e| EndpointFailure::new(kind, Stage::Request, e))?;

        let response = validate_redirect(client, response, &host_base, kind)
            .await
            .map_err(|e| EndpointFailure::new(kind, Stage::Redirect, e))?;
        reporter.report(Diagnostic::Info(format!(
            "Redirect received: {}",
            response.url()
        )));

        if kind == EndpointKind::Webfinger {
            validate_webfinger(response, target)
                .await
                .map_err(|e| EndpointFailure::new(kind, Stage::Webfinger, e))?;
            reporter.report(Diagnostic::Info(format!(
                "Webfinger Subject: {}",
                target.expected_subject()
            )));
        }

        reporter.report(Diagnostic::Passed(format!("{} endpoint validation", name)));
    }

    Ok(())
}
