use crate::error::EndpointFailure;

/// Result of a whole split-domain run.
#[derive(Debug)]
pub enum ValidationOutcome {
    Success,
    Failed(EndpointFailure),
}

impl ValidationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ValidationOutcome::Success)
    }

    pub fn failure(&self) -> Option<&EndpointFailure> {
        match self {
            ValidationOutcome::Success => None,
            ValidationOutcome::Failed(failure) => Some(failure),
        }
    }
}
