// self
use crate::obs::{Operation, RequestOutcome};

/// Records a request outcome via the global metrics recorder (when enabled).
pub fn record_request_outcome(operation: Operation, outcome: RequestOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"auth0_api_request_total",
			"operation" => operation.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (operation, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_request_outcome_noop_without_metrics() {
		record_request_outcome(Operation::ResetPassword, RequestOutcome::Failure);
	}
}
