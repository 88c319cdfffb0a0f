// self
use crate::obs::{CheckKind, CheckOutcome};

/// Records a check outcome via the global metrics recorder (when enabled).
pub fn record_decision(kind: CheckKind, outcome: CheckOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"diocese_authz_decision_total",
			"check" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}
