// self
use crate::{_prelude::*, obs::{CheckKind, CheckOutcome}};

/// A span wrapping one guard check.
#[derive(Clone, Debug)]
pub struct GuardSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl GuardSpan {
	/// Creates a new span tagged with the provided check kind + route.
	pub fn new(kind: CheckKind, route: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("diocese_authz.guard", check = kind.as_str(), route);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, route);

			Self {}
		}
	}

	/// Enters the span for the duration of the check.
	pub fn entered(self) -> GuardSpanGuard {
		#[cfg(feature = "tracing")]
		{
			GuardSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			GuardSpanGuard {}
		}
	}
}

/// RAII guard returned by [`GuardSpan::entered`].
pub struct GuardSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl GuardSpanGuard {
	/// Emits a debug event describing the outcome inside the entered span.
	pub fn record(&self, outcome: CheckOutcome, reason: &'static str, principal: Option<&str>) {
		#[cfg(feature = "tracing")]
		{
			tracing::debug!(outcome = outcome.as_str(), reason, principal, "authorization check");
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (outcome, reason, principal);
		}
	}
}
impl Debug for GuardSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("GuardSpanGuard(..)")
	}
}
