//! Optional observability helpers for guard checks.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit spans named `diocese_authz.guard` with the `check` and `route`
//!   fields, plus a debug event carrying the outcome and reason of every decision.
//! - Enable `metrics` to increment the `diocese_authz_decision_total` counter for every
//!   decision, labeled by `check` + `outcome`.
//!
//! The evaluator in [`policy`](crate::policy) never touches these helpers; only the route guard
//! does.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Authorization checks observed by the guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CheckKind {
	/// Route entry (`canAccess`).
	Access,
	/// Resource creation (`canCreate`).
	Create,
	/// Content publication (`canPublish`).
	Publish,
}
impl CheckKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CheckKind::Access => "access",
			CheckKind::Create => "create",
			CheckKind::Publish => "publish",
		}
	}
}
impl Display for CheckKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CheckOutcome {
	/// Claims were not yet available; no decision was made.
	Pending,
	/// The principal was allowed.
	Allow,
	/// The principal was denied.
	Deny,
}
impl CheckOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CheckOutcome::Pending => "pending",
			CheckOutcome::Allow => "allow",
			CheckOutcome::Deny => "deny",
		}
	}
}
impl Display for CheckOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
