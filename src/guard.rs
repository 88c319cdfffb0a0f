//! Route guard: turns authorization decisions into render, wait, or redirect outcomes.
//!
//! The guard snapshots the claims source once per check, evaluates the route requirement, and
//! reports what the console should do. Nothing is cached between checks because claims may
//! change between navigations.

// self
use crate::{
	_prelude::*,
	auth::Claims,
	config::{AuthzConfig, GuardConfig},
	obs::{self, CheckKind, CheckOutcome, GuardSpan},
	policy::{AccessRequirement, Decision, DenyReason, Evaluator, ResourceType},
	session::{ClaimsSource, ClaimsState},
};

/// A console route together with its access requirement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectedRoute {
	/// Route path, used for logging.
	pub path: String,
	/// Requirement the principal must satisfy.
	#[serde(flatten)]
	pub requirement: AccessRequirement,
}
impl ProtectedRoute {
	/// Creates a protected route.
	pub fn new(path: impl Into<String>, requirement: AccessRequirement) -> Self {
		Self { path: path.into(), requirement }
	}
}

/// What the console should do for a guarded route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
	/// Claims are still loading; show a placeholder and check again later.
	Wait,
	/// The principal may see the route.
	Render,
	/// No usable session; send the principal to sign in.
	RedirectToLogin(Url),
	/// The principal is signed in but not allowed.
	RedirectUnauthorized {
		/// Access-denied page.
		to: Url,
		/// Why the evaluator denied access.
		reason: DenyReason,
	},
}
impl GuardOutcome {
	/// Redirect target, if the outcome is a redirect.
	pub fn redirect_url(&self) -> Option<&Url> {
		match self {
			GuardOutcome::RedirectToLogin(to) | GuardOutcome::RedirectUnauthorized { to, .. } =>
				Some(to),
			GuardOutcome::Wait | GuardOutcome::Render => None,
		}
	}

	/// Returns `true` for [`GuardOutcome::Render`].
	pub fn is_render(&self) -> bool {
		matches!(self, GuardOutcome::Render)
	}
}

/// Guard shared by every protected route of a console.
#[derive(Clone)]
pub struct RouteGuard {
	evaluator: Evaluator,
	config: GuardConfig,
	source: Arc<dyn ClaimsSource>,
}
impl RouteGuard {
	/// Creates a guard from its parts.
	pub fn new(evaluator: Evaluator, config: GuardConfig, source: Arc<dyn ClaimsSource>) -> Self {
		Self { evaluator, config, source }
	}

	/// Creates a guard from a loaded configuration document.
	pub fn from_config(config: AuthzConfig, source: Arc<dyn ClaimsSource>) -> Self {
		Self::new(Evaluator::new(config.policy), config.guard, source)
	}

	/// Evaluator used by the guard.
	pub fn evaluator(&self) -> &Evaluator {
		&self.evaluator
	}

	/// Checks a route against the current claims.
	pub fn check(&self, route: &ProtectedRoute) -> GuardOutcome {
		self.check_at(route, OffsetDateTime::now_utc())
	}

	/// Checks a route against the current claims at the provided instant.
	pub fn check_at(&self, route: &ProtectedRoute, now: OffsetDateTime) -> GuardOutcome {
		let span = GuardSpan::new(CheckKind::Access, &route.path).entered();
		let state = self.source.current();

		if state.is_pending() {
			span.record(CheckOutcome::Pending, "claims_pending", None);
			obs::record_decision(CheckKind::Access, CheckOutcome::Pending);

			return GuardOutcome::Wait;
		}

		let claims = active_claims(&state, now);
		let decision = self.evaluator.evaluate_access(claims, &route.requirement);

		record(&span, CheckKind::Access, decision, claims);

		match decision {
			Decision::Allow(_) => GuardOutcome::Render,
			Decision::Deny(DenyReason::Unauthenticated) =>
				GuardOutcome::RedirectToLogin(self.config.login.clone()),
			Decision::Deny(reason) =>
				GuardOutcome::RedirectUnauthorized { to: self.config.unauthorized.clone(), reason },
		}
	}

	/// Whether the current principal may create the resource type; pending claims are denied.
	pub fn permits_create(&self, resource: ResourceType) -> bool {
		let span = GuardSpan::new(CheckKind::Create, resource.as_str()).entered();
		let state = self.source.current();
		let claims = active_claims(&state, OffsetDateTime::now_utc());
		let decision = self.evaluator.evaluate_create(claims, resource);

		record(&span, CheckKind::Create, decision, claims);

		decision.is_allowed()
	}

	/// Whether the current principal may publish; pending claims are denied.
	pub fn permits_publish(&self) -> bool {
		let span = GuardSpan::new(CheckKind::Publish, "publish").entered();
		let state = self.source.current();
		let claims = active_claims(&state, OffsetDateTime::now_utc());
		let decision = self.evaluator.evaluate_publish(claims);

		record(&span, CheckKind::Publish, decision, claims);

		decision.is_allowed()
	}
}
impl Debug for RouteGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RouteGuard")
			.field("evaluator", &self.evaluator)
			.field("config", &self.config)
			.finish_non_exhaustive()
	}
}

// Expired claims are treated like a missing principal.
fn active_claims(state: &ClaimsState, now: OffsetDateTime) -> Option<&Claims> {
	state.claims().filter(|claims| !claims.is_expired_at(now))
}

fn record(
	span: &obs::GuardSpanGuard,
	kind: CheckKind,
	decision: Decision,
	claims: Option<&Claims>,
) {
	let outcome = if decision.is_allowed() { CheckOutcome::Allow } else { CheckOutcome::Deny };
	let principal = claims.and_then(|claims| claims.uid.as_deref());

	span.record(outcome, decision.reason_str(), principal);
	obs::record_decision(kind, outcome);
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;
	use crate::{
		auth::{DioceseId, Role},
		session::MemoryClaimsSource,
	};

	fn guard_with(source: MemoryClaimsSource) -> RouteGuard {
		let base = Url::parse("https://admin.example.org").expect("Base URL fixture should parse.");
		let config =
			GuardConfig::builder(base).build().expect("Guard config fixture should build.");

		RouteGuard::new(Evaluator::default(), config, Arc::new(source))
	}

	#[test]
	fn expired_claims_redirect_to_login() {
		let now = macros::datetime!(2026-05-01 09:00 UTC);
		let source = MemoryClaimsSource::default();

		source.set(Claims::new(Role::SuperAdmin).with_expires_at(now));

		let guard = guard_with(source);
		let route = ProtectedRoute::new("/dioceses", AccessRequirement::new(Role::SuperAdmin));
		let outcome = guard.check_at(&route, now);

		assert_eq!(outcome.redirect_url().map(Url::path), Some("/login"));
		assert!(guard.check_at(&route, now - time::Duration::minutes(1)).is_render());
	}

	#[test]
	fn denial_carries_reason() {
		let source = MemoryClaimsSource::default();

		source.set(
			Claims::new(Role::DioceseAdmin)
				.with_diocese(DioceseId::new("D1").expect("Diocese fixture should be valid.")),
		);

		let guard = guard_with(source);
		let route = ProtectedRoute::new(
			"/dioceses/D2",
			AccessRequirement::new(Role::DioceseAdmin)
				.in_diocese(DioceseId::new("D2").expect("Diocese fixture should be valid.")),
		);

		match guard.check(&route) {
			GuardOutcome::RedirectUnauthorized { to, reason } => {
				assert_eq!(to.path(), "/unauthorized");
				assert_eq!(reason, DenyReason::DioceseMismatch);
			},
			other => panic!("Unexpected outcome: {other:?}"),
		}
	}

	#[test]
	fn routes_load_from_json() {
		let route: ProtectedRoute = serde_json::from_str(
			r#"{"path":"/news/new","requiredRole":["super_admin","parish_admin"],"requiredParishId":"P1"}"#,
		)
		.expect("Route table entry should deserialize.");

		assert_eq!(route.path, "/news/new");
		assert_eq!(route.requirement.required_parish_id.as_deref(), Some("P1"));
	}
}
