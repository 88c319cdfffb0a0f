//! Claims source contract and the built-in in-memory source.

// self
use crate::{_prelude::*, auth::Claims, error::ClaimsError, session::SessionCookie};

/// What the identity provider currently reports about the principal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ClaimsState {
	/// The provider has not answered yet.
	#[default]
	Pending,
	/// No principal is signed in.
	Anonymous,
	/// A principal is signed in with these claims.
	Authenticated(Claims),
}
impl ClaimsState {
	/// Returns the claims when a principal is signed in.
	pub fn claims(&self) -> Option<&Claims> {
		match self {
			ClaimsState::Authenticated(claims) => Some(claims),
			ClaimsState::Pending | ClaimsState::Anonymous => None,
		}
	}

	/// Returns `true` while the provider has not answered.
	pub fn is_pending(&self) -> bool {
		matches!(self, ClaimsState::Pending)
	}
}
impl From<Option<Claims>> for ClaimsState {
	fn from(value: Option<Claims>) -> Self {
		match value {
			Some(claims) => ClaimsState::Authenticated(claims),
			None => ClaimsState::Anonymous,
		}
	}
}

/// Anything that can report the current principal's claims.
///
/// Implemented for plain closures so callers can adapt an existing session lookup.
pub trait ClaimsSource
where
	Self: Send + Sync,
{
	/// Snapshot of the current claims state.
	fn current(&self) -> ClaimsState;
}
impl<F> ClaimsSource for F
where
	F: Send + Sync + Fn() -> ClaimsState,
{
	fn current(&self) -> ClaimsState {
		self()
	}
}

/// Thread-safe claims holder updated by the sign-in flow and read by guards.
#[derive(Clone, Debug, Default)]
pub struct MemoryClaimsSource(Arc<RwLock<ClaimsState>>);
impl MemoryClaimsSource {
	/// Creates a source that already holds the provided state.
	pub fn with_state(state: ClaimsState) -> Self {
		Self(Arc::new(RwLock::new(state)))
	}

	/// Stores the claims of a signed-in principal (sign-in or token renewal).
	pub fn set(&self, claims: Claims) {
		*self.0.write() = ClaimsState::Authenticated(claims);
	}

	/// Records that no principal is signed in.
	pub fn sign_out(&self) {
		*self.0.write() = ClaimsState::Anonymous;
	}

	/// Returns to the pending state, e.g. while a new session is being established.
	pub fn reset(&self) {
		*self.0.write() = ClaimsState::Pending;
	}

	/// Loads claims from the session cookie value, if any.
	///
	/// A cookie that fails to decode signs the principal out before the error is returned, so a
	/// malformed or tampered cookie can only ever lead to denial.
	pub fn apply_cookie(&self, value: Option<&str>) -> Result<(), ClaimsError> {
		let decoded = value.map(SessionCookie::decode).transpose();
		let mut guard = self.0.write();

		match decoded {
			Ok(claims) => {
				*guard = ClaimsState::from(claims);

				Ok(())
			},
			Err(e) => {
				*guard = ClaimsState::Anonymous;

				Err(e)
			},
		}
	}
}
impl ClaimsSource for MemoryClaimsSource {
	fn current(&self) -> ClaimsState {
		self.0.read().clone()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::auth::Role;

	#[test]
	fn memory_source_transitions() {
		let source = MemoryClaimsSource::default();

		assert!(source.current().is_pending());

		source.set(Claims::new(Role::ParishAdmin));

		assert_eq!(source.current().claims().map(|claims| claims.role), Some(Role::ParishAdmin));

		source.sign_out();

		assert_eq!(source.current(), ClaimsState::Anonymous);

		source.reset();

		assert!(source.current().is_pending());
	}

	#[test]
	fn apply_cookie_signs_out_on_failure() {
		let source =
			MemoryClaimsSource::with_state(ClaimsState::Authenticated(Claims::new(Role::User)));

		assert!(source.apply_cookie(Some("not base64 !")).is_err());
		assert_eq!(source.current(), ClaimsState::Anonymous);

		let cookie = SessionCookie::encode(&Claims::new(Role::SuperAdmin));

		source.apply_cookie(Some(cookie.as_str())).expect("Valid cookie should apply.");

		assert_eq!(source.current().claims().map(|claims| claims.role), Some(Role::SuperAdmin));

		source.apply_cookie(None).expect("Missing cookie is not an error.");

		assert_eq!(source.current(), ClaimsState::Anonymous);
	}

	#[test]
	fn closures_act_as_sources() {
		let source = || ClaimsState::Anonymous;

		assert_eq!(ClaimsSource::current(&source), ClaimsState::Anonymous);
	}
}
