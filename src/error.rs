//! Crate-level error types shared by claims intake, configuration, and guards.
//!
//! Authorization decisions are never errors; a denial is a [`Decision`](crate::policy::Decision).
//! The types here only cover inputs that cannot be turned into typed values.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Claims record could not be decoded into typed claims.
	#[error(transparent)]
	Claims(#[from] ClaimsError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
}

/// Configuration loading and validation failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Configuration document is not valid JSON for the expected shape.
	#[error("Configuration document is malformed.")]
	Parse {
		/// Structured parsing failure, including the offending field path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Guard configuration failed validation.
	#[error(transparent)]
	Guard(#[from] crate::config::GuardConfigError),
}

/// Failures raised while turning an identity provider record into [`Claims`](crate::auth::Claims).
#[derive(Debug, ThisError)]
pub enum ClaimsError {
	/// Session cookie payload is not valid base64url.
	#[error("Session cookie is not valid base64url.")]
	Encoding {
		/// Underlying decoding failure.
		#[source]
		source: base64::DecodeError,
	},
	/// Claims record is not valid JSON for the expected shape.
	#[error("Claims record is malformed.")]
	Malformed {
		/// Structured parsing failure, including the offending field path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Claims record carried a role outside the known hierarchy.
	#[error(transparent)]
	Role(#[from] crate::auth::RoleParseError),
	/// Claims record carried an invalid scope identifier.
	#[error(transparent)]
	Identifier(#[from] crate::auth::IdentifierError),
	/// Claims record carried an expiry that cannot be represented.
	#[error("Claims expiry {exp} is out of range.")]
	ExpiryOutOfRange {
		/// Raw `exp` value in Unix seconds.
		exp: i64,
	},
}
impl From<serde_path_to_error::Error<serde_json::Error>> for ClaimsError {
	fn from(source: serde_path_to_error::Error<serde_json::Error>) -> Self {
		Self::Malformed { source }
	}
}
impl From<base64::DecodeError> for ClaimsError {
	fn from(source: base64::DecodeError) -> Self {
		Self::Encoding { source }
	}
}
