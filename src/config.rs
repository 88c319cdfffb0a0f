//! Policy and guard configuration, including JSON loading with path-aware errors.

// self
use crate::{_prelude::*, auth::DioceseId, error::ConfigError};

/// Errors raised while constructing or validating a [`GuardConfig`].
#[derive(Debug, PartialEq, Eq, ThisError)]
pub enum GuardConfigError {
	/// The console base URL is required to build redirect targets.
	#[error("Missing console base URL.")]
	MissingConsoleBase,
	/// The console base URL must be served over HTTP(S).
	#[error("Console base URL must use http or https: {url}.")]
	UnsupportedScheme {
		/// URL that failed validation.
		url: String,
	},
	/// Redirect paths must be absolute within the console.
	#[error("The {target} path must start with `/`: {path}.")]
	RelativePath {
		/// Which redirect target failed validation.
		target: &'static str,
		/// Path that failed validation.
		path: String,
	},
	/// Redirect path could not be joined onto the base URL.
	#[error("The {target} path cannot be joined onto the console base URL.")]
	InvalidPath {
		/// Which redirect target failed validation.
		target: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}

/// Tunables for the authorization evaluator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyConfig {
	/// Diocese identifier standing for the archdiocese administrators' home seat.
	///
	/// Archdiocese administrators are denied any check that names a different diocese.
	#[serde(default = "PolicyConfig::default_archdiocese_seat")]
	pub archdiocese_seat: DioceseId,
}
impl PolicyConfig {
	/// Sentinel used when no seat is configured.
	pub const DEFAULT_ARCHDIOCESE_SEAT: &'static str = "archdiocese";

	/// Overrides the archdiocese seat.
	pub fn with_archdiocese_seat(mut self, seat: DioceseId) -> Self {
		self.archdiocese_seat = seat;

		self
	}

	fn default_archdiocese_seat() -> DioceseId {
		DioceseId::from_static(Self::DEFAULT_ARCHDIOCESE_SEAT)
	}
}
impl Default for PolicyConfig {
	fn default() -> Self {
		Self { archdiocese_seat: Self::default_archdiocese_seat() }
	}
}

/// Validated redirect targets used by the route guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardConfig {
	/// Where unauthenticated principals are sent.
	pub login: Url,
	/// Where authenticated but denied principals are sent.
	pub unauthorized: Url,
}
impl GuardConfig {
	/// Creates a new builder for the console served at `console_base`.
	pub fn builder(console_base: Url) -> GuardConfigBuilder {
		GuardConfigBuilder::new().console_base(console_base)
	}
}

/// Builder for [`GuardConfig`] values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardConfigBuilder {
	/// Origin (and optional base path) of the console.
	#[serde(default)]
	pub console_base: Option<Url>,
	/// Path of the sign-in page.
	#[serde(default = "GuardConfigBuilder::default_login_path")]
	pub login_path: String,
	/// Path of the access-denied page.
	#[serde(default = "GuardConfigBuilder::default_unauthorized_path")]
	pub unauthorized_path: String,
}
impl GuardConfigBuilder {
	/// Default sign-in path.
	pub const DEFAULT_LOGIN_PATH: &'static str = "/login";
	/// Default access-denied path.
	pub const DEFAULT_UNAUTHORIZED_PATH: &'static str = "/unauthorized";

	/// Creates a builder with default paths and no base URL.
	pub fn new() -> Self {
		Self {
			console_base: None,
			login_path: Self::default_login_path(),
			unauthorized_path: Self::default_unauthorized_path(),
		}
	}

	/// Sets the console base URL.
	pub fn console_base(mut self, url: Url) -> Self {
		self.console_base = Some(url);

		self
	}

	/// Overrides the sign-in path.
	pub fn login_path(mut self, path: impl Into<String>) -> Self {
		self.login_path = path.into();

		self
	}

	/// Overrides the access-denied path.
	pub fn unauthorized_path(mut self, path: impl Into<String>) -> Self {
		self.unauthorized_path = path.into();

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<GuardConfig, GuardConfigError> {
		let base = self.console_base.ok_or(GuardConfigError::MissingConsoleBase)?;

		if !matches!(base.scheme(), "http" | "https") {
			return Err(GuardConfigError::UnsupportedScheme { url: base.to_string() });
		}

		let login = join_path(&base, "login", &self.login_path)?;
		let unauthorized = join_path(&base, "unauthorized", &self.unauthorized_path)?;

		Ok(GuardConfig { login, unauthorized })
	}

	fn default_login_path() -> String {
		Self::DEFAULT_LOGIN_PATH.to_owned()
	}

	fn default_unauthorized_path() -> String {
		Self::DEFAULT_UNAUTHORIZED_PATH.to_owned()
	}
}
impl Default for GuardConfigBuilder {
	fn default() -> Self {
		Self::new()
	}
}

/// Complete configuration document for an embedding console.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthzConfig {
	/// Evaluator tunables.
	pub policy: PolicyConfig,
	/// Guard redirect targets.
	pub guard: GuardConfig,
}
impl AuthzConfig {
	/// Parses and validates a JSON configuration document.
	///
	/// ```json
	/// {
	///   "policy": { "archdioceseSeat": "archdiocese" },
	///   "guard": { "consoleBase": "https://admin.example.org", "loginPath": "/login" }
	/// }
	/// ```
	pub fn from_json_str(payload: &str) -> Result<Self, ConfigError> {
		let de = &mut serde_json::Deserializer::from_str(payload);
		let document: AuthzDocument = serde_path_to_error::deserialize(de)
			.map_err(|source| ConfigError::Parse { source })?;
		let guard = document.guard.build()?;

		Ok(Self { policy: document.policy, guard })
	}
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct AuthzDocument {
	#[serde(default)]
	policy: PolicyConfig,
	guard: GuardConfigBuilder,
}

fn join_path(base: &Url, target: &'static str, path: &str) -> Result<Url, GuardConfigError> {
	let Some(relative) = path.strip_prefix('/') else {
		return Err(GuardConfigError::RelativePath { target, path: path.to_owned() });
	};
	// Joining an absolute path would discard any base path, so join relative to it.
	let mut base = base.clone();

	if !base.path().ends_with('/') {
		let with_slash = format!("{}/", base.path());

		base.set_path(&with_slash);
	}

	base.join(relative).map_err(|source| GuardConfigError::InvalidPath { target, source })
}
