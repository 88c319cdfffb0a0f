//! Session cookie codec.
//!
//! The console keeps the signed-in principal's claims record in a cookie as base64url
//! (no padding) encoded JSON. The cookie is only a transport; callers decode it into explicit
//! [`Claims`] and pass those to the evaluator.

// crates.io
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
// self
use crate::{
	_prelude::*,
	auth::{Claims, RawClaims},
	error::ClaimsError,
};

/// Encoder/decoder for the console session cookie.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionCookie;
impl SessionCookie {
	/// Name of the cookie written by the console.
	pub const NAME: &'static str = "session";

	/// Decodes a cookie value into typed claims.
	pub fn decode(value: &str) -> Result<Claims, ClaimsError> {
		let bytes = URL_SAFE_NO_PAD.decode(value.trim())?;
		let de = &mut serde_json::Deserializer::from_slice(&bytes);
		let raw: RawClaims = serde_path_to_error::deserialize(de)?;

		raw.into_claims()
	}

	/// Encodes claims into a cookie value.
	pub fn encode(claims: &Claims) -> String {
		let raw = RawClaims::from(claims);
		// Plain strings and integers always serialize.
		let json = serde_json::to_vec(&raw).unwrap_or_default();

		URL_SAFE_NO_PAD.encode(json)
	}
}
