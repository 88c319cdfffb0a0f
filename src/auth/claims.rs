//! Principal claims issued by the identity provider and their raw wire shape.

// self
use crate::{
	_prelude::*,
	auth::{ArchdioceseId, ChurchId, DioceseId, ParishId, PrincipalId, Role},
	error::ClaimsError,
};

/// Typed claims of an authenticated principal.
///
/// Claims are read-only inputs to the evaluator; they are passed explicitly and never looked up
/// from ambient session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Claims {
	/// Role within the console hierarchy.
	pub role: Role,
	/// Diocese the principal administers or belongs to.
	pub diocese_id: Option<DioceseId>,
	/// Parish the principal administers or belongs to.
	pub parish_id: Option<ParishId>,
	/// Church the principal administers; church scope is derived through the parish.
	pub church_id: Option<ChurchId>,
	/// Archdiocese the principal belongs to.
	pub archdiocese_id: Option<ArchdioceseId>,
	/// Identity provider user id, used for log fields only.
	pub uid: Option<PrincipalId>,
	/// Instant after which the claims must be renewed.
	pub expires_at: Option<OffsetDateTime>,
}
impl Claims {
	/// Creates claims for the role with no affiliation.
	pub fn new(role: Role) -> Self {
		Self {
			role,
			diocese_id: None,
			parish_id: None,
			church_id: None,
			archdiocese_id: None,
			uid: None,
			expires_at: None,
		}
	}

	/// Decodes a raw claims JSON document.
	pub fn from_json(payload: &str) -> Result<Self, ClaimsError> {
		let de = &mut serde_json::Deserializer::from_str(payload);
		let raw: RawClaims = serde_path_to_error::deserialize(de)?;

		raw.into_claims()
	}

	/// Sets the diocese affiliation.
	pub fn with_diocese(mut self, diocese: DioceseId) -> Self {
		self.diocese_id = Some(diocese);

		self
	}

	/// Sets the parish affiliation.
	pub fn with_parish(mut self, parish: ParishId) -> Self {
		self.parish_id = Some(parish);

		self
	}

	/// Sets the church affiliation.
	pub fn with_church(mut self, church: ChurchId) -> Self {
		self.church_id = Some(church);

		self
	}

	/// Sets the archdiocese affiliation.
	pub fn with_archdiocese(mut self, archdiocese: ArchdioceseId) -> Self {
		self.archdiocese_id = Some(archdiocese);

		self
	}

	/// Sets the principal identifier.
	pub fn with_uid(mut self, uid: PrincipalId) -> Self {
		self.uid = Some(uid);

		self
	}

	/// Sets the expiry instant.
	pub fn with_expires_at(mut self, instant: OffsetDateTime) -> Self {
		self.expires_at = Some(instant);

		self
	}

	/// Returns `true` when the claims carry an expiry at or before `instant`.
	pub fn is_expired_at(&self, instant: OffsetDateTime) -> bool {
		self.expires_at.is_some_and(|expires_at| instant >= expires_at)
	}
}

/// Custom-claims record as emitted by the identity provider.
///
/// Empty identifier strings are treated as unset; the console writes `""` for affiliations a
/// role does not carry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawClaims {
	/// Role label.
	pub role: String,
	/// Diocese identifier.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub diocese_id: Option<String>,
	/// Parish identifier.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub parish_id: Option<String>,
	/// Church identifier.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub church_id: Option<String>,
	/// Archdiocese identifier.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub archdiocese_id: Option<String>,
	/// User id.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub uid: Option<String>,
	/// Expiry as Unix seconds.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub exp: Option<i64>,
}
impl RawClaims {
	/// Validates the record and converts it into typed [`Claims`].
	pub fn into_claims(self) -> Result<Claims, ClaimsError> {
		let role = Role::from_str(&self.role)?;
		let expires_at = self
			.exp
			.map(|exp| {
				OffsetDateTime::from_unix_timestamp(exp)
					.map_err(|_| ClaimsError::ExpiryOutOfRange { exp })
			})
			.transpose()?;

		Ok(Claims {
			role,
			diocese_id: parse_optional(self.diocese_id)?,
			parish_id: parse_optional(self.parish_id)?,
			church_id: parse_optional(self.church_id)?,
			archdiocese_id: parse_optional(self.archdiocese_id)?,
			uid: parse_optional(self.uid)?,
			expires_at,
		})
	}
}
impl From<&Claims> for RawClaims {
	fn from(claims: &Claims) -> Self {
		Self {
			role: claims.role.as_str().to_owned(),
			diocese_id: claims.diocese_id.as_ref().map(|id| id.to_string()),
			parish_id: claims.parish_id.as_ref().map(|id| id.to_string()),
			church_id: claims.church_id.as_ref().map(|id| id.to_string()),
			archdiocese_id: claims.archdiocese_id.as_ref().map(|id| id.to_string()),
			uid: claims.uid.as_ref().map(|id| id.to_string()),
			exp: claims.expires_at.map(OffsetDateTime::unix_timestamp),
		}
	}
}
impl TryFrom<RawClaims> for Claims {
	type Error = ClaimsError;

	fn try_from(value: RawClaims) -> Result<Self, Self::Error> {
		value.into_claims()
	}
}

fn parse_optional<T>(value: Option<String>) -> Result<Option<T>, ClaimsError>
where
	T: FromStr<Err = crate::auth::IdentifierError>,
{
	match value.filter(|v| !v.is_empty()) {
		Some(v) => Ok(Some(T::from_str(&v)?)),
		None => Ok(None),
	}
}
