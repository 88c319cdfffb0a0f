// self
use crate::_prelude::*;

/// Why a check allowed the principal through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllowReason {
	/// Super administrators bypass scope restrictions.
	FullAccess,
	/// Archdiocese administrator acting on its home seat (or a read-level check).
	ArchdioceseSeat,
	/// Required diocese is unset or matches the principal's diocese.
	WithinDiocese,
	/// Required parish and diocese are unset or match the principal's affiliation.
	WithinParish,
	/// Role appears in the create/publish table.
	RolePermitted,
}
impl AllowReason {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			AllowReason::FullAccess => "full_access",
			AllowReason::ArchdioceseSeat => "archdiocese_seat",
			AllowReason::WithinDiocese => "within_diocese",
			AllowReason::WithinParish => "within_parish",
			AllowReason::RolePermitted => "role_permitted",
		}
	}
}

/// Why a check denied the principal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
	/// No claims were available.
	Unauthenticated,
	/// Role is not part of the accepted set.
	RoleNotAccepted,
	/// Archdiocese administrator targeted a diocese other than its home seat.
	OutsideArchdioceseSeat,
	/// Required diocese differs from the principal's diocese.
	DioceseMismatch,
	/// Required parish differs from the principal's parish.
	ParishMismatch,
	/// Role has no scope policy for access checks.
	NoScopePolicy,
	/// Role may not create the resource type.
	RoleCannotCreate,
	/// Role may not publish.
	RoleCannotPublish,
	/// Resource type label is unknown.
	UnrecognizedResource,
}
impl DenyReason {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			DenyReason::Unauthenticated => "unauthenticated",
			DenyReason::RoleNotAccepted => "role_not_accepted",
			DenyReason::OutsideArchdioceseSeat => "outside_archdiocese_seat",
			DenyReason::DioceseMismatch => "diocese_mismatch",
			DenyReason::ParishMismatch => "parish_mismatch",
			DenyReason::NoScopePolicy => "no_scope_policy",
			DenyReason::RoleCannotCreate => "role_cannot_create",
			DenyReason::RoleCannotPublish => "role_cannot_publish",
			DenyReason::UnrecognizedResource => "unrecognized_resource",
		}
	}
}
impl Display for DenyReason {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome of a single authorization check. Computed per call and never cached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum Decision {
	/// The principal may proceed.
	Allow(AllowReason),
	/// The principal must be turned away.
	Deny(DenyReason),
}
impl Decision {
	/// Returns `true` for [`Decision::Allow`].
	pub const fn is_allowed(self) -> bool {
		matches!(self, Decision::Allow(_))
	}

	/// Returns the denial reason, if any.
	pub const fn deny_reason(self) -> Option<DenyReason> {
		match self {
			Decision::Allow(_) => None,
			Decision::Deny(reason) => Some(reason),
		}
	}

	/// Label of the underlying reason.
	pub const fn reason_str(self) -> &'static str {
		match self {
			Decision::Allow(reason) => reason.as_str(),
			Decision::Deny(reason) => reason.as_str(),
		}
	}
}
impl From<Decision> for bool {
	fn from(decision: Decision) -> Self {
		decision.is_allowed()
	}
}
