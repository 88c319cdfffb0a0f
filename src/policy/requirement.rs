// self
use crate::{
	_prelude::*,
	auth::{DioceseId, ParishId, RoleSet},
};

/// Access requirement attached to a protected route. Built per route; never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRequirement {
	/// Roles accepted by the route.
	pub required_role: RoleSet,
	/// Diocese the route operates on, if any.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub required_diocese_id: Option<DioceseId>,
	/// Parish the route operates on, if any.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub required_parish_id: Option<ParishId>,
}
impl AccessRequirement {
	/// Creates a requirement accepting the given role or role set with no scope restriction.
	pub fn new(required_role: impl Into<RoleSet>) -> Self {
		Self {
			required_role: required_role.into(),
			required_diocese_id: None,
			required_parish_id: None,
		}
	}

	/// Restricts the requirement to a diocese.
	pub fn in_diocese(mut self, diocese: DioceseId) -> Self {
		self.required_diocese_id = Some(diocese);

		self
	}

	/// Restricts the requirement to a parish.
	pub fn in_parish(mut self, parish: ParishId) -> Self {
		self.required_parish_id = Some(parish);

		self
	}
}
