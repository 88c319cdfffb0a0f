// self
use crate::{
	_prelude::*,
	auth::{Claims, DioceseId, ParishId, Role, RoleSet},
	config::PolicyConfig,
	policy::{AccessRequirement, AllowReason, Decision, DenyReason, ResourceType},
};

/// Pure authorization evaluator.
///
/// Every method is total over its inputs and free of side effects, so a single evaluator can be
/// shared across threads and called on every navigation without coordination.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Evaluator {
	config: PolicyConfig,
}
impl Evaluator {
	/// Creates an evaluator with the provided policy configuration.
	pub fn new(config: PolicyConfig) -> Self {
		Self { config }
	}

	/// Policy configuration in effect.
	pub fn config(&self) -> &PolicyConfig {
		&self.config
	}

	/// Decides whether the principal satisfies a route requirement.
	pub fn evaluate_access(
		&self,
		claims: Option<&Claims>,
		requirement: &AccessRequirement,
	) -> Decision {
		self.access_decision(
			claims,
			&requirement.required_role,
			requirement.required_diocese_id.as_ref(),
			requirement.required_parish_id.as_ref(),
		)
	}

	/// Boolean form of the access check.
	pub fn can_access(
		&self,
		claims: Option<&Claims>,
		required_role: &RoleSet,
		required_diocese_id: Option<&DioceseId>,
		required_parish_id: Option<&ParishId>,
	) -> bool {
		self.access_decision(claims, required_role, required_diocese_id, required_parish_id)
			.is_allowed()
	}

	/// Decides whether the principal may create a resource of the given type.
	pub fn evaluate_create(&self, claims: Option<&Claims>, resource: ResourceType) -> Decision {
		let Some(claims) = claims else {
			return Decision::Deny(DenyReason::Unauthenticated);
		};
		let permitted = match resource {
			ResourceType::Diocese => matches!(claims.role, Role::SuperAdmin),
			ResourceType::Parish => matches!(claims.role, Role::SuperAdmin | Role::DioceseAdmin),
			ResourceType::Church => matches!(
				claims.role,
				Role::SuperAdmin | Role::DioceseAdmin | Role::ParishAdmin
			),
			ResourceType::News | ResourceType::DonationType | ResourceType::Notification =>
				!matches!(claims.role, Role::ChurchAdmin),
		};

		if permitted {
			Decision::Allow(AllowReason::RolePermitted)
		} else {
			Decision::Deny(DenyReason::RoleCannotCreate)
		}
	}

	/// Boolean form of the create check.
	pub fn can_create(&self, claims: Option<&Claims>, resource: ResourceType) -> bool {
		self.evaluate_create(claims, resource).is_allowed()
	}

	/// Create check keyed by the raw resource label; unknown labels are denied.
	pub fn evaluate_create_named(&self, claims: Option<&Claims>, resource: &str) -> Decision {
		if claims.is_none() {
			return Decision::Deny(DenyReason::Unauthenticated);
		}

		match ResourceType::from_str(resource) {
			Ok(resource) => self.evaluate_create(claims, resource),
			Err(_) => Decision::Deny(DenyReason::UnrecognizedResource),
		}
	}

	/// Decides whether the principal may publish content.
	pub fn evaluate_publish(&self, claims: Option<&Claims>) -> Decision {
		match claims.map(|claims| claims.role) {
			None => Decision::Deny(DenyReason::Unauthenticated),
			Some(
				Role::SuperAdmin | Role::ArchdioceseAdmin | Role::DioceseAdmin | Role::ParishAdmin,
			) => Decision::Allow(AllowReason::RolePermitted),
			Some(Role::ChurchAdmin | Role::User) => Decision::Deny(DenyReason::RoleCannotPublish),
		}
	}

	/// Boolean form of the publish check.
	pub fn can_publish(&self, claims: Option<&Claims>) -> bool {
		self.evaluate_publish(claims).is_allowed()
	}

	fn access_decision(
		&self,
		claims: Option<&Claims>,
		required_role: &RoleSet,
		required_diocese_id: Option<&DioceseId>,
		required_parish_id: Option<&ParishId>,
	) -> Decision {
		let Some(claims) = claims else {
			return Decision::Deny(DenyReason::Unauthenticated);
		};

		// Role membership always gates scope checks.
		if !required_role.contains(claims.role) {
			return Decision::Deny(DenyReason::RoleNotAccepted);
		}

		match claims.role {
			Role::SuperAdmin => Decision::Allow(AllowReason::FullAccess),
			Role::ArchdioceseAdmin => match required_diocese_id {
				Some(diocese) if diocese != &self.config.archdiocese_seat =>
					Decision::Deny(DenyReason::OutsideArchdioceseSeat),
				_ => Decision::Allow(AllowReason::ArchdioceseSeat),
			},
			Role::DioceseAdmin =>
				if scope_matches(required_diocese_id, claims.diocese_id.as_ref()) {
					Decision::Allow(AllowReason::WithinDiocese)
				} else {
					Decision::Deny(DenyReason::DioceseMismatch)
				},
			// Church administrators are scoped through their parish.
			Role::ParishAdmin | Role::ChurchAdmin => {
				if !scope_matches(required_parish_id, claims.parish_id.as_ref()) {
					return Decision::Deny(DenyReason::ParishMismatch);
				}
				if !scope_matches(required_diocese_id, claims.diocese_id.as_ref()) {
					return Decision::Deny(DenyReason::DioceseMismatch);
				}

				Decision::Allow(AllowReason::WithinParish)
			},
			Role::User => Decision::Deny(DenyReason::NoScopePolicy),
		}
	}
}

fn scope_matches<T>(required: Option<&T>, held: Option<&T>) -> bool
where
	T: PartialEq,
{
	match required {
		Some(required) => held == Some(required),
		None => true,
	}
}
