//! Authorization evaluator: access, create, and publish checks over principal claims.
//!
//! All checks are pure functions of their inputs. A missing principal (`None` claims) is always
//! denied, and role membership is checked before any diocese or parish scope.
//!
//! The free functions in this module use [`Evaluator::default`]; build an [`Evaluator`] from a
//! [`PolicyConfig`](crate::config::PolicyConfig) to change the archdiocese seat.

mod decision;
mod evaluator;
mod requirement;
mod resource;

pub use decision::*;
pub use evaluator::*;
pub use requirement::*;
pub use resource::*;

// std
use std::sync::OnceLock;
// self
use crate::auth::{Claims, DioceseId, ParishId, RoleSet};

/// Checks a principal against a role set and optional diocese/parish scope.
pub fn can_access(
	claims: Option<&Claims>,
	required_role: &RoleSet,
	required_diocese_id: Option<&DioceseId>,
	required_parish_id: Option<&ParishId>,
) -> bool {
	default_evaluator().can_access(claims, required_role, required_diocese_id, required_parish_id)
}

/// Checks whether a principal may create a resource of the given type.
pub fn can_create(claims: Option<&Claims>, resource: ResourceType) -> bool {
	default_evaluator().can_create(claims, resource)
}

/// Like [`can_create`], keyed by the console's resource label; unknown labels are denied.
pub fn can_create_named(claims: Option<&Claims>, resource: &str) -> bool {
	default_evaluator().evaluate_create_named(claims, resource).is_allowed()
}

/// Checks whether a principal may publish content.
pub fn can_publish(claims: Option<&Claims>) -> bool {
	default_evaluator().can_publish(claims)
}

fn default_evaluator() -> &'static Evaluator {
	static EVALUATOR: OnceLock<Evaluator> = OnceLock::new();

	EVALUATOR.get_or_init(Evaluator::default)
}
