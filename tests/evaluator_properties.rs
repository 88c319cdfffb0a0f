// self
use diocese_authz::{
	auth::{Claims, DioceseId, ParishId, Role, RoleSet},
	can_access, can_create, can_create_named, can_publish,
	policy::{AccessRequirement, Decision, DenyReason, Evaluator, ResourceType},
};

fn diocese(id: &str) -> DioceseId {
	DioceseId::new(id).expect("Failed to build diocese identifier for evaluator tests.")
}

fn parish(id: &str) -> ParishId {
	ParishId::new(id).expect("Failed to build parish identifier for evaluator tests.")
}

fn claims_for(role: Role) -> Claims {
	Claims::new(role).with_diocese(diocese("D1")).with_parish(parish("P1"))
}

fn all_role_sets() -> Vec<RoleSet> {
	let mut sets = Vec::new();

	// Every non-empty subset of the six roles.
	for mask in 1_u8..(1 << Role::ALL.len()) {
		let roles = Role::ALL
			.iter()
			.enumerate()
			.filter(|(i, _)| mask & (1 << i) != 0)
			.map(|(_, role)| *role);

		sets.push(RoleSet::new(roles).expect("Non-empty subsets should build."));
	}

	sets
}

fn scope_options() -> Vec<(Option<DioceseId>, Option<ParishId>)> {
	let dioceses = [None, Some(diocese("D1")), Some(diocese("D2")), Some(diocese("archdiocese"))];
	let parishes = [None, Some(parish("P1")), Some(parish("P2"))];

	dioceses
		.iter()
		.flat_map(|d| parishes.iter().map(move |p| (d.clone(), p.clone())))
		.collect()
}

#[test]
fn super_admin_passes_every_requirement_that_accepts_it() {
	let claims = Claims::new(Role::SuperAdmin);

	for roles in all_role_sets().into_iter().filter(|set| set.contains(Role::SuperAdmin)) {
		for (d, p) in scope_options() {
			assert!(
				can_access(Some(&claims), &roles, d.as_ref(), p.as_ref()),
				"Super admin must pass {roles} with diocese {d:?} and parish {p:?}."
			);
		}
	}
}

#[test]
fn absent_claims_are_always_denied() {
	for roles in all_role_sets() {
		for (d, p) in scope_options() {
			assert!(!can_access(None, &roles, d.as_ref(), p.as_ref()));
		}
	}
	for kind in ResourceType::ALL {
		assert!(!can_create(None, kind));
	}

	assert!(!can_create_named(None, "news"));
	assert!(!can_publish(None));
}

#[test]
fn roles_outside_the_accepted_set_are_denied_regardless_of_scope() {
	let evaluator = Evaluator::default();

	for roles in all_role_sets() {
		for role in Role::ALL.into_iter().filter(|role| !roles.contains(*role)) {
			let claims = claims_for(role);

			for (d, p) in scope_options() {
				let mut requirement = AccessRequirement::new(roles.clone());

				requirement.required_diocese_id = d;
				requirement.required_parish_id = p;

				assert_eq!(
					evaluator.evaluate_access(Some(&claims), &requirement),
					Decision::Deny(DenyReason::RoleNotAccepted)
				);
			}
		}
	}
}

#[test]
fn diocese_admin_is_scoped_to_its_diocese() {
	let claims = Claims::new(Role::DioceseAdmin).with_diocese(diocese("D1"));
	let roles = RoleSet::from(Role::DioceseAdmin);

	assert!(can_access(Some(&claims), &roles, Some(&diocese("D1")), None));
	assert!(!can_access(Some(&claims), &roles, Some(&diocese("D2")), None));
	assert!(can_access(Some(&claims), &roles, None, None));
}

#[test]
fn parish_admin_is_scoped_to_its_parish_and_diocese() {
	let claims =
		Claims::new(Role::ParishAdmin).with_diocese(diocese("D1")).with_parish(parish("P1"));
	let roles = RoleSet::from(Role::ParishAdmin);

	assert!(can_access(Some(&claims), &roles, Some(&diocese("D1")), Some(&parish("P1"))));
	assert!(!can_access(Some(&claims), &roles, Some(&diocese("D1")), Some(&parish("P2"))));
	assert!(!can_access(Some(&claims), &roles, Some(&diocese("D2")), Some(&parish("P1"))));
	assert!(can_access(Some(&claims), &roles, None, Some(&parish("P1"))));
}

#[test]
fn church_admin_shares_the_parish_policy() {
	let parish_claims = claims_for(Role::ParishAdmin);
	let church_claims = claims_for(Role::ChurchAdmin);
	let parish_roles = RoleSet::from(Role::ParishAdmin);
	let church_roles = RoleSet::from(Role::ChurchAdmin);

	for (d, p) in scope_options() {
		assert_eq!(
			can_access(Some(&parish_claims), &parish_roles, d.as_ref(), p.as_ref()),
			can_access(Some(&church_claims), &church_roles, d.as_ref(), p.as_ref()),
			"Church and parish admins must agree for diocese {d:?} and parish {p:?}."
		);
	}
}

#[test]
fn archdiocese_admin_reads_anywhere_but_writes_only_at_the_seat() {
	let claims = claims_for(Role::ArchdioceseAdmin);
	let roles = RoleSet::from(Role::ArchdioceseAdmin);

	assert!(can_access(Some(&claims), &roles, None, None));
	assert!(can_access(Some(&claims), &roles, None, Some(&parish("P2"))));
	assert!(can_access(Some(&claims), &roles, Some(&diocese("archdiocese")), None));
	assert!(!can_access(Some(&claims), &roles, Some(&diocese("D1")), None));
}

#[test]
fn create_table_matches_roles() {
	let expected: [(ResourceType, &[Role]); 6] = [
		(ResourceType::Diocese, &[Role::SuperAdmin]),
		(ResourceType::Parish, &[Role::SuperAdmin, Role::DioceseAdmin]),
		(ResourceType::Church, &[Role::SuperAdmin, Role::DioceseAdmin, Role::ParishAdmin]),
		(ResourceType::News, &[
			Role::SuperAdmin,
			Role::ArchdioceseAdmin,
			Role::DioceseAdmin,
			Role::ParishAdmin,
			Role::User,
		]),
		(ResourceType::DonationType, &[
			Role::SuperAdmin,
			Role::ArchdioceseAdmin,
			Role::DioceseAdmin,
			Role::ParishAdmin,
			Role::User,
		]),
		(ResourceType::Notification, &[
			Role::SuperAdmin,
			Role::ArchdioceseAdmin,
			Role::DioceseAdmin,
			Role::ParishAdmin,
			Role::User,
		]),
	];

	for (kind, allowed) in expected {
		for role in Role::ALL {
			let claims = Claims::new(role);

			assert_eq!(
				can_create(Some(&claims), kind),
				allowed.contains(&role),
				"Unexpected create decision for {role} on {kind}."
			);
			assert_eq!(can_create_named(Some(&claims), kind.as_str()), allowed.contains(&role));
		}
	}
}

#[test]
fn create_and_publish_examples() {
	assert!(!can_create(Some(&Claims::new(Role::ChurchAdmin)), ResourceType::Church));
	assert!(can_create(Some(&Claims::new(Role::ParishAdmin)), ResourceType::Church));
	assert!(!can_create(Some(&Claims::new(Role::ChurchAdmin)), ResourceType::News));
	assert!(can_create(Some(&Claims::new(Role::DioceseAdmin)), ResourceType::News));
	assert!(!can_create_named(Some(&Claims::new(Role::SuperAdmin)), "event"));
	assert!(!can_publish(Some(&Claims::new(Role::ChurchAdmin))));
	assert!(can_publish(Some(&Claims::new(Role::ParishAdmin))));
	assert!(!can_publish(Some(&Claims::new(Role::User))));
}

#[test]
fn checks_are_idempotent() {
	let evaluator = Evaluator::default();

	for role in Role::ALL {
		let claims = claims_for(role);

		for roles in all_role_sets() {
			for (d, p) in scope_options() {
				let first = evaluator.can_access(Some(&claims), &roles, d.as_ref(), p.as_ref());
				let second = evaluator.can_access(Some(&claims), &roles, d.as_ref(), p.as_ref());

				assert_eq!(first, second);
			}
		}
		for kind in ResourceType::ALL {
			assert_eq!(
				evaluator.evaluate_create(Some(&claims), kind),
				evaluator.evaluate_create(Some(&claims), kind)
			);
		}

		assert_eq!(
			evaluator.evaluate_publish(Some(&claims)),
			evaluator.evaluate_publish(Some(&claims))
		);
	}
}
