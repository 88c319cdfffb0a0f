//! Closed role hierarchy and normalized role sets.

// std
use std::collections::btree_set::Iter;
// crates.io
use serde::{Deserializer, Serializer, de::Error as DeError, ser::SerializeSeq};
// self
use crate::_prelude::*;

/// Error returned when a role label is not part of the hierarchy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
#[error("Role `{label}` is not part of the role hierarchy.")]
pub struct RoleParseError {
	/// The offending label.
	pub label: String,
}

/// Errors emitted when building a [`RoleSet`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum RoleSetError {
	/// A requirement must accept at least one role.
	#[error("Role set cannot be empty.")]
	Empty,
	/// One of the labels did not name a known role.
	#[error(transparent)]
	UnknownRole(#[from] RoleParseError),
}

/// Console roles, ordered by decreasing scope of authority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
	/// Platform operator with unrestricted access.
	SuperAdmin,
	/// Administrator of the metropolitan seat.
	ArchdioceseAdmin,
	/// Administrator of a single diocese.
	DioceseAdmin,
	/// Administrator of a single parish.
	ParishAdmin,
	/// Administrator of a church, scoped through its parish.
	ChurchAdmin,
	/// Signed-in member without administrative rights.
	User,
}
impl Role {
	/// Every role, highest authority first.
	pub const ALL: [Role; 6] = [
		Role::SuperAdmin,
		Role::ArchdioceseAdmin,
		Role::DioceseAdmin,
		Role::ParishAdmin,
		Role::ChurchAdmin,
		Role::User,
	];

	/// Returns the claim label for the role.
	pub const fn as_str(self) -> &'static str {
		match self {
			Role::SuperAdmin => "super_admin",
			Role::ArchdioceseAdmin => "archdiocese_admin",
			Role::DioceseAdmin => "diocese_admin",
			Role::ParishAdmin => "parish_admin",
			Role::ChurchAdmin => "church_admin",
			Role::User => "user",
		}
	}

	/// Position in the hierarchy; `0` is the widest authority.
	pub const fn rank(self) -> u8 {
		match self {
			Role::SuperAdmin => 0,
			Role::ArchdioceseAdmin => 1,
			Role::DioceseAdmin => 2,
			Role::ParishAdmin => 3,
			Role::ChurchAdmin => 4,
			Role::User => 5,
		}
	}

	/// Returns `true` for every role except [`Role::User`].
	pub const fn is_admin(self) -> bool {
		!matches!(self, Role::User)
	}
}
impl Display for Role {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for Role {
	type Err = RoleParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Role::ALL
			.into_iter()
			.find(|role| role.as_str() == s)
			.ok_or_else(|| RoleParseError { label: s.to_owned() })
	}
}

/// Non-empty set of roles accepted by an access requirement.
///
/// Membership is order-insensitive and duplicates collapse, so `[ParishAdmin, DioceseAdmin]`
/// and `[DioceseAdmin, ParishAdmin, DioceseAdmin]` are the same set.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RoleSet(BTreeSet<Role>);
impl RoleSet {
	/// Creates a set from any iterator of roles; rejects empty input.
	pub fn new<I>(roles: I) -> Result<Self, RoleSetError>
	where
		I: IntoIterator<Item = Role>,
	{
		let set = roles.into_iter().collect::<BTreeSet<_>>();

		if set.is_empty() {
			return Err(RoleSetError::Empty);
		}

		Ok(Self(set))
	}

	/// Set containing every role.
	pub fn any() -> Self {
		Self(Role::ALL.into_iter().collect())
	}

	/// Set containing every role except [`Role::User`].
	pub fn admins() -> Self {
		Self(Role::ALL.into_iter().filter(|role| role.is_admin()).collect())
	}

	/// Returns true if the role is accepted.
	pub fn contains(&self, role: Role) -> bool {
		self.0.contains(&role)
	}

	/// Number of accepted roles.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Always false; kept for API symmetry with collection types.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterator over accepted roles, highest authority first.
	pub fn iter(&self) -> RoleIter<'_> {
		RoleIter { inner: self.0.iter() }
	}
}
impl From<Role> for RoleSet {
	fn from(role: Role) -> Self {
		Self(BTreeSet::from([role]))
	}
}
impl<const N: usize> TryFrom<[Role; N]> for RoleSet {
	type Error = RoleSetError;

	fn try_from(value: [Role; N]) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}
impl TryFrom<&[Role]> for RoleSet {
	type Error = RoleSetError;

	fn try_from(value: &[Role]) -> Result<Self, Self::Error> {
		Self::new(value.iter().copied())
	}
}
impl Debug for RoleSet {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_set().entries(self.0.iter()).finish()
	}
}
impl Display for RoleSet {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let labels = self.0.iter().map(|role| role.as_str()).collect::<Vec<_>>();

		f.write_str(&labels.join(" "))
	}
}
impl FromStr for RoleSet {
	type Err = RoleSetError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let roles = s.split_whitespace().map(Role::from_str).collect::<Result<Vec<_>, _>>()?;

		Self::new(roles)
	}
}

/// Iterator over the roles of a [`RoleSet`].
pub struct RoleIter<'a> {
	inner: Iter<'a, Role>,
}
impl Iterator for RoleIter<'_> {
	type Item = Role;

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().copied()
	}
}
impl<'a> IntoIterator for &'a RoleSet {
	type IntoIter = RoleIter<'a>;
	type Item = Role;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
impl Serialize for RoleSet {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut seq = serializer.serialize_seq(Some(self.0.len()))?;

		for role in self.0.iter() {
			seq.serialize_element(role)?;
		}

		seq.end()
	}
}
impl<'de> Deserialize<'de> for RoleSet {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let values = <Vec<Role>>::deserialize(deserializer)?;

		RoleSet::new(values).map_err(DeError::custom)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn labels_round_trip_through_from_str() {
		for role in Role::ALL {
			assert_eq!(Role::from_str(role.as_str()), Ok(role));
		}

		assert!(Role::from_str("Super_Admin").is_err(), "Labels are case-sensitive.");
		assert!(Role::from_str("").is_err());
	}

	#[test]
	fn rank_follows_declaration_order() {
		let ranks = Role::ALL.iter().map(|role| role.rank()).collect::<Vec<_>>();

		assert_eq!(ranks, vec![0, 1, 2, 3, 4, 5]);
		assert!(Role::SuperAdmin < Role::User);
	}

	#[test]
	fn serde_uses_snake_case_labels() {
		let payload =
			serde_json::to_string(&Role::ArchdioceseAdmin).expect("Role should serialize.");

		assert_eq!(payload, "\"archdiocese_admin\"");
		assert!(serde_json::from_str::<Role>("\"bishop\"").is_err());
	}

	#[test]
	fn role_sets_normalize_and_reject_empty() {
		let lhs = RoleSet::new([Role::ParishAdmin, Role::DioceseAdmin, Role::ParishAdmin])
			.expect("Left-hand role set should be valid.");
		let rhs = RoleSet::try_from([Role::DioceseAdmin, Role::ParishAdmin])
			.expect("Right-hand role set should be valid.");

		assert_eq!(lhs, rhs);
		assert_eq!(lhs.len(), 2);
		assert_eq!(lhs.to_string(), "diocese_admin parish_admin");
		assert_eq!(RoleSet::new(Vec::new()), Err(RoleSetError::Empty));
		assert!(RoleSet::try_from(&[][..]).is_err());
	}

	#[test]
	fn role_set_parsing_and_serde() {
		let set = RoleSet::from_str("parish_admin super_admin").expect("Role list should parse.");

		assert!(set.contains(Role::SuperAdmin));
		assert!(!set.contains(Role::User));
		assert!(matches!(
			RoleSet::from_str("parish_admin pope"),
			Err(RoleSetError::UnknownRole(_))
		));
		assert_eq!(RoleSet::from_str("   "), Err(RoleSetError::Empty));

		let payload = serde_json::to_string(&set).expect("Role set should serialize.");

		assert_eq!(payload, r#"["super_admin","parish_admin"]"#);
		assert!(serde_json::from_str::<RoleSet>("[]").is_err());
	}

	#[test]
	fn presets_cover_expected_roles() {
		assert_eq!(RoleSet::any().len(), Role::ALL.len());
		assert!(!RoleSet::admins().contains(Role::User));
		assert_eq!(RoleSet::admins().iter().collect::<Vec<_>>(), Role::ALL[..5].to_vec());
	}
}
