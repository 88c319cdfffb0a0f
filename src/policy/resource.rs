// self
use crate::_prelude::*;

/// Error returned when a resource type label is unknown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
#[error("Resource type `{label}` is not recognized.")]
pub struct ResourceTypeParseError {
	/// The offending label.
	pub label: String,
}

/// Entity categories the console can create, each with its own creation policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
	/// Diocese document.
	Diocese,
	/// Parish document.
	Parish,
	/// Church document.
	Church,
	/// News article.
	News,
	/// Donation category.
	DonationType,
	/// Push notification.
	Notification,
}
impl ResourceType {
	/// Every resource type.
	pub const ALL: [ResourceType; 6] = [
		ResourceType::Diocese,
		ResourceType::Parish,
		ResourceType::Church,
		ResourceType::News,
		ResourceType::DonationType,
		ResourceType::Notification,
	];

	/// Returns the label used by the console.
	pub const fn as_str(self) -> &'static str {
		match self {
			ResourceType::Diocese => "diocese",
			ResourceType::Parish => "parish",
			ResourceType::Church => "church",
			ResourceType::News => "news",
			ResourceType::DonationType => "donation_type",
			ResourceType::Notification => "notification",
		}
	}
}
impl Display for ResourceType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for ResourceType {
	type Err = ResourceTypeParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		ResourceType::ALL
			.into_iter()
			.find(|kind| kind.as_str() == s)
			.ok_or_else(|| ResourceTypeParseError { label: s.to_owned() })
	}
}
