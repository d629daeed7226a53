use std::fmt;

use chrono::NaiveDate;

/// Stable client identifier, rendered as `client-<n>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClientId(String);

impl ClientId {
	/// Identifier for the `n`-th generated client (1-based).
	pub fn numbered(n: usize) -> Self {
		Self(format!("client-{n}"))
	}

	/// The id as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl From<&str> for ClientId {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}

impl From<String> for ClientId {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl fmt::Display for ClientId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Categorical client type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClientKind {
	/// Private individual.
	Particular,
	/// Manages accounts on behalf of others.
	Manager,
	/// Earns commissions on referrals.
	Affiliate,
	/// Supplier.
	Vendor,
}

impl ClientKind {
	/// Every kind, in display order.
	pub const ALL: [ClientKind; 4] = [
		ClientKind::Particular,
		ClientKind::Manager,
		ClientKind::Affiliate,
		ClientKind::Vendor,
	];

	/// Display label.
	pub fn label(self) -> &'static str {
		match self {
			ClientKind::Particular => "Particular",
			ClientKind::Manager => "Manager",
			ClientKind::Affiliate => "Affiliate",
			ClientKind::Vendor => "Vendor",
		}
	}
}

impl fmt::Display for ClientKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// A CRM client. Immutable once generated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Client {
	/// Unique id.
	pub id: ClientId,
	/// Display name, `First Last`.
	pub name: String,
	/// Contact email.
	pub email: String,
	/// Contact phone, `+1` prefixed.
	pub phone: String,
	/// Client type.
	pub kind: ClientKind,
	/// Date the client was created.
	pub created_at: NaiveDate,
}

impl Client {
	/// Uppercased first letter of every word in the name, e.g. `"JS"`.
	pub fn initials(&self) -> String {
		initials(&self.name)
	}

	/// Creation date as `Mar 7, 2024`.
	pub fn created_label(&self) -> String {
		self.created_at.format("%b %-d, %Y").to_string()
	}
}

/// Uppercased first letter of every word in `name`.
pub fn initials(name: &str) -> String {
	name.split_whitespace()
		.filter_map(|word| word.chars().next())
		.flat_map(char::to_uppercase)
		.collect()
}
