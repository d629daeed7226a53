//! Client search for the root list and affiliate tables.

use super::client::Client;

/// Case-insensitive substring match on name or email. A blank query matches
/// everything.
pub fn matches(client: &Client, query: &str) -> bool {
	let query = query.trim().to_lowercase();
	query.is_empty()
		|| client.name.to_lowercase().contains(&query)
		|| client.email.to_lowercase().contains(&query)
}

/// Case-insensitive substring match on name only.
pub fn matches_name(client: &Client, query: &str) -> bool {
	let query = query.trim().to_lowercase();
	query.is_empty() || client.name.to_lowercase().contains(&query)
}
