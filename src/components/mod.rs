pub mod network_tree;
mod stat_card;
mod status_badge;

use leptos::prelude::*;

use crate::network::{ClientId, NetworkConfig};

pub use stat_card::StatCard;
pub use status_badge::StatusBadge;

/// Link to a sponsor page that keeps the active seed and client count.
pub fn sponsor_href(id: &ClientId) -> String {
	let suffix = use_context::<NetworkConfig>()
		.map(|config| config.query_string())
		.unwrap_or_default();
	format!("/sponsors/{id}{suffix}")
}
