pub mod network;
pub mod not_found;
pub mod sponsor;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use log::warn;

use crate::network::NetworkConfig;

/// Network configuration from the `seed` and `clients` query parameters,
/// falling back to defaults when they do not parse. Also provided as context
/// so links can carry the overrides along.
fn config_from_query() -> NetworkConfig {
	let config = use_query_map()
		.with_untracked(|query| {
			NetworkConfig::with_overrides(
				query.get("seed").as_deref(),
				query.get("clients").as_deref(),
			)
		})
		.unwrap_or_else(|err| {
			warn!("ignoring query overrides: {err}");
			NetworkConfig::default()
		});
	provide_context(config.clone());
	config
}
