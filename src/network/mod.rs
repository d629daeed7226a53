//! Referral network model: mock clients, the sponsor → affiliate forest, and
//! the figures derived from it.

mod builder;
mod client;
pub mod config;
mod enrich;
mod forest;
mod generate;
mod rng;
pub mod search;
pub mod stats;
pub mod tree;

use std::collections::HashMap;

use log::info;

pub use builder::{GenerationRules, build_forest};
pub use client::{Client, ClientId, ClientKind, initials};
pub use config::{ConfigError, NetworkConfig};
pub use enrich::{EnrichedClient, MAX_COMMISSION, ReferralStatus, commission_for, enrich};
pub use forest::{ForestError, Placement, ReferralForest};
pub use generate::generate_clients;
pub use rng::entity_rng;

/// Enriched clients indexed by id, together with the forest they were built
/// from.
#[derive(Clone, Debug)]
pub struct ReferralNetwork {
	clients: Vec<EnrichedClient>,
	index: HashMap<ClientId, usize>,
	forest: ReferralForest,
}

impl ReferralNetwork {
	/// Generate clients, carve the forest and enrich, all from `config.seed`.
	pub fn generate(config: &NetworkConfig) -> Self {
		let clients = generate_clients(config.client_count, config.seed, config.as_of);
		let mut rng = entity_rng(config.seed, "referral-forest");
		let forest = build_forest(&clients, &config.rules, &mut rng);
		let enriched = enrich(&clients, &forest, |id| commission_for(config.seed, id));
		info!(
			"generated referral network: {} clients, {} roots, {} sponsors",
			enriched.len(),
			forest.roots().len(),
			forest.sponsor_count()
		);
		Self::from_parts(enriched, forest)
	}

	/// Index already enriched clients alongside their forest.
	pub fn from_parts(clients: Vec<EnrichedClient>, forest: ReferralForest) -> Self {
		let index = clients
			.iter()
			.enumerate()
			.map(|(i, c)| (c.id().clone(), i))
			.collect();
		Self {
			clients,
			index,
			forest,
		}
	}

	/// All clients in generation order.
	pub fn clients(&self) -> &[EnrichedClient] {
		&self.clients
	}

	/// The forest the clients were enriched from.
	pub fn forest(&self) -> &ReferralForest {
		&self.forest
	}

	/// Look a client up by id.
	pub fn get(&self, id: &ClientId) -> Option<&EnrichedClient> {
		self.index.get(id).map(|&i| &self.clients[i])
	}

	/// Enriched roots in forest order.
	pub fn roots(&self) -> impl Iterator<Item = &EnrichedClient> {
		self.forest.roots().iter().filter_map(|id| self.get(id))
	}

	/// Enriched records of the clients `id` referred.
	pub fn referred(&self, id: &ClientId) -> impl Iterator<Item = &EnrichedClient> {
		self.get(id)
			.into_iter()
			.flat_map(|c| c.referred.iter())
			.filter_map(|c| self.get(&c.id))
	}

	/// Roots whose name or email contains `query`.
	pub fn search_roots(&self, query: &str) -> Vec<ClientId> {
		self.roots()
			.filter(|c| search::matches(&c.client, query))
			.map(|c| c.id().clone())
			.collect()
	}

	/// Direct referrals of `id` whose name contains `query`.
	pub fn search_referred(&self, id: &ClientId, query: &str) -> Vec<&EnrichedClient> {
		self.referred(id)
			.filter(|c| search::matches_name(&c.client, query))
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn same_config_same_network() {
		let config = NetworkConfig::default();
		let a = ReferralNetwork::generate(&config);
		let b = ReferralNetwork::generate(&config);
		assert_eq!(a.clients(), b.clients());
		assert!(a.forest().edges().eq(b.forest().edges()));
	}

	#[test]
	fn every_client_is_indexed() {
		let network = ReferralNetwork::generate(&NetworkConfig::default());
		assert_eq!(network.clients().len(), 50);
		for client in network.clients() {
			assert_eq!(network.get(client.id()), Some(client));
		}
		assert_eq!(network.get(&ClientId::from("client-0")), None);
	}

	#[test]
	fn referred_matches_forest_order() {
		let network = ReferralNetwork::generate(&NetworkConfig::default());
		for root in network.forest().roots() {
			let ids: Vec<_> = network.referred(root).map(|c| c.id().clone()).collect();
			assert_eq!(ids, network.forest().referrals_of(root));
		}
	}

	#[test]
	fn affiliate_search_filters_by_name() {
		let network = ReferralNetwork::generate(&NetworkConfig::default());
		let root = network.forest().roots()[0].clone();
		let all: Vec<_> = network.referred(&root).collect();
		assert_eq!(network.search_referred(&root, ""), all);

		let first = all[0];
		let last_name = first.client.name.split_whitespace().last().unwrap();
		let hits = network.search_referred(&root, &last_name.to_lowercase());
		assert!(hits.contains(&first));
		assert!(hits.iter().all(|c| c.client.name.contains(last_name)));
		assert!(network.search_referred(&root, "@example.com").is_empty());
		assert!(network.search_referred(&ClientId::from("client-999"), "").is_empty());
	}

	#[test]
	fn search_filters_roots_only() {
		let network = ReferralNetwork::generate(&NetworkConfig::default());
		assert_eq!(network.search_roots(""), network.forest().roots());

		let first = network.roots().next().unwrap();
		let hits = network.search_roots(&first.client.email.to_uppercase());
		assert!(hits.contains(first.id()));
		assert!(hits.iter().all(|id| network.forest().roots().contains(id)));
		assert!(network.search_roots("no-such-client").is_empty());
	}
}
