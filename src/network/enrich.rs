use std::collections::HashMap;
use std::fmt;

use log::warn;
use rand::Rng;

use super::client::{Client, ClientId};
use super::forest::ReferralForest;
use super::rng::entity_rng;

/// Upper bound (exclusive) of a generated commission figure, in dollars.
pub const MAX_COMMISSION: u32 = 5000;

const VERY_ACTIVE_ABOVE: u32 = 3000;
const ACTIVE_ABOVE: u32 = 1000;

/// Activity label derived from a commission figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReferralStatus {
	/// Commissions above 3000.
	VeryActive,
	/// Commissions above 1000.
	Active,
	/// Commissions of 1000 or less.
	Inactive,
}

impl ReferralStatus {
	/// Threshold `commissions` into a status.
	pub fn from_commissions(commissions: u32) -> Self {
		if commissions > VERY_ACTIVE_ABOVE {
			ReferralStatus::VeryActive
		} else if commissions > ACTIVE_ABOVE {
			ReferralStatus::Active
		} else {
			ReferralStatus::Inactive
		}
	}

	/// Display label, e.g. `Very Active`.
	pub fn label(self) -> &'static str {
		match self {
			ReferralStatus::VeryActive => "Very Active",
			ReferralStatus::Active => "Active",
			ReferralStatus::Inactive => "Inactive",
		}
	}

	/// Anything but [`ReferralStatus::Inactive`].
	pub fn is_active(self) -> bool {
		self != ReferralStatus::Inactive
	}
}

impl fmt::Display for ReferralStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// A client with its resolved referrals and derived figures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnrichedClient {
	/// The underlying client.
	pub client: Client,
	/// Resolved direct referrals, in link order.
	pub referred: Vec<Client>,
	/// `referred.len()`.
	pub total_referrals: usize,
	/// Commission figure in whole dollars.
	pub commissions: u32,
	/// Status derived from `commissions`.
	pub status: ReferralStatus,
}

impl EnrichedClient {
	/// Wrap `client` and derive the computed fields.
	pub fn new(client: Client, referred: Vec<Client>, commissions: u32) -> Self {
		let mut enriched = Self {
			client,
			referred,
			total_referrals: 0,
			commissions,
			status: ReferralStatus::Inactive,
		};
		enriched.rederive();
		enriched
	}

	/// Recompute `total_referrals` and `status` from `referred` and
	/// `commissions`.
	pub fn rederive(&mut self) {
		self.total_referrals = self.referred.len();
		self.status = ReferralStatus::from_commissions(self.commissions);
	}

	/// The client's id.
	pub fn id(&self) -> &ClientId {
		&self.client.id
	}

	/// Whether this client referred anyone.
	pub fn has_referrals(&self) -> bool {
		self.total_referrals > 0
	}
}

/// Commission figure for a client, stable for a given seed.
pub fn commission_for(seed: u64, id: &ClientId) -> u32 {
	entity_rng(seed, &format!("commission:{id}")).gen_range(0..MAX_COMMISSION)
}

/// Resolve each client's referral ids against `clients` and attach the
/// derived fields. Ids missing from the table are skipped.
pub fn enrich<F>(
	clients: &[Client],
	forest: &ReferralForest,
	commissions: F,
) -> Vec<EnrichedClient>
where
	F: Fn(&ClientId) -> u32,
{
	let by_id: HashMap<&ClientId, &Client> = clients.iter().map(|c| (&c.id, c)).collect();

	clients
		.iter()
		.map(|client| {
			let referred = forest
				.referrals_of(&client.id)
				.iter()
				.filter_map(|id| {
					let found = by_id.get(id).copied().cloned();
					if found.is_none() {
						warn!("{} refers unknown client {id}", client.id);
					}
					found
				})
				.collect();
			EnrichedClient::new(client.clone(), referred, commissions(&client.id))
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use chrono::NaiveDate;

	use super::*;
	use crate::network::client::ClientKind;

	fn client(n: usize) -> Client {
		Client {
			id: ClientId::numbered(n),
			name: format!("Client {n}"),
			email: format!("client{n}@example.com"),
			phone: "+1".into(),
			kind: ClientKind::Affiliate,
			created_at: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
		}
	}

	#[test]
	fn status_thresholds() {
		assert_eq!(ReferralStatus::from_commissions(3001), ReferralStatus::VeryActive);
		assert_eq!(ReferralStatus::from_commissions(3000), ReferralStatus::Active);
		assert_eq!(ReferralStatus::from_commissions(1001), ReferralStatus::Active);
		assert_eq!(ReferralStatus::from_commissions(1000), ReferralStatus::Inactive);
		assert_eq!(ReferralStatus::from_commissions(0), ReferralStatus::Inactive);
	}

	#[test]
	fn status_labels() {
		assert_eq!(ReferralStatus::VeryActive.to_string(), "Very Active");
		assert_eq!(ReferralStatus::Active.label(), "Active");
		assert!(!ReferralStatus::Inactive.is_active());
	}

	#[test]
	fn resolves_referrals_in_order() {
		let clients: Vec<_> = (1..=4).map(client).collect();
		let mut forest = ReferralForest::new(&clients, 2);
		forest.add_root(&clients[0].id).unwrap();
		forest.link(&clients[0].id, &[clients[2].id.clone(), clients[1].id.clone()]).unwrap();

		let enriched = enrich(&clients, &forest, |_| 2500);
		assert_eq!(enriched.len(), 4);
		assert_eq!(enriched[0].referred, vec![clients[2].clone(), clients[1].clone()]);
		assert_eq!(enriched[0].total_referrals, 2);
		assert_eq!(enriched[0].status, ReferralStatus::Active);
		assert_eq!(enriched[3].total_referrals, 0);
	}

	#[test]
	fn skips_ids_missing_from_the_table() {
		let clients: Vec<_> = (1..=3).map(client).collect();
		let mut forest = ReferralForest::new(&clients, 2);
		forest.add_root(&clients[0].id).unwrap();
		forest.link(&clients[0].id, &[clients[1].id.clone(), clients[2].id.clone()]).unwrap();

		let table = &clients[..2];
		let enriched = enrich(table, &forest, |_| 0);
		assert_eq!(enriched[0].referred, vec![clients[1].clone()]);
		assert_eq!(enriched[0].total_referrals, 1);
	}

	#[test]
	fn rederive_is_idempotent() {
		let clients: Vec<_> = (1..=3).map(client).collect();
		let mut forest = ReferralForest::new(&clients, 2);
		forest.add_root(&clients[0].id).unwrap();
		forest.link(&clients[0].id, &[clients[1].id.clone()]).unwrap();

		let once = enrich(&clients, &forest, |id| commission_for(1, id));
		let mut twice = once.clone();
		twice.iter_mut().for_each(EnrichedClient::rederive);
		assert_eq!(once, twice);
		assert_eq!(once, enrich(&clients, &forest, |id| commission_for(1, id)));
	}

	#[test]
	fn commissions_are_stable_and_bounded() {
		let id = ClientId::numbered(12);
		assert_eq!(commission_for(3, &id), commission_for(3, &id));
		for n in 1..200 {
			assert!(commission_for(3, &ClientId::numbered(n)) < MAX_COMMISSION);
		}
	}
}
