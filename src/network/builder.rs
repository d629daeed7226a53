use std::ops::RangeInclusive;

use log::warn;
use rand::Rng;

use super::client::{Client, ClientId};
use super::forest::ReferralForest;

/// Slice sizes used when carving the client pool into a forest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationRules {
	/// Leading clients that become roots.
	pub root_count: usize,
	/// Direct referrals drawn per root.
	pub first_level: RangeInclusive<usize>,
	/// Sub-referrals drawn per direct referral.
	pub second_level: RangeInclusive<usize>,
	/// Deepest level a referral may sit at (roots are 0).
	pub max_depth: usize,
}

impl Default for GenerationRules {
	fn default() -> Self {
		Self {
			root_count: 5,
			first_level: 1..=3,
			second_level: 0..=1,
			max_depth: 2,
		}
	}
}

/// Cursor over the clients not yet placed.
struct Pool<'a> {
	remaining: &'a [Client],
}

impl<'a> Pool<'a> {
	fn take(&mut self, n: usize) -> Vec<ClientId> {
		let (head, tail) = self.remaining.split_at(n.min(self.remaining.len()));
		self.remaining = tail;
		head.iter().map(|c| c.id.clone()).collect()
	}
}

/// Build the referral forest: the first `root_count` clients are roots, each
/// root greedily takes a slice of the remaining pool as direct referrals, and
/// each of those takes a further slice as sub-referrals.
///
/// Never fails. An exhausted pool yields empty slices.
pub fn build_forest<R: Rng>(
	clients: &[Client],
	rules: &GenerationRules,
	rng: &mut R,
) -> ReferralForest {
	let mut forest = ReferralForest::new(clients, rules.max_depth);
	let (roots, rest) = clients.split_at(rules.root_count.min(clients.len()));
	let mut pool = Pool { remaining: rest };

	for root in roots {
		if let Err(err) = forest.add_root(&root.id) {
			warn!("skipping root {}: {err}", root.id);
			continue;
		}

		let referrals = pool.take(rng.gen_range(rules.first_level.clone()));
		if let Err(err) = forest.link(&root.id, &referrals) {
			warn!("dropping referrals of {}: {err}", root.id);
			continue;
		}

		for referral in &referrals {
			let subs = pool.take(rng.gen_range(rules.second_level.clone()));
			if let Err(err) = forest.link(referral, &subs) {
				warn!("dropping sub-referrals of {referral}: {err}");
			}
		}
	}

	forest
}
