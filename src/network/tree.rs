//! Expand/collapse state and the flattened row model behind the referral
//! tree view.

use std::collections::HashMap;

use super::ReferralNetwork;
use super::client::ClientId;

/// Per-node expansion keyed by client id. Nodes without an explicit entry are
/// expanded iff they sit at depth 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpansionState {
	overrides: HashMap<ClientId, bool>,
}

impl ExpansionState {
	/// Expansion of `id`, falling back to the depth-0 default.
	pub fn is_expanded(&self, id: &ClientId, depth: usize) -> bool {
		self.overrides.get(id).copied().unwrap_or(depth == 0)
	}

	/// Record an explicit expansion for `id`.
	pub fn set(&mut self, id: &ClientId, expanded: bool) {
		self.overrides.insert(id.clone(), expanded);
	}

	/// Flip `id` and return its new expansion.
	pub fn toggle(&mut self, id: &ClientId, depth: usize) -> bool {
		let expanded = !self.is_expanded(id, depth);
		self.set(id, expanded);
		expanded
	}

	/// Expand every sponsor in the network.
	pub fn expand_all(&mut self, network: &ReferralNetwork) {
		for (sponsor, _) in network.forest().edges() {
			self.set(sponsor, true);
		}
	}

	/// Collapse every sponsor, roots included.
	pub fn collapse_all(&mut self, network: &ReferralNetwork) {
		for (sponsor, _) in network.forest().edges() {
			self.set(sponsor, false);
		}
	}
}

/// One rendered line of the tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TreeRow {
	/// Client shown on this line.
	pub id: ClientId,
	/// Nesting level, roots are 0.
	pub depth: usize,
	/// Last sibling under its sponsor (or last root).
	pub is_last: bool,
	/// Only nodes with at least one referred client get a control.
	pub has_toggle: bool,
	/// Current expansion of the node.
	pub expanded: bool,
}

impl TreeRow {
	/// Row for `id` at `depth` under the given expansion state.
	pub fn new(
		network: &ReferralNetwork,
		id: &ClientId,
		depth: usize,
		is_last: bool,
		state: &ExpansionState,
	) -> Self {
		let has_toggle = network.get(id).is_some_and(|c| c.has_referrals());
		Self {
			id: id.clone(),
			depth,
			is_last,
			has_toggle,
			expanded: state.is_expanded(id, depth),
		}
	}

	/// Whether the next rows are this node's referrals.
	pub fn shows_children(&self) -> bool {
		self.has_toggle && self.expanded
	}
}

/// Depth-first rows for `roots` and every expanded descendant. Ids absent from
/// the network are skipped.
pub fn visible_rows(
	network: &ReferralNetwork,
	roots: &[ClientId],
	state: &ExpansionState,
) -> Vec<TreeRow> {
	let mut rows = Vec::new();
	push_rows(network, roots, 0, state, &mut rows);
	rows
}

fn push_rows(
	network: &ReferralNetwork,
	ids: &[ClientId],
	depth: usize,
	state: &ExpansionState,
	rows: &mut Vec<TreeRow>,
) {
	let present: Vec<&ClientId> = ids.iter().filter(|id| network.get(id).is_some()).collect();
	for (i, id) in present.iter().enumerate() {
		let row = TreeRow::new(network, id, depth, i + 1 == present.len(), state);
		let descend = row.shows_children();
		rows.push(row);
		if descend {
			let children: Vec<ClientId> = network.referred(id).map(|c| c.id().clone()).collect();
			push_rows(network, &children, depth + 1, state, rows);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::network::config::NetworkConfig;

	fn network() -> ReferralNetwork {
		ReferralNetwork::generate(&NetworkConfig::default())
	}

	#[test]
	fn roots_start_expanded_children_collapsed() {
		let state = ExpansionState::default();
		let id = ClientId::numbered(1);
		assert!(state.is_expanded(&id, 0));
		assert!(!state.is_expanded(&id, 1));
	}

	#[test]
	fn toggle_flips_only_that_node() {
		let mut state = ExpansionState::default();
		let (a, b) = (ClientId::numbered(1), ClientId::numbered(2));
		assert!(!state.toggle(&a, 0));
		assert!(!state.is_expanded(&a, 0));
		assert!(state.is_expanded(&b, 0));
		assert!(state.toggle(&a, 0));
	}

	#[test]
	fn leaf_rows_have_no_toggle() {
		let network = network();
		let state = ExpansionState::default();
		for client in network.clients() {
			let row = TreeRow::new(&network, client.id(), 1, false, &state);
			assert_eq!(row.has_toggle, !client.referred.is_empty());
			if client.referred.is_empty() {
				assert!(!row.shows_children());
			}
		}
	}

	#[test]
	fn default_rows_show_roots_and_first_level() {
		let network = network();
		let roots = network.forest().roots().to_vec();
		let rows = visible_rows(&network, &roots, &ExpansionState::default());

		let first_level: usize = roots.iter().map(|r| network.forest().referrals_of(r).len()).sum();
		assert_eq!(rows.len(), roots.len() + first_level);
		assert!(rows.iter().all(|r| r.depth <= 1));
		assert_eq!(rows[0].id, roots[0]);
		assert!(rows.iter().filter(|r| r.depth == 0).last().unwrap().is_last);
	}

	#[test]
	fn expand_all_reaches_every_placed_client() {
		let network = network();
		let roots = network.forest().roots().to_vec();
		let mut state = ExpansionState::default();
		state.expand_all(&network);
		let rows = visible_rows(&network, &roots, &state);

		assert_eq!(rows.len(), roots.len() + network.forest().referral_count());
		assert!(
			rows.iter().any(|r| r.depth == 2) || network.forest().edges().count() == roots.len()
		);
	}

	#[test]
	fn toggling_a_first_level_sponsor_reveals_its_subs() {
		let (network, sponsor, subs) = (0..)
			.find_map(|seed| {
				let config = NetworkConfig { seed, ..NetworkConfig::default() };
				let network = ReferralNetwork::generate(&config);
				let (sponsor, subs) = network
					.forest()
					.edges()
					.find(|(sponsor, _)| network.forest().depth_of(sponsor) == Some(1))
					.map(|(sponsor, subs)| (sponsor.clone(), subs.to_vec()))?;
				Some((network, sponsor, subs))
			})
			.unwrap();
		let roots = network.forest().roots().to_vec();
		let mut state = ExpansionState::default();
		let before = visible_rows(&network, &roots, &state);
		assert!(before.iter().all(|r| r.depth <= 1));

		assert!(state.toggle(&sponsor, 1));
		let after = visible_rows(&network, &roots, &state);
		assert_eq!(after.len(), before.len() + subs.len());
		let at = after.iter().position(|r| r.id == sponsor).unwrap();
		assert!(after[at].shows_children());
		for (offset, sub) in subs.iter().enumerate() {
			assert_eq!(after[at + 1 + offset].id, *sub);
			assert_eq!(after[at + 1 + offset].depth, 2);
			assert!(!after[at + 1 + offset].has_toggle);
		}
	}

	#[test]
	fn collapse_all_leaves_only_roots() {
		let network = network();
		let roots = network.forest().roots().to_vec();
		let mut state = ExpansionState::default();
		state.collapse_all(&network);
		let rows = visible_rows(&network, &roots, &state);
		assert_eq!(rows.len(), roots.len());
	}

	#[test]
	fn unknown_ids_are_skipped() {
		let network = network();
		let roots = vec![ClientId::from("client-999"), network.forest().roots()[0].clone()];
		let mut state = ExpansionState::default();
		state.collapse_all(&network);
		let rows = visible_rows(&network, &roots, &state);
		assert_eq!(rows.len(), 1);
		assert!(rows[0].is_last);
	}
}
