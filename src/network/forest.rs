use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use thiserror::Error;

use super::client::{Client, ClientId};

/// Where a client sits in the referral forest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Placement {
	/// Top of a tree, referred by nobody.
	Root,
	/// Referred by the given sponsor.
	ChildOf(ClientId),
}

/// A link the forest refused to record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ForestError {
	/// Id is not in the client table.
	#[error("unknown client `{0}`")]
	UnknownClient(ClientId),
	/// Sponsor listed among its own referrals.
	#[error("client `{0}` cannot refer itself")]
	SelfReferral(ClientId),
	/// Client is already a root or already has a sponsor.
	#[error("client `{client}` is already placed as {placement:?}")]
	AlreadyPlaced {
		/// The client being placed again.
		client: ClientId,
		/// Where it already sits.
		placement: Placement,
	},
	/// Sponsor is neither a root nor a referral.
	#[error("sponsor `{0}` is not placed in the forest")]
	UnplacedSponsor(ClientId),
	/// Same referral appears twice in one link.
	#[error("client `{0}` listed twice in one link")]
	DuplicateReferral(ClientId),
	/// Referrals would sit deeper than the forest allows.
	#[error("linking under `{sponsor}` would reach depth {depth}, max is {max}")]
	DepthExceeded {
		/// Sponsor of the rejected link.
		sponsor: ClientId,
		/// Depth the referrals would have had.
		depth: usize,
		/// Configured maximum.
		max: usize,
	},
}

/// Sponsor → referrals forest over a fixed client table.
///
/// Every placed client is tagged [`Placement::Root`] or
/// [`Placement::ChildOf`]. [`add_root`](Self::add_root) and
/// [`link`](Self::link) reject anything that would give a client two
/// sponsors, refer a root, reference an unknown id or go deeper than
/// `max_depth`, so the structure is a forest by construction.
#[derive(Clone, Debug)]
pub struct ReferralForest {
	known: HashSet<ClientId>,
	placements: HashMap<ClientId, Placement>,
	edges: IndexMap<ClientId, Vec<ClientId>>,
	roots: Vec<ClientId>,
	max_depth: usize,
}

impl ReferralForest {
	/// Empty forest over `clients`, allowing referrals down to `max_depth`.
	pub fn new<'a>(clients: impl IntoIterator<Item = &'a Client>, max_depth: usize) -> Self {
		Self {
			known: clients.into_iter().map(|c| c.id.clone()).collect(),
			placements: HashMap::new(),
			edges: IndexMap::new(),
			roots: Vec::new(),
			max_depth,
		}
	}

	/// Place `id` as a root.
	pub fn add_root(&mut self, id: &ClientId) -> Result<(), ForestError> {
		self.ensure_known(id)?;
		self.ensure_unplaced(id)?;
		self.placements.insert(id.clone(), Placement::Root);
		self.roots.push(id.clone());
		Ok(())
	}

	/// Record `referrals` under `sponsor`, appending to any existing list.
	///
	/// The link is validated as a whole; on error nothing is recorded. An
	/// empty slice is accepted and leaves the mapping untouched.
	pub fn link(&mut self, sponsor: &ClientId, referrals: &[ClientId]) -> Result<(), ForestError> {
		self.ensure_known(sponsor)?;
		let depth = self
			.depth_of(sponsor)
			.ok_or_else(|| ForestError::UnplacedSponsor(sponsor.clone()))?
			+ 1;
		if referrals.is_empty() {
			return Ok(());
		}
		if depth > self.max_depth {
			return Err(ForestError::DepthExceeded {
				sponsor: sponsor.clone(),
				depth,
				max: self.max_depth,
			});
		}

		let mut seen = HashSet::with_capacity(referrals.len());
		for referral in referrals {
			self.ensure_known(referral)?;
			if referral == sponsor {
				return Err(ForestError::SelfReferral(referral.clone()));
			}
			self.ensure_unplaced(referral)?;
			if !seen.insert(referral) {
				return Err(ForestError::DuplicateReferral(referral.clone()));
			}
		}

		for referral in referrals {
			self.placements
				.insert(referral.clone(), Placement::ChildOf(sponsor.clone()));
		}
		self.edges
			.entry(sponsor.clone())
			.or_default()
			.extend_from_slice(referrals);
		Ok(())
	}

	fn ensure_known(&self, id: &ClientId) -> Result<(), ForestError> {
		if self.known.contains(id) {
			Ok(())
		} else {
			Err(ForestError::UnknownClient(id.clone()))
		}
	}

	fn ensure_unplaced(&self, id: &ClientId) -> Result<(), ForestError> {
		match self.placements.get(id) {
			Some(placement) => Err(ForestError::AlreadyPlaced {
				client: id.clone(),
				placement: placement.clone(),
			}),
			None => Ok(()),
		}
	}

	/// Roots in insertion order.
	pub fn roots(&self) -> &[ClientId] {
		&self.roots
	}

	/// Direct referrals of `id` in insertion order; empty for leaves.
	pub fn referrals_of(&self, id: &ClientId) -> &[ClientId] {
		self.edges.get(id).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Where `id` sits, if placed.
	pub fn placement(&self, id: &ClientId) -> Option<&Placement> {
		self.placements.get(id)
	}

	/// The client that referred `id`; `None` for roots and unplaced clients.
	pub fn sponsor_of(&self, id: &ClientId) -> Option<&ClientId> {
		match self.placements.get(id)? {
			Placement::Root => None,
			Placement::ChildOf(sponsor) => Some(sponsor),
		}
	}

	/// Depth of a placed client (roots are 0); `None` when unplaced.
	pub fn depth_of(&self, id: &ClientId) -> Option<usize> {
		let mut depth = 0;
		let mut current = id;
		loop {
			match self.placements.get(current)? {
				Placement::Root => return Some(depth),
				Placement::ChildOf(sponsor) => {
					depth += 1;
					current = sponsor;
				}
			}
		}
	}

	/// Number of sponsors with at least one referral.
	pub fn sponsor_count(&self) -> usize {
		self.edges.len()
	}

	/// Number of placed referrals across all sponsors.
	pub fn referral_count(&self) -> usize {
		self.edges.values().map(Vec::len).sum()
	}

	/// Sponsor → referrals mapping in insertion order.
	pub fn edges(&self) -> impl Iterator<Item = (&ClientId, &[ClientId])> {
		self.edges.iter().map(|(k, v)| (k, v.as_slice()))
	}
}
