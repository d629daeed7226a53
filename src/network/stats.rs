//! Totals and per-sponsor figures, plus currency formatting.

use super::ReferralNetwork;
use super::client::ClientId;

/// Aggregate figures shown on the network page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NetworkTotals {
	/// Sum of every client's `total_referrals`.
	pub total_referrals: usize,
	/// Clients with at least one referral.
	pub total_sponsors: usize,
	/// Sum of every client's commissions.
	pub total_commissions: u64,
}

impl NetworkTotals {
	/// Totals over the whole network.
	pub fn of(network: &ReferralNetwork) -> Self {
		let clients = network.clients();
		Self {
			total_referrals: clients.iter().map(|c| c.total_referrals).sum(),
			total_sponsors: network.forest().sponsor_count(),
			total_commissions: clients.iter().map(|c| c.commissions as u64).sum(),
		}
	}
}

/// Figures for a single sponsor's page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SponsorSummary {
	/// Direct referrals.
	pub affiliates: usize,
	/// The sponsor's own commission figure.
	pub commissions: u32,
	/// `commissions / affiliates` rounded to whole dollars, 0 without
	/// affiliates.
	pub avg_commission: u32,
	/// Affiliates whose status is not Inactive.
	pub active_affiliates: usize,
	/// Inactive affiliates.
	pub inactive_affiliates: usize,
}

impl SponsorSummary {
	/// Summary for `id`; `None` when the client is unknown.
	pub fn of(network: &ReferralNetwork, id: &ClientId) -> Option<Self> {
		let sponsor = network.get(id)?;
		let (active, inactive) = network
			.referred(id)
			.fold((0, 0), |(a, i), affiliate| {
				if affiliate.status.is_active() {
					(a + 1, i)
				} else {
					(a, i + 1)
				}
			});
		Some(Self {
			affiliates: sponsor.total_referrals,
			commissions: sponsor.commissions,
			avg_commission: average(sponsor.commissions, sponsor.total_referrals),
			active_affiliates: active,
			inactive_affiliates: inactive,
		})
	}
}

/// Rounded `total / count`, halves away from zero; 0 when `count` is 0.
fn average(total: u32, count: usize) -> u32 {
	if count == 0 {
		return 0;
	}
	let count = count as u32;
	(total + count / 2) / count
}

/// Whole dollars with thousands separators, e.g. `$12,345`.
pub fn format_currency(amount: u64) -> String {
	format!("${}", group_thousands(amount))
}

/// Decimal digits with `,` between groups of three.
pub fn group_thousands(value: u64) -> String {
	let digits = value.to_string();
	let mut out = String::with_capacity(digits.len() + digits.len() / 3);
	for (i, ch) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			out.push(',');
		}
		out.push(ch);
	}
	out
}
