use std::sync::Arc;

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use log::info;

use super::config_from_query;
use crate::components::StatCard;
use crate::components::network_tree::NetworkTree;
use crate::network::ReferralNetwork;
use crate::network::stats::{NetworkTotals, format_currency};
use crate::network::tree::ExpansionState;

/// Referral network overview: totals, search and the sponsor tree.
#[component]
pub fn NetworkPage() -> impl IntoView {
	let config = config_from_query();
	let network = Arc::new(ReferralNetwork::generate(&config));
	let totals = NetworkTotals::of(&network);

	let search = RwSignal::new(String::new());
	let expansion = RwSignal::new(ExpansionState::default());
	let filtered = Signal::derive({
		let network = Arc::clone(&network);
		move || search.with(|query| network.search_roots(query))
	});

	let on_expand_all = {
		let network = Arc::clone(&network);
		move |_: MouseEvent| {
			expansion.update(|state| state.expand_all(&network));
			info!("expanded every sponsor");
		}
	};
	let on_collapse_all = {
		let network = Arc::clone(&network);
		move |_: MouseEvent| {
			expansion.update(|state| state.collapse_all(&network));
			info!("collapsed every sponsor");
		}
	};
	let on_add_relationship =
		move |_: MouseEvent| info!("add relationship requested, network is read-only");

	view! {
		<div class="page network-page">
			<div class="page-header">
				<div>
					<h1>"Referral Network"</h1>
					<p class="subtitle">"Explore the referral relationships between clients"</p>
				</div>
				<button class="button" on:click=on_add_relationship>
					"Add Relationship"
				</button>
			</div>

			<div class="stat-grid">
				<StatCard
					title="Total Referrals"
					value=totals.total_referrals.to_string()
					caption="Active referral relationships"
				/>
				<StatCard
					title="Total Sponsors"
					value=totals.total_sponsors.to_string()
					caption="Clients with referrals"
				/>
				<StatCard
					title="Total Commissions"
					value=format_currency(totals.total_commissions)
					caption="Earned through referrals"
				/>
			</div>

			<section class="card">
				<div class="card-header">
					<h2>"Referral Tree"</h2>
					<p class="subtitle">"Visualize the sponsor-affiliate relationships"</p>
					<input
						type="search"
						class="search"
						placeholder="Search clients..."
						prop:value=move || search.get()
						on:input=move |ev| search.set(event_target_value(&ev))
						on:keydown=move |ev: web_sys::KeyboardEvent| {
							if ev.key() == "Escape" {
								search.set(String::new());
							}
						}
					/>
					<div class="tree-actions">
						<button class="button-ghost" on:click=on_expand_all>
							"Expand all"
						</button>
						<button class="button-ghost" on:click=on_collapse_all>
							"Collapse all"
						</button>
					</div>
				</div>
				<div class="card-content">
					<NetworkTree network=network roots=filtered expansion=expansion />
					<Show when=move || filtered.with(Vec::is_empty)>
						<div class="empty">
							<p>"No clients found matching your search."</p>
						</div>
					</Show>
				</div>
			</section>
		</div>
	}
}
