use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use log::warn;

use super::config_from_query;
use crate::components::{StatCard, StatusBadge, sponsor_href};
use crate::network::stats::{SponsorSummary, format_currency};
use crate::network::{ClientId, EnrichedClient, ReferralNetwork};

/// Sponsor dashboard: figures and direct affiliates for one client.
#[component]
pub fn SponsorPage() -> impl IntoView {
	let config = config_from_query();
	let back = format!("/{}", config.query_string());
	let network = Arc::new(ReferralNetwork::generate(&config));
	let params = use_params_map();

	view! {
		<div class="page sponsor-page">
			<A href=back>
				<span class="button-outline">"Back to Network"</span>
			</A>
			{move || {
				let id = params.with(|p| p.get("id")).map(ClientId::from);
				match id {
					Some(id) => sponsor_view(Arc::clone(&network), id),
					None => missing_view(),
				}
			}}
		</div>
	}
}

fn missing_view() -> AnyView {
	view! {
		<div class="sponsor-missing">
			<p>"Sponsor not found"</p>
		</div>
	}
	.into_any()
}

fn sponsor_view(network: Arc<ReferralNetwork>, id: ClientId) -> AnyView {
	let found = (network.get(&id), SponsorSummary::of(&network, &id));
	let (Some(sponsor), Some(summary)) = found else {
		warn!("sponsor page requested for unknown client {id}");
		return missing_view();
	};
	let sponsor = sponsor.clone();
	let referred_by = network
		.forest()
		.sponsor_of(&id)
		.and_then(|sponsor_id| network.get(sponsor_id))
		.map(|s| (sponsor_href(s.id()), s.client.name.clone()));
	let affiliate_search = RwSignal::new(String::new());
	let rows = move || {
		affiliate_search.with(|query| {
			network
				.search_referred(&id, query)
				.into_iter()
				.map(affiliate_row)
				.collect_view()
		})
	};

	view! {
		<div class="page-header">
			<div class="sponsor-identity">
				<span class="avatar avatar-lg">{sponsor.client.initials()}</span>
				<div>
					<h1>
						{sponsor.client.name.clone()} <StatusBadge status=sponsor.status />
					</h1>
					<p class="subtitle">
						"Sponsor Dashboard · " {sponsor.client.kind.label()} " · client since "
						{sponsor.client.created_label()}
					</p>
					{referred_by
						.map(|(href, name)| {
							view! {
								<p class="referred-by">
									"Referred by " <A href=href>{name}</A>
								</p>
							}
						})}
				</div>
			</div>
		</div>

		<div class="stat-grid">
			<StatCard
				title="Total Affiliates"
				value=summary.affiliates.to_string()
				caption="Referred clients"
			/>
			<StatCard
				title="Total Commissions"
				value=format_currency(summary.commissions as u64)
				caption="Lifetime earnings"
			/>
			<StatCard
				title="Avg. Commission"
				value=format_currency(summary.avg_commission as u64)
				caption="Per affiliate"
			/>
			<StatCard title="Active Affiliates" value=summary.active_affiliates.to_string() />
			<StatCard title="Inactive Affiliates" value=summary.inactive_affiliates.to_string() />
		</div>

		<section class="card">
			<div class="card-header">
				<h2>"Affiliates"</h2>
				<input
					type="search"
					class="search"
					placeholder="Search affiliates..."
					prop:value=move || affiliate_search.get()
					on:input=move |ev| affiliate_search.set(event_target_value(&ev))
				/>
			</div>
			<table class="data-table">
				<thead>
					<tr>
						<th>"Name"</th>
						<th>"Email"</th>
						<th>"Status"</th>
						<th>"Commissions"</th>
					</tr>
				</thead>
				<tbody>{rows}</tbody>
			</table>
			{(summary.affiliates == 0).then(|| view! { <p class="empty">"No affiliates yet."</p> })}
		</section>
	}
	.into_any()
}

fn affiliate_row(affiliate: &EnrichedClient) -> impl IntoView + use<> {
	let client = &affiliate.client;
	let name = client.name.clone();
	let initials = client.initials();
	view! {
		<tr>
			<td>
				<A href=sponsor_href(&client.id)>
					<span class="avatar">{initials}</span>
					{name}
				</A>
			</td>
			<td>{client.email.clone()}</td>
			<td>
				<StatusBadge status=affiliate.status />
			</td>
			<td>{format_currency(affiliate.commissions as u64)}</td>
		</tr>
	}
}
