use std::sync::Arc;

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use log::{debug, warn};

use crate::components::{StatusBadge, sponsor_href};
use crate::network::stats::format_currency;
use crate::network::tree::{ExpansionState, TreeRow, visible_rows};
use crate::network::{ClientId, ReferralNetwork};

/// Referral tree for a (possibly filtered) list of roots, one line per
/// visible row.
#[component]
pub fn NetworkTree(
	network: Arc<ReferralNetwork>,
	#[prop(into)] roots: Signal<Vec<ClientId>>,
	expansion: RwSignal<ExpansionState>,
) -> impl IntoView {
	let rows = Memo::new({
		let network = Arc::clone(&network);
		move |_| roots.with(|roots| expansion.with(|state| visible_rows(&network, roots, state)))
	});

	view! {
		<div class="network-tree">
			<For each=move || rows.get() key=|row| row.clone() let:row>
				<NetworkRow network=Arc::clone(&network) row=row expansion=expansion />
			</For>
		</div>
	}
}

/// A sponsor or affiliate line, indented by depth.
#[component]
fn NetworkRow(
	network: Arc<ReferralNetwork>,
	row: TreeRow,
	expansion: RwSignal<ExpansionState>,
) -> impl IntoView {
	let Some(node) = network.get(&row.id) else {
		warn!("no client {} in the referral network", row.id);
		return ().into_any();
	};

	let on_toggle = {
		let (id, depth) = (row.id.clone(), row.depth);
		move |_: MouseEvent| {
			expansion.update(|state| {
				let now = state.toggle(&id, depth);
				debug!("{id} {}", if now { "expanded" } else { "collapsed" });
			})
		}
	};
	let commissions = node.commissions;
	let name = node.client.name.clone();

	view! {
		<div
			class="network-node-row"
			class:expanded=row.expanded
			class:nested={row.depth > 0}
			style:padding-left=format!("{}rem", row.depth as f64 * 1.5)
		>
			{(row.depth > 0).then(|| view! { <span class="connector" /> })}
			{(row.depth > 0 && !row.is_last).then(|| view! { <span class="connector-vertical" /> })}

			<span class="avatar">{node.client.initials()}</span>
			<div class="identity">
				<A href=sponsor_href(&row.id)>
					<span class="name">{name}</span>
				</A>
				<div class="email">{node.client.email.clone()}</div>
			</div>
			<div class="meta">
				<StatusBadge status=node.status />
				{(commissions > 0)
					.then(|| {
						view! {
							<span class="commission">{format_currency(commissions as u64)}</span>
						}
					})}
				{row
					.has_toggle
					.then(|| {
						view! {
							<button class="toggle" on:click=on_toggle>
								{if row.expanded { "−" } else { "+" }}
							</button>
						}
					})}
			</div>
		</div>
	}
	.into_any()
}
