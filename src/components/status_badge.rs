use leptos::prelude::*;

use crate::network::ReferralStatus;

fn badge_class(status: ReferralStatus) -> &'static str {
	match status {
		ReferralStatus::VeryActive => "badge bg-green-500",
		ReferralStatus::Active => "badge bg-blue-500",
		ReferralStatus::Inactive => "badge bg-gray-500",
	}
}

#[component]
pub fn StatusBadge(status: ReferralStatus) -> impl IntoView {
	view! { <span class=badge_class(status)>{status.label()}</span> }
}
