use leptos::prelude::*;

#[component]
pub fn StatCard(
	title: &'static str,
	#[prop(into)] value: String,
	#[prop(optional)] caption: &'static str,
) -> impl IntoView {
	view! {
		<div class="stat-card">
			<div class="stat-card-header">
				<h3 class="stat-card-title">{title}</h3>
			</div>
			<div class="stat-card-value">{value}</div>
			<p class="stat-card-caption">{caption}</p>
		</div>
	}
}
