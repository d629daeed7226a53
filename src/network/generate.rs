use chrono::{Days, NaiveDate};
use rand::Rng;
use rand::seq::SliceRandom;

use super::client::{Client, ClientId, ClientKind};
use super::rng::entity_rng;

const FIRST_NAMES: &[&str] = &[
	"John", "Jane", "Michael", "Sarah", "David", "Emma", "Robert", "Lisa",
];
const LAST_NAMES: &[&str] = &[
	"Smith", "Johnson", "Brown", "Davis", "Wilson", "Moore", "Taylor", "Anderson",
];

/// Generate `count` mock clients. Each client draws from its own id-seeded
/// stream, so client `n` is identical regardless of `count`.
pub fn generate_clients(count: usize, seed: u64, as_of: NaiveDate) -> Vec<Client> {
	(1..=count)
		.map(|n| generate_client(ClientId::numbered(n), seed, as_of))
		.collect()
}

fn generate_client(id: ClientId, seed: u64, as_of: NaiveDate) -> Client {
	let mut rng = entity_rng(seed, id.as_str());
	let first = FIRST_NAMES.choose(&mut rng).copied().unwrap_or(FIRST_NAMES[0]);
	let last = LAST_NAMES.choose(&mut rng).copied().unwrap_or(LAST_NAMES[0]);
	let kind = ClientKind::ALL
		.choose(&mut rng)
		.copied()
		.unwrap_or(ClientKind::Particular);
	let phone = format!("+1{}", rng.gen_range(0..1_000_000_000u32));
	let days_ago = rng.gen_range(0..365u64);
	let created_at = as_of.checked_sub_days(Days::new(days_ago)).unwrap_or(as_of);

	Client {
		id,
		name: format!("{first} {last}"),
		email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
		phone,
		kind,
		created_at,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn as_of() -> NaiveDate {
		NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
	}

	#[test]
	fn ids_are_sequential() {
		let clients = generate_clients(3, 1, as_of());
		let ids: Vec<_> = clients.iter().map(|c| c.id.to_string()).collect();
		assert_eq!(ids, ["client-1", "client-2", "client-3"]);
	}

	#[test]
	fn generation_is_deterministic_per_seed() {
		assert_eq!(generate_clients(20, 99, as_of()), generate_clients(20, 99, as_of()));
		assert_ne!(generate_clients(20, 99, as_of()), generate_clients(20, 100, as_of()));
	}

	#[test]
	fn client_does_not_depend_on_list_length() {
		let short = generate_clients(5, 3, as_of());
		let long = generate_clients(50, 3, as_of());
		assert_eq!(short[..], long[..5]);
	}

	#[test]
	fn fields_follow_generation_rules() {
		for client in generate_clients(50, 11, as_of()) {
			let (first, last) = client.name.split_once(' ').unwrap();
			assert!(FIRST_NAMES.contains(&first));
			assert!(LAST_NAMES.contains(&last));
			assert_eq!(
				client.email,
				format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase())
			);
			assert!(client.phone.starts_with("+1"));
			assert!(client.created_at <= as_of());
			assert!(client.created_at > as_of() - Days::new(365));
		}
	}
}
