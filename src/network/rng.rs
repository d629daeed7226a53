use rand::{SeedableRng, rngs::SmallRng};

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a over the key bytes. Stable across platforms and releases, unlike
/// `DefaultHasher`.
fn fnv1a(key: &str) -> u64 {
	key.bytes()
		.fold(FNV_OFFSET, |hash, b| (hash ^ b as u64).wrapping_mul(FNV_PRIME))
}

/// RNG seeded from the network seed and an entity key, so any value derived
/// for an entity is the same on every render and every page.
pub fn entity_rng(seed: u64, key: &str) -> SmallRng {
	SmallRng::seed_from_u64(seed ^ fnv1a(key))
}
