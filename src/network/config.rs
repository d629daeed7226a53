//! Network configuration and its query-string overrides.

use std::num::ParseIntError;
use std::ops::RangeInclusive;

use chrono::NaiveDate;
use thiserror::Error;

use super::builder::GenerationRules;

/// Seed used when no `seed` override is given.
pub const DEFAULT_SEED: u64 = 0x5EED;
/// Clients generated when no `clients` override is given.
pub const DEFAULT_CLIENT_COUNT: usize = 50;
/// Accepted `clients` override values.
pub const CLIENT_COUNT_RANGE: RangeInclusive<usize> = 1..=500;

/// A query override that could not be applied.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
	/// `seed` is not a `u64`.
	#[error("invalid seed `{value}`: {source}")]
	Seed {
		/// Raw value.
		value: String,
		/// Parse failure.
		source: ParseIntError,
	},
	/// `clients` is not a non-negative integer.
	#[error("invalid client count `{value}`: {source}")]
	ClientCount {
		/// Raw value.
		value: String,
		/// Parse failure.
		source: ParseIntError,
	},
	/// `clients` parsed but is outside [`CLIENT_COUNT_RANGE`].
	#[error("client count {0} outside 1..=500")]
	ClientCountOutOfRange(usize),
}

/// Inputs to network generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkConfig {
	/// Number of clients to generate.
	pub client_count: usize,
	/// Seed every generated value derives from.
	pub seed: u64,
	/// Forest slicing rules.
	pub rules: GenerationRules,
	/// Reference date creation dates count back from.
	pub as_of: NaiveDate,
}

impl Default for NetworkConfig {
	fn default() -> Self {
		Self {
			client_count: DEFAULT_CLIENT_COUNT,
			seed: DEFAULT_SEED,
			rules: GenerationRules::default(),
			as_of: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
		}
	}
}

impl NetworkConfig {
	/// Apply `seed` and `clients` overrides (raw query-string values) on top of
	/// the defaults.
	pub fn with_overrides(seed: Option<&str>, clients: Option<&str>) -> Result<Self, ConfigError> {
		let mut config = Self::default();
		if let Some(value) = seed {
			config.seed = value.trim().parse().map_err(|source| ConfigError::Seed {
				value: value.to_owned(),
				source,
			})?;
		}
		if let Some(value) = clients {
			let count: usize = value.trim().parse().map_err(|source| ConfigError::ClientCount {
				value: value.to_owned(),
				source,
			})?;
			if !CLIENT_COUNT_RANGE.contains(&count) {
				return Err(ConfigError::ClientCountOutOfRange(count));
			}
			config.client_count = count;
		}
		Ok(config)
	}

	/// Query string reproducing this config's overrides, empty for defaults.
	pub fn query_string(&self) -> String {
		let mut pairs = Vec::new();
		if self.seed != DEFAULT_SEED {
			pairs.push(format!("seed={}", self.seed));
		}
		if self.client_count != DEFAULT_CLIENT_COUNT {
			pairs.push(format!("clients={}", self.client_count));
		}
		if pairs.is_empty() {
			String::new()
		} else {
			format!("?{}", pairs.join("&"))
		}
	}
}
