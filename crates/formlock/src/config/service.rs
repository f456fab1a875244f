//! Configuration service with caching, validation, and staged atomic writes

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;

use formlock_types::config_adapter::ConfigAdapter;

use crate::prelude::*;

use super::types::{FrozenConfigRegistry, SettingValue};

/// LRU cache for resolved configuration values
pub struct ConfigCache {
	cache: parking_lot::RwLock<LruCache<String, SettingValue>>,
}

impl ConfigCache {
	pub fn new(capacity: usize) -> Self {
		let non_zero = NonZeroUsize::new(capacity)
			.or(NonZeroUsize::new(100))
			.unwrap_or(NonZeroUsize::MIN);
		Self { cache: parking_lot::RwLock::new(LruCache::new(non_zero)) }
	}

	pub fn get(&self, key: &str) -> Option<SettingValue> {
		let mut cache = self.cache.write();
		cache.get(key).cloned()
	}

	pub fn put(&self, key: String, value: SettingValue) {
		let mut cache = self.cache.write();
		cache.put(key, value);
	}

	/// Invalidate all cached values
	pub fn clear(&self) {
		let mut cache = self.cache.write();
		cache.clear();
	}
}

/// Configuration service - main interface for reading and updating settings
///
/// Reads resolve as cache -> stored value -> schema default. Writes go
/// through [`ConfigUpdate`] so a whole batch of key paths commits in one
/// atomic store operation.
pub struct ConfigService {
	registry: Arc<FrozenConfigRegistry>,
	cache: ConfigCache,
	adapter: Arc<dyn ConfigAdapter>,
}

impl ConfigService {
	pub fn new(
		registry: Arc<FrozenConfigRegistry>,
		adapter: Arc<dyn ConfigAdapter>,
		cache_size: usize,
	) -> Self {
		Self { registry, cache: ConfigCache::new(cache_size), adapter }
	}

	/// Get a value with full resolution (stored -> default)
	///
	/// Lookups of keys the schema does not define are an error, never a
	/// silent default.
	pub async fn get(&self, key: &str) -> ClResult<SettingValue> {
		if let Some(value) = self.cache.get(key) {
			debug!("Config cache hit: {}", key);
			return Ok(value);
		}

		let def = self
			.registry
			.get(key)
			.ok_or_else(|| Error::ValidationError(format!("Unknown setting: {}", key)))?;

		if let Some(json_value) = self.adapter.read_value(key).await? {
			let value = serde_json::from_value::<SettingValue>(json_value)
				.map_err(|e| Error::ConfigError(format!("Invalid stored value for '{}': {}", key, e)))?;
			self.cache.put(key.to_string(), value.clone());
			return Ok(value);
		}

		match &def.default {
			Some(default) => {
				let value = default.clone();
				self.cache.put(key.to_string(), value.clone());
				Ok(value)
			}
			None => Err(Error::ValidationError(format!(
				"Setting '{}' has no default and must be configured",
				key
			))),
		}
	}

	/// Type-safe getters (error on type mismatch)
	pub async fn get_str(&self, key: &str) -> ClResult<String> {
		match self.get(key).await? {
			SettingValue::String(s) => Ok(s),
			v => Err(Error::ValidationError(format!(
				"Setting '{}' is not a string, got {}",
				key,
				v.type_name()
			))),
		}
	}

	pub async fn get_int(&self, key: &str) -> ClResult<i64> {
		match self.get(key).await? {
			SettingValue::Int(i) => Ok(i),
			v => Err(Error::ValidationError(format!(
				"Setting '{}' is not an integer, got {}",
				key,
				v.type_name()
			))),
		}
	}

	pub async fn get_bool(&self, key: &str) -> ClResult<bool> {
		match self.get(key).await? {
			SettingValue::Bool(b) => Ok(b),
			v => Err(Error::ValidationError(format!(
				"Setting '{}' is not a boolean, got {}",
				key,
				v.type_name()
			))),
		}
	}

	/// Integer getter accepting numeric strings in the store
	pub async fn get_int_coerced(&self, key: &str) -> ClResult<i64> {
		let value = self.get(key).await?;
		value.coerce_int().ok_or_else(|| {
			Error::ConfigError(format!(
				"Setting '{}' is not an integer, got {}",
				key,
				value.type_name()
			))
		})
	}

	/// Start a staged update
	pub fn update(&self) -> ConfigUpdate<'_> {
		ConfigUpdate { service: self, staged: Vec::new() }
	}

	/// Get reference to the registry (for listing all settings)
	pub fn registry(&self) -> &Arc<FrozenConfigRegistry> {
		&self.registry
	}
}

/// Staged configuration update
///
/// `set`/`unset` validate against the registry and stage; nothing is visible
/// to readers until `save` commits the whole batch through the adapter.
pub struct ConfigUpdate<'a> {
	service: &'a ConfigService,
	staged: Vec<(Box<str>, Option<SettingValue>)>,
}

impl ConfigUpdate<'_> {
	/// Stage a value for a key path
	pub fn set(&mut self, key: &str, value: SettingValue) -> ClResult<&mut Self> {
		let def = self
			.service
			.registry
			.get(key)
			.ok_or_else(|| Error::ValidationError(format!("Unknown setting: {}", key)))?;

		if let Some(default) = &def.default {
			if !value.matches_type(default) {
				return Err(Error::ValidationError(format!(
					"Type mismatch for setting '{}': expected {}, got {}",
					key,
					default.type_name(),
					value.type_name()
				)));
			}
		}

		if let Some(validator) = &def.validator {
			validator(&value)?;
		}

		self.stage(key, Some(value));
		Ok(self)
	}

	/// Stage a deletion, falling the key back to its schema default
	pub fn unset(&mut self, key: &str) -> ClResult<&mut Self> {
		if self.service.registry.get(key).is_none() {
			return Err(Error::ValidationError(format!("Unknown setting: {}", key)));
		}

		self.stage(key, None);
		Ok(self)
	}

	fn stage(&mut self, key: &str, value: Option<SettingValue>) {
		if let Some(entry) = self.staged.iter_mut().find(|(k, _)| k.as_ref() == key) {
			entry.1 = value;
		} else {
			self.staged.push((key.into(), value));
		}
	}

	/// Commit the staged batch atomically
	///
	/// The `roles` parameter should be the authenticated actor's roles;
	/// every staged key is permission-checked before anything is written.
	pub async fn save<S: AsRef<str>>(self, roles: &[S]) -> ClResult<()> {
		if self.staged.is_empty() {
			return Ok(());
		}

		for (key, _) in &self.staged {
			let def = self
				.service
				.registry
				.get(key)
				.ok_or_else(|| Error::ValidationError(format!("Unknown setting: {}", key)))?;
			if !def.permission.check(roles) {
				warn!("Permission denied for setting '{}': requires {:?}", key, def.permission);
				return Err(Error::PermissionDenied);
			}
		}

		let mut values = Vec::with_capacity(self.staged.len());
		for (key, value) in &self.staged {
			let json_value = match value {
				Some(v) => Some(serde_json::to_value(v).map_err(|e| {
					Error::ValidationError(format!("Failed to serialize setting '{}': {}", key, e))
				})?),
				None => None,
			};
			values.push((key.clone(), json_value));
		}

		self.service.adapter.write_values(&values).await?;
		self.service.cache.clear();

		info!("Committed {} configuration value(s)", values.len());
		Ok(())
	}
}

// vim: ts=4
