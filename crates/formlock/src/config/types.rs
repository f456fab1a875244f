//! Configuration types and definitions
//!
//! Core types for the configuration subsystem: the stored value union,
//! per-key definitions with defaults and validators, and the registry that
//! is populated at startup and then frozen.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::prelude::*;

/// Role granting write access to admin-level settings
pub const ADMIN_ROLE: &str = "ADMIN";

/// Type alias for setting validator function
pub type SettingValidator = Box<dyn Fn(&SettingValue) -> ClResult<()> + Send + Sync>;

/// Setting permission level defines who can modify a setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PermissionLevel {
	/// Admin: only actors with the admin role can change
	#[serde(rename = "admin")]
	Admin,
	/// User: any authenticated actor can change
	#[serde(rename = "user")]
	User,
}

impl PermissionLevel {
	/// Check if the given roles satisfy this permission level
	pub fn check<S: AsRef<str>>(&self, roles: &[S]) -> bool {
		match self {
			PermissionLevel::Admin => roles.iter().any(|r| r.as_ref() == ADMIN_ROLE),
			PermissionLevel::User => true,
		}
	}
}

/// Setting value types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)] // No type tag - type inferred from SettingDefinition
pub enum SettingValue {
	Bool(bool), // Must be before Int to avoid bool -> int coercion
	Int(i64),
	String(String),
}

impl SettingValue {
	/// Check if this value matches the type of another value
	pub fn matches_type(&self, other: &SettingValue) -> bool {
		matches!(
			(self, other),
			(SettingValue::Bool(_), SettingValue::Bool(_))
				| (SettingValue::Int(_), SettingValue::Int(_))
				| (SettingValue::String(_), SettingValue::String(_))
		)
	}

	/// Get the type name for error messages
	pub fn type_name(&self) -> &'static str {
		match self {
			SettingValue::Bool(_) => "bool",
			SettingValue::Int(_) => "int",
			SettingValue::String(_) => "string",
		}
	}

	/// Read the value as an integer, accepting numeric strings.
	///
	/// Admin surfaces built on plain form posts store numbers as strings;
	/// the resolver still has to hand integers to the front end.
	pub fn coerce_int(&self) -> Option<i64> {
		match self {
			SettingValue::Int(i) => Some(*i),
			SettingValue::String(s) => s.trim().parse().ok(),
			SettingValue::Bool(_) => None,
		}
	}
}

/// Setting definition - defines metadata for each setting
pub struct SettingDefinition {
	/// Dot-separated key (e.g., "disable.abtext")
	pub key: String,

	/// Human-readable description
	pub description: String,

	/// Optional default value
	/// If None, the setting must be configured before it can be read
	pub default: Option<SettingValue>,

	/// Permission level required to modify this setting
	pub permission: PermissionLevel,

	/// Optional validation function
	pub validator: Option<SettingValidator>,
}

impl Debug for SettingDefinition {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SettingDefinition")
			.field("key", &self.key)
			.field("description", &self.description)
			.field("default", &self.default)
			.field("permission", &self.permission)
			.field("validator", &self.validator.is_some())
			.finish()
	}
}

impl SettingDefinition {
	/// Create a builder for constructing a SettingDefinition
	pub fn builder(key: impl Into<String>) -> SettingDefinitionBuilder {
		SettingDefinitionBuilder::new(key)
	}
}

/// Builder for SettingDefinition with fluent API
pub struct SettingDefinitionBuilder {
	key: String,
	description: Option<String>,
	default: Option<SettingValue>,
	permission: PermissionLevel,
	validator: Option<SettingValidator>,
}

impl SettingDefinitionBuilder {
	pub fn new(key: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			description: None,
			default: None,
			permission: PermissionLevel::Admin, // Default to admin-only for safety
			validator: None,
		}
	}

	/// Set the description (required)
	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	/// Set the default value (optional - if not set, setting is required)
	pub fn default(mut self, value: SettingValue) -> Self {
		self.default = Some(value);
		self
	}

	/// Set the permission level (defaults to Admin)
	pub fn permission(mut self, permission: PermissionLevel) -> Self {
		self.permission = permission;
		self
	}

	/// Set a validation function
	pub fn validator<F>(mut self, f: F) -> Self
	where
		F: Fn(&SettingValue) -> ClResult<()> + Send + Sync + 'static,
	{
		self.validator = Some(Box::new(f));
		self
	}

	/// Build the SettingDefinition
	pub fn build(self) -> ClResult<SettingDefinition> {
		let description = self
			.description
			.ok_or_else(|| Error::ConfigError("Setting description is required".into()))?;

		Ok(SettingDefinition {
			key: self.key,
			description,
			default: self.default,
			permission: self.permission,
			validator: self.validator,
		})
	}
}

/// Mutable registry used during app initialization
pub struct ConfigRegistry {
	definitions: std::collections::HashMap<String, SettingDefinition>,
}

impl ConfigRegistry {
	pub fn new() -> Self {
		Self { definitions: std::collections::HashMap::new() }
	}

	/// Register a new setting definition
	pub fn register(&mut self, def: SettingDefinition) -> ClResult<()> {
		if self.definitions.contains_key(&def.key) {
			return Err(Error::ConfigError(format!("Setting '{}' is already registered", def.key)));
		}

		debug!("Registering setting: {}", def.key);
		self.definitions.insert(def.key.clone(), def);
		Ok(())
	}

	/// Freeze the registry (make it immutable)
	pub fn freeze(self) -> FrozenConfigRegistry {
		info!("Configuration registry frozen with {} definitions", self.definitions.len());
		FrozenConfigRegistry { definitions: self.definitions }
	}

	pub fn len(&self) -> usize {
		self.definitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.definitions.is_empty()
	}
}

impl Default for ConfigRegistry {
	fn default() -> Self {
		Self::new()
	}
}

/// Immutable registry shared by the service and the admin surface
pub struct FrozenConfigRegistry {
	definitions: std::collections::HashMap<String, SettingDefinition>,
}

impl FrozenConfigRegistry {
	/// Get a setting definition by key
	/// First tries exact match, then tries wildcard pattern "<first_element>.*"
	pub fn get(&self, key: &str) -> Option<&SettingDefinition> {
		if let Some(def) = self.definitions.get(key) {
			return Some(def);
		}

		if let Some(dot_pos) = key.find('.') {
			let wildcard_key = format!("{}.*", &key[..dot_pos]);
			if let Some(def) = self.definitions.get(&wildcard_key) {
				return Some(def);
			}
		}

		None
	}

	/// List all registered settings
	pub fn list(&self) -> impl Iterator<Item = &SettingDefinition> {
		self.definitions.values()
	}

	pub fn len(&self) -> usize {
		self.definitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.definitions.is_empty()
	}
}


// vim: ts=4
