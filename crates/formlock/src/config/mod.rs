//! Configuration subsystem: setting definitions, registry, and cached service
//!
//! # Architecture
//!
//! - **Types** (`types.rs`): value union, definitions, and the registry
//! - **Service** (`service.rs`): cached reads and staged, atomic writes
//! - **Register** (`register.rs`): the blocking configuration schema
//!
//! Definitions are registered once at startup and frozen; values live behind
//! a `ConfigAdapter` and are resolved as stored value → schema default.

pub mod register;
pub mod service;
pub mod types;

pub use register::register_settings;
pub use service::{ConfigService, ConfigUpdate};
pub use types::{
	ConfigRegistry, FrozenConfigRegistry, PermissionLevel, SettingDefinition,
	SettingDefinitionBuilder, SettingValue,
};

// vim: ts=4
