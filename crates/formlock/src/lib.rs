//! Submit-button blocking for web forms.
//!
//! Formlock keeps a single admin-edited configuration object describing what
//! should happen to a form's submit buttons once one of them is clicked
//! (disable them, hide them, or show a loading indicator), and resolves that
//! configuration per request into the flat payload the front-end behavior
//! layer consumes.
//!
//! # Architecture
//!
//! - **Config** (`config/`): setting definitions, the frozen registry, and
//!   the cached [`ConfigService`] over a storage adapter
//! - **Resolver** (`resolver.rs`): activation policy, bypass check, and
//!   payload resolution
//! - **Alter hooks** (`alter.rs`): the single designed extension point
//! - **Handlers** (`handler.rs`): read-only HTTP surface for the front end
//!
//! The storage, authorization, and translation collaborators are traits in
//! `formlock-types`; the application wires concrete adapters at startup.

pub mod alter;
pub mod config;
pub mod handler;
pub mod path_match;
pub mod prelude;
pub mod request;
pub mod resolver;
pub mod settings;

pub use alter::{AlterRegistry, FrozenAlterRegistry};
pub use config::{
	ConfigRegistry, ConfigService, ConfigUpdate, FrozenConfigRegistry, PermissionLevel,
	SettingDefinition, SettingValue, register_settings,
};
pub use request::RequestCtx;
pub use resolver::{BYPASS_CAPABILITY, Formlock};
pub use settings::{BlockMethod, IndicatorStyle, ResolvedSettings, SpinnerColor};

// vim: ts=4
