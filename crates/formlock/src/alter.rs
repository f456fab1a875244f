//! Alter-hook registry, the module's single extension point.
//!
//! Other components register callbacks at startup; the resolver runs them
//! against the freshly built payload in registration order, each free to
//! modify any field in place.

use crate::prelude::*;
use crate::settings::ResolvedSettings;

/// Payload-mutating callback
pub type AlterHook = Box<dyn Fn(&mut ResolvedSettings) + Send + Sync>;

/// Mutable hook registry used during app initialization
pub struct AlterRegistry {
	hooks: Vec<AlterHook>,
}

impl AlterRegistry {
	pub fn new() -> Self {
		Self { hooks: Vec::new() }
	}

	/// Register a callback; callbacks run in registration order
	pub fn register<F>(&mut self, hook: F)
	where
		F: Fn(&mut ResolvedSettings) + Send + Sync + 'static,
	{
		self.hooks.push(Box::new(hook));
	}

	/// Freeze the registry (make it immutable)
	pub fn freeze(self) -> FrozenAlterRegistry {
		debug!("Alter registry frozen with {} hook(s)", self.hooks.len());
		FrozenAlterRegistry { hooks: self.hooks }
	}

	pub fn len(&self) -> usize {
		self.hooks.len()
	}

	pub fn is_empty(&self) -> bool {
		self.hooks.is_empty()
	}
}

impl Default for AlterRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for AlterRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AlterRegistry").field("hooks", &self.hooks.len()).finish()
	}
}

/// Immutable hook registry applied by the resolver
pub struct FrozenAlterRegistry {
	hooks: Vec<AlterHook>,
}

impl FrozenAlterRegistry {
	/// Run all hooks against the payload, in registration order
	pub fn apply(&self, settings: &mut ResolvedSettings) {
		for hook in &self.hooks {
			hook(settings);
		}
	}

	pub fn len(&self) -> usize {
		self.hooks.len()
	}

	pub fn is_empty(&self) -> bool {
		self.hooks.is_empty()
	}
}

impl std::fmt::Debug for FrozenAlterRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FrozenAlterRegistry").field("hooks", &self.hooks.len()).finish()
	}
}


// vim: ts=4
