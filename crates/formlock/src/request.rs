//! Request-lifetime context.
//!
//! Carries the current path, the authenticated actor, and the request's
//! translator as explicit state instead of ambient lookups, plus the
//! per-request memo for the resolved payload. Translated strings are
//! locale-dependent, so neither the context nor the memo may outlive the
//! request.

use std::sync::Arc;

use formlock_types::auth_adapter::AuthCtx;
use formlock_types::translate::Translator;

use crate::settings::ResolvedSettings;

pub struct RequestCtx {
	pub path: Box<str>,
	pub auth: AuthCtx,
	pub translator: Arc<dyn Translator>,
	memo: parking_lot::RwLock<Option<ResolvedSettings>>,
}

impl RequestCtx {
	pub fn new(path: impl Into<Box<str>>, auth: AuthCtx, translator: Arc<dyn Translator>) -> Self {
		Self { path: path.into(), auth, translator, memo: parking_lot::RwLock::new(None) }
	}

	/// Previously resolved payload for this request, if any
	pub(crate) fn memoized(&self) -> Option<ResolvedSettings> {
		self.memo.read().clone()
	}

	pub(crate) fn memoize(&self, settings: &ResolvedSettings) {
		*self.memo.write() = Some(settings.clone());
	}
}

impl std::fmt::Debug for RequestCtx {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RequestCtx")
			.field("path", &self.path)
			.field("auth", &self.auth)
			.field("memoized", &self.memo.read().is_some())
			.finish()
	}
}

// vim: ts=4
