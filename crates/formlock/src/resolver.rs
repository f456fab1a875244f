//! Activation policy, bypass check, and settings resolution.

use std::sync::Arc;

use formlock_types::auth_adapter::{AuthAdapter, AuthCtx};

use crate::alter::FrozenAlterRegistry;
use crate::config::ConfigService;
use crate::path_match;
use crate::prelude::*;
use crate::request::RequestCtx;
use crate::settings::{BlockMethod, IndicatorStyle, ResolvedSettings, SpinnerColor};

/// Capability allowing an actor to ignore button blocking entirely
pub const BYPASS_CAPABILITY: &str = "bypass formlock";

/// Paths where blocking never applies. The admin view builder edits forms
/// about forms; blocking its own submit buttons breaks the editor.
const EXCLUDED_PATHS: [&str; 2] = ["admin/structure/views", "admin/structure/views/*"];

/// Per-request resolution over the stored configuration
///
/// Activation ([`is_active`](Self::is_active)) and bypass
/// ([`user_may_bypass`](Self::user_may_bypass)) are two independent
/// predicates; callers combine them. A payload is only worth resolving when
/// the first is true and the second is false.
pub struct Formlock {
	config: Arc<ConfigService>,
	auth: Arc<dyn AuthAdapter>,
	alter: Arc<FrozenAlterRegistry>,
}

impl Formlock {
	pub fn new(
		config: Arc<ConfigService>,
		auth: Arc<dyn AuthAdapter>,
		alter: Arc<FrozenAlterRegistry>,
	) -> Self {
		Self { config, auth, alter }
	}

	/// Determine if blocking applies to the request's path.
	///
	/// Excluded paths win unconditionally; otherwise the feature is active
	/// whenever the configured method is anything but "none". Unreadable or
	/// unrecognized configuration counts as inactive: a broken configuration
	/// must never interfere with form submission.
	pub async fn is_active(&self, ctx: &RequestCtx) -> bool {
		if path_match::match_path(&ctx.path, &EXCLUDED_PATHS) {
			debug!("Blocking disabled on excluded path: {}", ctx.path);
			return false;
		}

		match self.method().await {
			Ok(method) => method.is_blocking(),
			Err(err) => {
				warn!("Treating blocking as inactive: {}", err);
				false
			}
		}
	}

	/// Determine if an actor may bypass blocking.
	///
	/// Checked separately from [`is_active`](Self::is_active) on purpose;
	/// folding it in would change behavior for callers that use the
	/// predicates independently. Omitting `actor` checks the request's own
	/// actor.
	pub async fn user_may_bypass(
		&self,
		ctx: &RequestCtx,
		actor: Option<&AuthCtx>,
	) -> ClResult<bool> {
		let actor = actor.unwrap_or(&ctx.auth);
		self.auth.has_capability(actor, BYPASS_CAPABILITY).await
	}

	/// Resolve the flat settings payload for this request.
	///
	/// Flattens the stored configuration, coerces the two numeric fields,
	/// translates the three text fields with the request's translator, and
	/// runs the alter hooks in registration order. The result is memoized in
	/// the request context, so repeated calls within one request are cheap
	/// and identical.
	pub async fn resolve(&self, ctx: &RequestCtx) -> ClResult<ResolvedSettings> {
		if let Some(settings) = ctx.memoized() {
			return Ok(settings);
		}

		let mut settings = ResolvedSettings {
			method: self.method().await?,
			reset_time: self.config.get_int_coerced("reset_time").await?,
			disable_css: self.config.get_str("disable.css").await?,
			append_text: ctx.translator.translate(&self.config.get_str("disable.abtext").await?),
			adjacent_text: ctx.translator.translate(&self.config.get_str("disable.atext").await?),
			hide_text: ctx.translator.translate(&self.config.get_str("hide.hide_text").await?),
			hide_fx: self.config.get_bool("hide.hide_fx").await?,
			hide_css: self.config.get_str("hide.hide_css").await?,
			indicator_style: self.indicator_style().await?,
			spinner_color: self.spinner_color().await?,
			spinner_lines: self.config.get_int_coerced("indicator.spinner_lines").await?,
		};

		self.alter.apply(&mut settings);
		ctx.memoize(&settings);

		Ok(settings)
	}

	/// Access the underlying configuration service (for admin surfaces)
	pub fn config(&self) -> &Arc<ConfigService> {
		&self.config
	}

	async fn method(&self) -> ClResult<BlockMethod> {
		let value = self.config.get_str("method").await?;
		BlockMethod::parse(&value)
			.ok_or_else(|| Error::ConfigError(format!("Unknown blocking method: {}", value)))
	}

	async fn indicator_style(&self) -> ClResult<IndicatorStyle> {
		let value = self.config.get_str("indicator.indicator_style").await?;
		IndicatorStyle::parse(&value)
			.ok_or_else(|| Error::ConfigError(format!("Unknown indicator style: {}", value)))
	}

	async fn spinner_color(&self) -> ClResult<SpinnerColor> {
		let value = self.config.get_str("indicator.spinner_color").await?;
		SpinnerColor::parse(&value)
			.ok_or_else(|| Error::ConfigError(format!("Unknown spinner color: {}", value)))
	}
}

// vim: ts=4
