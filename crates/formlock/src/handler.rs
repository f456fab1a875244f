//! Read-only HTTP surface for the front-end behavior layer
//!
//! The embedding application inserts an `Arc<RequestCtx>` extension for the
//! authenticated request (actor, path, translator) and nests these routes
//! wherever it serves its page scaffolding. The admin write surface is not
//! served here; it talks to [`ConfigService`](crate::config::ConfigService)
//! directly.

use axum::{Extension, Json, Router, extract::State, routing::get};
use serde::Serialize;
use std::sync::Arc;

use crate::prelude::*;
use crate::request::RequestCtx;
use crate::resolver::Formlock;
use crate::settings::ResolvedSettings;

/// GET /status response
#[derive(Debug, Serialize)]
pub struct BlockingStatus {
	/// Whether blocking applies to the request's path
	pub active: bool,
	/// Whether the request's actor may bypass blocking
	pub bypass: bool,
}

/// Build the router for the read surface
pub fn routes() -> Router<Arc<Formlock>> {
	Router::new().route("/status", get(status)).route("/settings", get(settings))
}

/// GET /status - activation and bypass state for the current request
pub async fn status(
	State(formlock): State<Arc<Formlock>>,
	Extension(ctx): Extension<Arc<RequestCtx>>,
) -> ClResult<Json<BlockingStatus>> {
	let active = formlock.is_active(&ctx).await;
	let bypass = formlock.user_may_bypass(&ctx, None).await?;

	Ok(Json(BlockingStatus { active, bypass }))
}

/// GET /settings - the resolved payload for the current request
///
/// Returns `null` when blocking does not apply: excluded or inactive path,
/// or an actor holding the bypass capability.
pub async fn settings(
	State(formlock): State<Arc<Formlock>>,
	Extension(ctx): Extension<Arc<RequestCtx>>,
) -> ClResult<Json<Option<ResolvedSettings>>> {
	if !formlock.is_active(&ctx).await || formlock.user_may_bypass(&ctx, None).await? {
		return Ok(Json(None));
	}

	Ok(Json(Some(formlock.resolve(&ctx).await?)))
}

// vim: ts=4
