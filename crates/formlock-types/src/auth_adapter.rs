//! Authorization collaborator trait and the authenticated actor context.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;

/// Context struct for an authenticated actor
#[derive(Clone, Debug)]
pub struct AuthCtx {
	pub id_tag: Box<str>,
	pub roles: Box<[Box<str>]>,
}

impl AuthCtx {
	pub fn new(id_tag: impl Into<Box<str>>, roles: &[&str]) -> Self {
		Self {
			id_tag: id_tag.into(),
			roles: roles.iter().map(|r| Box::from(*r)).collect(),
		}
	}

	/// Check if the actor holds a role
	pub fn has_role(&self, role: &str) -> bool {
		self.roles.iter().any(|r| r.as_ref() == role)
	}
}

/// Adapter that answers capability queries for actors.
///
/// Capabilities are named grants ("bypass formlock") resolved by whatever
/// authorization system the embedding application uses; this library never
/// inspects them beyond the boolean answer.
#[async_trait]
pub trait AuthAdapter: Debug + Send + Sync {
	async fn has_capability(&self, actor: &AuthCtx, capability: &str) -> ClResult<bool>;
}

// vim: ts=4
