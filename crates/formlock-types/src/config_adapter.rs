//! Adapter that stores the persisted configuration values.
//!
//! Values are stored as JSON scalars keyed by dotted setting names. The
//! schema (definitions, defaults, validation) lives above the adapter; the
//! adapter only has to keep committed batches atomic.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;

#[async_trait]
pub trait ConfigAdapter: Debug + Send + Sync {
	/// Read a single stored value by name, `None` if the name is unset
	async fn read_value(&self, key: &str) -> ClResult<Option<serde_json::Value>>;

	/// Commit a batch of writes atomically. A `None` value deletes the key.
	///
	/// Readers must never observe a partially applied batch: either every
	/// entry is visible or the previous state is.
	async fn write_values(&self, values: &[(Box<str>, Option<serde_json::Value>)]) -> ClResult<()>;
}

// vim: ts=4
