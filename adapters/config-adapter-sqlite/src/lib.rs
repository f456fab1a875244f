//! SQLite-backed configuration storage for Formlock.
//!
//! Values are stored as JSON text in a single `settings` table. Batched
//! writes run in one transaction so readers never observe a partially
//! applied save.

use std::path::Path;

use async_trait::async_trait;
use sqlx::{
	Row,
	sqlite::{self, SqlitePool},
};

use formlock::{config_adapter::ConfigAdapter, prelude::*};

mod schema;

use schema::init_db;

fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

#[derive(Debug)]
pub struct ConfigAdapterSqlite {
	db: SqlitePool,
}

impl ConfigAdapterSqlite {
	pub async fn new(path: impl AsRef<Path>) -> ClResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(inspect)
			.or(Err(Error::DbError))?;

		init_db(&db).await.inspect_err(inspect).or(Err(Error::DbError))?;

		Ok(Self { db })
	}
}

#[async_trait]
impl ConfigAdapter for ConfigAdapterSqlite {
	async fn read_value(&self, key: &str) -> ClResult<Option<serde_json::Value>> {
		let row = sqlx::query("SELECT value FROM settings WHERE name = ?")
			.bind(key)
			.fetch_optional(&self.db)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;

		Ok(row.and_then(|r| {
			let value: Option<String> = r.get("value");
			value.and_then(|v| serde_json::from_str(&v).ok())
		}))
	}

	async fn write_values(&self, values: &[(Box<str>, Option<serde_json::Value>)]) -> ClResult<()> {
		let mut tx = self.db.begin().await.inspect_err(inspect).map_err(|_| Error::DbError)?;

		for (name, value) in values {
			if let Some(val) = value {
				sqlx::query(
					"INSERT INTO settings (name, value, updated_at) VALUES (?, ?, unixepoch())
					ON CONFLICT(name) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
				)
				.bind(name.as_ref())
				.bind(val.to_string())
				.execute(&mut *tx)
				.await
				.inspect_err(inspect)
				.map_err(|_| Error::DbError)?;
			} else {
				// Delete setting if value is None
				sqlx::query("DELETE FROM settings WHERE name = ?")
					.bind(name.as_ref())
					.execute(&mut *tx)
					.await
					.inspect_err(inspect)
					.map_err(|_| Error::DbError)?;
			}
		}

		tx.commit().await.inspect_err(inspect).map_err(|_| Error::DbError)?;

		Ok(())
	}
}

// vim: ts=4
