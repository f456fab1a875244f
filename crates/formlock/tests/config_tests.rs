//! Configuration service tests
//!
//! Tests default resolution, staged atomic updates, validation, and
//! permission checks against a temporary database.

use std::sync::Arc;

use formlock::config::{ConfigRegistry, ConfigService, SettingValue, register_settings};
use formlock_config_adapter_sqlite::ConfigAdapterSqlite;
use formlock_types::config_adapter::ConfigAdapter;
use formlock_types::error::Error;
use tempfile::TempDir;

async fn create_config() -> (ConfigService, Arc<ConfigAdapterSqlite>, TempDir) {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");

	let adapter = Arc::new(
		ConfigAdapterSqlite::new(temp_dir.path().join("config.db"))
			.await
			.expect("Failed to create adapter"),
	);

	let mut registry = ConfigRegistry::new();
	register_settings(&mut registry).expect("Schema should register");

	let service = ConfigService::new(Arc::new(registry.freeze()), adapter.clone(), 100);
	(service, adapter, temp_dir)
}

#[tokio::test]
async fn test_defaults_on_fresh_store() {
	let (config, _adapter, _temp) = create_config().await;

	assert_eq!(config.get_str("method").await.expect("get"), "indicator");
	assert_eq!(config.get_int("reset_time").await.expect("get"), 3000);
	assert!(config.get_bool("hide.hide_fx").await.expect("get"));
	assert_eq!(config.get_str("disable.abtext").await.expect("get"), "");
	assert_eq!(config.get_str("indicator.spinner_color").await.expect("get"), "#fff");
	assert_eq!(config.get_int("indicator.spinner_lines").await.expect("get"), 12);
}

#[tokio::test]
async fn test_unknown_key_errors() {
	let (config, _adapter, _temp) = create_config().await;

	assert!(matches!(config.get("no.such.key").await, Err(Error::ValidationError(_))));
	assert!(matches!(
		config.update().set("no.such.key", SettingValue::Int(1)),
		Err(Error::ValidationError(_))
	));
	assert!(matches!(config.update().unset("no.such.key"), Err(Error::ValidationError(_))));
}

#[tokio::test]
async fn test_staged_values_invisible_until_save() {
	let (config, _adapter, _temp) = create_config().await;

	let mut update = config.update();
	update.set("method", SettingValue::String("hide".into())).expect("stage");
	update.set("reset_time", SettingValue::Int(5000)).expect("stage");

	assert_eq!(config.get_str("method").await.expect("get"), "indicator");
	assert_eq!(config.get_int("reset_time").await.expect("get"), 3000);

	update.save(&["ADMIN"]).await.expect("save");

	assert_eq!(config.get_str("method").await.expect("get"), "hide");
	assert_eq!(config.get_int("reset_time").await.expect("get"), 5000);
}

#[tokio::test]
async fn test_set_rejects_type_mismatch() {
	let (config, _adapter, _temp) = create_config().await;

	let mut update = config.update();
	let res = update.set("reset_time", SettingValue::String("soon".into()));
	assert!(matches!(res, Err(Error::ValidationError(_))));
}

#[tokio::test]
async fn test_set_rejects_invalid_values() {
	let (config, _adapter, _temp) = create_config().await;

	let mut update = config.update();
	assert!(update.set("method", SettingValue::String("fade".into())).is_err());
	assert!(update.set("reset_time", SettingValue::Int(-1)).is_err());
	assert!(update.set("indicator.spinner_lines", SettingValue::Int(0)).is_err());
	assert!(update.set("indicator.indicator_style", SettingValue::String("bounce".into())).is_err());
}

#[tokio::test]
async fn test_save_requires_admin_role() {
	let (config, _adapter, _temp) = create_config().await;

	let mut update = config.update();
	update.set("method", SettingValue::String("hide".into())).expect("stage");
	let res = update.save(&["USER"]).await;
	assert!(matches!(res, Err(Error::PermissionDenied)));

	// Nothing committed
	assert_eq!(config.get_str("method").await.expect("get"), "indicator");
}

#[tokio::test]
async fn test_unset_falls_back_to_default() {
	let (config, _adapter, _temp) = create_config().await;

	let mut update = config.update();
	update.set("hide.hide_text", SettingValue::String("Hold on".into())).expect("stage");
	update.save(&["ADMIN"]).await.expect("save");
	assert_eq!(config.get_str("hide.hide_text").await.expect("get"), "Hold on");

	let mut update = config.update();
	update.unset("hide.hide_text").expect("stage");
	update.save(&["ADMIN"]).await.expect("save");
	assert_eq!(config.get_str("hide.hide_text").await.expect("get"), "Please wait...");
}

#[tokio::test]
async fn test_coerced_int_reads_numeric_strings() {
	let (config, adapter, _temp) = create_config().await;

	// Stores written by plain form posts hold numbers as strings
	adapter
		.write_values(&[("reset_time".into(), Some(serde_json::json!("4500")))])
		.await
		.expect("write");

	assert_eq!(config.get_int_coerced("reset_time").await.expect("get"), 4500);
	assert!(matches!(config.get_int("reset_time").await, Err(Error::ValidationError(_))));
}

#[tokio::test]
async fn test_save_survives_service_restart() {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");
	let db_path = temp_dir.path().join("config.db");

	{
		let adapter =
			Arc::new(ConfigAdapterSqlite::new(&db_path).await.expect("Failed to create adapter"));
		let mut registry = ConfigRegistry::new();
		register_settings(&mut registry).expect("Schema should register");
		let config = ConfigService::new(Arc::new(registry.freeze()), adapter, 100);

		let mut update = config.update();
		update.set("method", SettingValue::String("disable".into())).expect("stage");
		update.save(&["ADMIN"]).await.expect("save");
	}

	let adapter =
		Arc::new(ConfigAdapterSqlite::new(&db_path).await.expect("Failed to reopen adapter"));
	let mut registry = ConfigRegistry::new();
	register_settings(&mut registry).expect("Schema should register");
	let config = ConfigService::new(Arc::new(registry.freeze()), adapter, 100);

	assert_eq!(config.get_str("method").await.expect("get"), "disable");
}

// vim: ts=4
