//! Blocking configuration schema registration
//!
//! Registers the full key-path schema with defaults. Every sub-tree is
//! registered regardless of the active method so the resolver can always
//! read all eleven keys.

use crate::prelude::*;
use crate::settings::{BlockMethod, IndicatorStyle, SpinnerColor};

use super::types::{ConfigRegistry, SettingDefinition, SettingValue};

/// Register all blocking settings
pub fn register_settings(registry: &mut ConfigRegistry) -> ClResult<()> {
	registry.register(
		SettingDefinition::builder("method")
			.description("Blocking method applied to submit buttons after a click")
			.default(SettingValue::String("indicator".into()))
			.validator(|value| match value {
				SettingValue::String(s) if BlockMethod::parse(s).is_some() => Ok(()),
				_ => Err(Error::ValidationError(
					"method must be one of none, disable, hide, indicator".into(),
				)),
			})
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("reset_time")
			.description("Milliseconds until blocked buttons reset; 0 disables the reset")
			.default(SettingValue::Int(3000))
			.validator(|value| match value.coerce_int() {
				Some(ms) if ms >= 0 => Ok(()),
				_ => Err(Error::ValidationError("reset_time must be a non-negative integer".into())),
			})
			.build()?,
	)?;

	// Disabling settings
	registry.register(
		SettingDefinition::builder("disable.abtext")
			.description("Text appended to each submit button label")
			.default(SettingValue::String(String::new()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("disable.atext")
			.description("Text shown next to the submit buttons")
			.default(SettingValue::String(String::new()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("disable.css")
			.description("Stylesheet applied while buttons are disabled")
			.default(SettingValue::String(String::new()))
			.build()?,
	)?;

	// Hiding settings
	registry.register(
		SettingDefinition::builder("hide.hide_fx")
			.description("Fade the buttons out instead of hiding them instantly")
			.default(SettingValue::Bool(true))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("hide.hide_text")
			.description("Text shown in place of the hidden buttons")
			.default(SettingValue::String("Please wait...".into()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("hide.hide_css")
			.description("Stylesheet applied while buttons are hidden")
			.default(SettingValue::String(String::new()))
			.build()?,
	)?;

	// Indicator settings
	registry.register(
		SettingDefinition::builder("indicator.indicator_style")
			.description("Loading indicator animation style")
			.default(SettingValue::String("expand-left".into()))
			.validator(|value| match value {
				SettingValue::String(s) if IndicatorStyle::parse(s).is_some() => Ok(()),
				_ => Err(Error::ValidationError("unknown indicator style".into())),
			})
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("indicator.spinner_color")
			.description("Loading indicator spinner color")
			.default(SettingValue::String("#fff".into()))
			.validator(|value| match value {
				SettingValue::String(s) if SpinnerColor::parse(s).is_some() => Ok(()),
				_ => Err(Error::ValidationError("unknown spinner color".into())),
			})
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("indicator.spinner_lines")
			.description("Number of lines drawn by the spinner")
			.default(SettingValue::Int(12))
			.validator(|value| match value.coerce_int() {
				Some(lines) if lines >= 1 => Ok(()),
				_ => Err(Error::ValidationError("spinner_lines must be a positive integer".into())),
			})
			.build()?,
	)?;

	Ok(())
}


// vim: ts=4
