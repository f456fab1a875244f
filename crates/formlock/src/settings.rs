//! Resolved settings payload handed to the front-end behavior layer.
//!
//! The payload is a flat, serializable snapshot of the blocking
//! configuration, rebuilt per request (translation is locale-dependent) and
//! mutable so alter hooks can adjust it in place before it leaves the
//! resolver.

use serde::{Deserialize, Serialize};

/// The configured blocking strategy for submit buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockMethod {
	/// Do nothing (disabled)
	None,
	/// Disable the submit buttons
	Disable,
	/// Hide the submit buttons
	Hide,
	/// Built-in loading indicator
	Indicator,
}

impl BlockMethod {
	pub fn parse(s: &str) -> Option<Self> {
		match s {
			"none" => Some(Self::None),
			"disable" => Some(Self::Disable),
			"hide" => Some(Self::Hide),
			"indicator" => Some(Self::Indicator),
			_ => None,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Disable => "disable",
			Self::Hide => "hide",
			Self::Indicator => "indicator",
		}
	}

	/// Whether this method blocks buttons at all
	pub fn is_blocking(&self) -> bool {
		!matches!(self, Self::None)
	}
}

/// Loading indicator animation style, as drawn by the front-end spinner
/// library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IndicatorStyle {
	ExpandLeft,
	ExpandRight,
	ExpandUp,
	ExpandDown,
	Contract,
	ContractOverlay,
	ZoomIn,
	ZoomOut,
	SlideLeft,
	SlideRight,
	SlideUp,
	SlideDown,
}

impl IndicatorStyle {
	pub fn parse(s: &str) -> Option<Self> {
		match s {
			"expand-left" => Some(Self::ExpandLeft),
			"expand-right" => Some(Self::ExpandRight),
			"expand-up" => Some(Self::ExpandUp),
			"expand-down" => Some(Self::ExpandDown),
			"contract" => Some(Self::Contract),
			"contract-overlay" => Some(Self::ContractOverlay),
			"zoom-in" => Some(Self::ZoomIn),
			"zoom-out" => Some(Self::ZoomOut),
			"slide-left" => Some(Self::SlideLeft),
			"slide-right" => Some(Self::SlideRight),
			"slide-up" => Some(Self::SlideUp),
			"slide-down" => Some(Self::SlideDown),
			_ => None,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::ExpandLeft => "expand-left",
			Self::ExpandRight => "expand-right",
			Self::ExpandUp => "expand-up",
			Self::ExpandDown => "expand-down",
			Self::Contract => "contract",
			Self::ContractOverlay => "contract-overlay",
			Self::ZoomIn => "zoom-in",
			Self::ZoomOut => "zoom-out",
			Self::SlideLeft => "slide-left",
			Self::SlideRight => "slide-right",
			Self::SlideUp => "slide-up",
			Self::SlideDown => "slide-down",
		}
	}
}

/// Spinner color, stored and serialized as the literal color value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpinnerColor {
	#[serde(rename = "#000")]
	Black,
	#[serde(rename = "#A9A9A9")]
	DarkGrey,
	#[serde(rename = "#808080")]
	Grey,
	#[serde(rename = "#D3D3D3")]
	LightGrey,
	#[serde(rename = "#fff")]
	White,
}

impl SpinnerColor {
	pub fn parse(s: &str) -> Option<Self> {
		match s {
			"#000" => Some(Self::Black),
			"#A9A9A9" => Some(Self::DarkGrey),
			"#808080" => Some(Self::Grey),
			"#D3D3D3" => Some(Self::LightGrey),
			"#fff" => Some(Self::White),
			_ => None,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Black => "#000",
			Self::DarkGrey => "#A9A9A9",
			Self::Grey => "#808080",
			Self::LightGrey => "#D3D3D3",
			Self::White => "#fff",
		}
	}
}

/// Flat per-request settings payload
///
/// One field per configuration key; the three text fields hold translated
/// strings. Unused sub-tree fields are always present, the presentation
/// layer simply ignores the ones outside the active method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSettings {
	pub method: BlockMethod,

	/// Milliseconds until blocked buttons reset; 0 disables the reset
	#[serde(rename = "resetTime")]
	pub reset_time: i64,

	#[serde(rename = "disableCss")]
	pub disable_css: String,

	/// Text appended to each submit button label
	#[serde(rename = "appendText")]
	pub append_text: String,

	/// Text shown next to the submit buttons
	#[serde(rename = "adjacentText")]
	pub adjacent_text: String,

	/// Text shown in place of the hidden buttons
	#[serde(rename = "hideText")]
	pub hide_text: String,

	#[serde(rename = "hideFx")]
	pub hide_fx: bool,

	#[serde(rename = "hideCss")]
	pub hide_css: String,

	#[serde(rename = "indicatorStyle")]
	pub indicator_style: IndicatorStyle,

	#[serde(rename = "spinnerColor")]
	pub spinner_color: SpinnerColor,

	#[serde(rename = "spinnerLines")]
	pub spinner_lines: i64,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_block_method_parse() {
		assert_eq!(BlockMethod::parse("none"), Some(BlockMethod::None));
		assert_eq!(BlockMethod::parse("disable"), Some(BlockMethod::Disable));
		assert_eq!(BlockMethod::parse("hide"), Some(BlockMethod::Hide));
		assert_eq!(BlockMethod::parse("indicator"), Some(BlockMethod::Indicator));
		assert_eq!(BlockMethod::parse("fade"), None);
		assert_eq!(BlockMethod::parse("Disable"), None);
	}

	#[test]
	fn test_only_none_is_non_blocking() {
		assert!(!BlockMethod::None.is_blocking());
		assert!(BlockMethod::Disable.is_blocking());
		assert!(BlockMethod::Hide.is_blocking());
		assert!(BlockMethod::Indicator.is_blocking());
	}

	#[test]
	fn test_indicator_style_round_trip() {
		for s in [
			"expand-left",
			"expand-right",
			"expand-up",
			"expand-down",
			"contract",
			"contract-overlay",
			"zoom-in",
			"zoom-out",
			"slide-left",
			"slide-right",
			"slide-up",
			"slide-down",
		] {
			let style = IndicatorStyle::parse(s).expect("style should parse");
			assert_eq!(style.as_str(), s);
		}
		assert_eq!(IndicatorStyle::parse("bounce"), None);
	}

	#[test]
	fn test_spinner_color_serializes_as_literal() {
		let json = serde_json::to_value(SpinnerColor::White).expect("serialize");
		assert_eq!(json, serde_json::json!("#fff"));
		assert_eq!(SpinnerColor::parse("#A9A9A9"), Some(SpinnerColor::DarkGrey));
		assert_eq!(SpinnerColor::parse("#abc"), None);
	}

	#[test]
	fn test_payload_wire_names() {
		let settings = ResolvedSettings {
			method: BlockMethod::Indicator,
			reset_time: 3000,
			disable_css: String::new(),
			append_text: String::new(),
			adjacent_text: String::new(),
			hide_text: String::new(),
			hide_fx: true,
			hide_css: String::new(),
			indicator_style: IndicatorStyle::ZoomIn,
			spinner_color: SpinnerColor::White,
			spinner_lines: 8,
		};
		let json = serde_json::to_value(&settings).expect("serialize");
		assert_eq!(json["method"], "indicator");
		assert_eq!(json["resetTime"], 3000);
		assert_eq!(json["indicatorStyle"], "zoom-in");
		assert_eq!(json["spinnerColor"], "#fff");
		assert_eq!(json["spinnerLines"], 8);
	}
}

// vim: ts=4
