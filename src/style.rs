//! Formatting configuration and the resolver that turns it into concrete style values.
//!
//! Every resolved field is described by an ordered list of [`Rule`]s.  The first rule that
//! yields a value wins, otherwise the field's default is used.  Rules treat an empty font
//! name and a zero size or spacing exactly like a missing value.

use serde::{Deserialize, Serialize};

use crate::error::ResumeError;

/// Font family used when the configuration does not name one.
pub const DEFAULT_FONT: &str = "Helvetica";
/// Base font size (pt) used when the configuration does not set one.
pub const DEFAULT_FONT_SIZE: u8 = 10;
/// Heading size used only if the base size itself resolved to zero.
pub const DEFAULT_HEADING_SIZE: u8 = 18;
/// Sub-heading size used only if the base size itself resolved to zero.
pub const DEFAULT_SUBHEADING_SIZE: u8 = 12;
/// Line-height multiplier used when no spacing is configured.
pub const DEFAULT_LINE_HEIGHT: f64 = 1.5;

/// Font sizes offered by the editor.
pub const FONT_SIZE_RANGE: std::ops::RangeInclusive<u8> = 8..=16;
/// Spacing values offered by the editor.
pub const SPACING_RANGE: std::ops::RangeInclusive<u8> = 4..=20;

/// User-adjustable presentation parameters.
///
/// Any field may be absent.  The resolver accepts arbitrary font names and sizes; the
/// editor-facing ranges above are enforced by front ends.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattingConfig {
    #[serde(default)]
    pub font: Option<String>,
    #[serde(default)]
    pub font_size: Option<u8>,
    /// Divided by four to obtain the line-height multiplier.
    #[serde(default)]
    pub spacing: Option<u8>,
}

impl FormattingConfig {
    /// The values a fresh editing session starts with.
    pub fn editor_defaults() -> Self {
        Self {
            font: Some("Times-Roman".to_string()),
            font_size: Some(11),
            spacing: Some(8),
        }
    }

    /// Reads a formatting configuration from JSON.
    pub fn from_json_str(text: &str) -> Result<Self, ResumeError> {
        crate::record::parse_json(text)
    }

    /// Sets the font family and returns the updated configuration.
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    /// Sets the base font size and returns the updated configuration.
    pub fn with_font_size(mut self, size: u8) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Sets the spacing value and returns the updated configuration.
    pub fn with_spacing(mut self, spacing: u8) -> Self {
        self.spacing = Some(spacing);
        self
    }
}

/// Concrete style values consumed by the section renderers and the PDF surface.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedStyle {
    pub font: String,
    pub font_size: u8,
    pub heading_size: u8,
    pub subheading_size: u8,
    pub line_height: f64,
}

/// A single fallback step: yields a value when its condition holds.
struct Rule<I, T> {
    name: &'static str,
    pick: fn(&I) -> Option<T>,
}

/// Evaluates `rules` in order and returns the first produced value, or `default`.
fn first_applicable<I, T>(input: &I, rules: &[Rule<I, T>], default: T) -> T {
    for rule in rules {
        if let Some(value) = (rule.pick)(input) {
            log::trace!("style rule `{}` applied", rule.name);
            return value;
        }
    }
    default
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|s| !s.is_empty()).map(str::to_owned)
}

fn non_zero(value: Option<u8>) -> Option<u8> {
    value.filter(|v| *v != 0)
}

fn configured_font(config: &FormattingConfig) -> Option<String> {
    non_empty(&config.font)
}

fn configured_font_size(config: &FormattingConfig) -> Option<u8> {
    non_zero(config.font_size)
}

fn spacing_quarter(config: &FormattingConfig) -> Option<f64> {
    non_zero(config.spacing).map(|spacing| f64::from(spacing) / 4.0)
}

fn base_plus_four(base: &u8) -> Option<u8> {
    non_zero(Some(*base)).map(|base| base.saturating_add(4))
}

fn base_plus_two(base: &u8) -> Option<u8> {
    non_zero(Some(*base)).map(|base| base.saturating_add(2))
}

const FONT_RULES: &[Rule<FormattingConfig, String>] = &[Rule {
    name: "configured font",
    pick: configured_font,
}];

const FONT_SIZE_RULES: &[Rule<FormattingConfig, u8>] = &[Rule {
    name: "configured font size",
    pick: configured_font_size,
}];

const LINE_HEIGHT_RULES: &[Rule<FormattingConfig, f64>] = &[Rule {
    name: "spacing / 4",
    pick: spacing_quarter,
}];

const HEADING_RULES: &[Rule<u8, u8>] = &[Rule {
    name: "base size + 4",
    pick: base_plus_four,
}];

const SUBHEADING_RULES: &[Rule<u8, u8>] = &[Rule {
    name: "base size + 2",
    pick: base_plus_two,
}];

/// Derives the concrete style set from a formatting configuration.
pub fn resolve(config: &FormattingConfig) -> ResolvedStyle {
    let font = first_applicable(config, FONT_RULES, DEFAULT_FONT.to_string());
    let font_size = first_applicable(config, FONT_SIZE_RULES, DEFAULT_FONT_SIZE);
    let heading_size = first_applicable(&font_size, HEADING_RULES, DEFAULT_HEADING_SIZE);
    let subheading_size = first_applicable(&font_size, SUBHEADING_RULES, DEFAULT_SUBHEADING_SIZE);
    let line_height = first_applicable(config, LINE_HEIGHT_RULES, DEFAULT_LINE_HEIGHT);

    ResolvedStyle {
        font,
        font_size,
        heading_size,
        subheading_size,
        line_height,
    }
}
