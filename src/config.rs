//! View configuration.
//!
//! Read once at startup from the environment:
//!
//! | Variable | Values | Default |
//! |---|---|---|
//! | `PARAGRAPH_VIEW_COLOR` | `auto`, `always`, `never` | `auto` (`never` if `NO_COLOR` is set) |
//! | `PARAGRAPH_VIEW_WIDTH` | positive integer | terminal width when attached to one |
//! | `PARAGRAPH_VIEW_TEMPLATE` | `a`, `b` | `a` |

use std::str::FromStr;

use crate::error::{RenderError, Result};

pub const ENV_COLOR: &str = "PARAGRAPH_VIEW_COLOR";
pub const ENV_WIDTH: &str = "PARAGRAPH_VIEW_WIDTH";
pub const ENV_TEMPLATE: &str = "PARAGRAPH_VIEW_TEMPLATE";
pub const ENV_NO_COLOR: &str = "NO_COLOR";

// =============================================================================
// Color Mode
// =============================================================================

/// Whether styled output is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Style only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve against whether the output is a terminal.
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorMode::Auto => is_terminal,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl FromStr for ColorMode {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(RenderError::InvalidConfig {
                key: ENV_COLOR,
                value: s.to_string(),
                expected: "auto, always or never",
            }),
        }
    }
}

// =============================================================================
// Template Kind
// =============================================================================

/// Which item view renders the paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemplateKind {
    /// Emphasis by position: bold first, dim last.
    #[default]
    A,
    /// Bulleted list: accent-colored first, underlined last.
    B,
}

impl FromStr for TemplateKind {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "custom-a" => Ok(TemplateKind::A),
            "b" | "custom-b" => Ok(TemplateKind::B),
            _ => Err(RenderError::InvalidConfig {
                key: ENV_TEMPLATE,
                value: s.to_string(),
                expected: "a or b",
            }),
        }
    }
}

// =============================================================================
// View Config
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewConfig {
    pub color: ColorMode,
    /// Wrap paragraphs at this many cells. `None` leaves the choice to the host.
    pub wrap_width: Option<u16>,
    pub template: TemplateKind,
}

impl ViewConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its
    /// value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = ViewConfig::default();

        match lookup(ENV_COLOR) {
            Some(value) => config.color = value.parse()?,
            None => {
                if lookup(ENV_NO_COLOR).is_some_and(|v| !v.is_empty()) {
                    config.color = ColorMode::Never;
                }
            }
        }

        if let Some(value) = lookup(ENV_WIDTH) {
            config.wrap_width = Some(parse_width(&value)?);
        }

        if let Some(value) = lookup(ENV_TEMPLATE) {
            config.template = value.parse()?;
        }

        log::debug!("view config: {config:?}");
        Ok(config)
    }
}

fn parse_width(value: &str) -> Result<u16> {
    match value.trim().parse::<u16>() {
        Ok(width) if width > 0 => Ok(width),
        _ => Err(RenderError::InvalidConfig {
            key: ENV_WIDTH,
            value: value.to_string(),
            expected: "a positive integer up to 65535",
        }),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ViewConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ViewConfig::default());
        assert_eq!(config.color, ColorMode::Auto);
        assert_eq!(config.template, TemplateKind::A);
        assert_eq!(config.wrap_width, None);
    }

    #[test]
    fn test_all_values() {
        let config = ViewConfig::from_lookup(lookup(&[
            (ENV_COLOR, "Always"),
            (ENV_WIDTH, " 60 "),
            (ENV_TEMPLATE, "b"),
        ]))
        .unwrap();

        assert_eq!(config.color, ColorMode::Always);
        assert_eq!(config.wrap_width, Some(60));
        assert_eq!(config.template, TemplateKind::B);
    }

    #[test]
    fn test_no_color() {
        let config = ViewConfig::from_lookup(lookup(&[(ENV_NO_COLOR, "1")])).unwrap();
        assert_eq!(config.color, ColorMode::Never);

        // An explicit choice wins over NO_COLOR.
        let config =
            ViewConfig::from_lookup(lookup(&[(ENV_NO_COLOR, "1"), (ENV_COLOR, "always")])).unwrap();
        assert_eq!(config.color, ColorMode::Always);
    }

    #[test]
    fn test_invalid_width() {
        for bad in ["0", "-3", "wide", "70000"] {
            let err = ViewConfig::from_lookup(lookup(&[(ENV_WIDTH, bad)])).unwrap_err();
            assert!(matches!(err, RenderError::InvalidConfig { key: ENV_WIDTH, .. }));
        }
    }

    #[test]
    fn test_invalid_color_message() {
        let err = ViewConfig::from_lookup(lookup(&[(ENV_COLOR, "sometimes")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value \"sometimes\" for PARAGRAPH_VIEW_COLOR: expected auto, always or never"
        );
    }

    #[test]
    fn test_color_mode_enabled() {
        assert!(ColorMode::Auto.enabled(true));
        assert!(!ColorMode::Auto.enabled(false));
        assert!(ColorMode::Always.enabled(false));
        assert!(!ColorMode::Never.enabled(true));
    }
}
