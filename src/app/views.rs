//! Item views - the two interchangeable paragraph templates.
//!
//! Both receive the paragraph text and its first/last flags and nothing else,
//! so either can be handed to any text component.

use crate::config::TemplateKind;
use crate::primitives::{template, ParagraphItem, Template};
use crate::types::{Attr, Rgba, StyledLine};

/// Accent used by [`custom_b`] for the opening paragraph.
pub const ACCENT: Rgba = Rgba::from_rgb_int(0x8be9fd);

/// Emphasis by position: the first paragraph is bold, the last is dimmed.
pub fn custom_a(item: &ParagraphItem) -> StyledLine {
    let mut line = StyledLine::plain(item.text.as_str());
    if item.is_first {
        line = line.with_attrs(Attr::BOLD);
    }
    if item.is_last {
        line = line.with_attrs(Attr::DIM);
    }
    line
}

/// Bulleted list: the first paragraph takes the accent color, the last is
/// underlined.
pub fn custom_b(item: &ParagraphItem) -> StyledLine {
    let mut line = StyledLine::plain(item.text.as_str()).with_prefix("• ");
    if item.is_first {
        line = line.with_fg(ACCENT);
    }
    if item.is_last {
        line = line.with_attrs(Attr::UNDERLINE);
    }
    line
}

/// The template for `kind`.
pub fn item_template(kind: TemplateKind) -> Template<StyledLine> {
    match kind {
        TemplateKind::A => template(custom_a),
        TemplateKind::B => template(custom_b),
    }
}
