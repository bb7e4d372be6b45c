//! App - the root view.
//!
//! Two text blocks, each bound to a content signal and rendered through the
//! configured item view:
//!
//! - **Simple text**: one paragraph per source line.
//! - **Text with new lines**: every line is followed by an extra newline. The
//!   resulting blank lines are dropped, so both blocks show the same four
//!   paragraphs.

mod views;

pub use views::{custom_a, custom_b, item_template, ACCENT};

use crate::config::TemplateKind;
use crate::primitives::{text, PropValue, TextComponent, TextProps};
use crate::reactive::{signal, Signal};
use crate::types::{Attr, Rgba, StyledLine};

/// Sample text with one paragraph per line.
pub const SIMPLE_TEXT: &str = "
    Paragraph #1
    Paragraph #2
    Paragraph #3
    Paragraph #4
  ";

/// Sample text with a blank line after every paragraph.
pub const TEXT_WITH_NEW_LINES: &str = "
    Paragraph #1\n
    Paragraph #2\n
    Paragraph #3\n
    Paragraph #4\n
  ";

/// One titled text block of the root view.
struct Section {
    title: &'static str,
    content: Signal<String>,
    view: TextComponent<StyledLine>,
}

impl Section {
    fn new(id: &'static str, title: &'static str, initial: &str, kind: TemplateKind) -> Self {
        let content = signal(initial.to_string());
        let view = text(
            TextProps::new(PropValue::Signal(content.clone()), item_template(kind)).with_id(id),
        );
        Self {
            title,
            content,
            view,
        }
    }
}

/// The root view.
pub struct AppView {
    sections: Vec<Section>,
}

impl AppView {
    /// Mount both sample blocks with the item view for `kind`.
    pub fn new(kind: TemplateKind) -> Self {
        let sections = vec![
            Section::new("simple-text", "Simple text", SIMPLE_TEXT, kind),
            Section::new(
                "text-with-new-lines",
                "Text with new lines",
                TEXT_WITH_NEW_LINES,
                kind,
            ),
        ];
        log::debug!("mounted root view with {} section(s)", sections.len());
        Self { sections }
    }

    /// Content signal of the simple-text block.
    pub fn simple_text(&self) -> &Signal<String> {
        &self.sections[0].content
    }

    /// Content signal of the text-with-new-lines block.
    pub fn text_with_new_lines(&self) -> &Signal<String> {
        &self.sections[1].content
    }

    /// Current paragraphs of every block, in display order.
    pub fn paragraphs(&self) -> Vec<Vec<String>> {
        self.sections
            .iter()
            .map(|section| section.view.paragraphs())
            .collect()
    }

    /// Compose the current frame: a title per block, its rendered paragraphs,
    /// and a blank line between blocks.
    pub fn lines(&self) -> Vec<StyledLine> {
        let mut lines = Vec::new();
        for (index, section) in self.sections.iter().enumerate() {
            if index > 0 {
                lines.push(StyledLine::blank());
            }
            lines.push(
                StyledLine::plain(section.title)
                    .with_fg(Rgba::GRAY)
                    .with_attrs(Attr::UNDERLINE),
            );
            section.view.with_rendered(|rendered| lines.extend_from_slice(rendered));
        }
        lines
    }
}

// =============================================================================
// Tests
// =============================================================================
