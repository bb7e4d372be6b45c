//! Layout - fitting paragraphs into terminal columns.
//!
//! Paragraphs reach the renderer as single logical lines. When a wrap width is
//! configured they are broken at word boundaries here, measured in terminal
//! cells rather than bytes or chars.

mod text_measure;

pub use text_measure::{char_width, grapheme_width, string_width, wrap_text};
