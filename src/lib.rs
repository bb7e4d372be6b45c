//! # paragraph-view
//!
//! Reactive paragraph text view for the terminal.
//!
//! A text component takes a blob of raw text, splits it into trimmed,
//! non-blank lines ("paragraphs") and renders each one through a
//! caller-supplied template that also learns whether it is the first or last
//! paragraph. Whenever the text changes the paragraph list is recomputed and
//! re-rendered.
//!
//! ## Architecture
//!
//! ```text
//! content ─▶ signal ─▶ derived(split_paragraphs) ─effect─▶ each_indexed ─▶ template ─▶ StyledLine ─▶ LineRenderer
//! ```
//!
//! ## Modules
//!
//! - [`reactive`] - spark-signals re-exports and the `Revision` wrapper
//! - [`paragraphs`] - the splitting transform and `ParagraphPipeline`
//! - [`primitives`] - `text` component, `each_indexed`, props and templates
//! - [`types`] - colors, attributes, `StyledLine`
//! - [`layout`] - cell-width measurement and wrapping
//! - [`renderer`] - ANSI output through crossterm
//! - [`app`] - the root view and its two item views
//! - [`config`] - environment-driven view configuration

pub mod app;
pub mod config;
pub mod error;
pub mod layout;
pub mod paragraphs;
pub mod primitives;
pub mod reactive;
pub mod renderer;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use error::{RenderError, Result};

pub use reactive::{derived, effect, signal, Cleanup, Derived, Revision, Signal};

pub use paragraphs::{split_paragraphs, ParagraphPipeline};

pub use primitives::{
    each_indexed, template, text, ParagraphItem, PropValue, Template, TextComponent, TextProps,
};

pub use config::{ColorMode, TemplateKind, ViewConfig};

pub use renderer::LineRenderer;

pub use app::AppView;
