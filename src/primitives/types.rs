//! Primitive types - Props, items and templates.
//!
//! Props support static values and signals. A signal prop stays connected:
//! later changes to the signal flow into the component.

use std::fmt;
use std::rc::Rc;

use crate::reactive::Signal;

// =============================================================================
// Prop Value - Reactive property wrapper
// =============================================================================

/// A property value that is either fixed or bound to a signal.
#[derive(Clone)]
pub enum PropValue<T: Clone + PartialEq + 'static> {
    /// Static value (not reactive).
    Static(T),
    /// Reactive signal (changes propagate automatically).
    Signal(Signal<T>),
}

impl<T: Clone + PartialEq + 'static> PropValue<T> {
    /// Get the current value (for immediate reads).
    pub fn get(&self) -> T {
        match self {
            PropValue::Static(v) => v.clone(),
            PropValue::Signal(s) => s.get(),
        }
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for PropValue<T> {
    fn default() -> Self {
        PropValue::Static(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> From<Signal<T>> for PropValue<T> {
    fn from(signal: Signal<T>) -> Self {
        PropValue::Signal(signal)
    }
}

impl From<String> for PropValue<String> {
    fn from(value: String) -> Self {
        PropValue::Static(value)
    }
}

impl From<&str> for PropValue<String> {
    fn from(value: &str) -> Self {
        PropValue::Static(value.to_string())
    }
}

// =============================================================================
// Paragraph Item
// =============================================================================

/// One paragraph plus its position in the current list.
///
/// `is_first` and `is_last` are pure functions of `index` and the list length,
/// recomputed with the list on every update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParagraphItem {
    pub text: String,
    pub index: usize,
    pub is_first: bool,
    pub is_last: bool,
}

impl ParagraphItem {
    pub fn new(text: impl Into<String>, index: usize, len: usize) -> Self {
        Self {
            text: text.into(),
            index,
            is_first: index == 0,
            is_last: index + 1 == len,
        }
    }

    /// Attach positional flags to every element of `paragraphs`.
    pub fn from_list(paragraphs: &[String]) -> Vec<ParagraphItem> {
        let len = paragraphs.len();
        paragraphs
            .iter()
            .enumerate()
            .map(|(index, text)| ParagraphItem::new(text.as_str(), index, len))
            .collect()
    }
}

// =============================================================================
// Template
// =============================================================================

/// Caller-supplied renderer for one paragraph.
///
/// `Rc` so the same template can be shared between components and captured
/// into observers.
pub type Template<R> = Rc<dyn Fn(&ParagraphItem) -> R>;

/// Wrap a closure as a [`Template`].
pub fn template<R>(f: impl Fn(&ParagraphItem) -> R + 'static) -> Template<R> {
    Rc::new(f)
}

// =============================================================================
// Text Props
// =============================================================================

/// Properties for the [`text`](super::text) component.
///
/// # Example
///
/// ```
/// use paragraph_view::primitives::{template, text, TextProps};
///
/// let view = text(TextProps::new(
///     "first\nsecond",
///     template(|item| format!("{}:{}", item.index, item.text)),
/// ));
/// assert_eq!(view.rendered(), vec!["0:first", "1:second"]);
/// ```
pub struct TextProps<R: 'static> {
    /// Optional component ID, used in log output.
    pub id: Option<String>,
    /// The raw text to split into paragraphs.
    pub content: PropValue<String>,
    /// Renders each paragraph.
    pub template: Template<R>,
}

impl<R: 'static> TextProps<R> {
    pub fn new(content: impl Into<PropValue<String>>, template: Template<R>) -> Self {
        Self {
            id: None,
            content: content.into(),
            template,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl<R: 'static> fmt::Debug for TextProps<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextProps")
            .field("id", &self.id)
            .field("content", &self.content.get())
            .finish_non_exhaustive()
    }
}
