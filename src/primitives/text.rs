//! Text Primitive - multi-line text rendered paragraph by paragraph.
//!
//! The component owns a [`ParagraphPipeline`]. Its content prop feeds the
//! pipeline, and [`each_indexed`] pushes every paragraph list through the
//! caller's template together with the first/last flags.
//!
//! # Reactivity
//!
//! Content can be a static string or a signal. A signal stays connected: each
//! change is forwarded to the pipeline and the paragraphs are re-rendered.
//! [`TextComponent::set_content`] is the imperative setter for hosts that push
//! text themselves.
//!
//! # Example
//!
//! ```
//! use paragraph_view::primitives::{template, text, PropValue, TextProps};
//! use paragraph_view::reactive::signal;
//!
//! let content = signal(String::from("one"));
//! let view = text(TextProps::new(
//!     PropValue::Signal(content.clone()),
//!     template(|item| item.text.to_uppercase()),
//! ));
//! assert_eq!(view.rendered(), vec!["ONE"]);
//!
//! content.set(String::from("one\n\n two "));
//! assert_eq!(view.rendered(), vec!["ONE", "TWO"]);
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spark_signals::effect;

use super::control_flow::each_indexed;
use super::types::{ParagraphItem, PropValue, TextProps};
use crate::paragraphs::ParagraphPipeline;
use crate::reactive::Cleanup;

// =============================================================================
// Text Component
// =============================================================================

/// A mounted text component.
///
/// Dropping the component (or calling [`unmount`](Self::unmount)) detaches it
/// from its content signal and stops rendering.
pub struct TextComponent<R: 'static> {
    id: Option<String>,
    pipeline: ParagraphPipeline,
    rendered: Rc<RefCell<Vec<R>>>,
    render_count: Rc<Cell<usize>>,
    cleanups: Vec<Cleanup>,
}

/// Create a text component.
///
/// Binds `content` to a fresh pipeline, then renders the current paragraphs
/// through `template`. Returns the mounted component.
pub fn text<R: 'static>(props: TextProps<R>) -> TextComponent<R> {
    let TextProps {
        id,
        content,
        template,
    } = props;

    let pipeline = ParagraphPipeline::new();
    let mut cleanups: Vec<Cleanup> = Vec::new();

    // 1. BIND CONTENT
    match content {
        PropValue::Static(v) => pipeline.set_text(v),
        PropValue::Signal(s) => {
            // Effect reads the signal, so every later change is forwarded
            let target = pipeline.clone();
            let stop_fn = effect(move || target.set_text(s.get()));
            cleanups.push(Box::new(stop_fn));
        }
    }

    // 2. RENDER PARAGRAPHS
    let rendered = Rc::new(RefCell::new(Vec::new()));
    cleanups.push(each_indexed(
        pipeline.paragraphs(),
        move |paragraph: &String, index, is_first, is_last| {
            template(&ParagraphItem {
                text: paragraph.clone(),
                index,
                is_first,
                is_last,
            })
        },
        rendered.clone(),
    ));

    // 3. COUNT RENDER PASSES - one notification per pass, empty lists included
    let render_count = Rc::new(Cell::new(0usize));
    let counter = render_count.clone();
    cleanups.push(pipeline.subscribe(move |_| counter.set(counter.get() + 1)));

    TextComponent {
        id,
        pipeline,
        rendered,
        render_count,
        cleanups,
    }
}

impl<R: 'static> TextComponent<R> {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Push new raw text into the component.
    ///
    /// With a signal-bound content prop this value holds until the signal
    /// changes again.
    pub fn set_content(&self, content: impl Into<String>) {
        self.pipeline.set_text(content);
    }

    /// The raw text currently displayed.
    pub fn content(&self) -> String {
        self.pipeline.text()
    }

    /// The current paragraph list.
    pub fn paragraphs(&self) -> Vec<String> {
        self.pipeline.current()
    }

    /// The current paragraphs with their positional flags.
    pub fn items(&self) -> Vec<ParagraphItem> {
        ParagraphItem::from_list(&self.pipeline.current())
    }

    /// Template outputs from the latest render.
    pub fn rendered(&self) -> Vec<R>
    where
        R: Clone,
    {
        self.rendered.borrow().clone()
    }

    /// Borrow the template outputs from the latest render.
    pub fn with_rendered<T>(&self, f: impl FnOnce(&[R]) -> T) -> T {
        f(&self.rendered.borrow())
    }

    /// Number of render passes so far, including the initial one.
    pub fn render_count(&self) -> usize {
        self.render_count.get()
    }

    /// Detach from the content signal and stop rendering.
    pub fn unmount(self) {
        drop(self);
    }
}

impl<R: 'static> Drop for TextComponent<R> {
    fn drop(&mut self) {
        for cleanup in self.cleanups.drain(..) {
            cleanup();
        }
        if let Some(id) = &self.id {
            log::debug!("unmounted text component {id}");
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::template;
    use crate::reactive::signal;

    fn flags_template() -> crate::primitives::Template<String> {
        template(|item: &ParagraphItem| {
            format!("{}|{}|{}", item.text, item.is_first, item.is_last)
        })
    }

    #[test]
    fn test_text_static_content() {
        let view = text(TextProps::new(
            "Paragraph #1\nParagraph #2\n\nParagraph #3",
            flags_template(),
        ));

        assert_eq!(
            view.rendered(),
            vec![
                "Paragraph #1|true|false",
                "Paragraph #2|false|false",
                "Paragraph #3|false|true",
            ]
        );
        assert_eq!(view.render_count(), 1);
    }

    #[test]
    fn test_text_signal_content() {
        let content = signal(String::from("a"));
        let view = text(TextProps::new(PropValue::Signal(content.clone()), flags_template()));
        assert_eq!(view.rendered(), vec!["a|true|true"]);

        content.set(String::from("a\nb"));
        assert_eq!(view.rendered(), vec!["a|true|false", "b|false|true"]);
        assert_eq!(view.render_count(), 2);
    }

    #[test]
    fn test_text_set_content() {
        let view = text(TextProps::new("", flags_template()));
        assert!(view.rendered().is_empty());

        view.set_content("  Hello  \n  World  ");
        assert_eq!(view.paragraphs(), vec!["Hello", "World"]);
        assert_eq!(view.content(), "  Hello  \n  World  ");
        assert_eq!(view.render_count(), 2);
    }

    #[test]
    fn test_text_whitespace_only_renders_nothing() {
        let view = text(TextProps::new("x", flags_template()));
        view.set_content("   \n\n  \n");

        assert!(view.rendered().is_empty());
        assert!(view.items().is_empty());
    }

    #[test]
    fn test_text_unmount_detaches_signal() {
        let content = signal(String::from("a"));
        let calls = Rc::new(Cell::new(0));
        let calls_clone = calls.clone();
        let view = text(TextProps::new(
            PropValue::Signal(content.clone()),
            template(move |item: &ParagraphItem| {
                calls_clone.set(calls_clone.get() + 1);
                item.text.clone()
            }),
        ));
        assert_eq!(calls.get(), 1);

        view.unmount();
        content.set(String::from("b\nc"));

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_text_same_content_rerenders() {
        let view = text(TextProps::new("a", flags_template()));

        view.set_content("a");
        assert_eq!(view.rendered(), vec!["a|true|true"]);
        assert_eq!(view.render_count(), 2);
    }

    #[test]
    fn test_text_id() {
        let view = text(TextProps::new("a", flags_template()).with_id("intro"));
        assert_eq!(view.id(), Some("intro"));
        assert_eq!(view.with_rendered(|lines| lines.len()), 1);
    }
}
