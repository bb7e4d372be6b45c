//! Paragraph Pipeline - raw text in, trimmed non-blank lines out.
//!
//! ```text
//! set_text("  a \n\n b") ─▶ Signal ─▶ derived(split_paragraphs) ─▶ ["a", "b"]
//! ```
//!
//! The pipeline holds one current text value (initially empty) and exposes the
//! paragraph list derived from it. The list is rebuilt from scratch on every
//! update and delivered in full to each observer; a new observer immediately
//! receives the list for the current text.
//!
//! Only a real `'\n'` splits. A backslash followed by `n` is ordinary text and
//! stays inside its paragraph.

use std::cell::Cell;
use std::rc::Rc;

use crate::reactive::{
    derived, effect, signal, Cleanup, Derived, Revision, RevisionCounter, Signal,
};

/// Split `text` into paragraphs.
///
/// Splits on `'\n'`, trims each piece, drops the pieces that end up empty and
/// keeps the rest in source order. Total: every input has a defined result,
/// and whitespace-only input yields an empty list.
///
/// # Example
///
/// ```
/// use paragraph_view::paragraphs::split_paragraphs;
///
/// assert_eq!(
///     split_paragraphs("Paragraph #1\nParagraph #2\n\nParagraph #3"),
///     vec!["Paragraph #1", "Paragraph #2", "Paragraph #3"],
/// );
/// assert!(split_paragraphs("   \n\n  \n").is_empty());
/// ```
pub fn split_paragraphs(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

type ParagraphsFn = Box<dyn Fn() -> Revision<Vec<String>>>;

/// The latest text value plus its derived paragraph list.
///
/// Cloning shares the same slot, like cloning a signal.
#[derive(Clone)]
pub struct ParagraphPipeline {
    text: Signal<Revision<String>>,
    revisions: RevisionCounter,
    paragraphs: Rc<Derived<Revision<Vec<String>>>>,
    recomputes: Rc<Cell<usize>>,
}

impl ParagraphPipeline {
    /// Create a pipeline whose text starts out empty.
    pub fn new() -> Self {
        Self::with_text(String::new())
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        let revisions = RevisionCounter::default();
        let text = signal(Revision::new(revisions.next(), text.into()));
        let recomputes = Rc::new(Cell::new(0usize));

        let source = text.clone();
        let counter = recomputes.clone();
        let compute: ParagraphsFn = Box::new(move || {
            counter.set(counter.get() + 1);
            source.get().map(|content| {
                let paragraphs = split_paragraphs(content);
                log::trace!(
                    "split {} bytes into {} paragraph(s)",
                    content.len(),
                    paragraphs.len()
                );
                paragraphs
            })
        });

        Self {
            text,
            revisions,
            paragraphs: Rc::new(derived(compute)),
            recomputes,
        }
    }

    /// Replace the current text.
    ///
    /// Every call counts as a change, even when `text` equals the current
    /// value. Observers receive the recomputed list before this returns.
    pub fn set_text(&self, text: impl Into<String>) {
        let text = text.into();
        log::debug!("set_text: {} bytes", text.len());
        self.text.set(Revision::new(self.revisions.next(), text));
    }

    /// The current text.
    pub fn text(&self) -> String {
        self.text.get().value
    }

    /// Getter for the paragraph list. Reading it inside an effect subscribes
    /// that effect to text changes.
    pub fn paragraphs(&self) -> impl Fn() -> Vec<String> + use<> {
        let paragraphs = self.paragraphs.clone();
        move || paragraphs.get().value
    }

    /// The paragraph list for the current text.
    pub fn current(&self) -> Vec<String> {
        self.paragraphs.get().value
    }

    /// Observe the current list immediately and every list after it.
    pub fn subscribe(&self, observer: impl Fn(&Vec<String>) + 'static) -> Cleanup {
        let paragraphs = self.paragraphs.clone();
        let stop = effect(move || {
            let current = paragraphs.get();
            observer(&current.value);
        });
        Box::new(stop)
    }

    /// How many times the paragraph list has been computed.
    pub fn recompute_count(&self) -> usize {
        self.recomputes.get()
    }
}

impl Default for ParagraphPipeline {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn test_split_drops_blank_lines() {
        assert_eq!(
            split_paragraphs("Paragraph #1\nParagraph #2\n\nParagraph #3"),
            vec!["Paragraph #1", "Paragraph #2", "Paragraph #3"]
        );
    }

    #[test]
    fn test_split_trims_each_line() {
        assert_eq!(split_paragraphs("  Hello  \n  World  "), vec!["Hello", "World"]);
    }

    #[test]
    fn test_split_empty_and_blank() {
        assert!(split_paragraphs("").is_empty());
        assert!(split_paragraphs("   \n\n  \n").is_empty());
        assert!(split_paragraphs("\t\r\n \n").is_empty());
    }

    #[test]
    fn test_split_single_line() {
        assert_eq!(split_paragraphs("  just one  "), vec!["just one"]);
    }

    #[test]
    fn test_split_ignores_escaped_newline() {
        assert_eq!(split_paragraphs("A\\nB"), vec!["A\\nB"]);
        assert_eq!(split_paragraphs("  A\\n  \nB"), vec!["A\\n", "B"]);
    }

    #[test]
    fn test_split_crlf() {
        assert_eq!(split_paragraphs("one\r\ntwo\r\n"), vec!["one", "two"]);
    }

    #[test]
    fn test_pipeline_starts_empty() {
        let pipeline = ParagraphPipeline::new();
        assert_eq!(pipeline.text(), "");
        assert!(pipeline.current().is_empty());
    }

    #[test]
    fn test_pipeline_replays_current_list() {
        let pipeline = ParagraphPipeline::new();
        pipeline.set_text("a\nb");

        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        let _stop = pipeline.subscribe(move |list| seen_clone.borrow_mut().push(list.clone()));

        assert_eq!(*seen.borrow(), vec![vec!["a".to_string(), "b".to_string()]]);
    }

    #[test]
    fn test_pipeline_pushes_full_list_on_update() {
        let pipeline = ParagraphPipeline::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        let _stop = pipeline.subscribe(move |list| seen_clone.borrow_mut().push(list.clone()));

        pipeline.set_text("x");
        pipeline.set_text("x\ny");

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert!(seen[0].is_empty());
        assert_eq!(seen[1], vec!["x"]);
        assert_eq!(seen[2], vec!["x", "y"]);
    }

    #[test]
    fn test_pipeline_set_twice_is_idempotent() {
        let pipeline = ParagraphPipeline::new();
        pipeline.set_text("one\ntwo");
        let once = pipeline.current();
        pipeline.set_text("one\ntwo");

        assert_eq!(pipeline.current(), once);
    }

    #[test]
    fn test_pipeline_recomputes_once_per_set() {
        let pipeline = ParagraphPipeline::new();
        let calls = Rc::new(Cell::new(0));
        let calls_clone = calls.clone();
        let _stop = pipeline.subscribe(move |_| calls_clone.set(calls_clone.get() + 1));
        let _also = pipeline.subscribe(|_| {});

        let before = pipeline.recompute_count();

        pipeline.set_text("a");
        pipeline.set_text("b");

        assert_eq!(calls.get(), 3);
        assert_eq!(pipeline.recompute_count() - before, 2);
    }

    #[test]
    fn test_pipeline_same_text_notifies_again() {
        let pipeline = ParagraphPipeline::with_text("same");
        let calls = Rc::new(Cell::new(0));
        let calls_clone = calls.clone();
        let _stop = pipeline.subscribe(move |_| calls_clone.set(calls_clone.get() + 1));

        pipeline.set_text("same");
        pipeline.set_text("same");

        assert_eq!(calls.get(), 3);
        assert_eq!(pipeline.current(), vec!["same"]);
    }

    #[test]
    fn test_pipeline_unsubscribe_keeps_others() {
        let pipeline = ParagraphPipeline::new();
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let (a, b) = (first.clone(), second.clone());
        let stop_first = pipeline.subscribe(move |_| a.set(a.get() + 1));
        let _stop_second = pipeline.subscribe(move |_| b.set(b.get() + 1));

        stop_first();
        pipeline.set_text("later");

        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 2);
    }

    #[test]
    fn test_pipeline_clone_shares_slot() {
        let pipeline = ParagraphPipeline::new();
        let handle = pipeline.clone();
        handle.set_text("shared");

        assert_eq!(pipeline.current(), vec!["shared"]);
    }
}
