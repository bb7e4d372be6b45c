//! Control Flow Primitives - list rendering.
//!
//! [`each_indexed`] renders every element of a reactive list through a render
//! function that also receives the element's position.
//!
//! # Positional, not keyed
//!
//! Paragraph lists routinely contain duplicates ("---", "Thanks!") and have no
//! stable identity, so items are tracked by index. Every change re-renders the
//! whole list; there is no diffing. First/last flags are derived from the
//! position in the list being rendered, never stored between renders.

use std::cell::RefCell;
use std::rc::Rc;

use spark_signals::effect;

use crate::reactive::Cleanup;

/// Render a reactive list, one output per element.
///
/// `items_getter` is read inside an effect, so any signal it reads becomes a
/// dependency. `render_fn` receives `(item, index, is_first, is_last)`. The
/// outputs of the latest render replace the contents of `target`. Rendering
/// happens once right away for the current list, then once per list change.
///
/// # Returns
///
/// A cleanup function that stops tracking. `target` keeps its last contents.
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use paragraph_view::primitives::each_indexed;
/// use paragraph_view::reactive::signal;
///
/// let items = signal(vec!["a", "b"]);
/// let items_clone = items.clone();
/// let out = Rc::new(RefCell::new(Vec::new()));
///
/// let stop = each_indexed(
///     move || items_clone.get(),
///     |item, index, first, last| format!("{index}{item}{}{}", first as u8, last as u8),
///     out.clone(),
/// );
/// assert_eq!(*out.borrow(), vec!["0a10", "1b01"]);
///
/// items.set(vec!["c"]);
/// assert_eq!(*out.borrow(), vec!["0c11"]);
/// stop();
/// ```
pub fn each_indexed<T, R, RenderF>(
    items_getter: impl Fn() -> Vec<T> + 'static,
    render_fn: RenderF,
    target: Rc<RefCell<Vec<R>>>,
) -> Cleanup
where
    T: 'static,
    R: 'static,
    RenderF: Fn(&T, usize, bool, bool) -> R + 'static,
{
    // Effect establishes reactive dependency on items_getter
    let stop_fn = effect(move || {
        let items = items_getter();
        let len = items.len();
        let rendered: Vec<R> = items
            .iter()
            .enumerate()
            .map(|(index, item)| render_fn(item, index, index == 0, index + 1 == len))
            .collect();

        log::trace!("each_indexed: rendered {len} item(s)");
        *target.borrow_mut() = rendered;
    });

    Box::new(stop_fn)
}

// =============================================================================
// Tests
// =============================================================================
