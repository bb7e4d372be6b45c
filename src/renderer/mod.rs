//! Terminal renderer - the "blind" output layer.
//!
//! The renderer knows only about styled lines. It doesn't understand
//! components, paragraphs, or reactivity.
//!
//! ```text
//! text components ─▶ Vec<StyledLine> ─▶ LineRenderer ─▶ terminal
//! ```
//!
//! One frame is queued into the buffer and written with a single syscall.

mod line;
mod output;

pub use line::{to_crossterm_attributes, to_crossterm_color, LineRenderer};
