//! Primitives - Component building blocks.
//!
//! - [`text`] - Multi-line text split into paragraphs, each rendered through a
//!   caller-supplied [`Template`]
//! - [`each_indexed`] - Positional list rendering with first/last flags
//!
//! # Architecture
//!
//! A component:
//! 1. Creates its reactive state (a [`ParagraphPipeline`](crate::paragraphs::ParagraphPipeline))
//! 2. Binds props directly to that state (preserving reactivity!)
//! 3. Subscribes its renderer to the derived output
//! 4. Keeps the cleanup functions and runs them on unmount
//!
//! # Reactivity
//!
//! Props can be:
//! - Static values: `"Some text".into()`
//! - Signals: `PropValue::Signal(content)` (stays connected!)
//!
//! Pass the signal itself, not its current value:
//!
//! ```ignore
//! // CORRECT - signal stays connected
//! text(TextProps::new(PropValue::Signal(content), template));
//!
//! // WRONG - extracts value, breaks reactivity
//! text(TextProps::new(content.get(), template));
//! ```

mod control_flow;
mod text;
mod types;

pub use control_flow::each_indexed;
pub use text::{text, TextComponent};
pub use types::*;
