//! Reactive core - spark-signals plus the revision wrapper text components
//! need.
//!
//! ```text
//! set_text ─▶ Signal<Revision<String>> ─▶ Derived<Revision<Vec<String>>> ─effect─▶ each_indexed ─▶ template
//! ```
//!
//! Observation is always an `effect`: it runs once when created, which hands
//! the observer the current value, and again after every change it read.
//! Stopping the effect detaches that observer only.
//!
//! Signals skip notification when the new value equals the old one. Paragraph
//! text must notify on every write, so it travels inside a [`Revision`] whose
//! sequence number changes on each `set`.

mod revision;

pub use revision::{Revision, RevisionCounter};
pub use spark_signals::{derived, effect, signal, Derived, Signal};

/// Cleanup function returned by subscriptions and components.
///
/// Call this to detach the observer or unmount the component.
pub type Cleanup = Box<dyn FnOnce()>;
