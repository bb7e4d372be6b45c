use std::cell::Cell;
use std::rc::Rc;

/// A value tagged with the write that produced it.
///
/// Two revisions compare equal only if both the sequence number and the
/// value match, so storing a fresh revision always counts as a change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Revision<T> {
    pub seq: u64,
    pub value: T,
}

impl<T> Revision<T> {
    pub fn new(seq: u64, value: T) -> Self {
        Self { seq, value }
    }

    /// Same sequence number, new value.
    pub fn map<U>(&self, f: impl FnOnce(&T) -> U) -> Revision<U> {
        Revision::new(self.seq, f(&self.value))
    }
}

/// Hands out increasing sequence numbers.
///
/// Kept outside the signal so writers never read the signal they write,
/// which would subscribe an enclosing effect to it.
#[derive(Debug, Clone, Default)]
pub struct RevisionCounter(Rc<Cell<u64>>);

impl RevisionCounter {
    pub fn next(&self) -> u64 {
        let seq = self.0.get() + 1;
        self.0.set(seq);
        seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_value_new_seq_differs() {
        let counter = RevisionCounter::default();
        let a = Revision::new(counter.next(), "x");
        let b = Revision::new(counter.next(), "x");

        assert_ne!(a, b);
        assert_eq!(counter.next(), 3);
    }

    #[test]
    fn test_map_keeps_seq() {
        let text = Revision::new(7, String::from("a\nb"));
        let lines = text.map(|t| t.lines().count());

        assert_eq!(lines, Revision::new(7, 2));
    }

    #[test]
    fn test_counter_clones_share_state() {
        let counter = RevisionCounter::default();
        let handle = counter.clone();
        handle.next();

        assert_eq!(counter.next(), 2);
    }
}
