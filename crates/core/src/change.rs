//! Derive-on-change memoization

use std::rc::Rc;

/// Remembers the last input that derived state was computed from.
///
/// Inputs are compared by reference: handing in the same `Rc` again is "no
/// change", while a new allocation counts as a change even when its contents
/// are equal.
#[derive(Debug)]
pub struct ChangeTracker<T> {
    last: Option<Rc<T>>,
}

impl<T> ChangeTracker<T> {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Record `next` and report whether it differs from the previous input
    pub fn changed(&mut self, next: &Rc<T>) -> bool {
        let changed = match &self.last {
            Some(last) => !Rc::ptr_eq(last, next),
            None => true,
        };
        if changed {
            self.last = Some(Rc::clone(next));
        }
        changed
    }
}

impl<T> Default for ChangeTracker<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_input_is_a_change() {
        let mut tracker = ChangeTracker::new();
        assert!(tracker.changed(&Rc::new(1)));
    }

    #[test]
    fn test_same_reference_is_not_a_change() {
        let mut tracker = ChangeTracker::new();
        let value = Rc::new("a".to_string());
        assert!(tracker.changed(&value));
        assert!(!tracker.changed(&value));
        assert!(!tracker.changed(&Rc::clone(&value)));
    }

    #[test]
    fn test_equal_but_distinct_is_a_change() {
        let mut tracker = ChangeTracker::new();
        assert!(tracker.changed(&Rc::new(5)));
        assert!(tracker.changed(&Rc::new(5)));
    }
}
