use std::collections::BTreeSet;

use crate::interaction::Teardown;

/// One-way scroll reveal for a list of elements.
///
/// An element starts hidden. The first intersection marks it revealed and it
/// stays revealed, even after it leaves the viewport. Elements are independent.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    len: usize,
    revealed: BTreeSet<usize>,
    connected: bool,
}

impl RevealTracker {
    /// Observes `len` elements, all hidden.
    pub fn new(len: usize) -> Self {
        RevealTracker {
            len,
            revealed: BTreeSet::new(),
            connected: true,
        }
    }

    /// An observer callback for element `index`. Returns true if this call
    /// revealed the element. In the served page the inline script's
    /// IntersectionObserver performs this update.
    #[allow(dead_code)]
    pub fn on_intersection(&mut self, index: usize, is_intersecting: bool) -> bool {
        if !self.connected || !is_intersecting || index >= self.len {
            return false;
        }
        self.revealed.insert(index)
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    #[allow(dead_code)]
    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

impl Teardown for RevealTracker {
    fn teardown(&mut self) {
        self.connected = false;
    }

    fn is_torn_down(&self) -> bool {
        !self.connected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elements_start_hidden() {
        let t = RevealTracker::new(3);
        assert!((0..3).all(|i| !t.is_revealed(i)));
        assert_eq!(t.revealed_count(), 0);
    }

    #[test]
    fn test_reveal_is_permanent() {
        let mut t = RevealTracker::new(2);
        assert!(t.on_intersection(1, true));
        // Leaves the viewport, then comes back.
        assert!(!t.on_intersection(1, false));
        assert!(t.is_revealed(1));
        assert!(!t.on_intersection(1, true));
        assert!(t.is_revealed(1));
        assert!(!t.is_revealed(0));
    }

    #[test]
    fn test_out_of_range_index_is_ignored() {
        let mut t = RevealTracker::new(1);
        assert!(!t.on_intersection(5, true));
        assert_eq!(t.revealed_count(), 0);
    }

    #[test]
    fn test_teardown_disconnects_but_keeps_revealed_set() {
        let mut t = RevealTracker::new(2);
        t.on_intersection(0, true);
        t.teardown();
        assert!(!t.on_intersection(1, true));
        assert!(t.is_revealed(0));
        assert!(t.is_torn_down());
    }
}
