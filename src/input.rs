//! Raw key state to per-tick input
//!
//! Hosts report which keys are down each frame; the tracker turns the start
//! key into a just-pressed edge while direction keys keep held semantics.

use crate::sim::TickInput;

/// Keys currently held down, as reported by the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    /// Space bar
    pub start: bool,
}

/// Edge detection for one-shot keys
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    prev_start: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build this frame's tick input and remember the key state
    pub fn snapshot(&mut self, keys: KeyState) -> TickInput {
        let start_pressed = keys.start && !self.prev_start;
        self.prev_start = keys.start;
        TickInput {
            left_held: keys.left,
            right_held: keys.right,
            start_pressed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_is_edge_triggered() {
        let mut tracker = InputTracker::new();
        let down = KeyState {
            start: true,
            ..Default::default()
        };

        assert!(tracker.snapshot(down).start_pressed);
        assert!(!tracker.snapshot(down).start_pressed);
        assert!(!tracker.snapshot(KeyState::default()).start_pressed);
        assert!(tracker.snapshot(down).start_pressed);
    }

    #[test]
    fn test_direction_keys_are_held() {
        let mut tracker = InputTracker::new();
        let keys = KeyState {
            left: true,
            right: true,
            start: false,
        };
        for _ in 0..3 {
            let input = tracker.snapshot(keys);
            assert!(input.left_held && input.right_held);
        }
    }
}
