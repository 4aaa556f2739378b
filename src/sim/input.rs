//! Pressed-key state, sampled once per frame by the tick.

use std::collections::HashMap;

/// Current pressed/released state of logical keys.
///
/// Key identity is case-insensitive ("W" and "w" collapse to one entry).
/// Only the current state matters; there is no event queue. Keys that never
/// match a binding sit in the map unread.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pressed: HashMap<String, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// External key-down event.
    pub fn key_down(&mut self, key: &str) {
        self.pressed.insert(key.to_lowercase(), true);
    }

    /// External key-up event.
    pub fn key_up(&mut self, key: &str) {
        self.pressed.insert(key.to_lowercase(), false);
    }

    /// Whether the logical key is currently held.
    pub fn is_pressed(&self, key: &str) -> bool {
        self.pressed
            .get(&key.to_lowercase())
            .copied()
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_case_folds() {
        let mut input = InputState::new();
        input.key_down("W");
        assert!(input.is_pressed("w"));
        assert!(input.is_pressed("W"));

        input.key_up("w");
        assert!(!input.is_pressed("W"));
    }

    #[test]
    fn test_unknown_key_is_not_pressed() {
        let input = InputState::new();
        assert!(!input.is_pressed("arrowup"));
        assert!(!input.is_pressed("F13"));
    }

    #[test]
    fn test_release_without_press() {
        let mut input = InputState::new();
        input.key_up("d");
        assert!(!input.is_pressed("d"));
    }
}
