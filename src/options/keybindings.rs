use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

/// Keys that drive the contact map: clearing the selection and nudging the
/// contact threshold.
///
/// Each action accepts several `KeyboardEvent.code` strings so that both
/// the main row and the numpad work for threshold steps. In TOML:
///
/// ```toml
/// [keybindings.bindings]
/// clear_selection = ["Escape", "Backspace"]
/// increase_threshold = ["Equal", "NumpadAdd"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeybindingOptions {
    /// Action → key codes that trigger it.
    pub bindings: HashMap<KeyAction, Vec<String>>,
    /// Key code → action, rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let codes = |keys: &[&str]| -> Vec<String> {
            keys.iter().map(|&k| k.to_owned()).collect()
        };
        let bindings = HashMap::from([
            (KeyAction::ClearSelection, codes(&["Escape"])),
            (KeyAction::IncreaseThreshold, codes(&["Equal", "NumpadAdd"])),
            (
                KeyAction::DecreaseThreshold,
                codes(&["Minus", "NumpadSubtract"]),
            ),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the key → action map. A key bound to two actions keeps
    /// whichever is seen last and logs a warning.
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, keys) in &self.bindings {
            for key in keys {
                if let Some(prev) =
                    self.key_to_action.insert(key.clone(), *action)
                {
                    if prev != *action {
                        log::warn!(
                            "key {key} bound to both {prev:?} and {action:?}"
                        );
                    }
                }
            }
        }
    }

    /// The action bound to `key`, if any.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numpad_aliases_step_threshold() {
        let opts = KeybindingOptions::default();
        assert_eq!(
            opts.lookup("NumpadAdd"),
            Some(KeyAction::IncreaseThreshold)
        );
        assert_eq!(
            opts.lookup("NumpadSubtract"),
            Some(KeyAction::DecreaseThreshold)
        );
        assert_eq!(opts.lookup("Minus"), Some(KeyAction::DecreaseThreshold));
    }

    #[test]
    fn unbinding_an_action_removes_its_keys() {
        let mut opts = KeybindingOptions::default();
        let _ = opts.bindings.insert(KeyAction::ClearSelection, Vec::new());
        opts.rebuild_reverse_map();
        assert_eq!(opts.lookup("Escape"), None);
        assert_eq!(opts.lookup("Equal"), Some(KeyAction::IncreaseThreshold));
    }
}
