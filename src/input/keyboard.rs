use serde::{Deserialize, Serialize};

/// Engine-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// clear_selection = ["Escape"]
/// increase_threshold = ["Equal", "NumpadAdd"]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Drop the current point/range selection.
    ClearSelection,
    /// Raise the contact threshold by one step.
    IncreaseThreshold,
    /// Lower the contact threshold by one step.
    DecreaseThreshold,
}
