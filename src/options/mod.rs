//! Runtime options with TOML preset support.
//!
//! Contact threshold, structure size limits, overlay colors and key
//! bindings are consolidated here. Options serialize to/from TOML so hosts
//! can ship presets.

mod contact;
mod keybindings;
mod overlay;

use std::path::Path;

pub use contact::ContactOptions;
pub use keybindings::KeybindingOptions;
pub use overlay::OverlayOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ContactMapError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[contact]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Contact threshold and size limits.
    pub contact: ContactOptions,
    /// Selection overlay appearance.
    pub overlay: OverlayOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ContactMapError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| ContactMapError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ContactMapError> {
        let content =
            std::fs::read_to_string(path).map_err(ContactMapError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ContactMapError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ContactMapError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ContactMapError::Io)?;
        }
        std::fs::write(path, content).map_err(ContactMapError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[contact]
threshold = 8.0
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.contact.threshold, 8.0);
        // Everything else should be default
        assert_eq!(opts.contact.max_atoms, 5000);
        assert!(opts.overlay.show_hover);
    }

    #[test]
    fn malformed_toml_is_reported() {
        let err = Options::from_toml_str("[contact\nthreshold = ").unwrap_err();
        assert!(matches!(err, ContactMapError::OptionsParse(_)));
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("Escape"),
            Some(KeyAction::ClearSelection)
        );
        assert_eq!(
            opts.keybindings.lookup("Equal"),
            Some(KeyAction::IncreaseThreshold)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn custom_bindings_rebuild_reverse_map() {
        let toml_str = r#"
[keybindings.bindings]
clear_selection = ["KeyC", "Delete"]
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("KeyC"),
            Some(KeyAction::ClearSelection)
        );
        assert_eq!(
            opts.keybindings.lookup("Delete"),
            Some(KeyAction::ClearSelection)
        );
        assert_eq!(opts.keybindings.lookup("Escape"), None);
    }

    #[test]
    fn save_and_load_preset() {
        let dir = std::env::temp_dir()
            .join(format!("contact-matrix-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.contact.threshold = 6.5;
        opts.save(&dir.join("tight.toml")).unwrap();

        assert_eq!(Options::load(&dir.join("tight.toml")).unwrap(), opts);
        assert_eq!(Options::list_presets(&dir), vec!["tight".to_owned()]);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("contact"));
        assert!(props.contains_key("overlay"));
        assert!(!props.contains_key("keybindings"));

        let contact = &props["contact"]["properties"];
        assert!(contact.get("threshold").is_some());
        assert!(contact.get("max_atoms").is_none());
    }
}
