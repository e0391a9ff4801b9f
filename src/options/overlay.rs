use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Overlay", inline)]
#[serde(default)]
/// Colors (RGBA) of the selection overlays.
pub struct OverlayOptions {
    /// Whether hovering highlights the atom column under the pointer.
    #[schemars(title = "Hover Highlight")]
    pub show_hover: bool,
    /// Point-selection crosshair lines.
    #[schemars(skip)]
    pub crosshair: [u8; 4],
    /// Range band fill.
    #[schemars(skip)]
    pub band_fill: [u8; 4],
    /// Range band border.
    #[schemars(skip)]
    pub band_border: [u8; 4],
    /// Hovered column tint.
    #[schemars(skip)]
    pub hover: [u8; 4],
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            show_hover: true,
            crosshair: [0, 0, 255, 255],
            band_fill: [0, 120, 255, 64],
            band_border: [0, 90, 200, 255],
            hover: [0, 0, 0, 40],
        }
    }
}
