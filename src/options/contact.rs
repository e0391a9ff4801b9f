use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Contacts", inline)]
#[serde(default)]
/// Contact threshold and structure size limits.
pub struct ContactOptions {
    /// Distance (Å) below which two atoms count as in contact.
    #[schemars(title = "Threshold (Å)", range(min = 0.0, max = 30.0), extend("step" = 0.5))]
    pub threshold: f32,
    /// Amount the threshold key bindings add or remove.
    #[schemars(skip)]
    pub threshold_step: f32,
    /// Largest structure the engine will load (0 = unlimited). Both the
    /// matrix and its raster grow with the square of this.
    #[schemars(skip)]
    pub max_atoms: usize,
}

impl Default for ContactOptions {
    fn default() -> Self {
        Self {
            threshold: 10.0,
            threshold_step: 0.5,
            max_atoms: 5000,
        }
    }
}
