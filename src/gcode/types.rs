use serde::{Deserialize, Serialize};

/// Structural print settings recovered from a sliced toolpath file.
///
/// Every field is always populated: settings the slicer did not declare in
/// its metadata comments keep these defaults instead of becoming absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintParameters {
    /// Infill density as a fraction in [0, 1] (0.20 = 20%).
    pub infill_density: f64,
    /// Number of perimeter walls.
    pub wall_count: u32,
    /// Layer height in millimeters.
    pub layer_height: f64,
    /// Infill pattern identifier, normalized to uppercase (e.g. "GRID").
    pub infill_pattern: String,
}

impl Default for PrintParameters {
    fn default() -> Self {
        Self {
            infill_density: 0.20,
            wall_count: 2,
            layer_height: 0.2,
            infill_pattern: "GRID".to_string(),
        }
    }
}

impl PrintParameters {
    /// Infill density rendered as a whole percentage (e.g. "20%").
    pub fn infill_density_percent(&self) -> String {
        format!("{:.0}%", self.infill_density * 100.0)
    }
}
