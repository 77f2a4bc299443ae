//! Type definitions for the resistance scoring model.
//!
//! These types support both TOML deserialization (for loading reference
//! tables) and JSON serialization (for machine-readable output).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

use crate::error::ImpactMateError;
use crate::gcode::types::PrintParameters;

/// Table entry consulted when an infill pattern has no explicit multiplier.
const FALLBACK_PATTERN: &str = "DEFAULT";

// =============================================================================
// REFERENCE TYPES (loaded from TOML)
// =============================================================================

/// Mechanical properties of a printable material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProfile {
    /// Tensile strength in MPa.
    pub tensile_strength: f64,
    /// Impact strength in kJ/m^2.
    pub impact_strength: f64,
}

/// Root reference tables loaded from reference_data.toml.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceData {
    /// Material properties keyed by material name (e.g. "PLA")
    pub materials: HashMap<String, MaterialProfile>,
    /// Impact energy presets in Joules, keyed by scenario name
    pub impacts: HashMap<String, f64>,
    /// Relative strength multipliers keyed by infill pattern name
    pub infill_multipliers: HashMap<String, f64>,
}

impl ReferenceData {
    /// Look up a material by exact name.
    pub fn material(&self, name: &str) -> Option<&MaterialProfile> {
        self.materials.get(name)
    }

    /// Look up an impact preset's energy by exact name.
    pub fn impact_force(&self, name: &str) -> Option<f64> {
        self.impacts.get(name).copied()
    }

    /// Look up a material, failing with the valid choices listed.
    pub fn require_material(&self, name: &str) -> Result<&MaterialProfile, ImpactMateError> {
        self.material(name).ok_or_else(|| {
            ImpactMateError::UnknownMaterial(name.to_string(), self.material_names().join(", "))
        })
    }

    /// Look up an impact preset, failing with the valid choices listed.
    pub fn require_impact(&self, name: &str) -> Result<f64, ImpactMateError> {
        self.impact_force(name).ok_or_else(|| {
            ImpactMateError::UnknownImpact(name.to_string(), self.impact_names().join(", "))
        })
    }

    /// Strength multiplier for an infill pattern.
    ///
    /// Unrecognized patterns fall back to the `DEFAULT` table entry, or a
    /// neutral 1.0 when the tables carry no `DEFAULT` either.
    pub fn infill_multiplier(&self, pattern: &str) -> f64 {
        if let Some(multiplier) = self.infill_multipliers.get(pattern) {
            return *multiplier;
        }
        warn!(
            "Unknown infill pattern '{}', scoring with neutral multiplier",
            pattern
        );
        self.infill_multipliers
            .get(FALLBACK_PATTERN)
            .copied()
            .unwrap_or(1.0)
    }

    /// Material names, sorted for stable display.
    pub fn material_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.materials.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Impact preset names, sorted for stable display.
    pub fn impact_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.impacts.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

// =============================================================================
// OUTPUT TYPES
// =============================================================================

/// Survival classification of a print under a given impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    /// Score clears 1.5x the impact force.
    Robust,
    /// Score clears 0.8x the impact force but not 1.5x.
    Damaged,
    /// Score at or below 0.8x the impact force.
    Fragile,
}

impl Verdict {
    /// Classify a resistance score against an impact force.
    ///
    /// Comparisons are strict, so a score exactly at a threshold falls to
    /// the lower tier.
    pub fn classify(score: f64, impact_force: f64) -> Self {
        if score > impact_force * 1.5 {
            Verdict::Robust
        } else if score > impact_force * 0.8 {
            Verdict::Damaged
        } else {
            Verdict::Fragile
        }
    }

    /// Short label used in the history log.
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Robust => "ROBUST",
            Verdict::Damaged => "DAMAGED",
            Verdict::Fragile => "FRAGILE",
        }
    }

    /// Full verdict line shown in the analysis report.
    pub fn summary(&self) -> &'static str {
        match self {
            Verdict::Robust => "ROBUST - LIKELY TO SURVIVE",
            Verdict::Damaged => "DAMAGED - LIKELY TO BE COMPROMISED",
            Verdict::Fragile => "FRAGILE - LIKELY TO SHATTER",
        }
    }
}

/// Complete result of one analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct ImpactAssessment {
    /// Parameters recovered from the toolpath file
    pub parameters: PrintParameters,
    /// Material the part is assumed to be printed in
    pub material: String,
    /// Impact preset the part is assessed against
    pub impact: String,
    /// Heuristic resistance score
    pub resistance_score: f64,
    /// Impact energy the part must resist, in Joules
    pub impact_force: f64,
    /// Survival classification
    pub verdict: Verdict,
}
