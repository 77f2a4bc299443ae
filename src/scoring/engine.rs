//! Resistance scoring engine.
//!
//! The `ResistanceModel` combines extracted print parameters with material
//! properties and an infill pattern multiplier into a single heuristic
//! resistance score, then classifies that score against an impact preset.

use tracing::debug;

use crate::error::ImpactMateError;
use crate::gcode::types::PrintParameters;

use super::types::{ImpactAssessment, MaterialProfile, ReferenceData, Verdict};

/// Weight of infill density in the structural score.
const INFILL_WEIGHT: f64 = 0.4;
/// Weight of wall count in the structural score.
const WALL_WEIGHT: f64 = 0.5;
/// Weight of layer adhesion in the structural score.
const LAYER_ADHESION_WEIGHT: f64 = 0.1;

/// Wall count the wall term is normalized against.
const WALL_BASELINE: f64 = 5.0;
/// Layer height (mm) at which adhesion is modeled as fully degraded.
const WEAK_LAYER_HEIGHT: f64 = 0.5;

/// The scoring engine.
///
/// Holds the loaded reference tables and evaluates print parameters
/// against them. This is a heuristic model, not a physics simulation.
pub struct ResistanceModel {
    reference: ReferenceData,
}

impl ResistanceModel {
    /// Create a new model with the given reference tables.
    ///
    /// # Arguments
    /// * `reference` - Tables (typically from `default_reference()` or `load_reference()`)
    pub fn new(reference: ReferenceData) -> Self {
        Self { reference }
    }

    /// Access the underlying reference tables.
    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Compute the heuristic resistance score for a parameter record.
    ///
    /// The structural score is a weighted sum of the infill, wall, and
    /// layer adhesion terms, then scaled by the material's tensile and
    /// impact strength and the infill pattern multiplier. The adhesion
    /// factor goes negative for layer heights above 0.5mm.
    pub fn resistance_score(&self, params: &PrintParameters, material: &MaterialProfile) -> f64 {
        let strength_multiplier = self.reference.infill_multiplier(&params.infill_pattern);

        // Lower layers bond better; past the 0.5mm baseline the factor
        // turns negative and drags the structural score down.
        let layer_adhesion_factor = 1.0 - (params.layer_height / WEAK_LAYER_HEIGHT);

        let structural_score = (params.infill_density * INFILL_WEIGHT)
            + ((f64::from(params.wall_count) / WALL_BASELINE) * WALL_WEIGHT)
            + (layer_adhesion_factor * LAYER_ADHESION_WEIGHT);

        structural_score
            * material.tensile_strength
            * material.impact_strength
            * strength_multiplier
    }

    /// Run a complete assessment for named material and impact selections.
    ///
    /// Validates both names against the reference tables before scoring;
    /// unknown names fail with the valid choices listed.
    pub fn assess(
        &self,
        params: &PrintParameters,
        material_name: &str,
        impact_name: &str,
    ) -> Result<ImpactAssessment, ImpactMateError> {
        let material = self.reference.require_material(material_name)?;
        let impact_force = self.reference.require_impact(impact_name)?;

        let resistance_score = self.resistance_score(params, material);
        let verdict = Verdict::classify(resistance_score, impact_force);

        debug!(
            "Scored {:.2} against {} ({}J): {}",
            resistance_score,
            impact_name,
            impact_force,
            verdict.label()
        );

        Ok(ImpactAssessment {
            parameters: params.clone(),
            material: material_name.to_string(),
            impact: impact_name.to_string(),
            resistance_score,
            impact_force,
            verdict,
        })
    }
}
