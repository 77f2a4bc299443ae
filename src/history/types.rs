use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::scoring::ImpactAssessment;

/// One row of the impact history log.
///
/// Display-formatted values (density percent, two-decimal score) are
/// captured at construction so a row reads back exactly as reported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    pub timestamp: String,
    pub file: String,
    pub material: String,
    pub impact_level: String,
    pub infill_density: String,
    pub wall_count: u32,
    pub layer_height: f64,
    pub infill_pattern: String,
    pub resistance_score: String,
    pub impact_force: f64,
    pub verdict: String,
}

impl LogRecord {
    /// Build a row from an assessment, stamped with the current local time.
    pub fn from_assessment(file: &str, assessment: &ImpactAssessment) -> Self {
        Self {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            file: file.to_string(),
            material: assessment.material.clone(),
            impact_level: assessment.impact.clone(),
            infill_density: assessment.parameters.infill_density_percent(),
            wall_count: assessment.parameters.wall_count,
            layer_height: assessment.parameters.layer_height,
            infill_pattern: assessment.parameters.infill_pattern.clone(),
            resistance_score: format!("{:.2}", assessment.resistance_score),
            impact_force: assessment.impact_force,
            verdict: assessment.verdict.label().to_string(),
        }
    }

    /// Render the row as CSV fields in header order.
    pub fn to_fields(&self) -> Vec<String> {
        vec![
            self.timestamp.clone(),
            self.file.clone(),
            self.material.clone(),
            self.impact_level.clone(),
            self.infill_density.clone(),
            self.wall_count.to_string(),
            self.layer_height.to_string(),
            self.infill_pattern.clone(),
            self.resistance_score.clone(),
            self.impact_force.to_string(),
            self.verdict.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gcode::types::PrintParameters;
    use crate::scoring::Verdict;

    fn make_assessment() -> ImpactAssessment {
        ImpactAssessment {
            parameters: PrintParameters::default(),
            material: "PLA".to_string(),
            impact: "MEDIUM (STRIKE)".to_string(),
            resistance_score: 85.0,
            impact_force: 50.0,
            verdict: Verdict::Robust,
        }
    }

    #[test]
    fn test_record_formats_display_fields() {
        let record = LogRecord::from_assessment("hilt.gcode", &make_assessment());

        assert_eq!(record.file, "hilt.gcode");
        assert_eq!(record.infill_density, "20%");
        assert_eq!(record.resistance_score, "85.00");
        assert_eq!(record.verdict, "ROBUST");
    }

    #[test]
    fn test_timestamp_shape() {
        let record = LogRecord::from_assessment("hilt.gcode", &make_assessment());

        // YYYY-MM-DD HH:MM:SS
        assert_eq!(record.timestamp.len(), 19);
        assert_eq!(&record.timestamp[4..5], "-");
        assert_eq!(&record.timestamp[10..11], " ");
        assert_eq!(&record.timestamp[13..14], ":");
    }

    #[test]
    fn test_fields_in_header_order() {
        let record = LogRecord::from_assessment("hilt.gcode", &make_assessment());
        let fields = record.to_fields();

        assert_eq!(fields.len(), 11);
        assert_eq!(fields[1], "hilt.gcode");
        assert_eq!(fields[2], "PLA");
        assert_eq!(fields[3], "MEDIUM (STRIKE)");
        assert_eq!(fields[5], "2");
        assert_eq!(fields[6], "0.2", "Layer height renders without padding");
        assert_eq!(fields[9], "50", "Whole impact forces render without decimals");
        assert_eq!(fields[10], "ROBUST");
    }
}
