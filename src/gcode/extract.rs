//! Parameter extraction from slicer metadata comments.
//!
//! Slicers annotate exported G-code with `; key = value` comment lines.
//! Each known setting is searched for independently, so a missing or
//! malformed line leaves only that field at its default and extraction
//! always produces a complete record.

use regex::Regex;
use tracing::debug;

use super::types::PrintParameters;

/// Extract print parameters from raw G-code text.
///
/// Never fails: absent or unparseable settings resolve to the defaults in
/// [`PrintParameters::default`]. The first occurrence of each setting wins.
pub fn extract_parameters(content: &str) -> PrintParameters {
    let mut params = PrintParameters::default();

    if let Some(value) = capture(content, r";\s*infill_percentage\s*=\s*(\d+\.?\d*)") {
        if let Ok(percent) = value.parse::<f64>() {
            params.infill_density = percent / 100.0;
        }
    }

    if let Some(value) = capture(content, r";\s*wall_line_count\s*=\s*(\d+)") {
        if let Ok(count) = value.parse::<u32>() {
            params.wall_count = count;
        }
    }

    if let Some(value) = capture(content, r";\s*layer_height\s*=\s*(\d+\.?\d*)") {
        if let Ok(height) = value.parse::<f64>() {
            params.layer_height = height;
        }
    }

    if let Some(value) = capture(content, r";\s*infill_pattern\s*=\s*(\w+)") {
        params.infill_pattern = value.to_uppercase();
    }

    debug!("Extracted parameters: {:?}", params);
    params
}

/// First capture of `pattern` in `content`, if any.
fn capture<'a>(content: &'a str, pattern: &str) -> Option<&'a str> {
    let re = Regex::new(pattern).expect("extraction pattern must be valid");
    re.captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_defaults() {
        let params = extract_parameters("");
        assert_eq!(params, PrintParameters::default());
    }

    #[test]
    fn test_unrelated_comments_yield_defaults() {
        let gcode = ";FLAVOR:Marlin\n;Layer height: 0.28\nG28 ; home all axes\nG1 X10 Y10\n";
        let params = extract_parameters(gcode);
        assert_eq!(
            params,
            PrintParameters::default(),
            "Colon-style slicer comments should not match"
        );
    }

    #[test]
    fn test_full_settings_block() {
        let gcode = "\
; infill_percentage = 55\n\
; wall_line_count = 3\n\
; layer_height = 0.16\n\
; infill_pattern = cubic\n\
G1 X0 Y0\n";
        let params = extract_parameters(gcode);
        assert_eq!(params.infill_density, 0.55);
        assert_eq!(params.wall_count, 3);
        assert_eq!(params.layer_height, 0.16);
        assert_eq!(params.infill_pattern, "CUBIC");
    }

    #[test]
    fn test_partial_settings_keep_other_defaults() {
        let gcode = "; infill_percentage = 80\nG1 X5\n";
        let params = extract_parameters(gcode);
        assert_eq!(params.infill_density, 0.80);
        assert_eq!(params.wall_count, 2, "Missing wall count keeps default");
        assert_eq!(params.layer_height, 0.2, "Missing layer height keeps default");
        assert_eq!(params.infill_pattern, "GRID", "Missing pattern keeps default");
    }

    #[test]
    fn test_first_occurrence_wins() {
        let gcode = "; layer_height = 0.12\n; layer_height = 0.3\n";
        let params = extract_parameters(gcode);
        assert_eq!(params.layer_height, 0.12);
    }

    #[test]
    fn test_whitespace_variants() {
        let tight = extract_parameters(";infill_percentage=35\n");
        assert_eq!(tight.infill_density, 0.35);

        let loose = extract_parameters(";   infill_percentage   =   35\n");
        assert_eq!(loose.infill_density, 0.35);
    }

    #[test]
    fn test_pattern_is_uppercased() {
        let params = extract_parameters("; infill_pattern = gyroid\n");
        assert_eq!(params.infill_pattern, "GYROID");

        let mixed = extract_parameters("; infill_pattern = TriAngles\n");
        assert_eq!(mixed.infill_pattern, "TRIANGLES");
    }

    #[test]
    fn test_fractional_percentage() {
        let params = extract_parameters("; infill_percentage = 42.5\n");
        assert_eq!(params.infill_density, 0.425);
    }

    #[test]
    fn test_negative_values_do_not_match() {
        // Patterns accept unsigned literals only, so a negative value is
        // treated as absent rather than extracted.
        let params = extract_parameters("; layer_height = -0.1\n; wall_line_count = -3\n");
        assert_eq!(params.layer_height, 0.2);
        assert_eq!(params.wall_count, 2);
    }

    #[test]
    fn test_out_of_range_percentage_passes_through() {
        let params = extract_parameters("; infill_percentage = 250\n");
        assert_eq!(params.infill_density, 2.5, "No clamping is applied");
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let gcode = "; infill_percentage = 40\n; infill_pattern = lines\n";
        assert_eq!(extract_parameters(gcode), extract_parameters(gcode));
    }
}
