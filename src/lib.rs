pub mod error;
pub mod gcode;
pub mod history;
pub mod scoring;

pub use error::ImpactMateError;
pub use gcode::{extract_parameters, read_toolpath, PrintParameters};
pub use history::{ImpactLog, LogRecord};
pub use scoring::{
    default_reference, load_reference, ImpactAssessment, MaterialProfile, ReferenceData,
    ResistanceModel, Verdict,
};
