//! Heuristic impact resistance scoring for sliced 3D prints.
//!
//! This module combines print parameters extracted from G-code with
//! material properties and infill pattern multipliers to estimate whether
//! a part survives a given impact.
//!
//! # Architecture
//!
//! - **Tables**: Materials, impact presets, and multipliers loaded from
//!   TOML (or embedded defaults)
//! - **Scoring**: Parameters + material -> weighted structural score ->
//!   final resistance score
//! - **Verdict**: Score classified against the impact energy into
//!   Robust / Damaged / Fragile
//!
//! # Example
//!
//! ```ignore
//! use impactmate::scoring::{default_reference, ResistanceModel};
//! use impactmate::gcode::extract_parameters;
//!
//! let model = ResistanceModel::new(default_reference());
//! let params = extract_parameters("; infill_percentage = 40\n");
//!
//! let assessment = model.assess(&params, "PETG", "SABER (LIGHT_CUT)")?;
//! println!("{}: {:.2}", assessment.verdict.label(), assessment.resistance_score);
//! ```

mod engine;
mod tables;
mod types;

pub use engine::ResistanceModel;
pub use tables::{default_reference, load_reference};
pub use types::*;
