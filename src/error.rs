use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImpactMateError {
    #[error("Unknown material '{0}'. Valid choices: {1}")]
    UnknownMaterial(String, String),

    #[error("Unknown impact level '{0}'. Valid choices: {1}")]
    UnknownImpact(String, String),
}
