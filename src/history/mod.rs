pub mod store;
pub mod types;

pub use store::ImpactLog;
pub use types::LogRecord;
