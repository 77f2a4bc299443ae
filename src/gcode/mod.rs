pub mod extract;
pub mod reader;
pub mod types;

pub use extract::extract_parameters;
pub use reader::read_toolpath;
pub use types::PrintParameters;
