//! CLI command implementations

pub mod check;
pub mod generate;
pub mod json_output;

mod options;

pub use options::PackOptions;
