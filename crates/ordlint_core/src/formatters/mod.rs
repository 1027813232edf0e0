//! Machine-readable report formats.

pub mod sarif;

pub use sarif::generate_sarif;
