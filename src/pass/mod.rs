//! Password generation.

pub mod charset;
mod generate;
mod options;

pub use generate::generate;
pub use generate::generate_from_charset;
pub use options::Options;
