mod help;
mod parse;

pub use help::print_usage;
pub use parse::{parse, ParseError, Parsed};
