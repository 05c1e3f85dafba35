//! Character set composition for password generation.

use super::Options;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "`~!@#$%^&*()_-+=\\|[]'\";:/?<>.,";

/// Build the alphabet from the requested classes, in class order, followed
/// by the custom characters verbatim. Duplicates are kept: a custom string
/// overlapping a selected class weights those characters proportionally
/// higher (and can undermine the repeat-avoidance window).
pub fn build(options: &Options) -> Vec<char> {
    let mut chars: Vec<char> = Vec::new();

    if options.uppercase {
        chars.extend(UPPERCASE.chars());
    }

    if options.lowercase {
        chars.extend(LOWERCASE.chars());
    }

    if options.numbers {
        chars.extend(NUMBERS.chars());
    }

    if options.symbols {
        chars.extend(SYMBOLS.chars());
    }

    chars.extend(options.custom.chars());

    chars
}
