//! Generation request: what to draw from, how much, and how.

/// A validated generation request. The CLI layer fills this in; the
/// generator only reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub symbols: bool,
    pub custom: String,
    /// How many most-recently-placed characters a new draw must differ from.
    pub avoid_repeats: usize,
    pub qr_code: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            length: 12,
            lowercase: true,
            uppercase: true,
            numbers: true,
            symbols: false,
            custom: String::new(),
            avoid_repeats: 1,
            qr_code: false,
        }
    }
}
