use crate::pass::Options;

#[derive(Debug, PartialEq)]
pub enum ParseError {
    InvalidNumber(String),
    MissingValue(String),
    UnknownArg(String),
    LengthMustBePositive,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::MissingValue(s) => write!(f, "Missing value for {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
            ParseError::LengthMustBePositive => write!(f, "Length must be greater than 0."),
        }
    }
}

/// Parsed command line: meta flags plus the generation request.
#[derive(Debug, Default, PartialEq)]
pub struct Parsed {
    pub help: bool,
    pub version: bool,
    pub options: Options,
}

pub fn parse(args: &[String]) -> Result<Parsed, ParseError> {
    let mut parsed = Parsed::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => parsed.help = true,
            "-v" | "--version" => parsed.version = true,
            "-L" | "--lowercase" => parsed.options.lowercase = true,
            "--no-lowercase" => parsed.options.lowercase = false,
            "-U" | "--uppercase" => parsed.options.uppercase = true,
            "--no-uppercase" => parsed.options.uppercase = false,
            "-N" | "--numbers" => parsed.options.numbers = true,
            "--no-numbers" => parsed.options.numbers = false,
            "-S" | "--symbols" => parsed.options.symbols = true,
            "--no-symbols" => parsed.options.symbols = false,
            "-q" | "--qr" => parsed.options.qr_code = true,
            "-l" | "--length" => {
                parsed.options.length = number_value(args, &mut i)?;
            }
            "-a" | "--avoid-repeats" => {
                parsed.options.avoid_repeats = number_value(args, &mut i)?;
            }
            "-C" | "--custom" => {
                parsed.options.custom = string_value(args, &mut i)?;
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    if !parsed.help && !parsed.version && parsed.options.length == 0 {
        return Err(ParseError::LengthMustBePositive);
    }

    Ok(parsed)
}

fn string_value(args: &[String], i: &mut usize) -> Result<String, ParseError> {
    let flag = args[*i].clone();
    *i += 1;
    args.get(*i)
        .cloned()
        .ok_or_else(|| ParseError::MissingValue(flag))
}

fn number_value(args: &[String], i: &mut usize) -> Result<usize, ParseError> {
    let value = string_value(args, i)?;
    value
        .parse()
        .map_err(|_| ParseError::InvalidNumber(value))
}
