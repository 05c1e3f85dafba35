//! Password generation: rejection sampling with a repeat-avoidance window.

use crate::error::Error;
use crate::rand::{OsRandom, RandomSource};

use super::{charset, Options};

/// Generate a single password from the composed charset, drawing from the
/// OS random source.
pub fn generate(options: &Options) -> Result<String, Error> {
    let chars = charset::build(options);
    generate_from_charset(&chars, options.length, options.avoid_repeats, &mut OsRandom)
}

/// Generate `length` characters from `chars`, rejecting any draw that
/// matches one of the last `avoid_repeats` committed characters.
///
/// Each draw is independent and uniform over the whole charset; rejected
/// values may be redrawn. The window is clamped below the charset length,
/// so for a duplicate-free charset at least one character is always
/// admissible and the loop terminates with probability 1. Expected draws
/// per position are `len / (len - window)`.
pub fn generate_from_charset(
    chars: &[char],
    length: usize,
    avoid_repeats: usize,
    rng: &mut impl RandomSource,
) -> Result<String, Error> {
    if chars.is_empty() {
        return Err(Error::EmptyCharset);
    }

    if length == 0 {
        return Ok(String::new());
    }

    let window = normalize_avoid_repeats(avoid_repeats, chars.len());
    let mut password: Vec<char> = Vec::with_capacity(length);

    while password.len() < length {
        let candidate = chars[rng.pick(0, chars.len() - 1)?];
        if is_valid_char(candidate, &password, window) {
            password.push(candidate);
        }
    }

    Ok(password.into_iter().collect())
}

/// Clamp the requested window to `[0, charset_length - 1]`, reserving at
/// least one admissible character at every step.
fn normalize_avoid_repeats(avoid_repeats: usize, charset_length: usize) -> usize {
    if avoid_repeats >= charset_length {
        return charset_length - 1;
    }

    avoid_repeats
}

fn is_valid_char(candidate: char, password: &[char], window: usize) -> bool {
    if window == 0 {
        return true;
    }

    let start = password.len().saturating_sub(window);
    !password[start..].contains(&candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic source replaying a fixed index sequence.
    struct Scripted {
        seq: Vec<usize>,
        pos: usize,
    }

    impl Scripted {
        fn new(seq: &[usize]) -> Self {
            Self { seq: seq.to_vec(), pos: 0 }
        }
    }

    impl RandomSource for Scripted {
        fn pick(&mut self, min: usize, max: usize) -> Result<usize, Error> {
            let value = self.seq[self.pos];
            self.pos += 1;
            assert!(value >= min && value <= max, "scripted value out of range");
            Ok(value)
        }
    }

    #[test]
    fn output_has_exact_length() {
        let options = Options {
            length: 15,
            uppercase: false,
            numbers: false,
            ..Options::default()
        };

        let password = generate(&options).unwrap();
        assert_eq!(password.chars().count(), 15);
    }

    #[test]
    fn zero_length_yields_empty_password() {
        let chars: Vec<char> = "abc".chars().collect();
        let password = generate_from_charset(&chars, 0, 1, &mut OsRandom).unwrap();
        assert!(password.is_empty());
    }

    #[test]
    fn empty_charset_fails_before_length_check() {
        for length in [0, 10] {
            let result = generate_from_charset(&[], length, 1, &mut OsRandom);
            assert!(matches!(result, Err(Error::EmptyCharset)));
        }
    }

    #[test]
    fn no_classes_and_no_custom_fails() {
        let options = Options {
            lowercase: false,
            uppercase: false,
            numbers: false,
            symbols: false,
            ..Options::default()
        };

        assert!(matches!(generate(&options), Err(Error::EmptyCharset)));
    }

    #[test]
    fn rejected_draws_are_redrawn() {
        let chars: Vec<char> = "abc".chars().collect();
        // 'a' at draws 2 and 4 falls inside the window and is redrawn.
        let mut rng = Scripted::new(&[0, 0, 1, 0, 2, 0, 1]);

        let password = generate_from_charset(&chars, 5, 2, &mut rng).unwrap();
        assert_eq!(password, "abcab");
        assert_eq!(rng.pos, 7);
    }

    #[test]
    fn window_zero_accepts_everything() {
        let chars = vec!['a'];
        let password = generate_from_charset(&chars, 4, 0, &mut OsRandom).unwrap();
        assert_eq!(password, "aaaa");
    }

    #[test]
    fn window_holds_at_every_position() {
        let chars: Vec<char> = "abcde".chars().collect();
        let password: Vec<char> = generate_from_charset(&chars, 40, 2, &mut OsRandom)
            .unwrap()
            .chars()
            .collect();

        for i in 0..password.len() {
            let start = i.saturating_sub(2);
            assert!(
                !password[start..i].contains(&password[i]),
                "repeat inside window at position {i}"
            );
        }
    }

    #[test]
    fn window_clamps_to_charset_length_minus_one() {
        assert_eq!(normalize_avoid_repeats(3, 10), 3);
        assert_eq!(normalize_avoid_repeats(10, 10), 9);
        assert_eq!(normalize_avoid_repeats(100, 10), 9);
        assert_eq!(normalize_avoid_repeats(0, 10), 0);
        assert_eq!(normalize_avoid_repeats(0, 1), 0);
    }

    #[test]
    fn full_window_still_terminates() {
        // Window clamps to len-1, so one character is always admissible.
        let chars: Vec<char> = "ab".chars().collect();
        let password = generate_from_charset(&chars, 10, 50, &mut OsRandom).unwrap();

        let collected: Vec<char> = password.chars().collect();
        for pair in collected.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }
}
