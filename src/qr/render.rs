//! Half-block terminal rendering of a QR module matrix.
//!
//! Terminal cells are roughly twice as tall as wide, so packing two vertical
//! modules into one half-block glyph yields a near-square visual module and
//! halves the vertical size. The colors are inverted (bright white on
//! black): dark modules show through as background, light modules as solid
//! blocks, which is what scanners expect on a dark terminal.

const COLOR: &str = "\x1b[40;37;1m";
const RESET: &str = "\x1b[0m";

const BLANK: char = ' ';
const FULL: char = '\u{2588}';
const UPPER_HALF: char = '\u{2580}';
const LOWER_HALF: char = '\u{2584}';

/// Render `matrix` framed by `margin` cells of solid border on every side.
///
/// Border rows use the same two-modules-per-line packing as the body, so an
/// odd margin yields `margin / 2` dedicated border lines: a margin of 1
/// produces none at all. A 0x0 matrix yields only border rows.
pub fn render(matrix: &[Vec<bool>], margin: usize) -> String {
    let width = matrix.len();
    let real_width = width + margin * 2;
    let mut output = String::new();

    write_border_rows(&mut output, real_width, margin);

    for y in (0..width).step_by(2) {
        output.push_str(COLOR);

        for _ in 0..margin {
            output.push(FULL);
        }

        for x in 0..width {
            let top = matrix[y][x];
            // A missing second row (odd matrix height) counts as light.
            let bottom = y + 1 < width && matrix[y + 1][x];

            output.push(match (top, bottom) {
                (true, true) => BLANK,
                (true, false) => LOWER_HALF,
                (false, true) => UPPER_HALF,
                (false, false) => FULL,
            });
        }

        for _ in 0..margin {
            output.push(FULL);
        }

        output.push_str(RESET);
        output.push('\n');
    }

    write_border_rows(&mut output, real_width, margin);

    output
}

fn write_border_rows(output: &mut String, real_width: usize, margin: usize) {
    for _ in 0..margin / 2 {
        output.push_str(COLOR);
        for _ in 0..real_width {
            output.push(FULL);
        }
        output.push_str(RESET);
        output.push('\n');
    }
}
