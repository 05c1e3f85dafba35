//! Usage text.

/// Print usage to stderr.
pub fn print_usage() {
    eprintln!("Usage: passgen [options]");
    eprintln!();
    eprintln!("A secure password generator with customizable options.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -l, --length <length>                Password length (default: 12)");
    eprintln!("  -L, --lowercase / --no-lowercase     Include lowercase letters (a-z) (default: on)");
    eprintln!("  -U, --uppercase / --no-uppercase     Include uppercase letters (A-Z) (default: on)");
    eprintln!("  -N, --numbers / --no-numbers         Include numbers (0-9) (default: on)");
    eprintln!("  -S, --symbols / --no-symbols         Include symbols (!@#$%^&* etc.) (default: off)");
    eprintln!("  -C, --custom <chars>                 Custom character set to use");
    eprintln!("  -a, --avoid-repeats <count>          Number of last characters that shouldn't repeat (default: 1)");
    eprintln!("  -q, --qr                             Print the password as a QR code (ANSI UTF-8)");
    eprintln!("  -h, --help                           Show this help");
    eprintln!("  -v, --version                        Show version");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  passgen -l 16 --symbols");
    eprintln!("  passgen --length 12 --no-lowercase");
    eprintln!("  passgen -l 20 --custom \"abcdef123456!@#\"");
    eprintln!("  passgen -q");
}
