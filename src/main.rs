use std::env;
use std::process;

use zeroize::Zeroize;

mod cli;
mod error;
mod pass;
mod qr;
mod rand;

// sysexits(3) conventions: usage errors vs runtime failures.
const EX_USAGE: i32 = 64;
const EX_IOERR: i32 = 74;

/// Quiet-zone width around the rendered QR symbol, in cells per side.
const QR_MARGIN: usize = 1;

fn main() {
    let args: Vec<String> = env::args().collect();

    let parsed = match cli::parse(&args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("{err}");
            process::exit(EX_USAGE);
        }
    };

    if parsed.version {
        println!("passgen version {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if parsed.help {
        cli::print_usage();
        return;
    }

    let mut password = match pass::generate(&parsed.options) {
        Ok(password) => password,
        Err(err) => {
            eprintln!("{err}");
            process::exit(EX_IOERR);
        }
    };

    if parsed.options.qr_code {
        let matrix = match qr::encode(&password) {
            Ok(matrix) => matrix,
            Err(err) => {
                eprintln!("{err}");
                process::exit(EX_IOERR);
            }
        };

        println!("{}", qr::render(&matrix, QR_MARGIN));
        print!("Password: ");
    }

    println!("{password}");
    password.zeroize();
}
