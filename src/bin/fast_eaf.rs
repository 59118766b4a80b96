//! Finds coefficients and upper bound of fast EAFs.
//!
//! Usage: `fast_eaf alpha beta delta`

use rata_die::{Eaf, derive_fast_eaf};
use std::env;
use std::process;

fn parse_args_or_exit() -> Eaf {
    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("usage: {} alpha beta delta", args[0]);
        process::exit(1);
    }

    let mut coefficients = [0i64; 3];
    for (slot, arg) in coefficients.iter_mut().zip(&args[1..]) {
        match arg.parse() {
            Ok(value) => *slot = value,
            Err(_) => {
                eprintln!("error: `{arg}` is not an integer.");
                process::exit(1);
            }
        }
    }

    match Eaf::try_new(coefficients[0], coefficients[1], coefficients[2]) {
        Ok(eaf) => eaf,
        Err(err) => {
            eprintln!("error: {err}.");
            process::exit(1);
        }
    }
}

fn main() {
    let eaf = parse_args_or_exit();

    for k in 1..=32 {
        println!("{}\n", derive_fast_eaf(eaf, k));
    }
}
