//! Tells whether a sequence of integers is the code of a line and, if so,
//! prints the line's equation.
//!
//! Usage: `troesch X1 [X2]...`
//!
//! For the Gregorian months from March to February (regardless of leap
//! year):
//!
//! ```text
//! $ troesch 31 30 31 30 31 31 30 31 30 31 31 30
//! The line is y = (153 * x + 2) / 5.
//! ```

use rata_die::recognize_line;
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("usage: {} X1 [X2]...", args[0]);
        process::exit(1);
    }

    let mut code = Vec::with_capacity(args.len() - 1);
    for arg in &args[1..] {
        match arg.parse::<i32>() {
            Ok(x) => code.push(x),
            Err(_) => {
                eprintln!("error: `{arg}` is not an integer.");
                process::exit(1);
            }
        }
    }

    match recognize_line(&code) {
        Some(line) => println!("The line is {line}."),
        None => println!("This is not the code of a line."),
    }
}
