//! Brute-force hunt for the EAF coefficients embedded in the conversion
//! kernel.
//!
//! Usage: `search` (no arguments)

use rata_die::{
    SlopeHint, days_from_march, find_coefficients, month_from_day_of_year, year_of_century,
};
use std::env;
use std::io::{self, Write};
use std::process;

fn report(result: Option<rata_die::Coefficients>) {
    match result {
        Some(found) => println!("{found}."),
        None => println!("no coefficients found."),
    }
}

fn main() {
    if env::args().len() != 1 {
        eprintln!("usage: search");
        process::exit(1);
    }

    print!("Coefficients for month from day of year: ");
    io::stdout().flush().ok();
    report(find_coefficients(SlopeHint { num: 1, den: 31 }, month_from_day_of_year));

    print!("Coefficients for days since 01-Mar: ");
    io::stdout().flush().ok();
    report(find_coefficients(SlopeHint { num: 30, den: 1 }, days_from_march));

    print!("Coefficients for year of century: ");
    io::stdout().flush().ok();
    // Exhausts the 32-bit space without a match; takes a long while.
    report(find_coefficients(SlopeHint { num: 1, den: 366 }, year_of_century));
}
