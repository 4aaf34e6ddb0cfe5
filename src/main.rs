//! Calendar CLI application.
//!
//! # Usage
//! ```ignore
//! yearcal 2021       // Year 2021
//! yearcal 2021 2     // February 2021
//! ```

use yearcal::args::{Args, get_display_target};
use yearcal::formatter::{print_month, print_year};
use yearcal::types::{CalError, DisplayTarget};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("yearcal: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CalError> {
    match get_display_target(args)? {
        DisplayTarget::Year(year) => print_year(year),
        DisplayTarget::Month { year, month } => print_month(year, month),
    }
}
