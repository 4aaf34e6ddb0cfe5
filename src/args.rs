//! Command-line argument parsing using clap.
//!
//! Arguments: `<year> [month]`

use clap::{Parser, ValueHint};

use crate::formatter::parse_month;
use crate::types::{CalError, DisplayTarget};

#[derive(Parser, Debug)]
#[command(name = "yearcal")]
#[command(about = "Displays the calendar of a whole year, three months per row", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Year (1 or greater).
    #[arg(index = 1, default_value = None, value_name = "year", value_hint = ValueHint::Other)]
    pub year_arg: Option<String>,

    /// Month (1-12 or name) - optional, shows only that month.
    #[arg(index = 2, default_value = None, value_name = "month", value_hint = ValueHint::Other)]
    pub month_arg: Option<String>,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Examples:
  yearcal 2021       Display year 2021
  yearcal 2021 2     Display February 2021
  yearcal 2021 feb   Display February 2021";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

/// Parse a year argument: any integer >= 1.
pub fn parse_year(s: &str) -> Result<u32, CalError> {
    match s.parse::<u32>() {
        Ok(year) if year >= 1 => Ok(year),
        _ => Err(CalError::InvalidYear(s.to_string())),
    }
}

/// Decide what to display from the positional arguments.
pub fn get_display_target(args: &Args) -> Result<DisplayTarget, CalError> {
    let year = parse_year(args.year_arg.as_deref().ok_or(CalError::MissingYear)?)?;

    match args.month_arg.as_deref() {
        None => Ok(DisplayTarget::Year(year)),
        Some(s) => {
            let month = parse_month(s).ok_or_else(|| CalError::InvalidMonth(s.to_string()))?;
            Ok(DisplayTarget::Month { year, month })
        }
    }
}
