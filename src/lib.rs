//! Whole-year calendar printer.
//!
//! Features:
//! - Proleptic Gregorian date arithmetic on absolute day numbers
//! - Month grids laid out row by row, three months side by side
//! - Single-month display

pub mod args;
pub mod calendar;
pub mod formatter;
pub mod types;
