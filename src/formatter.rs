//! Calendar formatting: month blocks, week rows and side-by-side groups.

use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

use crate::types::{
    BLANK_CELL, CELL_WIDTH, CalError, DAYS_PER_WEEK, FIRST_DAY, LINE_WIDTH, MAX_WEEK_ROWS,
    MONTH_NAMES, MONTHS_PER_ROW, MONTHS_PER_YEAR, MonthLayout, WEEK_HEADER,
};

/// Full English month name for 1-12.
pub fn get_month_name(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|idx| MONTH_NAMES.get(idx as usize))
        .copied()
}

/// Parse month from string (numeric 1-12, full English name or 3-letter abbreviation).
pub fn parse_month(s: &str) -> Option<u32> {
    if let Ok(n) = s.parse::<u32>()
        && (1..=MONTHS_PER_YEAR).contains(&n)
    {
        return Some(n);
    }

    let s_lower = s.to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|name| {
            let name = name.to_lowercase();
            name == s_lower || (s_lower.len() == 3 && name.starts_with(&s_lower))
        })
        .map(|idx| idx as u32 + 1)
}

/// Center text within a specified width; an odd remainder goes to the left.
pub fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding.div_ceil(2);
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

impl MonthLayout {
    /// Month name centered in a full-width field.
    pub fn format_month_name(&self) -> String {
        center_text(MONTH_NAMES[(self.month - 1) as usize], LINE_WIDTH)
    }

    /// Weekday header matching the row width.
    pub fn week_header() -> &'static str {
        WEEK_HEADER
    }

    /// Append the next week row to `line`.
    ///
    /// Returns `true` if any day number was written. An exhausted month
    /// still writes a blank row so neighbouring months stay aligned.
    pub fn push_next_row(&mut self, line: &mut String) -> bool {
        if self.next_day > self.last_day {
            line.push_str(&" ".repeat(LINE_WIDTH));
            return false;
        }

        let leading = if self.next_day == FIRST_DAY {
            self.first_weekday_column()
        } else {
            0
        };

        for _ in 0..leading {
            line.push_str(BLANK_CELL);
        }
        for _ in leading..DAYS_PER_WEEK {
            if self.next_day <= self.last_day {
                line.push_str(&format!("{:>CELL_WIDTH$}", self.next_day));
                self.next_day += 1;
            } else {
                line.push_str(BLANK_CELL);
            }
        }
        line.push(' ');

        true
    }
}

/// Format months of one year side by side, one line per output row.
///
/// The block is the names line, the weekday header line, the week rows and
/// a terminating empty line.
pub fn format_months_side_by_side(year: u32, months: &[u32]) -> Result<Vec<String>, CalError> {
    let mut layouts = months
        .iter()
        .map(|&month| MonthLayout::new(year, month))
        .collect::<Result<Vec<_>, _>>()?;

    // names + header + week rows + blank terminator
    let mut lines: Vec<String> = Vec::with_capacity(2 + MAX_WEEK_ROWS + 1);
    lines.push(layouts.iter().map(MonthLayout::format_month_name).collect());
    lines.push(MonthLayout::week_header().repeat(layouts.len()));

    loop {
        let mut line = String::with_capacity(LINE_WIDTH * layouts.len());
        let mut printed = false;
        for layout in layouts.iter_mut() {
            printed |= layout.push_next_row(&mut line);
        }
        if !printed {
            break;
        }
        lines.push(line);
    }

    lines.push(String::new());
    Ok(lines)
}

/// Format a single month on its own.
pub fn format_month(year: u32, month: u32) -> Result<Vec<String>, CalError> {
    format_months_side_by_side(year, &[month])
}

/// Format all 12 months of a year in rows of three.
pub fn format_year(year: u32) -> Result<Vec<String>, CalError> {
    let months: Vec<u32> = (1..=MONTHS_PER_YEAR).collect();
    let mut lines = Vec::new();
    for group in months.chunks(MONTHS_PER_ROW as usize) {
        lines.extend(format_months_side_by_side(year, group)?);
    }
    Ok(lines)
}

pub fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

/// Print all 12 months of a year to standard output.
pub fn print_year(year: u32) -> Result<(), CalError> {
    let lines = format_year(year)?;
    write_lines(&mut io::stdout().lock(), &lines)?;
    Ok(())
}

/// Print a single month to standard output.
pub fn print_month(year: u32, month: u32) -> Result<(), CalError> {
    let lines = format_month(year, month)?;
    write_lines(&mut io::stdout().lock(), &lines)?;
    Ok(())
}
