//! Type definitions and constants for calendar layout.

/// Errors produced while parsing arguments or rendering a calendar.
#[derive(Debug, thiserror::Error)]
pub enum CalError {
    /// No year was given on the command line.
    #[error("missing year argument")]
    MissingYear,

    /// Year is not a positive integer.
    #[error("invalid year value: {0}")]
    InvalidYear(String),

    /// Month is neither 1-12 nor a known month name.
    #[error("invalid month value: {0}")]
    InvalidMonth(String),

    /// Date components do not name a real day.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: u32, month: u32, day: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A Gregorian date with `year >= 1`.
///
/// Fields are private: a value only exists after validation in
/// [`CalendarDate::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    pub(crate) year: u32,
    pub(crate) month: u32,
    pub(crate) day: u32,
}

/// Progress of a month through its printed rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutState {
    /// No week row has been emitted yet.
    HeaderPending,
    /// Some days are printed, some remain.
    PrintingWeeks,
    /// Every day has been printed.
    Done,
}

/// Row-by-row printer state for a single month.
///
/// Fields are private: the month is validated and `last_day` derived in
/// [`MonthLayout::new`], and only the cursor moves afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthLayout {
    pub(crate) year: u32,
    pub(crate) month: u32,
    pub(crate) last_day: u32,
    /// Next day number due to be printed.
    pub(crate) next_day: u32,
}

/// What the command line asked to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayTarget {
    /// All twelve months, three per row.
    Year(u32),
    /// A single month.
    Month { year: u32, month: u32 },
}

// Constants for calendar layout
pub const LINE_WIDTH: usize = 22; // 7 cells + separator space
pub const CELL_WIDTH: usize = 3;
pub const FIRST_DAY: u32 = 1;
pub const MAX_WEEK_ROWS: usize = 6;
pub const DAYS_PER_WEEK: usize = 7;
pub const MONTHS_PER_YEAR: u32 = 12;
pub const MONTHS_PER_ROW: u32 = 3;

pub const BLANK_CELL: &str = "   ";
pub const WEEK_HEADER: &str = " Su Mo Tu We Th Fr Sa ";

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// Cumulative days before each month in a common year
pub const DAYS_BEFORE_MONTH: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// 1970-02-01 was a Sunday, so day differences from it count columns from Sunday
pub const ANCHOR_DATE: CalendarDate = CalendarDate {
    year: 1970,
    month: 2,
    day: 1,
};
