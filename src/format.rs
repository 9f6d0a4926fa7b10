//! Rendering dates in era notation: `令和元年`, `令和2年5月1日`.
//!
//! The era is chosen from the instant a [`Zoned`] points at, while the
//! year, month and day printed are that value's own civil fields. Output is
//! always half-width; see [`crate::width`] for full-width display.

use std::fmt;

use jiff::Zoned;
use jiff::civil::Date;

use crate::era::{Era, jst_zone};
use crate::error::Result;
use crate::table::EraTable;

/// Midnight of `date` in Japan Standard Time.
pub fn jst(date: Date) -> Result<Zoned> {
    Ok(date.to_zoned(jst_zone())?)
}

// ── Era year ─────────────────────────────────────────────────────────

/// A year expressed relative to an era, or a bare Gregorian year when the
/// date predates every era.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EraYear<'a> {
    pub era: Option<&'a Era>,
    /// Era-relative when `era` is set, Gregorian otherwise.
    pub year: i16,
}

impl<'a> EraYear<'a> {
    pub fn resolve(table: &'a EraTable, zdt: &Zoned) -> Self {
        match table.find(zdt.timestamp()) {
            // Counted from the era's start *year*: the count goes up every
            // January 1, not on the anniversary of the start day.
            Ok(era) => Self {
                era: Some(era),
                year: zdt.year() - era.year + 1,
            },
            Err(_) => Self {
                era: None,
                year: zdt.year(),
            },
        }
    }

    /// True for the inaugural year, written 元年.
    pub fn is_first(&self) -> bool {
        self.era.is_some() && self.year == 1
    }
}

impl fmt::Display for EraYear<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.era {
            None => write!(f, "{}年", self.year),
            Some(era) if self.is_first() => write!(f, "{}元年", era.name),
            Some(era) => write!(f, "{}{}年", era.name, self.year),
        }
    }
}

// ── Formatting on a table ────────────────────────────────────────────

impl EraTable {
    /// `令和元年`, `平成31年`, or `644年` before the first era.
    pub fn era_year(&self, zdt: &Zoned) -> String {
        EraYear::resolve(self, zdt).to_string()
    }

    /// `令和元年12月31日`
    pub fn era_date(&self, zdt: &Zoned) -> String {
        format!("{}{}月{}日", self.era_year(zdt), zdt.month(), zdt.day())
    }

    /// `令和元年05月01日`, for fixed-width columns.
    pub fn era_date_with_zeros(&self, zdt: &Zoned) -> String {
        format!("{}{:02}月{:02}日", self.era_year(zdt), zdt.month(), zdt.day())
    }
}
