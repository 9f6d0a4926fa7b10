//! Convert Gregorian dates to the Japanese era calendar (元号).
//!
//! ```
//! use jiff::civil::date;
//!
//! let zdt = gengou::jst(date(2019, 5, 1)).unwrap();
//! assert_eq!(gengou::era_year(&zdt), "令和元年");
//! assert_eq!(gengou::era_date(&zdt), "令和元年5月1日");
//! ```
//!
//! Every era from 大化 (645) onward is known. Earlier dates fall back to a
//! plain Gregorian year such as `644年`.

pub mod era;
pub mod error;
pub mod format;
pub mod query;
pub mod table;
pub mod width;

use jiff::{Timestamp, Zoned};

pub use era::{ERA_ENTRIES, Era, EraEntry, JST, jst_zone};
pub use error::{Error, Result};
pub use format::{EraYear, jst};
pub use table::EraTable;
pub use width::widen;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The era in effect at `at`, or [`Error::EraNotFound`] before 大化.
pub fn find(at: Timestamp) -> Result<&'static Era> {
    EraTable::global().find(at)
}

/// Era name and year, e.g. `平成31年`.
pub fn era_year(zdt: &Zoned) -> String {
    EraTable::global().era_year(zdt)
}

/// Era name, year, month and day, e.g. `令和元年12月31日`.
pub fn era_date(zdt: &Zoned) -> String {
    EraTable::global().era_date(zdt)
}

/// Like [`era_date`] with two-digit month and day.
pub fn era_date_with_zeros(zdt: &Zoned) -> String {
    EraTable::global().era_date_with_zeros(zdt)
}

/// The Gregorian year of a label such as `令和2年`.
pub fn gregorian_year(label: &str) -> Result<i16> {
    EraTable::global().gregorian_year(label)
}
