//! Error types for era resolution.

use jiff::Timestamp;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The instant precedes 大化, the first tabulated era.
    #[error("era not found: {at} is before the first era")]
    EraNotFound { at: Timestamp },

    #[error("invalid start date for era {name}")]
    InvalidStart {
        name: &'static str,
        #[source]
        source: jiff::Error,
    },

    #[error("era table out of order: {later} does not start after {earlier}")]
    Unordered {
        earlier: &'static str,
        later: &'static str,
    },

    #[error("unknown era: {0}")]
    UnknownEra(String),

    #[error("cannot read era year from {0:?}")]
    InvalidLabel(String),

    #[error("{era} has no year {year}")]
    YearOutOfRange { era: &'static str, year: u16 },

    #[error(transparent)]
    Date(#[from] jiff::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
