use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};

use crate::error::{PrHelpError, Result, TimestampKind};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Inclusive lower bound on comment creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBoundary(DateTime<Utc>);

impl TimeBoundary {
    /// Build the boundary from the two mutually exclusive flags.
    ///
    /// Empty strings count as absent. Supplying both is rejected before
    /// either value is looked at.
    pub fn from_flags(after_date: Option<&str>, after_time: Option<&str>) -> Result<Option<Self>> {
        let after_date = after_date.filter(|s| !s.is_empty());
        let after_time = after_time.filter(|s| !s.is_empty());

        match (after_date, after_time) {
            (Some(_), Some(_)) => Err(PrHelpError::ConflictingFilters),
            (Some(date), None) => Self::parse_date(date).map(Some),
            (None, Some(datetime)) => Self::parse_datetime(datetime).map(Some),
            (None, None) => Ok(None),
        }
    }

    /// `YYYY-MM-DD`, anchored to midnight UTC.
    pub fn parse_date(value: &str) -> Result<Self> {
        let malformed = || PrHelpError::MalformedTimestamp {
            kind: TimestampKind::Date,
            value: value.to_string(),
        };

        let date = NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| malformed())?;
        // chrono accepts unpadded fields; the canonical form must round-trip.
        if date.format(DATE_FORMAT).to_string() != value {
            return Err(malformed());
        }
        Ok(Self(date.and_time(NaiveTime::MIN).and_utc()))
    }

    /// `YYYY-MM-DD HH:MM:SS`, interpreted as UTC.
    pub fn parse_datetime(value: &str) -> Result<Self> {
        let malformed = || PrHelpError::MalformedTimestamp {
            kind: TimestampKind::DateTime,
            value: value.to_string(),
        };

        let datetime =
            NaiveDateTime::parse_from_str(value, DATETIME_FORMAT).map_err(|_| malformed())?;
        if datetime.format(DATETIME_FORMAT).to_string() != value {
            return Err(malformed());
        }
        Ok(Self(datetime.and_utc()))
    }

    /// `created_at >= boundary`.
    pub fn admits(&self, created_at: &DateTime<Utc>) -> bool {
        *created_at >= self.0
    }
}

impl fmt::Display for TimeBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}
