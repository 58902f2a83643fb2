use crate::error::CoreError;
use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The resampling granularity of the revenue time series.
///
/// On the wire the original resample codes (`"D"`, `"M"`, `"Y"`) are accepted
/// alongside the plain words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "D", alias = "day", alias = "Day")]
    Day,
    #[default]
    #[serde(rename = "M", alias = "month", alias = "Month")]
    Month,
    #[serde(rename = "Y", alias = "year", alias = "Year")]
    Year,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Day, Period::Month, Period::Year];

    /// The short code used by the dashboard selector.
    pub fn code(&self) -> &'static str {
        match self {
            Period::Day => "D",
            Period::Month => "M",
            Period::Year => "Y",
        }
    }

    /// Human readable label for the selector.
    pub fn label(&self) -> &'static str {
        match self {
            Period::Day => "Day",
            Period::Month => "Month",
            Period::Year => "Year",
        }
    }

    /// Returns the first calendar day of the bucket that contains `date`.
    pub fn bucket_start(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Period::Day => date,
            Period::Month => date.with_day(1).unwrap_or(date),
            Period::Year => date.with_ordinal(1).unwrap_or(date),
        }
    }

    /// Returns the start of the bucket that follows the one starting at `start`.
    ///
    /// `None` only at the very end of chrono's representable range.
    pub fn next_bucket(&self, start: NaiveDate) -> Option<NaiveDate> {
        let start = self.bucket_start(start);
        match self {
            Period::Day => start.succ_opt(),
            Period::Month => start.checked_add_months(Months::new(1)),
            Period::Year => start.checked_add_months(Months::new(12)),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Period {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "d" | "day" => Ok(Period::Day),
            "m" | "month" => Ok(Period::Month),
            "y" | "year" => Ok(Period::Year),
            other => Err(CoreError::InvalidInput(
                "period".to_string(),
                other.to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn bucket_start_truncates_to_period() {
        let d = date(2024, 2, 29);
        assert_eq!(Period::Day.bucket_start(d), d);
        assert_eq!(Period::Month.bucket_start(d), date(2024, 2, 1));
        assert_eq!(Period::Year.bucket_start(d), date(2024, 1, 1));
    }

    #[test]
    fn next_bucket_crosses_month_and_year_boundaries() {
        assert_eq!(Period::Day.next_bucket(date(2023, 12, 31)), Some(date(2024, 1, 1)));
        assert_eq!(Period::Month.next_bucket(date(2024, 12, 1)), Some(date(2025, 1, 1)));
        assert_eq!(Period::Month.next_bucket(date(2024, 1, 31)), Some(date(2024, 2, 1)));
        assert_eq!(Period::Year.next_bucket(date(2024, 6, 15)), Some(date(2025, 1, 1)));
    }

    #[test]
    fn parses_codes_and_words() {
        assert_eq!("D".parse::<Period>().unwrap(), Period::Day);
        assert_eq!("month".parse::<Period>().unwrap(), Period::Month);
        assert_eq!(" Y ".parse::<Period>().unwrap(), Period::Year);
        assert!("week".parse::<Period>().is_err());
    }

    #[test]
    fn serde_accepts_codes_and_aliases() {
        let p: Period = serde_json::from_str("\"M\"").unwrap();
        assert_eq!(p, Period::Month);
        let p: Period = serde_json::from_str("\"year\"").unwrap();
        assert_eq!(p, Period::Year);
        assert_eq!(serde_json::to_string(&Period::Day).unwrap(), "\"D\"");
        assert!(serde_json::from_str::<Period>("\"W\"").is_err());
    }

    #[test]
    fn default_is_month() {
        assert_eq!(Period::default(), Period::Month);
    }
}
