use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};
use serde::*;
use std::fmt;

use crate::error::{ConversionError, ConversionResult, ErrorContext};

/// Offset between Julian Date and Modified Julian Date: `JD = MJD + 2400000.5`.
pub const MJD_TO_JD_OFFSET: f64 = 2_400_000.5;

/// MJD of the Unix epoch, 1970-01-01 00:00:00 UTC.
pub const MJD_UNIX_EPOCH: f64 = 40_587.0;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Modified Julian Date representation.
/// MJD 0 = 1858-11-17 00:00:00 UTC
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct ModifiedJulianDate(qtty::Days);

impl ModifiedJulianDate {
    /// Create a new MJD value.
    pub fn new<V: Into<qtty::Days>>(v: V) -> Self {
        Self(v.into())
    }

    /// Raw MJD value as f64.
    pub fn value(&self) -> f64 {
        self.0.value()
    }

    /// Julian Date of the same instant.
    pub fn to_julian_date(&self) -> JulianDate {
        JulianDate::new(self.value() + MJD_TO_JD_OFFSET)
    }

    /// Convert to Unix timestamp (seconds since 1970-01-01 00:00:00 UTC).
    pub fn to_unix_timestamp(&self) -> f64 {
        (self.value() - MJD_UNIX_EPOCH) * 86400.0
    }

    /// Create from Unix timestamp (seconds since 1970-01-01 00:00:00 UTC).
    pub fn from_unix_timestamp(timestamp: f64) -> Self {
        Self::new(timestamp / 86400.0 + MJD_UNIX_EPOCH)
    }

    /// Convert to chrono DateTime<Utc>, rounded to the nearest millisecond.
    ///
    /// Fails for non-finite values and for dates outside chrono's range.
    pub fn to_datetime(&self) -> ConversionResult<DateTime<Utc>> {
        let mjd = self.value();
        let context = || ErrorContext::new("mjd_to_civil").with_field("mjd");
        if !mjd.is_finite() {
            return Err(ConversionError::validation_with_context(
                "MJD must be a finite number",
                context(),
            ));
        }
        let millis = ((mjd - MJD_UNIX_EPOCH) * MILLIS_PER_DAY).round();
        if millis.abs() >= i64::MAX as f64 {
            return Err(ConversionError::validation_with_context(
                format!("MJD {} is outside the supported calendar range", mjd),
                context(),
            ));
        }
        DateTime::from_timestamp_millis(millis as i64).ok_or_else(|| {
            ConversionError::validation_with_context(
                format!("MJD {} is outside the supported calendar range", mjd),
                context(),
            )
        })
    }

    /// Create from chrono DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self::from_unix_timestamp(dt.timestamp() as f64 + dt.timestamp_subsec_nanos() as f64 / 1e9)
    }
}

impl From<f64> for ModifiedJulianDate {
    fn from(v: f64) -> Self {
        ModifiedJulianDate::new(v)
    }
}

impl From<JulianDate> for ModifiedJulianDate {
    fn from(jd: JulianDate) -> Self {
        jd.to_modified()
    }
}

/// Julian Date representation.
/// JD 0 = -4712-01-01 12:00:00 (proleptic Julian calendar)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct JulianDate(qtty::Days);

impl JulianDate {
    /// Create a new JD value.
    pub fn new<V: Into<qtty::Days>>(v: V) -> Self {
        Self(v.into())
    }

    /// Raw JD value as f64.
    pub fn value(&self) -> f64 {
        self.0.value()
    }

    /// Modified Julian Date of the same instant.
    pub fn to_modified(&self) -> ModifiedJulianDate {
        ModifiedJulianDate::new(self.value() - MJD_TO_JD_OFFSET)
    }
}

impl From<f64> for JulianDate {
    fn from(v: f64) -> Self {
        JulianDate::new(v)
    }
}

impl From<ModifiedJulianDate> for JulianDate {
    fn from(mjd: ModifiedJulianDate) -> Self {
        mjd.to_julian_date()
    }
}

/// Civil (proleptic Gregorian) UTC calendar date and time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    #[serde(default)]
    pub millisecond: u32,
}

impl CivilDateTime {
    /// Build a validated civil date-time.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> ConversionResult<Self> {
        let civil = Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond: 0,
        };
        civil.to_naive()?;
        Ok(civil)
    }

    /// Convert to a chrono naive date-time, rejecting impossible calendar values.
    pub fn to_naive(&self) -> ConversionResult<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|d| {
                d.and_hms_milli_opt(self.hour, self.minute, self.second, self.millisecond)
            })
            .ok_or_else(|| {
                ConversionError::validation_with_context(
                    format!("{:?} is not a valid calendar date and time", self),
                    ErrorContext::new("civil_to_mjd").with_field("common_date"),
                )
            })
    }

    /// Build from a chrono naive date-time (sub-millisecond precision is dropped).
    pub fn from_naive(dt: &NaiveDateTime) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
            millisecond: (dt.nanosecond() / 1_000_000).min(999),
        }
    }
}

impl fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}
