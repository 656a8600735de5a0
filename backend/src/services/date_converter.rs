//! Conversions between Modified Julian Date, Julian Date and civil UTC dates.
//!
//! The calendar side is delegated to chrono (proleptic Gregorian, UTC); the
//! day-count side is plain arithmetic around the Unix epoch at MJD 40587.

use chrono::{NaiveDate, NaiveDateTime};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ConversionError, ConversionResult, ErrorContext};
use crate::models::{CivilDateTime, JulianDate, ModifiedJulianDate};

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Decompose an MJD into a civil UTC date and time.
pub fn mjd_to_civil(mjd: f64) -> ConversionResult<CivilDateTime> {
    let dt = ModifiedJulianDate::new(mjd).to_datetime()?;
    Ok(CivilDateTime::from_naive(&dt.naive_utc()))
}

/// Decompose a Julian Date into a civil UTC date and time.
pub fn jd_to_civil(jd: f64) -> ConversionResult<CivilDateTime> {
    mjd_to_civil(JulianDate::new(jd).to_modified().value())
}

/// MJD of a civil UTC date and time.
pub fn civil_to_mjd(civil: &CivilDateTime) -> ConversionResult<f64> {
    let naive = civil.to_naive()?;
    Ok(ModifiedJulianDate::from_datetime(naive.and_utc()).value())
}

/// Julian Date of a civil UTC date and time.
pub fn civil_to_jd(civil: &CivilDateTime) -> ConversionResult<f64> {
    Ok(ModifiedJulianDate::new(civil_to_mjd(civil)?).to_julian_date().value())
}

/// Parse an ISO-like civil date (`YYYY-MM-DD[( |T)HH:MM[:SS[.fff]]]`).
pub fn parse_civil(text: &str) -> ConversionResult<CivilDateTime> {
    let trimmed = text.trim();
    for fmt in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(CivilDateTime::from_naive(&dt));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(CivilDateTime::from_naive(&dt));
        }
    }
    Err(ConversionError::parse_with_context(
        format!("'{}' is not a date; use YYYY-MM-DD HH:MM:SS", trimmed),
        ErrorContext::new("parse_civil").with_field("common_date"),
    ))
}

/// Date supplied in exactly one representation.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    Mjd(f64),
    Jd(f64),
    CommonDate(String),
}

/// All three representations of one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateConversion {
    pub mjd: f64,
    pub jd: f64,
    /// `YYYY-MM-DD HH:MM:SS` in UTC.
    pub common_date: String,
    /// Which representation the caller supplied: `"mjd"`, `"jd"` or `"common_date"`.
    pub source: String,
}

/// Convert a date, returning MJD, JD and the civil string together.
pub fn convert(input: DateInput) -> ConversionResult<DateConversion> {
    let result = match input {
        DateInput::Mjd(mjd) => {
            let civil = mjd_to_civil(mjd)?;
            DateConversion {
                mjd,
                jd: ModifiedJulianDate::new(mjd).to_julian_date().value(),
                common_date: civil.to_string(),
                source: "mjd".to_string(),
            }
        }
        DateInput::Jd(jd) => {
            let mjd = JulianDate::new(jd).to_modified().value();
            let civil = mjd_to_civil(mjd)?;
            DateConversion {
                mjd,
                jd,
                common_date: civil.to_string(),
                source: "jd".to_string(),
            }
        }
        DateInput::CommonDate(text) => {
            let civil = parse_civil(&text)?;
            let mjd = civil_to_mjd(&civil)?;
            DateConversion {
                mjd,
                jd: ModifiedJulianDate::new(mjd).to_julian_date().value(),
                common_date: civil.to_string(),
                source: "common_date".to_string(),
            }
        }
    };
    debug!(
        "convert_date ({}): mjd={} jd={} date={}",
        result.source, result.mjd, result.jd, result.common_date
    );
    Ok(result)
}
