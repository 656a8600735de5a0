//! Right ascension and declination conversions between decimal degrees and
//! sexagesimal notation.
//!
//! Parsing accepts whitespace, colons or unit markers as separators
//! (`12 34 56.7`, `12:34:56.7`, `12h34m56.7s`, `-45° 30' 00"`, `-45d30m00s`).
//! Each string must contain exactly three fields: integer hours/degrees,
//! integer minutes and decimal seconds.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{require_finite, ConversionError, ConversionResult, ErrorContext};
use crate::models::{AngleKind, Sexagesimal, SexagesimalFormat};

const RA_SEPARATORS: &[char] = &[':', 'h', 'H', 'm', 'M', 's', 'S'];
const DEC_SEPARATORS: &[char] = &[
    ':', 'd', 'D', '°', '\'', '′', '"', '″', 'm', 'M', 's', 'S',
];

/// Format right ascension (degrees) as hours, minutes, seconds.
///
/// The input is wrapped into `[0, 360)`, so 360° renders as `00h 00m 00.00s`.
pub fn decimal_to_hms(ra_deg: f64, format: SexagesimalFormat) -> ConversionResult<String> {
    let ra = normalize_ra(ra_deg)?;
    let mut parts = Sexagesimal::from_decimal_units(ra / 15.0, format.decimals);
    // 23h59m59.999s may round up to a full day
    parts.whole %= 24;
    Ok(parts.render(AngleKind::RightAscension, format))
}

/// Format declination (degrees) as signed degrees, arcminutes, arcseconds.
pub fn decimal_to_dms(dec_deg: f64, format: SexagesimalFormat) -> ConversionResult<String> {
    let dec = validate_dec(dec_deg, "decimal_to_dms")?;
    let parts = Sexagesimal::from_decimal_units(dec, format.decimals);
    Ok(parts.render(AngleKind::Declination, format))
}

/// Parse an HMS string into its sexagesimal fields.
pub fn parse_hms(text: &str) -> ConversionResult<Sexagesimal> {
    let context = || ErrorContext::new("hms_to_decimal").with_field("ra_hms");
    let fields = split_fields(text.trim(), RA_SEPARATORS).map_err(|e| e.with_context(context()))?;
    let (hours, minutes, seconds) =
        parse_fields(&fields, "HH:MM:SS.ss").map_err(|e| e.with_context(context()))?;

    if hours >= 24 || minutes >= 60 || !(0.0..60.0).contains(&seconds) {
        return Err(ConversionError::validation_with_context(
            format!("Invalid time values in '{}': expect 0-23h, 0-59m, 0-59.99s", text.trim()),
            context(),
        ));
    }

    Ok(Sexagesimal {
        negative: false,
        whole: hours,
        minutes,
        seconds,
    })
}

/// Parse a signed DMS string into its sexagesimal fields.
pub fn parse_dms(text: &str) -> ConversionResult<Sexagesimal> {
    let context = || ErrorContext::new("dms_to_decimal").with_field("dec_dms");
    let trimmed = text.trim();
    let (negative, body) = strip_sign(trimmed);
    let fields = split_fields(body, DEC_SEPARATORS).map_err(|e| e.with_context(context()))?;
    let (degrees, minutes, seconds) =
        parse_fields(&fields, "±DD:MM:SS.ss").map_err(|e| e.with_context(context()))?;

    if degrees > 90 || minutes >= 60 || !(0.0..60.0).contains(&seconds) {
        return Err(ConversionError::validation_with_context(
            format!("Invalid angle values in '{}': expect 0-90°, 0-59', 0-59.99\"", trimmed),
            context(),
        ));
    }

    let parts = Sexagesimal {
        negative,
        whole: degrees,
        minutes,
        seconds,
    };
    if parts.to_decimal_units().abs() > 90.0 {
        return Err(ConversionError::validation_with_context(
            format!("Declination '{}' exceeds 90 degrees", trimmed),
            context(),
        ));
    }
    Ok(parts)
}

/// Parse an HMS string into decimal degrees.
pub fn hms_to_decimal(text: &str) -> ConversionResult<f64> {
    Ok(parse_hms(text)?.to_decimal_units() * 15.0)
}

/// Parse a DMS string into decimal degrees.
pub fn dms_to_decimal(text: &str) -> ConversionResult<f64> {
    Ok(parse_dms(text)?.to_decimal_units())
}

/// Right ascension supplied in exactly one representation.
#[derive(Debug, Clone, PartialEq)]
pub enum RaInput {
    Hms(String),
    Decimal(f64),
}

/// Declination supplied in exactly one representation.
#[derive(Debug, Clone, PartialEq)]
pub enum DecInput {
    Dms(String),
    Decimal(f64),
}

/// Both representations of a right ascension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaConversion {
    pub ra_hms: String,
    pub ra_decimal: f64,
    pub ra_hours: f64,
    /// Which representation the caller supplied: `"hms"` or `"decimal"`.
    pub source: String,
}

/// Both representations of a declination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecConversion {
    pub dec_dms: String,
    pub dec_decimal: f64,
    /// Which representation the caller supplied: `"dms"` or `"decimal"`.
    pub source: String,
}

/// Convert a right ascension, filling in the representation the caller did not supply.
pub fn convert_ra(input: RaInput, format: SexagesimalFormat) -> ConversionResult<RaConversion> {
    let result = match input {
        RaInput::Hms(text) => {
            let ra_decimal = hms_to_decimal(&text)?;
            RaConversion {
                ra_hms: decimal_to_hms(ra_decimal, format)?,
                ra_decimal,
                ra_hours: ra_decimal / 15.0,
                source: "hms".to_string(),
            }
        }
        RaInput::Decimal(value) => {
            let ra_decimal = normalize_ra(value)?;
            RaConversion {
                ra_hms: decimal_to_hms(ra_decimal, format)?,
                ra_decimal,
                ra_hours: ra_decimal / 15.0,
                source: "decimal".to_string(),
            }
        }
    };
    debug!("convert_ra: {} -> {}", result.ra_decimal, result.ra_hms);
    Ok(result)
}

/// Convert a declination, filling in the representation the caller did not supply.
pub fn convert_dec(input: DecInput, format: SexagesimalFormat) -> ConversionResult<DecConversion> {
    let result = match input {
        DecInput::Dms(text) => {
            let dec_decimal = dms_to_decimal(&text)?;
            DecConversion {
                dec_dms: decimal_to_dms(dec_decimal, format)?,
                dec_decimal,
                source: "dms".to_string(),
            }
        }
        DecInput::Decimal(value) => {
            let dec_decimal = validate_dec(value, "decimal_to_dms")?;
            DecConversion {
                dec_dms: decimal_to_dms(dec_decimal, format)?,
                dec_decimal,
                source: "decimal".to_string(),
            }
        }
    };
    debug!("convert_dec: {} -> {}", result.dec_decimal, result.dec_dms);
    Ok(result)
}

fn normalize_ra(ra_deg: f64) -> ConversionResult<f64> {
    let ra = require_finite(ra_deg, "decimal_to_hms", "ra_decimal")?;
    Ok(qtty::Degrees::new(ra).wrap_pos().value())
}

fn validate_dec(dec_deg: f64, operation: &str) -> ConversionResult<f64> {
    let dec = require_finite(dec_deg, operation, "dec_decimal")?;
    if !(-90.0..=90.0).contains(&dec) {
        return Err(ConversionError::validation_with_context(
            format!("Declination must be between -90 and +90 degrees, got {}", dec),
            ErrorContext::new(operation).with_field("dec_decimal"),
        ));
    }
    Ok(dec)
}

fn strip_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-').or_else(|| text.strip_prefix('\u{2212}')) {
        (true, rest.trim_start())
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest.trim_start())
    } else {
        (false, text)
    }
}

fn split_fields(body: &str, separators: &[char]) -> ConversionResult<Vec<String>> {
    if body.is_empty() {
        return Err(ConversionError::parse("Empty coordinate string"));
    }
    let normalized: String = body
        .chars()
        .map(|c| if separators.contains(&c) { ' ' } else { c })
        .collect();
    Ok(normalized.split_whitespace().map(str::to_string).collect())
}

fn parse_fields(fields: &[String], expected: &str) -> ConversionResult<(u32, u32, f64)> {
    if fields.len() != 3 {
        return Err(ConversionError::parse(format!(
            "Expected three fields ({}), found {}",
            expected,
            fields.len()
        )));
    }

    let whole = parse_unsigned_int(&fields[0], expected)?;
    let minutes = parse_unsigned_int(&fields[1], expected)?;
    let seconds = parse_unsigned_decimal(&fields[2], expected)?;
    Ok((whole, minutes, seconds))
}

fn parse_unsigned_int(field: &str, expected: &str) -> ConversionResult<u32> {
    if field.is_empty() || !field.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConversionError::parse(format!(
            "'{}' is not a whole number (expected {})",
            field, expected
        )));
    }
    field.parse::<u32>().map_err(|_| {
        ConversionError::parse(format!("'{}' is out of range (expected {})", field, expected))
    })
}

fn parse_unsigned_decimal(field: &str, expected: &str) -> ConversionResult<f64> {
    let mut parts = field.splitn(2, '.');
    let int_part = parts.next().unwrap_or("");
    let frac_part = parts.next().unwrap_or("");
    let well_formed = (!int_part.is_empty() || !frac_part.is_empty())
        && int_part.chars().all(|c| c.is_ascii_digit())
        && frac_part.chars().all(|c| c.is_ascii_digit());
    if !well_formed {
        return Err(ConversionError::parse(format!(
            "'{}' is not a decimal number (expected {})",
            field, expected
        )));
    }
    field.parse::<f64>().map_err(|_| {
        ConversionError::parse(format!(
            "'{}' is not a decimal number (expected {})",
            field, expected
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SexagesimalStyle;

    #[test]
    fn test_decimal_to_hms_zero_and_half_circle() {
        let fmt = SexagesimalFormat::hms_markers();
        assert_eq!(decimal_to_hms(0.0, fmt).unwrap(), "00h 00m 00.00s");
        assert_eq!(decimal_to_hms(180.0, fmt).unwrap(), "12h 00m 00.00s");
    }

    #[test]
    fn test_decimal_to_hms_full_circle_wraps() {
        let fmt = SexagesimalFormat::hms_markers();
        assert_eq!(decimal_to_hms(360.0, fmt).unwrap(), "00h 00m 00.00s");
        assert_eq!(decimal_to_hms(-15.0, fmt).unwrap(), "23h 00m 00.00s");
    }

    #[test]
    fn test_decimal_to_hms_rounding_near_24h() {
        // 359.99999999° is 23h59m59.9999976s -> rounds up to 24h -> wraps to 00h
        let fmt = SexagesimalFormat::hms_markers();
        assert_eq!(decimal_to_hms(359.99999999, fmt).unwrap(), "00h 00m 00.00s");
    }

    #[test]
    fn test_decimal_to_hms_colon_style() {
        assert_eq!(
            decimal_to_hms(83.633083, SexagesimalFormat::colon()).unwrap(),
            "05:34:31.94"
        );
    }

    #[test]
    fn test_decimal_to_dms_negative() {
        let fmt = SexagesimalFormat::dms_markers();
        assert_eq!(decimal_to_dms(-45.5, fmt).unwrap(), "-45° 30' 00.0\"");
    }

    #[test]
    fn test_decimal_to_dms_poles_do_not_overflow() {
        let fmt = SexagesimalFormat::dms_markers();
        assert_eq!(decimal_to_dms(90.0, fmt).unwrap(), "+90° 00' 00.0\"");
        assert_eq!(decimal_to_dms(-90.0, fmt).unwrap(), "-90° 00' 00.0\"");
    }

    #[test]
    fn test_decimal_to_dms_always_signed() {
        let fmt = SexagesimalFormat::new(SexagesimalStyle::Space, 2);
        assert_eq!(decimal_to_dms(0.0, fmt).unwrap(), "+00 00 00.00");
        assert_eq!(decimal_to_dms(22.0145, fmt).unwrap(), "+22 00 52.20");
    }

    #[test]
    fn test_decimal_to_dms_out_of_range() {
        let err = decimal_to_dms(91.0, SexagesimalFormat::dms_markers()).unwrap_err();
        assert!(matches!(err, ConversionError::Validation { .. }));
        assert!(decimal_to_dms(f64::NAN, SexagesimalFormat::dms_markers()).is_err());
    }

    #[test]
    fn test_hms_to_decimal_separators() {
        for text in ["12 30 00", "12:30:00", "12h30m00s", "12h 30m 00.0s", " 12:30:0 "] {
            let deg = hms_to_decimal(text).unwrap();
            assert!((deg - 187.5).abs() < 1e-9, "{} -> {}", text, deg);
        }
    }

    #[test]
    fn test_dms_to_decimal_separators_and_signs() {
        for text in [
            "-45 30 00",
            "-45:30:00",
            "-45d30m00s",
            "-45° 30' 00.0\"",
            "\u{2212}45:30:00",
        ] {
            let deg = dms_to_decimal(text).unwrap();
            assert!((deg + 45.5).abs() < 1e-9, "{} -> {}", text, deg);
        }
        assert!((dms_to_decimal("+10:00:36").unwrap() - 10.01).abs() < 1e-9);
        assert!((dms_to_decimal("10 00 36").unwrap() - 10.01).abs() < 1e-9);
    }

    #[test]
    fn test_dms_negative_zero_degrees() {
        let deg = dms_to_decimal("-00:30:00").unwrap();
        assert!((deg + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_malformed_strings_are_parse_errors() {
        for text in ["", "12:30", "12:30:00:00", "ab:cd:ef", "12.5:30:00", "1e1:00:00", "12:30:."] {
            let err = hms_to_decimal(text).unwrap_err();
            assert!(matches!(err, ConversionError::Parse { .. }), "{} -> {:?}", text, err);
        }
        let err = dms_to_decimal("--45:00:00").unwrap_err();
        assert!(matches!(err, ConversionError::Parse { .. }));
    }

    #[test]
    fn test_out_of_range_fields_are_validation_errors() {
        for text in ["24:00:00", "12:60:00", "12:00:60"] {
            let err = hms_to_decimal(text).unwrap_err();
            assert!(matches!(err, ConversionError::Validation { .. }), "{}", text);
        }
        for text in ["91:00:00", "90:00:01", "45:61:00"] {
            let err = dms_to_decimal(text).unwrap_err();
            assert!(matches!(err, ConversionError::Validation { .. }), "{}", text);
        }
    }

    #[test]
    fn test_round_trip_grid() {
        let hms = SexagesimalFormat::new(SexagesimalStyle::Colon, 3);
        let dms = SexagesimalFormat::new(SexagesimalStyle::Colon, 3);
        let mut ra = 0.0;
        while ra < 360.0 {
            let back = hms_to_decimal(&decimal_to_hms(ra, hms).unwrap()).unwrap();
            assert!((back - ra).abs() < 1e-4, "ra {} -> {}", ra, back);
            ra += 7.123;
        }
        let mut dec = -90.0;
        while dec <= 90.0 {
            let back = dms_to_decimal(&decimal_to_dms(dec, dms).unwrap()).unwrap();
            assert!((back - dec).abs() < 1e-4, "dec {} -> {}", dec, back);
            dec += 3.217;
        }
    }

    #[test]
    fn test_convert_ra_from_hms_reports_hours() {
        let result =
            convert_ra(RaInput::Hms("06:00:00".into()), SexagesimalFormat::colon()).unwrap();
        assert_eq!(result.ra_decimal, 90.0);
        assert_eq!(result.ra_hours, 6.0);
        assert_eq!(result.ra_hms, "06:00:00.00");
        assert_eq!(result.source, "hms");
    }

    #[test]
    fn test_convert_ra_from_decimal_wraps() {
        let result = convert_ra(RaInput::Decimal(370.0), SexagesimalFormat::colon()).unwrap();
        assert!((result.ra_decimal - 10.0).abs() < 1e-12);
        assert_eq!(result.source, "decimal");
    }

    #[test]
    fn test_convert_dec_from_decimal() {
        let result = convert_dec(DecInput::Decimal(-12.25), SexagesimalFormat::colon()).unwrap();
        assert_eq!(result.dec_dms, "-12:15:00.00");
        assert_eq!(result.source, "decimal");
        assert!(convert_dec(DecInput::Decimal(-95.0), SexagesimalFormat::colon()).is_err());
    }
}
