//! Sexagesimal angle representation.
//!
//! Right ascension is written in hours (1h = 15°), declination in degrees with
//! an explicit sign. Both share the same `(sign, whole, minutes, seconds)`
//! decomposition; [`AngleKind`] selects the unit markers used when rendering.

use serde::{Deserialize, Serialize};

/// Which celestial coordinate a sexagesimal value describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleKind {
    /// Hours, minutes, seconds of time in `[0h, 24h)`.
    RightAscension,
    /// Signed degrees, arcminutes, arcseconds in `[-90°, +90°]`.
    Declination,
}

/// Separator style for rendered sexagesimal strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SexagesimalStyle {
    /// `12h 34m 56.78s` / `+12° 34' 56.8"`
    Markers,
    /// `12:34:56.78` / `+12:34:56.78`
    Colon,
    /// `12 34 56.78` / `+12 34 56.78`
    Space,
}

/// Rendering policy: separator style plus number of decimal places on the seconds field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SexagesimalFormat {
    pub style: SexagesimalStyle,
    pub decimals: u8,
}

impl SexagesimalFormat {
    /// Upper bound on seconds decimals.
    pub const MAX_DECIMALS: u8 = 4;

    pub fn new(style: SexagesimalStyle, decimals: u8) -> Self {
        Self {
            style,
            decimals: decimals.min(Self::MAX_DECIMALS),
        }
    }

    /// `HHh MMm SS.sss` with two decimals, as shown on tile-center listings.
    pub fn hms_markers() -> Self {
        Self::new(SexagesimalStyle::Markers, 2)
    }

    /// `±DD° MM' SS.s"` with one decimal.
    pub fn dms_markers() -> Self {
        Self::new(SexagesimalStyle::Markers, 1)
    }

    /// `HH:MM:SS.ss` / `±DD:MM:SS.ss`, the form returned by the conversion endpoints.
    pub fn colon() -> Self {
        Self::new(SexagesimalStyle::Colon, 2)
    }
}

/// A decomposed sexagesimal value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sexagesimal {
    pub negative: bool,
    /// Hours for right ascension, degrees for declination.
    pub whole: u32,
    pub minutes: u32,
    pub seconds: f64,
}

impl Sexagesimal {
    /// Decompose a value expressed in hours or degrees.
    ///
    /// Seconds are rounded to `decimals` places on an integer tick count, so a
    /// value such as 59.999s carries into the minutes field instead of
    /// printing as `60.00`.
    pub fn from_decimal_units(value: f64, decimals: u8) -> Self {
        let decimals = decimals.min(SexagesimalFormat::MAX_DECIMALS);
        let scale = 10u64.pow(decimals as u32);
        let ticks = (value.abs() * 3600.0 * scale as f64).round() as u64;

        let per_unit = 3600 * scale;
        let per_minute = 60 * scale;
        let whole = ticks / per_unit;
        let rem = ticks % per_unit;

        Self {
            negative: value < 0.0 && ticks != 0,
            whole: whole as u32,
            minutes: (rem / per_minute) as u32,
            seconds: (rem % per_minute) as f64 / scale as f64,
        }
    }

    /// Recombine into decimal hours or degrees.
    pub fn to_decimal_units(&self) -> f64 {
        let magnitude = self.whole as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0;
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Render with the unit markers of `kind` and the given format.
    pub fn render(&self, kind: AngleKind, format: SexagesimalFormat) -> String {
        let decimals = format.decimals as usize;
        let width = if decimals == 0 { 2 } else { decimals + 3 };
        let seconds = format!("{:0width$.prec$}", self.seconds, width = width, prec = decimals);

        match kind {
            AngleKind::RightAscension => match format.style {
                SexagesimalStyle::Markers => {
                    format!("{:02}h {:02}m {}s", self.whole, self.minutes, seconds)
                }
                SexagesimalStyle::Colon => {
                    format!("{:02}:{:02}:{}", self.whole, self.minutes, seconds)
                }
                SexagesimalStyle::Space => {
                    format!("{:02} {:02} {}", self.whole, self.minutes, seconds)
                }
            },
            AngleKind::Declination => {
                let sign = if self.negative { '-' } else { '+' };
                match format.style {
                    SexagesimalStyle::Markers => format!(
                        "{}{:02}° {:02}' {}\"",
                        sign, self.whole, self.minutes, seconds
                    ),
                    SexagesimalStyle::Colon => {
                        format!("{}{:02}:{:02}:{}", sign, self.whole, self.minutes, seconds)
                    }
                    SexagesimalStyle::Space => {
                        format!("{}{:02} {:02} {}", sign, self.whole, self.minutes, seconds)
                    }
                }
            }
        }
    }
}
