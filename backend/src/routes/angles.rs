use serde::{Deserialize, Serialize};

use super::helpers::{exclusive_fields_error, optional_number, optional_text};
use crate::error::ConversionResult;
use crate::models::{SexagesimalFormat, SexagesimalStyle};
use crate::services::angle_converter::{DecInput, RaInput};

/// Colon-separated output with two decimals unless the request overrides it.
fn resolve_format(style: Option<SexagesimalStyle>, decimals: Option<u8>) -> SexagesimalFormat {
    let base = SexagesimalFormat::colon();
    SexagesimalFormat::new(style.unwrap_or(base.style), decimals.unwrap_or(base.decimals))
}

/// Body of `POST /convert_ra`: exactly one of `ra_hms`, `ra_decimal`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConvertRaRequest {
    #[serde(default, deserialize_with = "optional_text")]
    pub ra_hms: Option<String>,
    #[serde(default, deserialize_with = "optional_number")]
    pub ra_decimal: Option<f64>,
    #[serde(default)]
    pub style: Option<SexagesimalStyle>,
    #[serde(default)]
    pub decimals: Option<u8>,
}

impl ConvertRaRequest {
    pub fn into_input(self) -> ConversionResult<(RaInput, SexagesimalFormat)> {
        let format = resolve_format(self.style, self.decimals);
        let input = match (self.ra_hms, self.ra_decimal) {
            (Some(text), None) => RaInput::Hms(text),
            (None, Some(value)) => RaInput::Decimal(value),
            (hms, decimal) => {
                return Err(exclusive_fields_error(
                    CONVERT_RA,
                    &[("ra_hms", hms.is_some()), ("ra_decimal", decimal.is_some())],
                ))
            }
        };
        Ok((input, format))
    }
}

/// Body of `POST /convert_dec`: exactly one of `dec_dms`, `dec_decimal`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConvertDecRequest {
    #[serde(default, deserialize_with = "optional_text")]
    pub dec_dms: Option<String>,
    #[serde(default, deserialize_with = "optional_number")]
    pub dec_decimal: Option<f64>,
    #[serde(default)]
    pub style: Option<SexagesimalStyle>,
    #[serde(default)]
    pub decimals: Option<u8>,
}

impl ConvertDecRequest {
    pub fn into_input(self) -> ConversionResult<(DecInput, SexagesimalFormat)> {
        let format = resolve_format(self.style, self.decimals);
        let input = match (self.dec_dms, self.dec_decimal) {
            (Some(text), None) => DecInput::Dms(text),
            (None, Some(value)) => DecInput::Decimal(value),
            (dms, decimal) => {
                return Err(exclusive_fields_error(
                    CONVERT_DEC,
                    &[("dec_dms", dms.is_some()), ("dec_decimal", decimal.is_some())],
                ))
            }
        };
        Ok((input, format))
    }
}

pub const CONVERT_RA: &str = "convert_ra";
pub const CONVERT_DEC: &str = "convert_dec";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ra_request_from_json() {
        let req: ConvertRaRequest = serde_json::from_str(
            r#"{"ra_hms": "12:00:00", "ra_decimal": ""}"#,
        )
        .unwrap();
        let (input, format) = req.into_input().unwrap();
        assert_eq!(input, RaInput::Hms("12:00:00".into()));
        assert_eq!(format, SexagesimalFormat::colon());
    }

    #[test]
    fn test_ra_request_both_fields_rejected() {
        let req: ConvertRaRequest = serde_json::from_str(
            r#"{"ra_hms": "12:00:00", "ra_decimal": 180}"#,
        )
        .unwrap();
        let err = req.into_input().unwrap_err();
        assert!(err.message().starts_with("Provide only one"));
    }

    #[test]
    fn test_dec_request_with_format_override() {
        let req: ConvertDecRequest = serde_json::from_str(
            r#"{"dec_decimal": -45.5, "style": "markers", "decimals": 1}"#,
        )
        .unwrap();
        let (input, format) = req.into_input().unwrap();
        assert_eq!(input, DecInput::Decimal(-45.5));
        assert_eq!(format, SexagesimalFormat::dms_markers());
    }

    #[test]
    fn test_dec_request_empty_rejected() {
        let req: ConvertDecRequest = serde_json::from_str(r#"{"dec_dms": null}"#).unwrap();
        let err = req.into_input().unwrap_err();
        assert!(err.message().starts_with("Provide one of"));
    }
}
