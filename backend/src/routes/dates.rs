use serde::{Deserialize, Serialize};

use super::helpers::{exclusive_fields_error, optional_number, optional_text};
use crate::error::ConversionResult;
use crate::services::date_converter::DateInput;

/// Body of `POST /convert_date`: exactly one of `mjd`, `jd`, `common_date`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConvertDateRequest {
    #[serde(default, deserialize_with = "optional_number")]
    pub mjd: Option<f64>,
    #[serde(default, deserialize_with = "optional_number")]
    pub jd: Option<f64>,
    #[serde(default, deserialize_with = "optional_text")]
    pub common_date: Option<String>,
}

impl ConvertDateRequest {
    pub fn into_input(self) -> ConversionResult<DateInput> {
        match (self.mjd, self.jd, self.common_date) {
            (Some(mjd), None, None) => Ok(DateInput::Mjd(mjd)),
            (None, Some(jd), None) => Ok(DateInput::Jd(jd)),
            (None, None, Some(text)) => Ok(DateInput::CommonDate(text)),
            (mjd, jd, text) => Err(exclusive_fields_error(
                CONVERT_DATE,
                &[
                    ("mjd", mjd.is_some()),
                    ("jd", jd.is_some()),
                    ("common_date", text.is_some()),
                ],
            )),
        }
    }
}

pub const CONVERT_DATE: &str = "convert_date";

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> ConversionResult<DateInput> {
        serde_json::from_str::<ConvertDateRequest>(body).unwrap().into_input()
    }

    #[test]
    fn test_single_field() {
        assert_eq!(parse(r#"{"mjd": 40587}"#).unwrap(), DateInput::Mjd(40587.0));
        assert_eq!(parse(r#"{"jd": 2451545.0, "mjd": null}"#).unwrap(), DateInput::Jd(2_451_545.0));
        assert_eq!(
            parse(r#"{"common_date": "2000-01-01", "mjd": "", "jd": ""}"#).unwrap(),
            DateInput::CommonDate("2000-01-01".into())
        );
    }

    #[test]
    fn test_none_or_many_is_validation_error() {
        assert!(parse("{}").is_err());
        assert!(parse(r#"{"common_date": ""}"#).is_err());
        let err = parse(r#"{"mjd": 1, "jd": 2400001.5}"#).unwrap_err();
        assert_eq!(err.context().details.as_deref(), Some("mjd, jd"));
    }
}
