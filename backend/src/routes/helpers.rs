//! Request-schema helpers shared by the route DTOs.

use serde::de::{self, Deserializer};
use serde::Deserialize;

use crate::error::{ConversionError, ErrorContext};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Optional number where JSON `null`, a missing key and `""` all mean "not supplied".
pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(value)) => Ok(Some(value)),
        Some(NumberOrText::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(NumberOrText::Text(text)) => Err(de::Error::custom(format!(
            "expected a number, got \"{}\"",
            text
        ))),
    }
}

/// Optional string where `null`, a missing key and blank text all mean "not supplied".
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = Option::<String>::deserialize(deserializer)?;
    Ok(text.filter(|t| !t.trim().is_empty()))
}

/// Error for a group of mutually exclusive fields where zero or several were supplied.
///
/// `fields` pairs each field name with whether it was present.
pub fn exclusive_fields_error(operation: &str, fields: &[(&str, bool)]) -> ConversionError {
    let names = fields.iter().map(|(name, _)| *name).collect::<Vec<_>>().join(", ");
    let supplied = fields
        .iter()
        .filter(|(_, present)| *present)
        .map(|(name, _)| *name)
        .collect::<Vec<_>>();
    if supplied.is_empty() {
        ConversionError::validation_with_context(
            format!("Provide one of: {}", names),
            ErrorContext::new(operation),
        )
    } else {
        ConversionError::validation_with_context(
            format!("Provide only one of: {}", names),
            ErrorContext::new(operation).with_details(supplied.join(", ")),
        )
    }
}
