//! Error types for conversion operations.
//!
//! Every public calculator returns [`ConversionResult`]. Failures are values,
//! never panics, and always carry a human-readable message plus structured
//! context describing which operation and input field were involved.

use std::fmt;

/// Result type for conversion operations.
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Structured context for conversion errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorContext {
    /// The operation being performed (e.g., "decimal_to_dms", "compute_fov")
    pub operation: Option<String>,
    /// The input field that was rejected (e.g., "dec_decimal", "overlap_percent")
    pub field: Option<String>,
    /// Additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with an operation name.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    /// Set the offending input field.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Set additional details.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    fn is_empty(&self) -> bool {
        self.operation.is_none() && self.field.is_none() && self.details.is_none()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        let mut parts = Vec::new();
        if let Some(ref op) = self.operation {
            parts.push(format!("operation={}", op));
        }
        if let Some(ref field) = self.field {
            parts.push(format!("field={}", field));
        }
        if let Some(ref details) = self.details {
            parts.push(format!("details={}", details));
        }
        write!(f, " [{}]", parts.join(", "))
    }
}

/// Error taxonomy shared by all calculators.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// Malformed or out-of-range input (negative focal length, overlap out of
    /// range, mutually exclusive fields supplied together, ...).
    #[error("Validation error: {message}{context}")]
    Validation {
        message: String,
        context: ErrorContext,
    },

    /// A sexagesimal or date string does not match the expected grammar.
    #[error("Parse error: {message}{context}")]
    Parse {
        message: String,
        context: ErrorContext,
    },

    /// Numerically undefined result for otherwise well-formed input.
    #[error("Computation error: {message}{context}")]
    Computation {
        message: String,
        context: ErrorContext,
    },
}

impl ConversionError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Create a validation error with context.
    pub fn validation_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Validation {
            message: message.into(),
            context,
        }
    }

    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Create a parse error with context.
    pub fn parse_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Parse {
            message: message.into(),
            context,
        }
    }

    /// Create a computation error.
    pub fn computation(message: impl Into<String>) -> Self {
        Self::Computation {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Create a computation error with context.
    pub fn computation_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Computation {
            message: message.into(),
            context,
        }
    }

    /// Short machine-readable kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation",
            Self::Parse { .. } => "parse",
            Self::Computation { .. } => "computation",
        }
    }

    /// The bare message without context decoration.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. }
            | Self::Parse { message, .. }
            | Self::Computation { message, .. } => message,
        }
    }

    /// Get the error context.
    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::Validation { context, .. }
            | Self::Parse { context, .. }
            | Self::Computation { context, .. } => context,
        }
    }

    /// Attach or replace the context, keeping the kind and message.
    pub fn with_context(self, context: ErrorContext) -> Self {
        match self {
            Self::Validation { message, .. } => Self::Validation { message, context },
            Self::Parse { message, .. } => Self::Parse { message, context },
            Self::Computation { message, .. } => Self::Computation { message, context },
        }
    }
}

/// Reject non-finite values early with a field-tagged validation error.
pub(crate) fn require_finite(value: f64, operation: &str, field: &str) -> ConversionResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConversionError::validation_with_context(
            format!("{} must be a finite number", field),
            ErrorContext::new(operation).with_field(field),
        ))
    }
}

/// Reject values that are not finite and strictly positive.
pub(crate) fn require_positive(value: f64, operation: &str, field: &str) -> ConversionResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConversionError::validation_with_context(
            format!("{} must be a positive number, got {}", field, value),
            ErrorContext::new(operation).with_field(field),
        ))
    }
}
