//! Error types for value coercion and serialization.
//!
//! Self-contained `thiserror` enum, no central error crate dependency.
//! Every raised error names the offending source kind (and target kind
//! where one exists) so failures are diagnosable from the message alone.

use thiserror::Error;

/// Errors raised by coercion, aggregation, and serialization.
///
/// The lenient extractor never raises; "no digits" is a sentinel
/// ([`NumericOutcome::NoDigits`](crate::numeric::NumericOutcome)) that
/// callers convert into [`ValueError::NoDigits`] only where a missing
/// number is actually invalid for their purpose.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Text contained no extractable numeric content
    #[error("no digits to extract from {input:?}")]
    NoDigits { input: String },

    /// Numeric value was not-a-number where a real number is required
    #[error("NaN cannot be coerced to number")]
    NotANumber,

    /// Container had nothing to aggregate (empty, null, or absent)
    #[error("cannot extract a number from an empty or missing container ({kind})")]
    EmptyContainer { kind: String },

    /// Target kind tag did not name a coercible type
    #[error("invalid coercion target {spec:?}: expected a type tag such as \"number\" or \"map\"")]
    InvalidTargetSpec { spec: String },

    /// No conversion exists between the two kinds
    #[error("cannot coerce {from} to {to}")]
    UnsupportedCoercion { from: String, to: String },

    /// Text was not a recognizable boolean literal
    #[error("boolean literal must be \"true\" or \"false\", got {input:?}")]
    InvalidBooleanLiteral { input: String },

    /// Value has a fractional part where an integer is required
    #[error("value {value} is not an integer")]
    NonIntegerValue { value: String },

    /// Container aggregated to a non-integral number
    #[error("{kind} aggregates to {value}, which is not an integer")]
    NonIntegerContainer { kind: String, value: String },

    /// Text did not begin with a parseable number
    #[error("no leading number in {input:?}")]
    NoLeadingDigits { input: String },

    /// Null or absent value cannot become a map
    #[error("cannot coerce {kind} to map")]
    NullToMap { kind: String },

    /// Kind has no structural (nested) serialization
    #[error("{kind} cannot appear in a structural serialization")]
    UnsupportedStructuralValue { kind: String },

    /// Operation is not defined for the operand kinds
    #[error("operation '{operation}' not supported for {operands}")]
    UnsupportedOperation { operation: String, operands: String },

    /// Input was not a valid instance of the expected format
    #[error("invalid {format_type}: {input}")]
    ParseError { format_type: String, input: String },
}

impl ValueError {
    /// Create a no-digits error
    pub fn no_digits(input: impl Into<String>) -> Self {
        Self::NoDigits {
            input: input.into(),
        }
    }

    /// Create an empty-container error
    pub fn empty_container(kind: impl Into<String>) -> Self {
        Self::EmptyContainer { kind: kind.into() }
    }

    /// Create an invalid-target-spec error
    pub fn invalid_target_spec(spec: impl Into<String>) -> Self {
        Self::InvalidTargetSpec { spec: spec.into() }
    }

    /// Create an unsupported-coercion error
    pub fn unsupported_coercion(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::UnsupportedCoercion {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create an invalid-boolean-literal error
    pub fn invalid_boolean_literal(input: impl Into<String>) -> Self {
        Self::InvalidBooleanLiteral {
            input: input.into(),
        }
    }

    /// Create a non-integer-value error
    pub fn non_integer_value(value: impl Into<String>) -> Self {
        Self::NonIntegerValue {
            value: value.into(),
        }
    }

    /// Create a non-integer-container error
    pub fn non_integer_container(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self::NonIntegerContainer {
            kind: kind.into(),
            value: value.into(),
        }
    }

    /// Create a no-leading-digits error
    pub fn no_leading_digits(input: impl Into<String>) -> Self {
        Self::NoLeadingDigits {
            input: input.into(),
        }
    }

    /// Create a null-to-map error
    pub fn null_to_map(kind: impl Into<String>) -> Self {
        Self::NullToMap { kind: kind.into() }
    }

    /// Create an unsupported-structural-value error
    pub fn unsupported_structural_value(kind: impl Into<String>) -> Self {
        Self::UnsupportedStructuralValue { kind: kind.into() }
    }

    /// Create an unsupported-operation error
    pub fn unsupported_operation(
        operation: impl Into<String>,
        operands: impl Into<String>,
    ) -> Self {
        Self::UnsupportedOperation {
            operation: operation.into(),
            operands: operands.into(),
        }
    }

    /// Create a parse error
    pub fn parse_error(format_type: impl Into<String>, input: impl Into<String>) -> Self {
        Self::ParseError {
            format_type: format_type.into(),
            input: input.into(),
        }
    }

    /// Get error code for monitoring
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoDigits { .. } => "VALUE_NO_DIGITS",
            Self::NotANumber => "VALUE_NOT_A_NUMBER",
            Self::EmptyContainer { .. } => "VALUE_EMPTY_CONTAINER",
            Self::InvalidTargetSpec { .. } => "VALUE_INVALID_TARGET_SPEC",
            Self::UnsupportedCoercion { .. } => "VALUE_UNSUPPORTED_COERCION",
            Self::InvalidBooleanLiteral { .. } => "VALUE_INVALID_BOOLEAN_LITERAL",
            Self::NonIntegerValue { .. } => "VALUE_NON_INTEGER",
            Self::NonIntegerContainer { .. } => "VALUE_NON_INTEGER_CONTAINER",
            Self::NoLeadingDigits { .. } => "VALUE_NO_LEADING_DIGITS",
            Self::NullToMap { .. } => "VALUE_NULL_TO_MAP",
            Self::UnsupportedStructuralValue { .. } => "VALUE_UNSUPPORTED_STRUCTURAL",
            Self::UnsupportedOperation { .. } => "VALUE_UNSUPPORTED_OPERATION",
            Self::ParseError { .. } => "VALUE_PARSE_ERROR",
        }
    }
}

/// Result type alias for value operations
pub type ValueResult<T> = std::result::Result<T, ValueError>;
