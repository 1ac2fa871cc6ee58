use thiserror::Error;

/// Errors surfaced while binding raw query-string values onto a filter.
///
/// Unknown columns and inapplicable filter fields are never errors; they are
/// silently skipped so that one filter type can be reused across entity
/// shapes. Only genuine value/parse mismatches reach the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The raw value matched neither a variant name (case-insensitive) nor a
    /// variant ordinal of the target enumeration.
    #[error("value '{value}' cannot be converted to enumeration {enum_name}")]
    InvalidEnumValue {
        value: String,
        enum_name: &'static str,
    },
}
