//! Error types for argument validation and directive resolution.

use thiserror::Error;

/// Errors raised while validating the arguments of a render call.
///
/// These are reported before any pattern is compiled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("Argument `format` must be a string")]
    Format,

    #[error("Argument `date` must be instance of Date or Unix Timestamp or ISODate String")]
    Date,

    #[error("Argument `date` is not a valid ISODate String: '{input}'")]
    InvalidIsoDate { input: String },

    #[error("Argument `date` does not exist in the local time zone: '{input}'")]
    InvalidLocalTime { input: String },
}

/// Errors raised while resolving a directive against the active locale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error("locale '{locale}' has no meridiem function")]
    MissingMeridiem { locale: String },
}

/// Any failure of a render call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),
}
