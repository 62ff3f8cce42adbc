use thiserror::Error;

/// Failures a backdrop can hit while mounting or running.
///
/// None of these reach the page: the front-end logs them and leaves the
/// canvas blank.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("2d rendering context unavailable")]
    MissingContext,
    #[error("missing element: {0}")]
    MissingElement(String),
    #[error("frame scheduling failed: {0}")]
    Schedule(String),
}
