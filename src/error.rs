//! Errors raised while constructing shapes or loading settings.

/// An error constructing a shape or loading settings.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A curve was given fewer control points than it needs.
    #[error("a curve needs at least 2 control points, got {0}")]
    TooFewControlPoints(usize),
    /// A numeric setting is out of range.
    #[error("setting `{name}` must be positive, got {value}")]
    InvalidSetting { name: &'static str, value: f64 },
    /// Settings could not be parsed.
    #[cfg(feature = "serde")]
    #[error("failed to parse settings: {0}")]
    Json(#[from] serde_json::Error),
}
