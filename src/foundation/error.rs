/// Crate-wide result alias.
pub type MasonryResult<T> = Result<T, MasonryError>;

/// Errors produced by the masonry engine and its rendering surfaces.
#[derive(thiserror::Error, Debug)]
pub enum MasonryError {
    /// A container identifier or element handle resolved to no element.
    #[error("not found: {0}")]
    NotFound(String),

    /// An element could not be measured (for example it was detached mid-pass).
    #[error("measurement unavailable: {0}")]
    MeasurementUnavailable(String),

    /// Invalid configuration or input data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Manifest or config (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other failure, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MasonryError {
    /// Build a [`MasonryError::NotFound`].
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Build a [`MasonryError::MeasurementUnavailable`].
    pub fn measurement(msg: impl Into<String>) -> Self {
        Self::MeasurementUnavailable(msg.into())
    }

    /// Build a [`MasonryError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MasonryError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// True when the error only affects a single element's measurement.
    pub fn is_measurement(&self) -> bool {
        matches!(self, Self::MeasurementUnavailable(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
