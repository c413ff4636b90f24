/// Convenience result type used across pathreveal.
pub type RevealResult<T> = Result<T, RevealError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum RevealError {
    /// Invalid animation configuration, surfaced at handle construction.
    #[error("config error: {0}")]
    Config(String),

    /// A path whose geometry cannot be measured.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Malformed icon input (path data, view box, colors).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors raised by a renderer while painting a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RevealError {
    /// Build a [`RevealError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`RevealError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`RevealError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RevealError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`RevealError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Return `true` for configuration errors.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Return `true` for geometry errors.
    pub fn is_geometry(&self) -> bool {
        matches!(self, Self::Geometry(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
