/// Result alias used across the crate.
pub type DrawResult<T> = Result<T, DrawError>;

/// Errors raised while binding, configuring or running a draw animation.
#[derive(thiserror::Error, Debug)]
pub enum DrawError {
    /// The path argument could not be resolved to a usable render surface.
    #[error("binding error: {0}")]
    Binding(String),

    /// An easing name (after alias resolution) has no curve.
    #[error("unknown easing: {0}")]
    UnknownEasing(String),

    /// A running tween failed between frames.
    #[error("tween failure: {0}")]
    Tween(String),

    /// Options or value trees could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Opaque error from a lower layer.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DrawError {
    /// Build a [`DrawError::Binding`].
    pub fn binding(msg: impl Into<String>) -> Self {
        Self::Binding(msg.into())
    }

    /// Build a [`DrawError::UnknownEasing`].
    pub fn unknown_easing(name: impl Into<String>) -> Self {
        Self::UnknownEasing(name.into())
    }

    /// Build a [`DrawError::Tween`].
    pub fn tween(msg: impl Into<String>) -> Self {
        Self::Tween(msg.into())
    }

    /// Build a [`DrawError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for DrawError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
