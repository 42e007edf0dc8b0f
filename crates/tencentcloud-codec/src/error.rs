//! Error types for flattening request models.

/// Errors raised while flattening a request model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlattenError {
    /// The top-level value is not a struct or map.
    #[error("top-level value must be a struct or map, found {0}")]
    RootNotObject(&'static str),

    /// A map key is not a string, number or boolean.
    #[error("map keys must be scalars, found {0}")]
    InvalidMapKey(String),

    /// A custom error raised by a `Serialize` implementation.
    #[error("{0}")]
    Custom(String),
}

impl serde::ser::Error for FlattenError {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        Self::Custom(msg.to_string())
    }
}
