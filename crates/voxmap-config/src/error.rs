//! Configuration error types.

/// Errors that can occur when loading, saving, parsing, or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the config file from disk.
    #[error("failed to read config: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to write the config file to disk.
    #[error("failed to write config: {0}")]
    WriteError(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse config: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// Failed to serialize config to RON.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] ron::Error),

    /// A world parameter lies outside its documented range.
    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfBounds {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },

    /// `min_scale` is greater than `max_scale`.
    #[error("min_scale {min} exceeds max_scale {max}")]
    InvertedScale {
        /// The configured minimum scale.
        min: f32,
        /// The configured maximum scale.
        max: f32,
    },

    /// A tile dimension is zero, negative, or not finite.
    #[error("tile unit {0:?} must be finite and positive on every axis")]
    InvalidTileUnit([f32; 3]),

    /// A setting that must be a finite number is NaN or infinite.
    #[error("{field} = {value} must be finite")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },
}
