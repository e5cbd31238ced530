//! Error types for drishti-io

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// drishti-io error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Container growth could not obtain memory
    #[error("Allocation failed growing to {requested} elements")]
    Allocation {
        /// Capacity the container tried to grow to
        requested: usize,
    },

    /// Caller-supplied destination structure too small
    #[error("Capacity {capacity} too small for {required} elements")]
    Capacity {
        /// Capacity the destination currently has
        capacity: usize,
        /// Capacity the operation needs
        required: usize,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Short or structurally invalid bytes during parsing
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Configuration file could not be parsed
    #[error("Config error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration could not be serialized
    #[error("Config error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Listen address was not a valid `ip:port` pair
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}
