//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Visual Search Service
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Object store enumeration failed; aborts the whole request
    #[error("Failed to list objects: {message}")]
    Listing {
        /// Description of the listing failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Object store read failed
    #[error("Object store error: {message}")]
    Store {
        /// Description of the store failure
        message: String,
        /// Whether a retry can be expected to succeed
        transient: bool,
    },

    /// Object bytes could not be decoded as an image
    #[error("Image decode error for '{key}': {message}")]
    Decode {
        /// Key of the object that failed to decode
        key: String,
        /// Decoder message
        message: String,
    },

    /// No candidate images were found under the scope prefix
    #[error("No images found in collection {scope}")]
    EmptyCollection {
        /// The scope prefix that was listed
        scope: String,
    },

    /// Embedding model initialization or inference error
    #[error("Embedding model error: {message}")]
    Model {
        /// Description of the model failure
        message: String,
    },

    /// An embedding had (near-)zero L2 norm and cannot be normalized
    #[error("Degenerate embedding for {subject}: L2 norm {norm:e}")]
    DegenerateVector {
        /// What the vector was computed for (object key or "query")
        subject: String,
        /// The offending norm
        norm: f32,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Basic error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an embedding model error
    pub fn model<S: Into<String>>(message: S) -> Self {
        Self::Model {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Object store error creation methods
impl Error {
    /// Create a listing error
    pub fn listing<S: Into<String>>(message: S) -> Self {
        Self::Listing {
            message: message.into(),
            source: None,
        }
    }

    /// Create a listing error with source
    pub fn listing_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Listing {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a store error that is worth retrying (timeouts, throttling)
    pub fn store_transient<S: Into<String>>(message: S) -> Self {
        Self::Store {
            message: message.into(),
            transient: true,
        }
    }

    /// Create a store error that will not succeed on retry
    pub fn store_permanent<S: Into<String>>(message: S) -> Self {
        Self::Store {
            message: message.into(),
            transient: false,
        }
    }

    /// Create a decode error for an object
    pub fn decode<K: Into<String>, S: Into<String>>(key: K, message: S) -> Self {
        Self::Decode {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create the empty-collection error
    pub fn empty_collection<S: Into<String>>(scope: S) -> Self {
        Self::EmptyCollection {
            scope: scope.into(),
        }
    }

    /// Whether this error is expected to clear up on retry
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Store { transient, .. } => *transient,
            Self::IoSimple { source } => matches!(
                source.kind(),
                std::io::ErrorKind::TimedOut
                    | std::io::ErrorKind::Interrupted
                    | std::io::ErrorKind::WouldBlock
                    | std::io::ErrorKind::ConnectionReset
                    | std::io::ErrorKind::ConnectionAborted
            ),
            _ => false,
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// I/O error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
