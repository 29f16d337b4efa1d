//! Error types for environment variable population

/// Errors that can occur while populating a configuration from environment variables.
///
/// Population is fail-fast: the first error aborts the walk and is returned as is.
/// Fields assigned before the failing field keep their new values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The population target is not a record.
    ///
    /// Only reachable through [`dynamic::Shape`](crate::dynamic::Shape); the derive
    /// macro rejects non-struct targets at compile time.
    #[error("Population target must be a record, found {found}")]
    InvalidTarget {
        /// Short description of what was supplied instead
        found: String,
    },

    /// A field marked `required` had no present, non-empty environment entry.
    #[error("Environment variable '{key}' is required but not set")]
    MissingRequired {
        /// Name of the missing environment variable
        key: String,
    },

    /// A present environment value could not be converted to the field's type.
    ///
    /// For list fields `value` holds the offending comma-separated segment and
    /// `type_name` the element type.
    #[error("Failed to parse environment variable '{key}' value '{value}' as {type_name}: {message}")]
    TypeCoercion {
        /// Name of the environment variable being parsed
        key: String,
        /// Raw string that failed to parse
        value: String,
        /// Name of the type parsing was attempted for
        type_name: String,
        /// Error message from the parser
        message: String,
    },

    /// A field's declared type is outside the supported set.
    #[error("Unsupported field type: {type_name}")]
    UnsupportedType {
        /// Declared type name
        type_name: String,
    },
}

impl ConfigError {
    /// Create a missing environment variable error
    #[doc(hidden)]
    pub fn missing(key: impl Into<String>) -> Self {
        Self::MissingRequired { key: key.into() }
    }

    /// Attach an environment variable name to a coercion failure
    #[doc(hidden)]
    pub fn coercion(key: impl Into<String>, err: CoerceError) -> Self {
        Self::TypeCoercion {
            key: key.into(),
            value: err.value,
            type_name: err.type_name,
            message: err.message,
        }
    }

    /// Create an unsupported type error
    #[doc(hidden)]
    pub fn unsupported(type_name: impl Into<String>) -> Self {
        Self::UnsupportedType {
            type_name: type_name.into(),
        }
    }

    /// Create an invalid target error
    #[doc(hidden)]
    pub fn invalid_target(found: impl Into<String>) -> Self {
        Self::InvalidTarget {
            found: found.into(),
        }
    }

    /// Environment variable the error refers to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::MissingRequired { key } | Self::TypeCoercion { key, .. } => Some(key),
            Self::InvalidTarget { .. } | Self::UnsupportedType { .. } => None,
        }
    }
}

/// A coercion failure that is not yet tied to an environment variable.
///
/// Returned by [`FromEnvStr`](crate::FromEnvStr) implementations and turned into
/// [`ConfigError::TypeCoercion`] once the key is known.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot parse '{value}' as {type_name}: {message}")]
pub struct CoerceError {
    /// Raw string that failed to parse
    pub value: String,
    /// Name of the target type
    pub type_name: String,
    /// Error message from the parser
    pub message: String,
}

impl CoerceError {
    /// Create a coercion error for target type `T`
    pub fn new<T: ?Sized>(value: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self {
            value: value.into(),
            type_name: std::any::type_name::<T>().to_string(),
            message: message.to_string(),
        }
    }
}
