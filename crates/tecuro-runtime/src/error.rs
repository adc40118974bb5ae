use std::fmt;

/// Result type for tecuro-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Resource could not be read from disk
    Read {
        resource: String,
        source: std::io::Error,
    },

    /// Server answered with a non-success status
    Status { resource: String, status: u16 },

    /// Request failed before a usable response arrived
    Http {
        resource: String,
        source: reqwest::Error,
    },

    /// Resource body was not the expected JSON
    Parse {
        resource: String,
        source: serde_json::Error,
    },

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Read { resource, source } => {
                write!(f, "Failed to load {}: {}", resource, source)
            }
            Error::Status { resource, status } => {
                write!(f, "Failed to load {}: HTTP status {}", resource, status)
            }
            Error::Http { resource, source } => {
                write!(f, "Failed to load {}: {}", resource, source)
            }
            Error::Parse { resource, source } => {
                write!(f, "Failed to parse {}: {}", resource, source)
            }
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Read { source, .. } => Some(source),
            Error::Http { source, .. } => Some(source),
            Error::Parse { source, .. } => Some(source),
            Error::Io(err) => Some(err),
            Error::Status { .. } | Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Config(format!("invalid data root URL: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = Error::Status {
            resource: "products.json".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "Failed to load products.json: HTTP status 404");
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_parse_error_keeps_source() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = Error::Parse {
            resource: "suits.json".to_string(),
            source: json_err,
        };
        assert!(err.to_string().starts_with("Failed to parse suits.json"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
