pub(crate) type DynError = Box<dyn std::error::Error + Send + Sync>;

/// The Errors that may occur when loading the catalog.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    status: Option<u16>,
    source: Option<DynError>,
}

/// Types of errors that make up an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required configuration value, such as the base URL, is missing.
    Config,
    /// The backend answered with a status outside of the success range.
    Backend,
    /// The response body could not be parsed as the expected JSON.
    Parse,
    /// The error is associated with an underlying transport error.
    Io,
}

impl Error {
    /// Creates a new [`Error`] based on the [`ErrorKind`] and message to describe the error.
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        Self {
            kind,
            message: Some(message.into()),
            status: None,
            source: None,
        }
    }

    /// Wraps an existing error as the source of [`Error`].
    pub fn wrap<E>(kind: ErrorKind, source: E) -> Self
    where
        E: Into<DynError>,
    {
        Self {
            kind,
            message: None,
            status: None,
            source: Some(source.into()),
        }
    }

    /// Creates an [`ErrorKind::Backend`] error from the failed status and the (possibly empty)
    /// response body.
    pub fn backend<S: AsRef<str>>(status: u16, body: S) -> Self {
        let body = body.as_ref().trim();
        let message = if body.is_empty() {
            format!("backend responded with status {status}")
        } else {
            format!("backend responded with status {status}. {body}")
        };

        Self {
            kind: ErrorKind::Backend,
            message: Some(message),
            status: Some(status),
            source: None,
        }
    }

    /// Returns the kind of error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The HTTP status code when this is an [`ErrorKind::Backend`] error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        self.status
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ErrorKind::Config => f.write_str("Configuration error")?,
            ErrorKind::Backend => f.write_str("Backend error")?,
            ErrorKind::Parse => f.write_str("Parse error")?,
            ErrorKind::Io => f.write_str("IO error")?,
        };

        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }

        if let Some(cause) = &self.source {
            write!(f, ": caused by {cause}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| &**e as _)
    }
}
