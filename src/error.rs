/// An error that can occur while loading inputs or benchmarking an engine.
///
/// The kind of an error is available via [`Error::kind`]. In per-pattern
/// benchmarking, errors of kind [`ErrorKind::Compile`] and
/// [`ErrorKind::Scan`] are not fatal: the runner records a zeroed result for
/// the engine and moves on. Every other kind is meant to end the run.
///
/// This implements `std::error::Error`. When the error was caused by an I/O
/// failure, the underlying `std::io::Error` is available via `source`.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    msg: String,
    source: Option<std::io::Error>,
}

/// The kind of an [`Error`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A pattern failed to compile, or the engine failed to allocate the
    /// resources it needs before scanning.
    Compile,
    /// An engine failed while scanning the haystack.
    Scan,
    /// The harness was given input it can't work with, such as a zero repeat
    /// count or an empty pattern set.
    InvalidInput,
    /// A file could not be read.
    Io,
}

impl Error {
    pub(crate) fn compile(engine: &str, msg: impl std::fmt::Display) -> Error {
        Error {
            kind: ErrorKind::Compile,
            msg: format!("{engine}: failed to compile: {msg}"),
            source: None,
        }
    }

    pub(crate) fn scan(engine: &str, msg: impl std::fmt::Display) -> Error {
        Error {
            kind: ErrorKind::Scan,
            msg: format!("{engine}: failed to scan haystack: {msg}"),
            source: None,
        }
    }

    pub(crate) fn invalid_input(msg: impl Into<String>) -> Error {
        Error { kind: ErrorKind::InvalidInput, msg: msg.into(), source: None }
    }

    pub(crate) fn io(path: &std::path::Path, err: std::io::Error) -> Error {
        Error {
            kind: ErrorKind::Io,
            msg: format!("failed to read {}", path.display()),
            source: Some(err),
        }
    }

    /// Create a compile error on behalf of an engine implemented outside of
    /// this crate.
    pub fn engine_compile(engine: &str, msg: impl std::fmt::Display) -> Error {
        Error::compile(engine, msg)
    }

    /// Create a scan error on behalf of an engine implemented outside of
    /// this crate.
    pub fn engine_scan(engine: &str, msg: impl std::fmt::Display) -> Error {
        Error::scan(engine, msg)
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns true if this error only concerns a single engine invocation.
    pub fn is_engine_failure(&self) -> bool {
        matches!(self.kind, ErrorKind::Compile | ErrorKind::Scan)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.source {
            Some(ref err) => Some(err),
            None => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.msg)
    }
}
