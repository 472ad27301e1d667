//! Stream error types.
//!
//! Synchronous stream operations report failure in one of two ways:
//! - by returning `Err(Error)` from the `Result` form (`read_some`, `write_some`)
//! - by writing into an [`ErrorCode`] out-parameter (`read_some_ec`, `write_some_ec`)
//!
//! Asynchronous operations hand a [`Result`] to their completion handler.

use core::fmt;

/// Error reported by a stream operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The peer closed the stream.
    #[error("end of stream")]
    Eof,

    /// The operation was cancelled before it completed.
    #[error("operation aborted")]
    OperationAborted,

    /// The connection was reset by the peer.
    #[error("connection reset")]
    ConnectionReset,

    /// The operation would block and the stream is non-blocking.
    #[error("operation would block")]
    WouldBlock,

    /// An operating system I/O error.
    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(std::io::ErrorKind),

    /// Any other failure, described by a static message.
    #[error("{0}")]
    Other(&'static str),
}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        use std::io::ErrorKind;
        match err.kind() {
            ErrorKind::UnexpectedEof => Error::Eof,
            ErrorKind::ConnectionReset => Error::ConnectionReset,
            ErrorKind::ConnectionAborted => Error::OperationAborted,
            ErrorKind::WouldBlock => Error::WouldBlock,
            kind => Error::Io(kind),
        }
    }
}

#[cfg(feature = "std")]
impl From<Error> for std::io::Error {
    fn from(err: Error) -> Self {
        use std::io::ErrorKind;
        let kind = match err {
            Error::Eof => ErrorKind::UnexpectedEof,
            Error::OperationAborted => ErrorKind::ConnectionAborted,
            Error::ConnectionReset => ErrorKind::ConnectionReset,
            Error::WouldBlock => ErrorKind::WouldBlock,
            Error::Io(kind) => kind,
            Error::Other(_) => ErrorKind::Other,
        };
        std::io::Error::new(kind, err)
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Output error slot for the non-raising form of synchronous operations.
///
/// A stream writes the failure here instead of returning it. The slot is
/// overwritten on every call: implementations clear it on success.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorCode(Option<Error>);

impl ErrorCode {
    /// An empty slot.
    pub const fn new() -> Self {
        Self(None)
    }

    /// Reset to the success state.
    #[inline]
    pub fn clear(&mut self) {
        self.0 = None;
    }

    /// Record a failure.
    #[inline]
    pub fn set(&mut self, err: Error) {
        self.0 = Some(err);
    }

    #[inline]
    pub fn is_err(&self) -> bool {
        self.0.is_some()
    }

    /// The recorded failure, if any.
    #[inline]
    pub fn error(&self) -> Option<&Error> {
        self.0.as_ref()
    }

    /// Take the recorded failure, leaving the slot cleared.
    #[inline]
    pub fn take(&mut self) -> Option<Error> {
        self.0.take()
    }

    /// Store the outcome of a raising operation and return its byte count
    /// (zero on failure).
    ///
    /// This is the usual way to implement the out-parameter form on top of
    /// the `Result` form.
    #[inline]
    pub fn assign(&mut self, result: Result<usize>) -> usize {
        match result {
            Ok(n) => {
                self.clear();
                n
            }
            Err(err) => {
                self.set(err);
                0
            }
        }
    }

    /// Pair a byte count with this slot, turning it back into a `Result`.
    #[inline]
    pub fn into_result(self, bytes_transferred: usize) -> Result<usize> {
        match self.0 {
            None => Ok(bytes_transferred),
            Some(err) => Err(err),
        }
    }
}

impl From<Error> for ErrorCode {
    fn from(err: Error) -> Self {
        Self(Some(err))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            None => f.write_str("success"),
            Some(err) => fmt::Display::fmt(err, f),
        }
    }
}
