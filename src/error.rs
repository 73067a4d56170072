//! Errors found throughout this crate

use crate::version::RandrVersion;
use thiserror::Error;
use x11rb::errors::{ConnectError, ConnectionError, ParseError, ReplyError};

/// Error code the server answers with when a value is out of range, which is
/// also what `RRDeleteMonitor` answers for a name without a monitor
pub(crate) const BAD_VALUE: u8 = 2;

/// Errors that occur from interacting with the X-Server
#[derive(Debug, Error)]
pub(crate) enum Error {
    /// Failure to connect to the server
    #[error("failed to connect to the X11 server: {0}")]
    Connection(#[from] ConnectError),

    /// The connection broke while sending a request or waiting on a reply
    #[error("the connection to the X11 server broke: {0}")]
    Disconnected(#[from] ConnectionError),

    /// The server answered a request with an error
    #[error("`{request}` failed with X11 error code {code}")]
    Protocol {
        /// Name of the request that failed
        request: &'static str,
        /// Raw error code sent by the server
        code:    u8,
    },

    /// The server refused to hand out an atom for the given name
    #[error("failed to intern an atom for '{0}'")]
    AtomIntern(String),

    /// The server supports a `RandR` version that has no monitor requests
    #[error("RandR version ({0}) is less than {min}", min = RandrVersion::MINIMUM)]
    UnsupportedVersion(RandrVersion),

    /// A monitor descriptor could not be read out of a reply buffer
    #[error("failed to parse a monitor descriptor: {0}")]
    Parse(#[from] ParseError),
}

impl Error {
    /// Convert a [`ReplyError`] of the named request into an [`Error`]
    pub(crate) fn from_reply(request: &'static str, err: ReplyError) -> Self {
        match err {
            ReplyError::ConnectionError(e) => Self::Disconnected(e),
            ReplyError::X11Error(e) => Self::Protocol {
                request,
                code: e.error_code,
            },
        }
    }

    /// The raw error code if this error came from the server
    pub(crate) const fn code(&self) -> Option<u8> {
        match self {
            Self::Protocol { code, .. } => Some(*code),
            _ => None,
        }
    }
}
