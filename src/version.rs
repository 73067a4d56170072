//! Negotiation of the `RandR` protocol version

use crate::{error::Error, x::RandrClient};
use std::fmt;
use x11rb::protocol::randr;

/// A `major.minor` version of the `RandR` extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct RandrVersion {
    /// Major version number
    pub(crate) major: u32,
    /// Minor version number
    pub(crate) minor: u32,
}

impl RandrVersion {
    /// The first version with `GetMonitors`, `SetMonitor` and `DeleteMonitor`
    pub(crate) const MINIMUM: Self = Self::new(1, 5);

    /// Create a new [`RandrVersion`]
    pub(crate) const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// The newest version the protocol bindings know how to speak
    pub(crate) fn client() -> Self {
        let (major, minor) = randr::X11_XML_VERSION;
        Self::new(major, minor)
    }

    /// Whether monitor requests can be sent with this version
    pub(crate) fn supports_monitors(self) -> bool {
        self >= Self::MINIMUM
    }
}

impl fmt::Display for RandrVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Ask the server which `RandR` version it speaks and reject anything too old
/// to manage monitors
pub(crate) fn negotiate<C: RandrClient>(client: &C) -> Result<RandrVersion, Error> {
    let wanted = RandrVersion::client();
    log::debug!("querying RandR version, client supports {}", wanted);

    let version = client.query_version(wanted.major, wanted.minor)?;
    if !version.supports_monitors() {
        return Err(Error::UnsupportedVersion(version));
    }

    log::debug!("`randr` extension is up to date: {}", version);
    Ok(version)
}
