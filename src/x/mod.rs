//! Interaction with the X-Server
//!
//! Every operation on monitors goes through [`RandrClient`], which is the
//! request/reply/error contract of the display connection. The real
//! connection lives in [`xconnection`]; tests use an in-memory server.

pub(crate) mod xconnection;

#[cfg(test)]
pub(crate) mod mock;

use crate::{error::Error, monitor::descriptor::MonitorDescriptor, version::RandrVersion};
use x11rb::protocol::{
    randr::MonitorInfo,
    xproto::{Atom, Window},
};

/// The requests this crate needs from a display connection
///
/// Mutating requests are *checked*: the call returns only after the server
/// has accepted or rejected the request.
pub(crate) trait RandrClient {
    /// Root windows of all screens, in the order the server advertises them
    fn roots(&self) -> Vec<Window>;

    /// Send `RRQueryVersion` with the version the client supports
    fn query_version(&self, major: u32, minor: u32) -> Result<RandrVersion, Error>;

    /// Send `RRGetMonitors` for `root` without forcing a hardware poll and copy
    /// every monitor out of the reply
    fn get_monitors(&self, root: Window) -> Result<Vec<MonitorDescriptor>, Error>;

    /// Send `RRSetMonitor` and wait for the server to acknowledge it
    fn set_monitor_checked(&self, root: Window, monitor: MonitorInfo) -> Result<(), Error>;

    /// Send `RRDeleteMonitor` and wait for the server to acknowledge it
    fn delete_monitor_checked(&self, root: Window, name: Atom) -> Result<(), Error>;

    /// Send `GetAtomName`, returning the raw bytes of the name
    fn get_atom_name(&self, atom: Atom) -> Result<Vec<u8>, Error>;

    /// Send `InternAtom`, creating the atom if it does not exist yet
    fn intern_atom(&self, name: &str) -> Result<Atom, Error>;
}
