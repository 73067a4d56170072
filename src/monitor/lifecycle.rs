//! Creating, renaming and deleting a named monitor
//!
//! The server is the only source of truth: nothing is remembered between
//! calls, and every mutation waits for the server to acknowledge it before
//! returning.

use super::descriptor::MonitorDescriptor;
use crate::{
    atom::{self, Atom},
    error::{Error, BAD_VALUE},
    x::RandrClient,
};
use x11rb::protocol::xproto::Window;

/// What happened to a monitor that was asked to be deleted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DeleteOutcome {
    /// The server removed the monitor
    Deleted,
    /// The server has no monitor with that name
    NotFound {
        /// Raw error code the server answered with
        code: u8,
    },
}

/// Create the monitor described by `monitor` on `root`, replacing any monitor
/// with the same name
pub(crate) fn set_monitor<C: RandrClient>(
    client: &C,
    root: Window,
    monitor: &MonitorDescriptor,
) -> Result<(), Error> {
    log::debug!(
        "setting monitor {} with {} output(s) on root {}",
        monitor.name,
        monitor.n_output(),
        root
    );
    client.set_monitor_checked(root, monitor.clone().into())
}

/// Delete the monitor called `name` from `root`
///
/// The name is interned, so a name the server has never seen gets a fresh
/// atom and the server decides whether a monitor exists for it.
pub(crate) fn delete_monitor<C: RandrClient>(
    client: &C,
    root: Window,
    name: &str,
) -> Result<DeleteOutcome, Error> {
    let atom = atom::intern(client, name)?;
    log::debug!("deleting monitor '{}' ({}) on root {}", name, atom, root);

    match client.delete_monitor_checked(root, atom.raw()) {
        Ok(()) => Ok(DeleteOutcome::Deleted),
        Err(Error::Protocol { code, .. }) if code == BAD_VALUE => {
            Ok(DeleteOutcome::NotFound { code })
        },
        Err(e) => Err(e),
    }
}

/// Give `monitor` the name `name`; takes effect once it is passed to
/// [`set_monitor`]
pub(crate) fn rename(monitor: &mut MonitorDescriptor, name: Atom) {
    log::trace!("renaming monitor {} to {}", monitor.name, name);
    monitor.name = name;
}
