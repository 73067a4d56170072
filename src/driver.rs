//! The demonstration run: negotiate, list, delete, rename, set, list,
//! delete, list

use crate::{
    atom,
    error::Error,
    monitor::{catalog, lifecycle},
    report::Reporter,
    version,
    vmon_error,
    vmon_info,
    x::RandrClient,
};
use std::io::{self, Write};
use x11rb::protocol::xproto::Window;

/// How a run ended; maps onto the process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Status {
    /// Every step ran, whether or not the server accepted each request
    Completed,
    /// The `RandR` version could not be queried
    VersionQueryFailed,
    /// The server's `RandR` version has no monitor requests
    VersionTooOld,
}

impl Status {
    /// Exit code of the process
    pub(crate) const fn code(self) -> i32 {
        match self {
            Self::Completed => 0,
            Self::VersionQueryFailed => 1,
            Self::VersionTooOld => 2,
        }
    }
}

/// Run the whole sequence for the monitor called `name`
pub(crate) fn run<C, W>(client: &C, reporter: &mut Reporter<W>, name: &str) -> io::Result<Status>
where
    C: RandrClient,
    W: Write,
{
    let version = match version::negotiate(client) {
        Ok(v) => v,
        Err(e @ Error::UnsupportedVersion(_)) => {
            vmon_error!("{}", e);
            return Ok(Status::VersionTooOld);
        },
        Err(e) => {
            vmon_error!("can't query RandR version: {}", e);
            return Ok(Status::VersionQueryFailed);
        },
    };

    reporter.version(version)?;
    reporter.monitors(client)?;

    let screen = match catalog::first_screen(client) {
        Some(s) => s,
        None => {
            vmon_error!("the display has no screens");
            return Ok(Status::Completed);
        },
    };
    let monitor = catalog::first_monitor_with_output(client, screen.root);

    // Clear out a monitor left behind by an earlier run
    delete(client, reporter, screen.root, name, true)?;

    match monitor {
        Some(mut monitor) => match atom::intern(client, name) {
            Ok(new_name) => {
                lifecycle::rename(&mut monitor, new_name);

                let shown = atom::resolve_name(client, monitor.name).unwrap_or_default();
                reporter.set_started(&shown)?;
                let result = lifecycle::set_monitor(client, screen.root, &monitor);
                reporter.set_finished(&shown, &result)?;
            },
            Err(e) => vmon_error!("not renaming the monitor: {}", e),
        },
        None => vmon_info!(
            "screen {} has no monitor with an output, nothing to rename",
            screen.number
        ),
    }

    reporter.monitors(client)?;
    delete(client, reporter, screen.root, name, false)?;
    reporter.monitors(client)?;

    Ok(Status::Completed)
}

/// Delete the monitor called `name` and report it
fn delete<C, W>(
    client: &C,
    reporter: &mut Reporter<W>,
    root: Window,
    name: &str,
    silent: bool,
) -> io::Result<()>
where
    C: RandrClient,
    W: Write,
{
    reporter.delete_started(name, silent)?;
    let result = lifecycle::delete_monitor(client, root, name);
    reporter.delete_finished(name, &result, silent)
}
