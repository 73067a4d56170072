//! Enumeration of screens and of the monitors registered on them

use super::descriptor::MonitorDescriptor;
use crate::{error::Error, x::RandrClient};
use x11rb::protocol::xproto::Window;

/// One root display surface of the connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Screen {
    /// Position of the screen in the connection setup, starting at 1
    pub(crate) number: usize,
    /// Root window of the screen
    pub(crate) root:   Window,
}

/// All screens advertised by the connection, in setup order
pub(crate) fn enumerate_screens<C: RandrClient>(client: &C) -> impl Iterator<Item = Screen> {
    client
        .roots()
        .into_iter()
        .enumerate()
        .map(|(idx, root)| Screen {
            number: idx + 1,
            root,
        })
}

/// The first screen of the connection
pub(crate) fn first_screen<C: RandrClient>(client: &C) -> Option<Screen> {
    enumerate_screens(client).next()
}

/// Monitors currently registered on `root`, in the order the server reports
/// them
///
/// A failed request is returned as an error and is distinct from a screen
/// without monitors.
pub(crate) fn try_monitors_of<C: RandrClient>(
    client: &C,
    root: Window,
) -> Result<Vec<MonitorDescriptor>, Error> {
    client.get_monitors(root)
}

/// Monitors currently registered on `root`; a failed request is logged and
/// treated as no monitors
pub(crate) fn monitors_of<C: RandrClient>(client: &C, root: Window) -> Vec<MonitorDescriptor> {
    try_monitors_of(client, root).unwrap_or_else(|e| {
        log::warn!("failed to get the monitors of root {}: {}", root, e);
        Vec::new()
    })
}

/// The first monitor on `root` that has an output attached
pub(crate) fn first_monitor_with_output<C: RandrClient>(
    client: &C,
    root: Window,
) -> Option<MonitorDescriptor> {
    monitors_of(client, root)
        .into_iter()
        .find(MonitorDescriptor::has_outputs)
}
