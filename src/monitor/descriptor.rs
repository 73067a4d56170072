//! The [`MonitorDescriptor`]: a fixed header followed by a list of outputs

use crate::{atom::Atom, error::Error};
use std::mem;
use x11rb::{
    protocol::randr::{MonitorInfo, Output},
    x11_utils::TryParse,
};

/// Size in bytes of the fixed part of a `MONITORINFO` on the wire
pub(crate) const HEADER_SIZE: usize = 24;
/// Size in bytes of a `GetMonitors` reply before the first monitor
pub(crate) const REPLY_HEADER_SIZE: usize = 32;
/// Offset of `nMonitors` in a `GetMonitors` reply
const N_MONITORS_OFFSET: usize = 12;

/// Geometry of a monitor in pixels and millimeters
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Geometry {
    pub(crate) x:         i16,
    pub(crate) y:         i16,
    pub(crate) width:     u16,
    pub(crate) height:    u16,
    pub(crate) width_mm:  u32,
    pub(crate) height_mm: u32,
}

/// A snapshot of one monitor as the server described it
///
/// The list of outputs is owned, so a descriptor stays valid after the reply
/// it was read from is gone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MonitorDescriptor {
    /// Name of the monitor
    pub(crate) name:      Atom,
    /// Whether this is the primary monitor
    pub(crate) primary:   bool,
    /// Whether the server created this monitor for an output by itself
    pub(crate) automatic: bool,
    /// Position and size
    pub(crate) geometry:  Geometry,
    /// Outputs grouped into this monitor
    pub(crate) outputs:   Vec<Output>,
}

impl MonitorDescriptor {
    /// Number of outputs, as the `nOutput` field of the protocol
    pub(crate) fn n_output(&self) -> u16 {
        self.outputs.len() as u16
    }

    /// Whether at least one output is attached
    pub(crate) fn has_outputs(&self) -> bool {
        !self.outputs.is_empty()
    }

    /// Size of this descriptor on the wire, including the list of outputs
    pub(crate) fn wire_size(&self) -> usize {
        HEADER_SIZE + self.outputs.len() * mem::size_of::<Output>()
    }

    /// Copy the first descriptor out of a raw `GetMonitors` buffer and return
    /// it together with the bytes that follow it
    pub(crate) fn parse(bytes: &[u8]) -> Result<(Self, &[u8]), Error> {
        let (info, rest) = MonitorInfo::try_parse(bytes)?;
        Ok((Self::from(info), rest))
    }
}

/// Copy every monitor out of a raw `GetMonitors` reply
///
/// Each descriptor is `HEADER_SIZE` bytes followed by its outputs, so the
/// position of the next one depends on the size of the previous one.
pub(crate) fn parse_monitors_reply(reply: &[u8]) -> Result<Vec<MonitorDescriptor>, Error> {
    let (n_monitors, _) = u32::try_parse(reply.get(N_MONITORS_OFFSET..).unwrap_or_default())?;
    let mut rest = reply.get(REPLY_HEADER_SIZE..).unwrap_or_default();

    // The count comes from the server; never reserve more than the buffer holds
    let mut monitors = Vec::with_capacity((n_monitors as usize).min(rest.len() / HEADER_SIZE));
    for _ in 0..n_monitors {
        let (monitor, next) = MonitorDescriptor::parse(rest)?;
        log::trace!("copied monitor {} ({} bytes)", monitor.name, monitor.wire_size());
        monitors.push(monitor);
        rest = next;
    }

    Ok(monitors)
}

impl From<MonitorInfo> for MonitorDescriptor {
    fn from(info: MonitorInfo) -> Self {
        Self {
            name:      Atom::from(info.name),
            primary:   info.primary,
            automatic: info.automatic,
            geometry:  Geometry {
                x:         info.x,
                y:         info.y,
                width:     info.width,
                height:    info.height,
                width_mm:  info.width_in_millimeters,
                height_mm: info.height_in_millimeters,
            },
            outputs:   info.outputs,
        }
    }
}

impl From<MonitorDescriptor> for MonitorInfo {
    fn from(desc: MonitorDescriptor) -> Self {
        Self {
            name:                  desc.name.raw(),
            primary:               desc.primary,
            automatic:             desc.automatic,
            x:                     desc.geometry.x,
            y:                     desc.geometry.y,
            width:                 desc.geometry.width,
            height:                desc.geometry.height,
            width_in_millimeters:  desc.geometry.width_mm,
            height_in_millimeters: desc.geometry.height_mm,
            outputs:               desc.outputs,
        }
    }
}
