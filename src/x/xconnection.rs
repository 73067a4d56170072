//! The connection to the X-Server

use super::RandrClient;
use crate::{
    error::Error,
    monitor::descriptor::{self, MonitorDescriptor},
    version::RandrVersion,
};
use x11rb::{
    connection::{Connection, RequestConnection},
    protocol::{
        randr::{self, ConnectionExt as _, MonitorInfo},
        xproto::{Atom, ConnectionExt as _, Window},
    },
    rust_connection::RustConnection,
};

/// The main connection to the X-Server
pub(crate) struct XConnection {
    /// Connection to the X-Server
    conn:       RustConnection,
    /// Screen number of the display that was connected to
    screen_num: usize,
}

impl XConnection {
    /// Connect to `display`, or to `$DISPLAY` when none is given
    pub(crate) fn connect(display: Option<&str>) -> Result<Self, Error> {
        log::trace!("connecting to display {:?}", display);
        let (conn, screen_num) = RustConnection::connect(display)?;

        if conn
            .extension_information(randr::X11_EXTENSION_NAME)?
            .is_none()
        {
            log::warn!("the `{}` extension is not advertised", randr::X11_EXTENSION_NAME);
        }

        Ok(Self { conn, screen_num })
    }

    // ========================= Accessor ========================= [[[

    /// Return the connection to the X-Server
    pub(crate) const fn aux(&self) -> &RustConnection {
        &self.conn
    }

    /// Return the default screen number
    pub(crate) const fn screen(&self) -> usize {
        self.screen_num
    }

    // ]]] === Accessor ===
}

impl RandrClient for XConnection {
    fn roots(&self) -> Vec<Window> {
        self.aux().setup().roots.iter().map(|s| s.root).collect()
    }

    fn query_version(&self, major: u32, minor: u32) -> Result<RandrVersion, Error> {
        log::debug!("requesting a `QueryVersionReply` reply");
        let reply = self
            .aux()
            .randr_query_version(major, minor)?
            .reply()
            .map_err(|e| Error::from_reply("RRQueryVersion", e))?;

        Ok(RandrVersion::new(reply.major_version, reply.minor_version))
    }

    fn get_monitors(&self, root: Window) -> Result<Vec<MonitorDescriptor>, Error> {
        log::debug!("requesting a `GetMonitorsReply` reply for root {}", root);
        let reply = self
            .aux()
            .randr_get_monitors(root, false)?
            .raw_reply()
            .map_err(|e| Error::from_reply("RRGetMonitors", e))?;

        descriptor::parse_monitors_reply(reply.as_ref())
    }

    fn set_monitor_checked(&self, root: Window, monitor: MonitorInfo) -> Result<(), Error> {
        log::debug!("setting monitor with atom {} on root {}", monitor.name, root);
        self.aux()
            .randr_set_monitor(root, monitor)?
            .check()
            .map_err(|e| Error::from_reply("RRSetMonitor", e))
    }

    fn delete_monitor_checked(&self, root: Window, name: Atom) -> Result<(), Error> {
        log::debug!("deleting monitor with atom {} on root {}", name, root);
        self.aux()
            .randr_delete_monitor(root, name)?
            .check()
            .map_err(|e| Error::from_reply("RRDeleteMonitor", e))
    }

    fn get_atom_name(&self, atom: Atom) -> Result<Vec<u8>, Error> {
        log::debug!("requesting a `GetAtomNameReply` reply");
        let reply = self
            .aux()
            .get_atom_name(atom)?
            .reply()
            .map_err(|e| Error::from_reply("GetAtomName", e))?;

        Ok(reply.name)
    }

    fn intern_atom(&self, name: &str) -> Result<Atom, Error> {
        log::debug!("interning an atom: {}", name);
        let reply = self
            .aux()
            .intern_atom(false, name.as_bytes())?
            .reply()
            .map_err(|e| Error::from_reply("InternAtom", e))?;

        Ok(reply.atom)
    }
}
