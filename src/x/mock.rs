//! An in-memory X-Server that answers the requests of [`RandrClient`]
//!
//! Monitors come in two kinds, like on a real server: automatic monitors
//! which exist for every active output, and monitors created with
//! `RRSetMonitor`. An automatic monitor is hidden while a set monitor uses
//! one of its outputs.

use super::RandrClient;
use crate::{
    error::{Error, BAD_VALUE},
    monitor::descriptor::{self, MonitorDescriptor, REPLY_HEADER_SIZE},
    version::RandrVersion,
};
use std::{cell::RefCell, collections::HashMap};
use x11rb::{
    protocol::{
        randr::{MonitorInfo, Output},
        xproto::{Atom, Window},
    },
    x11_utils::Serialize,
};

/// Error code for a request to an extension the server does not have
const BAD_REQUEST: u8 = 1;
/// Error code the server answers with when an atom is unknown
pub(crate) const BAD_ATOM: u8 = 5;

/// Encode `monitors` the way the server sends a `GetMonitors` reply
pub(crate) fn monitors_reply(monitors: &[MonitorInfo]) -> Vec<u8> {
    let n_outputs: usize = monitors.iter().map(|m| m.outputs.len()).sum();
    let body = monitors
        .iter()
        .flat_map(|m| m.serialize())
        .collect::<Vec<u8>>();

    let mut reply = vec![0_u8; REPLY_HEADER_SIZE];
    reply[0] = 1;
    reply[4..8].copy_from_slice(&((body.len() / 4) as u32).to_ne_bytes());
    reply[12..16].copy_from_slice(&(monitors.len() as u32).to_ne_bytes());
    reply[16..20].copy_from_slice(&(n_outputs as u32).to_ne_bytes());
    reply.extend(body);
    reply
}

/// Mutable state of the [`MockServer`]
#[derive(Debug, Default)]
struct State {
    /// Names of interned atoms; atom `n` is stored at index `n - 1`
    atoms:     Vec<String>,
    /// Monitors derived from outputs, per root
    automatic: HashMap<Window, Vec<MonitorInfo>>,
    /// Monitors created by clients, per root
    user:      HashMap<Window, Vec<MonitorInfo>>,
    /// Names of the requests received, in order
    requests:  Vec<&'static str>,
}

/// A fake display server
#[derive(Debug)]
pub(crate) struct MockServer {
    /// Reply to `RRQueryVersion`, or `None` if the request fails
    version:         Option<RandrVersion>,
    /// Root windows of the screens
    roots:           Vec<Window>,
    /// Whether `RRGetMonitors` fails
    fail_monitors:   bool,
    /// Whether `InternAtom` fails
    fail_intern:     bool,
    /// Whether `GetAtomName` fails
    fail_atom_names: bool,
    /// Server state
    state:           RefCell<State>,
}

/// Builder for a [`MockServer`]
#[derive(Debug)]
pub(crate) struct MockServerBuilder {
    /// The server being built
    server: MockServer,
    /// Automatic monitors to add, as `(screen, name, outputs, size, offset)`
    pending: Vec<(usize, String, Vec<Output>, [u16; 2], [i16; 2])>,
}

impl MockServer {
    /// Start building a server with one screen and `RandR` 1.6
    pub(crate) fn builder() -> MockServerBuilder {
        MockServerBuilder {
            server:  Self {
                version:         Some(RandrVersion::new(1, 6)),
                roots:           vec![0x100],
                fail_monitors:   false,
                fail_intern:     false,
                fail_atom_names: false,
                state:           RefCell::default(),
            },
            pending: Vec::new(),
        }
    }

    /// Names of all requests received so far
    pub(crate) fn requests(&self) -> Vec<&'static str> {
        self.state.borrow().requests.clone()
    }

    /// Look up an atom by name without interning it
    pub(crate) fn atom(&self, name: &str) -> Option<Atom> {
        self.state
            .borrow()
            .atoms
            .iter()
            .position(|n| n == name)
            .map(|idx| idx as Atom + 1)
    }

    /// Record a request
    fn log(&self, request: &'static str) {
        self.state.borrow_mut().requests.push(request);
    }

    /// Intern without logging a request
    fn intern(&self, name: &str) -> Atom {
        if let Some(atom) = self.atom(name) {
            return atom;
        }
        let mut state = self.state.borrow_mut();
        state.atoms.push(name.to_owned());
        state.atoms.len() as Atom
    }

    /// Whether `atom` was handed out by this server
    fn valid_atom(&self, atom: Atom) -> bool {
        atom != 0 && (atom as usize) <= self.state.borrow().atoms.len()
    }

    /// Whether `root` is one of the screens
    fn valid_root(&self, root: Window) -> bool {
        self.roots.contains(&root)
    }
}

impl MockServerBuilder {
    /// Reply to `RRQueryVersion` with `major.minor`
    pub(crate) fn version(mut self, major: u32, minor: u32) -> Self {
        self.server.version = Some(RandrVersion::new(major, minor));
        self
    }

    /// Fail `RRQueryVersion`, as a server without `RandR` would
    pub(crate) fn without_randr(mut self) -> Self {
        self.server.version = None;
        self
    }

    /// Use the given root windows as screens
    pub(crate) fn roots(mut self, roots: &[Window]) -> Self {
        self.server.roots = roots.to_vec();
        self
    }

    /// Add an automatic monitor on the screen at `screen`
    pub(crate) fn output_monitor(
        mut self,
        screen: usize,
        name: &str,
        outputs: &[Output],
        size: [u16; 2],
        offset: [i16; 2],
    ) -> Self {
        self.pending
            .push((screen, name.to_owned(), outputs.to_vec(), size, offset));
        self
    }

    /// Fail every `RRGetMonitors`
    pub(crate) fn failing_monitors(mut self) -> Self {
        self.server.fail_monitors = true;
        self
    }

    /// Fail every `InternAtom`
    pub(crate) fn failing_intern(mut self) -> Self {
        self.server.fail_intern = true;
        self
    }

    /// Fail every `GetAtomName`
    pub(crate) fn failing_atom_names(mut self) -> Self {
        self.server.fail_atom_names = true;
        self
    }

    /// Finish the server
    pub(crate) fn build(self) -> MockServer {
        let server = self.server;
        for (screen, name, outputs, [width, height], [x, y]) in self.pending {
            let monitor = MonitorInfo {
                name: server.intern(&name),
                primary: screen == 0 && server.state.borrow().automatic.is_empty(),
                automatic: true,
                x,
                y,
                width,
                height,
                width_in_millimeters: u32::from(width) / 4,
                height_in_millimeters: u32::from(height) / 4,
                outputs,
            };
            let root = server.roots[screen];
            server
                .state
                .borrow_mut()
                .automatic
                .entry(root)
                .or_default()
                .push(monitor);
        }
        server
    }
}

impl RandrClient for MockServer {
    fn roots(&self) -> Vec<Window> {
        self.roots.clone()
    }

    fn query_version(&self, _major: u32, _minor: u32) -> Result<RandrVersion, Error> {
        self.log("RRQueryVersion");
        self.version.ok_or(Error::Protocol {
            request: "RRQueryVersion",
            code:    BAD_REQUEST,
        })
    }

    fn get_monitors(&self, root: Window) -> Result<Vec<MonitorDescriptor>, Error> {
        self.log("RRGetMonitors");
        if self.fail_monitors {
            return Err(Error::Protocol {
                request: "RRGetMonitors",
                code:    BAD_REQUEST,
            });
        }

        let state = self.state.borrow();
        let user = state.user.get(&root).cloned().unwrap_or_default();
        let automatic = state
            .automatic
            .get(&root)
            .into_iter()
            .flatten()
            .filter(|auto| {
                !user
                    .iter()
                    .any(|m| m.outputs.iter().any(|o| auto.outputs.contains(o)))
            })
            .cloned();

        let monitors = automatic.chain(user.iter().cloned()).collect::<Vec<_>>();
        descriptor::parse_monitors_reply(&monitors_reply(&monitors))
    }

    fn set_monitor_checked(&self, root: Window, mut monitor: MonitorInfo) -> Result<(), Error> {
        self.log("RRSetMonitor");
        if !self.valid_atom(monitor.name) {
            return Err(Error::Protocol {
                request: "RRSetMonitor",
                code:    BAD_ATOM,
            });
        }
        if !self.valid_root(root) {
            return Err(Error::Protocol {
                request: "RRSetMonitor",
                code:    BAD_VALUE,
            });
        }

        monitor.automatic = false;
        let mut state = self.state.borrow_mut();
        let user = state.user.entry(root).or_default();
        if let Some(existing) = user.iter_mut().find(|m| m.name == monitor.name) {
            *existing = monitor;
        } else {
            user.push(monitor);
        }

        Ok(())
    }

    fn delete_monitor_checked(&self, root: Window, name: Atom) -> Result<(), Error> {
        self.log("RRDeleteMonitor");
        if !self.valid_atom(name) {
            return Err(Error::Protocol {
                request: "RRDeleteMonitor",
                code:    BAD_ATOM,
            });
        }

        let mut state = self.state.borrow_mut();
        let user = state.user.entry(root).or_default();
        match user.iter().position(|m| m.name == name) {
            Some(idx) => {
                user.remove(idx);
                Ok(())
            },
            None => Err(Error::Protocol {
                request: "RRDeleteMonitor",
                code:    BAD_VALUE,
            }),
        }
    }

    fn get_atom_name(&self, atom: Atom) -> Result<Vec<u8>, Error> {
        self.log("GetAtomName");
        if self.fail_atom_names || !self.valid_atom(atom) {
            return Err(Error::Protocol {
                request: "GetAtomName",
                code:    BAD_ATOM,
            });
        }

        Ok(self.state.borrow().atoms[atom as usize - 1]
            .as_bytes()
            .to_vec())
    }

    fn intern_atom(&self, name: &str) -> Result<Atom, Error> {
        self.log("InternAtom");
        if self.fail_intern {
            return Err(Error::AtomIntern(name.to_owned()));
        }

        Ok(self.intern(name))
    }
}
