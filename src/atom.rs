//! Mapping between monitor names and the [`Atom`]s the server uses for them

use crate::{error::Error, x::RandrClient};
use std::fmt;
use x11rb::protocol::xproto;

/// An [`Atom`] is a unique ID corresponding to a string name. It is interned
/// by the server and only means something on the connection it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Atom(xproto::Atom);

impl Atom {
    /// Return the raw protocol value
    pub(crate) const fn raw(self) -> xproto::Atom {
        self.0
    }
}

impl From<xproto::Atom> for Atom {
    fn from(raw: xproto::Atom) -> Self {
        Self(raw)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Look up the name of `atom`
///
/// A failed request and an empty name both yield `None`.
pub(crate) fn resolve_name<C: RandrClient>(client: &C, atom: Atom) -> Option<String> {
    match client.get_atom_name(atom.raw()) {
        Ok(name) if name.is_empty() => None,
        Ok(name) => Some(String::from_utf8_lossy(&name).into_owned()),
        Err(e) => {
            log::debug!("failed to get the name of atom {}: {}", atom, e);
            None
        },
    }
}

/// Intern `name`, creating the [`Atom`] if the server has not seen it before
pub(crate) fn intern<C: RandrClient>(client: &C, name: &str) -> Result<Atom, Error> {
    client.intern_atom(name).map(Atom::from).map_err(|e| {
        log::debug!("failed to intern '{}': {}", name, e);
        Error::AtomIntern(name.to_owned())
    })
}
