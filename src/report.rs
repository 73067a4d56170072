//! Human readable output of the monitor table and of each operation
//!
//! None of this is meant to be parsed.

use crate::{
    atom,
    error::Error,
    monitor::{catalog, descriptor::MonitorDescriptor, lifecycle::DeleteOutcome},
    version::RandrVersion,
    x::RandrClient,
};
use std::io::{self, Write};

/// Writes reports to an output stream
pub(crate) struct Reporter<W: Write> {
    /// Where the reports go
    out: W,
}

impl Reporter<io::Stdout> {
    /// A [`Reporter`] writing to standard output
    pub(crate) fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    /// Create a new [`Reporter`]
    pub(crate) fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the output stream
    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }

    /// Report the negotiated version
    pub(crate) fn version(&mut self, version: RandrVersion) -> io::Result<()> {
        writeln!(self.out, "RandR version {}", version)
    }

    /// Report the monitors of every screen
    ///
    /// Screens without monitors, or whose monitors could not be queried, are
    /// left out.
    pub(crate) fn monitors<C: RandrClient>(&mut self, client: &C) -> io::Result<()> {
        for screen in catalog::enumerate_screens(client) {
            let monitors = catalog::monitors_of(client, screen.root);
            if monitors.is_empty() {
                continue;
            }

            writeln!(self.out, "Screen {} monitors:", screen.number)?;
            for (idx, monitor) in monitors.iter().enumerate() {
                let name = atom::resolve_name(client, monitor.name).unwrap_or_default();
                self.monitor_line(idx + 1, &name, monitor)?;
            }
        }

        Ok(())
    }

    /// One row of the monitor table
    fn monitor_line(
        &mut self,
        number: usize,
        name: &str,
        monitor: &MonitorDescriptor,
    ) -> io::Result<()> {
        let g = &monitor.geometry;
        writeln!(
            self.out,
            "{}\t{}\t\t{} {} {}\t{}/{}x{}/{}+{}+{}",
            number,
            name,
            u8::from(monitor.primary),
            u8::from(monitor.automatic),
            monitor.n_output(),
            g.width,
            g.width_mm,
            g.height,
            g.height_mm,
            g.x,
            g.y,
        )
    }

    /// Announce that a monitor is about to be set
    pub(crate) fn set_started(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.out, "Send set monitor {}", name)
    }

    /// Report the result of setting a monitor
    pub(crate) fn set_finished(&mut self, name: &str, result: &Result<(), Error>) -> io::Result<()> {
        match result {
            Ok(()) => writeln!(self.out, "Send set monitor {} done!", name),
            Err(e) => match e.code() {
                Some(code) => writeln!(self.out, "Error set monitor {}, code {}", name, code),
                None => writeln!(self.out, "Error set monitor {}: {}", name, e),
            },
        }
    }

    /// Announce that a monitor is about to be deleted
    pub(crate) fn delete_started(&mut self, name: &str, silent: bool) -> io::Result<()> {
        if silent {
            return Ok(());
        }
        writeln!(self.out, "Send del monitor {}", name)
    }

    /// Report the result of deleting a monitor
    ///
    /// `silent` hides failures reported by the server. Success, and failing
    /// to intern the name, are always shown.
    pub(crate) fn delete_finished(
        &mut self,
        name: &str,
        result: &Result<DeleteOutcome, Error>,
        silent: bool,
    ) -> io::Result<()> {
        match result {
            Ok(DeleteOutcome::Deleted) => writeln!(self.out, "Send del monitor {} done!", name),
            Err(Error::AtomIntern(_)) => writeln!(
                self.out,
                "Error del monitor, can't create atom for name {}",
                name
            ),
            _ if silent => Ok(()),
            Ok(DeleteOutcome::NotFound { code }) => {
                writeln!(self.out, "Error del monitor {}, code {}", name, code)
            },
            Err(e) => match e.code() {
                Some(code) => writeln!(self.out, "Error del monitor {}, code {}", name, code),
                None => writeln!(self.out, "Error del monitor {}: {}", name, e),
            },
        }
    }
}
