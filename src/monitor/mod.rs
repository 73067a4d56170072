//! Representation of the `RandR` monitors registered on the X-Server, and
//! the requests that change them

pub(crate) mod catalog;
pub(crate) mod descriptor;
pub(crate) mod lifecycle;
