//! Interactive application layer for the harvester binary.

pub(crate) mod prompts;
pub(crate) mod runtime;
pub(crate) mod signals;
pub(crate) mod terminal;
