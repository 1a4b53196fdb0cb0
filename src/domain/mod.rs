//! Domain types and the ports the application layer depends on.

pub mod calculation;
pub mod format;
pub mod ports;
pub mod token;
