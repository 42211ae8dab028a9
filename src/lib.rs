//! Library support for the dynamic bonding curve admin tools.
//!
//! The binaries under `src/bin` stay thin: everything that parses, encodes
//! or assembles lives here so it can be unit tested without touching the
//! network.

pub mod authorization;
pub mod idl;
pub mod keypair;
pub mod params;
pub mod settings;
