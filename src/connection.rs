//! The connection flow: a single-owner view model for the linked account, the controller
//! that drives the connection client, the callback handshake and the API probes.

mod callback;
pub use callback::*;
mod claims;
pub use claims::*;
mod controller;
pub use controller::*;
mod failure;
pub use failure::*;
mod hook;
pub use hook::*;
mod navigate;
pub use navigate::*;
mod probe;
pub use probe::*;
mod state;
pub use state::*;

#[cfg(test)]
mod testing;
