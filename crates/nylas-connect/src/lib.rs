//! Typed access to the `@nylas/connect` browser SDK.
//!
//! The SDK owns the account-linking protocol and the session cache. This crate only
//! validates what crosses the boundary: sessions and state-change events are parsed once
//! into closed Rust types, and JS exceptions become [`Error`]s carrying their message.

mod client;
pub use client::*;
mod config;
pub use config::*;
mod connect;
pub use connect::*;
mod error;
pub use error::*;
mod event;
pub use event::*;
mod session;
pub use session::*;
