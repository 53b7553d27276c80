pub mod components;
pub mod config;
pub mod connection;
pub mod logging;
pub mod page;
pub mod task;
