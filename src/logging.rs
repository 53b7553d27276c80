pub use log::Level;

pub mod wasm;
