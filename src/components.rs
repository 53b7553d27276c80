mod error_message;
pub use error_message::*;
mod nav;
pub use nav::*;
mod spinner;
pub use spinner::*;
