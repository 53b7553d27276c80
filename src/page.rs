mod app;
pub use app::*;

mod callback;
pub use callback::NylasCallback;

mod home;
pub use home::Home;

mod integration;
pub use integration::Integration;

mod not_found;
pub use not_found::NotFound;
