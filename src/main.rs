#[cfg(target_family = "wasm")]
fn main() {
	use nylas_auth0_sample::{logging, page};
	logging::wasm::init(logging::wasm::Config::default().prefer_target());
	yew::Renderer::<page::Root>::new().render();
}

#[cfg(not(target_family = "wasm"))]
fn main() {
	eprintln!("{} runs in the browser; build it for wasm32-unknown-unknown.", env!("CARGO_PKG_NAME"));
}
