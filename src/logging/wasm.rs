use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

pub struct Config {
	level: LevelFilter,
	prefer_target: bool,
	ignore: Vec<&'static str>,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			level: match cfg!(debug_assertions) {
				true => LevelFilter::Debug,
				false => LevelFilter::Info,
			},
			prefer_target: false,
			ignore: Vec::new(),
		}
	}
}

impl Config {
	/// Label lines with the log target instead of the module path.
	pub fn prefer_target(mut self) -> Self {
		self.prefer_target = true;
		self
	}

	pub fn with_level(mut self, level: LevelFilter) -> Self {
		self.level = level;
		self
	}

	/// Drops records whose target starts with `prefix`.
	pub fn ignore(mut self, prefix: &'static str) -> Self {
		self.ignore.push(prefix);
		self
	}

	fn accepts(&self, metadata: &Metadata) -> bool {
		metadata.level() <= self.level && !self.ignore.iter().any(|prefix| metadata.target().starts_with(prefix))
	}

	fn format(&self, level: Level, target: &str, module_path: Option<&str>, args: &std::fmt::Arguments) -> String {
		let source = match (self.prefer_target, module_path) {
			(false, Some(module_path)) => module_path,
			_ => target,
		};
		// Pads the level names so that they line up in the console.
		format!("[{level:>5}] {source}: {args}")
	}
}

struct ConsoleLogger(Config);

impl Log for ConsoleLogger {
	fn enabled(&self, metadata: &Metadata) -> bool {
		self.0.accepts(metadata)
	}

	fn log(&self, record: &Record) {
		if !self.enabled(record.metadata()) {
			return;
		}
		let line = self.0.format(record.level(), record.target(), record.module_path(), record.args());
		let line = JsValue::from_str(&line);
		match record.level() {
			Level::Error => web_sys::console::error_1(&line),
			Level::Warn => web_sys::console::warn_1(&line),
			Level::Info => web_sys::console::info_1(&line),
			Level::Debug => web_sys::console::log_1(&line),
			Level::Trace => web_sys::console::debug_1(&line),
		}
	}

	fn flush(&self) {}
}

/// Routes the `log` facade to the browser console. Only the first call has any effect.
pub fn init(config: Config) {
	let level = config.level;
	if log::set_boxed_logger(Box::new(ConsoleLogger(config))).is_ok() {
		log::set_max_level(level);
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn prefers_target() {
		let config = Config::default().prefer_target();
		let line = config.format(Level::Info, "integration", Some("nylas_auth0_sample::page"), &format_args!("ready"));
		assert_eq!(line, "[ INFO] integration: ready");
	}

	#[test]
	fn module_path_by_default() {
		let config = Config::default();
		let line = config.format(Level::Error, "integration", Some("nylas_auth0_sample::page"), &format_args!("boom"));
		assert_eq!(line, "[ERROR] nylas_auth0_sample::page: boom");
	}

	#[test]
	fn ignored_targets_and_levels() {
		let config = Config::default().with_level(LevelFilter::Info).ignore("yew");
		let accepts = |level, target| config.accepts(&Metadata::builder().level(level).target(target).build());
		assert!(accepts(Level::Info, "probe"));
		assert!(!accepts(Level::Debug, "probe"));
		assert!(!accepts(Level::Error, "yew::scheduler"));
	}
}
