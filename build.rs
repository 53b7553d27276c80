// Configuration is compiled in through `option_env!`; rebuild when any of it changes.
static CONFIG_VARS: [&str; 6] = [
	"NYLAS_CLIENT_ID",
	"NYLAS_REDIRECT_URI",
	"NYLAS_API_URL",
	"AUTH0_DOMAIN",
	"AUTH0_CLIENT_ID",
	"AUTH0_AUDIENCE",
];

fn main() {
	println!("cargo:rerun-if-changed=build.rs");
	for var in CONFIG_VARS {
		println!("cargo:rerun-if-env-changed={var}");
	}
}
