pub mod arithmetic;
pub mod config;
pub mod routes;
pub mod server;

pub use arithmetic::{add, multiply, ArithmeticError, Number};
pub use config::{Config, ConfigError, Overrides};
pub use server::{build_app, run_server, ServerHandle};

use tracing_subscriber::EnvFilter;

/// Setup logging. `RUST_LOG` takes precedence over the debug flag.
pub fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
