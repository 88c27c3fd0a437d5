//! Shared tracing setup for both binaries. Diagnostics go to stderr so stdout
//! only ever carries rendered output.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init(bin: &str, verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| format!("asciifolio={level},{bin}={level}"));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::new(filter))
        .init();
}
