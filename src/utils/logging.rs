use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// Level comes from `RUST_LOG` (default `warn`). Output goes to stderr so it never
/// mixes with command output on stdout. Calling this more than once is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
