use tracing_subscriber::EnvFilter;

/// Install the global `fmt` subscriber.
///
/// Honours `RUST_LOG`, defaulting to `info`. `json` switches to structured
/// JSON lines for log shipping.
pub fn init_tracing(json: bool) -> eyre::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| eyre::eyre!("failed to install tracing subscriber: {e}"))
}
