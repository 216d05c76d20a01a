use noon_menu::cli;
use noon_menu::errors::{AppError, AppResult};
use tracing_subscriber::EnvFilter;

fn main() -> AppResult<()> {
    init_tracing();

    let rt = tokio::runtime::Runtime::new().map_err(|e| AppError::IoError(e.to_string()))?;
    rt.block_on(cli::cli())
}

/// Logs to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
