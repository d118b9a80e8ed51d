use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initializes a tracing subscriber filtered by `RUST_LOG`, writing to stderr.
pub fn subscriber() {
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Loads a `.env` file from the working directory or its parents, if there is one.
pub fn load_dotenv() {
    if let Err(err) = dotenvy::dotenv()
        && !err.not_found()
    {
        eprintln!("failed to load .env file: {err}");
    }
}

/// Disables colors when stdout is not a terminal or `NO_COLOR` is set.
pub fn enable_paint() {
    yansi::whenever(yansi::Condition::TTY_AND_COLOR);
}
