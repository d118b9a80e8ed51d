#[macro_use]
extern crate tracing;

mod wallet;
pub use wallet::{MockWallet, selector_of};

/// Initializes tracing for tests.
pub fn init_tracing() {
    let _ = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
