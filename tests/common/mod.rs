
pub use schema::*;

/// Installs a test subscriber once; set `RUST_LOG=sleet_core=debug` to see
/// generated statements.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
