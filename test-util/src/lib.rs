/// Common initialization for test binaries; call this from a `#[ctor::ctor]` function so that it
/// runs once at load time.
pub fn ctor_overall_init() {
    // Ignore errors, since there may not be a .env file.
    let _ = dotenvy::dotenv();

    // It's necessary to specify EnvFilter::from_default_env in order to use RUST_LOG env var.
    // try_init, since more than one test binary in the same process may attempt this.
    let _ = tracing_subscriber::fmt()
        .with_target(true)
        .with_line_number(true)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .compact()
        .try_init();
}
