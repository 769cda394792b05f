mod certgen_args;
mod cmd;
mod service_config_args;
mod session_driver;

pub use crate::{
    certgen_args::CertgenArgs,
    cmd::{CertificateIdArgs, Cmd, Flow, SetCmd},
    service_config_args::{Network, ServiceConfigArgs, DEFAULT_CANISTER_ID, IC_HOST, LOCAL_HOST},
    session_driver::SessionDriver,
};
pub use anyhow::{Error, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // Ignore errors, since there may not be a .env file.
    let _ = dotenvy::dotenv();

    // It's necessary to specify EnvFilter::from_default_env in order to use RUST_LOG env var.
    // Logs go to stderr so that they don't interleave with the session's output on stdout.
    tracing_subscriber::fmt()
        .with_target(true)
        .with_line_number(true)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .compact()
        .init();

    use clap::Parser;
    let certgen_args = CertgenArgs::parse();
    tracing::info!(
        "certificate service: {}",
        certgen_args.service_config_args
    );
    if !certgen_args.export_dir.is_dir() {
        anyhow::bail!(
            "export directory {:?} does not exist or is not a directory",
            certgen_args.export_dir
        );
    }

    let (clear_tx, clear_rx) = tokio::sync::mpsc::unbounded_channel();
    let session_driver = SessionDriver::new(
        certgen::Session::with_fields(certgen_args.initial_fields()),
        certgen_args.export_dir,
        certgen_args.service_config_args,
        clear_tx,
    );
    session_driver.run(clear_rx).await
}
