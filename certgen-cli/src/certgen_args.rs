use crate::ServiceConfigArgs;
use certgen::CertificateFields;

/// Interactive certificate generator.  Reads commands from stdin, one per line; type `help` for
/// the list of commands.  Certificates only exist for the lifetime of the process, unless
/// exported.  No real cryptography takes place: serial numbers, fingerprints and public keys are
/// random placeholders.
#[derive(clap::Parser, Debug)]
#[command(version)]
pub struct CertgenArgs {
    /// Specify the directory into which exported certificates are written.
    #[arg(
        env = "CERTGEN_EXPORT_DIR",
        long,
        value_name = "DIR",
        default_value = "."
    )]
    pub export_dir: std::path::PathBuf,
    /// Specify the validity period (in days) that the form starts out with.
    #[arg(
        env = "CERTGEN_VALIDITY_DAYS",
        long,
        value_enum,
        value_name = "DAYS",
        default_value = "365"
    )]
    pub validity_days: certgen::ValidityPeriod,
    /// Specify the key size (in bits) that the form starts out with.
    #[arg(
        env = "CERTGEN_KEY_SIZE",
        long,
        value_enum,
        value_name = "BITS",
        default_value = "2048"
    )]
    pub key_size: certgen::KeySize,
    #[command(flatten)]
    pub service_config_args: ServiceConfigArgs,
}

impl CertgenArgs {
    /// The form contents at the start of the session.
    pub fn initial_fields(&self) -> CertificateFields {
        CertificateFields {
            validity_days: self.validity_days,
            key_size: self.key_size,
            ..Default::default()
        }
    }
}
