use crate::{Result, SessionDriver};
use certgen::{CertificateId, FormField};

/// Whether the command loop should keep going.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A single line of input to the interactive session.
#[derive(clap::Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
pub enum Cmd {
    /// Set a form field, e.g. `set organization Example Corp`.  Omitting the value clears the field.
    Set(SetCmd),
    /// Show the form, and whether a certificate can currently be generated.
    Form,
    /// Generate a certificate from the form.  Requires commonName and organization.
    Generate,
    /// List the certificates generated in this session.
    List,
    /// Print a certificate in full.
    Show(CertificateIdArgs),
    /// Revoke a certificate.
    Revoke(CertificateIdArgs),
    /// Delete a certificate.
    Delete(CertificateIdArgs),
    /// Export a certificate as a JSON file into the export directory.
    Export(CertificateIdArgs),
    /// Show the configured certificate service location.
    Service,
    /// End the session.  All certificates that were not exported are discarded.
    #[command(alias = "exit")]
    Quit,
}

#[derive(clap::Args, Debug)]
pub struct SetCmd {
    /// One of commonName, organization, organizationalUnit, country, state, locality, email,
    /// validityDays (30, 90, 365, 730, 1095), keySize (1024, 2048, 4096).
    pub field: FormField,
    /// The new value; may contain spaces, which are kept as typed.
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub value_v: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct CertificateIdArgs {
    /// The certificate id, as shown by `list`.
    pub id: CertificateId,
}

impl Cmd {
    /// Parses a line of input.  Returns Ok(None) for a blank line.
    pub fn parse_line(line: &str) -> std::result::Result<Option<Self>, clap::Error> {
        use clap::Parser;
        let token_v: Vec<&str> = line.split_whitespace().collect();
        if token_v.is_empty() {
            return Ok(None);
        }
        let mut cmd = Self::try_parse_from(token_v)?;
        if let Self::Set(set_cmd) = &mut cmd {
            // Free text is taken verbatim, not as re-joined tokens.
            set_cmd.value_v = match skip_tokens(line, 2) {
                "" => Vec::new(),
                value => vec![value.to_string()],
            };
        }
        Ok(Some(cmd))
    }
    pub fn handle(self, session_driver: &mut SessionDriver) -> Result<Flow> {
        match self {
            Self::Set(x) => session_driver.set_field(x.field, x.value_v.join(" ").as_str())?,
            Self::Form => session_driver.print_form(),
            Self::Generate => session_driver.generate()?,
            Self::List => session_driver.print_list(),
            Self::Show(x) => session_driver.print_certificate(x.id)?,
            Self::Revoke(x) => session_driver.revoke(x.id),
            Self::Delete(x) => session_driver.delete(x.id),
            Self::Export(x) => session_driver.export(x.id)?,
            Self::Service => session_driver.print_service_config(),
            Self::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}

/// Returns what follows the first count whitespace-separated tokens of line, with the whitespace
/// separating it from them removed.
fn skip_tokens(line: &str, count: usize) -> &str {
    let mut rest = line;
    for _ in 0..count {
        rest = rest.trim_start();
        rest = rest
            .find(char::is_whitespace)
            .map_or("", |index| &rest[index..]);
    }
    rest.trim_start()
}
