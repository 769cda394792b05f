use crate::Result;

/// Record shape declared by the remote certificate service.  This is unrelated to
/// [`crate::CertificateRecord`] and the two are never converted into one another.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateData {
    pub id: String,
    pub recipient_name: String,
    pub course_name: String,
    /// Issue time as an integer timestamp (nanoseconds since the Unix epoch).
    pub issue_date: i64,
    pub issuer_name: String,
    pub description: String,
}

/// Client side of the remote certificate service.  Nothing in the registry or session calls this.
pub trait CertificateService {
    /// Query returning a greeting.
    fn hello(&self) -> Result<String>;
    /// Creates a certificate on the service side, returning its id.
    fn create_certificate(
        &self,
        recipient_name: &str,
        course_name: &str,
        issuer_name: &str,
        description: &str,
    ) -> Result<String>;
}
