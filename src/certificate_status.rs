use crate::Error;

/// Lifecycle status of a certificate record.  The only permitted transition is Valid -> Revoked.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CertificateStatus {
    Valid,
    Revoked,
}

impl CertificateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CertificateStatus::Valid => "valid",
            CertificateStatus::Revoked => "revoked",
        }
    }
    /// Capitalized form, as shown in listings.
    pub fn label(&self) -> &'static str {
        match self {
            CertificateStatus::Valid => "Valid",
            CertificateStatus::Revoked => "Revoked",
        }
    }
}

impl std::fmt::Display for CertificateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CertificateStatus {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "valid" => Ok(CertificateStatus::Valid),
            "revoked" => Ok(CertificateStatus::Revoked),
            _ => Err(Error::Invalid(
                "certificate status must be one of valid, revoked",
            )),
        }
    }
}
