use crate::{CertificateRecord, Result};

/// A downloadable JSON rendering of a single certificate record.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CertificateExport {
    /// Of the form `certificate-<serialNumber>.json`.
    pub filename: String,
    pub media_type: &'static str,
    /// The record as JSON with 2-space indentation.
    pub contents: String,
}

impl CertificateExport {
    pub const MEDIA_TYPE: &'static str = "application/json";

    pub fn filename_for(certificate_record: &CertificateRecord) -> String {
        format!("certificate-{}.json", certificate_record.serial_number)
    }
    pub fn from_record(certificate_record: &CertificateRecord) -> Result<Self> {
        // serde_json's pretty printer indents with 2 spaces.
        let contents = serde_json::to_string_pretty(certificate_record)?;
        Ok(Self {
            filename: Self::filename_for(certificate_record),
            media_type: Self::MEDIA_TYPE,
            contents,
        })
    }
    /// Parses the contents of an export artifact back into a record, checking its invariants.
    pub fn parse_record(contents: &str) -> Result<CertificateRecord> {
        let certificate_record = serde_json::from_str::<CertificateRecord>(contents)?;
        certificate_record.verify()?;
        Ok(certificate_record)
    }
    /// Writes the artifact into dir under its filename, returning the path written to.
    pub fn write_to_dir(&self, dir: &std::path::Path) -> Result<std::path::PathBuf> {
        let path = dir.join(self.filename.as_str());
        std::fs::write(&path, self.contents.as_bytes())?;
        tracing::debug!("wrote certificate export to {:?}", path);
        Ok(path)
    }
}
