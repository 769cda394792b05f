use crate::{
    CertificateExport, CertificateFields, CertificateId, CertificateIdGenerator,
    CertificateRecord, Error, RandomSource, Result,
};

/// What happened when a revocation was requested.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RevokeOutcome {
    Revoked,
    /// The record was already revoked; its revokedAt is unchanged.
    AlreadyRevoked,
    NotFound,
}

/// Session-scoped, insertion-ordered collection of certificate records.
#[derive(Clone, Debug, Default)]
pub struct CertificateRegistry {
    certificate_record_v: Vec<CertificateRecord>,
    certificate_id_generator: CertificateIdGenerator,
}

impl CertificateRegistry {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn certificates(&self) -> &[CertificateRecord] {
        self.certificate_record_v.as_slice()
    }
    pub fn len(&self) -> usize {
        self.certificate_record_v.len()
    }
    pub fn is_empty(&self) -> bool {
        self.certificate_record_v.is_empty()
    }
    pub fn get(&self, certificate_id: CertificateId) -> Option<&CertificateRecord> {
        self.certificate_record_v
            .iter()
            .find(|certificate_record| certificate_record.id == certificate_id)
    }
    /// Builds a new record from fields and appends it.  Either the record is appended and a
    /// reference to it returned, or an error is returned and the registry is unchanged (in
    /// particular, no certificate id is consumed).  The required-field check is the caller's
    /// responsibility.
    pub fn generate(
        &mut self,
        fields: &CertificateFields,
        now: time::OffsetDateTime,
        random_source: &mut dyn RandomSource,
    ) -> Result<&CertificateRecord> {
        let certificate_id = self.certificate_id_generator.peek(now)?;
        let certificate_record =
            CertificateRecord::generate(certificate_id, fields, now, random_source)?;
        self.certificate_id_generator.commit(certificate_id);
        tracing::debug!(
            "generated certificate {} with serial number {}",
            certificate_record.id,
            certificate_record.serial_number
        );
        self.certificate_record_v.push(certificate_record);
        Ok(self
            .certificate_record_v
            .last()
            .expect("programmer error: a record was just appended"))
    }
    /// Revokes the matching record.  No other record is touched.
    pub fn revoke(
        &mut self,
        certificate_id: CertificateId,
        now: time::OffsetDateTime,
    ) -> RevokeOutcome {
        let Some(certificate_record) = self
            .certificate_record_v
            .iter_mut()
            .find(|certificate_record| certificate_record.id == certificate_id)
        else {
            tracing::debug!("revoke requested for unknown certificate {}", certificate_id);
            return RevokeOutcome::NotFound;
        };
        if certificate_record.revoke(now) {
            tracing::debug!("revoked certificate {}", certificate_id);
            RevokeOutcome::Revoked
        } else {
            RevokeOutcome::AlreadyRevoked
        }
    }
    /// Removes the matching record, returning it, or returns None if there is no such record.
    pub fn delete(&mut self, certificate_id: CertificateId) -> Option<CertificateRecord> {
        let index = self
            .certificate_record_v
            .iter()
            .position(|certificate_record| certificate_record.id == certificate_id);
        match index {
            Some(index) => {
                tracing::debug!("deleted certificate {}", certificate_id);
                Some(self.certificate_record_v.remove(index))
            }
            None => {
                tracing::debug!("delete requested for unknown certificate {}", certificate_id);
                None
            }
        }
    }
    /// Renders the matching record as an export artifact.  Read-only.
    pub fn export(&self, certificate_id: CertificateId) -> Result<CertificateExport> {
        let certificate_record = self
            .get(certificate_id)
            .ok_or(Error::NotFound("no certificate with the given id"))?;
        CertificateExport::from_record(certificate_record)
    }
}
