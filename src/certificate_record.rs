use crate::{
    hex_lower, hex_lower_colon_separated, random_bytes, CertificateFields, CertificateId,
    CertificateStatus, Error, KeySize, KeyType, RandomSource, Result, ValidityPeriod,
};

/// Number of random bytes behind the serial number.
pub const SERIAL_NUMBER_BYTE_COUNT: usize = 16;
/// Number of random bytes behind the fingerprint.
pub const FINGERPRINT_BYTE_COUNT: usize = 32;
/// Number of random bytes behind the placeholder public key.
pub const PUBLIC_KEY_BYTE_COUNT: usize = 16;

/// A simulated certificate.  Nothing here is cryptographically meaningful: the serial number,
/// fingerprint and public key are random bytes rendered as hex.
///
/// The serialized field order is the order of the exported JSON artifact.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRecord {
    pub id: CertificateId,
    /// 16 random bytes, lowercase hex, no separators.
    pub serial_number: String,
    pub common_name: String,
    pub organization: String,
    pub organizational_unit: String,
    pub country: String,
    pub state: String,
    pub locality: String,
    pub email: String,
    pub validity_days: ValidityPeriod,
    pub key_size: KeySize,
    #[serde(with = "time::serde::rfc3339")]
    pub valid_from: time::OffsetDateTime,
    /// Exactly `validity_days` whole days after `valid_from`.
    #[serde(with = "time::serde::rfc3339")]
    pub valid_to: time::OffsetDateTime,
    /// 32 random bytes, lowercase hex, colon-separated.
    pub fingerprint: String,
    pub status: CertificateStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created: time::OffsetDateTime,
    pub key_type: KeyType,
    /// 16 random bytes, lowercase hex.  Placeholder only; there is no key pair.
    pub public_key: String,
    /// Present if and only if status is Revoked.
    #[serde(rename = "revokedAt")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(with = "time::serde::rfc3339::option")]
    pub revoked_at_o: Option<time::OffsetDateTime>,
}

impl CertificateRecord {
    /// Builds a valid (i.e. not revoked) record from the form fields, drawing its serial number,
    /// fingerprint and public key from random_source.  Nothing is retained anywhere if this fails.
    pub fn generate(
        id: CertificateId,
        fields: &CertificateFields,
        valid_from: time::OffsetDateTime,
        random_source: &mut dyn RandomSource,
    ) -> Result<Self> {
        let serial_number_bytes = random_bytes::<SERIAL_NUMBER_BYTE_COUNT>(random_source)?;
        let fingerprint_bytes = random_bytes::<FINGERPRINT_BYTE_COUNT>(random_source)?;
        let public_key_bytes = random_bytes::<PUBLIC_KEY_BYTE_COUNT>(random_source)?;
        let valid_to = valid_from
            .checked_add(fields.validity_days.duration())
            .ok_or(Error::TimestampOverflow("validTo is out of range"))?;
        Ok(Self {
            id,
            serial_number: hex_lower(&serial_number_bytes),
            common_name: fields.common_name.clone(),
            organization: fields.organization.clone(),
            organizational_unit: fields.organizational_unit.clone(),
            country: fields.country.clone(),
            state: fields.state.clone(),
            locality: fields.locality.clone(),
            email: fields.email.clone(),
            validity_days: fields.validity_days,
            key_size: fields.key_size,
            valid_from,
            valid_to,
            fingerprint: hex_lower_colon_separated(&fingerprint_bytes),
            status: CertificateStatus::Valid,
            created: valid_from,
            key_type: KeyType::Rsa,
            public_key: hex_lower(&public_key_bytes),
            revoked_at_o: None,
        })
    }
    pub fn is_revoked(&self) -> bool {
        self.status == CertificateStatus::Revoked
    }
    /// Flips the status to Revoked, recording the time.  Returns false (and changes nothing) if
    /// the record was already revoked.
    pub fn revoke(&mut self, revoked_at: time::OffsetDateTime) -> bool {
        if self.is_revoked() {
            return false;
        }
        self.status = CertificateStatus::Revoked;
        self.revoked_at_o = Some(revoked_at);
        true
    }
    /// Checks the structural invariants of the record.  Records produced by `generate` always
    /// pass; this is for records that came from elsewhere (e.g. a parsed export).
    pub fn verify(&self) -> Result<()> {
        if !crate::is_hex_lower(&self.serial_number, SERIAL_NUMBER_BYTE_COUNT) {
            return Err(Error::Invalid("serialNumber must be 32 lowercase hex digits"));
        }
        if !crate::is_hex_lower_colon_separated(&self.fingerprint, FINGERPRINT_BYTE_COUNT) {
            return Err(Error::Invalid(
                "fingerprint must be 32 colon-separated pairs of lowercase hex digits",
            ));
        }
        if !crate::is_hex_lower(&self.public_key, PUBLIC_KEY_BYTE_COUNT) {
            return Err(Error::Invalid("publicKey must be 32 lowercase hex digits"));
        }
        if self.valid_to - self.valid_from != self.validity_days.duration() {
            return Err(Error::Invalid("validTo must be validityDays after validFrom"));
        }
        match (self.status, self.revoked_at_o.is_some()) {
            (CertificateStatus::Valid, true) => {
                Err(Error::Invalid("revokedAt must be absent on a valid certificate"))
            }
            (CertificateStatus::Revoked, false) => {
                Err(Error::Invalid("revokedAt must be present on a revoked certificate"))
            }
            _ => Ok(()),
        }
    }
}
