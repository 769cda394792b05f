use crate::Error;

/// Opaque identifier of a certificate record, unique within a session.  The value is the
/// creation time in milliseconds since the Unix epoch, bumped as necessary so that ids are
/// strictly increasing (see [`CertificateIdGenerator`]).  Serializes as a JSON number.
#[derive(
    Clone,
    Copy,
    Debug,
    derive_more::Deref,
    derive_more::Display,
    Eq,
    derive_more::From,
    Hash,
    derive_more::Into,
    Ord,
    PartialEq,
    PartialOrd,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(transparent)]
pub struct CertificateId(u64);

impl std::str::FromStr for CertificateId {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u64>()
            .map_err(|_| Error::Invalid("certificate id must be a non-negative integer"))?;
        Ok(Self(value))
    }
}

/// Issues time-based certificate ids.  Two records generated within the same millisecond (or
/// under a clock that went backwards) still receive distinct ids, because each issued id is
/// strictly greater than the previous one.
#[derive(Clone, Debug, Default)]
pub struct CertificateIdGenerator {
    last_issued_o: Option<u64>,
}

impl CertificateIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
    /// Returns the id that `issue` would return for the given time, without consuming it.
    pub fn peek(&self, now: time::OffsetDateTime) -> Result<CertificateId, Error> {
        let millis = u64::try_from(now.unix_timestamp_nanos() / 1_000_000)
            .map_err(|_| Error::TimestampOverflow("creation time precedes the Unix epoch"))?;
        let value = match self.last_issued_o {
            Some(last_issued) if millis <= last_issued => last_issued
                .checked_add(1)
                .ok_or(Error::TimestampOverflow("certificate id space exhausted"))?,
            _ => millis,
        };
        Ok(CertificateId(value))
    }
    /// Marks the given id (previously obtained via `peek`) as issued.
    pub fn commit(&mut self, certificate_id: CertificateId) {
        debug_assert!(
            self.last_issued_o.map_or(true, |last| *certificate_id > last),
            "programmer error: certificate ids must be committed in strictly increasing order"
        );
        self.last_issued_o = Some(*certificate_id);
    }
    /// Convenience for `peek` followed by `commit`.
    pub fn issue(&mut self, now: time::OffsetDateTime) -> Result<CertificateId, Error> {
        let certificate_id = self.peek(now)?;
        self.commit(certificate_id);
        Ok(certificate_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_strictly_increase_under_a_frozen_clock() {
        let now = time::macros::datetime!(2024-03-01 12:00:00.123 UTC);
        let mut generator = CertificateIdGenerator::new();
        let id_0 = generator.issue(now).expect("pass");
        let id_1 = generator.issue(now).expect("pass");
        let id_2 = generator.issue(now).expect("pass");
        assert_eq!(*id_0, 1_709_294_400_123);
        assert_eq!(*id_1, *id_0 + 1);
        assert_eq!(*id_2, *id_0 + 2);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let now = time::macros::datetime!(2024-03-01 12:00:00 UTC);
        let generator = CertificateIdGenerator::new();
        assert_eq!(generator.peek(now).expect("pass"), generator.peek(now).expect("pass"));
    }

    #[test]
    fn test_pre_epoch_time_is_rejected() {
        let now = time::macros::datetime!(1969-12-31 23:59:59 UTC);
        assert!(CertificateIdGenerator::new().issue(now).is_err());
    }

    #[test]
    fn test_parse_certificate_id() {
        let certificate_id = "1709294400123".parse::<CertificateId>().expect("pass");
        assert_eq!(u64::from(certificate_id), 1_709_294_400_123);
        assert!("abc".parse::<CertificateId>().is_err());
        assert!("-5".parse::<CertificateId>().is_err());
    }
}
