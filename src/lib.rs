mod certificate_export;
mod certificate_fields;
mod certificate_id;
mod certificate_record;
mod certificate_registry;
mod certificate_service;
mod certificate_status;
mod clock;
mod error;
mod hex_format;
mod key_size;
mod notification;
mod random_source;
mod session;
mod validity_period;

pub use crate::{
    certificate_export::CertificateExport,
    certificate_fields::{CertificateFields, FormField},
    certificate_id::{CertificateId, CertificateIdGenerator},
    certificate_record::{
        CertificateRecord, FINGERPRINT_BYTE_COUNT, PUBLIC_KEY_BYTE_COUNT,
        SERIAL_NUMBER_BYTE_COUNT,
    },
    certificate_registry::{CertificateRegistry, RevokeOutcome},
    certificate_service::{CertificateData, CertificateService},
    certificate_status::CertificateStatus,
    clock::{Clock, FixedClock, SystemClock},
    error::Error,
    hex_format::{hex_lower, hex_lower_colon_separated, is_hex_lower, is_hex_lower_colon_separated},
    key_size::{KeySize, KeyType},
    notification::{
        Notification, NotificationId, NotificationSlot, ScheduledClear, Severity, NOTIFICATION_TTL,
    },
    random_source::{random_bytes, OsRandomSource, RandomSource},
    session::{
        Session, DELETED_MESSAGE, EXPORTED_MESSAGE, EXPORT_FAILED_MESSAGE, GENERATED_MESSAGE,
        GENERATION_FAILED_MESSAGE, NOT_FOUND_MESSAGE, REVOKED_MESSAGE,
    },
    validity_period::ValidityPeriod,
};
pub type Result<T> = std::result::Result<T, Error>;

/// This function returns the current time in UTC with millisecond precision, which is the
/// precision of certificate ids and of the exported timestamps.
pub fn now_utc_milliseconds() -> time::OffsetDateTime {
    truncated_to_milliseconds(time::OffsetDateTime::now_utc())
}

pub fn is_truncated_to_milliseconds(t: time::OffsetDateTime) -> bool {
    t.nanosecond() % 1_000_000 == 0
}

pub fn truncated_to_milliseconds(t: time::OffsetDateTime) -> time::OffsetDateTime {
    let t = t
        .replace_millisecond(t.millisecond())
        .expect("programmer error: the current millisecond value is always in range");
    debug_assert!(is_truncated_to_milliseconds(t));
    t
}
