use crate::{
    CertificateExport, CertificateFields, CertificateId, CertificateRecord, CertificateRegistry,
    Clock, Error, FormField, Notification, NotificationSlot, RandomSource, Result, RevokeOutcome,
    ScheduledClear, Severity,
};

pub const GENERATED_MESSAGE: &str = "Certificate generated successfully";
pub const GENERATION_FAILED_MESSAGE: &str = "Error generating certificate";
pub const REVOKED_MESSAGE: &str = "Certificate revoked successfully";
pub const DELETED_MESSAGE: &str = "Certificate deleted successfully";
pub const EXPORTED_MESSAGE: &str = "Certificate exported successfully";
pub const EXPORT_FAILED_MESSAGE: &str = "Error exporting certificate";
pub const NOT_FOUND_MESSAGE: &str = "Certificate not found";

/// All the state of one certificate-issuing session: the form being filled in, the registry of
/// certificates issued so far, and the notification currently shown.  Nothing outlives the
/// session.
///
/// Every operation that raises a notification returns the [`ScheduledClear`] for it; the front end
/// must arrange for it to be passed to [`Session::clear_notification`] after its delay.
#[derive(Clone, Debug, Default)]
pub struct Session {
    fields: CertificateFields,
    certificate_registry: CertificateRegistry,
    notification_slot: NotificationSlot,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }
    /// Starts a session whose form is pre-filled with the given fields.
    pub fn with_fields(fields: CertificateFields) -> Self {
        Self {
            fields,
            ..Default::default()
        }
    }
    pub fn fields(&self) -> &CertificateFields {
        &self.fields
    }
    pub fn certificate_registry(&self) -> &CertificateRegistry {
        &self.certificate_registry
    }
    pub fn certificates(&self) -> &[CertificateRecord] {
        self.certificate_registry.certificates()
    }
    pub fn notification(&self) -> Option<&Notification> {
        self.notification_slot.current()
    }
    pub fn set_field(&mut self, form_field: FormField, value: &str) -> Result<()> {
        self.fields.set(form_field, value)
    }
    /// The generate control is only enabled when this is true.
    pub fn can_generate(&self) -> bool {
        self.fields.is_submittable()
    }
    /// Generates a certificate from the current form contents.  Calling this while
    /// `can_generate()` is false is rejected with Error::MissingRequiredField, and nothing changes.
    /// Failure while building the record is reported through an error notification, leaving the
    /// registry and the form as they were.
    pub fn generate(
        &mut self,
        random_source: &mut dyn RandomSource,
        clock: &dyn Clock,
    ) -> Result<ScheduledClear> {
        self.fields.check_required()?;
        match self
            .certificate_registry
            .generate(&self.fields, clock.now(), random_source)
        {
            Ok(_) => {
                self.fields.clear_subject_fields();
                Ok(self
                    .notification_slot
                    .raise(GENERATED_MESSAGE, Severity::Success))
            }
            Err(err) => {
                tracing::warn!("certificate generation failed: {}", err);
                Ok(self
                    .notification_slot
                    .raise(GENERATION_FAILED_MESSAGE, Severity::Error))
            }
        }
    }
    /// Revokes the certificate with the given id.  Revoking an already-revoked certificate is
    /// reported as success and leaves it unchanged; an unknown id raises an error notification.
    pub fn revoke(&mut self, certificate_id: CertificateId, clock: &dyn Clock) -> ScheduledClear {
        match self.certificate_registry.revoke(certificate_id, clock.now()) {
            RevokeOutcome::Revoked | RevokeOutcome::AlreadyRevoked => self
                .notification_slot
                .raise(REVOKED_MESSAGE, Severity::Success),
            RevokeOutcome::NotFound => self
                .notification_slot
                .raise(NOT_FOUND_MESSAGE, Severity::Error),
        }
    }
    pub fn delete(&mut self, certificate_id: CertificateId) -> ScheduledClear {
        match self.certificate_registry.delete(certificate_id) {
            Some(_) => self
                .notification_slot
                .raise(DELETED_MESSAGE, Severity::Success),
            None => self
                .notification_slot
                .raise(NOT_FOUND_MESSAGE, Severity::Error),
        }
    }
    /// Renders the certificate with the given id for download.  The registry is not modified.
    pub fn export(
        &mut self,
        certificate_id: CertificateId,
    ) -> (Result<CertificateExport>, ScheduledClear) {
        self.export_with(certificate_id, Ok)
    }
    /// Renders the certificate with the given id and hands the artifact to deliver (e.g. to write
    /// it to a file).  The success notification is raised only once deliver has succeeded; if
    /// rendering or delivery fails, an error notification is raised instead.  The registry is not
    /// modified.
    pub fn export_with<T>(
        &mut self,
        certificate_id: CertificateId,
        deliver: impl FnOnce(CertificateExport) -> Result<T>,
    ) -> (Result<T>, ScheduledClear) {
        let delivered_r = self
            .certificate_registry
            .export(certificate_id)
            .and_then(deliver);
        match delivered_r {
            Ok(delivered) => (
                Ok(delivered),
                self.notification_slot
                    .raise(EXPORTED_MESSAGE, Severity::Success),
            ),
            Err(err @ Error::NotFound(_)) => (
                Err(err),
                self.notification_slot
                    .raise(NOT_FOUND_MESSAGE, Severity::Error),
            ),
            Err(err) => {
                tracing::warn!("certificate export failed: {}", err);
                (
                    Err(err),
                    self.notification_slot
                        .raise(EXPORT_FAILED_MESSAGE, Severity::Error),
                )
            }
        }
    }
    /// Handles the expiry of a notification.  A stale expiry (for a notification that has since
    /// been replaced) is ignored.
    pub fn clear_notification(&mut self, scheduled_clear: ScheduledClear) -> bool {
        self.notification_slot.clear(scheduled_clear)
    }
}
