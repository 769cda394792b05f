use crate::{Cmd, Flow, Result, ServiceConfigArgs};
use certgen::{
    CertificateId, FormField, OsRandomSource, ScheduledClear, Session, Severity, SystemClock,
};
use std::io::Write;
use tokio::io::AsyncBufReadExt;

/// Owns the session and plays the part of the user interface: applies commands to it, prints
/// notifications and listings, and runs the timers that expire notifications.
pub struct SessionDriver {
    session: Session,
    export_dir: std::path::PathBuf,
    service_config_args: ServiceConfigArgs,
    clear_tx: tokio::sync::mpsc::UnboundedSender<ScheduledClear>,
}

impl SessionDriver {
    pub fn new(
        session: Session,
        export_dir: std::path::PathBuf,
        service_config_args: ServiceConfigArgs,
        clear_tx: tokio::sync::mpsc::UnboundedSender<ScheduledClear>,
    ) -> Self {
        Self {
            session,
            export_dir,
            service_config_args,
            clear_tx,
        }
    }
    pub fn session(&self) -> &Session {
        &self.session
    }
    /// Reads and applies commands until `quit` or end of input.  Notification expiries are
    /// interleaved with commands; neither ever runs concurrently with the other.
    pub async fn run(
        mut self,
        mut clear_rx: tokio::sync::mpsc::UnboundedReceiver<ScheduledClear>,
    ) -> Result<()> {
        let mut line_stream = tokio::io::BufReader::new(tokio::io::stdin()).lines();
        print_prompt();
        loop {
            tokio::select! {
                line_r = line_stream.next_line() => {
                    let Some(line) = line_r? else {
                        break;
                    };
                    if self.handle_line(line.as_str()) == Flow::Quit {
                        break;
                    }
                    print_prompt();
                }
                Some(scheduled_clear) = clear_rx.recv() => {
                    if self.session.clear_notification(scheduled_clear) {
                        tracing::debug!("notification {} expired", scheduled_clear.notification_id);
                    }
                }
            }
        }
        tracing::info!(
            "ending session; {} certificate(s) discarded",
            self.session.certificates().len()
        );
        Ok(())
    }
    /// Parses and applies one line of input, reporting any error to the user.
    pub fn handle_line(&mut self, line: &str) -> Flow {
        match Cmd::parse_line(line) {
            Ok(Some(cmd)) => match cmd.handle(self) {
                Ok(flow) => flow,
                Err(err) => {
                    println!("error: {}", err);
                    Flow::Continue
                }
            },
            Ok(None) => Flow::Continue,
            Err(err) => {
                // This includes the output of `help`.
                println!("{}", err.render());
                Flow::Continue
            }
        }
    }
    /// Shows the notification that was just raised and arranges for it to expire.
    fn notify(&self, scheduled_clear: ScheduledClear) {
        if let Some(notification) = self.session.notification() {
            match notification.severity {
                Severity::Success => println!("{}", notification.message),
                Severity::Error => println!("error: {}", notification.message),
            }
        }
        let clear_tx = self.clear_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(scheduled_clear.delay).await;
            // The receiver is gone only if the session has ended.
            let _ = clear_tx.send(scheduled_clear);
        });
    }
    pub fn set_field(&mut self, form_field: FormField, value: &str) -> Result<()> {
        self.session.set_field(form_field, value)?;
        Ok(())
    }
    pub fn generate(&mut self) -> Result<()> {
        if !self.session.can_generate() {
            anyhow::bail!("generate is disabled until commonName and organization are set");
        }
        let scheduled_clear = self.session.generate(&mut OsRandomSource, &SystemClock)?;
        self.notify(scheduled_clear);
        Ok(())
    }
    pub fn revoke(&mut self, certificate_id: CertificateId) {
        let scheduled_clear = self.session.revoke(certificate_id, &SystemClock);
        self.notify(scheduled_clear);
    }
    pub fn delete(&mut self, certificate_id: CertificateId) {
        let scheduled_clear = self.session.delete(certificate_id);
        self.notify(scheduled_clear);
    }
    pub fn export(&mut self, certificate_id: CertificateId) -> Result<()> {
        let export_dir = self.export_dir.as_path();
        let (path_r, scheduled_clear) = self
            .session
            .export_with(certificate_id, |certificate_export| {
                certificate_export.write_to_dir(export_dir)
            });
        self.notify(scheduled_clear);
        let path = path_r?;
        println!("wrote {}", path.display());
        Ok(())
    }
    pub fn print_form(&self) {
        let fields = self.session.fields();
        for form_field in FormField::VARIANTS {
            let marker = if form_field.is_required() { "*" } else { "" };
            println!(
                "{:>20}: {}",
                format!("{}{}", form_field, marker),
                fields.get(form_field)
            );
        }
        if self.session.can_generate() {
            println!("generate: enabled");
        } else {
            println!("generate: disabled (* fields are required)");
        }
    }
    pub fn print_list(&self) {
        let certificate_record_v = self.session.certificates();
        println!("Generated Certificates ({})", certificate_record_v.len());
        if certificate_record_v.is_empty() {
            println!("No certificates generated yet");
            return;
        }
        for certificate_record in certificate_record_v {
            println!(
                "{}  {}  {}  {}  {} {} bits  serial {}  valid {} to {}",
                certificate_record.id,
                certificate_record.common_name,
                certificate_record.organization,
                certificate_record.status.label(),
                certificate_record.key_type,
                certificate_record.key_size,
                certificate_record.serial_number,
                certificate_record.valid_from,
                certificate_record.valid_to,
            );
        }
    }
    pub fn print_certificate(&self, certificate_id: CertificateId) -> Result<()> {
        let certificate_record = self
            .session
            .certificate_registry()
            .get(certificate_id)
            .ok_or_else(|| anyhow::anyhow!("no certificate with id {}", certificate_id))?;
        println!("{}", serde_json::to_string_pretty(certificate_record)?);
        Ok(())
    }
    pub fn print_service_config(&self) {
        println!("{}", self.service_config_args);
    }
}

fn print_prompt() {
    print!("> ");
    // Nothing sensible can be done if stdout is gone.
    let _ = std::io::stdout().flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use certgen::CertificateStatus;

    fn new_session_driver(
        export_dir: std::path::PathBuf,
    ) -> (
        SessionDriver,
        tokio::sync::mpsc::UnboundedReceiver<ScheduledClear>,
    ) {
        let (clear_tx, clear_rx) = tokio::sync::mpsc::unbounded_channel();
        let service_config_args = ServiceConfigArgs {
            network: crate::Network::Local,
            canister_id: crate::DEFAULT_CANISTER_ID.to_string(),
            host_o: None,
        };
        (
            SessionDriver::new(Session::new(), export_dir, service_config_args, clear_tx),
            clear_rx,
        )
    }

    #[tokio::test]
    async fn test_commands_drive_the_session() {
        let (mut session_driver, _clear_rx) = new_session_driver(std::env::temp_dir());

        // Disabled until the required fields are filled in.
        assert_eq!(session_driver.handle_line("generate"), Flow::Continue);
        assert!(session_driver.session().certificates().is_empty());

        session_driver.handle_line("set commonName example.com");
        session_driver.handle_line("set organization Example Corp");
        session_driver.handle_line("set organizationalUnit Web   Ops");
        session_driver.handle_line("set validityDays 730");
        session_driver.handle_line("generate");
        assert_eq!(session_driver.session().certificates().len(), 1);
        let certificate_record = session_driver.session().certificates()[0].clone();
        assert_eq!(certificate_record.organization, "Example Corp");
        assert_eq!(certificate_record.organizational_unit, "Web   Ops");
        assert_eq!(
            certificate_record.valid_to - certificate_record.valid_from,
            time::Duration::days(730)
        );

        session_driver.handle_line(format!("revoke {}", certificate_record.id).as_str());
        assert_eq!(
            session_driver.session().certificates()[0].status,
            CertificateStatus::Revoked
        );
        session_driver.handle_line(format!("delete {}", certificate_record.id).as_str());
        assert!(session_driver.session().certificates().is_empty());
        assert_eq!(session_driver.handle_line("quit"), Flow::Quit);
    }

    #[tokio::test(start_paused = true)]
    async fn test_notification_expires_after_its_delay() {
        let (mut session_driver, mut clear_rx) = new_session_driver(std::env::temp_dir());
        session_driver.handle_line("set commonName example.com");
        session_driver.handle_line("set organization Example Corp");
        session_driver.handle_line("generate");
        assert!(session_driver.session().notification().is_some());

        // With the clock paused, the timer fires as soon as the runtime is otherwise idle.
        let scheduled_clear = clear_rx.recv().await.expect("pass");
        assert_eq!(scheduled_clear.delay, certgen::NOTIFICATION_TTL);
        assert!(session_driver.session.clear_notification(scheduled_clear));
        assert!(session_driver.session().notification().is_none());
    }

    #[tokio::test]
    async fn test_export_writes_file() {
        let export_dir =
            std::env::temp_dir().join(format!("certgen-cli-tests-{}", std::process::id()));
        std::fs::create_dir_all(&export_dir).expect("pass");
        let (mut session_driver, _clear_rx) = new_session_driver(export_dir.clone());
        session_driver.handle_line("set commonName example.com");
        session_driver.handle_line("set organization Example Corp");
        session_driver.handle_line("generate");
        let certificate_record = session_driver.session().certificates()[0].clone();

        session_driver.handle_line(format!("export {}", certificate_record.id).as_str());
        let path = export_dir.join(format!(
            "certificate-{}.json",
            certificate_record.serial_number
        ));
        let contents = std::fs::read_to_string(&path).expect("pass");
        assert_eq!(
            certgen::CertificateExport::parse_record(&contents).expect("pass"),
            certificate_record
        );
        std::fs::remove_dir_all(&export_dir).expect("pass");
    }

    #[tokio::test]
    async fn test_export_to_missing_dir_reports_failure() {
        let export_dir = std::env::temp_dir()
            .join(format!("certgen-cli-missing-{}", std::process::id()))
            .join("nested");
        assert!(!export_dir.exists());
        let (mut session_driver, _clear_rx) = new_session_driver(export_dir.clone());
        session_driver.handle_line("set commonName example.com");
        session_driver.handle_line("set organization Example Corp");
        session_driver.handle_line("generate");
        let certificate_record = session_driver.session().certificates()[0].clone();

        assert!(session_driver.export(certificate_record.id).is_err());
        let notification = session_driver.session().notification().expect("pass");
        assert_eq!(notification.severity, Severity::Error);
        assert_eq!(notification.message, certgen::EXPORT_FAILED_MESSAGE);
        assert!(!export_dir.exists());
        assert_eq!(session_driver.session().certificates()[0], certificate_record);
    }
}
