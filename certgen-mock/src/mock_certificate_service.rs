use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use certgen::{CertificateData, CertificateService, Error, Result};

#[derive(Clone, Debug, Default)]
struct MockCertificateServiceState {
    /// Insertion order of certificate ids, so that listing is deterministic.
    certificate_id_v: Vec<String>,
    certificate_data_m: HashMap<String, CertificateData>,
}

/// Mock (i.e. ephemeral, intra-process) implementation of the remote certificate service.
/// Clones share the same state.
#[derive(Clone)]
pub struct MockCertificateService {
    pub greeting: String,
    state_la: Arc<RwLock<MockCertificateServiceState>>,
}

impl MockCertificateService {
    pub fn new(greeting: String) -> Self {
        Self {
            greeting,
            state_la: Arc::new(RwLock::new(MockCertificateServiceState::default())),
        }
    }
    pub fn get(&self, certificate_id: &str) -> Option<CertificateData> {
        let state_g = self.state_la.read().unwrap();
        state_g.certificate_data_m.get(certificate_id).cloned()
    }
    /// All certificates created so far, in creation order.
    pub fn list(&self) -> Vec<CertificateData> {
        let state_g = self.state_la.read().unwrap();
        state_g
            .certificate_id_v
            .iter()
            .filter_map(|certificate_id| state_g.certificate_data_m.get(certificate_id).cloned())
            .collect()
    }
}

impl Default for MockCertificateService {
    fn default() -> Self {
        Self::new("Hello from the certificate service!".to_string())
    }
}

impl CertificateService for MockCertificateService {
    fn hello(&self) -> Result<String> {
        Ok(self.greeting.clone())
    }
    fn create_certificate(
        &self,
        recipient_name: &str,
        course_name: &str,
        issuer_name: &str,
        description: &str,
    ) -> Result<String> {
        use rand::RngCore;
        let mut id_bytes = [0u8; 16];
        rand::rngs::OsRng.try_fill_bytes(&mut id_bytes)?;
        let certificate_id = certgen::hex_lower(&id_bytes);
        let issue_date = i64::try_from(time::OffsetDateTime::now_utc().unix_timestamp_nanos())
            .map_err(|_| Error::TimestampOverflow("issue date does not fit in 64 bits"))?;
        let certificate_data = CertificateData {
            id: certificate_id.clone(),
            recipient_name: recipient_name.to_string(),
            course_name: course_name.to_string(),
            issue_date,
            issuer_name: issuer_name.to_string(),
            description: description.to_string(),
        };

        let mut state_g = self.state_la.write().unwrap();
        if state_g.certificate_data_m.contains_key(&certificate_id) {
            return Err(Error::Generic("certificate id collision"));
        }
        state_g.certificate_id_v.push(certificate_id.clone());
        state_g
            .certificate_data_m
            .insert(certificate_id.clone(), certificate_data);
        tracing::debug!("MockCertificateService created certificate {}", certificate_id);
        Ok(certificate_id)
    }
}
