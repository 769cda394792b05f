mod mock_certificate_service;

pub use crate::mock_certificate_service::MockCertificateService;
