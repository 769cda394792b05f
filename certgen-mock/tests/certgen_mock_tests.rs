use certgen::CertificateService;
use certgen_mock::MockCertificateService;

/// This will run once at load time (i.e. presumably before main function is called).
#[ctor::ctor]
fn overall_init() {
    test_util::ctor_overall_init();
}

#[test]
#[serial_test::serial]
fn test_hello() {
    let certificate_service = MockCertificateService::default();
    assert_eq!(
        certificate_service.hello().expect("pass"),
        "Hello from the certificate service!"
    );
    let certificate_service = MockCertificateService::new("hi".to_string());
    assert_eq!(certificate_service.hello().expect("pass"), "hi");
}

#[test]
#[serial_test::serial]
fn test_create_certificate() {
    let certificate_service = MockCertificateService::default();
    let id_0 = certificate_service
        .create_certificate("Alice", "Rust 101", "Example University", "Completed with honors")
        .expect("pass");
    let id_1 = certificate_service
        .create_certificate("Bob", "Rust 102", "Example University", "")
        .expect("pass");
    assert_ne!(id_0, id_1);

    let certificate_data = certificate_service.get(&id_0).expect("pass");
    assert_eq!(certificate_data.id, id_0);
    assert_eq!(certificate_data.recipient_name, "Alice");
    assert_eq!(certificate_data.course_name, "Rust 101");
    assert_eq!(certificate_data.issuer_name, "Example University");
    assert_eq!(certificate_data.description, "Completed with honors");
    assert!(certificate_data.issue_date > 0);

    let certificate_data_v = certificate_service.list();
    assert_eq!(certificate_data_v.len(), 2);
    assert_eq!(certificate_data_v[0].id, id_0);
    assert_eq!(certificate_data_v[1].id, id_1);
    assert!(certificate_service.get("unknown").is_none());
}

#[test]
#[serial_test::serial]
fn test_clones_share_state() {
    let certificate_service = MockCertificateService::default();
    let clone = certificate_service.clone();
    let certificate_id = clone
        .create_certificate("Carol", "Rust 201", "Example University", "")
        .expect("pass");
    assert!(certificate_service.get(&certificate_id).is_some());
}

#[test]
#[serial_test::serial]
fn test_certificate_data_serialization() {
    let certificate_service = MockCertificateService::default();
    let certificate_id = certificate_service
        .create_certificate("Dave", "Rust 301", "Example University", "desc")
        .expect("pass");
    let certificate_data = certificate_service.get(&certificate_id).expect("pass");
    let value = serde_json::to_value(&certificate_data).expect("pass");
    assert_eq!(value["recipientName"], "Dave");
    assert_eq!(value["courseName"], "Rust 301");
    assert_eq!(value["issuerName"], "Example University");
    assert!(value["issueDate"].is_i64());
}
