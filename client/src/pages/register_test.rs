use super::*;

#[test]
fn validate_registration_accepts_startup() {
    assert_eq!(
        validate_registration(" سارة ", " new@example.com ", "secret1", "startup"),
        Ok(Registration {
            name: "سارة".to_owned(),
            email: "new@example.com".to_owned(),
            password: "secret1".to_owned(),
            role: Role::Startup,
        })
    );
}

#[test]
fn validate_registration_requires_name() {
    assert_eq!(validate_registration("  ", "a@b.com", "secret1", "sponsor"), Err(MISSING_NAME));
}

#[test]
fn validate_registration_checks_email_shape() {
    for bad in ["", "plain", "@b.com", "a@b", "a@@b.com", "a@.com", "a@b."] {
        assert_eq!(validate_registration("n", bad, "secret1", "sponsor"), Err(BAD_EMAIL), "{bad}");
    }
}

#[test]
fn validate_registration_counts_password_chars() {
    assert_eq!(validate_registration("n", "a@b.com", "12345", "sponsor"), Err(SHORT_PASSWORD));
    assert!(validate_registration("n", "a@b.com", "كلمةسر", "sponsor").is_ok());
}

#[test]
fn validate_registration_rejects_admin_and_unknown_roles() {
    assert_eq!(validate_registration("n", "a@b.com", "secret1", "admin"), Err(BAD_ROLE));
    assert_eq!(validate_registration("n", "a@b.com", "secret1", "investor"), Err(BAD_ROLE));
}
