use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  startup@example.com ", "password"),
        Ok(("startup@example.com".to_owned(), "password".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    assert_eq!(
        validate_login_input("a@b.com", " pass "),
        Ok(("a@b.com".to_owned(), " pass ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "password"), Err(MISSING_FIELDS));
    assert_eq!(validate_login_input("a@b.com", ""), Err(MISSING_FIELDS));
}
