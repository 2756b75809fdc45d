use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  user@example.com ", "secret"),
        Ok(("user@example.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    assert_eq!(
        validate_login_input("a@b.com", " pass word "),
        Ok(("a@b.com".to_owned(), " pass word ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("a@b.com", ""), Err("Enter both email and password."));
}

#[test]
fn validate_login_input_rejects_malformed_email() {
    for email in ["user", "@example.com", "user@", "user@localhost", "user@.com"] {
        assert_eq!(validate_login_input(email, "pw"), Err("Enter a valid email address."), "{email}");
    }
}
