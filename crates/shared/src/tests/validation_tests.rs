use super::*;
use proptest::prelude::*;

fn jane() -> NewInquiry {
    NewInquiry::new("Jane Doe", "jane@example.com", "Interested in services")
}

#[test]
fn accepts_well_formed_inquiry() {
    validate_inquiry(&jane()).expect("valid");
}

#[test]
fn reports_every_invalid_field() {
    let inquiry = NewInquiry::new("", "not-an-email", "   ");
    let errors = validate_inquiry(&inquiry).expect_err("invalid");
    assert_eq!(errors.errors.len(), 3);
    assert_eq!(errors.get(Field::Name), Some("Name is required"));
    assert_eq!(errors.get(Field::Email), Some("Invalid email address"));
    assert_eq!(errors.get(Field::Message), Some("Message is required"));
    assert_eq!(errors.first().map(|e| e.field), Some(Field::Name));
}

#[test]
fn empty_email_is_required_not_malformed() {
    let inquiry = NewInquiry::new("Jane", "", "hello");
    let errors = validate_inquiry(&inquiry).expect_err("invalid");
    assert_eq!(errors.get(Field::Email), Some("Email is required"));
    assert!(errors.get(Field::Name).is_none());
}

#[test]
fn rejects_overlong_message() {
    let inquiry = NewInquiry::new(
        "Jane",
        "jane@example.com",
        "x".repeat(MAX_MESSAGE_CHARS + 1),
    );
    let errors = validate_inquiry(&inquiry).expect_err("invalid");
    assert!(errors.get(Field::Message).is_some());
}

#[test]
fn email_shapes() {
    for ok in ["jane@example.com", "a.b+c@sub.example.co", "x@y.io"] {
        assert!(is_valid_email(ok), "{ok} should be valid");
    }
    for bad in [
        "plain",
        "@example.com",
        "jane@",
        "jane@example",
        "jane@@example.com",
        "jane@example..com",
        "jane doe@example.com",
        "jane@-example.com",
    ] {
        assert!(!is_valid_email(bad), "{bad} should be invalid");
    }
}

#[test]
fn display_lists_fields() {
    let errors =
        validate_inquiry(&NewInquiry::new("", "jane@example.com", "")).expect_err("invalid");
    assert_eq!(
        errors.to_string(),
        "invalid inquiry: name: Name is required; message: Message is required"
    );
}

proptest! {
    #[test]
    fn non_blank_fields_with_valid_email_pass(
        name in "[A-Za-z][A-Za-z ]{0,40}",
        local in "[a-z0-9]{1,12}",
        domain in "[a-z]{1,12}",
        message in "[A-Za-z0-9][A-Za-z0-9 .,!?]{0,200}",
    ) {
        let inquiry = NewInquiry::new(name, format!("{local}@{domain}.com"), message);
        prop_assert!(validate_inquiry(&inquiry).is_ok());
    }

    #[test]
    fn whitespace_only_name_is_rejected(spaces in " {0,8}") {
        let inquiry = NewInquiry::new(spaces, "jane@example.com", "hello");
        let errors = validate_inquiry(&inquiry).expect_err("blank name");
        prop_assert_eq!(errors.get(Field::Name), Some("Name is required"));
    }
}
