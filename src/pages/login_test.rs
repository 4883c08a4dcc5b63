use super::*;

#[test]
fn failed_login_message_is_fixed() {
    assert_eq!(LOGIN_FAILED_MESSAGE, "Login failed");
}

#[test]
fn validation_trims_the_email() {
    assert_eq!(
        validate_login_input("  reviewer@getsendy.example  ", "hunter2"),
        Ok(("reviewer@getsendy.example".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validation_keeps_the_password_as_typed() {
    assert_eq!(
        validate_login_input("reviewer@getsendy.example", " spaced pass "),
        Ok((
            "reviewer@getsendy.example".to_owned(),
            " spaced pass ".to_owned()
        ))
    );
}

#[test]
fn both_fields_are_required() {
    assert_eq!(
        validate_login_input("", "hunter2"),
        Err("Enter both email and password.")
    );
    assert_eq!(
        validate_login_input("reviewer@getsendy.example", ""),
        Err("Enter both email and password.")
    );
    assert_eq!(
        validate_login_input("   ", "hunter2"),
        Err("Enter both email and password.")
    );
}
