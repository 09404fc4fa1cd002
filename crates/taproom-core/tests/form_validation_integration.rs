//! End-to-end tests replaying recorded form sessions

use taproom_core::{
    CheckCategory, Field, FieldEvent, FieldKind, FieldState, Form, FormValidator, Scenario,
    VerdictLevel,
};

fn load(name: &str) -> Scenario {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    Scenario::from_json(&content).expect("Failed to parse scenario")
}

#[test]
fn test_signup_session_is_allowed() {
    let report = load("signup_session.json").run().unwrap();

    assert!(report.submission.allowed);
    assert!(report.submission.was_validated);

    let state_of = |name: &str| {
        report
            .fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.state)
            .unwrap()
    };
    assert_eq!(state_of("email"), FieldState::Valid);
    assert_eq!(state_of("password1"), FieldState::Valid);
    assert_eq!(state_of("password2"), FieldState::Valid);
    // Plain text inputs have no live check and a filled required field shows nothing
    assert_eq!(state_of("username"), FieldState::Unvalidated);

    let password = report.fields.iter().find(|f| f.name == "password1").unwrap();
    assert_eq!(password.annotations.len(), 1);
    assert_eq!(password.annotations[0].message, "Password strength: Strong");
    assert_eq!(
        password.annotations[0].class_list(),
        "valid-feedback password-strength"
    );
}

#[test]
fn test_whitespace_only_required_field_blocks() {
    let report = load("login_blank.json").run().unwrap();

    assert!(report.is_blocked());
    assert_eq!(
        report.submission.missing_required,
        vec!["username".to_string(), "password".to_string()]
    );
    for field in &report.fields {
        assert_eq!(field.state, FieldState::Invalid);
        assert_eq!(field.annotations[0].category, CheckCategory::Required);
    }
}

#[test]
fn test_confirmation_goes_stale_when_primary_changes() {
    let mut validator = FormValidator::new(Form::new(vec![
        Field::new("password1", FieldKind::Password).required(),
        Field::new("password2", FieldKind::Password).required(),
    ]));

    validator.dispatch(FieldEvent::input("password1", "Lager#42x")).unwrap();
    validator.dispatch(FieldEvent::input("password2", "Lager#42x")).unwrap();
    assert_eq!(validator.field_state("password2"), FieldState::Valid);

    // Editing the primary does not re-run the confirmation check
    validator.dispatch(FieldEvent::input("password1", "Stout#42x")).unwrap();
    assert_eq!(validator.field_state("password2"), FieldState::Valid);
    assert!(validator.submit().allowed);

    validator.dispatch(FieldEvent::input("password2", "Lager#42x")).unwrap();
    let annotation = validator
        .annotation("password2", CheckCategory::PasswordConfirmation)
        .unwrap();
    assert_eq!(annotation.level, VerdictLevel::Invalid);
    assert_eq!(annotation.message, "Passwords do not match");

    let outcome = validator.submit();
    assert!(outcome.is_blocked());
    assert!(outcome.missing_required.is_empty());
    assert_eq!(outcome.invalid_fields, vec!["password2".to_string()]);
}

#[test]
fn test_weak_password_blocks_even_when_required_fields_are_filled() {
    let mut validator = FormValidator::new(Form::new(vec![
        Field::new("password", FieldKind::Password).required(),
    ]));

    validator.dispatch(FieldEvent::input("password", "abc")).unwrap();
    let annotation = validator
        .annotation("password", CheckCategory::PasswordStrength)
        .unwrap();
    assert_eq!(
        annotation.message,
        "Password needs: at least 8 characters, uppercase letter, number, special character"
    );

    let outcome = validator.submit();
    assert!(outcome.is_blocked());
    assert_eq!(outcome.invalid_fields, vec!["password".to_string()]);
}
