use super::*;

const YEAR: i32 = 2026;

fn field_names(errors: &[FieldError]) -> Vec<&'static str> {
    errors.iter().map(|e| e.field).collect()
}

fn valid_sign_up() -> SignUpForm {
    SignUpForm {
        username: "vera".to_owned(),
        password: "Gamer123$".to_owned(),
        password_confirmation: "Gamer123$".to_owned(),
        birthday: "2000-05-14".to_owned(),
    }
}

// =============================================================
// Login form
// =============================================================

#[test]
fn login_requires_both_fields() {
    let errors = LoginForm::default().validate().unwrap_err();
    assert_eq!(field_names(&errors), vec!["username", "password"]);
}

#[test]
fn login_trims_the_username() {
    let form = LoginForm {
        username: "  vera  ".to_owned(),
        password: "secret".to_owned(),
    };
    let credentials = form.validate().expect("valid");
    assert_eq!(credentials.username, "vera");
    assert_eq!(credentials.password, "secret");
}

#[test]
fn login_rejects_whitespace_only_username() {
    let form = LoginForm {
        username: "   ".to_owned(),
        password: "secret".to_owned(),
    };
    let errors = form.validate().unwrap_err();
    assert_eq!(field_names(&errors), vec!["username"]);
}

// =============================================================
// Sign-up form
// =============================================================

#[test]
fn sign_up_accepts_a_valid_form() {
    let payload = valid_sign_up().validate(YEAR).expect("valid");
    assert_eq!(payload.username, "vera");
    assert_eq!(payload.birthday, "2000-05-14");
}

#[test]
fn sign_up_rejects_short_username() {
    let mut form = valid_sign_up();
    form.username = "ab".to_owned();
    let errors = form.validate(YEAR).unwrap_err();
    assert_eq!(field_names(&errors), vec!["username"]);
}

#[test]
fn sign_up_rejects_password_without_digit() {
    let mut form = valid_sign_up();
    form.password = "Gamer$$$".to_owned();
    form.password_confirmation = form.password.clone();
    let errors = form.validate(YEAR).unwrap_err();
    assert_eq!(field_names(&errors), vec!["password"]);
}

#[test]
fn sign_up_rejects_password_without_special_char() {
    let mut form = valid_sign_up();
    form.password = "Gamer123".to_owned();
    form.password_confirmation = form.password.clone();
    let errors = form.validate(YEAR).unwrap_err();
    assert_eq!(field_names(&errors), vec!["password"]);
}

#[test]
fn sign_up_rejects_password_without_letter() {
    let mut form = valid_sign_up();
    form.password = "12345$".to_owned();
    form.password_confirmation = form.password.clone();
    let errors = form.validate(YEAR).unwrap_err();
    assert_eq!(field_names(&errors), vec!["password"]);
}

#[test]
fn sign_up_rejects_too_short_password() {
    let mut form = valid_sign_up();
    form.password = "a1$".to_owned();
    form.password_confirmation = form.password.clone();
    let errors = form.validate(YEAR).unwrap_err();
    assert_eq!(field_names(&errors), vec!["password"]);
}

#[test]
fn sign_up_rejects_mismatched_confirmation() {
    let mut form = valid_sign_up();
    form.password_confirmation = "Other123$".to_owned();
    let errors = form.validate(YEAR).unwrap_err();
    assert_eq!(field_names(&errors), vec!["password_confirmation"]);
    assert_eq!(errors[0].message, "Passwords must match");
}

#[test]
fn sign_up_rejects_underage_birthday() {
    let mut form = valid_sign_up();
    form.birthday = "2015-01-01".to_owned();
    let errors = form.validate(YEAR).unwrap_err();
    assert_eq!(field_names(&errors), vec!["birthday"]);
}

#[test]
fn sign_up_accepts_exactly_eighteen_years() {
    let mut form = valid_sign_up();
    form.birthday = format!("{}-01-01", YEAR - 18);
    assert!(form.validate(YEAR).is_ok());
}

#[test]
fn sign_up_rejects_missing_or_garbled_birthday() {
    let mut form = valid_sign_up();
    form.birthday = String::new();
    assert_eq!(field_names(&form.validate(YEAR).unwrap_err()), vec!["birthday"]);

    form.birthday = "yesterday".to_owned();
    assert_eq!(field_names(&form.validate(YEAR).unwrap_err()), vec!["birthday"]);
}

#[test]
fn sign_up_reports_all_failing_fields_at_once() {
    let form = SignUpForm {
        username: "x".to_owned(),
        password: "weak".to_owned(),
        password_confirmation: "different".to_owned(),
        birthday: String::new(),
    };
    let errors = form.validate(YEAR).unwrap_err();
    assert_eq!(
        field_names(&errors),
        vec!["username", "password", "password_confirmation", "birthday"]
    );
}

// =============================================================
// Photo upload form
// =============================================================

#[test]
fn add_photo_requires_a_file() {
    let errors = AddPhotoForm::default().validate().unwrap_err();
    assert_eq!(field_names(&errors), vec!["file"]);
}

#[test]
fn parse_tags_splits_trims_and_drops_empties() {
    assert_eq!(parse_tags("sea, sunset , ,harbor,"), vec!["sea", "sunset", "harbor"]);
    assert!(parse_tags("").is_empty());
    assert!(parse_tags(" , ,").is_empty());
}
