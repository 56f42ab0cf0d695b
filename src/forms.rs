//! Typed form state for the auth and upload pages.
//!
//! Each page declares a plain struct for its fields and validates it
//! against an explicit list of named checks, producing a typed payload
//! before the API layer is ever invoked. Loose field bags never cross a
//! module boundary.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

/// Validation failure for a single named field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

// =============================================================
// Login
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Credentials ready for the login call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<Credentials, Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.username.trim().is_empty() {
            errors.push(FieldError::new("username", "Username is required"));
        }
        if self.password.is_empty() {
            errors.push(FieldError::new("password", "Password is required"));
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Credentials {
            username: self.username.trim().to_owned(),
            password: self.password.clone(),
        })
    }
}

// =============================================================
// Sign-up
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub username: String,
    pub password: String,
    pub password_confirmation: String,
    /// `YYYY-MM-DD`, as produced by a date input.
    pub birthday: String,
}

/// Payload for the sign-up call.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SignUpPayload {
    pub username: String,
    pub password: String,
    pub birthday: String,
}

/// Characters that satisfy the "one special character" password rule.
const PASSWORD_SPECIALS: &str = "@$!%*?&";

impl SignUpForm {
    /// Field checks, applied in declaration order. Every failing check
    /// contributes its own error so the form can mark all bad fields at
    /// once.
    const CHECKS: &'static [fn(&Self, i32) -> Option<FieldError>] = &[
        Self::check_username,
        Self::check_password,
        Self::check_confirmation,
        Self::check_birthday,
    ];

    pub fn validate(&self, current_year: i32) -> Result<SignUpPayload, Vec<FieldError>> {
        let errors: Vec<FieldError> = Self::CHECKS
            .iter()
            .filter_map(|check| check(self, current_year))
            .collect();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(SignUpPayload {
            username: self.username.trim().to_owned(),
            password: self.password.clone(),
            birthday: self.birthday.clone(),
        })
    }

    fn check_username(&self, _current_year: i32) -> Option<FieldError> {
        let len = self.username.trim().chars().count();
        if (3..=50).contains(&len) {
            None
        } else {
            Some(FieldError::new("username", "Username must be 3 to 50 characters"))
        }
    }

    fn check_password(&self, _current_year: i32) -> Option<FieldError> {
        if password_ok(&self.password) {
            None
        } else {
            Some(FieldError::new(
                "password",
                "Password needs at least 5 characters with a letter, a number, and a special character",
            ))
        }
    }

    fn check_confirmation(&self, _current_year: i32) -> Option<FieldError> {
        if self.password_confirmation == self.password {
            None
        } else {
            Some(FieldError::new("password_confirmation", "Passwords must match"))
        }
    }

    fn check_birthday(&self, current_year: i32) -> Option<FieldError> {
        let Some(year) = birth_year(&self.birthday) else {
            return Some(FieldError::new("birthday", "Birthday is required"));
        };
        if current_year - year >= 18 {
            None
        } else {
            Some(FieldError::new("birthday", "You must be at least 18 years old"))
        }
    }
}

fn password_ok(password: &str) -> bool {
    password.chars().count() >= 5
        && password.chars().any(char::is_alphabetic)
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}

/// Birth year out of a `YYYY-MM-DD` date-input value.
fn birth_year(value: &str) -> Option<i32> {
    let year = value.split('-').next()?;
    if year.is_empty() {
        return None;
    }
    year.parse().ok()
}

/// Current four-digit year from the browser clock. Off wasm there is no
/// clock worth consulting; pages only run in the browser.
#[must_use]
pub fn current_year() -> i32 {
    #[cfg(target_arch = "wasm32")]
    {
        #[allow(clippy::cast_possible_wrap)]
        {
            js_sys::Date::new_0().get_full_year() as i32
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0
    }
}

// =============================================================
// Photo upload
// =============================================================

/// Upload form fields as read from the DOM at submit time. The file handle
/// is browser-owned, so this struct is built transiently per submit rather
/// than held in a signal.
#[derive(Clone, Debug, Default)]
pub struct AddPhotoForm {
    pub file: Option<web_sys::File>,
    pub description: String,
    pub tags: String,
}

/// Upload payload with the tag list split out.
#[derive(Clone, Debug)]
pub struct PhotoUpload {
    pub file: web_sys::File,
    pub description: String,
    pub tags: Vec<String>,
}

impl AddPhotoForm {
    pub fn validate(&self) -> Result<PhotoUpload, Vec<FieldError>> {
        let Some(file) = self.file.clone() else {
            return Err(vec![FieldError::new("file", "Choose a file to upload")]);
        };
        Ok(PhotoUpload {
            file,
            description: self.description.trim().to_owned(),
            tags: parse_tags(&self.tags),
        })
    }
}

/// Split a free-text tag list on commas, trimming and dropping empties.
#[must_use]
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
