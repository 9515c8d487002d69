//! Local credential validation, run before any collaborator call.

use std::sync::LazyLock;

use regex::Regex;

use crate::failure::Failure;

const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

/// Validate a login/register form. The first problem found wins.
pub(super) fn validate(email: &str, password: &str) -> Result<(), Failure> {
    if email.is_empty() {
        return Err(Failure::Validation("email must not be empty".into()));
    }
    if !EMAIL_SHAPE.is_match(email) {
        return Err(Failure::Validation(format!(
            "'{email}' is not a valid email address"
        )));
    }
    if password.is_empty() {
        return Err(Failure::Validation("password must not be empty".into()));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(Failure::Validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}
