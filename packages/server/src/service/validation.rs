use std::sync::LazyLock;

use common::{Division, Grade, NewRegistration};
use regex::Regex;

use super::error::FieldError;
use crate::models::registration::CreateRegistrationRequest;

/// Check a submission and turn it into a [`NewRegistration`].
///
/// Every invalid field is reported, not just the first one.
pub fn validate_registration(
    payload: &CreateRegistrationRequest,
) -> Result<NewRegistration, Vec<FieldError>> {
    let mut errors = Vec::new();

    let student_name = non_blank(&payload.student_name);
    if student_name.is_none() {
        errors.push(FieldError::new("studentName", "Full name is required"));
    }

    let grade = match non_blank(&payload.grade) {
        None => {
            errors.push(FieldError::new("grade", "Grade is required"));
            None
        }
        Some(raw) => match raw.parse::<Grade>() {
            Ok(grade) => Some(grade),
            Err(_) => {
                errors.push(FieldError::new("grade", "Invalid grade"));
                None
            }
        },
    };

    let division = match non_blank(&payload.division) {
        None => {
            errors.push(FieldError::new("division", "Division is required"));
            None
        }
        Some(raw) => match raw.parse::<Division>() {
            Ok(division) => Some(division),
            Err(_) => {
                errors.push(FieldError::new("division", "Invalid division"));
                None
            }
        },
    };

    let email = non_blank(&payload.email);
    if let Some(email) = email
        && !is_valid_email(email)
    {
        errors.push(FieldError::new("email", "Invalid email format"));
    }

    let committee = non_blank(&payload.committee);
    if committee.is_none() {
        errors.push(FieldError::new("committee", "Committee selection is required"));
    }

    match (student_name, grade, division, committee) {
        (Some(student_name), Some(grade), Some(division), Some(committee)) if errors.is_empty() => {
            Ok(NewRegistration {
                student_name: student_name.to_string(),
                grade,
                division,
                email: email.map(str::to_string),
                committee: committee.to_string(),
                suggestions: non_blank(&payload.suggestions).map(str::to_string),
            })
        }
        _ => Err(errors),
    }
}

/// Trimmed value, or `None` if absent or only whitespace.
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Dot-separated local part without empty segments, alphanumeric-led domain
/// labels and an alphabetic TLD of at least two letters.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[A-Za-z0-9_'+\-]+\.)*[A-Za-z0-9_'+\-]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$",
    )
    .expect("email pattern is valid")
});

fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
