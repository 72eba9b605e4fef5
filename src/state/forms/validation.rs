//! Submit-time validation of the application draft

use super::draft::ApplicationDraft;
use super::error_set::ErrorSet;
use super::field::FieldName;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// `something@something.something` with no whitespace anywhere
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is valid"));

const MOBILE_DIGITS: usize = 10;

/// Validate every field and return the complete error set.
///
/// Rules are evaluated independently per field; the result is meant to
/// replace any previous error set, never to be merged into it.
pub fn validate(draft: &ApplicationDraft) -> ErrorSet {
    let mut errors = ErrorSet::default();
    for field in FieldName::ALL {
        if let Some(message) = check_field(field, draft.get(field)) {
            errors.insert(field, message);
        }
    }
    tracing::debug!(invalid = errors.len(), "validated application draft");
    errors
}

/// Check a single field value, returning its message when invalid
pub fn check_field(field: FieldName, value: &str) -> Option<&'static str> {
    match field {
        _ if !field.is_required() => None,
        FieldName::MobileNumber => {
            if value.trim().is_empty() {
                Some("Please provide your mobile number")
            } else if !is_valid_mobile(value) {
                Some("Please provide a valid 10-digit mobile number")
            } else {
                None
            }
        }
        FieldName::Email => {
            if value.trim().is_empty() {
                Some("Please provide your email address")
            } else if !is_valid_email(value) {
                Some("Please provide a valid email address")
            } else {
                None
            }
        }
        // A date counts as given only once it is a complete calendar date
        FieldName::DateOfBirth => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .is_err()
            .then_some(missing_message(field)),
        FieldName::Gender | FieldName::PreferredContact | FieldName::PreviousInternship => {
            let known = field.kind().options().iter().any(|o| o.value == value);
            (!known).then_some(missing_message(field))
        }
        _ => value.trim().is_empty().then_some(missing_message(field)),
    }
}

/// Exactly ten digits once every non-digit character is stripped
pub fn is_valid_mobile(value: &str) -> bool {
    value.chars().filter(char::is_ascii_digit).count() == MOBILE_DIGITS
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value.trim())
}

fn missing_message(field: FieldName) -> &'static str {
    match field {
        FieldName::FullName => "Please provide your full name",
        FieldName::MobileNumber => "Please provide your mobile number",
        FieldName::Email => "Please provide your email address",
        FieldName::DateOfBirth => "Please provide your date of birth",
        FieldName::Gender => "Please select your gender",
        FieldName::State => "Please provide your state",
        FieldName::City => "Please provide your city",
        FieldName::FullAddress => "Please provide your full address",
        FieldName::PinCode => "Please provide your pin code",
        FieldName::CollegeName => "Please provide your college/university name",
        FieldName::CourseName => "Please provide your course name",
        FieldName::EducationLevel => "Please provide your education level",
        FieldName::DomainName => "Please provide your preferred domain",
        FieldName::PreferredContact => "Please select your preferred contact method",
        FieldName::CvUrl => "Please provide your CV/Resume URL",
        FieldName::Duration => "Please provide your preferred duration",
        FieldName::TpoName => "Please provide TPO name",
        FieldName::TpoEmail => "Please provide TPO email",
        FieldName::TpoMobile => "Please provide TPO mobile number",
        FieldName::PreviousInternship => {
            "Please select if you have previous internship experience"
        }
        FieldName::InternshipDescription => "",
    }
}
