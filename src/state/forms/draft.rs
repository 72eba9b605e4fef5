//! Application draft: the in-progress form values

use super::field::FieldName;
use serde::{Deserialize, Serialize};

/// Value of the previous-internship radio that reveals the description field
pub const INTERNSHIP_YES: &str = "yes";

/// Current values of every form field. All values are kept as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationDraft {
    pub full_name: String,
    pub mobile_number: String,
    pub email: String,
    pub date_of_birth: String,
    pub gender: String,
    pub state: String,
    pub city: String,
    pub full_address: String,
    pub pin_code: String,
    pub college_name: String,
    pub course_name: String,
    pub education_level: String,
    pub domain_name: String,
    pub preferred_contact: String,
    pub cv_url: String,
    pub duration: String,
    pub tpo_name: String,
    pub tpo_email: String,
    pub tpo_mobile: String,
    pub previous_internship: String,
    pub internship_description: String,
}

impl ApplicationDraft {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::FullName => &self.full_name,
            FieldName::MobileNumber => &self.mobile_number,
            FieldName::Email => &self.email,
            FieldName::DateOfBirth => &self.date_of_birth,
            FieldName::Gender => &self.gender,
            FieldName::State => &self.state,
            FieldName::City => &self.city,
            FieldName::FullAddress => &self.full_address,
            FieldName::PinCode => &self.pin_code,
            FieldName::CollegeName => &self.college_name,
            FieldName::CourseName => &self.course_name,
            FieldName::EducationLevel => &self.education_level,
            FieldName::DomainName => &self.domain_name,
            FieldName::PreferredContact => &self.preferred_contact,
            FieldName::CvUrl => &self.cv_url,
            FieldName::Duration => &self.duration,
            FieldName::TpoName => &self.tpo_name,
            FieldName::TpoEmail => &self.tpo_email,
            FieldName::TpoMobile => &self.tpo_mobile,
            FieldName::PreviousInternship => &self.previous_internship,
            FieldName::InternshipDescription => &self.internship_description,
        }
    }

    pub fn get_mut(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::FullName => &mut self.full_name,
            FieldName::MobileNumber => &mut self.mobile_number,
            FieldName::Email => &mut self.email,
            FieldName::DateOfBirth => &mut self.date_of_birth,
            FieldName::Gender => &mut self.gender,
            FieldName::State => &mut self.state,
            FieldName::City => &mut self.city,
            FieldName::FullAddress => &mut self.full_address,
            FieldName::PinCode => &mut self.pin_code,
            FieldName::CollegeName => &mut self.college_name,
            FieldName::CourseName => &mut self.course_name,
            FieldName::EducationLevel => &mut self.education_level,
            FieldName::DomainName => &mut self.domain_name,
            FieldName::PreferredContact => &mut self.preferred_contact,
            FieldName::CvUrl => &mut self.cv_url,
            FieldName::Duration => &mut self.duration,
            FieldName::TpoName => &mut self.tpo_name,
            FieldName::TpoEmail => &mut self.tpo_email,
            FieldName::TpoMobile => &mut self.tpo_mobile,
            FieldName::PreviousInternship => &mut self.previous_internship,
            FieldName::InternshipDescription => &mut self.internship_description,
        }
    }

    /// Whether the internship description control is shown.
    ///
    /// Single source of truth for the conditional field: rendering and
    /// field navigation both go through [`ApplicationDraft::is_visible`].
    pub fn shows_internship_description(&self) -> bool {
        self.previous_internship == INTERNSHIP_YES
    }

    pub fn is_visible(&self, field: FieldName) -> bool {
        match field {
            FieldName::InternshipDescription => self.shows_internship_description(),
            _ => true,
        }
    }

    /// Fields currently shown, in display order
    pub fn visible_fields(&self) -> Vec<FieldName> {
        FieldName::ALL
            .into_iter()
            .filter(|f| self.is_visible(*f))
            .collect()
    }

    /// True when every field is the empty string
    pub fn is_blank(&self) -> bool {
        FieldName::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}
