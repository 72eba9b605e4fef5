//! Form field descriptors for the application form

/// A selectable value for select and radio controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl ChoiceOption {
    const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

pub const GENDER_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption::new("male", "Male"),
    ChoiceOption::new("female", "Female"),
    ChoiceOption::new("other", "Other"),
];

pub const CONTACT_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption::new("email", "Email"),
    ChoiceOption::new("phone", "Phone"),
    ChoiceOption::new("whatsapp", "WhatsApp"),
];

pub const INTERNSHIP_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption::new("yes", "Yes"),
    ChoiceOption::new("no", "No"),
];

/// Length of a complete `YYYY-MM-DD` date
const DATE_LEN: usize = 10;

/// Input control kind for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Masked `YYYY-MM-DD` entry
    Date,
    Select(&'static [ChoiceOption]),
    Radio(&'static [ChoiceOption]),
    TextArea,
}

impl FieldKind {
    /// Options for choice controls (empty for free-text controls)
    pub fn options(&self) -> &'static [ChoiceOption] {
        match self {
            FieldKind::Select(options) | FieldKind::Radio(options) => options,
            FieldKind::Text | FieldKind::Date | FieldKind::TextArea => &[],
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self, FieldKind::Select(_) | FieldKind::Radio(_))
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, FieldKind::TextArea)
    }

    /// Value after typing `c` at the end of `current`, or None if the
    /// control rejects the character
    pub fn append_char(&self, current: &str, c: char) -> Option<String> {
        match self {
            FieldKind::Text | FieldKind::TextArea if !c.is_control() => {
                let mut value = current.to_string();
                value.push(c);
                Some(value)
            }
            FieldKind::Date => append_date_char(current, c),
            _ => None,
        }
    }

    /// Resolve a shortcut key to an option value (first letter of the label)
    pub fn option_for_key(&self, c: char) -> Option<&'static str> {
        let key = c.to_ascii_lowercase();
        self.options()
            .iter()
            .find(|o| o.label.chars().next().map(|f| f.to_ascii_lowercase()) == Some(key))
            .map(|o| o.value)
    }

    /// Step through the options starting from `current`. The empty value sits
    /// before the first option so a choice can be cleared by cycling.
    pub fn cycle(&self, current: &str, forward: bool) -> &'static str {
        let options = self.options();
        if options.is_empty() {
            return "";
        }
        // Position 0 is "not selected", positions 1..=len are options
        let slots = options.len() + 1;
        let position = options
            .iter()
            .position(|o| o.value == current)
            .map(|i| i + 1)
            .unwrap_or(0);
        let next = if forward {
            (position + 1) % slots
        } else {
            (position + slots - 1) % slots
        };
        if next == 0 {
            ""
        } else {
            options[next - 1].value
        }
    }

    /// Human-readable label for a stored choice value
    pub fn option_label(&self, value: &str) -> Option<&'static str> {
        self.options()
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label)
    }
}

/// Digits fill `YYYY-MM-DD` left to right; separators are inserted as needed
fn append_date_char(current: &str, c: char) -> Option<String> {
    let len = current.len();
    if len >= DATE_LEN {
        return None;
    }
    let at_separator = len == 4 || len == 7;
    let mut value = current.to_string();
    match c {
        '-' if at_separator => value.push('-'),
        '0'..='9' => {
            if at_separator {
                value.push('-');
            }
            value.push(c);
        }
        _ => return None,
    }
    Some(value)
}

/// Form sections, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Personal,
    Address,
    Education,
    Internship,
    PreviousInternship,
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Personal => "Personal Information",
            Self::Address => "Address Details",
            Self::Education => "Educational Details",
            Self::Internship => "Internship Details",
            Self::PreviousInternship => "Previous Internship Experience",
        }
    }
}

/// Every field of the application form. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    FullName,
    MobileNumber,
    Email,
    DateOfBirth,
    Gender,
    State,
    City,
    FullAddress,
    PinCode,
    CollegeName,
    CourseName,
    EducationLevel,
    DomainName,
    PreferredContact,
    CvUrl,
    Duration,
    TpoName,
    TpoEmail,
    TpoMobile,
    PreviousInternship,
    InternshipDescription,
}

impl FieldName {
    pub const ALL: [FieldName; 21] = [
        Self::FullName,
        Self::MobileNumber,
        Self::Email,
        Self::DateOfBirth,
        Self::Gender,
        Self::State,
        Self::City,
        Self::FullAddress,
        Self::PinCode,
        Self::CollegeName,
        Self::CourseName,
        Self::EducationLevel,
        Self::DomainName,
        Self::PreferredContact,
        Self::CvUrl,
        Self::Duration,
        Self::TpoName,
        Self::TpoEmail,
        Self::TpoMobile,
        Self::PreviousInternship,
        Self::InternshipDescription,
    ];

    /// Stable machine key, used in logs
    pub fn key(&self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::MobileNumber => "mobile_number",
            Self::Email => "email",
            Self::DateOfBirth => "date_of_birth",
            Self::Gender => "gender",
            Self::State => "state",
            Self::City => "city",
            Self::FullAddress => "full_address",
            Self::PinCode => "pin_code",
            Self::CollegeName => "college_name",
            Self::CourseName => "course_name",
            Self::EducationLevel => "education_level",
            Self::DomainName => "domain_name",
            Self::PreferredContact => "preferred_contact",
            Self::CvUrl => "cv_url",
            Self::Duration => "duration",
            Self::TpoName => "tpo_name",
            Self::TpoEmail => "tpo_email",
            Self::TpoMobile => "tpo_mobile",
            Self::PreviousInternship => "previous_internship",
            Self::InternshipDescription => "internship_description",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name *",
            Self::MobileNumber => "Mobile Number *",
            Self::Email => "Email Address *",
            Self::DateOfBirth => "Date of Birth *",
            Self::Gender => "Gender *",
            Self::State => "State *",
            Self::City => "City *",
            Self::FullAddress => "Full Address *",
            Self::PinCode => "Pin Code *",
            Self::CollegeName => "College/University Name *",
            Self::CourseName => "Course Name *",
            Self::EducationLevel => "Education Level *",
            Self::DomainName => "Domain Name *",
            Self::PreferredContact => "Preferred Contact Method *",
            Self::CvUrl => "CV/Resume URL *",
            Self::Duration => "Duration *",
            Self::TpoName => "TPO Name *",
            Self::TpoEmail => "TPO Email *",
            Self::TpoMobile => "TPO Mobile Number *",
            Self::PreviousInternship => "Have you completed any previous internship? *",
            Self::InternshipDescription => "Describe your internship responsibilities",
        }
    }

    /// Hint shown while the field is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::FullName => "Enter your full name",
            Self::MobileNumber | Self::TpoMobile => "1234567890",
            Self::Email => "your.email@example.com",
            Self::DateOfBirth => "YYYY-MM-DD",
            Self::Gender => "Select gender",
            Self::State => "State",
            Self::City => "City",
            Self::FullAddress => "Full address",
            Self::PinCode => "123456",
            Self::CollegeName => "University or College name",
            Self::CourseName => "e.g., Computer Science",
            Self::EducationLevel => "e.g., B.Tech, B.Sc, MBA",
            Self::DomainName => "e.g., Software Development, Marketing, Design",
            Self::PreferredContact => "Select method",
            Self::CvUrl => "https://drive.google.com/...",
            Self::Duration => "e.g., 3 months, 6 months",
            Self::TpoName => "Training & Placement Officer name",
            Self::TpoEmail => "tpo@college.edu",
            Self::PreviousInternship => "Select yes or no",
            Self::InternshipDescription => {
                "Describe your previous internship experience, responsibilities, and what you learned..."
            }
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::DateOfBirth => FieldKind::Date,
            Self::Gender => FieldKind::Select(GENDER_OPTIONS),
            Self::PreferredContact => FieldKind::Select(CONTACT_OPTIONS),
            Self::PreviousInternship => FieldKind::Radio(INTERNSHIP_OPTIONS),
            Self::InternshipDescription => FieldKind::TextArea,
            _ => FieldKind::Text,
        }
    }

    pub fn section(&self) -> Section {
        match self {
            Self::FullName
            | Self::MobileNumber
            | Self::Email
            | Self::DateOfBirth
            | Self::Gender => Section::Personal,
            Self::State | Self::City | Self::FullAddress | Self::PinCode => Section::Address,
            Self::CollegeName | Self::CourseName | Self::EducationLevel => Section::Education,
            Self::DomainName
            | Self::PreferredContact
            | Self::CvUrl
            | Self::Duration
            | Self::TpoName
            | Self::TpoEmail
            | Self::TpoMobile => Section::Internship,
            Self::PreviousInternship | Self::InternshipDescription => {
                Section::PreviousInternship
            }
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Self::InternshipDescription)
    }

    /// Positive feedback for filled, error-free personal fields
    pub fn success_hint(&self) -> Option<&'static str> {
        match self {
            Self::FullName | Self::MobileNumber | Self::Email => Some("Looks good!"),
            Self::DateOfBirth | Self::Gender => Some("Confirmed!"),
            _ => None,
        }
    }
}
