//! Registration form contract.
//!
//! [`REGISTRATION_FIELDS`] is the single description of the form: the dialog
//! renders it (patterns become native `pattern` attributes) and
//! [`RegistrationDraft::validate`] checks a draft against it. There is no
//! account service behind the form, so [`submit`] stops at
//! [`RegistrationError::NotImplemented`] once the draft is valid.

use std::collections::BTreeMap;

use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    FullName,
    PassportSeries,
    NationalId,
    Phone,
    Address,
    Gender,
}

impl FieldId {
    pub fn label(self) -> &'static str {
        match self {
            FieldId::FullName => "Full name",
            FieldId::PassportSeries => "Passport series",
            FieldId::NationalId => "JSHSHIR",
            FieldId::Phone => "Phone number",
            FieldId::Address => "Address",
            FieldId::Gender => "Gender",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputKind {
    Text,
    Tel,
    /// `(value, label)` pairs; the value is what gets validated.
    Choice(&'static [(&'static str, &'static str)]),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub id: FieldId,
    pub placeholder: &'static str,
    pub kind: InputKind,
    pub pattern: Option<&'static str>,
    pub required: bool,
    /// Shown under the field when the value does not match.
    pub hint: &'static str,
    /// Shares a row with its neighbour.
    pub half_width: bool,
}

pub const GENDERS: &[(&str, &str)] = &[("male", "Male"), ("female", "Female")];

// Digits are written as [0-9]: the browser's \d is ASCII only, regex's is not.
pub static REGISTRATION_FIELDS: [FieldSpec; 6] = [
    FieldSpec {
        id: FieldId::FullName,
        placeholder: "Full Name",
        kind: InputKind::Text,
        pattern: Some(r"^[A-Za-z\s]{2,}$"),
        required: true,
        hint: "Use at least 2 letters or spaces.",
        half_width: true,
    },
    FieldSpec {
        id: FieldId::PassportSeries,
        placeholder: "Passport Series",
        kind: InputKind::Text,
        pattern: Some(r"^[A-Z]{2}[0-9]{7}$"),
        required: true,
        hint: "Use 2 uppercase letters followed by 7 digits, e.g. AB1234567.",
        half_width: true,
    },
    FieldSpec {
        id: FieldId::NationalId,
        placeholder: "JSHSHIR (16 digits)",
        kind: InputKind::Text,
        pattern: Some(r"^[0-9]{16}$"),
        required: true,
        hint: "Use exactly 16 digits.",
        half_width: false,
    },
    FieldSpec {
        id: FieldId::Phone,
        placeholder: "Phone Number",
        kind: InputKind::Tel,
        pattern: Some(r"^\+998[0-9]{9}$"),
        required: true,
        hint: "Use +998 followed by 9 digits.",
        half_width: false,
    },
    FieldSpec {
        id: FieldId::Address,
        placeholder: "Address",
        kind: InputKind::Text,
        pattern: None,
        required: true,
        hint: "",
        half_width: false,
    },
    FieldSpec {
        id: FieldId::Gender,
        placeholder: "Select Gender",
        kind: InputKind::Choice(GENDERS),
        pattern: None,
        required: true,
        hint: "Choose one of the listed options.",
        half_width: false,
    },
];

static MATCHERS: Lazy<BTreeMap<FieldId, Regex>> = Lazy::new(|| {
    REGISTRATION_FIELDS
        .iter()
        .filter_map(|field| {
            field
                .pattern
                .map(|p| (field.id, Regex::new(p).expect("registration patterns are valid regexes")))
        })
        .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    Missing,
    Mismatch,
}

impl FieldErrorKind {
    fn describe(self) -> &'static str {
        match self {
            FieldErrorKind::Missing => "is required",
            FieldErrorKind::Mismatch => "has the wrong format",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} {}", .field.label(), .kind.describe())]
pub struct FieldError {
    pub field: FieldId,
    pub kind: FieldErrorKind,
}

impl FieldError {
    /// Text shown next to the offending input.
    pub fn hint(&self) -> &'static str {
        match self.kind {
            FieldErrorKind::Missing => "This field is required.",
            FieldErrorKind::Mismatch => spec_for(self.field).hint,
        }
    }
}

pub fn spec_for(id: FieldId) -> &'static FieldSpec {
    REGISTRATION_FIELDS
        .iter()
        .find(|field| field.id == id)
        .expect("every field id is listed in REGISTRATION_FIELDS")
}

impl FieldSpec {
    /// Same outcome as the browser's constraint validation: empty values only
    /// fail when required, patterns only apply to non-empty values.
    pub fn check(&self, value: &str) -> Result<(), FieldError> {
        let fail = |kind| Err(FieldError { field: self.id, kind });

        if value.is_empty() {
            return if self.required { fail(FieldErrorKind::Missing) } else { Ok(()) };
        }

        if let InputKind::Choice(options) = self.kind {
            if !options.iter().any(|(option, _)| *option == value) {
                return fail(FieldErrorKind::Mismatch);
            }
        }

        match MATCHERS.get(&self.id) {
            Some(matcher) if !matcher.is_match(value) => fail(FieldErrorKind::Mismatch),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    fn from_value(value: &str) -> Option<Self> {
        match value {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }
}

/// A draft that passed every field check, shaped as an account service would
/// receive it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub full_name: String,
    pub passport_series: String,
    pub national_id: String,
    pub phone: String,
    pub address: String,
    pub gender: Gender,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationDraft {
    values: BTreeMap<FieldId, String>,
}

impl RegistrationDraft {
    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn get(&self, field: FieldId) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Checks every field in form order and reports all failures at once.
    pub fn validate(&self) -> Result<Registration, Vec<FieldError>> {
        let errors: Vec<FieldError> = REGISTRATION_FIELDS
            .iter()
            .filter_map(|field| field.check(self.get(field.id)).err())
            .collect();
        if !errors.is_empty() {
            return Err(errors);
        }

        let gender = Gender::from_value(self.get(FieldId::Gender)).ok_or_else(|| {
            vec![FieldError { field: FieldId::Gender, kind: FieldErrorKind::Mismatch }]
        })?;

        Ok(Registration {
            full_name: self.get(FieldId::FullName).to_string(),
            passport_series: self.get(FieldId::PassportSeries).to_string(),
            national_id: self.get(FieldId::NationalId).to_string(),
            phone: self.get(FieldId::Phone).to_string(),
            address: self.get(FieldId::Address).to_string(),
            gender,
        })
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistrationError {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(Vec<FieldError>),
    #[error("registration is not available yet")]
    NotImplemented,
}

/// Hands a validated registration to the account service. None exists yet.
pub fn submit_registration(_registration: &Registration) -> Result<(), RegistrationError> {
    Err(RegistrationError::NotImplemented)
}

pub fn submit(draft: &RegistrationDraft) -> Result<(), RegistrationError> {
    let registration = draft.validate().map_err(RegistrationError::Invalid)?;
    info!("Registration form passed validation");
    submit_registration(&registration)
}
