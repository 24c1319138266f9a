// Core types for the registration wizard state machine

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Wizard pages in presentation order. The chain is strictly linear:
/// a draft advances one page at a time and never skips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardPage {
    /// Credentials: full name, email, password and confirmation
    Account,
    /// Identity: national ID, date of birth, phone number
    Identity,
    /// Residential address sub-fields
    Address,
    /// Household size and medical information
    Household,
    /// Emergency contact; consent boxes live here and submission leaves from here
    Contact,
}

impl WizardPage {
    pub const COUNT: usize = 5;

    pub fn all() -> [WizardPage; Self::COUNT] {
        [
            WizardPage::Account,
            WizardPage::Identity,
            WizardPage::Address,
            WizardPage::Household,
            WizardPage::Contact,
        ]
    }

    /// Position of the page in the chain, in [0, 4].
    pub fn index(self) -> usize {
        match self {
            WizardPage::Account => 0,
            WizardPage::Identity => 1,
            WizardPage::Address => 2,
            WizardPage::Household => 3,
            WizardPage::Contact => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<WizardPage> {
        Self::all().get(index).copied()
    }

    pub fn next(self) -> Option<WizardPage> {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(self) -> Option<WizardPage> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_first(self) -> bool {
        self.index() == 0
    }

    pub fn is_last(self) -> bool {
        self.index() == Self::COUNT - 1
    }
}

impl fmt::Display for WizardPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WizardPage::Account => "account",
            WizardPage::Identity => "identity",
            WizardPage::Address => "address",
            WizardPage::Household => "household",
            WizardPage::Contact => "contact",
        };
        write!(f, "{name}")
    }
}

/// Names of the draft fields a validation message can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    FullName,
    Email,
    Password,
    ConfirmPassword,
    NationalId,
    DateOfBirth,
    Phone,
    Province,
    Regency,
    District,
    Village,
    Street,
    PostalCode,
    HouseholdSize,
    BloodType,
    MedicalNotes,
    EmergencyContactName,
    EmergencyContactPhone,
    AcceptedTerms,
    Location,
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldName::FullName => "full_name",
            FieldName::Email => "email",
            FieldName::Password => "password",
            FieldName::ConfirmPassword => "confirm_password",
            FieldName::NationalId => "national_id",
            FieldName::DateOfBirth => "date_of_birth",
            FieldName::Phone => "phone",
            FieldName::Province => "province",
            FieldName::Regency => "regency",
            FieldName::District => "district",
            FieldName::Village => "village",
            FieldName::Street => "street",
            FieldName::PostalCode => "postal_code",
            FieldName::HouseholdSize => "household_size",
            FieldName::BloodType => "blood_type",
            FieldName::MedicalNotes => "medical_notes",
            FieldName::EmergencyContactName => "emergency_contact_name",
            FieldName::EmergencyContactPhone => "emergency_contact_phone",
            FieldName::AcceptedTerms => "accepted_terms",
            FieldName::Location => "location",
        };
        write!(f, "{name}")
    }
}

/// Field-to-message map produced by a failed validation pass.
///
/// The map is rebuilt wholesale on every advancement attempt and holds at
/// most one message per field: the first violated rule wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorMap(BTreeMap<FieldName, String>);

impl ValidationErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field unless one is already present.
    pub fn insert_first(&mut self, field: FieldName, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    /// Fold another map in, keeping existing entries on collision.
    pub fn merge(&mut self, other: ValidationErrorMap) {
        for (field, message) in other.0 {
            self.insert_first(field, message);
        }
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for ValidationErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Latitude/longitude pair yielded by the device location collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Identifier minted by the account-creation collaborator on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountId(pub String);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
