// Immutable draft snapshot accumulated across the wizard pages

use serde::{Deserialize, Serialize};

use crate::wizard::types::Coordinates;

/// The in-progress registration record.
///
/// A draft is never mutated in place: every field edit produces a fresh
/// snapshot via [`RegistrationDraft::apply`]. Text fields hold the raw form
/// input; parsing and range checks happen in the page validators so that a
/// half-typed value never poisons the snapshot itself. The draft is created
/// empty when the wizard starts and handed off by value exactly once, to the
/// account-creation collaborator, when the submission gate passes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationDraft {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,

    pub national_id: String,
    pub date_of_birth: String,
    pub phone: String,

    pub province: String,
    pub regency: String,
    pub district: String,
    pub village: String,
    pub street: String,
    pub postal_code: String,

    pub household_size: String,
    pub blood_type: String,
    pub medical_notes: String,

    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,

    pub accepted_terms: bool,
    pub share_location: bool,
    pub coordinates: Option<Coordinates>,
}

/// A single field edit event. Applying the same edit twice yields an
/// identical snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DraftEdit {
    FullName(String),
    Email(String),
    Password(String),
    ConfirmPassword(String),
    NationalId(String),
    DateOfBirth(String),
    Phone(String),
    Province(String),
    Regency(String),
    District(String),
    Village(String),
    Street(String),
    PostalCode(String),
    HouseholdSize(String),
    BloodType(String),
    MedicalNotes(String),
    EmergencyContactName(String),
    EmergencyContactPhone(String),
    AcceptedTerms(bool),
    ShareLocation(bool),
}

impl RegistrationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the successor snapshot with one field replaced.
    pub fn apply(&self, edit: &DraftEdit) -> RegistrationDraft {
        let mut next = self.clone();
        match edit {
            DraftEdit::FullName(value) => next.full_name = value.clone(),
            DraftEdit::Email(value) => next.email = value.clone(),
            DraftEdit::Password(value) => next.password = value.clone(),
            DraftEdit::ConfirmPassword(value) => next.confirm_password = value.clone(),
            DraftEdit::NationalId(value) => next.national_id = value.clone(),
            DraftEdit::DateOfBirth(value) => next.date_of_birth = value.clone(),
            DraftEdit::Phone(value) => next.phone = value.clone(),
            DraftEdit::Province(value) => next.province = value.clone(),
            DraftEdit::Regency(value) => next.regency = value.clone(),
            DraftEdit::District(value) => next.district = value.clone(),
            DraftEdit::Village(value) => next.village = value.clone(),
            DraftEdit::Street(value) => next.street = value.clone(),
            DraftEdit::PostalCode(value) => next.postal_code = value.clone(),
            DraftEdit::HouseholdSize(value) => next.household_size = value.clone(),
            DraftEdit::BloodType(value) => next.blood_type = value.clone(),
            DraftEdit::MedicalNotes(value) => next.medical_notes = value.clone(),
            DraftEdit::EmergencyContactName(value) => next.emergency_contact_name = value.clone(),
            DraftEdit::EmergencyContactPhone(value) => next.emergency_contact_phone = value.clone(),
            DraftEdit::AcceptedTerms(value) => next.accepted_terms = *value,
            DraftEdit::ShareLocation(value) => next.share_location = *value,
        }
        next
    }

    /// Successor snapshot with device coordinates filled in. Used by the
    /// submission gate once the location collaborator has answered; not an
    /// edit a user can type.
    pub fn with_coordinates(&self, coordinates: Coordinates) -> RegistrationDraft {
        let mut next = self.clone();
        next.coordinates = Some(coordinates);
        next
    }
}
