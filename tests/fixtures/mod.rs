/// Shared fixtures for the wizard integration tests: a known-good draft and
/// recording collaborator doubles.
use std::sync::Mutex;

use async_trait::async_trait;

use siaga_register::{
    AccountCreator, AccountId, CollaboratorError, Coordinates, DraftEdit, LocationError,
    LocationProvider, RegistrationDraft,
};

/// A draft that passes every page validator and both consent checks.
pub fn complete_draft() -> RegistrationDraft {
    RegistrationDraft::new()
        .apply(&DraftEdit::FullName("Ani Rahma".to_string()))
        .apply(&DraftEdit::Email("ani@example.com".to_string()))
        .apply(&DraftEdit::Password("correct-horse".to_string()))
        .apply(&DraftEdit::ConfirmPassword("correct-horse".to_string()))
        .apply(&DraftEdit::NationalId("1234567890123456".to_string()))
        .apply(&DraftEdit::DateOfBirth("1995-04-12".to_string()))
        .apply(&DraftEdit::Phone("081234567890".to_string()))
        .apply(&DraftEdit::Province("Jawa Barat".to_string()))
        .apply(&DraftEdit::Regency("Bandung".to_string()))
        .apply(&DraftEdit::District("Coblong".to_string()))
        .apply(&DraftEdit::Village("Dago".to_string()))
        .apply(&DraftEdit::Street("Jl. Ir. H. Juanda 42".to_string()))
        .apply(&DraftEdit::PostalCode("40135".to_string()))
        .apply(&DraftEdit::HouseholdSize("4".to_string()))
        .apply(&DraftEdit::BloodType("O+".to_string()))
        .apply(&DraftEdit::EmergencyContactName("Budi Santoso".to_string()))
        .apply(&DraftEdit::EmergencyContactPhone("081298765432".to_string()))
        .apply(&DraftEdit::AcceptedTerms(true))
}

/// Account collaborator double that records every hand-off.
pub struct RecordingAccountCreator {
    outcome: Result<AccountId, CollaboratorError>,
    calls: Mutex<Vec<RegistrationDraft>>,
}

impl RecordingAccountCreator {
    pub fn succeeding(account_id: &str) -> Self {
        Self {
            outcome: Ok(AccountId(account_id.to_string())),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(CollaboratorError::new(message)),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RegistrationDraft> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AccountCreator for RecordingAccountCreator {
    async fn create_account(
        &self,
        draft: RegistrationDraft,
    ) -> Result<AccountId, CollaboratorError> {
        self.calls.lock().unwrap().push(draft);
        self.outcome.clone()
    }
}

/// Location collaborator double with a fixed answer.
pub struct FixedLocationProvider {
    outcome: Result<Coordinates, LocationError>,
}

impl FixedLocationProvider {
    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self {
            outcome: Ok(Coordinates {
                latitude,
                longitude,
            }),
        }
    }

    pub fn denied() -> Self {
        Self {
            outcome: Err(LocationError::PermissionDenied),
        }
    }
}

#[async_trait]
impl LocationProvider for FixedLocationProvider {
    async fn current_location(&self) -> Result<Coordinates, LocationError> {
        self.outcome.clone()
    }
}
