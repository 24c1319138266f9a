// Mock collaborators for testing - no real services, every call recorded

use std::sync::Mutex;

use async_trait::async_trait;

use crate::wizard::draft::RegistrationDraft;
use crate::wizard::error::{CollaboratorError, LocationError};
use crate::wizard::traits::{AccountCreator, LocationProvider};
use crate::wizard::types::{AccountId, Coordinates};

/// Account collaborator that records every draft it receives and answers
/// with a preconfigured outcome.
pub struct MockAccountCreator {
    outcome: Result<AccountId, CollaboratorError>,
    calls: Mutex<Vec<RegistrationDraft>>,
}

impl MockAccountCreator {
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
        self.calls.lock().expect("mock lock poisoned").clone()
    }
}

#[async_trait]
impl AccountCreator for MockAccountCreator {
    async fn create_account(
        &self,
        draft: RegistrationDraft,
    ) -> Result<AccountId, CollaboratorError> {
        self.calls.lock().expect("mock lock poisoned").push(draft);
        self.outcome.clone()
    }
}

/// Location collaborator with a fixed answer.
pub struct MockLocationProvider {
    outcome: Result<Coordinates, LocationError>,
    requests: Mutex<u32>,
}

impl MockLocationProvider {
    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self {
            outcome: Ok(Coordinates {
                latitude,
                longitude,
            }),
            requests: Mutex::new(0),
        }
    }

    pub fn denied() -> Self {
        Self {
            outcome: Err(LocationError::PermissionDenied),
            requests: Mutex::new(0),
        }
    }

    pub fn disabled() -> Self {
        Self {
            outcome: Err(LocationError::ServiceDisabled),
            requests: Mutex::new(0),
        }
    }

    pub fn requests(&self) -> u32 {
        *self.requests.lock().expect("mock lock poisoned")
    }
}

#[async_trait]
impl LocationProvider for MockLocationProvider {
    async fn current_location(&self) -> Result<Coordinates, LocationError> {
        *self.requests.lock().expect("mock lock poisoned") += 1;
        self.outcome.clone()
    }
}
