// Collaborator interfaces - the wizard consumes these but never implements
// the real services behind them

use async_trait::async_trait;

use crate::wizard::draft::RegistrationDraft;
use crate::wizard::error::{CollaboratorError, LocationError};
use crate::wizard::types::{AccountId, Coordinates};

/// Account-creation capability exposed by the identity collaborator.
///
/// Receives the complete draft by value once the submission gate has passed
/// and answers with an identifier or an opaque failure message.
#[async_trait]
pub trait AccountCreator: Send + Sync {
    async fn create_account(&self, draft: RegistrationDraft)
        -> Result<AccountId, CollaboratorError>;
}

/// Device location capability.
///
/// One request yields one latitude/longitude pair or one failure reason;
/// the wizard never polls or retries.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_location(&self) -> Result<Coordinates, LocationError>;
}
