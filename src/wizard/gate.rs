// Submission gate - the single exit from the wizard
//
// Nothing reaches the account-creation collaborator unless every page
// validates and every consent requirement holds. The gate either refuses
// with the aggregate error, or calls the collaborator exactly once and
// passes its verdict through unchanged.

use crate::config::ValidationRules;
use crate::notifications::{Notice, NoticeSender};
use crate::wizard::draft::RegistrationDraft;
use crate::wizard::error::{LocationError, SubmitError};
use crate::wizard::page::validate_page;
use crate::wizard::traits::{AccountCreator, LocationProvider};
use crate::wizard::types::{AccountId, ValidationErrorMap, WizardPage};

pub struct SubmissionGate {
    rules: ValidationRules,
    notices: NoticeSender,
}

impl SubmissionGate {
    pub fn new(rules: ValidationRules, notices: NoticeSender) -> Self {
        Self { rules, notices }
    }

    /// Evaluate the gate without touching any collaborator.
    ///
    /// Checks, in order: all five page validators (failures aggregated into
    /// one map), the terms-of-service flag, and coordinates when location
    /// sharing was requested.
    pub fn check(&self, draft: &RegistrationDraft) -> Result<(), SubmitError> {
        let mut aggregate = ValidationErrorMap::new();
        for page in WizardPage::all() {
            if let Err(errors) = validate_page(page, draft, &self.rules) {
                aggregate.merge(errors);
            }
        }
        if !aggregate.is_empty() {
            return Err(SubmitError::Invalid(aggregate));
        }

        if !draft.accepted_terms {
            return Err(SubmitError::TermsNotAccepted);
        }

        if draft.share_location && draft.coordinates.is_none() {
            return Err(SubmitError::LocationMissing);
        }

        Ok(())
    }

    /// Hand the draft to the account-creation collaborator, once.
    ///
    /// A collaborator failure is surfaced verbatim; the gate never retries.
    pub async fn submit(
        &self,
        draft: RegistrationDraft,
        accounts: &dyn AccountCreator,
    ) -> Result<AccountId, SubmitError> {
        if let Err(err) = self.check(&draft) {
            tracing::warn!(error = %err, "submission blocked by gate");
            self.notices.send(Notice::SubmissionRejected {
                reason: err.to_string(),
            });
            return Err(err);
        }

        tracing::info!(email = %draft.email, "submitting registration");
        match accounts.create_account(draft).await {
            Ok(account_id) => {
                tracing::info!(account_id = %account_id, "registration accepted");
                self.notices.send(Notice::SubmissionAccepted {
                    account_id: account_id.clone(),
                });
                Ok(account_id)
            }
            Err(err) => {
                tracing::warn!(error = %err, "account collaborator rejected registration");
                self.notices.send(Notice::SubmissionRejected {
                    reason: err.to_string(),
                });
                Err(SubmitError::Collaborator(err))
            }
        }
    }

    /// Perform the one device-location fetch that precedes the gate when
    /// location sharing was requested. Suspends until the provider answers
    /// or fails; the outcome is a fresh draft snapshot, never a partial one.
    pub async fn resolve_location(
        &self,
        draft: &RegistrationDraft,
        provider: &dyn LocationProvider,
    ) -> Result<RegistrationDraft, LocationError> {
        match provider.current_location().await {
            Ok(coordinates) => {
                tracing::info!(
                    latitude = coordinates.latitude,
                    longitude = coordinates.longitude,
                    "device location resolved"
                );
                self.notices.send(Notice::LocationResolved { coordinates });
                Ok(draft.with_coordinates(coordinates))
            }
            Err(err) => {
                tracing::warn!(error = %err, "device location fetch failed");
                self.notices.send(Notice::LocationFailed {
                    reason: err.to_string(),
                });
                Err(err)
            }
        }
    }
}
