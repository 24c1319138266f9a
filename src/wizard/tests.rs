//! Wizard module scenario tests
//!
//! End-to-end walks of the five-page chain plus submission, using the mock
//! collaborators. Field- and page-level rules are covered next to their own
//! modules; these tests exercise the pieces together.

use super::draft::{DraftEdit, RegistrationDraft};
use super::gate::SubmissionGate;
use super::mocks::{MockAccountCreator, MockLocationProvider};
use super::state_machine::{RegistrationWizard, WizardEvent};
use super::types::WizardPage;
use crate::config::ValidationRules;
use crate::notifications::{self, Notice};
use statig::prelude::*;

/// A draft that passes every page and both consent checks.
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

#[test]
fn a_complete_draft_walks_all_five_pages() {
    let (tx, mut rx) = notifications::channel();
    let mut machine =
        RegistrationWizard::with_draft(ValidationRules::default(), tx, complete_draft())
            .state_machine();

    for expected in [
        WizardPage::Identity,
        WizardPage::Address,
        WizardPage::Household,
        WizardPage::Contact,
    ] {
        machine.handle(&WizardEvent::Advance);
        assert_eq!(machine.position(), expected);
        assert!(machine.errors().is_empty());
    }

    let notices = rx.drain();
    assert_eq!(notices.len(), 4);
    assert!(notices
        .iter()
        .all(|n| matches!(n, Notice::PageAdvanced { .. })));
}

#[test]
fn an_empty_draft_stays_on_the_first_page() {
    let (tx, mut rx) = notifications::channel();
    let mut machine = RegistrationWizard::new(ValidationRules::default(), tx).state_machine();

    for _ in 0..3 {
        machine.handle(&WizardEvent::Advance);
    }

    assert_eq!(machine.position(), WizardPage::Account);
    assert_eq!(rx.drain().len(), 3);
}

#[test]
fn fixing_the_reported_field_unblocks_the_page() {
    let (tx, _rx) = notifications::channel();
    let draft = complete_draft().apply(&DraftEdit::Email("broken".to_string()));
    let mut machine =
        RegistrationWizard::with_draft(ValidationRules::default(), tx, draft).state_machine();

    machine.handle(&WizardEvent::Advance);
    assert_eq!(machine.position(), WizardPage::Account);

    machine.handle(&WizardEvent::Edit(DraftEdit::Email(
        "ani@example.com".to_string(),
    )));
    machine.handle(&WizardEvent::Advance);
    assert_eq!(machine.position(), WizardPage::Identity);
}

#[tokio::test]
async fn wizard_hand_off_reaches_the_account_collaborator() {
    let (tx, _rx) = notifications::channel();
    let mut machine =
        RegistrationWizard::with_draft(ValidationRules::default(), tx.clone(), complete_draft())
            .state_machine();

    for _ in 0..4 {
        machine.handle(&WizardEvent::Advance);
    }
    assert_eq!(machine.position(), WizardPage::Contact);

    let gate = SubmissionGate::new(ValidationRules::default(), tx);
    let accounts = MockAccountCreator::succeeding("acct-42");
    let draft = machine.draft().clone();
    let account_id = gate.submit(draft, &accounts).await.unwrap();

    assert_eq!(account_id.0, "acct-42");
    assert_eq!(accounts.calls().len(), 1);
}

#[tokio::test]
async fn location_flow_resolves_before_submission() {
    let (tx, mut rx) = notifications::channel();
    let gate = SubmissionGate::new(ValidationRules::default(), tx);
    let provider = MockLocationProvider::at(-6.9, 107.6);
    let accounts = MockAccountCreator::succeeding("acct-42");

    let draft = complete_draft().apply(&DraftEdit::ShareLocation(true));
    let located = gate.resolve_location(&draft, &provider).await.unwrap();
    let account_id = gate.submit(located, &accounts).await.unwrap();

    assert_eq!(account_id.0, "acct-42");
    assert_eq!(provider.requests(), 1);

    let notices = rx.drain();
    assert!(matches!(notices[0], Notice::LocationResolved { .. }));
    assert!(matches!(notices[1], Notice::SubmissionAccepted { .. }));
}

#[tokio::test]
async fn disabled_location_service_blocks_the_location_flow() {
    let (tx, mut rx) = notifications::channel();
    let gate = SubmissionGate::new(ValidationRules::default(), tx);
    let provider = MockLocationProvider::disabled();

    let draft = complete_draft().apply(&DraftEdit::ShareLocation(true));
    let err = gate.resolve_location(&draft, &provider).await.unwrap_err();

    assert_eq!(err.to_string(), "location service disabled");
    assert!(matches!(rx.drain()[0], Notice::LocationFailed { .. }));
}
