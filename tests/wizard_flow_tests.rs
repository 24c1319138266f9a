//! Wizard flow tests
//!
//! These tests drive the public library surface the way a presentation
//! layer would: edit events against the state machine, page advancement,
//! retreat, and the final hand-off through the submission gate.
//!
//! Test coverage:
//! - Advance succeeds if and only if the current page validates
//! - Retreat is unconditional and never touches the draft
//! - Error maps are rebuilt wholesale per advancement attempt
//! - Notifications mirror every transition

use statig::prelude::*;

use siaga_register::{
    channel, DraftEdit, FieldName, Notice, RegistrationWizard, SubmissionGate, ValidationRules,
    WizardEvent, WizardPage,
};

mod fixtures;
use fixtures::{complete_draft, RecordingAccountCreator};

#[test]
fn every_page_gates_advancement_on_its_own_validator() {
    let (tx, _rx) = channel();
    let mut machine =
        RegistrationWizard::with_draft(ValidationRules::default(), tx, complete_draft())
            .state_machine();

    // A fully valid draft advances cleanly through the whole chain
    let expected = [
        WizardPage::Identity,
        WizardPage::Address,
        WizardPage::Household,
        WizardPage::Contact,
    ];
    for page in expected {
        machine.handle(&WizardEvent::Advance);
        assert_eq!(machine.position(), page);
    }
}

#[test]
fn breaking_a_later_page_blocks_only_that_page() {
    let (tx, _rx) = channel();
    let draft = complete_draft().apply(&DraftEdit::PostalCode("none".to_string()));
    let mut machine =
        RegistrationWizard::with_draft(ValidationRules::default(), tx, draft).state_machine();

    machine.handle(&WizardEvent::Advance);
    machine.handle(&WizardEvent::Advance);
    assert_eq!(machine.position(), WizardPage::Address);

    machine.handle(&WizardEvent::Advance);
    assert_eq!(machine.position(), WizardPage::Address);
    assert_eq!(machine.errors().get(FieldName::PostalCode), Some("must be 5 digits"));

    machine.handle(&WizardEvent::Edit(DraftEdit::PostalCode("40135".to_string())));
    machine.handle(&WizardEvent::Advance);
    assert_eq!(machine.position(), WizardPage::Household);
}

#[test]
fn retreat_walks_back_to_the_first_page_without_losing_data() {
    let (tx, _rx) = channel();
    let mut machine =
        RegistrationWizard::with_draft(ValidationRules::default(), tx, complete_draft())
            .state_machine();

    for _ in 0..4 {
        machine.handle(&WizardEvent::Advance);
    }
    let filled = machine.draft().clone();

    for expected in [
        WizardPage::Household,
        WizardPage::Address,
        WizardPage::Identity,
        WizardPage::Account,
        // Retreating off the first page stays put
        WizardPage::Account,
    ] {
        machine.handle(&WizardEvent::Retreat);
        assert_eq!(machine.position(), expected);
        assert_eq!(machine.draft(), &filled);
    }
}

#[test]
fn notifications_mirror_the_transition_history() {
    let (tx, mut rx) = channel();
    let draft = complete_draft().apply(&DraftEdit::Phone("invalid".to_string()));
    let mut machine =
        RegistrationWizard::with_draft(ValidationRules::default(), tx, draft).state_machine();

    machine.handle(&WizardEvent::Advance); // account -> identity
    machine.handle(&WizardEvent::Advance); // blocked on identity
    machine.handle(&WizardEvent::Retreat); // identity -> account

    let notices = rx.drain();
    assert_eq!(notices.len(), 3);
    assert!(matches!(
        notices[0],
        Notice::PageAdvanced {
            from: WizardPage::Account,
            to: WizardPage::Identity
        }
    ));
    match &notices[1] {
        Notice::PageBlocked { page, errors } => {
            assert_eq!(*page, WizardPage::Identity);
            assert!(errors.contains(FieldName::Phone));
        }
        other => panic!("expected PageBlocked, got {other:?}"),
    }
    assert!(matches!(notices[2], Notice::PageRetreated { .. }));
}

#[tokio::test]
async fn the_full_journey_ends_with_an_account_identifier() {
    let (tx, _rx) = channel();
    let mut machine = RegistrationWizard::new(ValidationRules::default(), tx.clone()).state_machine();

    for edit in [
        DraftEdit::FullName("Ani Rahma".to_string()),
        DraftEdit::Email("ani@example.com".to_string()),
        DraftEdit::Password("correct-horse".to_string()),
        DraftEdit::ConfirmPassword("correct-horse".to_string()),
    ] {
        machine.handle(&WizardEvent::Edit(edit));
    }
    machine.handle(&WizardEvent::Advance);
    assert_eq!(machine.position(), WizardPage::Identity);

    // Shortcut the remaining pages by reusing the known-good fixture values
    for edit in [
        DraftEdit::NationalId("1234567890123456".to_string()),
        DraftEdit::DateOfBirth("1995-04-12".to_string()),
        DraftEdit::Phone("081234567890".to_string()),
        DraftEdit::Province("Jawa Barat".to_string()),
        DraftEdit::Regency("Bandung".to_string()),
        DraftEdit::District("Coblong".to_string()),
        DraftEdit::Village("Dago".to_string()),
        DraftEdit::Street("Jl. Ir. H. Juanda 42".to_string()),
        DraftEdit::PostalCode("40135".to_string()),
        DraftEdit::HouseholdSize("4".to_string()),
        DraftEdit::EmergencyContactName("Budi Santoso".to_string()),
        DraftEdit::EmergencyContactPhone("081298765432".to_string()),
        DraftEdit::AcceptedTerms(true),
    ] {
        machine.handle(&WizardEvent::Edit(edit));
    }
    for _ in 0..3 {
        machine.handle(&WizardEvent::Advance);
    }
    assert_eq!(machine.position(), WizardPage::Contact);

    let gate = SubmissionGate::new(ValidationRules::default(), tx);
    let accounts = RecordingAccountCreator::succeeding("acct-e2e");
    let account_id = gate
        .submit(machine.draft().clone(), &accounts)
        .await
        .unwrap();

    assert_eq!(account_id.0, "acct-e2e");
    assert_eq!(accounts.calls().len(), 1);
    assert_eq!(accounts.calls()[0].national_id, "1234567890123456");
}
