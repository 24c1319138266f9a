use serde::{Deserialize, Serialize};
use statig::prelude::*;

use crate::config::ValidationRules;
use crate::notifications::{Notice, NoticeSender};
use crate::wizard::draft::{DraftEdit, RegistrationDraft};
use crate::wizard::page::validate_page;
use crate::wizard::types::{ValidationErrorMap, WizardPage};

/// Inputs the wizard reacts to. Each one is a discrete user action; the
/// machine is synchronous, so a transition always completes before the next
/// event is handled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WizardEvent {
    /// Replace one draft field with a fresh value
    Edit(DraftEdit),
    /// Try to move to the next page; blocked unless the current page validates
    Advance,
    /// Move to the previous page; always allowed except on the first page
    Retreat,
}

/// Shared storage behind the page states: the accumulated draft snapshot,
/// the error map from the last blocked advancement, and the rule constants.
pub struct RegistrationWizard {
    rules: ValidationRules,
    notices: NoticeSender,
    draft: RegistrationDraft,
    errors: ValidationErrorMap,
    position: WizardPage,
}

impl RegistrationWizard {
    pub fn new(rules: ValidationRules, notices: NoticeSender) -> Self {
        Self::with_draft(rules, notices, RegistrationDraft::new())
    }

    /// Start from an existing snapshot instead of an empty draft.
    pub fn with_draft(
        rules: ValidationRules,
        notices: NoticeSender,
        draft: RegistrationDraft,
    ) -> Self {
        Self {
            rules,
            notices,
            draft,
            errors: ValidationErrorMap::new(),
            position: WizardPage::Account,
        }
    }

    pub fn position(&self) -> WizardPage {
        self.position
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrorMap {
        &self.errors
    }
}

#[state_machine(initial = "State::account()")]
impl RegistrationWizard {
    #[state]
    fn account(&mut self, event: &WizardEvent) -> Response<State> {
        match event {
            WizardEvent::Edit(edit) => self.apply_edit(edit),
            WizardEvent::Advance => self.advance_to(WizardPage::Identity, State::identity),
            // Already on the first page
            WizardEvent::Retreat => Handled,
        }
    }

    #[state]
    fn identity(&mut self, event: &WizardEvent) -> Response<State> {
        match event {
            WizardEvent::Edit(edit) => self.apply_edit(edit),
            WizardEvent::Advance => self.advance_to(WizardPage::Address, State::address),
            WizardEvent::Retreat => self.retreat_to(WizardPage::Account, State::account),
        }
    }

    #[state]
    fn address(&mut self, event: &WizardEvent) -> Response<State> {
        match event {
            WizardEvent::Edit(edit) => self.apply_edit(edit),
            WizardEvent::Advance => self.advance_to(WizardPage::Household, State::household),
            WizardEvent::Retreat => self.retreat_to(WizardPage::Identity, State::identity),
        }
    }

    #[state]
    fn household(&mut self, event: &WizardEvent) -> Response<State> {
        match event {
            WizardEvent::Edit(edit) => self.apply_edit(edit),
            WizardEvent::Advance => self.advance_to(WizardPage::Contact, State::contact),
            WizardEvent::Retreat => self.retreat_to(WizardPage::Address, State::address),
        }
    }

    #[state]
    fn contact(&mut self, event: &WizardEvent) -> Response<State> {
        match event {
            WizardEvent::Edit(edit) => self.apply_edit(edit),
            // No sixth page: leaving the wizard is the submission gate's job
            WizardEvent::Advance => Handled,
            WizardEvent::Retreat => self.retreat_to(WizardPage::Household, State::household),
        }
    }
}

impl RegistrationWizard {
    fn apply_edit(&mut self, edit: &DraftEdit) -> Response<State> {
        self.draft = self.draft.apply(edit);
        Handled
    }

    fn advance_to(&mut self, next_page: WizardPage, next: fn() -> State) -> Response<State> {
        match validate_page(self.position, &self.draft, &self.rules) {
            Ok(()) => {
                tracing::info!(
                    from = %self.position,
                    to = %next_page,
                    "wizard page advanced"
                );
                self.notices.send(Notice::PageAdvanced {
                    from: self.position,
                    to: next_page,
                });
                self.errors.clear();
                self.position = next_page;
                Transition(next())
            }
            Err(errors) => {
                tracing::warn!(
                    page = %self.position,
                    failing_fields = errors.len(),
                    "wizard page blocked"
                );
                self.notices.send(Notice::PageBlocked {
                    page: self.position,
                    errors: errors.clone(),
                });
                self.errors = errors;
                Handled
            }
        }
    }

    fn retreat_to(&mut self, prev_page: WizardPage, prev: fn() -> State) -> Response<State> {
        tracing::info!(
            from = %self.position,
            to = %prev_page,
            "wizard page retreated"
        );
        self.notices.send(Notice::PageRetreated {
            from: self.position,
            to: prev_page,
        });
        // Stale messages describe a page the user just left
        self.errors.clear();
        self.position = prev_page;
        Transition(prev())
    }
}
