// Per-page aggregate validation
//
// A page passes only when every one of its fields passes. On failure the
// returned map carries one entry per failing field, holding the message of
// the first violated rule for that field. The map is rebuilt from scratch
// for every advancement attempt.

use chrono::{NaiveDate, Utc};

use crate::config::ValidationRules;
use crate::wizard::draft::RegistrationDraft;
use crate::wizard::error::FieldError;
use crate::wizard::field::{
    parse_date, require_age_between, require_blood_type, require_count_between, require_email,
    require_exact_digits, require_len_between, require_max_len, require_min_len,
    require_non_empty, require_phone,
};
use crate::wizard::types::{FieldName, ValidationErrorMap, WizardPage};

/// Validate one page of the draft against today's date.
pub fn validate_page(
    page: WizardPage,
    draft: &RegistrationDraft,
    rules: &ValidationRules,
) -> Result<(), ValidationErrorMap> {
    validate_page_on(page, draft, rules, Utc::now().date_naive())
}

/// Validate one page with an explicit reference date for the age rule.
pub fn validate_page_on(
    page: WizardPage,
    draft: &RegistrationDraft,
    rules: &ValidationRules,
    today: NaiveDate,
) -> Result<(), ValidationErrorMap> {
    let mut errors = ValidationErrorMap::new();

    match page {
        WizardPage::Account => account_page(draft, rules, &mut errors),
        WizardPage::Identity => identity_page(draft, rules, today, &mut errors),
        WizardPage::Address => address_page(draft, rules, &mut errors),
        WizardPage::Household => household_page(draft, rules, &mut errors),
        WizardPage::Contact => contact_page(draft, rules, &mut errors),
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn record(errors: &mut ValidationErrorMap, checked: Result<(), FieldError>) {
    if let Err(err) = checked {
        errors.insert_first(err.field, err.message);
    }
}

fn account_page(draft: &RegistrationDraft, rules: &ValidationRules, errors: &mut ValidationErrorMap) {
    record(errors, full_name_rule(draft, rules));
    record(errors, email_rule(draft));
    record(errors, password_rule(draft, rules));
    record(errors, confirm_password_rule(draft));
}

fn identity_page(
    draft: &RegistrationDraft,
    rules: &ValidationRules,
    today: NaiveDate,
    errors: &mut ValidationErrorMap,
) {
    record(errors, national_id_rule(draft, rules));
    record(errors, date_of_birth_rule(draft, rules, today));
    record(errors, phone_rule(FieldName::Phone, &draft.phone));
}

fn address_page(draft: &RegistrationDraft, rules: &ValidationRules, errors: &mut ValidationErrorMap) {
    for (field, value) in [
        (FieldName::Province, &draft.province),
        (FieldName::Regency, &draft.regency),
        (FieldName::District, &draft.district),
        (FieldName::Village, &draft.village),
        (FieldName::Street, &draft.street),
    ] {
        record(errors, address_field_rule(field, value, rules));
    }
    record(errors, postal_code_rule(draft, rules));
}

fn household_page(
    draft: &RegistrationDraft,
    rules: &ValidationRules,
    errors: &mut ValidationErrorMap,
) {
    record(errors, household_size_rule(draft, rules));
    record(errors, blood_type_rule(draft));
    record(
        errors,
        require_max_len(
            FieldName::MedicalNotes,
            &draft.medical_notes,
            rules.medical_notes_max_len,
        ),
    );
}

fn contact_page(draft: &RegistrationDraft, rules: &ValidationRules, errors: &mut ValidationErrorMap) {
    record(errors, emergency_contact_name_rule(draft, rules));
    record(
        errors,
        phone_rule(
            FieldName::EmergencyContactPhone,
            &draft.emergency_contact_phone,
        ),
    );
}

fn full_name_rule(draft: &RegistrationDraft, rules: &ValidationRules) -> Result<(), FieldError> {
    require_non_empty(FieldName::FullName, &draft.full_name)?;
    require_len_between(
        FieldName::FullName,
        &draft.full_name,
        rules.full_name_min_len,
        rules.full_name_max_len,
    )
}

fn email_rule(draft: &RegistrationDraft) -> Result<(), FieldError> {
    require_non_empty(FieldName::Email, &draft.email)?;
    require_email(FieldName::Email, &draft.email)
}

fn password_rule(draft: &RegistrationDraft, rules: &ValidationRules) -> Result<(), FieldError> {
    require_non_empty(FieldName::Password, &draft.password)?;
    require_min_len(FieldName::Password, &draft.password, rules.password_min_len)
}

fn confirm_password_rule(draft: &RegistrationDraft) -> Result<(), FieldError> {
    require_non_empty(FieldName::ConfirmPassword, &draft.confirm_password)?;
    if draft.confirm_password != draft.password {
        return Err(FieldError::new(
            FieldName::ConfirmPassword,
            "does not match password",
        ));
    }
    Ok(())
}

fn national_id_rule(draft: &RegistrationDraft, rules: &ValidationRules) -> Result<(), FieldError> {
    require_non_empty(FieldName::NationalId, &draft.national_id)?;
    require_exact_digits(
        FieldName::NationalId,
        &draft.national_id,
        rules.national_id_digits,
    )
}

fn date_of_birth_rule(
    draft: &RegistrationDraft,
    rules: &ValidationRules,
    today: NaiveDate,
) -> Result<(), FieldError> {
    require_non_empty(FieldName::DateOfBirth, &draft.date_of_birth)?;
    let born = parse_date(FieldName::DateOfBirth, &draft.date_of_birth)?;
    require_age_between(
        FieldName::DateOfBirth,
        born,
        today,
        rules.age_min,
        rules.age_max,
    )
}

fn phone_rule(field: FieldName, value: &str) -> Result<(), FieldError> {
    require_non_empty(field, value)?;
    require_phone(field, value)
}

fn address_field_rule(
    field: FieldName,
    value: &str,
    rules: &ValidationRules,
) -> Result<(), FieldError> {
    require_non_empty(field, value)?;
    require_max_len(field, value, rules.address_max_len)
}

fn postal_code_rule(draft: &RegistrationDraft, rules: &ValidationRules) -> Result<(), FieldError> {
    require_non_empty(FieldName::PostalCode, &draft.postal_code)?;
    require_exact_digits(
        FieldName::PostalCode,
        &draft.postal_code,
        rules.postal_code_digits,
    )
}

fn household_size_rule(
    draft: &RegistrationDraft,
    rules: &ValidationRules,
) -> Result<(), FieldError> {
    require_non_empty(FieldName::HouseholdSize, &draft.household_size)?;
    require_count_between(
        FieldName::HouseholdSize,
        &draft.household_size,
        rules.household_min,
        rules.household_max,
    )
}

fn emergency_contact_name_rule(
    draft: &RegistrationDraft,
    rules: &ValidationRules,
) -> Result<(), FieldError> {
    require_non_empty(FieldName::EmergencyContactName, &draft.emergency_contact_name)?;
    require_max_len(
        FieldName::EmergencyContactName,
        &draft.emergency_contact_name,
        rules.full_name_max_len,
    )
}

// Blood type is optional; when present it must be a recognised group.
fn blood_type_rule(draft: &RegistrationDraft) -> Result<(), FieldError> {
    if draft.blood_type.trim().is_empty() {
        return Ok(());
    }
    require_blood_type(FieldName::BloodType, &draft.blood_type)
}
