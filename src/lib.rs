// Siaga Register Library - Disaster-Response Registration Wizard
// This exposes the core components for testing and integration

pub mod config;
pub mod notifications;
pub mod telemetry;
pub mod wizard;

// Re-export key types for easy access
pub use config::{config, init_config, SiagaRegisterConfig, ValidationRules};
pub use notifications::{channel, Notice, NoticeReceiver, NoticeSender};
pub use telemetry::init_telemetry;
pub use wizard::{
    validate_page, AccountCreator, AccountId, CollaboratorError, Coordinates, DraftEdit,
    FieldError, FieldName, LocationError, LocationProvider, RegistrationDraft,
    RegistrationWizard, SubmissionGate, SubmitError, ValidationErrorMap, WizardEvent, WizardPage,
};
