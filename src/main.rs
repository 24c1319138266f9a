use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use uuid::Uuid;

use siaga_register::{
    channel, config, init_telemetry, validate_page, AccountCreator, AccountId, CollaboratorError,
    Coordinates, LocationError, LocationProvider, RegistrationDraft, RegistrationWizard,
    SiagaRegisterConfig, SubmissionGate, WizardEvent, WizardPage,
};
use statig::prelude::*;

#[derive(Parser)]
#[command(name = "siaga-register")]
#[command(about = "Disaster-response registration wizard")]
#[command(
    long_about = "Drives the siaga registration wizard from the terminal: validate a draft \
                  record page by page, walk it through the five-page chain, or run the \
                  submission gate against a dry-run account sink. Drafts are JSON files \
                  matching the registration record; missing fields default to empty."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a draft record, page by page
    Validate {
        /// Path to the draft JSON file
        draft: PathBuf,
        /// Only validate this page (0-4)
        #[arg(long, help = "Page index in [0,4]; omit to validate every page")]
        page: Option<usize>,
    },
    /// Walk the draft through the wizard and report where it blocks
    Walk {
        /// Path to the draft JSON file
        draft: PathBuf,
    },
    /// Run the full submission gate with a dry-run account sink
    Submit {
        /// Path to the draft JSON file
        draft: PathBuf,
        /// Latitude to answer the device-location fetch with
        #[arg(long, requires = "longitude", allow_hyphen_values = true)]
        latitude: Option<f64>,
        /// Longitude to answer the device-location fetch with
        #[arg(long, requires = "latitude", allow_hyphen_values = true)]
        longitude: Option<f64>,
    },
    /// Write a starter siaga-register.toml with the default rules
    InitConfig {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

/// Account sink for `submit`: mints an identifier and persists nothing.
struct DryRunAccountCreator;

#[async_trait]
impl AccountCreator for DryRunAccountCreator {
    async fn create_account(
        &self,
        draft: RegistrationDraft,
    ) -> Result<AccountId, CollaboratorError> {
        tracing::info!(email = %draft.email, "dry-run account creation, nothing persisted");
        Ok(AccountId(Uuid::new_v4().to_string()))
    }
}

/// Stands in for the device location service: answers with the coordinates
/// given on the command line, or reports the service as disabled.
struct CliLocationProvider {
    fix: Option<Coordinates>,
}

#[async_trait]
impl LocationProvider for CliLocationProvider {
    async fn current_location(&self) -> Result<Coordinates, LocationError> {
        self.fix.ok_or(LocationError::ServiceDisabled)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config()?.clone();
    init_telemetry(
        &config.observability.log_level,
        config.observability.json_logs,
    )?;

    match cli.command {
        Commands::Validate { draft, page } => validate_command(&config, &draft, page),
        Commands::Walk { draft } => walk_command(&config, &draft),
        Commands::Submit {
            draft,
            latitude,
            longitude,
        } => submit_command(&config, &draft, latitude, longitude).await,
        Commands::InitConfig { force } => init_config_command(force),
    }
}

fn load_draft(path: &Path) -> Result<RegistrationDraft> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read draft file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("draft file {} is not a valid record", path.display()))
}

fn validate_command(
    config: &SiagaRegisterConfig,
    path: &Path,
    page: Option<usize>,
) -> Result<()> {
    let draft = load_draft(path)?;

    let pages: Vec<WizardPage> = match page {
        Some(index) => match WizardPage::from_index(index) {
            Some(page) => vec![page],
            None => bail!("page index {index} is out of range, expected 0-4"),
        },
        None => WizardPage::all().to_vec(),
    };

    let mut failing_fields = 0;
    for page in pages {
        match validate_page(page, &draft, &config.validation) {
            Ok(()) => println!("page {page}: ok"),
            Err(errors) => {
                println!("page {page}: {} invalid field(s)", errors.len());
                for (field, message) in errors.iter() {
                    println!("  {field}: {message}");
                }
                failing_fields += errors.len();
            }
        }
    }

    if failing_fields > 0 {
        bail!("draft has {failing_fields} invalid field(s)");
    }
    println!("draft is valid");
    Ok(())
}

fn walk_command(config: &SiagaRegisterConfig, path: &Path) -> Result<()> {
    let draft = load_draft(path)?;
    let (tx, _rx) = channel();
    let mut machine =
        RegistrationWizard::with_draft(config.validation.clone(), tx, draft).state_machine();

    loop {
        let before = machine.position();
        machine.handle(&WizardEvent::Advance);
        let after = machine.position();

        if after == before {
            if before.is_last() {
                println!("reached page {before}, draft is ready for submission");
                return Ok(());
            }
            println!("blocked on page {before}:");
            for (field, message) in machine.errors().iter() {
                println!("  {field}: {message}");
            }
            bail!("draft cannot advance past page {before}");
        }
        println!("advanced to page {after}");
    }
}

async fn submit_command(
    config: &SiagaRegisterConfig,
    path: &Path,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<()> {
    let mut draft = load_draft(path)?;
    let (tx, mut rx) = channel();
    let gate = SubmissionGate::new(config.validation.clone(), tx);

    if draft.share_location && draft.coordinates.is_none() {
        let provider = CliLocationProvider {
            fix: latitude.zip(longitude).map(|(latitude, longitude)| Coordinates {
                latitude,
                longitude,
            }),
        };
        match gate.resolve_location(&draft, &provider).await {
            Ok(located) => draft = located,
            Err(err) => {
                println!("location fetch failed: {err}");
                bail!("submission aborted: {err}");
            }
        }
    }

    let result = gate.submit(draft, &DryRunAccountCreator).await;

    for notice in rx.drain() {
        tracing::debug!(?notice, "wizard notification");
    }

    match result {
        Ok(account_id) => {
            println!("registration accepted: account {account_id}");
            Ok(())
        }
        Err(err) => {
            println!("registration rejected: {err}");
            bail!("submission failed");
        }
    }
}

fn init_config_command(force: bool) -> Result<()> {
    let path = Path::new("siaga-register.toml");
    if path.exists() && !force {
        bail!("siaga-register.toml already exists, pass --force to overwrite");
    }
    SiagaRegisterConfig::default().save_to_file(path)?;
    println!("wrote {}", path.display());
    Ok(())
}
