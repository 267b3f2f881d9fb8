//! Terminal front end for the profile registration wizard.
//!
//! Prompts for one step at a time on stdin. Type `back` to return to the
//! previous step. On multi-select steps each entry toggles an option and an
//! empty line moves on.

use std::io::Write;
use std::str::FromStr;
use std::sync::Arc;

use secrecy::Secret;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use profile_wizard::adapters::{
    EnvSessionProvider, FileKeyValueStore, HttpProfileService, HttpProfileServiceConfig,
    TracingNotifier,
};
use profile_wizard::application::{
    DraftPersistence, RegistrationOutcome, RegistrationSession, SubmitProfileHandler,
};
use profile_wizard::config::{AppConfig, ConfigError, LogFormat, LoggingConfig};
use profile_wizard::domain::profile::{
    ActivityLevel, DietaryPreference, FieldEdit, FitnessGoal, HealthGoal, HeightUnit,
    ProfileRecommendations, WeightUnit, MAX_GOALS,
};
use profile_wizard::domain::wizard::{StepInput, StepView, Transition, WizardStep};
use profile_wizard::ports::ProfileServiceError;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] profile_wizard::config::ValidationError),

    #[error("Profile service unavailable: {0}")]
    ProfileService(#[from] ProfileServiceError),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Wizard(#[from] profile_wizard::domain::foundation::DomainError),
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging)?;

    let store = Arc::new(FileKeyValueStore::new(&config.storage.data_dir));
    let persistence = DraftPersistence::new(store);

    let mut service_config = HttpProfileServiceConfig::new(&config.profile_service.base_url)
        .with_timeout(config.profile_service.timeout());
    if let Some(token) = &config.profile_service.api_token {
        service_config = service_config.with_api_token_secret(Secret::clone(token));
    }
    let service = Arc::new(HttpProfileService::new(service_config)?);

    let submitter = SubmitProfileHandler::new(service, persistence.clone());
    let mut session = RegistrationSession::start(
        persistence,
        submitter,
        Arc::new(EnvSessionProvider::default()),
        Arc::new(TracingNotifier),
    )
    .await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print_step(&session.view());

        let Some(line) = lines.next_line().await? else {
            println!("\nProgress saved. Run again to continue.");
            return Ok(());
        };
        let line = line.trim();

        if line.eq_ignore_ascii_case("back") {
            if session.prev().await? == Transition::AtStart {
                println!("Already at the first step.");
            }
            continue;
        }

        let step = session.wizard().step();
        let is_multi = matches!(session.view().input, StepInput::MultiChoice { .. });
        if !line.is_empty() {
            match parse_input(step, line) {
                Ok(edits) => {
                    for edit in edits {
                        let changed = session.edit(edit).await?;
                        if let Some(notice) = unchanged_notice(step, changed) {
                            println!("! {}", notice);
                        }
                    }
                }
                Err(message) => {
                    println!("! {}", message);
                    continue;
                }
            }
            if is_multi {
                continue;
            }
        }

        match session.next().await? {
            RegistrationOutcome::Step(Transition::Blocked(err)) => println!("! {}", err),
            RegistrationOutcome::Step(_) => {}
            RegistrationOutcome::Completed(recommendations) => {
                println!("\nProfile created successfully! Preparing your plan...");
                tokio::time::sleep(config.wizard.completion_delay()).await;
                print_recommendations(&recommendations);
                return Ok(());
            }
            RegistrationOutcome::SubmissionFailed(err) => {
                println!("! {}", err);
                println!("Press enter to try again, or type back to make changes.");
            }
        }
    }
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), CliError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so they never interleave with prompts
    match logging.log_format()? {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
    Ok(())
}

fn print_step(view: &StepView) {
    println!(
        "\nStep {} of {}: {}",
        view.step.index() + 1,
        WizardStep::ORDER.len(),
        view.title
    );
    match &view.input {
        StepInput::Decimal { entry_unit, .. } => {
            let current = view.current.first().map(String::as_str).unwrap_or("-");
            println!(
                "  current: {}  (enter a number, optionally followed by a unit; default {})",
                current, entry_unit
            );
        }
        StepInput::SingleChoice { options } | StepInput::MultiChoice { options, .. } => {
            for (i, option) in options.iter().enumerate() {
                let marker = if view.current.iter().any(|c| c == option) { "*" } else { " " };
                println!("  {}{:>2}. {}", marker, i + 1, option);
            }
            if let StepInput::MultiChoice { max, .. } = &view.input {
                println!("  (toggle up to {}; empty line to continue)", max);
            }
        }
    }
    print!("> ");
    std::io::stdout().flush().ok();
}

fn print_recommendations(recommendations: &ProfileRecommendations) {
    println!("\nYour profile");
    match (recommendations.bmi, recommendations.bmi_category) {
        (Some(bmi), Some(category)) => println!("  BMI: {:.1} ({})", bmi, category),
        _ => println!("  BMI: -"),
    }
    println!("  Daily calorie goal: {} kcal", recommendations.calorie_goal);
    if let Some(water) = recommendations.daily_water_ml {
        println!("  Daily water: {:.1} L", f64::from(water) / 1000.0);
    }
    println!("  {}", recommendations.headline);
}

/// Picks an option by 1-based number or by label.
fn choose<T: Copy + FromStr>(all: &[T], input: &str) -> Result<T, String>
where
    T::Err: std::fmt::Display,
{
    if let Ok(n) = input.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| all.get(i).copied())
            .ok_or_else(|| format!("Choose a number between 1 and {}", all.len()));
    }
    T::from_str(input).map_err(|e| e.to_string())
}

/// Splits "170 cm" into value and optional unit.
fn split_unit(input: &str) -> (&str, Option<&str>) {
    let trimmed = input.trim();
    match trimmed.rfind(|c: char| c.is_ascii_digit() || c == '.') {
        Some(end) if end + 1 < trimmed.len() => {
            let (value, unit) = trimmed.split_at(end + 1);
            (value.trim(), Some(unit.trim()))
        }
        _ => (trimmed, None),
    }
}

/// Explains an edit that left the draft untouched, when the user needs to know.
///
/// Toggling a goal always changes the selection unless the limit is reached.
fn unchanged_notice(step: WizardStep, changed: bool) -> Option<String> {
    match (step, changed) {
        (WizardStep::HealthGoals, false) => Some(format!(
            "You can select up to {} goals. Deselect one first.",
            MAX_GOALS
        )),
        _ => None,
    }
}

/// Turns one line of input into the edits for `step`.
fn parse_input(step: WizardStep, line: &str) -> Result<Vec<FieldEdit>, String> {
    let edits = match step {
        WizardStep::Height => {
            let (value, unit) = split_unit(line);
            let mut edits = Vec::new();
            if let Some(unit) = unit {
                edits.push(FieldEdit::HeightUnit(
                    HeightUnit::from_str(unit).map_err(|e| e.to_string())?,
                ));
            }
            edits.push(FieldEdit::Height(value.to_string()));
            edits
        }
        WizardStep::Weight => {
            let (value, unit) = split_unit(line);
            let mut edits = Vec::new();
            if let Some(unit) = unit {
                edits.push(FieldEdit::WeightUnit(
                    WeightUnit::from_str(unit).map_err(|e| e.to_string())?,
                ));
            }
            edits.push(FieldEdit::Weight(value.to_string()));
            edits
        }
        WizardStep::ActivityLevel => {
            vec![FieldEdit::ActivityLevel(choose(ActivityLevel::ALL, line)?)]
        }
        WizardStep::FitnessGoal => vec![FieldEdit::FitnessGoal(choose(FitnessGoal::ALL, line)?)],
        WizardStep::HealthGoals => vec![FieldEdit::ToggleGoal(choose(HealthGoal::ALL, line)?)],
        WizardStep::DietaryPreference => vec![FieldEdit::DietaryPreference(choose(
            DietaryPreference::ALL,
            line,
        )?)],
        WizardStep::BodyFat => vec![FieldEdit::BodyFatPercentage(
            line.trim_end_matches('%').trim().to_string(),
        )],
    };
    Ok(edits)
}
