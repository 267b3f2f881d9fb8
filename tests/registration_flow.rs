//! End-to-end registration through the public API.
//!
//! Wires the real file store to in-memory fakes for the remote service,
//! the session and the notifier, then drives the wizard the way a front
//! end would.

use std::sync::Arc;

use tempfile::TempDir;

use profile_wizard::adapters::{
    FileKeyValueStore, InMemoryProfileService, RecordingNotifier, StaticSessionProvider,
};
use profile_wizard::application::{
    DraftPersistence, RegistrationOutcome, RegistrationSession, SubmissionError,
    SubmitProfileCommand, SubmitProfileHandler,
};
use profile_wizard::domain::foundation::UserId;
use profile_wizard::domain::profile::{
    ActivityLevel, BmiCategory, BmrSubject, DietaryPreference, FieldEdit, FitnessGoal,
    HealthGoal, HeightUnit, ProfileDraft, WeightUnit,
};
use profile_wizard::domain::wizard::{Transition, WizardPhase, WizardStep};
use profile_wizard::ports::{KeyValueStore, NotificationLevel};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Harness {
    _dir: TempDir,
    store: FileKeyValueStore,
    service: InMemoryProfileService,
    sessions: StaticSessionProvider,
    notifier: RecordingNotifier,
}

impl Harness {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(dir.path());
        Self {
            _dir: dir,
            store,
            service: InMemoryProfileService::new(),
            sessions: StaticSessionProvider::signed_in(UserId::new("user-42").unwrap()),
            notifier: RecordingNotifier::new(),
        }
    }

    fn persistence(&self) -> DraftPersistence {
        DraftPersistence::new(Arc::new(self.store.clone()))
    }

    fn handler(&self) -> SubmitProfileHandler {
        SubmitProfileHandler::new(Arc::new(self.service.clone()), self.persistence())
    }

    /// A fresh session over the same storage, as after an app restart.
    async fn session(&self) -> RegistrationSession {
        RegistrationSession::start(
            self.persistence(),
            self.handler(),
            Arc::new(self.sessions.clone()),
            Arc::new(self.notifier.clone()),
        )
        .await
    }
}

async fn fill_and_advance(session: &mut RegistrationSession, edits: Vec<FieldEdit>) {
    for edit in edits {
        session.edit(edit).await.unwrap();
    }
    let outcome = session.next().await.unwrap();
    assert!(
        matches!(outcome, RegistrationOutcome::Step(Transition::Advanced(_))),
        "unexpected outcome {:?}",
        outcome
    );
}

fn finished_draft() -> ProfileDraft {
    let mut draft = ProfileDraft::new();
    for edit in [
        FieldEdit::Height("170".into()),
        FieldEdit::Weight("70".into()),
        FieldEdit::ActivityLevel(ActivityLevel::ModeratelyActive),
        FieldEdit::FitnessGoal(FitnessGoal::WeightLoss),
        FieldEdit::ToggleGoal(HealthGoal::LoseWeight),
        FieldEdit::DietaryPreference(DietaryPreference::Vegetarian),
        FieldEdit::BodyFatPercentage("24".into()),
    ] {
        draft.apply(edit);
    }
    draft
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn registration_survives_restart_and_completes() {
    let harness = Harness::new();

    {
        let mut session = harness.session().await;
        fill_and_advance(&mut session, vec![FieldEdit::Height("170".into())]).await;
        fill_and_advance(&mut session, vec![FieldEdit::Weight("70".into())]).await;
        fill_and_advance(
            &mut session,
            vec![FieldEdit::ActivityLevel(ActivityLevel::ModeratelyActive)],
        )
        .await;
    }

    let mut session = harness.session().await;
    assert_eq!(session.wizard().step(), WizardStep::FitnessGoal);
    assert_eq!(session.wizard().draft().weight(), "70");

    fill_and_advance(&mut session, vec![FieldEdit::FitnessGoal(FitnessGoal::WeightLoss)]).await;
    fill_and_advance(
        &mut session,
        vec![
            FieldEdit::ToggleGoal(HealthGoal::LoseWeight),
            FieldEdit::ToggleGoal(HealthGoal::IncreaseEnergy),
        ],
    )
    .await;
    fill_and_advance(
        &mut session,
        vec![FieldEdit::DietaryPreference(DietaryPreference::Mediterranean)],
    )
    .await;

    // Empty body fat blocks submission
    match session.next().await.unwrap() {
        RegistrationOutcome::Step(Transition::Blocked(err)) => {
            assert_eq!(err.message(), "Please enter your body fat percentage");
        }
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(harness.service.call_count().await, 0);

    session
        .edit(FieldEdit::BodyFatPercentage("21.5".into()))
        .await
        .unwrap();
    let RegistrationOutcome::Completed(recommendations) = session.next().await.unwrap() else {
        panic!("expected the profile to be created");
    };

    assert_eq!(recommendations.bmi, Some(24.2));
    assert_eq!(recommendations.bmi_category, Some(BmiCategory::Normal));
    assert_eq!(recommendations.calorie_goal, 2135);
    assert_eq!(recommendations.daily_water_ml, Some(2450));
    assert_eq!(session.wizard().phase(), WizardPhase::Complete);

    let requests = harness.service.requests().await;
    assert_eq!(requests.len(), 1);
    let json = serde_json::to_value(&requests[0]).unwrap();
    assert_eq!(json["userId"], "user-42");
    assert_eq!(json["activityLevel"], "Moderately Active");
    assert_eq!(json["goals"], serde_json::json!(["Lose weight", "Increase energy"]));
    assert_eq!(json["calorieGoal"], 2135);

    let notes = harness.notifier.notifications();
    assert_eq!(notes.last().unwrap().level, NotificationLevel::Success);
    assert_eq!(notes.last().unwrap().message, "Profile created successfully!");

    // Saved progress is gone; the next launch starts over
    assert_eq!(harness.store.get("profileFormData").await.unwrap(), None);
    assert_eq!(harness.store.get("currentStep").await.unwrap(), None);
    let restarted = harness.session().await;
    assert_eq!(restarted.wizard().step(), WizardStep::Height);
    assert_eq!(restarted.wizard().draft(), &ProfileDraft::new());
}

#[tokio::test]
async fn clear_then_restore_yields_empty_state() {
    let harness = Harness::new();
    let persistence = harness.persistence();
    persistence.save(&finished_draft(), WizardStep::BodyFat).await;

    persistence.clear().await;

    let (draft, step) = persistence.restore().await;
    assert_eq!(draft, ProfileDraft::new());
    assert_eq!(step, WizardStep::FIRST);
}

#[tokio::test]
async fn repeated_submission_makes_independent_calls() {
    let harness = Harness::new();
    let handler = harness.handler();
    let command = SubmitProfileCommand {
        user_id: Some(UserId::new("user-42").unwrap()),
        draft: finished_draft(),
        subject: BmrSubject::default(),
    };

    let first = handler.handle(command.clone()).await.unwrap();
    let second = handler.handle(command).await.unwrap();

    assert_ne!(first.profile_id, second.profile_id);
    let requests = harness.service.requests().await;
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0], requests[1]);
}

#[tokio::test]
async fn missing_user_id_keeps_step_and_reports_message() {
    let harness = Harness::new();
    harness.sessions.sign_out().await;
    harness.persistence().save(&finished_draft(), WizardStep::BodyFat).await;

    let mut session = harness.session().await;
    assert_eq!(session.wizard().step(), WizardStep::BodyFat);

    let outcome = session.next().await.unwrap();

    assert!(matches!(
        outcome,
        RegistrationOutcome::SubmissionFailed(SubmissionError::MissingUserId)
    ));
    assert_eq!(session.wizard().step(), WizardStep::BodyFat);
    assert_eq!(harness.service.call_count().await, 0);
    let note = harness.notifier.last().unwrap();
    assert_eq!(note.level, NotificationLevel::Error);
    assert!(note
        .message
        .contains("User ID is unavailable. Please log in again."));

    // Signing in and pressing next again completes without re-entering data
    harness
        .sessions
        .sign_in(UserId::new("user-42").unwrap())
        .await;
    let retry = session.next().await.unwrap();
    assert!(matches!(retry, RegistrationOutcome::Completed(_)));
}

#[tokio::test]
async fn imperial_entry_is_stored_in_metric() {
    let harness = Harness::new();
    let mut session = harness.session().await;

    fill_and_advance(
        &mut session,
        vec![
            FieldEdit::HeightUnit(HeightUnit::Inches),
            FieldEdit::Height("70".into()),
        ],
    )
    .await;
    fill_and_advance(
        &mut session,
        vec![
            FieldEdit::WeightUnit(WeightUnit::Pounds),
            FieldEdit::Weight("150".into()),
        ],
    )
    .await;

    let draft = session.wizard().draft();
    assert_eq!(draft.height(), "177.8");
    assert!((draft.weight_kg().unwrap() - 68.0388555).abs() < 1e-9);
}

#[tokio::test]
async fn fourth_goal_is_ignored() {
    let harness = Harness::new();
    let mut session = harness.session().await;

    for goal in [
        HealthGoal::LoseWeight,
        HealthGoal::BuildMuscle,
        HealthGoal::StayActive,
    ] {
        assert!(session.edit(FieldEdit::ToggleGoal(goal)).await.unwrap());
    }
    let changed = session
        .edit(FieldEdit::ToggleGoal(HealthGoal::ReduceStress))
        .await
        .unwrap();

    assert!(!changed);
    assert_eq!(session.wizard().draft().goals().len(), 3);
}

#[tokio::test]
async fn corrupt_saved_state_starts_fresh() {
    let harness = Harness::new();
    harness
        .store
        .set("profileFormData", "{\"version\":1,\"draft\":")
        .await
        .unwrap();
    harness.store.set("currentStep", "5").await.unwrap();

    let session = harness.session().await;

    assert_eq!(session.wizard().step(), WizardStep::Height);
    assert_eq!(session.wizard().draft(), &ProfileDraft::new());
}
