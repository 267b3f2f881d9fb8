//! DraftPersistence - best-effort mirror of the in-progress registration.
//!
//! Storage is a cache, not a source of truth: every failure is logged and
//! swallowed, and anything unreadable restores as a fresh wizard.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::profile::ProfileDraft;
use crate::domain::wizard::{validate_step, WizardStep};
use crate::ports::KeyValueStore;

/// Key holding the serialized draft envelope.
pub const DRAFT_KEY: &str = "profileFormData";
/// Key holding the current step index as a decimal string.
pub const STEP_KEY: &str = "currentStep";
/// Schema version written with every draft. Other versions are discarded.
pub const DRAFT_SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct DraftEnvelopeRef<'a> {
    version: u32,
    draft: &'a ProfileDraft,
}

#[derive(Deserialize)]
struct DraftEnvelope {
    version: u32,
    draft: ProfileDraft,
}

/// Saves, restores and clears wizard progress through a [`KeyValueStore`].
#[derive(Clone)]
pub struct DraftPersistence {
    store: Arc<dyn KeyValueStore>,
}

impl DraftPersistence {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Writes both the draft and the step.
    pub async fn save(&self, draft: &ProfileDraft, step: WizardStep) {
        let envelope = DraftEnvelopeRef {
            version: DRAFT_SCHEMA_VERSION,
            draft,
        };
        match serde_json::to_string(&envelope) {
            Ok(json) => {
                if let Err(e) = self.store.set(DRAFT_KEY, &json).await {
                    tracing::warn!(error = %e, key = DRAFT_KEY, "Failed to save registration draft");
                }
            }
            Err(e) => tracing::warn!(error = %e, "Failed to serialize registration draft"),
        }

        self.save_step(step).await;
    }

    /// Writes only the step.
    pub async fn save_step(&self, step: WizardStep) {
        if let Err(e) = self.store.set(STEP_KEY, &step.index().to_string()).await {
            tracing::warn!(error = %e, key = STEP_KEY, "Failed to save registration step");
        } else {
            tracing::debug!(step = step.index(), "Saved registration progress");
        }
    }

    /// Reads back saved progress.
    ///
    /// Returns an empty draft at the first step when nothing usable is
    /// stored. The step is only honoured together with a valid draft, and
    /// moves back to the first earlier step whose data no longer validates.
    pub async fn restore(&self) -> (ProfileDraft, WizardStep) {
        let fresh = (ProfileDraft::new(), WizardStep::FIRST);

        let Some(draft) = self.restore_draft().await else {
            return fresh;
        };

        let step = match self.store.get(STEP_KEY).await {
            Ok(Some(raw)) => match raw.trim().parse::<usize>().ok().and_then(WizardStep::from_index) {
                Some(step) => step,
                None => {
                    tracing::warn!(value = %raw, "Discarding invalid saved step");
                    WizardStep::FIRST
                }
            },
            Ok(None) => WizardStep::FIRST,
            Err(e) => {
                tracing::warn!(error = %e, key = STEP_KEY, "Failed to read registration step");
                WizardStep::FIRST
            }
        };

        let step = first_incomplete_step(&draft, step);
        tracing::debug!(step = step.index(), "Restored registration progress");
        (draft, step)
    }

    async fn restore_draft(&self) -> Option<ProfileDraft> {
        let raw = match self.store.get(DRAFT_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, key = DRAFT_KEY, "Failed to read registration draft");
                return None;
            }
        };

        let envelope: DraftEnvelope = match serde_json::from_str(&raw) {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding malformed registration draft");
                return None;
            }
        };

        if envelope.version != DRAFT_SCHEMA_VERSION {
            tracing::warn!(
                version = envelope.version,
                expected = DRAFT_SCHEMA_VERSION,
                "Discarding registration draft with unknown schema version"
            );
            return None;
        }
        if !envelope.draft.is_consistent() {
            tracing::warn!("Discarding inconsistent registration draft");
            return None;
        }

        Some(envelope.draft)
    }

    /// Removes both keys.
    pub async fn clear(&self) {
        for key in [DRAFT_KEY, STEP_KEY] {
            if let Err(e) = self.store.remove(key).await {
                tracing::warn!(error = %e, key, "Failed to clear registration progress");
            }
        }
    }
}

/// The earliest step before `saved` that fails validation, or `saved` itself.
fn first_incomplete_step(draft: &ProfileDraft, saved: WizardStep) -> WizardStep {
    match WizardStep::ORDER[..saved.index()]
        .iter()
        .find(|step| validate_step(**step, draft).is_err())
    {
        Some(step) => {
            tracing::warn!(
                saved = saved.index(),
                resumed = step.index(),
                "Saved step skips incomplete data; resuming earlier"
            );
            *step
        }
        None => saved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryKeyValueStore;
    use crate::domain::profile::{ActivityLevel, FieldEdit, FitnessGoal, HealthGoal};
    use crate::ports::StorageError;
    use async_trait::async_trait;

    struct BrokenStore;

    #[async_trait]
    impl KeyValueStore for BrokenStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("disk gone".into()))
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disk gone".into()))
        }

        async fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disk gone".into()))
        }
    }

    fn sample_draft() -> ProfileDraft {
        let mut draft = ProfileDraft::new();
        draft.apply(FieldEdit::Height("172".into()));
        draft.apply(FieldEdit::Weight("68.5".into()));
        draft.apply(FieldEdit::ActivityLevel(ActivityLevel::LightlyActive));
        draft.apply(FieldEdit::FitnessGoal(FitnessGoal::Maintain));
        draft.apply(FieldEdit::ToggleGoal(HealthGoal::ImproveSleep));
        draft
    }

    fn persistence() -> (InMemoryKeyValueStore, DraftPersistence) {
        let store = InMemoryKeyValueStore::new();
        let persistence = DraftPersistence::new(Arc::new(store.clone()));
        (store, persistence)
    }

    #[tokio::test]
    async fn save_then_restore_round_trips() {
        let (store, persistence) = persistence();
        let draft = sample_draft();

        persistence.save(&draft, WizardStep::FitnessGoal).await;

        assert_eq!(store.get(STEP_KEY).await.unwrap(), Some("3".to_string()));
        let (restored, step) = persistence.restore().await;
        assert_eq!(restored, draft);
        assert_eq!(step, WizardStep::FitnessGoal);
    }

    #[tokio::test]
    async fn draft_is_wrapped_in_versioned_envelope() {
        let (store, persistence) = persistence();
        persistence.save(&sample_draft(), WizardStep::Height).await;

        let raw = store.get(DRAFT_KEY).await.unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["version"], 1);
        assert_eq!(json["draft"]["height"], "172");
    }

    #[tokio::test]
    async fn empty_store_restores_fresh_wizard() {
        let (_, persistence) = persistence();

        let (draft, step) = persistence.restore().await;
        assert_eq!(draft, ProfileDraft::new());
        assert_eq!(step, WizardStep::FIRST);
    }

    #[tokio::test]
    async fn malformed_json_is_discarded() {
        let (store, persistence) = persistence();
        store.set(DRAFT_KEY, "{not json").await.unwrap();
        store.set(STEP_KEY, "4").await.unwrap();

        let (draft, step) = persistence.restore().await;
        assert_eq!(draft, ProfileDraft::new());
        assert_eq!(step, WizardStep::FIRST);
    }

    #[tokio::test]
    async fn unknown_version_is_discarded() {
        let (store, persistence) = persistence();
        store
            .set(DRAFT_KEY, r#"{"version":2,"draft":{"height":"180"}}"#)
            .await
            .unwrap();

        let (draft, _) = persistence.restore().await;
        assert_eq!(draft.height(), "");
    }

    #[tokio::test]
    async fn inconsistent_goals_are_discarded() {
        let (store, persistence) = persistence();
        store
            .set(
                DRAFT_KEY,
                r#"{"version":1,"draft":{"goals":["Stay active","Lose weight","Build muscle","Improve sleep"]}}"#,
            )
            .await
            .unwrap();

        let (draft, _) = persistence.restore().await;
        assert!(draft.goals().is_empty());
    }

    #[tokio::test]
    async fn out_of_range_step_falls_back_to_first() {
        let (store, persistence) = persistence();
        persistence.save(&sample_draft(), WizardStep::Weight).await;

        for bad in ["7", "-1", "two", ""] {
            store.set(STEP_KEY, bad).await.unwrap();
            let (draft, step) = persistence.restore().await;
            assert_eq!(draft.height(), "172");
            assert_eq!(step, WizardStep::FIRST, "step {:?}", bad);
        }
    }

    #[tokio::test]
    async fn saved_step_past_missing_data_resumes_at_gap() {
        let (store, persistence) = persistence();
        let mut draft = ProfileDraft::new();
        draft.apply(FieldEdit::Weight("70".into()));
        draft.apply(FieldEdit::ActivityLevel(ActivityLevel::Sedentary));
        persistence.save(&draft, WizardStep::BodyFat).await;

        let (restored, step) = persistence.restore().await;

        assert_eq!(restored.weight(), "70");
        assert_eq!(step, WizardStep::Height);
        assert_eq!(store.get(STEP_KEY).await.unwrap(), Some("6".to_string()));
    }

    #[tokio::test]
    async fn clear_removes_both_keys() {
        let (store, persistence) = persistence();
        persistence.save(&sample_draft(), WizardStep::BodyFat).await;

        persistence.clear().await;

        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn storage_failures_are_swallowed() {
        let persistence = DraftPersistence::new(Arc::new(BrokenStore));

        persistence.save(&sample_draft(), WizardStep::Weight).await;
        persistence.clear().await;
        let (draft, step) = persistence.restore().await;

        assert_eq!(draft, ProfileDraft::new());
        assert_eq!(step, WizardStep::FIRST);
    }
}
