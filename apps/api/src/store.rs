//! In-memory persistence for assessments and the single app-config row.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;

use crate::models::assessment::{Assessment, NewAssessment};
use crate::models::config::{AppConfig, AppConfigUpdate};

/// Keyed store for completed assessments plus the mutable app config.
///
/// One mutex guards the map, the id counter, and the config row; critical
/// sections never await, so a plain `std::sync::Mutex` is enough to
/// serialize id assignment and config updates. Contents do not survive a
/// restart, and records are never evicted.
pub struct AssessmentStore {
    inner: Mutex<StoreInner>,
}

struct StoreInner {
    assessments: HashMap<i64, Assessment>,
    next_id: i64,
    config: AppConfig,
}

impl AssessmentStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                assessments: HashMap::new(),
                next_id: 1,
                config: AppConfig::default(),
            }),
        }
    }

    /// Persists a completed assessment, assigning the next id and the
    /// creation timestamp. Records are immutable once stored.
    pub fn create_assessment(&self, new: NewAssessment) -> Assessment {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        let id = inner.next_id;
        inner.next_id += 1;
        let assessment = new.into_assessment(id, Utc::now());
        inner.assessments.insert(id, assessment.clone());
        assessment
    }

    pub fn assessment(&self, id: i64) -> Option<Assessment> {
        self.inner
            .lock()
            .expect("store mutex poisoned")
            .assessments
            .get(&id)
            .cloned()
    }

    pub fn app_config(&self) -> AppConfig {
        self.inner
            .lock()
            .expect("store mutex poisoned")
            .config
            .clone()
    }

    /// Merges a partial update into the config row and returns the result.
    pub fn update_app_config(&self, update: AppConfigUpdate) -> AppConfig {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        inner.config.merge(update);
        inner.config.clone()
    }
}

impl Default for AssessmentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::assessment::{EvaluationType, Recommendation};

    fn new_assessment(name: &str) -> NewAssessment {
        NewAssessment {
            full_name: name.to_string(),
            email: "candidate@example.com".to_string(),
            position: "Backend Engineer".to_string(),
            experience: "5 years".to_string(),
            evaluation_type: EvaluationType::Comprehensive,
            resume_filename: "resume.pdf".to_string(),
            image_filename: "photo.png".to_string(),
            mood_score: 75.0,
            mood_text: "confident".to_string(),
            trust_score: 80.0,
            risk_score: 20.0,
            recommendation: Recommendation::Hire,
            reason: "Strong candidate.".to_string(),
            resume_content: "resume text".to_string(),
            emotion_data: "{}".to_string(),
            voice_sentiment: None,
        }
    }

    #[test]
    fn test_create_assigns_sequential_ids_and_timestamp() {
        let store = AssessmentStore::new();
        let first = store.create_assessment(new_assessment("Ada"));
        let second = store.create_assessment(new_assessment("Grace"));

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(second.created_at >= first.created_at);
    }

    #[test]
    fn test_get_returns_stored_record() {
        let store = AssessmentStore::new();
        let created = store.create_assessment(new_assessment("Ada"));

        let fetched = store.assessment(created.id).unwrap();
        assert_eq!(fetched.full_name, "Ada");
        assert_eq!(fetched.id, created.id);
    }

    #[test]
    fn test_get_unknown_id_is_none() {
        let store = AssessmentStore::new();
        assert!(store.assessment(999).is_none());
    }

    #[test]
    fn test_config_defaults() {
        let store = AssessmentStore::new();
        let config = store.app_config();
        assert_eq!(config.app_name, "AURASCAN");
        assert_eq!(config.accent_color, "#00FFFF");
    }

    #[test]
    fn test_config_update_merges() {
        let store = AssessmentStore::new();
        let updated = store.update_app_config(AppConfigUpdate {
            app_name: Some("Foo".to_string()),
            ..Default::default()
        });

        assert_eq!(updated.app_name, "Foo");
        assert_eq!(updated.accent_color, "#00FFFF");
        assert_eq!(store.app_config().app_name, "Foo");
    }

    #[test]
    fn test_concurrent_creates_yield_unique_increasing_ids() {
        let store = Arc::new(AssessmentStore::new());
        let mut handles = Vec::new();

        for _ in 0..8 {
            let store = store.clone();
            handles.push(std::thread::spawn(move || {
                (0..25)
                    .map(|_| store.create_assessment(new_assessment("Ada")).id)
                    .collect::<Vec<_>>()
            }));
        }

        let mut ids: Vec<i64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 200);
        assert_eq!(*ids.first().unwrap(), 1);
        assert_eq!(*ids.last().unwrap(), 200);
    }
}
