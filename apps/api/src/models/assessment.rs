use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Enumerated hiring decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Recommendation {
    Hire,
    Review,
    Reject,
}

impl Recommendation {
    /// Maps a model-returned label onto the enum. Anything outside the three
    /// valid labels falls back to Review — never to Hire or Reject.
    pub fn from_model_output(value: Option<&str>) -> Self {
        match value {
            Some("HIRE") => Recommendation::Hire,
            Some("REVIEW") => Recommendation::Review,
            Some("REJECT") => Recommendation::Reject,
            _ => Recommendation::Review,
        }
    }
}

/// What kind of evaluation the client requested. Stored verbatim on the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationType {
    Mood,
    Trust,
    Risk,
    Final,
    Comprehensive,
}

impl FromStr for EvaluationType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mood" => Ok(EvaluationType::Mood),
            "trust" => Ok(EvaluationType::Trust),
            "risk" => Ok(EvaluationType::Risk),
            "final" => Ok(EvaluationType::Final),
            "comprehensive" => Ok(EvaluationType::Comprehensive),
            _ => Err(()),
        }
    }
}

/// A persisted assessment. Created once per submission, never mutated,
/// never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub position: String,
    pub experience: String,
    pub evaluation_type: EvaluationType,
    pub resume_filename: String,
    pub image_filename: String,
    pub mood_score: f64,
    pub mood_text: String,
    pub trust_score: f64,
    pub risk_score: f64,
    pub recommendation: Recommendation,
    pub reason: String,
    /// Plain text extracted from the uploaded PDF.
    pub resume_content: String,
    /// Serialized `EmotionAnalysis` JSON.
    pub emotion_data: String,
    /// Serialized `VoiceAnalysis` JSON; null when no voice signal was given.
    pub voice_sentiment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Everything the pipeline knows about a submission before the store assigns
/// an id and creation timestamp.
#[derive(Debug, Clone)]
pub struct NewAssessment {
    pub full_name: String,
    pub email: String,
    pub position: String,
    pub experience: String,
    pub evaluation_type: EvaluationType,
    pub resume_filename: String,
    pub image_filename: String,
    pub mood_score: f64,
    pub mood_text: String,
    pub trust_score: f64,
    pub risk_score: f64,
    pub recommendation: Recommendation,
    pub reason: String,
    pub resume_content: String,
    pub emotion_data: String,
    pub voice_sentiment: Option<String>,
}

impl NewAssessment {
    pub fn into_assessment(self, id: i64, created_at: DateTime<Utc>) -> Assessment {
        Assessment {
            id,
            full_name: self.full_name,
            email: self.email,
            position: self.position,
            experience: self.experience,
            evaluation_type: self.evaluation_type,
            resume_filename: self.resume_filename,
            image_filename: self.image_filename,
            mood_score: self.mood_score,
            mood_text: self.mood_text,
            trust_score: self.trust_score,
            risk_score: self.risk_score,
            recommendation: self.recommendation,
            reason: self.reason,
            resume_content: self.resume_content,
            emotion_data: self.emotion_data,
            voice_sentiment: self.voice_sentiment,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_recommendation_maps_to_review() {
        assert_eq!(
            Recommendation::from_model_output(Some("STRONG HIRE")),
            Recommendation::Review
        );
        assert_eq!(
            Recommendation::from_model_output(Some("hire")),
            Recommendation::Review
        );
        assert_eq!(
            Recommendation::from_model_output(None),
            Recommendation::Review
        );
    }

    #[test]
    fn test_valid_recommendations_parse_exactly() {
        assert_eq!(
            Recommendation::from_model_output(Some("HIRE")),
            Recommendation::Hire
        );
        assert_eq!(
            Recommendation::from_model_output(Some("REVIEW")),
            Recommendation::Review
        );
        assert_eq!(
            Recommendation::from_model_output(Some("REJECT")),
            Recommendation::Reject
        );
    }

    #[test]
    fn test_recommendation_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&Recommendation::Hire).unwrap(),
            "\"HIRE\""
        );
    }

    #[test]
    fn test_evaluation_type_from_str() {
        assert_eq!(
            "comprehensive".parse::<EvaluationType>(),
            Ok(EvaluationType::Comprehensive)
        );
        assert!("Comprehensive".parse::<EvaluationType>().is_err());
        assert!("".parse::<EvaluationType>().is_err());
    }

    #[test]
    fn test_evaluation_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&EvaluationType::Final).unwrap(),
            "\"final\""
        );
    }
}
