//! Bounded analysis data types and the clamp-or-default rules that keep
//! model output inside declared ranges.
//!
//! The LLM is the scoring authority but never a trusted one: every payload
//! is deserialized permissively (the `Raw*` twins, every field optional)
//! and then forced through the sanitizers below. A present finite value is
//! clamped into range; a missing or non-finite value becomes the field
//! default. Raw model output never reaches a caller.

use serde::{Deserialize, Serialize};

use crate::models::assessment::Recommendation;

// ────────────────────────────────────────────────────────────────────────────
// Bounded output types
// ────────────────────────────────────────────────────────────────────────────

/// Scored resume evaluation. All scores lie in [0, 100].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub skills_score: f64,
    pub experience_score: f64,
    pub qualifications_score: f64,
    pub overall_score: f64,
    /// At most 5 entries.
    pub strengths: Vec<String>,
    /// At most 3 entries.
    pub weaknesses: Vec<String>,
    pub summary: String,
}

/// Facial-expression read of the candidate photo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmotionAnalysis {
    pub emotion: String,
    /// Analysis confidence in [0, 1].
    pub confidence: f64,
    /// Mood score in [0, 100].
    pub mood_score: f64,
    pub description: String,
}

/// Tone and trust signals from a voice transcript. Optional throughout the
/// pipeline; its absence is never an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VoiceAnalysis {
    pub emotion: String,
    pub confidence: f64,
    pub tone: String,
    /// Trust indicator in [0, 100].
    pub trustworthiness: f64,
}

/// The aggregated verdict across all signals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComprehensiveAssessment {
    pub mood_score: f64,
    pub mood_text: String,
    pub trust_score: f64,
    /// Higher means riskier.
    pub risk_score: f64,
    pub recommendation: Recommendation,
    pub reason: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Permissive raw twins, as deserialized straight from model output
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawResumeAnalysis {
    pub skills_score: Option<f64>,
    pub experience_score: Option<f64>,
    pub qualifications_score: Option<f64>,
    pub overall_score: Option<f64>,
    pub strengths: Option<Vec<String>>,
    pub weaknesses: Option<Vec<String>>,
    pub summary: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEmotionAnalysis {
    pub emotion: Option<String>,
    pub confidence: Option<f64>,
    pub mood_score: Option<f64>,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVoiceAnalysis {
    pub emotion: Option<String>,
    pub confidence: Option<f64>,
    pub tone: Option<String>,
    pub trustworthiness: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawComprehensiveAssessment {
    pub mood_score: Option<f64>,
    pub mood_text: Option<String>,
    pub trust_score: Option<f64>,
    pub risk_score: Option<f64>,
    pub recommendation: Option<String>,
    pub reason: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Sanitizers
// ────────────────────────────────────────────────────────────────────────────

impl RawResumeAnalysis {
    pub fn sanitize(self) -> ResumeAnalysis {
        ResumeAnalysis {
            skills_score: score_or(self.skills_score, 50.0),
            experience_score: score_or(self.experience_score, 50.0),
            qualifications_score: score_or(self.qualifications_score, 50.0),
            overall_score: score_or(self.overall_score, 50.0),
            strengths: list_or(self.strengths, 5, "Professional background"),
            weaknesses: list_or(self.weaknesses, 3, "Areas for growth"),
            summary: text_or(
                self.summary,
                "Professional candidate with relevant background.",
            ),
        }
    }
}

impl RawEmotionAnalysis {
    pub fn sanitize(self) -> EmotionAnalysis {
        EmotionAnalysis {
            emotion: text_or(self.emotion, "neutral"),
            confidence: unit_or(self.confidence, 0.7),
            mood_score: score_or(self.mood_score, 70.0),
            description: text_or(
                self.description,
                "Professional appearance with neutral demeanor.",
            ),
        }
    }
}

impl RawVoiceAnalysis {
    pub fn sanitize(self) -> VoiceAnalysis {
        VoiceAnalysis {
            emotion: text_or(self.emotion, "neutral"),
            confidence: unit_or(self.confidence, 0.7),
            tone: text_or(self.tone, "professional"),
            trustworthiness: score_or(self.trustworthiness, 70.0),
        }
    }
}

impl RawComprehensiveAssessment {
    /// The fallback chain here is a business rule, not plumbing: a missing
    /// mood score falls back to the image analyzer's mood score, mood text
    /// to the detected emotion, trust/risk to 70/30, and an unrecognized
    /// recommendation to Review.
    pub fn sanitize(self, emotion: &EmotionAnalysis) -> ComprehensiveAssessment {
        ComprehensiveAssessment {
            mood_score: score_or(self.mood_score, emotion.mood_score),
            mood_text: text_or(self.mood_text, &emotion.emotion),
            trust_score: score_or(self.trust_score, 70.0),
            risk_score: score_or(self.risk_score, 30.0),
            recommendation: Recommendation::from_model_output(self.recommendation.as_deref()),
            reason: text_or(
                self.reason,
                "Comprehensive assessment completed based on available data.",
            ),
        }
    }
}

/// Clamps a 0-100 score, substituting `default` for missing or non-finite
/// values.
fn score_or(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() => v.clamp(0.0, 100.0),
        _ => default,
    }
}

/// Same rule for 0.0-1.0 confidence values.
fn unit_or(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() => v.clamp(0.0, 1.0),
        _ => default,
    }
}

fn text_or(value: Option<String>, default: &str) -> String {
    value.unwrap_or_else(|| default.to_string())
}

fn list_or(value: Option<Vec<String>>, cap: usize, default: &str) -> Vec<String> {
    match value {
        Some(mut items) => {
            items.truncate(cap);
            items
        }
        None => vec![default.to_string()],
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_scores_clamped_into_range() {
        let raw = RawResumeAnalysis {
            skills_score: Some(140.0),
            experience_score: Some(-20.0),
            qualifications_score: Some(99.5),
            overall_score: None,
            ..Default::default()
        };
        let analysis = raw.sanitize();

        assert_eq!(analysis.skills_score, 100.0);
        assert_eq!(analysis.experience_score, 0.0);
        assert_eq!(analysis.qualifications_score, 99.5);
        assert_eq!(analysis.overall_score, 50.0);
    }

    #[test]
    fn test_resume_zero_score_is_kept_not_defaulted() {
        let raw = RawResumeAnalysis {
            skills_score: Some(0.0),
            ..Default::default()
        };
        assert_eq!(raw.sanitize().skills_score, 0.0);
    }

    #[test]
    fn test_non_finite_scores_fall_back_to_default() {
        let raw = RawResumeAnalysis {
            skills_score: Some(f64::NAN),
            experience_score: Some(f64::INFINITY),
            ..Default::default()
        };
        let analysis = raw.sanitize();
        assert_eq!(analysis.skills_score, 50.0);
        assert_eq!(analysis.experience_score, 50.0);
    }

    #[test]
    fn test_strengths_truncated_to_five() {
        let raw = RawResumeAnalysis {
            strengths: Some((1..=8).map(|i| format!("strength {i}")).collect()),
            weaknesses: Some((1..=4).map(|i| format!("weakness {i}")).collect()),
            ..Default::default()
        };
        let analysis = raw.sanitize();
        assert_eq!(analysis.strengths.len(), 5);
        assert_eq!(analysis.weaknesses.len(), 3);
    }

    #[test]
    fn test_missing_lists_get_placeholder_entries() {
        let analysis = RawResumeAnalysis::default().sanitize();
        assert_eq!(analysis.strengths, vec!["Professional background"]);
        assert_eq!(analysis.weaknesses, vec!["Areas for growth"]);
        assert_eq!(
            analysis.summary,
            "Professional candidate with relevant background."
        );
    }

    #[test]
    fn test_emotion_defaults() {
        let analysis = RawEmotionAnalysis::default().sanitize();
        assert_eq!(analysis.emotion, "neutral");
        assert_eq!(analysis.confidence, 0.7);
        assert_eq!(analysis.mood_score, 70.0);
    }

    #[test]
    fn test_emotion_confidence_clamped_to_unit_interval() {
        let raw = RawEmotionAnalysis {
            confidence: Some(3.5),
            mood_score: Some(250.0),
            ..Default::default()
        };
        let analysis = raw.sanitize();
        assert_eq!(analysis.confidence, 1.0);
        assert_eq!(analysis.mood_score, 100.0);
    }

    #[test]
    fn test_voice_defaults_and_clamps() {
        let analysis = RawVoiceAnalysis::default().sanitize();
        assert_eq!(analysis.emotion, "neutral");
        assert_eq!(analysis.tone, "professional");
        assert_eq!(analysis.trustworthiness, 70.0);

        let clamped = RawVoiceAnalysis {
            trustworthiness: Some(300.0),
            confidence: Some(-1.0),
            ..Default::default()
        }
        .sanitize();
        assert_eq!(clamped.trustworthiness, 100.0);
        assert_eq!(clamped.confidence, 0.0);
    }

    fn emotion_fixture() -> EmotionAnalysis {
        EmotionAnalysis {
            emotion: "confident".to_string(),
            confidence: 0.9,
            mood_score: 82.0,
            description: "Composed and engaged.".to_string(),
        }
    }

    #[test]
    fn test_assessment_mood_falls_back_to_image_analysis() {
        let verdict = RawComprehensiveAssessment::default().sanitize(&emotion_fixture());
        assert_eq!(verdict.mood_score, 82.0);
        assert_eq!(verdict.mood_text, "confident");
    }

    #[test]
    fn test_assessment_trust_and_risk_defaults() {
        let verdict = RawComprehensiveAssessment::default().sanitize(&emotion_fixture());
        assert_eq!(verdict.trust_score, 70.0);
        assert_eq!(verdict.risk_score, 30.0);
        assert_eq!(
            verdict.reason,
            "Comprehensive assessment completed based on available data."
        );
    }

    #[test]
    fn test_assessment_unknown_recommendation_becomes_review() {
        let raw = RawComprehensiveAssessment {
            recommendation: Some("MAYBE".to_string()),
            ..Default::default()
        };
        let verdict = raw.sanitize(&emotion_fixture());
        assert_eq!(verdict.recommendation, Recommendation::Review);
    }

    #[test]
    fn test_assessment_present_values_win_over_fallbacks() {
        let raw = RawComprehensiveAssessment {
            mood_score: Some(44.0),
            mood_text: Some("anxious".to_string()),
            trust_score: Some(12.0),
            risk_score: Some(88.0),
            recommendation: Some("REJECT".to_string()),
            reason: Some("Signals point the wrong way.".to_string()),
        };
        let verdict = raw.sanitize(&emotion_fixture());
        assert_eq!(verdict.mood_score, 44.0);
        assert_eq!(verdict.mood_text, "anxious");
        assert_eq!(verdict.trust_score, 12.0);
        assert_eq!(verdict.risk_score, 88.0);
        assert_eq!(verdict.recommendation, Recommendation::Reject);
    }

    #[test]
    fn test_raw_payloads_tolerate_unknown_fields() {
        let raw: RawResumeAnalysis = serde_json::from_str(
            r#"{"skillsScore": 75, "totallyUnexpected": true, "strengths": ["Rust"]}"#,
        )
        .unwrap();
        let analysis = raw.sanitize();
        assert_eq!(analysis.skills_score, 75.0);
        assert_eq!(analysis.strengths, vec!["Rust"]);
    }
}
