//! Scoring Provider — the seam between the assessment pipeline and the LLM.
//!
//! One trait method per analysis kind; `AppState` carries the provider as
//! `Arc<dyn ScoringProvider>`. Production wires in `LlmScoringProvider`,
//! tests substitute a deterministic fake.
//!
//! Failure policy at every method boundary: any transport or parse failure
//! is caught and rethrown as a single generic domain error per analyzer.
//! No retry here (the client's bounded transport backoff is the only retry
//! anywhere), no partial results.

use async_trait::async_trait;
use tracing::error;

use crate::analysis::models::{
    ComprehensiveAssessment, EmotionAnalysis, RawComprehensiveAssessment, RawEmotionAnalysis,
    RawResumeAnalysis, RawVoiceAnalysis, ResumeAnalysis, VoiceAnalysis,
};
use crate::analysis::prompts;
use crate::errors::AppError;
use crate::llm_client::LlmClient;

#[async_trait]
pub trait ScoringProvider: Send + Sync {
    async fn analyze_resume(
        &self,
        resume_text: &str,
        position: &str,
        experience: &str,
    ) -> Result<ResumeAnalysis, AppError>;

    async fn analyze_image(
        &self,
        image_base64: &str,
        media_type: &str,
    ) -> Result<EmotionAnalysis, AppError>;

    async fn analyze_voice(&self, transcript: &str) -> Result<VoiceAnalysis, AppError>;

    async fn comprehensive_assessment(
        &self,
        resume: &ResumeAnalysis,
        emotion: &EmotionAnalysis,
        voice: Option<&VoiceAnalysis>,
        candidate_name: &str,
        position: &str,
    ) -> Result<ComprehensiveAssessment, AppError>;
}

/// Production provider: one LLM call per analysis, output sanitized through
/// the clamp-or-default rules before anything else sees it.
pub struct LlmScoringProvider {
    llm: LlmClient,
}

impl LlmScoringProvider {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ScoringProvider for LlmScoringProvider {
    async fn analyze_resume(
        &self,
        resume_text: &str,
        position: &str,
        experience: &str,
    ) -> Result<ResumeAnalysis, AppError> {
        let prompt = prompts::RESUME_ANALYSIS_PROMPT
            .replace("{position}", position)
            .replace("{experience}", experience)
            .replace("{resume_text}", resume_text);

        let raw: RawResumeAnalysis = self
            .llm
            .call_json(&prompt, prompts::RESUME_ANALYSIS_SYSTEM)
            .await
            .map_err(|e| {
                error!("Resume analysis error: {e}");
                AppError::Llm("Failed to analyze resume with AI".to_string())
            })?;

        Ok(raw.sanitize())
    }

    async fn analyze_image(
        &self,
        image_base64: &str,
        media_type: &str,
    ) -> Result<EmotionAnalysis, AppError> {
        let raw: RawEmotionAnalysis = self
            .llm
            .call_json_with_image(
                prompts::IMAGE_ANALYSIS_PROMPT,
                prompts::IMAGE_ANALYSIS_SYSTEM,
                media_type,
                image_base64,
            )
            .await
            .map_err(|e| {
                error!("Image analysis error: {e}");
                AppError::Llm("Failed to analyze image with AI".to_string())
            })?;

        Ok(raw.sanitize())
    }

    async fn analyze_voice(&self, transcript: &str) -> Result<VoiceAnalysis, AppError> {
        let prompt = prompts::VOICE_ANALYSIS_PROMPT.replace("{transcript}", transcript);

        let raw: RawVoiceAnalysis = self
            .llm
            .call_json(&prompt, prompts::VOICE_ANALYSIS_SYSTEM)
            .await
            .map_err(|e| {
                error!("Voice analysis error: {e}");
                AppError::Llm("Failed to analyze voice with AI".to_string())
            })?;

        Ok(raw.sanitize())
    }

    async fn comprehensive_assessment(
        &self,
        resume: &ResumeAnalysis,
        emotion: &EmotionAnalysis,
        voice: Option<&VoiceAnalysis>,
        candidate_name: &str,
        position: &str,
    ) -> Result<ComprehensiveAssessment, AppError> {
        let prompt = prompts::FINAL_ASSESSMENT_PROMPT
            .replace("{candidate_name}", candidate_name)
            .replace("{position}", position)
            .replace("{overall_score}", &resume.overall_score.to_string())
            .replace("{skills_score}", &resume.skills_score.to_string())
            .replace("{experience_score}", &resume.experience_score.to_string())
            .replace("{strengths}", &resume.strengths.join(", "))
            .replace("{weaknesses}", &resume.weaknesses.join(", "))
            .replace("{emotion}", &emotion.emotion)
            .replace("{mood_score}", &emotion.mood_score.to_string())
            .replace("{confidence}", &emotion.confidence.to_string())
            .replace("{voice_summary}", &voice_summary(voice));

        let raw: RawComprehensiveAssessment = self
            .llm
            .call_json(&prompt, prompts::FINAL_ASSESSMENT_SYSTEM)
            .await
            .map_err(|e| {
                error!("Comprehensive assessment error: {e}");
                AppError::Llm("Failed to generate comprehensive assessment".to_string())
            })?;

        Ok(raw.sanitize(emotion))
    }
}

/// Renders the voice section of the aggregator prompt. The aggregator must
/// degrade gracefully when no voice signal exists, so the absence is stated
/// explicitly rather than omitted.
fn voice_summary(voice: Option<&VoiceAnalysis>) -> String {
    match voice {
        Some(v) => format!(
            "Voice Analysis: {} emotion, {} tone, trustworthiness: {}/100",
            v.emotion, v.tone, v.trustworthiness
        ),
        None => "No voice analysis available".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voice_summary_with_analysis() {
        let voice = VoiceAnalysis {
            emotion: "calm".to_string(),
            confidence: 0.8,
            tone: "formal".to_string(),
            trustworthiness: 85.0,
        };
        let summary = voice_summary(Some(&voice));
        assert_eq!(
            summary,
            "Voice Analysis: calm emotion, formal tone, trustworthiness: 85/100"
        );
    }

    #[test]
    fn test_voice_summary_notes_absence() {
        assert_eq!(voice_summary(None), "No voice analysis available");
    }
}
