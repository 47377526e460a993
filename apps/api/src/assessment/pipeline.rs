//! One submission end to end: stage the resume, run the analyzers,
//! aggregate the verdict, persist the record.

use std::io::Write;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use bytes::Bytes;
use tempfile::NamedTempFile;
use tracing::info;

use crate::analysis::models::VoiceAnalysis;
use crate::errors::AppError;
use crate::models::assessment::{Assessment, EvaluationType, NewAssessment};
use crate::state::AppState;

/// Placeholder transcript used when simulated voice analysis is enabled.
/// The service has no real speech-to-text; this stands in for it, behind
/// the `ENABLE_SIMULATED_VOICE` flag.
pub const SIMULATED_TRANSCRIPT: &str =
    "I am excited about this opportunity and look forward to contributing to your team.";

/// An uploaded multipart file part, already gated by content type.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: String,
    pub data: Bytes,
}

/// A fully validated submission, ready for analysis.
#[derive(Debug, Clone)]
pub struct Submission {
    pub full_name: String,
    pub email: String,
    pub position: String,
    pub experience: String,
    pub evaluation_type: EvaluationType,
    pub resume: UploadedFile,
    pub image: UploadedFile,
    pub audio: Option<UploadedFile>,
    /// Client-supplied voice signal, already sanitized at the validation
    /// boundary. Takes precedence over the simulated-transcript path.
    pub voice_sentiment: Option<VoiceAnalysis>,
}

/// Runs the full scoring pipeline for one submission. Any analyzer failure
/// aborts the request; nothing is persisted on error.
pub async fn run_pipeline(
    state: &AppState,
    submission: Submission,
) -> Result<Assessment, AppError> {
    let resume_text = extract_resume_text(state, &submission.resume.data).await?;
    let image_base64 = BASE64.encode(&submission.image.data);

    // Resume and image analysis are independent; run them concurrently and
    // let the aggregator wait on both.
    let (resume_analysis, emotion_analysis) = tokio::try_join!(
        state.scoring.analyze_resume(
            &resume_text,
            &submission.position,
            &submission.experience
        ),
        state
            .scoring
            .analyze_image(&image_base64, &submission.image.content_type),
    )?;

    let voice_analysis = resolve_voice(state, &submission).await?;

    let verdict = state
        .scoring
        .comprehensive_assessment(
            &resume_analysis,
            &emotion_analysis,
            voice_analysis.as_ref(),
            &submission.full_name,
            &submission.position,
        )
        .await?;

    let record = NewAssessment {
        full_name: submission.full_name,
        email: submission.email,
        position: submission.position,
        experience: submission.experience,
        evaluation_type: submission.evaluation_type,
        resume_filename: submission.resume.filename,
        image_filename: submission.image.filename,
        mood_score: verdict.mood_score,
        mood_text: verdict.mood_text,
        trust_score: verdict.trust_score,
        risk_score: verdict.risk_score,
        recommendation: verdict.recommendation,
        reason: verdict.reason,
        resume_content: resume_text,
        emotion_data: serde_json::to_string(&emotion_analysis)
            .map_err(|e| AppError::Internal(e.into()))?,
        voice_sentiment: voice_analysis
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| AppError::Internal(e.into()))?,
    };

    let assessment = state.store.create_assessment(record);
    info!(
        id = assessment.id,
        recommendation = ?assessment.recommendation,
        "Assessment stored"
    );

    Ok(assessment)
}

/// Stages the resume bytes in a scoped temp file and hands the path to the
/// extractor on a blocking thread (PDF parsing is CPU-bound). The temp file
/// is removed on drop, success or failure.
async fn extract_resume_text(state: &AppState, data: &Bytes) -> Result<String, AppError> {
    let mut staged = NamedTempFile::new()
        .map_err(|e| AppError::FileProcessing(format!("Failed to stage resume upload: {e}")))?;
    staged
        .write_all(data)
        .map_err(|e| AppError::FileProcessing(format!("Failed to stage resume upload: {e}")))?;

    let extractor = state.extractor.clone();
    let path = staged.path().to_path_buf();
    tokio::task::spawn_blocking(move || extractor.extract_text(&path))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task panicked: {e}")))?
}

/// Resolves the optional voice signal. A client-supplied payload wins; an
/// uploaded audio file only produces analysis when simulation is enabled.
/// Absent voice is not an error — the aggregator degrades gracefully.
async fn resolve_voice(
    state: &AppState,
    submission: &Submission,
) -> Result<Option<VoiceAnalysis>, AppError> {
    if let Some(voice) = &submission.voice_sentiment {
        return Ok(Some(voice.clone()));
    }

    if submission.audio.is_some() && state.config.enable_simulated_voice {
        let analysis = state.scoring.analyze_voice(SIMULATED_TRANSCRIPT).await?;
        return Ok(Some(analysis));
    }

    Ok(None)
}
