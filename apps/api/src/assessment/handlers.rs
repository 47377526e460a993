//! Axum route handlers for the assessment API.

use std::str::FromStr;

use axum::extract::multipart::Field;
use axum::extract::{Multipart, Path, State};
use axum::Json;

use crate::analysis::models::RawVoiceAnalysis;
use crate::assessment::extract::{is_audio, is_image, is_pdf};
use crate::assessment::pipeline::{run_pipeline, Submission, UploadedFile};
use crate::errors::AppError;
use crate::models::assessment::{Assessment, EvaluationType};
use crate::state::AppState;

/// All multipart parts as received, before validation.
#[derive(Debug, Default)]
struct SubmissionForm {
    full_name: Option<String>,
    email: Option<String>,
    position: Option<String>,
    experience: Option<String>,
    evaluation_type: Option<String>,
    voice_sentiment: Option<String>,
    resume: Option<UploadedFile>,
    image: Option<UploadedFile>,
    audio: Option<UploadedFile>,
}

/// POST /api/assessment
///
/// Multipart submission: required `resume` (PDF) and `image` parts, optional
/// `audio`, plus candidate text fields. Validation happens entirely before
/// the first analyzer call; success returns the persisted record.
pub async fn handle_submit_assessment(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Assessment>, AppError> {
    let form = read_form(&mut multipart).await?;
    let submission = validate(form)?;
    let assessment = run_pipeline(&state, submission).await?;
    Ok(Json(assessment))
}

/// GET /api/assessment/:id
pub async fn handle_get_assessment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Assessment>, AppError> {
    let assessment = state
        .store
        .assessment(id)
        .ok_or_else(|| AppError::NotFound("Assessment not found".to_string()))?;
    Ok(Json(assessment))
}

async fn read_form(multipart: &mut Multipart) -> Result<SubmissionForm, AppError> {
    let mut form = SubmissionForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::FileProcessing(format!("Failed to read upload: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                if !is_pdf(field.content_type()) {
                    return Err(AppError::Validation("Resume must be a PDF file".to_string()));
                }
                form.resume = Some(read_file(field).await?);
            }
            "image" => {
                if !is_image(field.content_type()) {
                    return Err(AppError::Validation(
                        "Image must be a valid image file".to_string(),
                    ));
                }
                form.image = Some(read_file(field).await?);
            }
            "audio" => {
                if !is_audio(field.content_type()) {
                    return Err(AppError::Validation(
                        "Audio must be a valid audio file".to_string(),
                    ));
                }
                form.audio = Some(read_file(field).await?);
            }
            "fullName" => form.full_name = Some(read_text(field).await?),
            "email" => form.email = Some(read_text(field).await?),
            "position" => form.position = Some(read_text(field).await?),
            "experience" => form.experience = Some(read_text(field).await?),
            "evaluationType" => form.evaluation_type = Some(read_text(field).await?),
            "voiceSentiment" => form.voice_sentiment = Some(read_text(field).await?),
            _ => {
                // Drain unexpected parts so the stream stays consumable.
                let _ = field.bytes().await;
            }
        }
    }

    Ok(form)
}

async fn read_file(field: Field<'_>) -> Result<UploadedFile, AppError> {
    let filename = field.file_name().unwrap_or("upload").to_string();
    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();
    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::FileProcessing(format!("Failed to read upload: {e}")))?;

    Ok(UploadedFile {
        filename,
        content_type,
        data,
    })
}

async fn read_text(field: Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::FileProcessing(format!("Failed to read upload: {e}")))
}

fn validate(form: SubmissionForm) -> Result<Submission, AppError> {
    let full_name = required_text(form.full_name, "Full name is required")?;
    let email = required_text(form.email, "Valid email is required")?;
    if !is_valid_email(&email) {
        return Err(AppError::Validation("Valid email is required".to_string()));
    }
    let position = required_text(form.position, "Position is required")?;
    let experience = required_text(form.experience, "Experience level is required")?;

    let evaluation_type = form
        .evaluation_type
        .as_deref()
        .and_then(|s| EvaluationType::from_str(s).ok())
        .ok_or_else(|| AppError::Validation("Valid evaluation type is required".to_string()))?;

    let (resume, image) = match (form.resume, form.image) {
        (Some(resume), Some(image)) => (resume, image),
        _ => {
            return Err(AppError::Validation(
                "Both resume and image files are required".to_string(),
            ))
        }
    };

    // Sanitize the client-supplied voice payload here so malformed JSON is
    // rejected before any analyzer runs.
    let voice_sentiment = form
        .voice_sentiment
        .as_deref()
        .map(|raw| {
            serde_json::from_str::<RawVoiceAnalysis>(raw)
                .map(RawVoiceAnalysis::sanitize)
                .map_err(|_| {
                    AppError::Validation("Valid voiceSentiment JSON is required".to_string())
                })
        })
        .transpose()?;

    Ok(Submission {
        full_name,
        email,
        position,
        experience,
        evaluation_type,
        resume,
        image,
        audio: form.audio,
        voice_sentiment,
    })
}

fn required_text(value: Option<String>, message: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::Validation(message.to_string())),
    }
}

/// Minimal format check: one '@', non-empty local part, dotted domain.
fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("a.b+c@sub.example.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@"));
        assert!(!is_valid_email("ada@nodot"));
        assert!(!is_valid_email("ada@.com"));
    }

    #[test]
    fn test_required_text_rejects_blank_values() {
        assert!(required_text(Some("  ".to_string()), "msg").is_err());
        assert!(required_text(None, "msg").is_err());
        assert_eq!(required_text(Some("ok".to_string()), "msg").unwrap(), "ok");
    }
}
