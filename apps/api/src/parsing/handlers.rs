use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::config::parse_flag;
use crate::errors::AppError;
use crate::extraction::extract_text;
use crate::models::resume::ResumeRecord;
use crate::parsing::{parse_resume, ParseOptions};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ParseTextRequest {
    pub text: Option<String>,
    pub include_raw_text: Option<bool>,
}

/// An uploaded document and its client-side filename.
struct Upload {
    filename: String,
    data: Vec<u8>,
}

fn ensure_within_limit(text: &str, limit: usize) -> Result<(), AppError> {
    if text.len() > limit {
        return Err(AppError::PayloadTooLarge { limit });
    }
    Ok(())
}

fn multipart_error(err: MultipartError, limit: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge { limit }
    } else {
        AppError::Validation(err.body_text())
    }
}

/// Runs CPU-bound extraction and parsing off the async executor.
async fn run_blocking<T, F>(f: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::Internal(anyhow::Error::new(e).context("parse task failed")))?
}

/// POST /api/v1/parse/text
pub async fn handle_parse_text(
    State(state): State<AppState>,
    Json(req): Json<ParseTextRequest>,
) -> Result<Json<ResumeRecord>, AppError> {
    let text = req.text.ok_or(AppError::NoInput)?;
    let limit = state.config.max_input_bytes;
    ensure_within_limit(&text, limit)?;

    let options = ParseOptions {
        include_raw_text: req
            .include_raw_text
            .unwrap_or(state.config.include_raw_text),
    };
    let record = run_blocking(move || Ok(parse_resume(&text, options))).await?;
    info!(
        experience = record.experience.len(),
        education = record.education.len(),
        skills = record.skills.len(),
        "Parsed resume text"
    );
    Ok(Json(record))
}

/// POST /api/v1/parse
/// Multipart form with exactly one of `file` or `text`, plus optional `include_raw_text`.
pub async fn handle_parse_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeRecord>, AppError> {
    let limit = state.config.max_input_bytes;
    let mut upload: Option<Upload> = None;
    let mut text: Option<String> = None;
    let mut include_raw_text = state.config.include_raw_text;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, limit))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await.map_err(|e| multipart_error(e, limit))?;
                // Browsers send an empty part when no file was chosen.
                if !(filename.is_empty() && data.is_empty()) {
                    upload = Some(Upload {
                        filename,
                        data: data.to_vec(),
                    });
                }
            }
            "text" => {
                let value = field.text().await.map_err(|e| multipart_error(e, limit))?;
                if !value.trim().is_empty() {
                    text = Some(value);
                }
            }
            "include_raw_text" => {
                let value = field.text().await.map_err(|e| multipart_error(e, limit))?;
                include_raw_text = parse_flag(&value)
                    .map_err(|e| AppError::Validation(format!("include_raw_text: {e}")))?;
            }
            _ => {}
        }
    }

    let options = ParseOptions { include_raw_text };
    let record = match (upload, text) {
        (None, None) => return Err(AppError::NoInput),
        (Some(_), Some(_)) => return Err(AppError::AmbiguousInput),
        (Some(Upload { filename, data }), None) => {
            info!(filename = %filename, bytes = data.len(), "Parsing uploaded resume");
            run_blocking(move || {
                let text = extract_text(&data, &filename)?;
                ensure_within_limit(&text, limit)?;
                Ok(parse_resume(&text, options))
            })
            .await?
        }
        (None, Some(text)) => {
            ensure_within_limit(&text, limit)?;
            run_blocking(move || Ok(parse_resume(&text, options))).await?
        }
    };

    info!(
        experience = record.experience.len(),
        education = record.education.len(),
        skills = record.skills.len(),
        "Parsed resume upload"
    );
    Ok(Json(record))
}
