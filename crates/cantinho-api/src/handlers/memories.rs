//! Memory creation from `multipart/form-data`.
//!
//! Text parts: `user_id`, `title` (`titulo`), `date` (`data`),
//! `description` (`descricao`). Optional file part: `image` (`imagem`).
//! A file part with an empty filename is how browsers send "no file
//! selected" and is treated as no attachment.

use axum::extract::multipart::{Field, MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

use cantinho_core::{Attachment, Memory, NewMemory, Record};

use crate::error::ApiError;
use crate::AppState;

/// Text parts collected so far; each must be present exactly once by the end.
#[derive(Debug, Default)]
struct MemoryForm {
    user_id: Option<String>,
    title: Option<String>,
    date: Option<String>,
    description: Option<String>,
    attachment: Option<Attachment>,
}

impl MemoryForm {
    fn into_parts(self) -> Result<(NewMemory, Option<Attachment>), ApiError> {
        let fields = NewMemory {
            user_id: required(self.user_id, "user_id")?,
            title: required(self.title, "title")?,
            date: required(self.date, "date")?,
            description: required(self.description, "description")?,
        };
        Ok((fields, self.attachment))
    }
}

fn required(value: Option<String>, name: &str) -> Result<String, ApiError> {
    value.ok_or_else(|| ApiError::Unprocessable(format!("Missing form field: {}", name)))
}

fn form_error(err: MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(err.body_text())
    } else {
        ApiError::Unprocessable(format!("Failed to read form: {}", err.body_text()))
    }
}

async fn read_text(field: Field<'_>) -> Result<String, ApiError> {
    field.text().await.map_err(form_error)
}

/// Read the file part. `None` when the client sent an empty filename.
async fn read_attachment(field: Field<'_>) -> Result<Option<Attachment>, ApiError> {
    let has_file = field.file_name().is_some_and(|name| !name.is_empty());
    let content_type = field.content_type().map(str::to_string);
    let bytes = field.bytes().await.map_err(form_error)?;

    if !has_file {
        return Ok(None);
    }
    Ok(Some(Attachment::new(content_type.as_deref(), bytes.to_vec())))
}

/// `POST /memorias`
///
/// The whole form, attachment included, is read before anything is written.
pub async fn create(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Record<Memory>>, ApiError> {
    let mut multipart =
        multipart.map_err(|rejection| ApiError::Unprocessable(rejection.body_text()))?;

    let mut form = MemoryForm::default();
    while let Some(field) = multipart.next_field().await.map_err(form_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "user_id" => form.user_id = Some(read_text(field).await?),
            "title" | "titulo" => form.title = Some(read_text(field).await?),
            "date" | "data" => form.date = Some(read_text(field).await?),
            "description" | "descricao" => form.description = Some(read_text(field).await?),
            "image" | "imagem" => form.attachment = read_attachment(field).await?,
            other => debug!(field = other, "Ignoring unknown form field"),
        }
    }

    let (fields, attachment) = form.into_parts()?;
    if let Some(ref attachment) = attachment {
        debug!(
            user_id = %fields.user_id,
            content_type = %attachment.content_type,
            attachment_bytes = attachment.bytes.len(),
            "Embedding memory attachment"
        );
    }

    let record = state
        .db
        .resources::<Memory>()?
        .create(Memory::new(fields, attachment.as_ref()))
        .await?;
    Ok(Json(record))
}
