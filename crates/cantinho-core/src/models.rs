//! Domain models for accounts and owner-scoped resources.
//!
//! Field names on the wire are the canonical English names. The legacy
//! Portuguese names used by the first web client are accepted as input
//! aliases so older clients and older stored documents still decode.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::data_uri::Attachment;
use crate::defaults::{
    MEDICATIONS_COLLECTION, MEMORIES_COLLECTION, NOTES_COLLECTION, REMINDERS_COLLECTION,
    ROUTINES_COLLECTION,
};
use crate::error::{Error, Result};
use crate::traits::Resource;

/// A schemaless stored document: a JSON object of field name to value.
pub type Document = serde_json::Map<String, JsonValue>;

/// Serialize a value into a document. Only values that serialize to a JSON
/// object are documents.
pub fn to_document<T: Serialize>(value: &T) -> Result<Document> {
    match serde_json::to_value(value)? {
        JsonValue::Object(map) => Ok(map),
        other => Err(Error::Serialization(format!(
            "expected a JSON object, got {}",
            other
        ))),
    }
}

// =============================================================================
// ACCOUNTS
// =============================================================================

/// Access code plus security question/answer, as submitted at registration
/// and at login.
///
/// The same shape is persisted verbatim in the `users` collection under the
/// document key `code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub code: String,
    pub question_id: String,
    pub answer: String,
}

/// An account document as read back from the store.
///
/// Legacy accounts may predate the security question, so both fields are
/// optional. A missing (or non-string) field is "no value", which never
/// matches a supplied credential.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredAccount {
    pub question_id: Option<String>,
    pub answer: Option<String>,
}

impl StoredAccount {
    /// Read the credential fields out of a raw account document.
    pub fn from_document(doc: &Document) -> Self {
        let text = |field: &str| doc.get(field).and_then(JsonValue::as_str).map(String::from);
        Self {
            question_id: text("question_id"),
            answer: text("answer"),
        }
    }

    /// True when the question matches exactly and the answer matches
    /// ignoring case.
    pub fn accepts(&self, question_id: &str, answer: &str) -> bool {
        match (&self.question_id, &self.answer) {
            (Some(stored_q), Some(stored_a)) => {
                stored_q == question_id && stored_a.to_lowercase() == answer.to_lowercase()
            }
            _ => false,
        }
    }
}

/// Response body for register and login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub user_id: String,
}

// =============================================================================
// RESOURCES
// =============================================================================

/// A stored resource together with its generated document key.
///
/// Serializes flat: `{"id": ..., <resource fields>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record<R> {
    pub id: String,
    #[serde(flatten)]
    pub fields: R,
}

/// A reminder for a one-off or recurring task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub user_id: String,
    #[serde(alias = "tarefa")]
    pub task: String,
    #[serde(alias = "data")]
    pub date: String,
    #[serde(alias = "hora")]
    pub time: String,
    #[serde(alias = "repeticao")]
    pub recurrence: String,
}

impl Resource for Reminder {
    const COLLECTION: &'static str = REMINDERS_COLLECTION;
    const LABEL: &'static str = "Reminder";

    fn owner(&self) -> &str {
        &self.user_id
    }
}

/// A medication with its dosing time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medication {
    pub user_id: String,
    #[serde(alias = "nome")]
    pub name: String,
    #[serde(alias = "horario")]
    pub time: String,
    #[serde(alias = "dosagem")]
    pub dosage: String,
}

impl Resource for Medication {
    const COLLECTION: &'static str = MEDICATIONS_COLLECTION;
    const LABEL: &'static str = "Medication";

    fn owner(&self) -> &str {
        &self.user_id
    }
}

/// A daily routine step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routine {
    pub user_id: String,
    #[serde(alias = "tarefa")]
    pub task: String,
    #[serde(alias = "repeticao")]
    pub recurrence: String,
    #[serde(alias = "horario")]
    pub time: String,
}

impl Resource for Routine {
    const COLLECTION: &'static str = ROUTINES_COLLECTION;
    const LABEL: &'static str = "Routine";

    fn owner(&self) -> &str {
        &self.user_id
    }
}

/// A memory, optionally carrying an inline image as a data URI.
///
/// `image` is always serialized, as `null` when there is no attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory {
    pub user_id: String,
    #[serde(alias = "titulo")]
    pub title: String,
    #[serde(alias = "data")]
    pub date: String,
    #[serde(alias = "descricao")]
    pub description: String,
    #[serde(default, alias = "imagem_url")]
    pub image: Option<String>,
}

impl Memory {
    /// Build a memory from its text fields and an optional uploaded file.
    pub fn new(fields: NewMemory, attachment: Option<&Attachment>) -> Self {
        Self {
            user_id: fields.user_id,
            title: fields.title,
            date: fields.date,
            description: fields.description,
            image: attachment.map(Attachment::to_data_uri),
        }
    }
}

impl Resource for Memory {
    const COLLECTION: &'static str = MEMORIES_COLLECTION;
    const LABEL: &'static str = "Memory";

    fn owner(&self) -> &str {
        &self.user_id
    }
}

/// Text fields of a memory upload, before the attachment is embedded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewMemory {
    pub user_id: String,
    pub title: String,
    pub date: String,
    pub description: String,
}

/// A free-form note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub user_id: String,
    #[serde(alias = "titulo")]
    pub title: String,
    #[serde(alias = "conteudo")]
    pub content: String,
}

impl Resource for Note {
    const COLLECTION: &'static str = NOTES_COLLECTION;
    const LABEL: &'static str = "Note";

    fn owner(&self) -> &str {
        &self.user_id
    }
}

/// Acknowledgement returned by delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

impl DeleteResponse {
    /// The acknowledgement for a resource kind, e.g. "Reminder deleted successfully".
    pub fn for_resource<R: Resource>() -> Self {
        Self {
            message: format!("{} deleted successfully", R::LABEL),
        }
    }
}
