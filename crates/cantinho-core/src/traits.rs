//! Core traits for Cantinho abstractions.
//!
//! These traits define the seams between the account/resource logic and the
//! external document database, enabling pluggable backends and testability.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::error::Result;
use crate::models::Document;

// =============================================================================
// DOCUMENT STORE
// =============================================================================

/// A keyed collection of JSON documents.
///
/// Implementations rely on the backing store's per-document atomicity; there
/// are no cross-document transactions. Failures surface as
/// [`Error::Write`](crate::Error::Write) or [`Error::Query`](crate::Error::Query)
/// carrying the underlying message.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short backend name for logs and health output ("postgres", "memory").
    fn backend_name(&self) -> &'static str;

    /// Fetch one document, `None` if the key is absent.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>>;

    /// Write a document under `id`, replacing any existing one.
    async fn set(&self, collection: &str, id: &str, doc: Document) -> Result<()>;

    /// Remove a document. Removing an absent key is not an error.
    async fn delete(&self, collection: &str, id: &str) -> Result<()>;

    /// All documents whose top-level `field` equals `value`, unordered.
    async fn query_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &JsonValue,
    ) -> Result<Vec<(String, Document)>>;

    /// Write a document only if `id` is free. Returns false when the key
    /// already exists, leaving the stored document untouched.
    ///
    /// The default is a get followed by a set and is not atomic; backends
    /// that can do better should override it.
    async fn create(&self, collection: &str, id: &str, doc: Document) -> Result<bool> {
        if self.get(collection, id).await?.is_some() {
            return Ok(false);
        }
        self.set(collection, id, doc).await?;
        Ok(true)
    }
}

// =============================================================================
// RESOURCES
// =============================================================================

/// An owner-scoped resource kind stored in its own collection.
///
/// Ownership is only the `user_id` field inside the document; the store does
/// not enforce it.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection the documents live in.
    const COLLECTION: &'static str;

    /// Human-readable singular name, used in messages and logs.
    const LABEL: &'static str;

    /// The account code this resource belongs to.
    fn owner(&self) -> &str;
}

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Source of fresh document keys for created resources.
///
/// Keys are assumed unique; nothing checks them against the store.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}
