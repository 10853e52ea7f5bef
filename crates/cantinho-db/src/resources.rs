//! Generic create / list-by-owner / delete-by-id for owner-scoped resources.
//!
//! One repository type serves every resource kind; the kind picks the
//! collection through [`Resource::COLLECTION`].

use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use cantinho_core::defaults::OWNER_FIELD;
use cantinho_core::{to_document, DocumentStore, IdGenerator, Record, Resource, Result};

/// CRUD operations for resource kind `R`.
pub struct ResourceRepository<R> {
    store: Arc<dyn DocumentStore>,
    ids: Arc<dyn IdGenerator>,
    _kind: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceRepository<R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            ids: self.ids.clone(),
            _kind: PhantomData,
        }
    }
}

impl<R: Resource> ResourceRepository<R> {
    pub fn new(store: Arc<dyn DocumentStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            store,
            ids,
            _kind: PhantomData,
        }
    }

    /// Store `fields` under a freshly generated id and return them with it.
    ///
    /// The id is not checked against existing documents.
    pub async fn create(&self, fields: R) -> Result<Record<R>> {
        let id = self.ids.generate();
        let doc = to_document(&fields)?;
        self.store.set(R::COLLECTION, &id, doc).await?;

        debug!(
            subsystem = "db",
            component = "resources",
            op = "create",
            collection = R::COLLECTION,
            doc_id = %id,
            user_id = fields.owner(),
            "{} created",
            R::LABEL
        );
        Ok(Record { id, fields })
    }

    /// Every record whose `user_id` equals `user_id`, in store order.
    ///
    /// Documents that no longer decode as `R` are skipped with a warning.
    pub async fn list_by_owner(&self, user_id: &str) -> Result<Vec<Record<R>>> {
        let owner = JsonValue::String(user_id.to_string());
        let docs = self
            .store
            .query_by_field(R::COLLECTION, OWNER_FIELD, &owner)
            .await?;

        let mut records = Vec::with_capacity(docs.len());
        for (id, doc) in docs {
            match serde_json::from_value::<R>(JsonValue::Object(doc)) {
                Ok(fields) => records.push(Record { id, fields }),
                Err(e) => warn!(
                    subsystem = "db",
                    component = "resources",
                    op = "list_by_owner",
                    collection = R::COLLECTION,
                    doc_id = %id,
                    error = %e,
                    "Skipping undecodable document"
                ),
            }
        }

        debug!(
            subsystem = "db",
            component = "resources",
            op = "list_by_owner",
            collection = R::COLLECTION,
            user_id,
            result_count = records.len(),
            "Listed {} records",
            R::LABEL
        );
        Ok(records)
    }

    /// Delete the document at `id`. No ownership check is made, and an
    /// unknown id succeeds.
    pub async fn delete_by_id(&self, id: &str) -> Result<()> {
        self.store.delete(R::COLLECTION, id).await?;
        debug!(
            subsystem = "db",
            component = "resources",
            op = "delete_by_id",
            collection = R::COLLECTION,
            doc_id = id,
            "{} deleted",
            R::LABEL
        );
        Ok(())
    }
}
