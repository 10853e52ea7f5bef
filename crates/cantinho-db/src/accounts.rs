//! Account registration and login.
//!
//! The access code is both the document key in `users` and the `user_id`
//! every resource is filed under. Answers are stored and compared as plain
//! text (case-folded on comparison), matching the accounts already in use.

use std::sync::Arc;

use tracing::{debug, info};

use cantinho_core::defaults::USERS_COLLECTION;
use cantinho_core::{to_document, Credentials, DocumentStore, Error, Result, StoredAccount};

/// Account operations over the `users` collection.
#[derive(Clone)]
pub struct AccountRepository {
    store: Arc<dyn DocumentStore>,
}

impl AccountRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Create an account under `credentials.code` and return the code as the
    /// new user id.
    ///
    /// Fails with [`Error::DuplicateAccount`] if the code is taken, whatever
    /// question and answer are supplied.
    pub async fn register(&self, credentials: Credentials) -> Result<String> {
        if credentials.code.trim().is_empty() {
            return Err(Error::InvalidInput("code is required".to_string()));
        }

        let code = credentials.code.clone();
        let doc = to_document(&credentials)?;
        if !self.store.create(USERS_COLLECTION, &code, doc).await? {
            debug!(
                subsystem = "db",
                component = "accounts",
                op = "register",
                user_id = %code,
                "Access code already in use"
            );
            return Err(Error::DuplicateAccount(code));
        }

        info!(
            subsystem = "db",
            component = "accounts",
            op = "register",
            user_id = %code,
            "Account registered"
        );
        Ok(code)
    }

    /// Check the security question and answer for `credentials.code` and
    /// return the code as the user id.
    ///
    /// The question id must match exactly; the answer matches ignoring case.
    pub async fn login(&self, credentials: &Credentials) -> Result<String> {
        let doc = self
            .store
            .get(USERS_COLLECTION, &credentials.code)
            .await?
            .ok_or_else(|| Error::AccountNotFound(credentials.code.clone()))?;

        let account = StoredAccount::from_document(&doc);
        if !account.accepts(&credentials.question_id, &credentials.answer) {
            debug!(
                subsystem = "db",
                component = "accounts",
                op = "login",
                user_id = %credentials.code,
                "Login rejected"
            );
            return Err(Error::InvalidCredentials);
        }

        info!(
            subsystem = "db",
            component = "accounts",
            op = "login",
            user_id = %credentials.code,
            "Login succeeded"
        );
        Ok(credentials.code.clone())
    }
}
