//! Centralized default constants for the Cantinho backend.
//!
//! Collection names are part of the persisted state layout shared with the
//! existing web client and must not change.

// =============================================================================
// COLLECTIONS
// =============================================================================

/// Accounts, keyed by access code.
pub const USERS_COLLECTION: &str = "users";

/// Reminders, keyed by generated id.
pub const REMINDERS_COLLECTION: &str = "lembretes";

/// Medications, keyed by generated id.
pub const MEDICATIONS_COLLECTION: &str = "medicamentos";

/// Routines, keyed by generated id.
pub const ROUTINES_COLLECTION: &str = "rotinas";

/// Memories, keyed by generated id.
pub const MEMORIES_COLLECTION: &str = "memorias";

/// Notes, keyed by generated id.
pub const NOTES_COLLECTION: &str = "notas";

/// Field every resource document carries for ownership filtering.
pub const OWNER_FIELD: &str = "user_id";

// =============================================================================
// ATTACHMENTS
// =============================================================================

/// Content type recorded when an uploaded file part declares none.
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Default request body limit (memory images travel inline).
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

// =============================================================================
// SERVER
// =============================================================================

/// Default bind host.
pub const SERVER_HOST: &str = "0.0.0.0";

/// Default bind port (the web client expects 8000 locally).
pub const SERVER_PORT: u16 = 8000;

// =============================================================================
// RESPONSE MESSAGES
// =============================================================================

/// Returned by a successful registration.
pub const MSG_ACCOUNT_CREATED: &str = "Account created successfully!";

/// Returned by a successful login.
pub const MSG_LOGIN_OK: &str = "Login successful";
