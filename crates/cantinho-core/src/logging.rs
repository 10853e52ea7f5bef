//! Structured logging schema and field name constants.
//!
//! Every structured field emitted by the workspace is one of [`FIELDS`], so
//! log aggregation can query by the same names across subsystems. `tracing`
//! macros take field names as identifiers, so call sites spell the names
//! out; the API crate's `log_fields_test` fails if one is not listed here.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Degraded service, requires operator attention |
//! | WARN  | Recoverable issue, data skipped or fallback applied |
//! | INFO  | Lifecycle events (startup, shutdown), account events |
//! | DEBUG | Per-operation outcomes, config choices |
//! | TRACE | Per-document iteration |
//!
//! Security answers are never logged, at any level.

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "api", "db"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "pool", "pg_store", "accounts", "resources"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "register", "login", "create", "list_by_owner", "delete_by_id"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Document collection being operated on.
pub const COLLECTION: &str = "collection";

/// Document key being operated on.
pub const DOC_ID: &str = "doc_id";

/// Owner (account code) a resource belongs to.
pub const USER_ID: &str = "user_id";

/// Document store backend: "postgres" or "memory".
pub const STORE: &str = "store";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of documents returned or removed.
pub const RESULT_COUNT: &str = "result_count";

/// Byte length of an embedded attachment.
pub const ATTACHMENT_BYTES: &str = "attachment_bytes";

/// Pool size limit.
pub const MAX_CONNECTIONS: &str = "max_connections";

// ─── Request fields ────────────────────────────────────────────────────────

/// Declared content type of an uploaded part.
pub const CONTENT_TYPE: &str = "content_type";

/// Name of a multipart form field.
pub const FORM_FIELD: &str = "field";

/// HTTP status of a rejection.
pub const STATUS: &str = "status";

/// Display form of the error that ended an operation.
pub const ERROR: &str = "error";

// ─── Startup fields ────────────────────────────────────────────────────────

pub const LOG_FORMAT: &str = "log_format";

pub const LOG_FILE: &str = "log_file";

/// The complete schema.
pub const FIELDS: &[&str] = &[
    SUBSYSTEM,
    COMPONENT,
    OPERATION,
    COLLECTION,
    DOC_ID,
    USER_ID,
    STORE,
    DURATION_MS,
    RESULT_COUNT,
    ATTACHMENT_BYTES,
    MAX_CONNECTIONS,
    CONTENT_TYPE,
    FORM_FIELD,
    STATUS,
    ERROR,
    LOG_FORMAT,
    LOG_FILE,
];

/// True if `name` may appear as a structured field. `message` is the event
/// text itself and always allowed.
pub fn is_schema_field(name: &str) -> bool {
    name == "message" || FIELDS.contains(&name)
}
