use thiserror::Error;

/// Unified error type for the entire trade-journal-core library.
///
/// The error surface is deliberately small: malformed persisted data and
/// unrecognizable records are recovered from silently during load (they
/// degrade to an empty journal or a dropped element), and a non-finite
/// amount on add is reported as a rejected no-op rather than an error.
/// What remains error-shaped is the storage backend itself.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Storage ─────────────────────────────────────────────────────
    #[error("Storage I/O error: {0}")]
    StorageIO(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::StorageIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}
