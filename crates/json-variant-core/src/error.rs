//! Error types for checked extraction and checked printing.

use thiserror::Error;

use crate::variant::VariantKind;

/// Errors reported by the checked counterparts of the infallible accessors
/// and print routines.
///
/// The plain APIs never fail: `get` falls back to a zero/empty/invalid value
/// and `print_to` reports a short byte count. These variants surface the same
/// situations for callers that want to branch on them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonError {
    /// The variant's active alternative does not match the requested type.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: VariantKind,
        found: VariantKind,
    },

    /// The sink refused part of the output.
    #[error("short write: sink accepted {written} of {expected} bytes")]
    ShortWrite { written: usize, expected: usize },
}

/// Convenience alias used throughout json-variant-core.
pub type Result<T> = core::result::Result<T, JsonError>;
