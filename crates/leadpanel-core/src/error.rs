//! # Error Types
//!
//! Domain-specific error types for leadpanel-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  leadpanel-core errors (this file)                                     │
//! │  ├── CoreError        - General domain errors                          │
//! │  ├── ValidationError  - Save-time input validation failures            │
//! │  ├── ShareError       - Share-link production failures                 │
//! │  └── DecodeError      - Share-token decoding failures                  │
//! │                                                                         │
//! │  leadpanel-store errors (separate crate)                               │
//! │  └── StoreError       - Document-store operation failures              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → host application     │
//! │  DecodeError never propagates upward: the router treats a failed       │
//! │  decode as "not a share link" and falls back to the normal entry path  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, id, sizes)
//! 3. Errors are enum variants, never String
//! 4. Invalid NUMERIC input is NOT an error - it degrades to zero (see
//!    `types::Amount`); these types cover everything else

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Share-link error (wraps ShareError).
    #[error("Share error: {0}")]
    Share(#[from] ShareError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Save-time input validation errors.
///
/// These errors occur when a record submitted for persistence doesn't meet
/// requirements. They are deliberately NOT raised on the live-edit path,
/// where partially typed numeric input degrades to zero instead.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    ///
    /// ## When This Occurs
    /// - Negative quantity or unit price submitted for save
    ///
    /// The live-edit path never raises this: an in-progress "-" keystroke
    /// parses to a finite negative only once complete, and rejection happens
    /// at the save boundary.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g., missing data-URI prefix, malformed email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Embedded payload exceeds its byte ceiling.
    ///
    /// ## When This Occurs
    /// - Company logo data URI larger than the configured cap
    #[error("{field} is {bytes} bytes, exceeding the {max}-byte limit")]
    TooLarge {
        field: String,
        bytes: usize,
        max: usize,
    },
}

// =============================================================================
// Share Errors
// =============================================================================

/// Share-token decoding failures.
///
/// Every stage of `share::decode` collapses into one of these variants:
/// the caller's only recovery is to treat the fragment as NOT a share link
/// and proceed to the normal authenticated flow. Partial data is never
/// returned.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The binary-to-text transform could not be reversed.
    ///
    /// ## When This Occurs
    /// - Token truncated in transit (URL cut off by a messenger)
    /// - Token corrupted or hand-edited
    #[error("share token is not valid URL-safe base64: {0}")]
    InvalidTransform(#[from] base64::DecodeError),

    /// The decoded bytes are not UTF-8 text.
    #[error("share token does not decode to UTF-8 text")]
    InvalidText(#[from] std::string::FromUtf8Error),

    /// The canonical text form could not be parsed.
    ///
    /// ## When This Occurs
    /// - Malformed JSON
    /// - Required fields missing from the envelope
    #[error("share payload is not a valid quotation snapshot: {0}")]
    InvalidStructure(#[from] serde_json::Error),

    /// The envelope carries a format version this build cannot read.
    ///
    /// Rejecting unknown versions here is what lets the canonical form
    /// evolve without old tokens being silently misparsed.
    #[error("unsupported share format version {found} (supported: {supported})")]
    UnsupportedVersion { found: u8, supported: u8 },
}

/// Share-link production failures.
#[derive(Debug, Error)]
pub enum ShareError {
    /// Decoding failed (wraps DecodeError).
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The encoded token exceeds the configured ceiling.
    ///
    /// ## When This Occurs
    /// - A large embedded logo inflates the snapshot past what a URL can
    ///   reliably carry; emitting the link anyway would fail silently on
    ///   the receiving side
    #[error("share token is {bytes} bytes, exceeding the {max}-byte ceiling")]
    PayloadTooLarge { bytes: usize, max: usize },

    /// The snapshot could not be serialized to the canonical text form.
    #[error("failed to serialize share payload: {0}")]
    Serialize(serde_json::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
