//! # Store Error Types
//!
//! Error types for document-store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Validation/Share failure (leadpanel-core)                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds collection/id context                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Host application ← Non-fatal notice; the in-memory form state is      │
//! │                     preserved so the user may retry. No automatic      │
//! │                     retry happens at this layer.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Document-store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Document not found in its collection.
    ///
    /// ## When This Occurs
    /// - Updating or deleting a document another client already removed
    #[error("{collection} document not found: {id}")]
    NotFound { collection: String, id: String },

    /// The record failed save-time validation and was never written.
    #[error("Validation error: {0}")]
    Validation(#[from] leadpanel_core::ValidationError),

    /// A share link could not be produced for the stored record.
    #[error("Share error: {0}")]
    Share(#[from] leadpanel_core::ShareError),

    /// The backing store rejected the operation.
    ///
    /// ## When This Occurs
    /// - The hosted document database refuses a write (permissions, quota,
    ///   connectivity). The in-memory implementation never raises this;
    ///   it exists so callers handle the hosted backend uniformly.
    #[error("Store rejected the operation: {message}")]
    Rejected { message: String },
}

impl StoreError {
    /// Creates a NotFound error for a given collection and document id.
    pub fn not_found(collection: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            collection: collection.into(),
            id: id.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
