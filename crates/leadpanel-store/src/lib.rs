//! # leadpanel-store: Document-Store Boundary for LeadPanel
//!
//! This crate realizes the persistent-store collaborator interface the core
//! consumes: create/update/delete plus live subscriptions that yield the
//! current ordered collection whenever anything changes.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       LeadPanel Data Flow                               │
//! │                                                                         │
//! │  Host application (dashboard, forms)                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  leadpanel-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐    ┌─────────────┐  │   │
//! │  │   │  StoreClient  │    │  Repositories  │    │ Subscription│  │   │
//! │  │   │  (client.rs)  │    │  (lead.rs,     │    │  full-      │  │   │
//! │  │   │               │    │   quotation.rs,│    │  snapshot   │  │   │
//! │  │   │ leads         │◄───│   inventory.rs,│    │  listeners  │  │   │
//! │  │   │ quotations    │    │   settings.rs) │    │             │  │   │
//! │  │   │ inventory     │    └────────────────┘    └─────────────┘  │   │
//! │  │   │ settings      │                                            │   │
//! │  │   └───────────────┘                                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  leadpanel-core: totals recomputed on EVERY save, share links          │
//! │  produced from frozen snapshots                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`client`] - Store client, collections, singleton document, listeners
//! - [`error`] - Store error types
//! - [`repository`] - Repository implementations (lead, quotation, etc.)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use leadpanel_store::{QuotationRepository, StoreClient};
//!
//! // Construct one client, pass it where needed - no globals
//! let client = StoreClient::new();
//! let quotations = QuotationRepository::new(client.clone());
//!
//! // Totals are derived at save; the caller never supplies them
//! let id = quotations.create(draft).await?;
//! let url = quotations.share_url(&id, "https://leads.example.com/app").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod client;
pub mod error;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use client::{Collection, Document, SingletonDocument, StoreClient, Subscription};
pub use error::{StoreError, StoreResult};

// Repository re-exports for convenience
pub use repository::inventory::InventoryRepository;
pub use repository::lead::LeadRepository;
pub use repository::quotation::QuotationRepository;
pub use repository::settings::SettingsRepository;
