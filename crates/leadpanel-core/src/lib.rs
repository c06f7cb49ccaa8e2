//! # leadpanel-core: Pure Business Logic for LeadPanel
//!
//! This crate is the **heart** of LeadPanel. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       LeadPanel Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Frontend (JS dashboard)                     │   │
//! │  │    Leads UI ──► Quotation Form ──► Share ──► Public View       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ (ts-rs generated bindings)             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ leadpanel-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  pricing  │  │   share   │  │ validation│  │   │
//! │  │   │   Lead    │  │  Totals   │  │  encode   │  │   rules   │  │   │
//! │  │   │ Quotation │  │  engine   │  │  decode   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORE HANDLE • NO CLOCK • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               leadpanel-store (Store Boundary)                  │   │
//! │  │        Repositories over the hosted document database           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Lead, Quotation, InventoryItem, etc.)
//! - [`pricing`] - The totals engine (subtotal, item tax, CGST/SGST/IGST)
//! - [`share`] - Public share codec (quotation snapshot ⇄ URL token)
//! - [`messages`] - Share message and WhatsApp/email deep links
//! - [`error`] - Domain error types
//! - [`validation`] - Save-time business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input =
//!    same output. The share decoder runs fully offline.
//! 2. **No I/O**: Store, network, clock and randomness are FORBIDDEN here;
//!    the store layer supplies ids, timestamps and sequence numbers.
//! 3. **Permissive Numerics**: Invalid numeric input degrades to zero (see
//!    [`types::Amount`]) so live edits never crash a computation.
//! 4. **Explicit Errors**: All errors are typed, never strings or panics.
//!
//! ## Example Usage
//!
//! ```rust
//! use leadpanel_core::pricing::compute_totals;
//! use leadpanel_core::types::{Amount, LineItem, TaxConfig};
//!
//! let items = vec![LineItem {
//!     description: "Installation".to_string(),
//!     tax_code: String::new(),
//!     quantity: Amount::parse("2"),      // form fields parse permissively
//!     unit_price: Amount::parse("100"),
//!     tax_rate_percent: Amount::parse("18"),
//! }];
//! let tax = TaxConfig {
//!     cgst_rate: Amount::new(9.0),
//!     sgst_rate: Amount::new(9.0),
//!     igst_rate: Amount::zero(),
//! };
//!
//! let totals = compute_totals(&items, &tax);
//! assert_eq!(totals.grand_total, 272.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod messages;
pub mod pricing;
pub mod share;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use leadpanel_core::Quotation` instead of
// `use leadpanel_core::types::Quotation`

pub use error::{CoreError, CoreResult, DecodeError, ShareError, ValidationError};
pub use pricing::{compute_totals, Totals};
pub use share::SharePayload;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Prefix of sequential quotation identifiers: `QUO-2024-0001`.
pub const QUOTATION_ID_PREFIX: &str = "QUO";

/// Maximum size of a logo image file before inlining, in bytes (1 MiB).
///
/// ## Business Reason
/// The logo is stored inline as a data URI and rides along in every share
/// token; an unbounded image would make profiles and share links unusable.
pub const MAX_LOGO_SOURCE_BYTES: usize = 1_048_576;

/// Maximum length of the stored logo data URI, in bytes.
///
/// A 1 MiB source image grows by 4/3 under base64, plus the `data:` header.
pub const MAX_LOGO_DATA_URI_BYTES: usize = MAX_LOGO_SOURCE_BYTES / 3 * 4 + 64;
