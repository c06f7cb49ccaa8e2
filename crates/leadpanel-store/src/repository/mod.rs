//! # Repository Module
//!
//! Typed repositories over the store client, one per collection.
//!
//! ## Repository Responsibilities
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  LeadRepository       create (authorship tag), status updates          │
//! │  QuotationRepository  totals recomputation + identifier at save,       │
//! │                       share-link production                            │
//! │  InventoryRepository  price-list CRUD                                  │
//! │  SettingsRepository   company-profile singleton, logo cap              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod inventory;
pub mod lead;
pub mod quotation;
pub mod settings;

pub use inventory::InventoryRepository;
pub use lead::LeadRepository;
pub use quotation::QuotationRepository;
pub use settings::SettingsRepository;
