//! # Domain Types
//!
//! Core domain types used throughout LeadPanel.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Lead       │   │    Quotation    │   │  InventoryItem  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  status         │   │  identifier     │   │  name           │       │
//! │  │  name/email     │   │  items, tax     │   │  tax_code       │       │
//! │  │  assigned_to    │   │  totals         │   │  unit_price     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Amount      │   │   LeadStatus    │   │    Currency     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  f64 wrapper    │   │  New            │   │  INR ₹          │       │
//! │  │  invalid ⇒ 0    │   │  Contacted      │   │  USD $ EUR €    │       │
//! │  └─────────────────┘   │  ... (10)       │   │  GBP £          │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Stored entities have:
//! - `id`: UUID v4 - immutable, assigned by the store, used for relations
//! - Business ID where one exists: `Quotation::identifier` (QUO-YEAR-NNNN),
//!   human-readable and shown on the printed document

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::de::{IgnoredAny, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ts_rs::TS;

use crate::pricing::Totals;
use crate::QUOTATION_ID_PREFIX;

// =============================================================================
// Amount
// =============================================================================

/// A permissive monetary/numeric quantity.
///
/// ## Why Permissive?
/// Line items arrive from a live edit form and from document-store JSON
/// written by older clients. A half-typed quantity ("", "-", "12.") or a
/// numeric field stored as a string must never crash totals computation:
/// anything that doesn't parse as a finite number IS zero.
///
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  INPUT                      →  VALUE                                    │
/// │  12, 12.5, "12.5", " 7 "    →  the number                               │
/// │  "", "abc", "12,5", null    →  0                                        │
/// │  missing field, NaN, ±inf   →  0                                        │
/// │  true, {…}, […]             →  0                                        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// This is a deliberate "never fail, degrade to zero" policy for the
/// live-edit path. Save-time validation (see [`crate::validation`]) is
/// where out-of-range values are rejected.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Amount(f64);

impl Amount {
    /// Creates an Amount from a float, degrading non-finite values to zero.
    #[inline]
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Amount(value)
        } else {
            Amount(0.0)
        }
    }

    /// Parses a raw text field permissively.
    ///
    /// ## Example
    /// ```rust
    /// use leadpanel_core::types::Amount;
    ///
    /// assert_eq!(Amount::parse("12.5").value(), 12.5);
    /// assert_eq!(Amount::parse(" 7 ").value(), 7.0);
    /// assert_eq!(Amount::parse("").value(), 0.0);
    /// assert_eq!(Amount::parse("abc").value(), 0.0);
    /// ```
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(v) => Amount::new(v),
            Err(_) => Amount::zero(),
        }
    }

    /// Returns the inner value. Always finite.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Zero amount.
    #[inline]
    pub const fn zero() -> Self {
        Amount(0.0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount::new(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Serializes as a plain JSON number (the canonical form stores numbers,
/// whatever shape they arrived in).
impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.0)
    }
}

/// Deserializes permissively: number, numeric string, or nothing at all.
///
/// Every non-numeric shape collapses to zero instead of failing, so one
/// malformed field never rejects a whole stored record.
impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AmountVisitor;

        impl<'de> Visitor<'de> for AmountVisitor {
            type Value = Amount;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a number, a numeric string, or nothing")
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Amount, E> {
                Ok(Amount::new(v as f64))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Amount, E> {
                Ok(Amount::new(v as f64))
            }

            fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Amount, E> {
                Ok(Amount::new(v))
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Amount, E> {
                Ok(Amount::parse(v))
            }

            fn visit_bool<E: serde::de::Error>(self, _: bool) -> Result<Amount, E> {
                Ok(Amount::zero())
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<Amount, E> {
                Ok(Amount::zero())
            }

            fn visit_none<E: serde::de::Error>(self) -> Result<Amount, E> {
                Ok(Amount::zero())
            }

            fn visit_some<D2>(self, deserializer: D2) -> Result<Amount, D2::Error>
            where
                D2: Deserializer<'de>,
            {
                deserializer.deserialize_any(self)
            }

            fn visit_map<A>(self, mut map: A) -> Result<Amount, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
                Ok(Amount::zero())
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Amount, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(Amount::zero())
            }
        }

        deserializer.deserialize_any(AmountVisitor)
    }
}

// =============================================================================
// Currency
// =============================================================================

/// Supported quotation currencies.
///
/// Currencies are display labels only - there is no conversion between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Inr,
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    /// All supported currencies, in menu order.
    pub const ALL: [Currency; 4] = [Currency::Inr, Currency::Usd, Currency::Eur, Currency::Gbp];

    /// The ISO code shown in the currency selector.
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }

    /// The symbol prefixed to rendered amounts.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Currency::Inr => "₹",
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Inr
    }
}

// =============================================================================
// Lead Status
// =============================================================================

/// The pipeline status of a sales lead.
///
/// Serialized with the exact labels the dashboard displays, so stored
/// records read naturally in the document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum LeadStatus {
    #[serde(rename = "New")]
    New,
    #[serde(rename = "Contacted")]
    Contacted,
    #[serde(rename = "Call not picked")]
    CallNotPicked,
    #[serde(rename = "Interested")]
    Interested,
    #[serde(rename = "Visit booked")]
    VisitBooked,
    #[serde(rename = "Not interested")]
    NotInterested,
    #[serde(rename = "Quotation request")]
    QuotationRequest,
    #[serde(rename = "Negotiation")]
    Negotiation,
    #[serde(rename = "Pending Payment")]
    PendingPayment,
    #[serde(rename = "Lost")]
    Lost,
}

impl LeadStatus {
    /// All statuses, in pipeline order (drives the status dropdown).
    pub const ALL: [LeadStatus; 10] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::CallNotPicked,
        LeadStatus::Interested,
        LeadStatus::VisitBooked,
        LeadStatus::NotInterested,
        LeadStatus::QuotationRequest,
        LeadStatus::Negotiation,
        LeadStatus::PendingPayment,
        LeadStatus::Lost,
    ];

    /// The display label (matches the serialized form).
    pub const fn label(&self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::CallNotPicked => "Call not picked",
            LeadStatus::Interested => "Interested",
            LeadStatus::VisitBooked => "Visit booked",
            LeadStatus::NotInterested => "Not interested",
            LeadStatus::QuotationRequest => "Quotation request",
            LeadStatus::Negotiation => "Negotiation",
            LeadStatus::PendingPayment => "Pending Payment",
            LeadStatus::Lost => "Lost",
        }
    }
}

impl Default for LeadStatus {
    fn default() -> Self {
        LeadStatus::New
    }
}

// =============================================================================
// Lead
// =============================================================================

/// A sales lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    /// Unique identifier (UUID v4), assigned by the store.
    #[serde(default)]
    pub id: String,

    /// Contact name.
    pub name: String,

    /// Contact email.
    pub email: String,

    /// Contact phone number.
    #[serde(default)]
    pub phone: String,

    /// Company the contact represents.
    #[serde(default)]
    pub company: String,

    /// Free-form notes.
    #[serde(default)]
    pub notes: String,

    /// Current pipeline status.
    #[serde(default)]
    pub status: LeadStatus,

    /// User the lead is assigned to (from the identity collaborator).
    #[serde(default)]
    pub assigned_to: String,

    /// When the lead was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Inventory Item
// =============================================================================

/// A priced good or service in the inventory/price list.
///
/// Selecting an inventory item while editing a quotation copies its fields
/// into the line item (see [`LineItem::apply_inventory`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// Unique identifier (UUID v4), assigned by the store.
    #[serde(default)]
    pub id: String,

    /// Item/service name.
    pub name: String,

    /// Opaque tax classification code (SAC/HSN or similar).
    #[serde(default)]
    pub tax_code: String,

    /// Default unit price offered when the item is picked.
    #[serde(default)]
    #[ts(as = "f64")]
    pub unit_price: Amount,
}

// =============================================================================
// Line Item
// =============================================================================

/// One row of a quotation.
///
/// Ephemeral while the quotation is being edited; becomes part of the
/// immutable snapshot once saved. Numeric fields are [`Amount`], so a
/// half-typed value contributes zero rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Description of the goods/service.
    #[serde(default)]
    pub description: String,

    /// Opaque tax classification code.
    #[serde(default)]
    pub tax_code: String,

    /// Quantity of units.
    #[serde(default)]
    #[ts(as = "f64")]
    pub quantity: Amount,

    /// Price per unit.
    #[serde(default)]
    #[ts(as = "f64")]
    pub unit_price: Amount,

    /// Item-level tax rate, in percent.
    #[serde(default)]
    #[ts(as = "f64")]
    pub tax_rate_percent: Amount,
}

impl LineItem {
    /// An empty row as the quotation form first shows it (quantity 1).
    pub fn blank() -> Self {
        LineItem {
            description: String::new(),
            tax_code: String::new(),
            quantity: Amount::new(1.0),
            unit_price: Amount::zero(),
            tax_rate_percent: Amount::zero(),
        }
    }

    /// The pre-tax line subtotal: quantity × unit price.
    #[inline]
    pub fn subtotal(&self) -> f64 {
        self.quantity.value() * self.unit_price.value()
    }

    /// The item-level tax amount: subtotal × rate / 100.
    #[inline]
    pub fn tax_amount(&self) -> f64 {
        self.subtotal() * self.tax_rate_percent.value() / 100.0
    }

    /// Copies an inventory item's fields into this row.
    ///
    /// Quantity and item tax rate are left as typed; description, tax code
    /// and unit price come from the price list.
    pub fn apply_inventory(&mut self, item: &InventoryItem) {
        self.description = item.name.clone();
        self.tax_code = item.tax_code.clone();
        self.unit_price = item.unit_price;
    }
}

impl Default for LineItem {
    fn default() -> Self {
        LineItem::blank()
    }
}

// =============================================================================
// Tax Config
// =============================================================================

/// The three jurisdictional tax rates of a quotation, in percent.
///
/// Conceptually two co-located taxes (CGST + SGST) plus one
/// inter-jurisdictional tax (IGST), of which in practice at most the IGST
/// rate or the CGST+SGST pair is nonzero. Mutual exclusivity is NOT
/// enforced: the pricing engine sums whichever are set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct TaxConfig {
    /// Central tax rate applied to the pre-tax subtotal.
    #[ts(as = "f64")]
    pub cgst_rate: Amount,

    /// State tax rate applied to the pre-tax subtotal.
    #[ts(as = "f64")]
    pub sgst_rate: Amount,

    /// Integrated (inter-jurisdictional) tax rate applied to the pre-tax
    /// subtotal.
    #[ts(as = "f64")]
    pub igst_rate: Amount,
}

// =============================================================================
// Quotation
// =============================================================================

/// A tax-inclusive price quotation.
///
/// ## Lifecycle
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  CREATE  form submit ──► totals recomputed ──► identifier assigned      │
/// │  EDIT    full replacement ──► totals recomputed (never patched)         │
/// │  DELETE  explicit user action                                           │
/// │  SHARE   frozen snapshot encoded into a URL (later edits NOT reflected) │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// The stored totals are DERIVED: they are overwritten from items + tax
/// config on every save and are never authoritative input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Quotation {
    /// Unique identifier (UUID v4), assigned by the store.
    #[serde(default)]
    pub id: String,

    /// Sequential human-readable identifier, e.g. `QUO-2024-0001`.
    pub identifier: String,

    /// Lead this quotation was raised for, if picked from the pipeline.
    #[serde(default)]
    pub lead_id: Option<String>,

    /// Client contact name.
    #[serde(default)]
    pub client_name: String,

    /// Client email address.
    #[serde(default)]
    pub client_email: String,

    /// Client company name.
    #[serde(default)]
    pub client_company: String,

    /// Client postal address.
    #[serde(default)]
    pub client_address: String,

    /// Date the quotation is issued for.
    #[ts(as = "String")]
    pub issue_date: NaiveDate,

    /// Display currency (labels only, never converted).
    pub currency: Currency,

    /// Ordered line items.
    #[serde(default)]
    pub items: Vec<LineItem>,

    /// Jurisdictional tax rates.
    #[serde(flatten)]
    #[ts(flatten)]
    pub tax: TaxConfig,

    /// Payment terms printed on the document.
    #[serde(default)]
    pub payment_terms: String,

    /// Derived totals, recomputed by the pricing engine on every save.
    #[serde(flatten)]
    #[ts(flatten)]
    pub totals: Totals,

    /// When the quotation record was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Quotation {
    /// Builds the next sequential identifier: `QUO-<year>-<NNNN>`.
    ///
    /// ## Example
    /// ```rust
    /// use leadpanel_core::types::Quotation;
    ///
    /// assert_eq!(Quotation::next_identifier(2024, 0), "QUO-2024-0001");
    /// assert_eq!(Quotation::next_identifier(2024, 41), "QUO-2024-0042");
    /// ```
    pub fn next_identifier(year: i32, existing: usize) -> String {
        format!("{}-{}-{:04}", QUOTATION_ID_PREFIX, year, existing + 1)
    }

    /// Recomputes the derived totals from items + tax config.
    ///
    /// Every save path MUST call this (the quotation repository does);
    /// totals are never hand-edited or patched field-by-field.
    pub fn recompute_totals(&mut self) {
        self.totals = crate::pricing::compute_totals(&self.items, &self.tax);
    }
}

// =============================================================================
// Company Profile
// =============================================================================

/// The issuing company's profile settings. Singleton per tenant.
///
/// Read by the pricing/share flow only for display fields, never for
/// computation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyProfile {
    /// Company display name.
    pub name: String,

    /// Postal address, printed on quotations.
    pub address: String,

    /// Tax registration id (GSTIN or similar), printed when present.
    pub tax_registration_id: String,

    /// Default payment terms copied onto new quotations.
    pub payment_terms: String,

    /// Company logo as an inline `data:` URI, size-capped at save time
    /// (see [`crate::validation::validate_logo_data_uri`]).
    pub logo_data_uri: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================
