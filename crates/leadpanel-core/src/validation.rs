//! # Validation Module
//!
//! Save-time validation rules for LeadPanel records.
//!
//! ## Two Boundaries, Two Policies
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Where Input Is Checked                              │
//! │                                                                         │
//! │  LIVE EDIT (every keystroke)                                           │
//! │  └── Amount: invalid parse ⇒ 0, totals always computable               │
//! │      Nothing is ever rejected mid-edit                                 │
//! │                                                                         │
//! │  SAVE (create / edit-save)                                             │
//! │  └── THIS MODULE: required fields, ranges, size caps                   │
//! │      Negative quantities and prices are rejected HERE, not clamped     │
//! │      on the edit path                                                  │
//! │                                                                         │
//! │  STORE (document database)                                             │
//! │  └── External collaborator; no schema enforcement assumed              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::{CompanyProfile, InventoryItem, Lead, Quotation};
use crate::MAX_LOGO_DATA_URI_BYTES;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Lead Validators
// =============================================================================

/// Validates a lead before it is persisted.
///
/// ## Rules
/// - Name and email are required
/// - Name at most 200 characters
/// - Email must look like an address (contains `@`)
///
/// ## Example
/// ```rust
/// use chrono::Utc;
/// use leadpanel_core::types::{Lead, LeadStatus};
/// use leadpanel_core::validation::validate_lead;
///
/// let lead = Lead {
///     id: String::new(),
///     name: "Priya Sharma".to_string(),
///     email: "priya@client.example".to_string(),
///     phone: String::new(),
///     company: String::new(),
///     notes: String::new(),
///     status: LeadStatus::New,
///     assigned_to: String::new(),
///     created_at: Utc::now(),
/// };
/// assert!(validate_lead(&lead).is_ok());
/// ```
pub fn validate_lead(lead: &Lead) -> ValidationResult<()> {
    let name = lead.name.trim();
    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }
    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    let email = lead.email.trim();
    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }
    if !email.contains('@') {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must be an email address".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a tax rate, in percent.
///
/// ## Rules
/// - Must be between 0 and 100
pub fn validate_tax_rate_percent(field: &str, rate: f64) -> ValidationResult<()> {
    if !(0.0..=100.0).contains(&rate) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}

/// Validates a line-item quantity at save time.
///
/// ## Rules
/// - Must not be negative
/// - Zero is allowed (a row mid-edit may legitimately carry 0)
pub fn validate_quantity(qty: f64) -> ValidationResult<()> {
    if qty < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price at save time.
///
/// ## Rules
/// - Must not be negative
/// - Zero is allowed (free items)
pub fn validate_unit_price(price: f64) -> ValidationResult<()> {
    if price < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "unitPrice".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Quotation Validator
// =============================================================================

/// Validates a quotation before it is persisted.
///
/// ## Rules
/// - At least one line item
/// - No negative quantity or unit price in any item
/// - Every tax rate (item-level and jurisdictional) within [0, 100]
///
/// Invalid numeric INPUT never reaches this point - it already degraded to
/// zero while editing. This boundary rejects values that parsed fine but
/// violate business rules.
pub fn validate_quotation(quotation: &Quotation) -> ValidationResult<()> {
    if quotation.items.is_empty() {
        return Err(ValidationError::Required {
            field: "items".to_string(),
        });
    }

    for item in &quotation.items {
        validate_quantity(item.quantity.value())?;
        validate_unit_price(item.unit_price.value())?;
        validate_tax_rate_percent("taxRatePercent", item.tax_rate_percent.value())?;
    }

    validate_tax_rate_percent("cgstRate", quotation.tax.cgst_rate.value())?;
    validate_tax_rate_percent("sgstRate", quotation.tax.sgst_rate.value())?;
    validate_tax_rate_percent("igstRate", quotation.tax.igst_rate.value())?;

    Ok(())
}

// =============================================================================
// Inventory Validators
// =============================================================================

/// Validates an inventory item before it is persisted.
///
/// ## Rules
/// - Name is required
/// - Default price must not be negative
pub fn validate_inventory_item(item: &InventoryItem) -> ValidationResult<()> {
    if item.name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    validate_unit_price(item.unit_price.value())
}

// =============================================================================
// Company Profile Validators
// =============================================================================

/// Validates a company logo data URI.
///
/// ## Rules
/// - Must be a `data:` URI (the logo is stored inline, not as a URL)
/// - At most [`MAX_LOGO_DATA_URI_BYTES`] long - oversized logos would also
///   make every share link unusable (see [`crate::share`])
pub fn validate_logo_data_uri(logo: &str) -> ValidationResult<()> {
    if !logo.starts_with("data:") {
        return Err(ValidationError::InvalidFormat {
            field: "logo".to_string(),
            reason: "must be a data: URI".to_string(),
        });
    }

    if logo.len() > MAX_LOGO_DATA_URI_BYTES {
        return Err(ValidationError::TooLarge {
            field: "logo".to_string(),
            bytes: logo.len(),
            max: MAX_LOGO_DATA_URI_BYTES,
        });
    }

    Ok(())
}

/// Validates the company profile before it is persisted.
///
/// All fields are optional (a fresh tenant starts blank); only the logo,
/// when present, is checked.
pub fn validate_company_profile(profile: &CompanyProfile) -> ValidationResult<()> {
    if let Some(logo) = &profile.logo_data_uri {
        validate_logo_data_uri(logo)?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Amount, Currency, LeadStatus, LineItem, TaxConfig};
    use chrono::{NaiveDate, Utc};

    fn lead(name: &str, email: &str) -> Lead {
        Lead {
            id: String::new(),
            name: name.to_string(),
            email: email.to_string(),
            phone: String::new(),
            company: String::new(),
            notes: String::new(),
            status: LeadStatus::New,
            assigned_to: String::new(),
            created_at: Utc::now(),
        }
    }

    fn quotation_with(items: Vec<LineItem>, tax: TaxConfig) -> Quotation {
        Quotation {
            id: String::new(),
            identifier: "QUO-2024-0001".to_string(),
            lead_id: None,
            client_name: String::new(),
            client_email: String::new(),
            client_company: String::new(),
            client_address: String::new(),
            issue_date: NaiveDate::from_ymd_opt(2024, 3, 18).unwrap(),
            currency: Currency::Inr,
            items,
            tax,
            payment_terms: String::new(),
            totals: Default::default(),
            created_at: Utc::now(),
        }
    }

    fn item(qty: f64, price: f64, rate: f64) -> LineItem {
        LineItem {
            description: "item".to_string(),
            tax_code: String::new(),
            quantity: Amount::new(qty),
            unit_price: Amount::new(price),
            tax_rate_percent: Amount::new(rate),
        }
    }

    #[test]
    fn test_validate_lead() {
        assert!(validate_lead(&lead("Priya", "priya@client.example")).is_ok());
        assert!(validate_lead(&lead("", "priya@client.example")).is_err());
        assert!(validate_lead(&lead("   ", "priya@client.example")).is_err());
        assert!(validate_lead(&lead("Priya", "")).is_err());
        assert!(validate_lead(&lead("Priya", "not-an-email")).is_err());
        assert!(validate_lead(&lead(&"A".repeat(300), "a@b.example")).is_err());
    }

    #[test]
    fn test_validate_tax_rate_percent() {
        assert!(validate_tax_rate_percent("cgstRate", 0.0).is_ok());
        assert!(validate_tax_rate_percent("cgstRate", 18.0).is_ok());
        assert!(validate_tax_rate_percent("cgstRate", 100.0).is_ok());
        assert!(validate_tax_rate_percent("cgstRate", -1.0).is_err());
        assert!(validate_tax_rate_percent("cgstRate", 100.5).is_err());
    }

    #[test]
    fn test_negatives_rejected_at_save() {
        assert!(validate_quantity(0.0).is_ok());
        assert!(validate_quantity(2.5).is_ok());
        assert!(validate_quantity(-1.0).is_err());
        assert!(validate_unit_price(0.0).is_ok());
        assert!(validate_unit_price(-0.01).is_err());
    }

    #[test]
    fn test_validate_quotation() {
        let ok = quotation_with(vec![item(2.0, 100.0, 18.0)], TaxConfig::default());
        assert!(validate_quotation(&ok).is_ok());

        let empty = quotation_with(vec![], TaxConfig::default());
        assert!(matches!(
            validate_quotation(&empty),
            Err(ValidationError::Required { .. })
        ));

        let negative = quotation_with(vec![item(-2.0, 100.0, 0.0)], TaxConfig::default());
        assert!(matches!(
            validate_quotation(&negative),
            Err(ValidationError::MustBeNonNegative { .. })
        ));

        let bad_rate = quotation_with(
            vec![item(1.0, 10.0, 0.0)],
            TaxConfig {
                cgst_rate: Amount::new(120.0),
                ..TaxConfig::default()
            },
        );
        assert!(matches!(
            validate_quotation(&bad_rate),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_inventory_item() {
        let ok = InventoryItem {
            id: String::new(),
            name: "Site survey".to_string(),
            tax_code: String::new(),
            unit_price: Amount::new(450.0),
        };
        assert!(validate_inventory_item(&ok).is_ok());

        let unnamed = InventoryItem {
            name: "  ".to_string(),
            ..ok.clone()
        };
        assert!(validate_inventory_item(&unnamed).is_err());

        let negative = InventoryItem {
            unit_price: Amount::new(-5.0),
            ..ok
        };
        assert!(validate_inventory_item(&negative).is_err());
    }

    #[test]
    fn test_validate_logo_data_uri() {
        assert!(validate_logo_data_uri("data:image/png;base64,iVBORw0KGgo").is_ok());
        assert!(validate_logo_data_uri("https://cdn.example.com/logo.png").is_err());

        let oversized = format!(
            "data:image/png;base64,{}",
            "A".repeat(MAX_LOGO_DATA_URI_BYTES)
        );
        assert!(matches!(
            validate_logo_data_uri(&oversized),
            Err(ValidationError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_validate_company_profile_blank_is_ok() {
        assert!(validate_company_profile(&CompanyProfile::default()).is_ok());
    }
}
